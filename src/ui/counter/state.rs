use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub(super) count: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Text shown on the control: `Clicked {count} times`.
    pub fn label(&self) -> String {
        format!("Clicked {} times", self.count)
    }

    pub(super) fn incremented(self) -> Self {
        // Unreachable in interactive use; saturate so the count never wraps to zero.
        Self {
            count: self.count.saturating_add(1),
        }
    }
}
