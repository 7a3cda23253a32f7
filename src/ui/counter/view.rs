//! The counter view: owns the count and produces its textual render.
//!
//! The host creates a view, calls [`CounterView::render`] whenever it
//! draws, and forwards activation events to [`CounterView::on_activate`].
//! Dropping the view discards the count; a new view starts from zero.

use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

/// Output of a single render pass.
///
/// The label is drawn inside the view's only activatable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRender {
    pub label: String,
}

#[derive(Debug)]
pub struct CounterView {
    state: CounterState,
    /// Set by a state change, cleared when the host re-renders.
    needs_render: bool,
}

impl Default for CounterView {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterView {
    pub fn new() -> Self {
        Self {
            state: CounterState::default(),
            needs_render: true,
        }
    }

    pub fn count(&self) -> u64 {
        self.state.count()
    }

    pub fn render(&self) -> CounterRender {
        CounterRender {
            label: self.state.label(),
        }
    }

    pub fn on_activate(&mut self) {
        self.state = CounterReducer::reduce(self.state, CounterIntent::Activate);
        self.needs_render = true;
        tracing::debug!(count = self.state.count(), "counter activated");
    }

    /// Returns whether a re-render was requested since the last call.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }
}
