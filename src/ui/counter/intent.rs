use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// The single activatable control was triggered (key press or click).
    Activate,
}

impl Intent for CounterIntent {}
