//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are discrete signals delivered by the host (a key press,
/// a mouse click). Reducers consume them to produce new states.
pub trait Intent: Send + 'static {}
