//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to snapshot, compared to detect
/// changes, and defaulted to obtain the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
