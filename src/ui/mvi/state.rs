//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale by reducers, never patched in place, and
/// carry everything a view needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
