//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Screen triggers (entering a screen, pressing a key)
/// - Results delivered by a background subscription
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
