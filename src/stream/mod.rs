//! Single-subscriber push streams.
//!
//! An [`Observable`] is a lazy producer: nothing runs until it is subscribed
//! to, and subscribing consumes it, so each invocation has at most one
//! subscriber. Producers push [`Event`]s through an [`Emitter`]; the stream
//! completes when the producer returns.
//!
//! ```text
//! producer ──Emitter──→ channel ──→ ObservableStream ──→ subscriber callback
//!                                        ↑
//!                             Subscription (abort on drop)
//! ```

mod observable;

pub use observable::{Emitter, Event, Observable, ObservableStream, Subscription};
