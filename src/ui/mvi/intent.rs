//! Intent marker trait.

/// Something that happened: a key press, a worker result, a timer tick.
///
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
