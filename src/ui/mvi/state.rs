//! UI state marker trait.

/// A self-contained snapshot of one feature's state.
///
/// `Default` is the initial state and also what `std::mem::take` leaves
/// behind while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
