//! Base trait for component state snapshots.

/// Marker trait for component state.
///
/// The presentation layer only ever sees these as read-only snapshots, so
/// they must be cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
