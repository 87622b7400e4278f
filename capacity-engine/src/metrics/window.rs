//! Bounded history windows.

/// How many rows of a route's history the per-view calculators look at.
pub const WINDOW_CAP: usize = 30;

/// The leading up-to-[`WINDOW_CAP`] rows of a route slice, in source
/// order.
///
/// The source files are pre-sorted chronologically, so this is the
/// route's most recent planning horizon as the datasets present it. The
/// full-history roll-up in [`super::route_impact`] deliberately does not
/// use this cap.
pub fn window<T>(rows: &[T]) -> &[T] {
    &rows[..rows.len().min(WINDOW_CAP)]
}
