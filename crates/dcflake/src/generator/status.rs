use crate::id::SnowflakeId;

/// The outcome of a non-blocking generation attempt.
///
/// - [`Poll::Ready`] carries a freshly generated ID.
/// - [`Poll::Pending`] means the sequence for the current millisecond is
///   exhausted and the caller should back off for `yield_for` milliseconds
///   before trying again.
///
/// # Example
///
/// ```
/// use dcflake::{Poll, SnowflakeGenerator};
///
/// let generator = SnowflakeGenerator::new(0, 0).unwrap();
/// let id = loop {
///     match generator.poll_id() {
///         Poll::Ready { id } => break id,
///         Poll::Pending { .. } => std::thread::yield_now(),
///     }
/// };
/// assert_eq!(id.node_id(), 0);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated ID.
        id: SnowflakeId,
    },
    /// No ID could be generated in the current millisecond.
    Pending {
        /// Milliseconds to wait before retrying.
        yield_for: i64,
    },
}
