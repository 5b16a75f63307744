use core::time::Duration;

/// The fixed origin of the timestamp field: Tuesday, February 2, 2021
/// 00:00:00 UTC.
pub const EPOCH: Duration = Duration::from_millis(1_612_224_000_000);

/// [`EPOCH`] as signed milliseconds since 1970-01-01 UTC.
pub const EPOCH_MILLIS: i64 = EPOCH.as_millis() as i64;

/// A source of wall-clock time in milliseconds.
///
/// Generators read the clock through this trait so that tests can freeze,
/// step, or rewind time.
///
/// # Example
///
/// ```
/// use dcflake::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1_700_000_000_000
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1_700_000_000_000);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    fn current_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}
