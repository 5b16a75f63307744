use core::cmp::Ordering;

use parking_lot::Mutex;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Component, Error, Result},
    generator::Poll,
    id::SnowflakeId,
    time::{SystemClock, TimeSource},
};

/// Mutable generator state. Both fields change together under one lock.
#[derive(Debug, Default)]
struct State {
    /// Unix milliseconds of the most recently issued ID. Zero until the first
    /// ID is generated.
    last_timestamp: i64,
    sequence: i64,
}

/// A lock-based Snowflake ID generator that is safe to share across threads.
///
/// The sequence counter and last-seen timestamp live behind a single
/// [`parking_lot::Mutex`]. Every call to [`Self::next_id`] runs as one
/// critical section, so IDs from one instance are strictly increasing as long
/// as the clock does not move backwards.
///
/// Independent instances share nothing. Two instances with different
/// datacenter/node pairs never produce the same ID.
///
/// ## Throughput
/// At most 4096 IDs per millisecond per instance. Past that, callers block
/// until the clock ticks.
///
/// ## Clock regression
/// A clock that steps backwards is treated exactly like a clock that moved
/// forward: the sequence resets and the earlier timestamp is used. This may
/// reissue IDs that were already handed out. With the `tracing` feature
/// enabled a `warn` event is emitted whenever it happens.
#[derive(Debug)]
pub struct SnowflakeGenerator<T = SystemClock>
where
    T: TimeSource,
{
    datacenter_id: i64,
    node_id: i64,
    state: Mutex<State>,
    time: T,
}

impl SnowflakeGenerator<SystemClock> {
    /// Creates a generator reading the system wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `datacenter_id` or `node_id`
    /// is negative or greater than 31.
    ///
    /// # Example
    /// ```
    /// use dcflake::SnowflakeGenerator;
    ///
    /// assert!(SnowflakeGenerator::new(31, 0).is_ok());
    /// assert!(SnowflakeGenerator::new(32, 0).is_err());
    /// assert!(SnowflakeGenerator::new(0, -1).is_err());
    /// ```
    pub fn new(datacenter_id: i64, node_id: i64) -> Result<Self> {
        Self::with_clock(datacenter_id, node_id, SystemClock)
    }
}

impl<T> SnowflakeGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator that reads time from `time`.
    ///
    /// Sequence and last timestamp both start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `datacenter_id` or `node_id`
    /// is negative or greater than 31.
    pub fn with_clock(datacenter_id: i64, node_id: i64, time: T) -> Result<Self> {
        validate(Component::Datacenter, datacenter_id, SnowflakeId::MAX_DATACENTER_ID)?;
        validate(Component::Node, node_id, SnowflakeId::MAX_NODE_ID)?;
        Ok(Self {
            datacenter_id,
            node_id,
            state: Mutex::new(State::default()),
            time,
        })
    }

    pub fn datacenter_id(&self) -> i64 {
        self.datacenter_id
    }

    pub fn node_id(&self) -> i64 {
        self.node_id
    }

    /// Generates the next ID, blocking if the current millisecond is
    /// exhausted.
    ///
    /// The lock is held for the whole call, including the spin while waiting
    /// for the clock to tick, so concurrent callers are serialized behind an
    /// exhausted millisecond.
    ///
    /// This never fails. If the clock never advances past an exhausted
    /// millisecond, it never returns.
    ///
    /// # Example
    /// ```
    /// use dcflake::SnowflakeGenerator;
    ///
    /// let generator = SnowflakeGenerator::new(1, 2).unwrap();
    /// let a = generator.next_id();
    /// let b = generator.next_id();
    /// assert!(a < b);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> SnowflakeId {
        let mut state = self.state.lock();
        let mut now = self.time.current_millis();

        match now.cmp(&state.last_timestamp) {
            Ordering::Equal => {
                state.sequence = (state.sequence + 1) & SnowflakeId::MAX_SEQUENCE;
                if state.sequence == 0 {
                    now = self.wait_next_millis(state.last_timestamp);
                }
            }
            Ordering::Greater => state.sequence = 0,
            Ordering::Less => {
                Self::cold_clock_behind(now, state.last_timestamp);
                state.sequence = 0;
            }
        }

        state.last_timestamp = now;
        self.compose(now, state.sequence)
    }

    /// Attempts to generate the next ID without blocking.
    ///
    /// Behaves like [`Self::next_id`], except that when the current
    /// millisecond is exhausted it leaves the state untouched and returns
    /// [`Poll::Pending`] instead of spinning.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> Poll {
        let mut state = self.state.lock();
        let now = self.time.current_millis();

        match now.cmp(&state.last_timestamp) {
            Ordering::Equal => {
                if state.sequence >= SnowflakeId::MAX_SEQUENCE {
                    return Poll::Pending { yield_for: 1 };
                }
                state.sequence += 1;
            }
            Ordering::Greater => state.sequence = 0,
            Ordering::Less => {
                Self::cold_clock_behind(now, state.last_timestamp);
                state.sequence = 0;
            }
        }

        state.last_timestamp = now;
        Poll::Ready {
            id: self.compose(now, state.sequence),
        }
    }

    fn compose(&self, now: i64, sequence: i64) -> SnowflakeId {
        SnowflakeId::from_unix_millis(now, self.datacenter_id, self.node_id, sequence)
    }

    /// Spins until the clock reads strictly later than `last_timestamp`.
    fn wait_next_millis(&self, last_timestamp: i64) -> i64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(last_timestamp, "sequence exhausted, waiting for next millisecond");

        loop {
            let now = self.time.current_millis();
            if now > last_timestamp {
                break now;
            }
            core::hint::spin_loop();
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: i64, last_timestamp: i64) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            now,
            last_timestamp,
            behind_ms = last_timestamp - now,
            "clock moved backwards, IDs may repeat"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (now, last_timestamp);
    }
}

fn validate(component: Component, value: i64, max: i64) -> Result<()> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            component,
            value,
            max,
        })
    }
}
