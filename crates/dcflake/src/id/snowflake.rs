use core::fmt;

use crate::time::EPOCH_MILLIS;

/// A 64-bit Snowflake ID carrying datacenter and node fields.
///
/// - 1 bit unused (sign)
/// - 41 bits timestamp (ms since [`EPOCH`])
/// - 5 bits datacenter ID
/// - 5 bits node ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63     63 62          22 21          17 16      12 11         0
///              +--------+--------------+--------------+----------+-----------+
///  Field:      | unused | timestamp    | datacenter   | node     | sequence  |
///              +--------+--------------+--------------+----------+-----------+
///              |<---------- MSB ---------- 64 bits ---------- LSB ---------->|
/// ```
///
/// The raw value is an `i64`. Ordering of `SnowflakeId` follows the raw
/// integer, so IDs sort by time first.
///
/// [`EPOCH`]: crate::EPOCH
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SnowflakeId {
    id: i64,
}

impl SnowflakeId {
    /// Width of the sequence field.
    pub const SEQUENCE_BITS: u32 = 12;

    /// Width of the node ID field.
    pub const NODE_BITS: u32 = 5;

    /// Width of the datacenter ID field.
    pub const DATACENTER_BITS: u32 = 5;

    /// Bitmask for extracting the 12-bit sequence field. Occupies bits 0
    /// through 11.
    pub const SEQUENCE_MASK: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Bitmask for extracting the 5-bit node ID field. Occupies bits 12
    /// through 16.
    pub const NODE_MASK: i64 = (1 << Self::NODE_BITS) - 1;

    /// Bitmask for extracting the 5-bit datacenter ID field. Occupies bits 17
    /// through 21.
    pub const DATACENTER_MASK: i64 = (1 << Self::DATACENTER_BITS) - 1;

    /// Number of bits to shift the node ID to its position (bit 12).
    pub const NODE_SHIFT: u32 = Self::SEQUENCE_BITS;

    /// Number of bits to shift the datacenter ID to its position (bit 17).
    pub const DATACENTER_SHIFT: u32 = Self::SEQUENCE_BITS + Self::NODE_BITS;

    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 =
        Self::SEQUENCE_BITS + Self::NODE_BITS + Self::DATACENTER_BITS;

    /// Largest valid datacenter ID.
    pub const MAX_DATACENTER_ID: i64 = Self::DATACENTER_MASK;

    /// Largest valid node ID.
    pub const MAX_NODE_ID: i64 = Self::NODE_MASK;

    /// Largest sequence value before a millisecond is exhausted.
    pub const MAX_SEQUENCE: i64 = Self::SEQUENCE_MASK;

    /// Packs the four fields into an ID.
    ///
    /// `timestamp_delta` is milliseconds since [`EPOCH`]. Bits shifted past
    /// the top of the word are discarded. The other fields are masked to
    /// their widths.
    ///
    /// [`EPOCH`]: crate::EPOCH
    pub const fn from_components(
        timestamp_delta: i64,
        datacenter_id: i64,
        node_id: i64,
        sequence: i64,
    ) -> Self {
        let timestamp = timestamp_delta << Self::TIMESTAMP_SHIFT;
        let datacenter_id = (datacenter_id & Self::DATACENTER_MASK) << Self::DATACENTER_SHIFT;
        let node_id = (node_id & Self::NODE_MASK) << Self::NODE_SHIFT;
        let sequence = sequence & Self::SEQUENCE_MASK;
        Self {
            id: timestamp | datacenter_id | node_id | sequence,
        }
    }

    /// Packs an ID from an absolute timestamp in milliseconds since
    /// 1970-01-01 UTC.
    pub const fn from_unix_millis(
        unix_millis: i64,
        datacenter_id: i64,
        node_id: i64,
        sequence: i64,
    ) -> Self {
        Self::from_components(
            unix_millis.wrapping_sub(EPOCH_MILLIS),
            datacenter_id,
            node_id,
            sequence,
        )
    }

    /// Wraps a raw value without validation.
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }

    /// Returns the raw integer.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Milliseconds since [`EPOCH`], as stored in the high bits.
    ///
    /// [`EPOCH`]: crate::EPOCH
    pub const fn timestamp_delta(&self) -> i64 {
        self.id >> Self::TIMESTAMP_SHIFT
    }

    /// Milliseconds since 1970-01-01 UTC.
    pub const fn timestamp(&self) -> i64 {
        self.timestamp_delta() + EPOCH_MILLIS
    }

    pub const fn datacenter_id(&self) -> i64 {
        (self.id >> Self::DATACENTER_SHIFT) & Self::DATACENTER_MASK
    }

    pub const fn node_id(&self) -> i64 {
        (self.id >> Self::NODE_SHIFT) & Self::NODE_MASK
    }

    pub const fn sequence(&self) -> i64 {
        self.id & Self::SEQUENCE_MASK
    }
}

impl From<i64> for SnowflakeId {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("datacenter_id", &self.datacenter_id())
            .field("node_id", &self.node_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
