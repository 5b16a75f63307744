use crate::id::SnowflakeId;

/// The four fields decoded from a [`SnowflakeId`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdParts {
    /// Milliseconds since 1970-01-01 UTC.
    pub timestamp: i64,
    pub datacenter: i64,
    pub node: i64,
    pub sequence: i64,
}

/// Decodes any 64-bit integer into its Snowflake fields.
///
/// Decoding is pure arithmetic and never fails. Values that were not
/// produced by a [`SnowflakeGenerator`] decode to consistent but meaningless
/// fields.
///
/// # Example
///
/// ```
/// use dcflake::{EPOCH_MILLIS, parse_id};
///
/// let parts = parse_id((5 << 22) | (1 << 17) | (2 << 12) | 3);
/// assert_eq!(parts.timestamp, EPOCH_MILLIS + 5);
/// assert_eq!(parts.datacenter, 1);
/// assert_eq!(parts.node, 2);
/// assert_eq!(parts.sequence, 3);
/// ```
///
/// [`SnowflakeGenerator`]: crate::SnowflakeGenerator
pub fn parse_id(id: i64) -> IdParts {
    SnowflakeId::from_raw(id).into()
}

impl From<SnowflakeId> for IdParts {
    fn from(id: SnowflakeId) -> Self {
        Self {
            timestamp: id.timestamp(),
            datacenter: id.datacenter_id(),
            node: id.node_id(),
            sequence: id.sequence(),
        }
    }
}

impl From<IdParts> for SnowflakeId {
    fn from(parts: IdParts) -> Self {
        Self::from_unix_millis(parts.timestamp, parts.datacenter, parts.node, parts.sequence)
    }
}
