use core::fmt;

/// A result type whose error defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The identifier field a constructor argument was destined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Datacenter,
    Node,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datacenter => f.write_str("datacenter"),
            Self::Node => f.write_str("node"),
        }
    }
}

/// All errors `dcflake` can produce.
///
/// Only construction is fallible. Generating and decoding IDs never fail.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A datacenter or node ID was negative or did not fit in its 5-bit
    /// field.
    #[error("invalid {component} id {value}: must be within 0..={max}")]
    InvalidIdentifier {
        component: Component,
        value: i64,
        max: i64,
    },
}
