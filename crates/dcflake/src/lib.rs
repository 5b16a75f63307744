//! Coordination-free, time-ordered 64-bit identifiers.
//!
//! Every ID packs a millisecond timestamp (relative to [`EPOCH`]), a 5-bit
//! datacenter ID, a 5-bit node ID and a 12-bit per-millisecond sequence:
//!
//! ```text
//!  Bit Index:  63         63 62            22 21           17 16     12 11            0
//!              +------------+----------------+---------------+---------+--------------+
//!  Field:      | unused (1) | timestamp (41) | datacenter (5)| node (5)| sequence (12)|
//!              +------------+----------------+---------------+---------+--------------+
//! ```
//!
//! # Example
//!
//! ```
//! use dcflake::{SnowflakeGenerator, parse_id};
//!
//! let generator = SnowflakeGenerator::new(1, 1).unwrap();
//! let id = generator.next_id();
//!
//! let parts = parse_id(id.to_raw());
//! assert_eq!(parts.datacenter, 1);
//! assert_eq!(parts.node, 1);
//! ```
//!
//! # Feature flags
//! - `tracing`: instruments generation and reports clock regressions.
//! - `serde`: `Serialize`/`Deserialize` for [`SnowflakeId`] and [`IdParts`].

mod error;
mod generator;
mod id;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::time::*;
