mod parts;
mod snowflake;

pub use parts::*;
pub use snowflake::*;
