pub mod id;
pub mod time;

pub use id::*;
pub use time::*;

/// Money in minor currency units.
pub type Amount = i64;
