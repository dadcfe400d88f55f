pub mod coaster;
pub mod macros;
pub mod units;

pub use coaster::*;
pub use units::*;
