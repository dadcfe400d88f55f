//! Unit newtypes for coaster measurements.

use crate::define_measure_type;

define_measure_type!(Feet, "ft");
define_measure_type!(MilesPerHour, "mph");
define_measure_type!(Degrees, "°");
define_measure_type!(GForce, "G");
