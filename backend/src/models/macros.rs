/// Defines a newtype measurement wrapper around `f64` and generates:
/// - derives (Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)
/// - `#[serde(transparent)]` so the value travels as a bare JSON number
/// - `Display` with the unit suffix
/// - `From<f64> for $name` and `From<$name> for f64`
/// - `new`, `value` and a `total_cmp` usable in sort comparators
///
/// Usage:
///   define_measure_type!(Feet, "ft");
#[macro_export]
macro_rules! define_measure_type {
    ($name:ident, $unit:expr) => {
        #[derive(
            Debug, Copy, Clone, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{} {}", self.0, $unit)
            }
        }

        impl ::std::convert::From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for f64 {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub const UNIT: &'static str = $unit;

            pub fn new(value: f64) -> Self {
                $name(value)
            }

            pub fn value(&self) -> f64 {
                self.0
            }

            pub fn total_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }
    };
}
