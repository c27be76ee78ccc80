//! Closed enumerations with a wire value and a display label.
//!
//! Statuses, categories, tones and icon keys are all declared through
//! [`choice_enum!`] so that each one gets the same `Choice`, `FromStr`,
//! `Display` and serde behavior from a single variant table.

/// A closed set of named values.
pub trait Choice: Copy + PartialEq + 'static {
    /// Human-readable name of the enumeration, used in parse errors.
    const KIND: &'static str;

    /// Every variant in declaration order.
    const ALL: &'static [Self];

    /// Wire value used in data files and select controls.
    fn value(self) -> &'static str;

    /// Display label.
    fn label(self) -> &'static str;
}

/// Declares a [`Choice`] enum.
///
/// ```ignore
/// choice_enum! {
///     pub enum OrderStatus("order status") {
///         Completed => ("completed", "Completed"),
///         Pending => ("pending", "Pending"),
///     }
/// }
/// ```
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $crate::choice::Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::choice::Choice>::ALL
                    .iter()
                    .copied()
                    .find(|c| $crate::choice::Choice::value(*c) == s)
                    .ok_or_else(|| {
                        $crate::error::ParseChoiceError::new(
                            <Self as $crate::choice::Choice>::KIND,
                            s,
                        )
                    })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::choice::Choice::label(*self))
            }
        }
    };
}

pub(crate) use choice_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::TimeRange;
    use crate::models::{OrderStatus, ProductStatus};

    #[test]
    fn test_parse_error_names_the_enumeration() {
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.kind, OrderStatus::KIND);
        assert_eq!(err.to_string(), "unknown order status `shipped`");

        let err = "2y".parse::<TimeRange>().unwrap_err();
        assert_eq!(err.kind, TimeRange::KIND);
        assert_eq!(err.value, "2y");
    }

    #[test]
    fn test_value_round_trips_through_from_str() {
        for status in ProductStatus::ALL {
            assert_eq!(status.value().parse::<ProductStatus>(), Ok(*status));
        }
    }
}
