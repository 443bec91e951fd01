// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form integration: the submitted string value and required-field validity.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use crate::DropdownState;

/// Message reported when a required dropdown has no value.
pub const VALUE_MISSING_MESSAGE: &str = "This field is required";

/// Conversion of an option value into the string a form submits.
///
/// Text renders as-is; numbers and booleans render their JSON form, with floats following
/// the exponent rules of `JSON.stringify`. Wrap other payloads in `Json` (feature `serde`).
pub trait FormValue {
    /// The submitted string.
    fn to_form_value(&self) -> String;
}

impl<T: FormValue + ?Sized> FormValue for &T {
    fn to_form_value(&self) -> String {
        (**self).to_form_value()
    }
}

impl FormValue for str {
    fn to_form_value(&self) -> String {
        self.into()
    }
}

impl FormValue for String {
    fn to_form_value(&self) -> String {
        self.clone()
    }
}

impl FormValue for Cow<'_, str> {
    fn to_form_value(&self) -> String {
        self.to_string()
    }
}

impl FormValue for char {
    fn to_form_value(&self) -> String {
        self.to_string()
    }
}

macro_rules! display_form_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormValue for $ty {
                fn to_form_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_form_value!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! float_form_value {
    ($($ty:ty),*) => {
        $(
            impl FormValue for $ty {
                /// Non-finite numbers have no JSON form and render as `null`.
                fn to_form_value(&self) -> String {
                    if !self.is_finite() {
                        "null".into()
                    } else if *self == 0.0 {
                        // Negative zero serializes as `0`.
                        "0".into()
                    } else {
                        json_number(self)
                    }
                }
            }
        )*
    };
}

float_form_value!(f32, f64);

/// Format a finite, non-zero float as `JSON.stringify` does.
///
/// Magnitudes of at least `1e21` or below `1e-6` use exponent notation with an explicit sign
/// (`1e+21`, `1.5e-7`); everything else is written out in full. Both forms use the shortest
/// digits that round-trip.
fn json_number(value: &(impl fmt::Display + fmt::LowerExp)) -> String {
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if exponent >= 21 || exponent <= -7 => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
        }
        _ => value.to_string(),
    }
}

/// A value submitted as its JSON serialization.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

#[cfg(feature = "serde")]
impl<T: serde::Serialize> FormValue for Json<T> {
    /// A value that fails to serialize submits an empty string.
    fn to_form_value(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

/// Constraint-validation state of a dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Nothing to report.
    Valid,
    /// A required dropdown has an empty value.
    ValueMissing {
        /// Message shown to the user.
        message: &'static str,
    },
}

impl Validity {
    /// Whether the state is [`Validity::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The validation message, empty when valid.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::ValueMissing { message } => *message,
        }
    }
}

/// The string a form submits for `state`: the committed value, or empty for a placeholder.
pub fn form_value<V: FormValue, L>(state: &DropdownState<V, L>) -> String {
    state
        .committed()
        .value
        .as_ref()
        .map_or_else(String::new, FormValue::to_form_value)
}

/// Validity of `state`; only a `required` dropdown with an empty form value is invalid.
pub fn validity<V: FormValue, L>(state: &DropdownState<V, L>, required: bool) -> Validity {
    if required && form_value(state).is_empty() {
        Validity::ValueMissing {
            message: VALUE_MISSING_MESSAGE,
        }
    } else {
        Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use dropdown_options::{Options, SelectOption};

    fn state<V>(
        options: vec::Vec<SelectOption<V, &'static str>>,
    ) -> DropdownState<V, &'static str> {
        DropdownState::new(Options::from_vec_first(options).unwrap())
    }

    #[test]
    fn scalar_form_values() {
        assert_eq!("pear".to_form_value(), "pear");
        assert_eq!(String::from("fig").to_form_value(), "fig");
        assert_eq!(Cow::Borrowed("kiwi").to_form_value(), "kiwi");
        assert_eq!('x'.to_form_value(), "x");
        assert_eq!(true.to_form_value(), "true");
        assert_eq!((-42_i32).to_form_value(), "-42");
        assert_eq!(2.5_f64.to_form_value(), "2.5");
        assert_eq!(f64::NAN.to_form_value(), "null");
        assert_eq!(f32::INFINITY.to_form_value(), "null");
    }

    #[test]
    fn float_exponents_follow_json() {
        assert_eq!(1e21_f64.to_form_value(), "1e+21");
        assert_eq!(1e-7_f64.to_form_value(), "1e-7");
        assert_eq!((-2.5e22_f64).to_form_value(), "-2.5e+22");
        assert_eq!(1.5e-7_f64.to_form_value(), "1.5e-7");
        assert_eq!(1e20_f64.to_form_value(), "100000000000000000000");
        assert_eq!(1e-6_f64.to_form_value(), "0.000001");
        assert_eq!((-0.0_f64).to_form_value(), "0");
        assert_eq!(1e30_f32.to_form_value(), "1e+30");
    }

    #[test]
    fn large_float_value_is_submitted_in_exponent_form() {
        let state = state(vec![SelectOption::new(1e21_f64, "Huge")]);
        assert_eq!(form_value(&state), "1e+21");
    }

    #[test]
    fn placeholder_submits_empty_string() {
        let state = state::<u32>(vec![
            SelectOption::placeholder("Pick"),
            SelectOption::new(1, "One"),
        ]);
        assert_eq!(form_value(&state), "");
        assert_eq!(validity(&state, false), Validity::Valid);
        let missing = validity(&state, true);
        assert!(!missing.is_valid());
        assert_eq!(missing.message(), "This field is required");
    }

    #[test]
    fn empty_string_value_is_missing() {
        let state = state(vec![SelectOption::new(String::new(), "Nothing")]);
        assert_eq!(validity(&state, true), Validity::ValueMissing {
            message: VALUE_MISSING_MESSAGE
        });
    }

    #[test]
    fn committed_value_is_submitted() {
        let state = state(vec![SelectOption::new(7_u16, "Seven")]);
        assert_eq!(form_value(&state), "7");
        assert!(validity(&state, true).is_valid());
        assert_eq!(validity(&state, true).message(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_values_serialize() {
        let state = state(vec![SelectOption::new(Json(vec![1, 2]), "Pair")]);
        assert_eq!(form_value(&state), "[1,2]");
        assert_eq!(Json("a\"b").to_form_value(), "\"a\\\"b\"");
    }
}
