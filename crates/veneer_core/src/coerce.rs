//! # Attribute Coercion
//!
//! Pure helpers that turn raw attribute strings from skin markup into typed
//! values. Nothing here holds state; callers store the results.
//!
//! Malformed input is reported as a [`CoerceError`] and never silently
//! replaced with a default.

use crate::error::{CoerceError, CoerceResult};

/// Parses a numeric attribute.
///
/// Surrounding whitespace is ignored. Values that do not parse, and values
/// that parse to NaN or infinity, are rejected.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidNumber`] for anything that is not a finite number.
pub fn num(value: &str) -> CoerceResult<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(CoerceError::InvalidNumber {
            value: value.to_owned(),
        }),
    }
}

/// Parses a boolean attribute.
///
/// Skins use `"1"` / `"0"`; `"true"` / `"false"` (any case) are accepted too.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidBool`] for any other value.
pub fn to_bool(value: &str) -> CoerceResult<bool> {
    let trimmed = value.trim();
    if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed == "0" || trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoerceError::InvalidBool {
            value: value.to_owned(),
        })
    }
}

/// Formats an optional size as a render-surface length.
///
/// An unset size yields the empty string, which clears the length on the
/// surface rather than forcing it to zero.
#[must_use]
pub fn px(size: Option<f64>) -> String {
    match size {
        Some(size) => format!("{size}px"),
        None => String::new(),
    }
}

/// Formats a `0..=255` alpha attribute as a `0..=1` opacity string.
#[must_use]
pub fn opacity(alpha: f64) -> String {
    let clamped = alpha.clamp(0.0, 255.0);
    format!("{}", clamped / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_parses_integers_and_fractions() {
        assert_eq!(num("200").unwrap(), 200.0);
        assert_eq!(num(" -12.5 ").unwrap(), -12.5);
        assert_eq!(num("0").unwrap(), 0.0);
    }

    #[test]
    fn test_num_rejects_garbage() {
        assert_eq!(
            num("wide"),
            Err(CoerceError::InvalidNumber {
                value: "wide".to_owned()
            })
        );
        assert!(num("").is_err());
        assert!(num("NaN").is_err());
        assert!(num("inf").is_err());
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool("1").unwrap());
        assert!(!to_bool("0").unwrap());
        assert!(to_bool("TRUE").unwrap());
        assert!(!to_bool("False").unwrap());
        assert_eq!(
            to_bool("yes"),
            Err(CoerceError::InvalidBool {
                value: "yes".to_owned()
            })
        );
    }

    #[test]
    fn test_px_unset_is_empty() {
        assert_eq!(px(Some(200.0)), "200px");
        assert_eq!(px(Some(12.5)), "12.5px");
        assert_eq!(px(Some(0.0)), "0px");
        assert_eq!(px(None), "");
    }

    #[test]
    fn test_opacity() {
        assert_eq!(opacity(255.0), "1");
        assert_eq!(opacity(0.0), "0");
        assert_eq!(opacity(300.0), "1");
    }
}
