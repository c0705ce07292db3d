//! Attribute resolver chains.
//!
//! Each concrete object type lists its resolvers most-base first. The key is
//! folded to lowercase once, then the resolvers are tried in order until one
//! reports the key as handled. A more-derived resolver never sees a key that
//! a base resolver already claimed.

use veneer_core::CoerceResult;

use super::GuiObject;

/// One link of a resolver chain.
///
/// Receives the already-lowercased key and the raw value. Returns `Ok(true)`
/// if it recognised the key.
pub type Resolver<T> = fn(&mut T, &str, &str) -> CoerceResult<bool>;

/// Runs `chain` against `target` for one attribute.
///
/// Unknown keys return `Ok(false)` and change nothing.
///
/// # Errors
///
/// Propagates the first coercion failure unchanged.
pub fn resolve_chain<T>(
    target: &mut T,
    chain: &[Resolver<T>],
    key: &str,
    value: &str,
) -> CoerceResult<bool> {
    let key = key.to_lowercase();
    for resolver in chain {
        if resolver(target, &key, value)? {
            return Ok(true);
        }
    }
    tracing::trace!("Unhandled attribute {}=\"{}\"", key, value);
    Ok(false)
}

/// Base link shared by every UI object: identity and presentation keys.
///
/// # Errors
///
/// Returns a coercion error for malformed numeric or boolean values.
pub fn resolve_base<T: GuiObject>(target: &mut T, key: &str, value: &str) -> CoerceResult<bool> {
    target.base_mut().apply_attribute(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::CoerceError;

    #[derive(Default)]
    struct Probe {
        seen: Vec<&'static str>,
        width: Option<f64>,
    }

    fn first(target: &mut Probe, key: &str, _value: &str) -> CoerceResult<bool> {
        target.seen.push("first");
        Ok(key == "shared")
    }

    fn second(target: &mut Probe, key: &str, value: &str) -> CoerceResult<bool> {
        target.seen.push("second");
        match key {
            "shared" => Ok(true),
            "width" => {
                target.width = Some(veneer_core::coerce::num(value)?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    const CHAIN: &[Resolver<Probe>] = &[first, second];

    #[test]
    fn test_base_most_link_wins() {
        let mut probe = Probe::default();
        assert!(resolve_chain(&mut probe, CHAIN, "SHARED", "x").unwrap());
        assert_eq!(probe.seen, vec!["first"]);
    }

    #[test]
    fn test_falls_through_to_derived_link() {
        let mut probe = Probe::default();
        assert!(resolve_chain(&mut probe, CHAIN, "Width", "20").unwrap());
        assert_eq!(probe.seen, vec!["first", "second"]);
        assert_eq!(probe.width, Some(20.0));
    }

    #[test]
    fn test_unknown_key_is_not_handled() {
        let mut probe = Probe::default();
        assert!(!resolve_chain(&mut probe, CHAIN, "sparkle", "1").unwrap());
        assert_eq!(probe.width, None);
    }

    #[test]
    fn test_coercion_error_propagates() {
        let mut probe = Probe::default();
        let err = resolve_chain(&mut probe, CHAIN, "width", "wide").unwrap_err();
        assert!(matches!(err, CoerceError::InvalidNumber { .. }));
        assert_eq!(probe.width, None);
    }
}
