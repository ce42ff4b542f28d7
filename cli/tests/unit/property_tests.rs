//! Property-based tests for resource type validation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use azd_cli::domain::{
    AzureResourceType, ServiceHost, TargetResource, new_service_target, validate_resource_type,
};

fn known_type() -> impl Strategy<Value = AzureResourceType> {
    proptest::sample::select(AzureResourceType::ALL.to_vec())
}

fn host() -> impl Strategy<Value = ServiceHost> {
    proptest::sample::select(ServiceHost::ALL.to_vec())
}

/// Re-case every ASCII letter of `s` according to `mask`.
fn recase(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Validation succeeds iff both sides lowercase to the same string.
    #[test]
    fn prop_validate_iff_lowercase_equal(t in "\\PC{0,40}", e in "\\PC{1,40}") {
        let ok = validate_resource_type(&t, &e).is_ok();
        prop_assert_eq!(ok, t.to_lowercase() == e.to_lowercase());
    }

    /// Any casing of a known type constant is accepted for that constant.
    #[test]
    fn prop_any_casing_of_known_type_accepted(
        t in known_type(),
        mask in proptest::collection::vec(any::<bool>(), 1..64),
    ) {
        let recased = recase(t.as_str(), &mask);
        prop_assert!(validate_resource_type(&recased, t.as_str()).is_ok());
        prop_assert_eq!(AzureResourceType::from_type_str(&recased), Some(t));
    }

    /// A strict prefix of a type constant never validates.
    #[test]
    fn prop_prefix_rejected(t in known_type(), cut in 0usize..64) {
        let s = t.as_str();
        let cut = cut % s.len();
        prop_assert!(validate_resource_type(&s[..cut], s).is_err());
    }

    /// Mismatch errors carry both strings unchanged.
    #[test]
    fn prop_error_names_both_types(t in "[A-Za-z./]{0,30}", e in known_type()) {
        if let Err(err) = validate_resource_type(&t, e.as_str()) {
            let msg = err.to_string();
            let quoted = format!("'{t}'");
            prop_assert!(msg.contains(&quoted));
            prop_assert!(msg.contains(e.as_str()));
        }
    }

    /// Repeated validation yields the same result.
    #[test]
    fn prop_validation_is_idempotent(t in "\\PC{0,40}", e in known_type()) {
        let first = validate_resource_type(&t, e.as_str());
        let second = validate_resource_type(&t, e.as_str());
        prop_assert_eq!(first, second);
    }

    /// A host accepts a known type iff it is the host's required type.
    #[test]
    fn prop_host_accepts_only_required_type(h in host(), t in known_type()) {
        let resource = TargetResource::new("SUB_ID", "RG_ID", "res", t.as_str());
        let built = new_service_target(h, resource).is_ok();
        prop_assert_eq!(built, h.required_resource_type() == t);
    }
}

#[test]
fn test_bad_type_rejected_for_every_known_type() {
    for t in AzureResourceType::ALL {
        assert!(validate_resource_type("BadType", t.as_str()).is_err());
        assert!(validate_resource_type("", t.as_str()).is_err());
    }
}
