//! Tests for identity and credential id derivation.

use std::collections::HashSet;

use proptest::prelude::*;

use super::{CREDENTIAL_ID_SIZE, CredentialId, Identity};

#[test]
fn test_derivation_is_deterministic() {
    let identity = Identity::from("acct-0xabc123");
    let first = CredentialId::derive_from(&identity);
    let second = CredentialId::derive_from(&identity);
    assert_eq!(first, second);
}

#[test]
fn test_distinct_identities_yield_distinct_ids() {
    let a = CredentialId::derive_from(&Identity::from("alice"));
    let b = CredentialId::derive_from(&Identity::from("bob"));
    assert_ne!(a, b);
}

#[test]
fn test_display_is_hex() {
    let id = CredentialId::derive_from(&Identity::from("alice"));
    let rendered = id.to_string();
    assert_eq!(rendered.len(), CREDENTIAL_ID_SIZE * 2);
    assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(rendered, hex::encode(id.as_bytes()));
}

#[test]
fn test_from_bytes_round_trips() {
    let id = CredentialId::derive_from(&Identity::from("carol"));
    assert_eq!(CredentialId::from_bytes(*id.as_bytes()), id);
}

#[test]
fn test_similar_identities_diverge() {
    // Prefix-extension pairs must not collide; the derivation hashes the
    // whole identity, not a truncation of it.
    let a = CredentialId::derive_from(&Identity::from("user"));
    let b = CredentialId::derive_from(&Identity::from("user0"));
    let c = CredentialId::derive_from(&Identity::from("user00"));
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

fn arb_identity() -> impl Strategy<Value = Identity> {
    "[a-zA-Z0-9:_-]{1,64}".prop_map(Identity::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: derivation is a pure function of the identity.
    #[test]
    fn prop_derivation_deterministic(identity in arb_identity()) {
        prop_assert_eq!(
            CredentialId::derive_from(&identity),
            CredentialId::derive_from(&identity)
        );
    }

    /// Property: distinct identities never share an id.
    #[test]
    fn prop_no_collisions(identities in prop::collection::hash_set(arb_identity(), 1..128)) {
        let ids: HashSet<CredentialId> = identities
            .iter()
            .map(CredentialId::derive_from)
            .collect();
        prop_assert_eq!(ids.len(), identities.len());
    }
}
