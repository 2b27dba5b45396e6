//! Tests for the credential lifecycle controller.

use super::controller::CredentialController;
use super::error::CredentialError;
use crate::config::{ClaimMode, CoreConfig};
use crate::credential::{CredentialId, Identity};
use crate::events::CredentialEvent;
use crate::ledger::{LedgerCapability, MemoryLedger, OwnershipLedger};

fn admin() -> Identity {
    Identity::from("admin")
}

/// Controller in the default administrator-issued, no-self-burn deployment.
fn admin_issued() -> CredentialController<MemoryLedger> {
    CredentialController::new(CoreConfig::default(), admin(), MemoryLedger::new())
}

/// Controller in the self-service, self-burn-enabled deployment.
fn self_service() -> CredentialController<MemoryLedger> {
    let config = CoreConfig {
        claim_mode: ClaimMode::SelfService,
        self_burn_enabled: true,
    };
    CredentialController::new(config, admin(), MemoryLedger::new())
}

// =============================================================================
// Claim
// =============================================================================

#[test]
fn test_claim_issues_locked_credential() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");

    let id = controller.claim(&admin(), &alice).unwrap();

    assert_eq!(id, CredentialId::derive_from(&alice));
    assert!(controller.has_claimed(&alice));
    assert!(controller.locked(id).unwrap());
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
    assert_eq!(controller.ledger().holder_of(id).unwrap(), alice);
}

#[test]
fn test_claim_emits_locked_then_claimed() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");

    let id = controller.claim(&admin(), &alice).unwrap();

    assert_eq!(
        controller.events(),
        &[
            CredentialEvent::Locked { id },
            CredentialEvent::Claimed {
                identity: alice,
                id
            },
        ]
    );
}

#[test]
fn test_second_claim_fails_and_leaves_state_unchanged() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");

    let id = controller.claim(&admin(), &alice).unwrap();
    let events_before = controller.events().to_vec();

    let result = controller.claim(&admin(), &alice);

    assert!(matches!(
        result,
        Err(CredentialError::AlreadyClaimed { identity }) if identity == alice
    ));
    assert_eq!(controller.events(), events_before.as_slice());
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
    assert!(controller.locked(id).unwrap());
}

#[test]
fn test_admin_issued_claim_rejects_non_authority() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");

    let result = controller.claim(&alice, &alice);

    assert!(matches!(result, Err(CredentialError::NotAuthorized { .. })));
    assert!(!controller.has_claimed(&alice));
    assert!(controller.events().is_empty());
}

#[test]
fn test_self_service_claim_rejects_third_party_caller() {
    let mut controller = self_service();
    let alice = Identity::from("alice");
    let bob = Identity::from("bob");

    let result = controller.claim(&bob, &alice);

    assert!(matches!(result, Err(CredentialError::NotAuthorized { .. })));
    assert!(!controller.has_claimed(&alice));
}

#[test]
fn test_self_service_identity_claims_for_itself() {
    let mut controller = self_service();
    let alice = Identity::from("alice");

    let id = controller.claim(&alice, &alice).unwrap();

    assert_eq!(controller.holder_of(id).unwrap(), &alice);
    assert!(controller.locked(id).unwrap());
}

#[test]
fn test_claims_for_distinct_identities_coexist() {
    let mut controller = admin_issued();
    let id_alice = controller.claim(&admin(), &Identity::from("alice")).unwrap();
    let id_bob = controller.claim(&admin(), &Identity::from("bob")).unwrap();

    assert_ne!(id_alice, id_bob);
    assert_eq!(controller.ledger().len(), 2);
}

// =============================================================================
// Transfer gating
// =============================================================================

#[test]
fn test_every_transfer_variant_fails_locked() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let victor = Identity::from("victor");
    let id = controller.claim(&admin(), &alice).unwrap();

    assert!(matches!(
        controller.transfer(&alice, &alice, &victor, id),
        Err(CredentialError::CredentialLocked { .. })
    ));
    assert!(matches!(
        controller.safe_transfer(&alice, &alice, &victor, id, b""),
        Err(CredentialError::CredentialLocked { .. })
    ));
    assert!(matches!(
        controller.safe_transfer(&alice, &alice, &victor, id, b"aux payload"),
        Err(CredentialError::CredentialLocked { .. })
    ));
    assert!(matches!(
        controller.transfer_batch(&alice, &alice, &victor, &[id]),
        Err(CredentialError::CredentialLocked { .. })
    ));

    // Holder unchanged after every blocked attempt.
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
    assert_eq!(controller.ledger().holder_of(id).unwrap(), alice);
}

#[test]
fn test_per_token_approval_does_not_bypass_lock() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let broker = Identity::from("broker");
    let victor = Identity::from("victor");
    let id = controller.claim(&admin(), &alice).unwrap();

    // Granting a per-token approval is allowed...
    controller.approve(&alice, id, Some(broker.clone())).unwrap();

    // ...but the lock guard still blocks execution.
    let result = controller.transfer(&broker, &alice, &victor, id);
    assert!(matches!(
        result,
        Err(CredentialError::CredentialLocked { .. })
    ));
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
}

#[test]
fn test_operator_approvals_permanently_disabled() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let operator = Identity::from("operator");

    let result = controller.set_operator_approval(&alice, &operator, true);
    assert!(matches!(
        result,
        Err(CredentialError::OperatorApprovalsDisabled)
    ));
    assert!(!controller.operator_approved(&alice, &operator));
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn test_recover_burns_but_claim_record_persists() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let id = controller.claim(&admin(), &alice).unwrap();

    controller.recover(&admin(), &alice, id).unwrap();

    assert!(!controller.ledger().exists(id));
    assert!(matches!(
        controller.holder_of(id),
        Err(CredentialError::UnknownCredential { .. })
    ));
    assert!(controller.has_claimed(&alice));

    // Re-issuance is foreclosed forever.
    let result = controller.claim(&admin(), &alice);
    assert!(matches!(result, Err(CredentialError::AlreadyClaimed { .. })));
}

#[test]
fn test_recover_by_non_authority_fails() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let mallory = Identity::from("mallory");
    let id = controller.claim(&admin(), &alice).unwrap();

    let result = controller.recover(&mallory, &alice, id);

    assert!(matches!(result, Err(CredentialError::NotAuthorized { .. })));
    assert!(controller.ledger().exists(id));
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
}

#[test]
fn test_recover_wrong_holder_fails() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let bob = Identity::from("bob");
    let id = controller.claim(&admin(), &alice).unwrap();
    controller.claim(&admin(), &bob).unwrap();

    let result = controller.recover(&admin(), &bob, id);

    assert!(matches!(
        result,
        Err(CredentialError::NotHolder { identity, .. }) if identity == bob
    ));
    assert_eq!(controller.holder_of(id).unwrap(), &alice);
}

#[test]
fn test_recover_unknown_credential_fails() {
    let mut controller = admin_issued();
    let never_claimed = CredentialId::derive_from(&Identity::from("ghost"));

    let result = controller.recover(&admin(), &Identity::from("ghost"), never_claimed);

    assert!(matches!(
        result,
        Err(CredentialError::UnknownCredential { .. })
    ));
}

// =============================================================================
// Self-burn
// =============================================================================

#[test]
fn test_self_burn_disabled_by_default() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let id = controller.claim(&admin(), &alice).unwrap();

    let result = controller.self_burn(&alice, id);

    assert!(matches!(result, Err(CredentialError::SelfBurnDisabled)));
    assert!(controller.ledger().exists(id));
}

#[test]
fn test_self_burn_by_holder() {
    let mut controller = self_service();
    let alice = Identity::from("alice");
    let id = controller.claim(&alice, &alice).unwrap();

    controller.self_burn(&alice, id).unwrap();

    assert!(!controller.ledger().exists(id));
    assert!(controller.has_claimed(&alice));
    assert!(matches!(
        controller.locked(id),
        Err(CredentialError::UnknownCredential { .. })
    ));
}

#[test]
fn test_self_burn_by_non_holder_fails() {
    let mut controller = self_service();
    let alice = Identity::from("alice");
    let bob = Identity::from("bob");
    let id = controller.claim(&alice, &alice).unwrap();

    let result = controller.self_burn(&bob, id);

    assert!(matches!(
        result,
        Err(CredentialError::NotHolder { identity, .. }) if identity == bob
    ));
    assert!(controller.ledger().exists(id));
}

// =============================================================================
// Lock queries and capabilities
// =============================================================================

#[test]
fn test_locked_query_for_unclaimed_id_fails() {
    let controller = admin_issued();
    let id = CredentialId::derive_from(&Identity::from("never-claimed"));

    assert!(matches!(
        controller.locked(id),
        Err(CredentialError::UnknownCredential { .. })
    ));
}

#[test]
fn test_locked_is_true_for_entire_existence() {
    let mut controller = self_service();
    let alice = Identity::from("alice");
    let id = controller.claim(&alice, &alice).unwrap();

    assert!(controller.locked(id).unwrap());

    // No unlock path exists; an Unlocked event is never emitted.
    assert!(
        !controller
            .events()
            .iter()
            .any(|event| matches!(event, CredentialEvent::Unlocked { .. }))
    );

    controller.self_burn(&alice, id).unwrap();
    assert!(matches!(
        controller.locked(id),
        Err(CredentialError::UnknownCredential { .. })
    ));
}

#[test]
fn test_lock_query_capability_advertised() {
    let controller = admin_issued();
    assert!(controller.supports(LedgerCapability::LockQuery));
    assert!(controller.supports(LedgerCapability::Ownership));
    assert!(controller.supports(LedgerCapability::Enumeration));
}

// =============================================================================
// Authority handover
// =============================================================================

#[test]
fn test_authority_handover_moves_recovery_rights() {
    let mut controller = admin_issued();
    let alice = Identity::from("alice");
    let successor = Identity::from("successor");
    let id = controller.claim(&admin(), &alice).unwrap();

    controller
        .transfer_authority(&admin(), successor.clone())
        .unwrap();
    assert_eq!(controller.current_authority(), &successor);

    // The old authority lost its privileges.
    assert!(matches!(
        controller.recover(&admin(), &alice, id),
        Err(CredentialError::NotAuthorized { .. })
    ));
    controller.recover(&successor, &alice, id).unwrap();
    assert!(!controller.ledger().exists(id));
}
