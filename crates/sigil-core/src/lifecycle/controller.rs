//! Credential lifecycle controller implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use tracing::{debug, info};

use super::error::CredentialError;
use crate::authority::AuthorityGate;
use crate::claims::ClaimRegistry;
use crate::config::{ClaimMode, CoreConfig};
use crate::credential::{CredentialId, Identity};
use crate::events::{CredentialEvent, EventLog};
use crate::ledger::{LedgerCapability, LedgerError, OwnershipLedger};
use crate::lock::{LockGuard, LockStore, SharedLockStore};

/// Orchestrates claim, recovery, self-burn, and transfer-gate enforcement.
///
/// Owns the claim registry, the holder record, the event log, and the
/// ownership ledger; shares the lock store with the ledger's transfer hook.
/// Every mutating operation takes `&mut self`, so the hosting environment's
/// serialization (or Rust's borrow rules, in-process) gives each operation
/// exclusive access for its full effect set: all preconditions are checked
/// before the first mutation, and a failure leaves no partial state.
pub struct CredentialController<L: OwnershipLedger> {
    config: CoreConfig,
    authority: AuthorityGate,
    ledger: L,
    claims: ClaimRegistry,
    locks: SharedLockStore,

    /// Holder record: credential id to current holder. Mirrors the ledger
    /// holder at all times; entries are created at claim and removed at
    /// burn/recovery together with the ledger entry.
    holders: HashMap<CredentialId, Identity>,

    events: EventLog,
}

impl<L: OwnershipLedger> CredentialController<L> {
    /// Creates a controller and installs the lock guard into the ledger.
    pub fn new(config: CoreConfig, authority: Identity, mut ledger: L) -> Self {
        let locks: SharedLockStore = Arc::new(RwLock::new(LockStore::new()));
        ledger.install_transfer_hook(Box::new(LockGuard::new(Arc::clone(&locks))));
        Self {
            config,
            authority: AuthorityGate::new(authority),
            ledger,
            claims: ClaimRegistry::new(),
            locks,
            holders: HashMap::new(),
            events: EventLog::new(),
        }
    }

    fn write_locks(locks: &SharedLockStore) -> Result<RwLockWriteGuard<'_, LockStore>, CredentialError> {
        locks
            .write()
            .map_err(|_| CredentialError::Ledger(LedgerError::StorePoisoned))
    }

    /// Issues the credential for `identity`.
    ///
    /// In `administrator_issued` mode the caller must be the authority; in
    /// `self_service` mode the caller must be the identity itself. Effects,
    /// atomically from the caller's point of view: mark the identity
    /// claimed, derive the id, mint to the identity, record the holder, set
    /// the lock record, and emit `Locked` then `Claimed`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotAuthorized`] for a caller the claim
    /// mode does not permit, [`CredentialError::AlreadyClaimed`] if the
    /// identity has ever claimed before (even if that credential was since
    /// recovered), or a ledger passthrough on id collision.
    pub fn claim(
        &mut self,
        caller: &Identity,
        identity: &Identity,
    ) -> Result<CredentialId, CredentialError> {
        match self.config.claim_mode {
            ClaimMode::AdministratorIssued => self.authority.require(caller)?,
            ClaimMode::SelfService => {
                if caller != identity {
                    return Err(CredentialError::NotAuthorized {
                        caller: caller.clone(),
                    });
                }
            },
        }

        if self.claims.has_claimed(identity) {
            return Err(CredentialError::AlreadyClaimed {
                identity: identity.clone(),
            });
        }

        let id = CredentialId::derive_from(identity);
        if self.ledger.exists(id) {
            // Only reachable through a hash collision between distinct
            // identities; surfaced rather than resolved.
            return Err(CredentialError::Ledger(LedgerError::AlreadyExists { id }));
        }

        // Acquire the lock store up front so every remaining step is
        // infallible and the operation is all-or-nothing.
        let locks = Arc::clone(&self.locks);
        let mut locks = Self::write_locks(&locks)?;

        self.claims.mark_claimed(identity)?;
        self.ledger.mint(identity, id)?;
        self.holders.insert(id, identity.clone());
        locks.set_locked(id, true);
        self.events.record(CredentialEvent::Locked { id });
        self.events.record(CredentialEvent::Claimed {
            identity: identity.clone(),
            id,
        });

        info!(identity = %identity, %id, "credential claimed");
        Ok(id)
    }

    /// Authority-initiated revocation of the credential held by `from`.
    ///
    /// Deletes the holder record, removes the lock record, and burns the
    /// credential in the ledger. The claim record for `from` is NOT
    /// cleared: the identity stays permanently marked as having claimed.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotAuthorized`] for a non-authority
    /// caller, [`CredentialError::UnknownCredential`] for an id with no
    /// holder record, or [`CredentialError::NotHolder`] if `from` does not
    /// hold it.
    pub fn recover(
        &mut self,
        caller: &Identity,
        from: &Identity,
        id: CredentialId,
    ) -> Result<(), CredentialError> {
        self.authority.require(caller)?;
        let holder = self
            .holders
            .get(&id)
            .ok_or(CredentialError::UnknownCredential { id })?;
        if holder != from {
            return Err(CredentialError::NotHolder {
                id,
                identity: from.clone(),
            });
        }

        let locks = Arc::clone(&self.locks);
        let mut locks = Self::write_locks(&locks)?;

        self.holders.remove(&id);
        locks.remove(id);
        self.ledger.burn(id)?;

        info!(from = %from, %id, "credential recovered");
        Ok(())
    }

    /// Holder-initiated destruction of the caller's own credential.
    ///
    /// Present only in deployments with `self_burn_enabled`. The claim
    /// record survives, so the caller can never claim again.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::SelfBurnDisabled`] when the deployment
    /// does not expose self-burn, [`CredentialError::UnknownCredential`]
    /// for an id with no holder record, or [`CredentialError::NotHolder`]
    /// if the caller does not hold it.
    pub fn self_burn(&mut self, caller: &Identity, id: CredentialId) -> Result<(), CredentialError> {
        if !self.config.self_burn_enabled {
            return Err(CredentialError::SelfBurnDisabled);
        }
        let holder = self
            .holders
            .get(&id)
            .ok_or(CredentialError::UnknownCredential { id })?;
        if holder != caller {
            return Err(CredentialError::NotHolder {
                id,
                identity: caller.clone(),
            });
        }

        let locks = Arc::clone(&self.locks);
        let mut locks = Self::write_locks(&locks)?;

        self.holders.remove(&id);
        locks.remove(id);
        self.ledger.burn(id)?;

        info!(holder = %caller, %id, "credential self-burned");
        Ok(())
    }

    /// Returns the lock status of a credential.
    ///
    /// An id with no recorded holder is an invalid query target, not
    /// "unlocked".
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UnknownCredential`] if the credential has
    /// no recorded holder.
    pub fn locked(&self, id: CredentialId) -> Result<bool, CredentialError> {
        if !self.holders.contains_key(&id) {
            return Err(CredentialError::UnknownCredential { id });
        }
        let locks = self
            .locks
            .read()
            .map_err(|_| CredentialError::Ledger(LedgerError::StorePoisoned))?;
        Ok(locks.is_locked(id))
    }

    // =========================================================================
    // Transfer entry points
    //
    // All delegate to the ledger, whose installed lock guard runs before any
    // state mutation. Holder-record sync after a successful transfer keeps
    // the two structures aligned; under the current design every credential
    // is locked for its entire existence, so these only ever return
    // `CredentialLocked`.
    // =========================================================================

    /// Direct transfer of a credential.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::CredentialLocked`] for any existing
    /// credential; see [`OwnershipLedger::transfer`] for the rest.
    pub fn transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
    ) -> Result<(), CredentialError> {
        self.ledger.transfer(caller, from, to, id)?;
        self.sync_holder(to, id);
        Ok(())
    }

    /// Safe transfer with an auxiliary payload.
    ///
    /// # Errors
    ///
    /// Same as [`CredentialController::transfer`].
    pub fn safe_transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
        payload: &[u8],
    ) -> Result<(), CredentialError> {
        self.ledger.safe_transfer(caller, from, to, id, payload)?;
        self.sync_holder(to, id);
        Ok(())
    }

    /// Batch transfer of several credentials.
    ///
    /// # Errors
    ///
    /// Same as [`CredentialController::transfer`]; the ledger validates the
    /// whole batch before moving anything.
    pub fn transfer_batch(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        ids: &[CredentialId],
    ) -> Result<(), CredentialError> {
        self.ledger.transfer_batch(caller, from, to, ids)?;
        for id in ids {
            self.sync_holder(to, *id);
        }
        Ok(())
    }

    fn sync_holder(&mut self, to: &Identity, id: CredentialId) {
        self.holders.insert(id, to.clone());
    }

    /// Sets or clears the per-credential approved identity.
    ///
    /// Passes through to the ledger: per-token approvals remain subject to
    /// the lock guard at execution time, so granting one never moves a
    /// locked credential.
    ///
    /// # Errors
    ///
    /// See [`OwnershipLedger::approve`].
    pub fn approve(
        &mut self,
        caller: &Identity,
        id: CredentialId,
        approved: Option<Identity>,
    ) -> Result<(), CredentialError> {
        self.ledger.approve(caller, id, approved).map_err(Into::into)
    }

    /// Rejects blanket operator approvals.
    ///
    /// Permanently disabled for soulbound credentials as defense in depth;
    /// the lock guard remains the enforcement point for every transfer.
    ///
    /// # Errors
    ///
    /// Always returns [`CredentialError::OperatorApprovalsDisabled`].
    pub fn set_operator_approval(
        &mut self,
        _holder: &Identity,
        _operator: &Identity,
        _approved: bool,
    ) -> Result<(), CredentialError> {
        debug!("operator approval rejected: permanently disabled");
        Err(CredentialError::OperatorApprovalsDisabled)
    }

    /// Always reports "not approved": blanket operator approvals do not
    /// exist for soulbound credentials.
    #[must_use]
    pub fn operator_approved(&self, _holder: &Identity, _operator: &Identity) -> bool {
        false
    }

    /// Returns `true` if this stack supports `capability`.
    ///
    /// Advertises the lock-status query capability alongside whatever the
    /// underlying ledger supports.
    #[must_use]
    pub fn supports(&self, capability: LedgerCapability) -> bool {
        capability == LedgerCapability::LockQuery || self.ledger.supports(capability)
    }

    // =========================================================================
    // Read-only state surface
    // =========================================================================

    /// Returns `true` if the identity has ever claimed a credential.
    #[must_use]
    pub fn has_claimed(&self, identity: &Identity) -> bool {
        self.claims.has_claimed(identity)
    }

    /// Returns the holder of a credential from the holder record.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UnknownCredential`] if the id has no
    /// recorded holder.
    pub fn holder_of(&self, id: CredentialId) -> Result<&Identity, CredentialError> {
        self.holders
            .get(&id)
            .ok_or(CredentialError::UnknownCredential { id })
    }

    /// Returns all emitted events in order.
    #[must_use]
    pub fn events(&self) -> &[CredentialEvent] {
        self.events.events()
    }

    /// Returns the current authority identity.
    #[must_use]
    pub fn current_authority(&self) -> &Identity {
        self.authority.current_authority()
    }

    /// Hands the authority over to a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NotAuthorized`] if `caller` is not the
    /// current authority.
    pub fn transfer_authority(
        &mut self,
        caller: &Identity,
        new_authority: Identity,
    ) -> Result<(), CredentialError> {
        self.authority
            .transfer_authority(caller, new_authority)
            .map_err(Into::into)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Returns a read-only view of the underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
