//! Lock record storage and the ledger-side transfer guard.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::credential::{CredentialId, Identity};
use crate::ledger::{LedgerError, TransferHook};

/// Shared handle to a [`LockStore`].
pub type SharedLockStore = Arc<RwLock<LockStore>>;

/// Per-credential locked/unlocked records.
///
/// Records are created true at mint time and removed at burn time; nothing
/// in the current design ever sets one to false while the credential
/// exists. Existence gating (rejecting queries for ids with no holder) is
/// the controller's job, so the raw reads here treat an absent record as
/// unlocked.
#[derive(Debug, Clone, Default)]
pub struct LockStore {
    /// Map of credential id to "locked".
    locked: HashMap<CredentialId, bool>,
}

impl LockStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw lock flag for a credential id.
    #[must_use]
    pub fn is_locked(&self, id: CredentialId) -> bool {
        self.locked.get(&id).copied().unwrap_or(false)
    }

    /// Sets the lock flag for a credential id.
    ///
    /// Invoked by the lifecycle controller at mint time with `true`. The
    /// `false` path exists for symmetry with the reserved unlock event but
    /// has no caller in the current design.
    pub fn set_locked(&mut self, id: CredentialId, value: bool) {
        self.locked.insert(id, value);
    }

    /// Removes the lock record for a burned credential.
    pub fn remove(&mut self, id: CredentialId) {
        self.locked.remove(&id);
    }

    /// Returns the number of lock records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locked.len()
    }

    /// Returns `true` if no lock records exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }
}

/// Transfer hook that vetoes transfers of locked credentials.
///
/// Installed into the ownership ledger by the lifecycle controller; runs
/// before any transfer mutation in every transfer variant.
#[derive(Debug, Clone)]
pub struct LockGuard {
    store: SharedLockStore,
}

impl LockGuard {
    /// Creates a guard over a shared lock store.
    #[must_use]
    pub fn new(store: SharedLockStore) -> Self {
        Self { store }
    }
}

impl TransferHook for LockGuard {
    fn before_transfer(
        &self,
        _from: &Identity,
        _to: &Identity,
        id: CredentialId,
    ) -> Result<(), LedgerError> {
        let store = self.store.read().map_err(|_| LedgerError::StorePoisoned)?;
        if store.is_locked(id) {
            tracing::debug!(%id, "transfer vetoed: credential is locked");
            return Err(LedgerError::CredentialLocked { id });
        }
        Ok(())
    }
}
