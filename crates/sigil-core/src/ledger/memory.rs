//! Reference in-memory ownership ledger.

use std::collections::{HashMap, HashSet};

use super::error::LedgerError;
use super::{LedgerCapability, OwnershipLedger, TransferHook};
use crate::credential::{CredentialId, Identity};

/// In-memory enumerable-ownership ledger.
///
/// Keeps the holder map, a per-holder enumeration index, and approval
/// bookkeeping. All transfer variants validate holder, authorization, and
/// the installed [`TransferHook`] before mutating anything, so every
/// operation is all-or-nothing.
#[derive(Default)]
pub struct MemoryLedger {
    /// Map of credential id to current holder.
    holders: HashMap<CredentialId, Identity>,

    /// Enumeration index: holder to held credential ids, in mint order.
    holdings: HashMap<Identity, Vec<CredentialId>>,

    /// Per-credential approved identity.
    approvals: HashMap<CredentialId, Identity>,

    /// Operator approvals as (holder, operator) pairs.
    operators: HashSet<(Identity, Identity)>,

    /// Hook consulted before every transfer mutation.
    hook: Option<Box<dyn TransferHook>>,
}

impl std::fmt::Debug for MemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLedger")
            .field("credentials", &self.holders.len())
            .field("approvals", &self.approvals.len())
            .field("operators", &self.operators.len())
            .field("hook_installed", &self.hook.is_some())
            .finish()
    }
}

impl MemoryLedger {
    /// Creates an empty ledger with no hook installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of existing credentials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// Returns `true` if no credentials exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Returns the credential ids held by an identity, in mint order.
    #[must_use]
    pub fn holdings_of(&self, holder: &Identity) -> &[CredentialId] {
        self.holdings.get(holder).map_or(&[], Vec::as_slice)
    }

    /// Validates a single transfer without mutating anything.
    ///
    /// Checks existence, holder, caller authorization, and the installed
    /// hook, in that order.
    fn validate_transfer(
        &self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
    ) -> Result<(), LedgerError> {
        let holder = self
            .holders
            .get(&id)
            .ok_or(LedgerError::UnknownCredential { id })?;
        if holder != from {
            return Err(LedgerError::NotHolder {
                id,
                identity: from.clone(),
            });
        }

        let approved = self.approvals.get(&id) == Some(caller);
        let operator = self.operators.contains(&(from.clone(), caller.clone()));
        if caller != from && !approved && !operator {
            return Err(LedgerError::NotApproved {
                caller: caller.clone(),
                id,
            });
        }

        if let Some(hook) = &self.hook {
            hook.before_transfer(from, to, id)?;
        }
        Ok(())
    }

    /// Applies a validated transfer. Must only run after
    /// `validate_transfer` succeeded for the same arguments.
    fn commit_transfer(&mut self, from: &Identity, to: &Identity, id: CredentialId) {
        self.approvals.remove(&id);
        if let Some(held) = self.holdings.get_mut(from) {
            held.retain(|held_id| *held_id != id);
        }
        self.holdings.entry(to.clone()).or_default().push(id);
        self.holders.insert(id, to.clone());
    }
}

impl OwnershipLedger for MemoryLedger {
    fn mint(&mut self, to: &Identity, id: CredentialId) -> Result<(), LedgerError> {
        if self.holders.contains_key(&id) {
            return Err(LedgerError::AlreadyExists { id });
        }
        self.holders.insert(id, to.clone());
        self.holdings.entry(to.clone()).or_default().push(id);
        Ok(())
    }

    fn burn(&mut self, id: CredentialId) -> Result<(), LedgerError> {
        let holder = self
            .holders
            .remove(&id)
            .ok_or(LedgerError::UnknownCredential { id })?;
        if let Some(held) = self.holdings.get_mut(&holder) {
            held.retain(|held_id| *held_id != id);
        }
        self.approvals.remove(&id);
        Ok(())
    }

    fn exists(&self, id: CredentialId) -> bool {
        self.holders.contains_key(&id)
    }

    fn holder_of(&self, id: CredentialId) -> Result<Identity, LedgerError> {
        self.holders
            .get(&id)
            .cloned()
            .ok_or(LedgerError::UnknownCredential { id })
    }

    fn transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
    ) -> Result<(), LedgerError> {
        self.validate_transfer(caller, from, to, id)?;
        self.commit_transfer(from, to, id);
        Ok(())
    }

    fn safe_transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
        _payload: &[u8],
    ) -> Result<(), LedgerError> {
        // The payload is opaque here; delivery to a receiver is outside the
        // ledger primitive. Validation and hook interception are identical
        // to a direct transfer.
        self.validate_transfer(caller, from, to, id)?;
        self.commit_transfer(from, to, id);
        Ok(())
    }

    fn transfer_batch(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        ids: &[CredentialId],
    ) -> Result<(), LedgerError> {
        if ids.is_empty() {
            return Err(LedgerError::EmptyBatch);
        }
        // Validate the whole batch, hook included, before moving anything.
        for id in ids {
            self.validate_transfer(caller, from, to, *id)?;
        }
        for id in ids {
            self.commit_transfer(from, to, *id);
        }
        Ok(())
    }

    fn approve(
        &mut self,
        caller: &Identity,
        id: CredentialId,
        approved: Option<Identity>,
    ) -> Result<(), LedgerError> {
        let holder = self
            .holders
            .get(&id)
            .ok_or(LedgerError::UnknownCredential { id })?;
        if holder != caller {
            return Err(LedgerError::NotHolder {
                id,
                identity: caller.clone(),
            });
        }
        match approved {
            Some(identity) => {
                self.approvals.insert(id, identity);
            },
            None => {
                self.approvals.remove(&id);
            },
        }
        Ok(())
    }

    fn approved_for(&self, id: CredentialId) -> Result<Option<Identity>, LedgerError> {
        if !self.holders.contains_key(&id) {
            return Err(LedgerError::UnknownCredential { id });
        }
        Ok(self.approvals.get(&id).cloned())
    }

    fn set_operator_approval(
        &mut self,
        holder: &Identity,
        operator: &Identity,
        approved: bool,
    ) -> Result<(), LedgerError> {
        let pair = (holder.clone(), operator.clone());
        if approved {
            self.operators.insert(pair);
        } else {
            self.operators.remove(&pair);
        }
        Ok(())
    }

    fn operator_approved(&self, holder: &Identity, operator: &Identity) -> bool {
        self.operators
            .contains(&(holder.clone(), operator.clone()))
    }

    fn supports(&self, capability: LedgerCapability) -> bool {
        matches!(
            capability,
            LedgerCapability::Ownership | LedgerCapability::Enumeration
        )
    }

    fn install_transfer_hook(&mut self, hook: Box<dyn TransferHook>) {
        self.hook = Some(hook);
    }
}
