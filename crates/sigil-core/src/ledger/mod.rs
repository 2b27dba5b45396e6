//! Ownership ledger contract and reference implementation.
//!
//! The ledger is the generic enumerable-ownership primitive the credential
//! core builds on: it maps credential ids to holders, enumerates holdings,
//! and keeps approval bookkeeping. The core consumes it only through the
//! [`OwnershipLedger`] trait; [`MemoryLedger`] is a reference in-memory
//! implementation used by the controller and the test suite.
//!
//! # Transfer Hook
//!
//! Every transfer variant (direct, safe-with-payload, batch, and the
//! approval-based paths through all of them) invokes the installed
//! [`TransferHook`] before any state mutation. The lifecycle controller
//! installs the lock guard here, which is how the transfer restriction is
//! enforced uniformly: a hook veto aborts the transfer with no observable
//! partial effects.

mod error;
mod memory;


pub use error::LedgerError;
pub use memory::MemoryLedger;

use crate::credential::{CredentialId, Identity};

/// Capabilities a ledger (or a layer above it) can advertise.
///
/// Mirrors the interface-capability query of the underlying primitive so
/// callers can discover, for example, whether lock-status queries are
/// supported alongside plain ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LedgerCapability {
    /// Basic mint/burn/transfer/holder-lookup support.
    Ownership,
    /// Enumeration of holdings by holder.
    Enumeration,
    /// Per-credential lock-status queries.
    LockQuery,
}

/// A precondition check invoked before every transfer-class operation.
///
/// Hooks run after the ledger has validated holder and authorization but
/// before any state mutation; returning an error vetoes the transfer
/// atomically.
pub trait TransferHook: Send + Sync {
    /// Checks whether the transfer of `id` from `from` to `to` may proceed.
    ///
    /// # Errors
    ///
    /// Returns an error to veto the transfer; the ledger propagates it to
    /// the caller unchanged.
    fn before_transfer(
        &self,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
    ) -> Result<(), LedgerError>;
}

/// The enumerable-ownership ledger contract consumed by the credential core.
///
/// Implementations must run the installed [`TransferHook`] before mutating
/// any state in every transfer variant, and must make every operation
/// all-or-nothing: a failure leaves the ledger exactly as it was.
pub trait OwnershipLedger {
    /// Mints credential `id` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AlreadyExists`] if `id` is already minted.
    fn mint(&mut self, to: &Identity, id: CredentialId) -> Result<(), LedgerError>;

    /// Burns credential `id`, removing its holder entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` does not exist.
    fn burn(&mut self, id: CredentialId) -> Result<(), LedgerError>;

    /// Returns `true` if credential `id` has been minted and not burned.
    fn exists(&self, id: CredentialId) -> bool;

    /// Returns the current holder of credential `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` does not exist.
    fn holder_of(&self, id: CredentialId) -> Result<Identity, LedgerError>;

    /// Transfers credential `id` from `from` to `to`.
    ///
    /// `caller` must be the holder, the per-credential approved identity,
    /// or an approved operator of the holder.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`], [`LedgerError::NotHolder`],
    /// [`LedgerError::NotApproved`], or a hook veto such as
    /// [`LedgerError::CredentialLocked`].
    fn transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
    ) -> Result<(), LedgerError>;

    /// Transfers credential `id` with an auxiliary payload.
    ///
    /// The payload is opaque to the ledger; the same validation and hook
    /// interception as [`OwnershipLedger::transfer`] apply.
    ///
    /// # Errors
    ///
    /// Same as [`OwnershipLedger::transfer`].
    fn safe_transfer(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        id: CredentialId,
        payload: &[u8],
    ) -> Result<(), LedgerError>;

    /// Transfers several credentials from `from` to `to` atomically.
    ///
    /// Every id is validated (including the hook) before any is moved, so a
    /// failure anywhere leaves all of them untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyBatch`] for an empty id list, otherwise
    /// the same errors as [`OwnershipLedger::transfer`].
    fn transfer_batch(
        &mut self,
        caller: &Identity,
        from: &Identity,
        to: &Identity,
        ids: &[CredentialId],
    ) -> Result<(), LedgerError>;

    /// Sets or clears the per-credential approved identity.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` does not exist or
    /// [`LedgerError::NotHolder`] if `caller` does not hold it.
    fn approve(
        &mut self,
        caller: &Identity,
        id: CredentialId,
        approved: Option<Identity>,
    ) -> Result<(), LedgerError>;

    /// Returns the per-credential approved identity, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` does not exist.
    fn approved_for(&self, id: CredentialId) -> Result<Option<Identity>, LedgerError>;

    /// Grants or revokes operator status over all of `holder`'s credentials.
    ///
    /// # Errors
    ///
    /// Implementations may reject the operation outright; the soulbound
    /// layer above this ledger always does.
    fn set_operator_approval(
        &mut self,
        holder: &Identity,
        operator: &Identity,
        approved: bool,
    ) -> Result<(), LedgerError>;

    /// Returns `true` if `operator` may act on all of `holder`'s credentials.
    fn operator_approved(&self, holder: &Identity, operator: &Identity) -> bool;

    /// Returns `true` if the ledger supports `capability`.
    fn supports(&self, capability: LedgerCapability) -> bool;

    /// Installs the transfer hook, replacing any previous one.
    fn install_transfer_hook(&mut self, hook: Box<dyn TransferHook>);
}
