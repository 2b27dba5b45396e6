//! Ownership-ledger error types.

use thiserror::Error;

use crate::credential::{CredentialId, Identity};

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LedgerError {
    /// The credential id has no recorded holder.
    #[error("unknown credential: {id}")]
    UnknownCredential {
        /// The id with no recorded holder.
        id: CredentialId,
    },

    /// The credential is not held by the stated identity.
    #[error("credential {id} is not held by {identity}")]
    NotHolder {
        /// The credential id.
        id: CredentialId,
        /// The identity that was claimed to hold it.
        identity: Identity,
    },

    /// A credential with this id has already been minted.
    #[error("credential already exists: {id}")]
    AlreadyExists {
        /// The duplicate credential id.
        id: CredentialId,
    },

    /// The caller is neither the holder nor approved for the credential.
    #[error("caller {caller} is not approved to transfer credential {id}")]
    NotApproved {
        /// The unauthorized caller.
        caller: Identity,
        /// The credential id.
        id: CredentialId,
    },

    /// A transfer hook vetoed the operation: the credential is locked.
    #[error("credential {id} is locked and cannot be transferred")]
    CredentialLocked {
        /// The locked credential id.
        id: CredentialId,
    },

    /// A batch transfer was requested with no credential ids.
    #[error("batch transfer requires at least one credential id")]
    EmptyBatch,

    /// A shared state store was poisoned by a panicking writer.
    #[error("lock state store poisoned")]
    StorePoisoned,
}
