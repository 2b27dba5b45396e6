//! Caller-facing lifecycle error types.

use thiserror::Error;

use crate::authority::AuthorityError;
use crate::claims::ClaimError;
use crate::credential::{CredentialId, Identity};
use crate::ledger::LedgerError;

/// Errors surfaced by credential lifecycle operations.
///
/// All failures are synchronous and atomic: a failed operation leaves no
/// partial state mutation behind, and there is no retry logic in the core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialError {
    /// The identity has already claimed its credential. Permanent; the
    /// record survives recovery and self-burn.
    #[error("identity {identity} has already claimed its credential")]
    AlreadyClaimed {
        /// The identity that attempted a second claim.
        identity: Identity,
    },

    /// The caller is not permitted to perform this operation.
    #[error("caller {caller} is not authorized for this operation")]
    NotAuthorized {
        /// The unauthorized caller.
        caller: Identity,
    },

    /// The credential is not held by the stated identity.
    #[error("credential {id} is not held by {identity}")]
    NotHolder {
        /// The credential id.
        id: CredentialId,
        /// The identity stated as holder.
        identity: Identity,
    },

    /// A transfer was attempted on a locked credential. Permanent under the
    /// current design; no unlock path exists.
    #[error("credential {id} is locked and cannot be transferred")]
    CredentialLocked {
        /// The locked credential id.
        id: CredentialId,
    },

    /// The credential id has no recorded holder.
    #[error("unknown credential: {id}")]
    UnknownCredential {
        /// The unknown credential id.
        id: CredentialId,
    },

    /// Self-burn is not enabled in this deployment.
    #[error("self-burn is disabled in this deployment")]
    SelfBurnDisabled,

    /// Blanket operator approvals are permanently disabled for soulbound
    /// credentials.
    #[error("operator approvals are permanently disabled")]
    OperatorApprovalsDisabled,

    /// An ownership-ledger failure with no more specific mapping, such as
    /// the astronomically unlikely id collision at mint time.
    #[error("ownership ledger error: {0}")]
    Ledger(LedgerError),
}

impl From<ClaimError> for CredentialError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::AlreadyClaimed { identity } => Self::AlreadyClaimed { identity },
        }
    }
}

impl From<AuthorityError> for CredentialError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::NotAuthorized { caller } => Self::NotAuthorized { caller },
        }
    }
}

impl From<LedgerError> for CredentialError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnknownCredential { id } => Self::UnknownCredential { id },
            LedgerError::NotHolder { id, identity } => Self::NotHolder { id, identity },
            LedgerError::CredentialLocked { id } => Self::CredentialLocked { id },
            LedgerError::NotApproved { caller, .. } => Self::NotAuthorized { caller },
            other => Self::Ledger(other),
        }
    }
}
