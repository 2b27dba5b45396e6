//! Claim-registry error types.

use thiserror::Error;

use crate::credential::Identity;

/// Errors that can occur during claim-registry operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClaimError {
    /// The identity has already claimed its credential.
    #[error("identity {identity} has already claimed its credential")]
    AlreadyClaimed {
        /// The identity that attempted a second claim.
        identity: Identity,
    },
}
