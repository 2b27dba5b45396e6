//! Single-administrator authority gate.
//!
//! A composed "has-one-owner" capability: one distinguished identity may
//! perform privileged operations (recovery, authority handover). The gate
//! is injected into the lifecycle controller at construction; privileged
//! operations call [`AuthorityGate::require`] before doing anything else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credential::Identity;

/// Errors that can occur during authority checks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthorityError {
    /// The caller is not the current authority.
    #[error("caller {caller} is not the authority")]
    NotAuthorized {
        /// The unauthorized caller.
        caller: Identity,
    },
}

/// Restricts privileged operations to a designated administrator identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorityGate {
    /// The current authority identity.
    authority: Identity,
}

impl AuthorityGate {
    /// Creates a gate with the given initial authority.
    #[must_use]
    pub fn new(authority: Identity) -> Self {
        Self { authority }
    }

    /// Returns the current authority identity.
    #[must_use]
    pub fn current_authority(&self) -> &Identity {
        &self.authority
    }

    /// Checks that `caller` is the current authority.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotAuthorized`] otherwise.
    pub fn require(&self, caller: &Identity) -> Result<(), AuthorityError> {
        if caller == &self.authority {
            Ok(())
        } else {
            Err(AuthorityError::NotAuthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Hands the authority over to a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::NotAuthorized`] if `caller` is not the
    /// current authority.
    pub fn transfer_authority(
        &mut self,
        caller: &Identity,
        new_authority: Identity,
    ) -> Result<(), AuthorityError> {
        self.require(caller)?;
        self.authority = new_authority;
        Ok(())
    }
}
