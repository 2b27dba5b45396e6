//! Claim registry implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ClaimError;
use crate::credential::Identity;

/// Tracks which identities have ever claimed a credential.
///
/// The record for an identity is created false by default, set true exactly
/// once by [`ClaimRegistry::mark_claimed`], and never reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimRegistry {
    /// Map of identity to "has claimed".
    claimed: HashMap<Identity, bool>,
}

impl ClaimRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the identity has ever claimed a credential.
    ///
    /// Read-only; identities with no record report `false`.
    #[must_use]
    pub fn has_claimed(&self, identity: &Identity) -> bool {
        self.claimed.get(identity).copied().unwrap_or(false)
    }

    /// Marks an identity as having claimed its credential.
    ///
    /// Intentionally not idempotent: calling twice for the same identity is
    /// an error, not a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::AlreadyClaimed`] if the identity has already
    /// claimed.
    pub fn mark_claimed(&mut self, identity: &Identity) -> Result<(), ClaimError> {
        if self.has_claimed(identity) {
            return Err(ClaimError::AlreadyClaimed {
                identity: identity.clone(),
            });
        }
        self.claimed.insert(identity.clone(), true);
        Ok(())
    }

    /// Returns the number of identities that have claimed.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claimed.values().filter(|claimed| **claimed).count()
    }

    /// Returns `true` if no identity has claimed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed_count() == 0
    }
}
