//! Credential event vocabulary and the append-only event log.
//!
//! Events are ordered, append-only, and externally observable. The
//! vocabulary is fixed: `Locked` is emitted once per credential at mint,
//! `Claimed` once per successful claim. `Unlocked` is defined but never
//! emitted by this core; it is reserved for a future unlock path and kept
//! in the vocabulary deliberately.

use serde::{Deserialize, Serialize};

use crate::credential::{CredentialId, Identity};

/// An externally observable credential lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CredentialEvent {
    /// The credential was locked. Emitted once, at mint.
    Locked {
        /// The locked credential id.
        id: CredentialId,
    },

    /// Reserved: the credential was unlocked. Never emitted by this core.
    Unlocked {
        /// The unlocked credential id.
        id: CredentialId,
    },

    /// An identity claimed its credential.
    Claimed {
        /// The claiming identity.
        identity: Identity,
        /// The credential id issued to it.
        id: CredentialId,
    },
}

/// Ordered, append-only log of credential events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<CredentialEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event. Events can only be added, never modified or
    /// removed.
    pub fn record(&mut self, event: CredentialEvent) {
        self.events.push(event);
    }

    /// Returns all recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[CredentialEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
