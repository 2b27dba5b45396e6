//! Soulbound credential lifecycle kernel.
//!
//! `sigil-core` issues a single, non-transferable digital credential per
//! identity: one identity binds to at most one credential record, and the
//! credential cannot move between identities once issued.
//!
//! # Architecture
//!
//! ```text
//! claim ----> CredentialController --> CredentialId::derive_from
//!                    |                       (pure, Blake3)
//!                    +--> ClaimRegistry  (at-most-one claim per identity)
//!                    +--> OwnershipLedger (mint/burn/transfer primitive)
//!                    +--> LockStore      (born locked, never unlocked)
//!                    +--> EventLog       (Locked, Claimed)
//!
//! transfer --> OwnershipLedger --> LockGuard hook --> CredentialLocked
//! ```
//!
//! # Key Concepts
//!
//! - **Credential**: a non-transferable record binding one identity to one
//!   issued artifact
//! - **Claim**: the one-time act of an identity obtaining its credential;
//!   the claim record is permanent and survives revocation
//! - **Lock state**: a per-credential flag, set at mint, that blocks every
//!   transfer-class operation while the credential exists
//! - **Recovery**: authority-initiated destruction of a credential
//!   independent of the holder's consent
//!
//! # Determinism
//!
//! Credential ids are a pure function of the identity, so replaying the
//! same sequence of operations always produces the same ids, the same
//! state, and the same event log.
//!
//! # Example
//!
//! ```rust
//! use sigil_core::config::{ClaimMode, CoreConfig};
//! use sigil_core::credential::Identity;
//! use sigil_core::ledger::MemoryLedger;
//! use sigil_core::lifecycle::{CredentialController, CredentialError};
//!
//! # fn example() -> Result<(), CredentialError> {
//! let config = CoreConfig {
//!     claim_mode: ClaimMode::SelfService,
//!     self_burn_enabled: true,
//! };
//! let mut controller =
//!     CredentialController::new(config, Identity::from("admin"), MemoryLedger::new());
//!
//! let alice = Identity::from("alice");
//! let id = controller.claim(&alice, &alice)?;
//!
//! // Born locked; transfers fail for the credential's entire existence.
//! assert!(controller.locked(id)?);
//! let blocked = controller.transfer(&alice, &alice, &Identity::from("bob"), id);
//! assert!(matches!(blocked, Err(CredentialError::CredentialLocked { .. })));
//! # Ok(())
//! # }
//! ```

pub mod authority;
pub mod claims;
pub mod config;
pub mod credential;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod lock;

pub use authority::{AuthorityError, AuthorityGate};
pub use claims::{ClaimError, ClaimRegistry};
pub use config::{ClaimMode, ConfigError, CoreConfig};
pub use credential::{CredentialId, Identity};
pub use events::{CredentialEvent, EventLog};
pub use ledger::{LedgerCapability, LedgerError, MemoryLedger, OwnershipLedger, TransferHook};
pub use lifecycle::{CredentialController, CredentialError};
pub use lock::{LockGuard, LockStore, SharedLockStore};
