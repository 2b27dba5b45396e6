//! Credential lifecycle controller.
//!
//! The sole component with business logic. Orchestrates the claim registry,
//! identifier deriver, ownership ledger, and lock state store into the
//! per-credential state machine:
//!
//! ```text
//! NonExistent --claim--> Claimed (locked) --recover/self_burn--> Destroyed
//! ```
//!
//! There is no path back: the claim record persists across destruction, so
//! a recovered identity can never claim again, and no unlock path exists.
//!
//! # Security Properties
//!
//! - **No double issuance**: at most one claim per identity, ever
//! - **No unauthorized transfer**: every transfer variant is intercepted by
//!   the lock guard before any state mutation
//! - **No orphaned state**: burn and recovery remove the holder record, the
//!   lock record, and the ledger entry together
//!
//! # Example
//!
//! ```rust
//! use sigil_core::config::CoreConfig;
//! use sigil_core::credential::Identity;
//! use sigil_core::ledger::MemoryLedger;
//! use sigil_core::lifecycle::CredentialController;
//!
//! # fn example() -> Result<(), sigil_core::lifecycle::CredentialError> {
//! let admin = Identity::from("admin");
//! let mut controller =
//!     CredentialController::new(CoreConfig::default(), admin.clone(), MemoryLedger::new());
//!
//! let id = controller.claim(&admin, &Identity::from("alice"))?;
//! assert!(controller.locked(id)?);
//! # Ok(())
//! # }
//! ```

mod controller;
mod error;

#[cfg(test)]
mod tests;

pub use controller::CredentialController;
pub use error::CredentialError;
