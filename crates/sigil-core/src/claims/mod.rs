//! Claim registry: at-most-one credential claim per identity.
//!
//! The registry records which identities have ever claimed a credential.
//! Claiming is a one-time, non-reversible fact about an identity: the
//! record is set true exactly once and is never reset, not even when the
//! resulting credential is later recovered or burned.
//!
//! # Key Concepts
//!
//! - **Claim record**: a per-identity boolean, false by default
//! - **At-most-one**: marking an already-claimed identity is an error, not
//!   a no-op — claiming is a rare, audited action and a duplicate attempt
//!   is a fault worth surfacing

mod error;
mod registry;


pub use error::ClaimError;
pub use registry::ClaimRegistry;
