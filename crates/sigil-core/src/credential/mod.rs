//! Identity and credential identifier types.
//!
//! A [`CredentialId`] is derived deterministically from exactly one
//! [`Identity`] via Blake3. The derivation is a pure function: it consults
//! no stored state, and two distinct identities produce distinct ids up to
//! the hash function's negligible collision probability. No explicit
//! collision handling is performed anywhere in the core.

mod id;

#[cfg(test)]
mod tests;

pub use id::{CREDENTIAL_ID_SIZE, CredentialId, Identity};
