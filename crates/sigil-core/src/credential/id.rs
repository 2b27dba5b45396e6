//! Identity newtype and deterministic credential id derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain-separation context for credential id derivation.
///
/// Follows the Blake3 `derive_key` convention of a globally unique,
/// hardcoded context string. Changing this string changes every derived id,
/// so it is versioned and must never be edited in place.
const DERIVATION_CONTEXT: &str = "sigil-core v1 credential-id";

/// Size of a credential id in bytes (256 bits).
pub const CREDENTIAL_ID_SIZE: usize = 32;

/// An opaque, globally unique actor reference.
///
/// Identities are externally supplied (e.g. a cryptographic account
/// address) and immutable. The newtype keeps them from being mixed with
/// other textual ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from its external representation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw bytes of the identity.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A 256-bit credential identifier.
///
/// Derived deterministically from exactly one [`Identity`] by
/// [`CredentialId::derive_from`]; immutable once derived. Rendered as hex
/// in display and error contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CredentialId([u8; CREDENTIAL_ID_SIZE]);

impl CredentialId {
    /// Derives the credential id for an identity.
    ///
    /// Pure and total over well-formed identities: no stored state is read
    /// or written, and the same identity always yields the same id.
    /// Distinct identities yield distinct ids up to Blake3's collision
    /// probability, which the core accepts as negligible.
    #[must_use]
    pub fn derive_from(identity: &Identity) -> Self {
        Self(blake3::derive_key(DERIVATION_CONTEXT, identity.as_bytes()))
    }

    /// Returns the raw id bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; CREDENTIAL_ID_SIZE] {
        &self.0
    }

    /// Reconstructs an id from raw bytes.
    ///
    /// Intended for callers that persisted an id externally; ids minted by
    /// this core always come from [`CredentialId::derive_from`].
    #[must_use]
    pub fn from_bytes(bytes: [u8; CREDENTIAL_ID_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
