//! Type-safe player identifier.
//!
//! [`PlayerId`] is a newtype wrapper around an opaque base-36 string
//! providing type safety so that player identifiers cannot be confused
//! with other strings such as names or raw request input.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Characters used for generated identifiers.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated identifier.
const ID_LEN: usize = 8;

/// Unique identifier for a roster player.
///
/// Generated once at player creation time and immutable thereafter.
/// Bulk roster replacement accepts caller-supplied identifiers verbatim,
/// so the inner value is an arbitrary non-empty string rather than a
/// fixed-width format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Generates a new random `PlayerId` (8 lowercase base-36 characters).
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self::generate_with(&mut rng)
    }

    /// Generates a random `PlayerId` from the given RNG.
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET.choose(rng).copied().unwrap_or(b'0')))
            .collect();
        Self(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}
