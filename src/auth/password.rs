//! Password hashing and verification backed by bcrypt.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A bcrypt hash of a user's password.
///
/// The plaintext password is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `plaintext` with the default bcrypt cost.
    ///
    /// # Errors
    /// Returns [Error::HashingError] if the underlying hashing library fails.
    pub fn new(plaintext: &str) -> Result<Self, Error> {
        let hash = bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
            .map_err(|error| Error::HashingError(error.to_string()))?;

        Ok(Self(hash))
    }

    /// Wrap a string that is already a bcrypt hash, e.g. one loaded from the
    /// database.
    pub fn new_unchecked(hash: &str) -> Self {
        Self(hash.to_owned())
    }

    /// Check whether `plaintext` matches this hash.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::InvalidCredentials] if the password does not match,
    /// - [Error::HashingError] if the underlying hashing library fails.
    pub fn verify(&self, plaintext: &str) -> Result<(), Error> {
        let matches = bcrypt::verify(plaintext, &self.0)
            .map_err(|error| Error::HashingError(error.to_string()))?;

        if matches {
            Ok(())
        } else {
            Err(Error::InvalidCredentials)
        }
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
