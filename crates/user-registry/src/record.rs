//! User input and accepted record types.
//!
//! Both types carry the same three fields; a [`UserRecord`] is only produced
//! by registration or bulk import.

use serde::{Deserialize, Serialize};

/// Candidate user fields as supplied on the command line or in a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    /// User name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl UserInput {
    /// Builds an input from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An accepted user.
///
/// # Example
///
/// ```
/// use user_registry::{UserInput, UserRecord};
///
/// let input = UserInput::new("Alice", "alice@test.com", "Secret99");
/// let record = UserRecord::from(input);
///
/// assert_eq!(record.email, "alice@test.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl From<UserInput> for UserRecord {
    fn from(input: UserInput) -> Self {
        let UserInput {
            name,
            email,
            password,
        } = input;
        Self {
            name,
            email,
            password,
        }
    }
}
