//! Whole-user validation and registration.
//!
//! The registrar runs the field predicates in a fixed order, reports the
//! first failing field, and stores accepted users in its [`UserStore`].

use tracing::{debug, info, warn};

use crate::error::{Field, RegistrationError, ValidationError};
use crate::record::{UserInput, UserRecord};
use crate::store::UserStore;
use crate::validation::{EmailDomainPolicy, validate_email_with, validate_name, validate_password};

/// Validates a user with the default email policy.
///
/// Checks name, then email, then password, stopping at the first failure.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first field that failed.
///
/// # Examples
///
/// ```
/// use user_registry::{Field, UserInput, validate_user};
///
/// let input = UserInput::new("Alice", "alice@test.zzz", "Secret99");
/// let err = validate_user(&input).expect_err("email is invalid");
///
/// assert_eq!(err.field(), Field::Email);
/// assert_eq!(err.to_string(), "Email validation failed.");
/// ```
pub fn validate_user(input: &UserInput) -> Result<(), ValidationError> {
    validate_user_with(input, EmailDomainPolicy::default())
}

fn validate_user_with(input: &UserInput, policy: EmailDomainPolicy) -> Result<(), ValidationError> {
    if !validate_name(&input.name) {
        return Err(ValidationError::new(Field::Name));
    }
    if !validate_email_with(&input.email, policy) {
        return Err(ValidationError::new(Field::Email));
    }
    if !validate_password(&input.password) {
        return Err(ValidationError::new(Field::Password));
    }
    Ok(())
}

/// Registers validated users into a store.
#[derive(Debug)]
pub struct Registrar<S> {
    store: S,
    email_policy: EmailDomainPolicy,
}

impl<S: UserStore> Registrar<S> {
    /// Creates a registrar using the default email policy.
    pub fn new(store: S) -> Self {
        Self::with_email_policy(store, EmailDomainPolicy::default())
    }

    /// Creates a registrar using `email_policy` for email checks.
    pub const fn with_email_policy(store: S, email_policy: EmailDomainPolicy) -> Self {
        Self {
            store,
            email_policy,
        }
    }

    /// Validates a user without registering it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first field that failed.
    pub fn validate_user(&self, input: &UserInput) -> Result<(), ValidationError> {
        match validate_user_with(input, self.email_policy) {
            Ok(()) => {
                debug!(name = %input.name, "user passed validation");
                Ok(())
            }
            Err(err) => {
                warn!(name = %input.name, field = %err.field(), "user failed validation");
                Err(err)
            }
        }
    }

    /// Validates a user and, on success, stores and returns its record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Invalid`] carrying the validation
    /// failure; nothing is stored in that case.
    pub fn register_user(&mut self, input: &UserInput) -> Result<UserRecord, RegistrationError> {
        self.validate_user(input)?;
        let record = UserRecord::from(input.clone());
        self.store.insert(record.clone());
        info!(name = %record.name, "user registered");
        Ok(record)
    }

    /// Returns every record registered so far, oldest first.
    pub fn records(&self) -> &[UserRecord] {
        self.store.records()
    }

    /// Consumes the registrar and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
