//! User record validation and registration, one at a time or in bulk.
//!
//! This crate checks user-supplied names, email addresses, and passwords,
//! registers accepted users into an injected store, and imports candidate
//! users from comma-delimited text files.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Pure field predicates for names, emails, and passwords
//! - A registrar that validates a user and records it in a [`UserStore`]
//! - Bulk import of comma-delimited files under a selectable [`BulkLayout`]
//! - A command-line front end in [`cli`]
//!
//! # Example
//!
//! ```
//! use user_registry::{InMemoryUserStore, Registrar, UserInput};
//!
//! let mut registrar = Registrar::new(InMemoryUserStore::default());
//! let input = UserInput::new("Alice", "alice@test.com", "Secret99");
//!
//! let record = registrar.register_user(&input).expect("valid user");
//!
//! assert_eq!(record.name, "Alice");
//! assert_eq!(registrar.records().len(), 1);
//! ```

mod bulk;
pub mod cli;
mod config;
mod error;
pub mod observability;
mod record;
mod registrar;
mod store;
mod validation;

pub use bulk::{BulkLayout, import, load, process, register_bulk, register_chunked};
pub use config::{ConfigError, RegistrySettings};
pub use error::{BulkError, Field, RegistrationError, ValidationError};
pub use record::{UserInput, UserRecord};
pub use registrar::{Registrar, validate_user};
pub use store::{InMemoryUserStore, UserStore};
pub use validation::{
    ALLOWED_EMAIL_SUFFIXES, EmailDomainPolicy, NAME_MIN_EXCLUSIVE, PASSWORD_MIN_LEN,
    validate_email, validate_email_with, validate_name, validate_password,
};
