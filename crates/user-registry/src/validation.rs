//! Field predicates for user names, email addresses, and passwords.
//!
//! Every predicate is pure and returns `bool`; composing them into a
//! pass/fail decision with a reported field is the registrar's job.
//!
//! # Validation Rules
//!
//! - Name: more than [`NAME_MIN_EXCLUSIVE`] characters
//! - Email: a non-empty username before the first `@` and one of
//!   [`ALLOWED_EMAIL_SUFFIXES`], located according to an
//!   [`EmailDomainPolicy`]
//! - Password: at least [`PASSWORD_MIN_LEN`] characters with an ASCII
//!   uppercase letter and an ASCII digit

/// Names must be strictly longer than this many characters.
pub const NAME_MIN_EXCLUSIVE: usize = 2;

/// Minimum allowed password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Domain suffixes accepted in email addresses.
pub const ALLOWED_EMAIL_SUFFIXES: &[&str] = &[".org", ".net", ".edu", ".ac", ".uk", ".com"];

/// Where an allowed suffix must appear for an email to be accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailDomainPolicy {
    /// A suffix may appear anywhere in the address.
    ///
    /// This accepts addresses such as `x.commercial@y.zzz` and is kept for
    /// compatibility with existing callers.
    #[default]
    Substring,
    /// The domain after the last `@` must end with a suffix.
    AnchoredDomain,
}

/// Validates a user name.
///
/// Callers that once passed non-string values had those rejected here; the
/// `&str` parameter now rules them out at compile time.
///
/// # Examples
///
/// ```
/// use user_registry::validate_name;
///
/// assert!(validate_name("Bob"));
/// assert!(!validate_name("Al"));
/// ```
#[must_use]
pub fn validate_name(name: &str) -> bool {
    name.chars().count() > NAME_MIN_EXCLUSIVE
}

/// Validates an email address under [`EmailDomainPolicy::Substring`].
///
/// # Examples
///
/// ```
/// use user_registry::validate_email;
///
/// assert!(validate_email("ab@x.com"));
/// assert!(!validate_email("@x.com"));     // Empty username
/// assert!(!validate_email("abc.com"));    // No '@'
/// assert!(!validate_email("a@x.zzz"));    // No allowed suffix
/// ```
#[must_use]
pub fn validate_email(email: &str) -> bool {
    validate_email_with(email, EmailDomainPolicy::Substring)
}

/// Validates an email address under the given domain policy.
#[must_use]
pub fn validate_email_with(email: &str, policy: EmailDomainPolicy) -> bool {
    let Some((username, _)) = email.split_once('@') else {
        return false;
    };
    if username.is_empty() {
        return false;
    }
    match policy {
        EmailDomainPolicy::Substring => ALLOWED_EMAIL_SUFFIXES
            .iter()
            .any(|suffix| email.contains(suffix)),
        EmailDomainPolicy::AnchoredDomain => {
            let domain = email.rsplit_once('@').map_or("", |(_, domain)| domain);
            ALLOWED_EMAIL_SUFFIXES
                .iter()
                .any(|suffix| domain.ends_with(suffix))
        }
    }
}

/// Validates password strength.
///
/// # Examples
///
/// ```
/// use user_registry::validate_password;
///
/// assert!(validate_password("Passw0rd"));
/// assert!(!validate_password("password1")); // No capital
/// ```
#[must_use]
pub fn validate_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return false;
    }
    let has_capital = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    has_capital && has_digit
}
