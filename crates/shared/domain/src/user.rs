//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::FIRST_USER_ID;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Numeric user identifier, assigned at registration
pub type UserId = i64;

/// Case-insensitive email comparison used for lookups and uniqueness.
///
/// Compares char by char on single-char case mappings, so `"ß"` never
/// equals `"SS"` while `'\u{130}'` (dotted capital I) equals `'i'`.
pub fn emails_match(a: &str, b: &str) -> bool {
    a == b || fold_email(a) == fold_email(b)
}

/// Per-char case fold behind [`emails_match`]: upper-case, then lower-case.
pub(crate) fn fold_email(email: &str) -> String {
    email.chars().map(|c| simple_lower(simple_upper(c))).collect()
}

// Multi-char mappings (e.g. 'ß' -> "SS") leave the char as is
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// Only '\u{130}' lower-cases to more than one char; its leading 'i' is the simple form
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Fail with a conflict if any of `users` already holds `email` (ignoring case).
pub fn ensure_email_available<'a>(
    users: impl IntoIterator<Item = &'a User>,
    email: &str,
) -> DomainResult<()> {
    if users.into_iter().any(|u| u.has_email(email)) {
        return Err(DomainError::conflict("Email"));
    }
    Ok(())
}

/// User domain entity
///
/// Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub name: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<Password>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Check if this record's email equals `email`, ignoring case
    pub fn has_email(&self, email: &str) -> bool {
        emails_match(&self.email, email)
    }

    /// Check email (case-insensitive) and password (exact) together
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.has_email(email) && self.password.matches(password)
    }

    /// Id for the next record appended after `users`.
    ///
    /// Derived from the current maximum rather than a counter; starts at
    /// [`FIRST_USER_ID`] for an empty directory.
    pub fn next_id<'a>(users: impl IntoIterator<Item = &'a User>) -> DomainResult<UserId> {
        match users.into_iter().map(|u| u.id).max() {
            None => Ok(FIRST_USER_ID),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| DomainError::validation("User id space exhausted")),
        }
    }
}

/// Registration input
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// User email address
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// User display name
    pub name: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Build the stored record once an id has been assigned
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.email, self.password, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> User {
        User::new(1, "bob@example.com", "password", "Bob")
    }

    #[test]
    fn test_email_match_ignores_case() {
        let user = bob();

        assert!(user.has_email("bob@example.com"));
        assert!(user.has_email("BOB@EXAMPLE.COM"));
        assert!(user.has_email("Bob@Example.Com"));
        assert!(!user.has_email("bob@example.org"));
    }

    #[test]
    fn test_email_match_folds_each_char() {
        assert!(emails_match("\u{130}@x.com", "i@x.com"));
        assert!(emails_match("\u{212A}ate@x.com", "kate@x.com"));
        assert!(emails_match("STRASSE@x.com", "strasse@x.com"));
        assert!(!emails_match("stra\u{DF}e@x.com", "STRASSE@x.com"));
        assert!(!emails_match("a@x.com", "ab@x.com"));
    }

    #[test]
    fn test_credentials_require_exact_password() {
        let user = bob();

        assert!(user.has_credentials("BOB@example.com", "password"));
        assert!(!user.has_credentials("bob@example.com", "PASSWORD"));
        assert!(!user.has_credentials("alice@example.com", "password"));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let users = vec![
            User::new(1, "a@example.com", "x", "A"),
            User::new(7, "b@example.com", "x", "B"),
            User::new(3, "c@example.com", "x", "C"),
        ];

        assert_eq!(User::next_id(&users), Ok(8));
    }

    #[test]
    fn test_next_id_for_empty_directory() {
        let users: Vec<User> = Vec::new();
        assert_eq!(User::next_id(&users), Ok(FIRST_USER_ID));
    }

    #[test]
    fn test_next_id_overflow() {
        let users = vec![User::new(i64::MAX, "a@example.com", "x", "A")];
        assert!(matches!(User::next_id(&users), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_email_availability() {
        let users = vec![bob()];

        assert!(ensure_email_available(&users, "carol@example.com").is_ok());
        assert_eq!(
            ensure_email_available(&users, "BOB@example.com"),
            Err(DomainError::conflict("Email"))
        );
    }

    #[test]
    fn test_password_is_not_serialized() {
        let json = serde_json::to_value(bob()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Bob");
        assert!(json.get("password").is_none());
    }
}
