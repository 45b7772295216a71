//! Password value object.
//!
//! SECURITY: passwords are stored and compared as plaintext. Records are
//! matched by exact string equality, so this type must not be used where
//! credentials need protection at rest.

/// Plaintext password value object.
///
/// Value object - immutable, compared by value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    plain: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("plain", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap a plaintext password.
    pub fn new(plain: impl Into<String>) -> Self {
        Self { plain: plain.into() }
    }

    /// Exact, case-sensitive comparison against a candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.plain == candidate
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password::new(s)
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Password::new(s)
    }
}
