//! Domain-level constants.
//!
//! These constants define the default seed and mail defaults.

// =============================================================================
// Identity
// =============================================================================

/// Id assigned to the first record of an empty directory
pub const FIRST_USER_ID: i64 = 1;

// =============================================================================
// Default Seed
// =============================================================================

/// Password shared by every seeded account
pub const SEED_PASSWORD: &str = "password";

/// Seeded accounts as `(id, email, name)`, in directory order
pub const SEED_USERS: &[(i64, &str, &str)] = &[
    (1, "bob@example.com", "Bob"),
    (2, "alice@example.com", "Alice"),
    (3, "tom@example.com", "Tom"),
];

// =============================================================================
// Mail
// =============================================================================

/// Default sender address for notification mails
pub const DEFAULT_MAIL_FROM: &str = "noreply@example.com";

/// Default product name used in mail subjects
pub const DEFAULT_PRODUCT_NAME: &str = "User Directory";
