//! Seed file loading.

use std::path::Path;

use common::AppResult;
use domain::{SeedUser, User};

/// Read a JSON array of `{id, email, password, name}` records.
///
/// Uniqueness is checked when the records are handed to [`super::UserStore::new`].
pub async fn load_seed_file(path: &Path) -> AppResult<Vec<User>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let seeds: Vec<SeedUser> = serde_json::from_str(&raw)?;

    tracing::debug!(path = %path.display(), count = seeds.len(), "Seed file loaded");
    Ok(seeds.into_iter().map(User::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("user-service-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let path = temp_path("seed-ok");
        tokio::fs::write(
            &path,
            r#"[
                {"id": 5, "email": "erin@example.com", "password": "pw", "name": "Erin"},
                {"id": 9, "email": "frank@example.com", "password": "pw", "name": "Frank"}
            ]"#,
        )
        .await
        .unwrap();

        let users = load_seed_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "erin@example.com");
        assert_eq!(users[1].id, 9);
    }

    #[tokio::test]
    async fn test_load_seed_file_missing() {
        let result = load_seed_file(&temp_path("does-not-exist")).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_seed_file_malformed() {
        let path = temp_path("seed-bad");
        tokio::fs::write(&path, r#"{"id": 1}"#).await.unwrap();

        let result = load_seed_file(&path).await;
        tokio::fs::remove_file(&path).await.ok();

        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
