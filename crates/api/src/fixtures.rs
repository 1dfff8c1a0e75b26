//! Fixture data loaded once at startup.
//!
//! The data directory holds three JSON arrays:
//!
//! ```text
//! <data_dir>/products.json
//! <data_dir>/brands.json
//! <data_dir>/users.json
//! ```
//!
//! Records may carry an `id`; it is ignored and reassigned by the stores in
//! file order. Malformed records (e.g. a non-numeric `categoryId`) fail the
//! whole load.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use catalog_mock_core::{NewBrand, NewProduct, NewUser};

/// File name of the product fixtures.
pub const PRODUCTS_FILE: &str = "products.json";
/// File name of the brand fixtures.
pub const BRANDS_FILE: &str = "brands.json";
/// File name of the user fixtures.
pub const USERS_FILE: &str = "users.json";

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid JSON array of the expected records.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Seed data for the catalog.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub products: Vec<NewProduct>,
    pub brands: Vec<NewBrand>,
    pub users: Vec<NewUser>,
}

impl Fixtures {
    /// Load all three fixture files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if any file is missing, unreadable, or malformed.
    pub fn load(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            products: read_json(&dir.join(PRODUCTS_FILE))?,
            brands: read_json(&dir.join(BRANDS_FILE))?,
            users: read_json(&dir.join(USERS_FILE))?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_mock_core::BrandId;

    use super::*;

    fn repo_fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../initial-data")
    }

    #[test]
    fn test_load_repo_fixtures() {
        let fixtures = Fixtures::load(&repo_fixtures_dir()).unwrap();

        assert_eq!(fixtures.brands.len(), 5);
        assert_eq!(fixtures.brands[1].name, "Ray Ban");
        assert_eq!(fixtures.products.len(), 11);
        assert_eq!(fixtures.products[4].name, "Glasses");
        assert_eq!(fixtures.products[4].category_id, BrandId::new(2));
        assert!(
            fixtures
                .users
                .iter()
                .any(|user| user.login.matches("greenlion235", "waters"))
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(BRANDS_FILE), "[]").unwrap();

        let err = Fixtures::load(dir.path()).unwrap_err();
        match err {
            FixtureError::Read { path, .. } => assert!(path.ends_with(USERS_FILE)),
            FixtureError::Parse { .. } => panic!("expected read error"),
        }
    }

    #[test]
    fn test_missing_dir_is_read_error() {
        let err = Fixtures::load(Path::new("/definitely/not/here")).unwrap_err();
        match err {
            FixtureError::Read { path, .. } => assert!(path.ends_with(PRODUCTS_FILE)),
            FixtureError::Parse { .. } => panic!("expected read error"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(BRANDS_FILE), "[{\"name\": }]").unwrap();
        std::fs::write(dir.path().join(USERS_FILE), "[]").unwrap();

        let err = Fixtures::load(dir.path()).unwrap_err();
        match err {
            FixtureError::Parse { path, .. } => assert!(path.ends_with(BRANDS_FILE)),
            FixtureError::Read { .. } => panic!("expected parse error"),
        }
    }

    #[test]
    fn test_bad_category_id_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PRODUCTS_FILE),
            r#"[{"categoryId": "a", "name": "x", "description": "x", "price": 1, "imageUrls": []}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(BRANDS_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(USERS_FILE), "[]").unwrap();

        let err = Fixtures::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
