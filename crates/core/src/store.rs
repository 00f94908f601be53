//! Catalog and favorites storage
//!
//! The search engine only sees values. These stores are where those values
//! come from: the catalog from the built-in list or a file, favorites from
//! a small JSON file in the user's data directory.

use crate::error::{Error, ErrorCode, Result};
use devhub_search::{Catalog, FavoriteSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Built-in catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Loads catalogs
pub struct CatalogStore;

impl CatalogStore {
    /// The built-in DevHub catalog
    pub fn builtin() -> Result<Catalog> {
        Catalog::from_toml(BUILTIN_CATALOG)
            .map_err(|e| Error::from(e).with_context("Built-in catalog is invalid"))
    }

    /// Load a catalog from `path`, or the built-in one when `None`
    pub fn load(path: Option<&Path>) -> Result<Catalog> {
        let Some(path) = path else {
            return Self::builtin();
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_context(format!("Reading catalog {}", path.display()))
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Catalog::from_json(&content),
            Some("toml") => Catalog::from_toml(&content),
            _ => {
                return Err(Error::new(
                    ErrorCode::InvalidFormat,
                    format!("Unsupported catalog format: {}", path.display()),
                )
                .with_suggestion("Use a .json or .toml catalog file"))
            }
        }
        .map_err(|e| Error::from(e).with_context(format!("Loading catalog {}", path.display())))?;

        tracing::debug!(path = %path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

/// Persists a [`FavoriteSet`] as a JSON array of slugs
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read favorites; a missing file is an empty set
    pub fn load(&self) -> Result<FavoriteSet> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No favorites file yet");
                return Ok(FavoriteSet::new());
            }
            Err(e) => {
                return Err(Error::from(e)
                    .with_context(format!("Reading favorites {}", self.path.display())))
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            Error::favorites(format!("Favorites file is not a JSON array of slugs: {}", e))
                .with_context(self.path.display().to_string())
                .with_suggestion("Delete the file to start with an empty favorites list")
                .with_source(e)
        })
    }

    /// Write favorites through a temp file in the same directory
    pub fn save(&self, favorites: &FavoriteSet) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(favorites)
            .map_err(|e| Error::favorites("Could not serialize favorites").with_source(e))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| {
            Error::from(e.error).with_context(format!("Writing favorites {}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), count = favorites.len(), "Favorites saved");
        Ok(())
    }

    /// Flip `slug` in the stored set and return its new membership
    ///
    /// The slug must exist in `catalog`.
    pub fn toggle(&self, slug: &str, catalog: &Catalog) -> Result<bool> {
        if catalog.get(slug).is_none() {
            return Err(Error::unknown_slug(slug, catalog.closest_slug(slug)));
        }
        let mut favorites = self.load()?;
        let now_favorite = favorites.toggle(slug);
        self.save(&favorites)?;
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devhub_search::ItemKind;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = CatalogStore::builtin().unwrap();
        assert!(catalog.get("json-yaml").is_some());
        assert!(catalog.items().iter().any(|item| item.kind == ItemKind::Cheatsheet));
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"name": "A", "slug": "a", "description": "", "category": "X", "kind": "tool"}]"#,
        )
        .unwrap();
        let catalog = CatalogStore::load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "items: []").unwrap();
        let err = CatalogStore::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_load_duplicate_slugs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"name": "A", "slug": "a", "description": "", "category": "X", "kind": "tool"},
                {"name": "B", "slug": "a", "description": "", "category": "X", "kind": "tool"}]"#,
        )
        .unwrap();
        let err = CatalogStore::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = CatalogStore::load(Some(Path::new("/no/such/catalog.json"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_favorites_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_favorites_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path().join("nested").join("favorites.json"));
        let favorites: FavoriteSet = ["jwt", "color"].into_iter().collect();
        store.save(&favorites).unwrap();
        assert_eq!(store.load().unwrap(), favorites);
    }

    #[test]
    fn test_favorites_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        let err = FavoritesStore::new(&path).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::FavoritesError);
    }

    #[test]
    fn test_toggle() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        let catalog = CatalogStore::builtin().unwrap();

        assert!(store.toggle("uuid-generator", &catalog).unwrap());
        assert!(store.load().unwrap().contains("uuid-generator"));
        assert!(!store.toggle("uuid-generator", &catalog).unwrap());
        assert!(store.load().unwrap().is_empty());

        let err = store.toggle("nope", &catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownSlug);

        let err = store.toggle("uuid-generater", &catalog).unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("Did you mean 'uuid-generator'?"));
    }
}
