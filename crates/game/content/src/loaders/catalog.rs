//! Weapon and target catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for weapon/target catalogs from RON files.
///
/// # Format
///
/// ```ron
/// (
///     weapons: [
///         (id: "rifle", hit_probability: 0.8),
///     ],
///     targets: [
///         (id: "deer", point_value: 10, appearance: Some("The deer looks around cautiously.")),
///     ],
/// )
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the catalog
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    ///
    /// Weapon probabilities are validated while deserializing; the catalog as a
    /// whole must be non-empty and free of duplicate ids.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        anyhow::ensure!(catalog.weapon_count() > 0, "catalog defines no weapons");
        anyhow::ensure!(catalog.target_count() > 0, "catalog defines no targets");

        let mut weapon_ids = HashSet::new();
        for weapon in catalog.weapons() {
            anyhow::ensure!(
                weapon_ids.insert(weapon.id()),
                "duplicate weapon id '{}'",
                weapon.id()
            );
        }

        let mut target_ids = HashSet::new();
        for target in catalog.targets() {
            anyhow::ensure!(
                target_ids.insert(target.id()),
                "duplicate target id '{}'",
                target.id()
            );
        }

        tracing::debug!(
            weapons = catalog.weapon_count(),
            targets = catalog.target_count(),
            "catalog parsed"
        );
        Ok(catalog)
    }
}
