//! Dataset loading.
//!
//! A dataset is a directory tree of JSON files. Each file belongs to the
//! resource type named by the closest enclosing `brands`, `catalog_items`,
//! `railways` or `scales` directory.

use crate::domain::config::DatasetConfig;
use crate::domain::error::{SeedingError, SeedingResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The kinds of resources a dataset can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Brands,
    CatalogItems,
    Railways,
    Scales,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Brands,
        ResourceType::CatalogItems,
        ResourceType::Railways,
        ResourceType::Scales,
    ];

    /// Directory name for this resource type
    pub fn dir_name(&self) -> &'static str {
        match self {
            ResourceType::Brands => "brands",
            ResourceType::CatalogItems => "catalog_items",
            ResourceType::Railways => "railways",
            ResourceType::Scales => "scales",
        }
    }

    fn from_os_str(input: &OsStr) -> Option<ResourceType> {
        let name = input.to_str()?;
        Self::ALL.into_iter().find(|t| t.dir_name() == name)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One dataset file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub file_name: String,
    /// Location relative to the dataset root
    pub path: PathBuf,
    pub resource_type: ResourceType,
    pub content: String,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.resource_type, self.path.display())
    }
}

/// Resources grouped by type, each group in path order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub brands: Vec<Resource>,
    pub catalog_items: Vec<Resource>,
    pub railways: Vec<Resource>,
    pub scales: Vec<Resource>,
}

impl Dataset {
    /// Load every JSON resource below `root`.
    pub fn from_path(root: &Path, config: &DatasetConfig) -> SeedingResult<Dataset> {
        if !root.exists() {
            return Err(SeedingError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(SeedingError::NotADirectory(root.to_path_buf()));
        }

        let mut dataset = Dataset::default();
        for resource in read_files(root, config)? {
            tracing::debug!("Loaded {}", resource);
            dataset.push(resource);
        }

        tracing::debug!("Dataset {} loaded: {} resource(s)", root.display(), dataset.len());
        Ok(dataset)
    }

    pub fn push(&mut self, resource: Resource) {
        match resource.resource_type {
            ResourceType::Brands => self.brands.push(resource),
            ResourceType::CatalogItems => self.catalog_items.push(resource),
            ResourceType::Railways => self.railways.push(resource),
            ResourceType::Scales => self.scales.push(resource),
        }
    }

    pub fn len(&self) -> usize {
        self.brands.len() + self.catalog_items.len() + self.railways.len() + self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resources in seeding order: scales, railways and brands come before
    /// the catalog items referring to them.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.scales
            .iter()
            .chain(self.railways.iter())
            .chain(self.brands.iter())
            .chain(self.catalog_items.iter())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} brand(s)\n{} catalog item(s)\n{} railway(s)\n{} scale(s)",
            self.brands.len(),
            self.catalog_items.len(),
            self.railways.len(),
            self.scales.len()
        )
    }
}

fn read_files(root: &Path, config: &DatasetConfig) -> SeedingResult<Vec<Resource>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(config.max_depth)
        .follow_links(config.follow_links)
        .sort_by_file_name();

    let mut results = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_json(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let resource_type = resource_type_from_path(root, relative)?;
        let content = fs::read_to_string(entry.path())?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        results.push(Resource {
            file_name,
            path: relative.to_path_buf(),
            resource_type,
            content,
        });
    }
    Ok(results)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Closest enclosing resource directory of `relative`, else `root` itself.
fn resource_type_from_path(root: &Path, relative: &Path) -> SeedingResult<ResourceType> {
    let from_relative = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| ResourceType::from_os_str(c.as_os_str()))
        .last();

    from_relative
        .or_else(|| root.file_name().and_then(ResourceType::from_os_str))
        .ok_or_else(|| SeedingError::UnknownResourceType(root.join(relative)))
}
