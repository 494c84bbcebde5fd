//! The seeding run: load the dataset, parse it and check it.

use crate::core::dataset::{Dataset, Resource, ResourceType};
use crate::core::parser::{ParsedResource, Parser};
use crate::domain::config::SeedingConfig;
use crate::domain::error::SeedingResult;
use crate::domain::options::CommandOptions;
use crate::domain::resources::{Brand, CatalogItem, Railway, Scale};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::path::Path;

/// A problem found in one dataset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIssue {
    pub file_name: String,
    /// Location relative to the dataset root
    pub path: String,
    pub resource_type: ResourceType,
    pub message: String,
}

/// Outcome of a seeding run over a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedingReport {
    pub brands: usize,
    pub catalog_items: usize,
    pub railways: usize,
    pub scales: usize,
    pub issues: Vec<ResourceIssue>,
}

impl SeedingReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn total(&self) -> usize {
        self.brands + self.catalog_items + self.railways + self.scales
    }
}

/// Parsed models, remembering which file each came from
#[derive(Debug, Default)]
struct Catalog<'a> {
    brands: Vec<(&'a Resource, Brand)>,
    catalog_items: Vec<(&'a Resource, CatalogItem)>,
    railways: Vec<(&'a Resource, Railway)>,
    scales: Vec<(&'a Resource, Scale)>,
}

impl<'a> Catalog<'a> {
    fn add(&mut self, resource: &'a Resource, parsed: ParsedResource) {
        match parsed {
            ParsedResource::Brands(v) => {
                self.brands.extend(v.into_iter().map(|b| (resource, b)))
            }
            ParsedResource::CatalogItems(v) => {
                self.catalog_items.extend(v.into_iter().map(|c| (resource, c)))
            }
            ParsedResource::Railways(v) => {
                self.railways.extend(v.into_iter().map(|r| (resource, r)))
            }
            ParsedResource::Scales(v) => {
                self.scales.extend(v.into_iter().map(|s| (resource, s)))
            }
        }
    }
}

/// Runs the seeding pass for a set of command options
pub struct Seeder {
    parser: Parser,
    config: SeedingConfig,
}

impl Seeder {
    pub fn new(config: SeedingConfig) -> Self {
        Self {
            parser: Parser::new(),
            config,
        }
    }

    /// Run the command. Without a dataset directory there is nothing to do
    /// and `Ok(None)` comes back without touching anything.
    pub fn run(&self, options: &CommandOptions) -> SeedingResult<Option<SeedingReport>> {
        match options.dataset.as_deref() {
            Some(root) => self.seed(root).map(Some),
            None => Ok(None),
        }
    }

    /// Load, parse and check the dataset below `root`.
    pub fn seed(&self, root: &Path) -> SeedingResult<SeedingReport> {
        tracing::info!("Seeding from {}", root.display());
        let dataset = Dataset::from_path(root, &self.config.dataset)?;
        Ok(self.check(&dataset))
    }

    /// Parse every resource of `dataset` and collect the issues.
    pub fn check(&self, dataset: &Dataset) -> SeedingReport {
        let mut report = SeedingReport::default();
        let mut catalog = Catalog::default();

        for resource in dataset.resources() {
            match self.parser.parse(resource) {
                Ok(parsed) => {
                    tracing::debug!("Parsed {} ({} record(s))", resource, parsed.len());
                    catalog.add(resource, parsed);
                }
                Err(e) => {
                    tracing::warn!("Rejected {}: {}", resource, e);
                    report.issues.push(issue(resource, e.to_string()));
                }
            }
        }

        report.brands = catalog.brands.len();
        report.catalog_items = catalog.catalog_items.len();
        report.railways = catalog.railways.len();
        report.scales = catalog.scales.len();

        check_duplicates(&catalog, &mut report);
        if self.config.dataset.check_references {
            check_references(&catalog, &mut report);
        }

        tracing::info!(
            "Seeding checked {} record(s), {} issue(s)",
            report.total(),
            report.issues.len()
        );
        report
    }
}

fn issue(resource: &Resource, message: String) -> ResourceIssue {
    ResourceIssue {
        file_name: resource.file_name.clone(),
        path: resource.path.display().to_string(),
        resource_type: resource.resource_type,
        message,
    }
}

/// A catalog item is identified by its brand and item number together
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ItemKey<'a> {
    brand: &'a str,
    item_number: &'a str,
}

impl fmt::Display for ItemKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.item_number)
    }
}

fn check_duplicates(catalog: &Catalog<'_>, report: &mut SeedingReport) {
    fn scan<'a, T, K>(
        entries: &'a [(&'a Resource, T)],
        what: &str,
        key: impl Fn(&'a T) -> K,
        report: &mut SeedingReport,
    ) where
        K: Hash + Eq + fmt::Display,
    {
        let mut seen = HashSet::new();
        for (resource, value) in entries {
            let k = key(value);
            if seen.contains(&k) {
                report.issues.push(issue(resource, format!("duplicate {} '{}'", what, k)));
            } else {
                seen.insert(k);
            }
        }
    }

    scan(&catalog.brands, "brand", |b| b.name.as_str(), report);
    scan(&catalog.railways, "railway", |r| r.name.as_str(), report);
    scan(&catalog.scales, "scale", |s| s.name.as_str(), report);
    scan(
        &catalog.catalog_items,
        "catalog item",
        |c| ItemKey {
            brand: &c.brand,
            item_number: &c.item_number,
        },
        report,
    );
}

fn check_references(catalog: &Catalog<'_>, report: &mut SeedingReport) {
    let brands: HashSet<&str> = catalog.brands.iter().map(|(_, b)| b.name.as_str()).collect();
    let railways: HashSet<&str> = catalog.railways.iter().map(|(_, r)| r.name.as_str()).collect();
    let scales: HashSet<&str> = catalog.scales.iter().map(|(_, s)| s.name.as_str()).collect();

    for (resource, item) in &catalog.catalog_items {
        let label = format!("{} {}", item.brand, item.item_number);
        if !brands.contains(item.brand.as_str()) {
            report
                .issues
                .push(issue(resource, format!("{}: unknown brand '{}'", label, item.brand)));
        }
        if !scales.contains(item.scale.as_str()) {
            report
                .issues
                .push(issue(resource, format!("{}: unknown scale '{}'", label, item.scale)));
        }
        for rolling_stock in &item.rolling_stocks {
            if !railways.contains(rolling_stock.railway.as_str()) {
                report.issues.push(issue(
                    resource,
                    format!("{}: unknown railway '{}'", label, rolling_stock.railway),
                ));
            }
        }
    }
}
