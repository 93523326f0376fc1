//! Category taxonomy and catalog grouping
//!
//! The taxonomy is a fixed table: each known category carries a display
//! icon and an ordering weight, and anything unrecognized collapses into
//! `other`. Grouping is a pure function of the catalog; it never invents
//! categories that have no members.

use crate::catalog::{Catalog, ServiceDefinition, OTHER_CATEGORY};

/// Display metadata for one category bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub order: u32,
}

const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { name: "database", icon: "\u{1f5c4}\u{fe0f}", order: 1 },
    CategoryInfo { name: "cache", icon: "\u{26a1}", order: 2 },
    CategoryInfo { name: "messaging", icon: "\u{1f4e8}", order: 3 },
    CategoryInfo { name: "cloud", icon: "\u{2601}\u{fe0f}", order: 4 },
    CategoryInfo { name: "observability", icon: "\u{1f50d}", order: 5 },
    CategoryInfo { name: OTHER_CATEGORY, icon: "\u{1f527}", order: 99 },
];

fn fallback() -> CategoryInfo {
    CATEGORIES[CATEGORIES.len() - 1]
}

/// Look up a category's display metadata, falling back to `other`
pub fn category_info(name: &str) -> CategoryInfo {
    CATEGORIES
        .iter()
        .copied()
        .find(|c| c.name == name)
        .unwrap_or_else(fallback)
}

pub fn icon(name: &str) -> &'static str {
    category_info(name).icon
}

pub fn order(name: &str) -> u32 {
    category_info(name).order
}

/// Group the catalog's services by category.
///
/// Groups come back sorted by taxonomy order, ties broken by category
/// name, and within each group the services stay in catalog (name)
/// order. Only categories with at least one member appear.
pub fn categorize(catalog: &Catalog) -> Vec<(String, Vec<&ServiceDefinition>)> {
    let mut groups: Vec<(String, Vec<&ServiceDefinition>)> = Vec::new();

    for definition in catalog.values() {
        match groups.iter_mut().find(|(name, _)| *name == definition.category) {
            Some((_, members)) => members.push(definition),
            None => groups.push((definition.category.clone(), vec![definition])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| order(a).cmp(&order(b)).then_with(|| a.cmp(b)));
    groups
}
