//! Registry crate for the Taifin operation catalog.
//!
//! The catalog is a static table (`catalog::CATALOG`): one entry per stable
//! operation id, carrying the endpoint template, upstream kind and
//! post-processing policy. [`Registry::bootstrap`] indexes it once at
//! startup; the result is immutable for the process lifetime.

pub mod catalog;

pub use catalog::{
    BANK_NAME_KEYS, CATALOG, COMPANY_NAME_KEYS, CONTRACT_KEYS, FUEL_PRODUCT_KEYS, INDUSTRY_KEYS,
    PIVOT_RATE_ENDPOINT, REGION_KEYS, SECURITY_CODE_KEYS, TAX_ITEM_KEYS,
};

use indexmap::IndexMap;
use taifin_types::DispatchEntry;

/// Immutable, id-indexed view over the static catalog.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<&'static str, DispatchEntry>,
}

impl Registry {
    /// Index the static catalog. Called once at startup; later lookups are
    /// pure reads.
    pub fn bootstrap() -> Self {
        let mut entries = IndexMap::with_capacity(CATALOG.len());
        for entry in CATALOG {
            entries.insert(entry.operation_id, *entry);
        }
        Self { entries }
    }

    /// Pure lookup. Unknown ids yield `None`, never a panic — the caller
    /// turns that into an `UnknownOperation` failure.
    pub fn resolve(&self, operation_id: &str) -> Option<&DispatchEntry> {
        self.entries.get(operation_id)
    }

    /// All entries in catalog declaration order.
    pub fn operations(&self) -> impl Iterator<Item = &DispatchEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use taifin_types::{PostProcess, UpstreamKind};

    /// The table is the external contract: ids must be present and unique.
    #[test]
    fn catalog_non_empty_and_unique_ids() {
        let registry = Registry::bootstrap();
        assert!(!registry.is_empty(), "catalog must not be empty");
        assert_eq!(
            registry.len(),
            CATALOG.len(),
            "duplicate operation ids collapse in the index"
        );

        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.operation_id), "duplicate id: {}", entry.operation_id);
        }
    }

    /// Identifier-naming discipline is what makes loose external routing
    /// safe, so prefix ↔ category agreement is enforced here.
    #[test]
    fn id_prefix_agrees_with_category() {
        for entry in CATALOG {
            let matches = entry
                .category
                .id_prefixes()
                .iter()
                .any(|prefix| entry.operation_id.starts_with(prefix));
            assert!(
                matches,
                "{} does not carry a prefix of {:?}",
                entry.operation_id, entry.category
            );
        }
    }

    #[test]
    fn derived_entries_have_no_endpoint_and_no_source() {
        for entry in CATALOG {
            match entry.upstream {
                UpstreamKind::Derived => {
                    assert!(entry.source.is_none(), "{}: derived entries take no source", entry.operation_id);
                    assert!(entry.endpoint.is_empty(), "{}: derived entries take no endpoint", entry.operation_id);
                }
                UpstreamKind::Json | UpstreamKind::Csv => {
                    assert!(entry.source.is_some(), "{}: network entries need a source", entry.operation_id);
                    assert!(
                        entry.endpoint.starts_with('/'),
                        "{}: endpoint must be base-relative",
                        entry.operation_id
                    );
                }
            }
        }
    }

    #[test]
    fn lookup_query_templates_carry_the_placeholder() {
        for entry in CATALOG {
            if let Some((param, template)) = entry.lookup_query {
                assert!(!param.is_empty());
                assert!(
                    template.contains("{lookup}"),
                    "{}: lookup template without placeholder",
                    entry.operation_id
                );
            }
        }
    }

    #[test]
    fn fixed_cross_rate_pairs_are_well_formed() {
        let well_formed = |code: &str| code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase());
        for entry in CATALOG {
            if let PostProcess::CrossRate { base, target } = entry.policy {
                assert!(well_formed(base), "{}: bad base {}", entry.operation_id, base);
                assert!(well_formed(target), "{}: bad target {}", entry.operation_id, target);
                // The pair is readable off the id itself; keep that true.
                assert!(
                    entry.operation_id.contains(&base.to_lowercase()),
                    "{}: id does not name its base currency",
                    entry.operation_id
                );
                assert_eq!(entry.endpoint, PIVOT_RATE_ENDPOINT);
            }
        }
    }

    #[test]
    fn every_entry_has_a_summary() {
        for entry in CATALOG {
            assert!(!entry.summary.is_empty(), "{}: empty summary", entry.operation_id);
        }
    }

    #[test]
    fn resolve_known_and_unknown_ids() {
        let registry = Registry::bootstrap();
        let quotes = registry
            .resolve("get_stock_quotes_realtime_all")
            .expect("realtime quotes operation exists");
        assert_eq!(quotes.endpoint, "/exchangeReport/STOCK_DAY_ALL");
        assert!(registry.resolve("get_stock_does_not_exist").is_none());
    }
}
