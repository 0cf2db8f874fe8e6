//! Sidebar explorer tree
//!
//! Flattens the forest into indented rows for the sidebar and prunes it for
//! the search box.

use std::collections::HashSet;

use crate::filter::matches_text;
use crate::model::{Asset, AssetId, AssetKey, Catalog, Forest, Schema, Table};

/// One visible row of the explorer
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerRow {
    pub asset: Asset,
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
}

impl ExplorerRow {
    pub fn key(&self) -> AssetKey {
        self.asset.key()
    }
}

fn table_matches(table: &Table, query: &str) -> bool {
    matches_text(query, &[table.name.as_str(), table.display_name.as_deref().unwrap_or_default()])
}

fn schema_matches(schema: &Schema, query: &str) -> bool {
    matches_text(query, &[schema.name.as_str(), schema.display_name.as_deref().unwrap_or_default()])
}

fn catalog_matches(catalog: &Catalog, query: &str) -> bool {
    matches_text(query, &[catalog.name.as_str(), catalog.display_name.as_deref().unwrap_or_default()])
}

/// Prune the forest down to matches and their ancestors
///
/// A matching node keeps its whole subtree. An empty query keeps everything.
pub fn filter_forest(forest: &Forest, query: &str) -> Forest {
    if query.is_empty() {
        return forest.clone();
    }

    let catalogs = forest
        .catalogs
        .iter()
        .filter_map(|catalog| {
            if catalog_matches(catalog, query) {
                return Some(catalog.clone());
            }
            let schemas: Vec<Schema> = catalog
                .schemas
                .iter()
                .filter_map(|schema| {
                    if schema_matches(schema, query) {
                        return Some(schema.clone());
                    }
                    let tables: Vec<Table> =
                        schema.tables.iter().filter(|t| table_matches(t, query)).cloned().collect();
                    (!tables.is_empty()).then(|| Schema {
                        tables,
                        ..schema.clone()
                    })
                })
                .collect();
            (!schemas.is_empty()).then(|| Catalog {
                schemas,
                ..catalog.clone()
            })
        })
        .collect();

    Forest::new(catalogs)
}

/// Flatten the forest into rows, descending only into expanded nodes
///
/// With `force_expand` every node is treated as expanded, which is how
/// search results are shown.
pub fn tree_rows(forest: &Forest, expanded: &HashSet<AssetId>, force_expand: bool) -> Vec<ExplorerRow> {
    let is_open = |id: &AssetId| force_expand || expanded.contains(id);
    let mut rows = Vec::new();

    for catalog in &forest.catalogs {
        let open = is_open(&catalog.id);
        rows.push(ExplorerRow {
            asset: Asset::Catalog(catalog.clone()),
            level: 0,
            has_children: !catalog.schemas.is_empty(),
            expanded: open,
        });
        if !open {
            continue;
        }

        for schema in &catalog.schemas {
            let open = is_open(&schema.id);
            rows.push(ExplorerRow {
                asset: Asset::Schema(schema.clone()),
                level: 1,
                has_children: !schema.tables.is_empty(),
                expanded: open,
            });
            if !open {
                continue;
            }

            rows.extend(schema.tables.iter().map(|table| ExplorerRow {
                asset: Asset::Table(table.clone()),
                level: 2,
                has_children: false,
                expanded: false,
            }));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_forest;

    fn names(rows: &[ExplorerRow]) -> Vec<&str> {
        rows.iter().map(|r| r.asset.name()).collect()
    }

    #[test]
    fn test_table_match_keeps_ancestors() {
        let forest = filter_forest(&seed_forest(), "clin");

        let rows = tree_rows(&forest, &HashSet::new(), true);
        assert_eq!(names(&rows), ["ELM", "Appropriations", "Clinic"]);
        assert!(rows[0].expanded && rows[1].expanded);
    }

    #[test]
    fn test_display_name_matches() {
        let forest = filter_forest(&seed_forest(), "consumer dimension");
        let tables = &forest.catalogs[0].schemas[0].tables;
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "Consumer");
    }

    #[test]
    fn test_matching_schema_keeps_all_tables() {
        let forest = filter_forest(&seed_forest(), "appropriations schema");
        assert_eq!(forest.catalogs[0].schemas[0].tables.len(), 5);
    }

    #[test]
    fn test_no_match_gives_empty_forest() {
        assert!(filter_forest(&seed_forest(), "payroll").is_empty());
        assert_eq!(filter_forest(&seed_forest(), ""), seed_forest());
    }

    #[test]
    fn test_query_spaces_are_part_of_the_match() {
        assert!(filter_forest(&seed_forest(), " appropriations").is_empty());
        assert!(!filter_forest(&seed_forest(), "appropriations schema").is_empty());
    }

    #[test]
    fn test_rows_follow_expansion() {
        let forest = seed_forest();
        let mut expanded = HashSet::new();

        assert_eq!(tree_rows(&forest, &expanded, false).len(), 1);

        expanded.insert(forest.catalogs[0].id.clone());
        let rows = tree_rows(&forest, &expanded, false);
        assert_eq!(names(&rows), ["ELM", "Appropriations"]);
        assert!(rows[1].has_children && !rows[1].expanded);

        expanded.insert(forest.catalogs[0].schemas[0].id.clone());
        let rows = tree_rows(&forest, &expanded, false);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[6].level, 2);
        assert_eq!(rows[6].key().id.as_str(), "table:ELM/Appropriations/Clinic");
    }
}
