//! Plain-text rendering of the catalog tree

use std::collections::HashSet;

use catalog_shared::explorer::{filter_forest, tree_rows};
use catalog_shared::{Asset, Forest};

/// Render the forest as an indented outline, pruned to `search` when given
pub fn render_tree(forest: &Forest, search: Option<&str>) -> String {
    let query = search.unwrap_or_default();
    let visible = filter_forest(forest, query);

    tree_rows(&visible, &HashSet::new(), true)
        .iter()
        .map(|row| row_line(row.level, &row.asset) + "\n")
        .collect()
}

/// One outline line: kind, name, display name when it differs, column count
fn row_line(level: usize, asset: &Asset) -> String {
    let mut line = format!("{}{} {}", "  ".repeat(level), asset.kind().label(), asset.name());
    if asset.title() != asset.name() {
        line.push_str(&format!(" ({})", asset.title()));
    }
    if let Asset::Table(table) = asset {
        if !table.columns.is_empty() {
            line.push_str(&format!(" [{} columns]", table.columns.len()));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_shared::fixtures::seed_forest;

    #[test]
    fn test_render_seed_tree() {
        let rendered = render_tree(&seed_forest(), None);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Catalog ELM"));
        assert!(lines[1].starts_with("  Schema Appropriations"));
        assert!(lines[2].starts_with("    Table Appropriations"));
        assert!(lines[2].ends_with("[14 columns]"));
    }

    #[test]
    fn test_render_search_keeps_ancestors() {
        let rendered = render_tree(&seed_forest(), Some("clin"));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[2].trim_start().starts_with("Table Clinic"));
    }

    #[test]
    fn test_row_line_skips_matching_title_and_empty_columns() {
        let table = Asset::Table(catalog_shared::Table::new("Staff"));
        assert_eq!(row_line(2, &table), "    Table Staff");

        let table = Asset::Table(catalog_shared::Table::new("Staff").with_display_name("Staff Dimension"));
        assert_eq!(row_line(0, &table), "Table Staff (Staff Dimension)");
    }

    #[test]
    fn test_render_no_match_is_empty() {
        assert!(render_tree(&seed_forest(), Some("zzz")).is_empty());
    }
}
