//! Text filters used by the detail views

use crate::model::{AnalyticsDashboard, BusinessArea, Catalog, Schema};

/// Case-insensitive substring match of `query` against any of `fields`
///
/// The query is used as typed, surrounding spaces included. An empty query
/// matches everything.
pub fn matches_text(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Business areas matching `query`, paired with their index in the catalog
pub fn filter_business_areas<'a>(areas: &'a [BusinessArea], query: &str) -> Vec<(usize, &'a BusinessArea)> {
    areas
        .iter()
        .enumerate()
        .filter(|(_, area)| matches_text(query, &[area.name.as_str(), area.description.as_str()]))
        .collect()
}

/// Dashboards matching `query`, paired with their index in the catalog
pub fn filter_dashboards<'a>(
    dashboards: &'a [AnalyticsDashboard],
    query: &str,
) -> Vec<(usize, &'a AnalyticsDashboard)> {
    dashboards
        .iter()
        .enumerate()
        .filter(|(_, dashboard)| matches_text(query, &[dashboard.name.as_str(), dashboard.description.as_str()]))
        .collect()
}

/// Schemas whose name contains the area's name (case-sensitive)
pub fn related_schemas<'a>(catalog: &'a Catalog, area: &BusinessArea) -> Vec<&'a Schema> {
    catalog
        .schemas
        .iter()
        .filter(|schema| schema.name.contains(area.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_forest;

    #[test]
    fn test_matches_text_ignores_case() {
        assert!(matches_text("PAY", &["Payroll"]));
        assert!(matches_text("", &["anything"]));
        assert!(!matches_text("finance", &["Payroll", "salary"]));
    }

    #[test]
    fn test_matches_text_keeps_surrounding_spaces() {
        assert!(!matches_text(" customer", &["CustomerID"]));
        assert!(matches_text(" customer", &["Primary customer key"]));
        assert!(!matches_text("  ", &["Payroll"]));
    }

    #[test]
    fn test_business_area_filter_keeps_catalog_indices() {
        let catalog = &seed_forest().catalogs[0];
        let matches = filter_business_areas(&catalog.business_areas, "labor");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, 2);
        assert_eq!(matches[0].1.name, "Labor Analytics");
    }

    #[test]
    fn test_dashboard_filter_matches_description() {
        let catalog = &seed_forest().catalogs[0];
        let matches = filter_dashboards(&catalog.analytics, "inclusion");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1.name, "Workforce Diversity Report");
    }

    #[test]
    fn test_related_schemas_by_substring() {
        let mut catalog = seed_forest().catalogs[0].clone();
        catalog.schemas.push(Schema::new("PayrollLedger"));

        let payroll = BusinessArea {
            name: "Payroll".to_string(),
            description: String::new(),
        };
        let related: Vec<_> = related_schemas(&catalog, &payroll).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(related, ["PayrollLedger"]);

        let lower = BusinessArea {
            name: "payroll".to_string(),
            description: String::new(),
        };
        assert!(related_schemas(&catalog, &lower).is_empty());
    }
}
