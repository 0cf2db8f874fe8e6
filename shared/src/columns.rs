//! Column listing for the table view
//!
//! Filtering, single-field sorting with a comparator per field type, and
//! reconciliation of stored column edits with the reference column list.

use std::cmp::Ordering;

use crate::filter::matches_text;
use crate::fixtures;
use crate::model::{Column, Table};

/// Column attribute the table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Type,
    Pii,
    QualityScore,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Name, SortField::Type, SortField::Pii, SortField::QualityScore];

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Type => "Type",
            SortField::Pii => "PII",
            SortField::QualityScore => "Quality",
        }
    }

    /// Compare two columns on this field, always ascending
    pub fn compare(&self, a: &Column, b: &Column) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Type => a.data_type.cmp(&b.data_type),
            SortField::Pii => a.is_pii.cmp(&b.is_pii),
            SortField::QualityScore => a.quality_score.total_cmp(&b.quality_score),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Current sort of the column table; unsorted until a header is picked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSort {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Header click: flip direction on the same field, else sort ascending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Arrow to show next to `field`'s header, if it is the sort field
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == Some(field)).then(|| self.direction.indicator())
    }

    pub fn compare(&self, a: &Column, b: &Column) -> Ordering {
        match self.field {
            Some(field) => {
                let ordering = field.compare(a, b);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            None => Ordering::Equal,
        }
    }
}

/// Columns whose name or description contains `query`, any case
pub fn filter_columns<'a>(columns: &'a [Column], query: &str) -> Vec<&'a Column> {
    columns
        .iter()
        .filter(|c| matches_text(query, &[c.name.as_str(), c.description.as_str()]))
        .collect()
}

/// Filter then stably sort the columns for display
pub fn visible_columns(columns: &[Column], query: &str, sort: &ColumnSort) -> Vec<Column> {
    let mut visible: Vec<Column> = filter_columns(columns, query).into_iter().cloned().collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Columns to show for `table`, merged with its reference column list
pub fn reconcile_columns(table: &Table) -> Vec<Column> {
    match fixtures::table_columns(&table.name) {
        Some(reference) => reconcile_with(&reference, &table.columns),
        None => table.columns.clone(),
    }
}

/// Merge stored column edits into the reference list by column name
///
/// Reference order wins. Stored description, PII flag and quality score
/// replace the reference values when the stored column exists. Stored
/// columns missing from the reference are appended.
pub fn reconcile_with(reference: &[Column], stored: &[Column]) -> Vec<Column> {
    let mut merged: Vec<Column> = reference
        .iter()
        .map(|column| match stored.iter().find(|s| s.name == column.name) {
            Some(edited) => Column {
                description: edited.description.clone(),
                is_pii: edited.is_pii,
                quality_score: edited.quality_score,
                ..column.clone()
            },
            None => column.clone(),
        })
        .collect();

    merged.extend(
        stored
            .iter()
            .filter(|s| !reference.iter().any(|r| r.name == s.name))
            .cloned(),
    );
    merged
}

/// Parse a quality score typed into the column dialog
pub fn parse_quality_score(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_forest;

    fn appropriations() -> Table {
        seed_forest().catalogs[0].schemas[0].tables[0].clone()
    }

    #[test]
    fn test_filter_customer_columns() {
        let table = appropriations();
        assert_eq!(table.columns.len(), 14);

        let names: Vec<_> = filter_columns(&table.columns, "customer").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["CustomerID"]);

        let expected: Vec<_> = table
            .columns
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains("customer") || c.description.to_lowercase().contains("customer")
            })
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_quality_sort_directions_mirror_each_other() {
        let columns = appropriations().columns;
        let asc = visible_columns(&columns, "", &ColumnSort::by(SortField::QualityScore, SortDirection::Ascending));
        let desc = visible_columns(&columns, "", &ColumnSort::by(SortField::QualityScore, SortDirection::Descending));

        assert_eq!(asc.len(), 14);
        assert!(asc.windows(2).all(|w| w[0].quality_score <= w[1].quality_score));
        assert!(desc.windows(2).all(|w| w[0].quality_score >= w[1].quality_score));

        let mut asc_scores: Vec<f64> = asc.iter().map(|c| c.quality_score).collect();
        let desc_scores: Vec<f64> = desc.iter().map(|c| c.quality_score).collect();
        asc_scores.reverse();
        assert_eq!(asc_scores, desc_scores);

        // ties keep fixture order in both directions
        let perfect = |cols: &[Column]| {
            cols.iter()
                .filter(|c| c.quality_score == 100.0)
                .map(|c| c.name.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(perfect(&asc), perfect(&columns));
        assert_eq!(perfect(&desc), perfect(&columns));
        assert_eq!(asc[0].name, "PaidDate");
        assert_eq!(desc.last().unwrap().name, "PaidDate");
    }

    #[test]
    fn test_pii_sort_puts_flagged_columns_last() {
        let columns = appropriations().columns;
        let sorted = visible_columns(&columns, "", &ColumnSort::by(SortField::Pii, SortDirection::Ascending));
        assert_eq!(sorted.last().unwrap().name, "ConsumerID");
        assert!(!sorted[0].is_pii);
    }

    #[test]
    fn test_header_toggle() {
        let mut sort = ColumnSort::default();
        assert_eq!(sort.indicator(SortField::Name), None);

        sort.toggle(SortField::Name);
        assert_eq!(sort, ColumnSort::by(SortField::Name, SortDirection::Ascending));
        sort.toggle(SortField::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort.indicator(SortField::Name), Some("▼"));

        sort.toggle(SortField::Type);
        assert_eq!(sort, ColumnSort::by(SortField::Type, SortDirection::Ascending));
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let columns = appropriations().columns;
        let visible = visible_columns(&columns, "", &ColumnSort::default());
        assert_eq!(visible, columns);
    }

    #[test]
    fn test_reconcile_prefers_stored_edits() {
        let reference = fixtures::table_columns("Customer").unwrap();
        let stored = vec![
            Column::new("CustomerType", "text")
                .with_description("Individual or corporate")
                .with_pii(true)
                .with_quality_score(42.0),
            Column::new("Segment", "varchar").with_description("Added locally"),
        ];

        let merged = reconcile_with(&reference, &stored);

        let names: Vec<_> = merged.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["CustomerID", "CustomerName", "CustomerType", "Segment"]);
        let edited = &merged[2];
        assert_eq!(edited.description, "Individual or corporate");
        assert!(edited.is_pii);
        assert_eq!(edited.quality_score, 42.0);
        assert_eq!(edited.data_type, "varchar");
        assert_eq!(merged[0], reference[0]);
    }

    #[test]
    fn test_reconcile_hydrates_tables_without_stored_columns() {
        let clinic = seed_forest().catalogs[0].schemas[0].tables[4].clone();
        assert!(clinic.columns.is_empty());
        assert_eq!(reconcile_columns(&clinic).len(), 3);

        let custom = Table::new("Network").with_columns(vec![Column::new("NetworkID", "int")]);
        assert_eq!(reconcile_columns(&custom), custom.columns);
    }

    #[test]
    fn test_parse_quality_score() {
        assert_eq!(parse_quality_score(" 97.5 "), Some(97.5));
        assert_eq!(parse_quality_score("abc"), None);
        assert_eq!(parse_quality_score("NaN"), None);
    }
}
