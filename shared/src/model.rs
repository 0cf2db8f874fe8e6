//! Catalog asset model
//!
//! These types describe the asset forest shown by the catalog browser:
//! catalogs contain schemas, schemas contain tables, tables carry columns.
//! The serialized shape uses camelCase field names and is exactly what gets
//! written to durable storage.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Lowest allowed column quality score
pub const MIN_QUALITY_SCORE: f64 = 0.0;

/// Highest allowed column quality score
pub const MAX_QUALITY_SCORE: f64 = 100.0;

/// Stable identifier for a catalog, schema or table
///
/// Ids are assigned once when an asset is created and never change on rename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Derive a deterministic id from the asset's position in the tree
    pub fn for_path(kind: AssetKind, path: &[&str]) -> Self {
        Self(format!("{}:{}", kind.as_str(), path.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three selectable node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Catalog,
    Schema,
    Table,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Catalog => "catalog",
            AssetKind::Schema => "schema",
            AssetKind::Table => "table",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Catalog => "Catalog",
            AssetKind::Schema => "Schema",
            AssetKind::Table => "Table",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key for an asset in the forest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub kind: AssetKind,
    pub id: AssetId,
}

impl AssetKey {
    pub fn new(kind: AssetKind, id: AssetId) -> Self {
        Self { kind, id }
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Lineage labels of a column ("Table.Column" references, not validated)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub upstream: Vec<String>,

    #[serde(default)]
    pub downstream: Vec<String>,
}

/// A column of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,

    /// Free-text type label (e.g. "int", "varchar")
    #[serde(rename = "type")]
    pub data_type: String,

    #[serde(default)]
    pub description: String,

    /// Whether the column holds personally identifiable information
    #[serde(rename = "isPII", default)]
    pub is_pii: bool,

    /// Share of non-null values, 0..=100
    #[serde(default)]
    pub quality_score: f64,

    #[serde(default)]
    pub dependencies: Dependencies,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: String::new(),
            is_pii: false,
            quality_score: MAX_QUALITY_SCORE,
            dependencies: Dependencies::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pii(mut self, is_pii: bool) -> Self {
        self.is_pii = is_pii;
        self
    }

    pub fn with_quality_score(mut self, score: f64) -> Self {
        self.set_quality_score(score);
        self
    }

    pub fn with_upstream(mut self, refs: &[&str]) -> Self {
        self.dependencies.upstream = refs.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_downstream(mut self, refs: &[&str]) -> Self {
        self.dependencies.downstream = refs.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Set the quality score, clamped to 0..=100
    pub fn set_quality_score(&mut self, score: f64) {
        self.quality_score = if score.is_finite() {
            score.clamp(MIN_QUALITY_SCORE, MAX_QUALITY_SCORE)
        } else {
            MIN_QUALITY_SCORE
        };
    }
}

// =============================================================================
// Tables
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "table", rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub id: AssetId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Display name, falling back to the name
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Replace the column with the same name. Returns false if none matched.
    pub fn replace_column(&mut self, column: Column) -> bool {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => {
                *existing = column;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Schemas
// =============================================================================

/// How settled a schema's model is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    Low,
    #[default]
    Medium,
    High,
}

impl Maturity {
    pub const ALL: [Maturity; 3] = [Maturity::Low, Maturity::Medium, Maturity::High];

    pub fn label(&self) -> &'static str {
        match self {
            Maturity::Low => "Low",
            Maturity::Medium => "Medium",
            Maturity::High => "High",
        }
    }
}

/// How data enters the schema's source systems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticMeasure {
    pub measure: String,
    pub description: String,
}

/// Descriptive modeling notes attached to a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModeling {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub flags: Vec<Flag>,

    #[serde(default)]
    pub dimensions: Vec<String>,

    #[serde(default)]
    pub source_tables: Vec<String>,

    #[serde(default)]
    pub semantic_modeling: Vec<SemanticMeasure>,
}

/// User-authored documentation tab on a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTab {
    /// Unique within the schema
    pub id: String,
    pub title: String,
    /// Markdown text
    pub content: String,
}

impl SchemaTab {
    pub const DEFAULT_TITLE: &'static str = "New Tab";
    pub const DEFAULT_CONTENT: &'static str = "Add content here...";

    /// A new tab with a generated id and placeholder title/content
    pub fn new_default() -> Self {
        Self {
            id: format!("tab-{}", Uuid::new_v4()),
            title: Self::DEFAULT_TITLE.to_string(),
            content: Self::DEFAULT_CONTENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "schema", rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub id: AssetId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(default)]
    pub operations: Vec<Operation>,

    #[serde(default)]
    pub business_glossary: Vec<GlossaryTerm>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_modeling: Option<DataModeling>,

    #[serde(default)]
    pub tabs: Vec<SchemaTab>,

    #[serde(default)]
    pub maturity: Maturity,

    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn tab(&self, id: &str) -> Option<&SchemaTab> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

// =============================================================================
// Catalogs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessArea {
    pub name: String,
    pub description: String,
}

impl BusinessArea {
    pub const DEFAULT_NAME: &'static str = "New Business Area";
    pub const DEFAULT_DESCRIPTION: &'static str = "Description of the new business area";
}

impl Default for BusinessArea {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Analytics dashboard built on the catalog's data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDashboard {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "catalog", rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub id: AssetId,

    /// Catalog name, unique in the forest
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub business_areas: Vec<BusinessArea>,

    #[serde(default)]
    pub analytics: Vec<AnalyticsDashboard>,

    #[serde(default)]
    pub terminology: Vec<GlossaryTerm>,

    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Append a business area with placeholder text
    pub fn add_business_area(&mut self) {
        self.business_areas.push(BusinessArea::default());
    }

    /// Remove the business area at `index`, keeping the order of the rest
    pub fn remove_business_area(&mut self, index: usize) -> Option<BusinessArea> {
        if index < self.business_areas.len() {
            Some(self.business_areas.remove(index))
        } else {
            None
        }
    }

    /// Replace the business area at `index`. Returns false if out of range.
    pub fn update_business_area(&mut self, index: usize, area: BusinessArea) -> bool {
        match self.business_areas.get_mut(index) {
            Some(existing) => {
                *existing = area;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Assets
// =============================================================================

/// Any selectable node of the forest
///
/// Each node writes its own `type` field, so serializing an asset defers to
/// the node rather than adding a second tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Asset {
    Catalog(Catalog),
    Schema(Schema),
    Table(Table),
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Asset::Catalog(catalog) => catalog.serialize(serializer),
            Asset::Schema(schema) => schema.serialize(serializer),
            Asset::Table(table) => table.serialize(serializer),
        }
    }
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Catalog(_) => AssetKind::Catalog,
            Asset::Schema(_) => AssetKind::Schema,
            Asset::Table(_) => AssetKind::Table,
        }
    }

    pub fn id(&self) -> &AssetId {
        match self {
            Asset::Catalog(c) => &c.id,
            Asset::Schema(s) => &s.id,
            Asset::Table(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Asset::Catalog(c) => &c.name,
            Asset::Schema(s) => &s.name,
            Asset::Table(t) => &t.name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Asset::Catalog(c) => c.title(),
            Asset::Schema(s) => s.title(),
            Asset::Table(t) => t.title(),
        }
    }

    pub fn key(&self) -> AssetKey {
        AssetKey::new(self.kind(), self.id().clone())
    }
}

impl From<Catalog> for Asset {
    fn from(catalog: Catalog) -> Self {
        Asset::Catalog(catalog)
    }
}

impl From<Schema> for Asset {
    fn from(schema: Schema) -> Self {
        Asset::Schema(schema)
    }
}

impl From<Table> for Asset {
    fn from(table: Table) -> Self {
        Asset::Table(table)
    }
}

// =============================================================================
// Forest
// =============================================================================

/// The top-level ordered list of catalog trees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    pub catalogs: Vec<Catalog>,
}

impl Forest {
    pub fn new(catalogs: Vec<Catalog>) -> Self {
        Self { catalogs }
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Total number of catalogs, schemas and tables
    pub fn asset_count(&self) -> usize {
        self.catalogs
            .iter()
            .map(|c| 1 + c.schemas.iter().map(|s| 1 + s.tables.len()).sum::<usize>())
            .sum()
    }

    /// Look up an asset by kind and id
    pub fn find(&self, key: &AssetKey) -> Option<Asset> {
        match key.kind {
            AssetKind::Catalog => self
                .catalogs
                .iter()
                .find(|c| c.id == key.id)
                .cloned()
                .map(Asset::Catalog),
            AssetKind::Schema => self
                .catalogs
                .iter()
                .flat_map(|c| c.schemas.iter())
                .find(|s| s.id == key.id)
                .cloned()
                .map(Asset::Schema),
            AssetKind::Table => self
                .catalogs
                .iter()
                .flat_map(|c| c.schemas.iter())
                .flat_map(|s| s.tables.iter())
                .find(|t| t.id == key.id)
                .cloned()
                .map(Asset::Table),
        }
    }

    /// Build a new forest with `asset` replacing its counterpart
    ///
    /// The replaced node and all of its ancestors are rebuilt; every other
    /// node is carried over unchanged. Returns `None` when no node has the
    /// same kind and id.
    pub fn replaced(&self, asset: &Asset) -> Option<Forest> {
        let mut catalogs = self.catalogs.clone();

        match asset {
            Asset::Catalog(catalog) => {
                let slot = catalogs.iter_mut().find(|c| c.id == catalog.id)?;
                *slot = catalog.clone();
            }
            Asset::Schema(schema) => {
                let slot = catalogs
                    .iter_mut()
                    .flat_map(|c| c.schemas.iter_mut())
                    .find(|s| s.id == schema.id)?;
                *slot = schema.clone();
            }
            Asset::Table(table) => {
                let slot = catalogs
                    .iter_mut()
                    .flat_map(|c| c.schemas.iter_mut())
                    .flat_map(|s| s.tables.iter_mut())
                    .find(|t| t.id == table.id)?;
                *slot = table.clone();
            }
        }

        Some(Forest { catalogs })
    }

    /// Give every node without an id one derived from its path
    ///
    /// Returns the number of ids assigned.
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;

        for catalog in &mut self.catalogs {
            if catalog.id.is_empty() {
                catalog.id = AssetId::for_path(AssetKind::Catalog, &[&catalog.name]);
                assigned += 1;
            }
            for schema in &mut catalog.schemas {
                if schema.id.is_empty() {
                    schema.id = AssetId::for_path(AssetKind::Schema, &[&catalog.name, &schema.name]);
                    assigned += 1;
                }
                for table in &mut schema.tables {
                    if table.id.is_empty() {
                        table.id = AssetId::for_path(
                            AssetKind::Table,
                            &[&catalog.name, &schema.name, &table.name],
                        );
                        assigned += 1;
                    }
                }
            }
        }

        assigned
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_forest;

    fn customer_table(forest: &Forest) -> Table {
        forest.catalogs[0].schemas[0]
            .tables
            .iter()
            .find(|t| t.name == "Customer")
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_replace_table_leaves_siblings_untouched() {
        let forest = seed_forest();
        let mut table = customer_table(&forest);
        table.description = Some("Customer master data".to_string());

        let updated = forest.replaced(&Asset::Table(table.clone())).unwrap();

        let before = &forest.catalogs[0].schemas[0].tables;
        let after = &updated.catalogs[0].schemas[0].tables;
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after) {
            if old.id == table.id {
                assert_eq!(new, &table);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(forest.catalogs[0].business_areas, updated.catalogs[0].business_areas);
    }

    #[test]
    fn test_replace_missing_asset_returns_none() {
        let forest = seed_forest();
        let mut ghost = Table::new("Ghost");
        ghost.id = AssetId::new("table:ELM/Appropriations/Ghost");

        assert!(forest.replaced(&Asset::Table(ghost)).is_none());
    }

    #[test]
    fn test_rename_keeps_identity() {
        let forest = seed_forest();
        let mut schema = forest.catalogs[0].schemas[0].clone();
        schema.name = "Appropriations v2".to_string();

        let updated = forest.replaced(&Asset::Schema(schema.clone())).unwrap();
        let found = updated.find(&schema_key(&schema)).unwrap();
        assert_eq!(found.name(), "Appropriations v2");
    }

    fn schema_key(schema: &Schema) -> AssetKey {
        AssetKey::new(AssetKind::Schema, schema.id.clone())
    }

    #[test]
    fn test_assign_missing_ids_is_path_derived() {
        let mut forest: Forest = serde_json::from_str(
            r#"[{"name":"ELM","schemas":[{"name":"HR","tables":[{"name":"Staff"}]}]}]"#,
        )
        .unwrap();

        assert_eq!(forest.assign_missing_ids(), 3);
        assert_eq!(forest.catalogs[0].id.as_str(), "catalog:ELM");
        assert_eq!(forest.catalogs[0].schemas[0].id.as_str(), "schema:ELM/HR");
        assert_eq!(forest.catalogs[0].schemas[0].tables[0].id.as_str(), "table:ELM/HR/Staff");
        assert_eq!(forest.assign_missing_ids(), 0);
    }

    #[test]
    fn test_asset_serializes_with_type_tag() {
        let asset = Asset::Table(Table::new("Clinic"));
        let json = serde_json::to_string(&asset).unwrap();
        assert!(json.contains("\"type\":\"table\""));

        let column = Column::new("ConsumerID", "int").with_pii(true).with_quality_score(99.8);
        let json = serde_json::to_string(&column).unwrap();
        assert!(json.contains("\"isPII\":true"));
        assert!(json.contains("\"qualityScore\":99.8"));
    }

    #[test]
    fn test_stored_forest_tags_every_node() {
        let forest = seed_forest();
        let json = serde_json::to_string(&forest).unwrap();
        assert!(json.starts_with(r#"[{"type":"catalog","#));
        assert!(json.contains(r#"{"type":"schema","#));
        assert!(json.contains(r#"{"type":"table","#));

        let parsed: Forest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, forest);
    }

    #[test]
    fn test_asset_writes_a_single_type_field() {
        let json = serde_json::to_string(&Asset::Schema(Schema::new("HR"))).unwrap();
        assert_eq!(json.matches("\"type\"").count(), 1);

        let asset: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset.kind(), AssetKind::Schema);
        assert_eq!(asset.name(), "HR");
    }

    #[test]
    fn test_business_area_removal_keeps_order() {
        let mut catalog = seed_forest().catalogs[0].clone();
        let names = |c: &Catalog| c.business_areas.iter().map(|a| a.name.clone()).collect::<Vec<_>>();
        let before = names(&catalog);

        let removed = catalog.remove_business_area(1).unwrap();

        assert_eq!(removed.name, before[1]);
        assert_eq!(names(&catalog), vec![before[0].clone(), before[2].clone()]);
        assert!(catalog.remove_business_area(10).is_none());
    }

    #[test]
    fn test_quality_score_is_clamped() {
        let mut column = Column::new("PaidDate", "date");
        column.set_quality_score(140.0);
        assert_eq!(column.quality_score, 100.0);
        column.set_quality_score(-3.0);
        assert_eq!(column.quality_score, 0.0);
        column.set_quality_score(f64::NAN);
        assert_eq!(column.quality_score, 0.0);
    }
}
