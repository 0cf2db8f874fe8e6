//! Access request workflow
//!
//! Draft state of the "Request Access" dialog: access kind, target users and
//! the objects picked from the catalog's checkbox tree. Nothing is sent
//! anywhere; submitting only produces a summary that gets logged.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::info;

use crate::model::{AssetId, AssetKey, AssetKind, Catalog};

/// Shown in the dialog once a request is submitted
pub const APPROVAL_ESTIMATE: &str = "Estimated approval time: 2-3 business days";

/// How the requested data will be consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessKind {
    #[default]
    Databricks,
    SqlWarehouse,
}

impl AccessKind {
    pub const ALL: [AccessKind; 2] = [AccessKind::Databricks, AccessKind::SqlWarehouse];

    pub fn label(&self) -> &'static str {
        match self {
            AccessKind::Databricks => "Databricks",
            AccessKind::SqlWarehouse => "SQL Warehouse",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            AccessKind::Databricks => "Choose Databricks for end-user access to query and analyze data.",
            AccessKind::SqlWarehouse => "Choose SQL Warehouse for scheduled data ingestion from Unity Catalog.",
        }
    }
}

/// One visible row of the object tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTreeRow {
    pub key: AssetKey,
    pub name: String,
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    pub disabled: bool,
}

/// What a submitted request asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRequestSummary {
    pub kind: AccessKind,
    pub users: Vec<String>,
    /// Qualified names (`catalog.schema.table`) in tree order
    pub objects: Vec<String>,
}

/// A structural node of the catalog as seen by the selection logic
struct Node<'a> {
    id: &'a AssetId,
    qualified: String,
    parent: Option<&'a AssetId>,
    grandparent: Option<&'a AssetId>,
}

/// Pre-order walk of the catalog tree
fn nodes(catalog: &Catalog) -> Vec<Node<'_>> {
    let mut out = vec![Node {
        id: &catalog.id,
        qualified: catalog.name.clone(),
        parent: None,
        grandparent: None,
    }];

    for schema in &catalog.schemas {
        out.push(Node {
            id: &schema.id,
            qualified: format!("{}.{}", catalog.name, schema.name),
            parent: Some(&catalog.id),
            grandparent: None,
        });
        for table in &schema.tables {
            out.push(Node {
                id: &table.id,
                qualified: format!("{}.{}.{}", catalog.name, schema.name, table.name),
                parent: Some(&schema.id),
                grandparent: Some(&catalog.id),
            });
        }
    }
    out
}

/// Ids of `id` and every node below it
fn subtree(catalog: &Catalog, id: &AssetId) -> Vec<AssetId> {
    if &catalog.id == id {
        return nodes(catalog).into_iter().map(|n| n.id.clone()).collect();
    }
    for schema in &catalog.schemas {
        if &schema.id == id {
            let mut ids = vec![schema.id.clone()];
            ids.extend(schema.tables.iter().map(|t| t.id.clone()));
            return ids;
        }
        if schema.tables.iter().any(|t| &t.id == id) {
            return vec![id.clone()];
        }
    }
    Vec::new()
}

/// Unsent access request being filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequestDraft {
    pub kind: AccessKind,
    users: Vec<String>,
    selected: BTreeSet<AssetId>,
    expanded: BTreeSet<AssetId>,
}

impl AccessRequestDraft {
    /// Empty draft with the catalog node expanded
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            kind: AccessKind::default(),
            users: Vec::new(),
            selected: BTreeSet::new(),
            expanded: BTreeSet::from([catalog.id.clone()]),
        }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Add a target user; blank or already present entries are ignored
    pub fn add_user(&mut self, user: &str) -> bool {
        let user = user.trim();
        if user.is_empty() || self.users.iter().any(|u| u == user) {
            return false;
        }
        self.users.push(user.to_string());
        true
    }

    pub fn remove_user(&mut self, user: &str) {
        self.users.retain(|u| u != user);
    }

    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selected.contains(id)
    }

    /// Whether the node's checkbox is locked by a selected ancestor
    pub fn is_disabled(&self, catalog: &Catalog, id: &AssetId) -> bool {
        nodes(catalog)
            .into_iter()
            .find(|n| n.id == id)
            .map(|n| {
                n.parent.is_some_and(|p| self.selected.contains(p))
                    || n.grandparent.is_some_and(|g| self.selected.contains(g))
            })
            .unwrap_or(false)
    }

    /// Flip a checkbox
    ///
    /// Selecting a node selects everything below it; deselecting clears the
    /// node and everything below it. Disabled nodes are left alone.
    pub fn toggle(&mut self, catalog: &Catalog, id: &AssetId) {
        if self.is_disabled(catalog, id) {
            return;
        }
        let ids = subtree(catalog, id);
        if self.selected.contains(id) {
            for id in &ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids);
        }
    }

    pub fn is_expanded(&self, id: &AssetId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &AssetId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Rows of the object tree, skipping children of collapsed nodes
    pub fn tree_rows(&self, catalog: &Catalog) -> Vec<AccessTreeRow> {
        let mut rows = Vec::new();
        let row = |kind, id: &AssetId, name: &str, level, has_children| AccessTreeRow {
            key: AssetKey::new(kind, id.clone()),
            name: name.to_string(),
            level,
            has_children,
            expanded: self.is_expanded(id),
            selected: self.is_selected(id),
            disabled: self.is_disabled(catalog, id),
        };

        rows.push(row(AssetKind::Catalog, &catalog.id, &catalog.name, 0, !catalog.schemas.is_empty()));
        if !self.is_expanded(&catalog.id) {
            return rows;
        }
        for schema in &catalog.schemas {
            rows.push(row(AssetKind::Schema, &schema.id, &schema.name, 1, !schema.tables.is_empty()));
            if !self.is_expanded(&schema.id) {
                continue;
            }
            for table in &schema.tables {
                rows.push(row(AssetKind::Table, &table.id, &table.name, 2, false));
            }
        }
        rows
    }

    /// Finish the request; logs it and returns what was asked for
    pub fn submit(&self, catalog: &Catalog) -> AccessRequestSummary {
        let objects: Vec<String> = nodes(catalog)
            .into_iter()
            .filter(|n| self.selected.contains(n.id))
            .map(|n| n.qualified)
            .collect();

        let summary = AccessRequestSummary {
            kind: self.kind,
            users: self.users.clone(),
            objects,
        };
        info!(
            kind = summary.kind.label(),
            users = ?summary.users,
            objects = ?summary.objects,
            "Access request submitted"
        );
        summary
    }
}

/// Directory entries containing `query`, any case; empty query gives none
pub fn suggest_users<'a>(query: &str, directory: &[&'a str]) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    directory
        .iter()
        .copied()
        .filter(|u| u.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{seed_forest, DIRECTORY_USERS};
    use crate::model::{Schema, Table};

    fn catalog() -> Catalog {
        let mut catalog = seed_forest().catalogs.remove(0);
        let mut hr = Schema::new("HR");
        hr.id = AssetId::new("schema:ELM/HR");
        let mut staff = Table::new("Staff");
        staff.id = AssetId::new("table:ELM/HR/Staff");
        hr.tables.push(staff);
        catalog.schemas.push(hr);
        catalog
    }

    fn id(s: &str) -> AssetId {
        AssetId::new(s)
    }

    #[test]
    fn test_selecting_catalog_selects_everything() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);

        draft.toggle(&catalog, &catalog.id);

        assert!(draft.is_selected(&id("schema:ELM/Appropriations")));
        assert!(draft.is_selected(&id("table:ELM/HR/Staff")));
        assert!(draft.is_disabled(&catalog, &id("schema:ELM/HR")));
        assert!(draft.is_disabled(&catalog, &id("table:ELM/Appropriations/Clinic")));
        assert!(!draft.is_disabled(&catalog, &catalog.id));
    }

    #[test]
    fn test_schema_selection_disables_only_its_tables() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);

        draft.toggle(&catalog, &id("schema:ELM/HR"));

        assert!(draft.is_selected(&id("table:ELM/HR/Staff")));
        assert!(draft.is_disabled(&catalog, &id("table:ELM/HR/Staff")));
        assert!(!draft.is_selected(&id("table:ELM/Appropriations/Customer")));
        assert!(!draft.is_disabled(&catalog, &id("table:ELM/Appropriations/Customer")));
    }

    #[test]
    fn test_disabled_nodes_ignore_toggles() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);
        draft.toggle(&catalog, &id("schema:ELM/HR"));

        draft.toggle(&catalog, &id("table:ELM/HR/Staff"));

        assert!(draft.is_selected(&id("table:ELM/HR/Staff")));
    }

    #[test]
    fn test_deselection_is_structural() {
        let mut catalog = catalog();
        // a sibling schema whose name shares a prefix must not be affected
        let mut prefixed = Schema::new("HRArchive");
        prefixed.id = AssetId::new("schema:ELM/HRArchive");
        catalog.schemas.push(prefixed);

        let mut draft = AccessRequestDraft::new(&catalog);
        draft.toggle(&catalog, &id("schema:ELM/HR"));
        draft.toggle(&catalog, &id("schema:ELM/HRArchive"));
        draft.toggle(&catalog, &id("schema:ELM/HR"));

        assert!(!draft.is_selected(&id("schema:ELM/HR")));
        assert!(!draft.is_selected(&id("table:ELM/HR/Staff")));
        assert!(draft.is_selected(&id("schema:ELM/HRArchive")));
    }

    #[test]
    fn test_deselecting_catalog_clears_everything() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);
        draft.toggle(&catalog, &catalog.id);
        draft.toggle(&catalog, &catalog.id);

        assert!(draft.submit(&catalog).objects.is_empty());
    }

    #[test]
    fn test_users_are_trimmed_and_unique() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);

        assert!(draft.add_user(" jane.smith@falck.com "));
        assert!(!draft.add_user("jane.smith@falck.com"));
        assert!(!draft.add_user("   "));
        assert!(draft.add_user("john.doe@falck.com"));
        draft.remove_user("jane.smith@falck.com");

        assert_eq!(draft.users(), ["john.doe@falck.com"]);
    }

    #[test]
    fn test_suggestions() {
        assert!(suggest_users("", DIRECTORY_USERS).is_empty());
        assert_eq!(suggest_users("JANE", DIRECTORY_USERS), ["jane.smith@falck.com"]);
        assert_eq!(suggest_users("falck", DIRECTORY_USERS).len(), DIRECTORY_USERS.len());
    }

    #[test]
    fn test_tree_rows_follow_expansion() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);

        let rows = draft.tree_rows(&catalog);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].expanded);
        assert_eq!(rows[1].level, 1);

        draft.toggle_expanded(&id("schema:ELM/Appropriations"));
        let rows = draft.tree_rows(&catalog);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[2].name, "Appropriations");
        assert_eq!(rows[2].level, 2);

        draft.toggle_expanded(&catalog.id);
        assert_eq!(draft.tree_rows(&catalog).len(), 1);
    }

    #[test]
    fn test_submit_lists_qualified_names_in_tree_order() {
        let catalog = catalog();
        let mut draft = AccessRequestDraft::new(&catalog);
        draft.kind = AccessKind::SqlWarehouse;
        draft.add_user("emily.brown@falck.com");
        draft.toggle(&catalog, &id("schema:ELM/HR"));
        draft.toggle(&catalog, &id("table:ELM/Appropriations/Service"));

        let summary = draft.submit(&catalog);

        assert_eq!(summary.kind, AccessKind::SqlWarehouse);
        assert_eq!(summary.users, ["emily.brown@falck.com"]);
        assert_eq!(
            summary.objects,
            ["ELM.Appropriations.Service", "ELM.HR", "ELM.HR.Staff"]
        );
    }
}
