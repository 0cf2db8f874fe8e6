//! Schema documentation tabs
//!
//! [`TabEditor`] tracks which user-authored tab is active and which one is
//! being edited. Mutations act on a `Schema` value the caller then hands to
//! the store as an update.

use crate::model::{Schema, SchemaTab};

/// Active/editing state of a schema's custom tabs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabEditor {
    active: Option<String>,
    editing: Option<String>,
}

impl TabEditor {
    /// Start on the schema's first tab, if any
    pub fn new(schema: &Schema) -> Self {
        Self {
            active: schema.tabs.first().map(|t| t.id.clone()),
            editing: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab<'a>(&self, schema: &'a Schema) -> Option<&'a SchemaTab> {
        self.active.as_deref().and_then(|id| schema.tab(id))
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_deref() == Some(id)
    }

    pub fn activate(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }

    /// Append a placeholder tab and open it for editing
    pub fn add_tab(&mut self, schema: &mut Schema) -> String {
        let tab = SchemaTab::new_default();
        let id = tab.id.clone();
        schema.tabs.push(tab);
        self.active = Some(id.clone());
        self.editing = Some(id.clone());
        id
    }

    /// Remove a tab; the first remaining tab becomes active if it was active
    pub fn remove_tab(&mut self, schema: &mut Schema, id: &str) -> Option<SchemaTab> {
        let index = schema.tabs.iter().position(|t| t.id == id)?;
        let removed = schema.tabs.remove(index);

        if self.active.as_deref() == Some(id) {
            self.active = schema.tabs.first().map(|t| t.id.clone());
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        Some(removed)
    }

    pub fn begin_edit(&mut self, id: &str) {
        self.active = Some(id.to_string());
        self.editing = Some(id.to_string());
    }

    /// Store edited markdown into the tab and leave edit mode
    pub fn save_content(&mut self, schema: &mut Schema, id: &str, content: String) -> bool {
        let Some(tab) = schema.tabs.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        tab.content = content;
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Rename a tab; blank titles are rejected
    pub fn rename_tab(&self, schema: &mut Schema, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match schema.tabs.iter_mut().find(|t| t.id == id) {
            Some(tab) => {
                tab.title = title.to_string();
                true
            }
            None => false,
        }
    }
}

/// Built-in reference sections of the schema view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReferenceSection {
    #[default]
    Overview,
    Operations,
    Glossary,
    DataModeling,
    SemanticModeling,
}

impl ReferenceSection {
    pub const ALL: [ReferenceSection; 5] = [
        ReferenceSection::Overview,
        ReferenceSection::Operations,
        ReferenceSection::Glossary,
        ReferenceSection::DataModeling,
        ReferenceSection::SemanticModeling,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReferenceSection::Overview => "overview",
            ReferenceSection::Operations => "operations",
            ReferenceSection::Glossary => "glossary",
            ReferenceSection::DataModeling => "data-modeling",
            ReferenceSection::SemanticModeling => "semantic-modeling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceSection::Overview => "Overview",
            ReferenceSection::Operations => "Operations",
            ReferenceSection::Glossary => "Business Glossary",
            ReferenceSection::DataModeling => "Data Modeling",
            ReferenceSection::SemanticModeling => "Semantic Modeling",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tab_activates_and_edits() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::new(&schema);
        assert_eq!(editor.active(), None);

        let id = editor.add_tab(&mut schema);

        assert_eq!(schema.tabs.len(), 1);
        assert_eq!(schema.tabs[0].title, SchemaTab::DEFAULT_TITLE);
        assert_eq!(schema.tabs[0].content, SchemaTab::DEFAULT_CONTENT);
        assert!(id.starts_with("tab-"));
        assert_eq!(editor.active(), Some(id.as_str()));
        assert!(editor.is_editing(&id));
    }

    #[test]
    fn test_tab_ids_are_unique() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::default();
        let first = editor.add_tab(&mut schema);
        let second = editor.add_tab(&mut schema);
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_active_tab_falls_back_to_first() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::default();
        let first = editor.add_tab(&mut schema);
        let second = editor.add_tab(&mut schema);

        editor.remove_tab(&mut schema, &second).unwrap();
        assert_eq!(editor.active(), Some(first.as_str()));
        assert!(!editor.is_editing(&second));

        editor.remove_tab(&mut schema, &first).unwrap();
        assert_eq!(editor.active(), None);
        assert!(editor.active_tab(&schema).is_none());
        assert!(editor.remove_tab(&mut schema, &first).is_none());
    }

    #[test]
    fn test_remove_inactive_tab_keeps_active() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::default();
        let first = editor.add_tab(&mut schema);
        let second = editor.add_tab(&mut schema);

        editor.remove_tab(&mut schema, &first).unwrap();
        assert_eq!(editor.active(), Some(second.as_str()));
    }

    #[test]
    fn test_save_and_cancel() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::default();
        let id = editor.add_tab(&mut schema);

        assert!(editor.save_content(&mut schema, &id, "# Notes".to_string()));
        assert_eq!(editor.active_tab(&schema).unwrap().content, "# Notes");
        assert!(!editor.is_editing(&id));

        editor.begin_edit(&id);
        editor.cancel_edit();
        assert!(!editor.is_editing(&id));
        assert_eq!(schema.tabs[0].content, "# Notes");
        assert!(!editor.save_content(&mut schema, "tab-missing", String::new()));
    }

    #[test]
    fn test_rename_rejects_blank_titles() {
        let mut schema = Schema::new("Appropriations");
        let mut editor = TabEditor::default();
        let id = editor.add_tab(&mut schema);

        assert!(editor.rename_tab(&mut schema, &id, "  Lineage "));
        assert_eq!(schema.tabs[0].title, "Lineage");
        assert!(!editor.rename_tab(&mut schema, &id, "   "));
        assert_eq!(schema.tabs[0].title, "Lineage");
    }

    #[test]
    fn test_new_editor_starts_on_first_tab() {
        let mut schema = Schema::new("Appropriations");
        let mut seed = TabEditor::default();
        let first = seed.add_tab(&mut schema);
        seed.add_tab(&mut schema);

        let editor = TabEditor::new(&schema);
        assert_eq!(editor.active(), Some(first.as_str()));
        assert!(!editor.is_editing(&first));
    }
}
