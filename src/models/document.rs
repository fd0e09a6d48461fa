use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SnippetError};
use crate::models::SnippetRecord;

/// Group created for a brand new store
pub const DEFAULT_GROUP: &str = "General";

/// The complete persisted state: every group and every snippet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub snippets: Vec<SnippetRecord>,
}

impl Document {
    /// Document written on first start
    pub fn seeded() -> Self {
        Self {
            groups: vec![DEFAULT_GROUP.to_string()],
            snippets: Vec::new(),
        }
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    pub fn snippet(&self, id: &str) -> Option<&SnippetRecord> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub(crate) fn snippet_mut(&mut self, id: &str) -> Option<&mut SnippetRecord> {
        self.snippets.iter_mut().find(|s| s.id == id)
    }

    pub fn snippets_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a SnippetRecord> + 'a {
        self.snippets.iter().filter(move |s| s.group == group)
    }

    pub fn snippet_count(&self, group: &str) -> usize {
        self.snippets_in(group).count()
    }

    /// Appends every group referenced by a snippet but not listed yet.
    /// Returns the names that were added, in snippet order.
    pub(crate) fn adopt_orphan_groups(&mut self) -> Vec<String> {
        let mut added = Vec::new();
        for snippet in &self.snippets {
            if !self.groups.contains(&snippet.group) && !added.contains(&snippet.group) {
                added.push(snippet.group.clone());
            }
        }
        self.groups.extend(added.iter().cloned());
        added
    }

    /// Rejects payloads that cannot be held as a valid document: blank or
    /// duplicate group names, duplicate or empty snippet ids, blank titles
    /// and snippets without a group.
    pub fn check_integrity(&self) -> Result<()> {
        let mut seen_groups = HashSet::new();
        for group in &self.groups {
            if group.trim().is_empty() {
                return Err(SnippetError::Validation("Group name cannot be empty".to_string()));
            }
            if !seen_groups.insert(group.as_str()) {
                return Err(SnippetError::Format(format!("duplicate group '{}'", group)));
            }
        }
        ensure_unique_ids(&self.snippets)
    }
}

/// A single incoming record must carry an id, a title and a group
pub(crate) fn check_record(snippet: &SnippetRecord) -> Result<()> {
    if snippet.id.trim().is_empty() {
        return Err(SnippetError::Format(format!(
            "snippet '{}' has an empty id",
            snippet.title
        )));
    }
    if snippet.title.trim().is_empty() {
        return Err(SnippetError::Validation(format!(
            "Snippet '{}' has an empty title",
            snippet.id
        )));
    }
    if snippet.group.trim().is_empty() {
        return Err(SnippetError::Validation(format!(
            "Snippet '{}' has an empty group",
            snippet.id
        )));
    }
    Ok(())
}

pub(crate) fn ensure_unique_ids(snippets: &[SnippetRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for snippet in snippets {
        check_record(snippet)?;
        if !seen.insert(snippet.id.as_str()) {
            return Err(SnippetError::Format(format!(
                "duplicate snippet id '{}'",
                snippet.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnippetType;

    fn record(id: &str, group: &str) -> SnippetRecord {
        SnippetRecord {
            id: id.to_string(),
            title: format!("snippet {}", id),
            content: String::new(),
            snippet_type: SnippetType::Code,
            group: group.to_string(),
        }
    }

    #[test]
    fn test_missing_keys_deserialize_as_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.groups.is_empty());
        assert!(doc.snippets.is_empty());
    }

    #[test]
    fn test_adopt_orphan_groups_keeps_first_reference_order() {
        let mut doc = Document {
            groups: vec!["A".to_string()],
            snippets: vec![record("1", "C"), record("2", "A"), record("3", "B"), record("4", "C")],
        };

        let added = doc.adopt_orphan_groups();

        assert_eq!(added, vec!["C".to_string(), "B".to_string()]);
        assert_eq!(doc.groups, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_integrity_rejects_duplicate_ids() {
        let doc = Document {
            groups: vec!["A".to_string()],
            snippets: vec![record("1", "A"), record("1", "A")],
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Format(_))));
    }

    #[test]
    fn test_integrity_rejects_duplicate_groups() {
        let doc = Document {
            groups: vec!["A".to_string(), "A".to_string()],
            snippets: Vec::new(),
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Format(_))));
    }

    #[test]
    fn test_integrity_rejects_blank_title_group_and_id() {
        let mut untitled = record("1", "A");
        untitled.title = "  ".to_string();
        let doc = Document {
            groups: vec!["A".to_string()],
            snippets: vec![untitled],
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Validation(_))));

        let doc = Document {
            groups: vec!["A".to_string()],
            snippets: vec![record("1", "")],
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Validation(_))));

        let doc = Document {
            groups: vec!["A".to_string()],
            snippets: vec![record(" ", "A")],
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Format(_))));
    }

    #[test]
    fn test_integrity_rejects_blank_group_names() {
        let doc = Document {
            groups: vec!["A".to_string(), " ".to_string()],
            snippets: Vec::new(),
        };
        assert!(matches!(doc.check_integrity(), Err(SnippetError::Validation(_))));
    }

    #[test]
    fn test_groups_are_case_sensitive() {
        let doc = Document {
            groups: vec!["Rust".to_string()],
            snippets: Vec::new(),
        };
        assert!(doc.has_group("Rust"));
        assert!(!doc.has_group("rust"));
    }
}
