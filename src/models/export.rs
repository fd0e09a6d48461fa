use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};
use crate::models::{Document, SnippetRecord};

/// Import/export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ExportFormat::Yaml,
            _ => ExportFormat::Json,
        }
    }
}

/// What to do when an imported snippet id already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Keep the existing record, drop the incoming one
    #[default]
    Skip,
    /// Replace the existing record in place
    Overwrite,
}

/// Outcome of a merge import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub groups_added: Vec<String>,
}

/// Serialize a document in the persisted shape
pub fn export_document(db: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(db)?)
}

/// A document holding only `group` and its snippets
pub fn export_group(db: &Document, group: &str) -> Result<Document> {
    if !db.has_group(group) {
        return Err(SnippetError::NotFound(format!("Group '{}' not found", group)));
    }

    Ok(Document {
        groups: vec![group.to_string()],
        snippets: db.snippets_in(group).cloned().collect(),
    })
}

/// Parse a document from text; nothing is validated beyond the shape
pub fn parse_document(contents: &str, format: ExportFormat) -> Result<Document> {
    match format {
        ExportFormat::Json => Ok(serde_json::from_str(contents)?),
        ExportFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Import database from a file
pub fn import_database(path: &Path) -> Result<Document> {
    let contents = fs::read_to_string(path).map_err(|e| SnippetError::io(path, e))?;
    parse_document(&contents, ExportFormat::from_path(path))
}

/// Merge imported snippets into an existing document
pub fn merge_snippets(
    db: &mut Document,
    incoming: Vec<SnippetRecord>,
    policy: MergePolicy,
) -> MergeReport {
    let mut report = MergeReport::default();

    for snippet in incoming {
        match db.snippets.iter().position(|s| s.id == snippet.id) {
            Some(index) => match policy {
                MergePolicy::Skip => report.skipped += 1,
                MergePolicy::Overwrite => {
                    db.snippets[index] = snippet;
                    report.overwritten += 1;
                }
            },
            None => {
                db.snippets.push(snippet);
                report.added += 1;
            }
        }
    }

    report.groups_added = db.adopt_orphan_groups();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnippetType;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn record(id: &str, title: &str, group: &str) -> SnippetRecord {
        SnippetRecord {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("content of {}", title),
            snippet_type: SnippetType::Code,
            group: group.to_string(),
        }
    }

    fn sample() -> Document {
        Document {
            groups: vec!["A".to_string(), "B".to_string()],
            snippets: vec![record("1", "one", "A"), record("2", "two", "B")],
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(&PathBuf::from("x.yml")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("x.YAML")), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("x.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("x")), ExportFormat::Json);
    }

    #[test]
    fn test_export_group_keeps_only_that_group() {
        let partial = export_group(&sample(), "B").unwrap();

        assert_eq!(partial.groups, vec!["B"]);
        assert_eq!(partial.snippets.len(), 1);
        assert_eq!(partial.snippets[0].id, "2");
    }

    #[test]
    fn test_export_unknown_group_is_not_found() {
        assert!(matches!(
            export_group(&sample(), "Z"),
            Err(SnippetError::NotFound(_))
        ));
    }

    #[test]
    fn test_yaml_import_matches_json_shape() {
        let yaml = "groups: [A]\nsnippets:\n  - id: '9'\n    title: nine\n    content: echo 9\n    type: terminal\n    group: A\n";
        let doc = parse_document(yaml, ExportFormat::Yaml).unwrap();

        assert_eq!(doc.snippets[0].snippet_type, SnippetType::Terminal);
        assert_eq!(doc.snippets[0].group, "A");
    }

    #[test]
    fn test_write_then_import_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("export.json");

        fs::write(&path, export_document(&sample()).unwrap()).unwrap();

        assert_eq!(import_database(&path).unwrap(), sample());
    }

    #[test]
    fn test_merge_skip_keeps_existing_record() {
        let mut db = sample();
        let incoming = vec![record("1", "replacement", "A"), record("3", "three", "A")];

        let report = merge_snippets(&mut db, incoming, MergePolicy::Skip);

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.overwritten, 0);
        assert_eq!(db.snippet("1").unwrap().title, "one");
        assert_eq!(db.snippets.len(), 3);
    }

    #[test]
    fn test_merge_overwrite_replaces_in_place() {
        let mut db = sample();
        let incoming = vec![record("1", "replacement", "A")];

        let report = merge_snippets(&mut db, incoming, MergePolicy::Overwrite);

        assert_eq!(report.overwritten, 1);
        assert_eq!(db.snippets[0].id, "1");
        assert_eq!(db.snippets[0].title, "replacement");
        assert_eq!(db.snippets.len(), 2);
    }

    #[test]
    fn test_merge_duplicates_within_batch_follow_policy() {
        let mut skip_db = sample();
        let batch = vec![record("5", "first", "A"), record("5", "second", "A")];
        let report = merge_snippets(&mut skip_db, batch.clone(), MergePolicy::Skip);
        assert_eq!((report.added, report.skipped), (1, 1));
        assert_eq!(skip_db.snippet("5").unwrap().title, "first");

        let mut overwrite_db = sample();
        let report = merge_snippets(&mut overwrite_db, batch, MergePolicy::Overwrite);
        assert_eq!((report.added, report.overwritten), (1, 1));
        assert_eq!(overwrite_db.snippet("5").unwrap().title, "second");
    }

    #[test]
    fn test_merge_adopts_unknown_groups() {
        let mut db = sample();

        let report = merge_snippets(&mut db, vec![record("7", "seven", "C")], MergePolicy::Skip);

        assert_eq!(report.groups_added, vec!["C"]);
        assert_eq!(db.groups, vec!["A", "B", "C"]);
    }
}
