use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{Result, SnippetError};
use crate::handlers::prompts::Prompter;
use crate::models::document::{check_record, ensure_unique_ids};
use crate::models::export::{self, MergePolicy, MergeReport};
use crate::models::{
    Document, ExportFormat, SnippetPatch, SnippetRecord, SnippetType, StorageConfig,
    StorageManager,
};

/// Called with the new document after every successful mutation
pub type RefreshListener = Box<dyn Fn(&Document)>;

/// Sole owner of the snippet document. Every mutating call writes the whole
/// document back to disk before it returns.
pub struct SnippetManager {
    storage: StorageManager,
    document: Document,
    listeners: Vec<RefreshListener>,
}

impl std::fmt::Debug for SnippetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetManager")
            .field("storage", &self.storage)
            .field("document", &self.document)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SnippetManager {
    /// Load the document at `config`, or create a seeded one there
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let (storage, document) = load_or_create(config)?;
        Ok(Self {
            storage,
            document,
            listeners: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, listener: RefreshListener) {
        self.listeners.push(listener);
    }

    pub fn data(&self) -> &Document {
        &self.document
    }

    pub fn data_file_path(&self) -> &Path {
        self.storage.database_file()
    }

    pub fn storage_dir(&self) -> &Path {
        self.storage.data_directory()
    }

    pub fn add_group(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SnippetError::Validation("Group name cannot be empty".to_string()));
        }
        if self.document.has_group(name) {
            debug!(group = %name, "Group already exists");
            return Ok(false);
        }

        self.document.groups.push(name.to_string());
        self.persist()?;
        info!(group = %name, "Group added");
        Ok(true)
    }

    /// Removes the group and every snippet in it; returns how many snippets went
    pub fn delete_group(&mut self, name: &str) -> Result<usize> {
        if !self.document.has_group(name) {
            return Err(SnippetError::NotFound(format!("Group '{}' not found", name)));
        }

        let before = self.document.snippets.len();
        self.document.snippets.retain(|s| s.group != name);
        self.document.groups.retain(|g| g != name);
        let removed = before - self.document.snippets.len();

        self.persist()?;
        info!(group = %name, removed, "Group deleted");
        Ok(removed)
    }

    pub fn add_snippet(
        &mut self,
        group: &str,
        title: &str,
        content: &str,
        snippet_type: SnippetType,
    ) -> Result<&SnippetRecord> {
        if title.trim().is_empty() {
            return Err(SnippetError::Validation("Snippet title cannot be empty".to_string()));
        }
        if !self.document.has_group(group) {
            return Err(SnippetError::Validation(format!("Group '{}' does not exist", group)));
        }

        let snippet = SnippetRecord::new(group, title, content, snippet_type);
        info!(id = %snippet.id, group = %group, kind = %snippet_type, "Snippet added");
        self.document.snippets.push(snippet);
        self.persist()?;

        let newest = self.document.snippets.len() - 1;
        Ok(&self.document.snippets[newest])
    }

    /// Merge the provided fields into snippet `id`
    pub fn update_snippet(&mut self, id: &str, patch: SnippetPatch) -> Result<&SnippetRecord> {
        if self.document.snippet(id).is_none() {
            return Err(SnippetError::NotFound(format!("Snippet '{}' not found", id)));
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(SnippetError::Validation("Snippet title cannot be empty".to_string()));
            }
        }
        if let Some(group) = &patch.group {
            if !self.document.has_group(group) {
                return Err(SnippetError::Validation(format!("Group '{}' does not exist", group)));
            }
        }

        if let Some(snippet) = self.document.snippet_mut(id) {
            patch.apply_to(snippet);
        }
        self.persist()?;
        info!(id = %id, "Snippet updated");

        self.document
            .snippet(id)
            .ok_or_else(|| SnippetError::NotFound(format!("Snippet '{}' not found", id)))
    }

    pub fn delete_snippet(&mut self, id: &str) -> Result<SnippetRecord> {
        let index = self
            .document
            .snippets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SnippetError::NotFound(format!("Snippet '{}' not found", id)))?;

        let removed = self.document.snippets.remove(index);
        self.persist()?;
        info!(id = %id, title = %removed.title, "Snippet deleted");
        Ok(removed)
    }

    pub fn list_all(&self) -> &[SnippetRecord] {
        &self.document.snippets
    }

    pub fn list_by_type(&self, snippet_type: SnippetType) -> Vec<&SnippetRecord> {
        self.document
            .snippets
            .iter()
            .filter(|s| s.snippet_type == snippet_type)
            .collect()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&SnippetRecord> {
        self.document.snippets.iter().find(|s| s.title == title)
    }

    /// Resolve an id or a title: id, exact title, case-insensitive title,
    /// then case-insensitive partial title
    pub fn find(&self, name_or_id: &str) -> Option<&SnippetRecord> {
        if let Some(snippet) = self.document.snippet(name_or_id) {
            return Some(snippet);
        }
        if let Some(snippet) = self.find_by_title(name_or_id) {
            return Some(snippet);
        }

        let needle = name_or_id.to_lowercase();
        let snippets = &self.document.snippets;
        snippets
            .iter()
            .find(|s| s.title.to_lowercase() == needle)
            .or_else(|| snippets.iter().find(|s| s.title.to_lowercase().contains(&needle)))
    }

    /// Strict resolution for callers about to change or remove a snippet:
    /// an id, or a title that exactly one snippet carries
    pub fn find_exact(&self, name_or_id: &str) -> Result<&SnippetRecord> {
        if let Some(snippet) = self.document.snippet(name_or_id) {
            return Ok(snippet);
        }

        let mut titled = self.document.snippets.iter().filter(|s| s.title == name_or_id);
        match (titled.next(), titled.next()) {
            (Some(snippet), None) => Ok(snippet),
            (Some(_), Some(_)) => Err(SnippetError::Validation(format!(
                "Several snippets are titled '{}'; use the id instead",
                name_or_id
            ))),
            (None, _) => Err(SnippetError::NotFound(format!(
                "No snippet with id or exact title '{}'",
                name_or_id
            ))),
        }
    }

    /// `Ok(None)` when the user backs out or there is no group to pick
    pub fn pick_group(&self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let groups = &self.document.groups;
        let picked = prompter.pick("Select group", groups)?;
        Ok(picked.and_then(|index| groups.get(index).cloned()))
    }

    pub fn export_as_json(&self) -> Result<String> {
        export::export_document(&self.document)
    }

    pub fn export_group(&self, group: &str) -> Result<String> {
        let partial = export::export_group(&self.document, group)?;
        export::export_document(&partial)
    }

    /// Replace the whole document with `json`. Nothing changes on failure.
    pub fn import_from_json(&mut self, json: &str) -> Result<()> {
        let document = export::parse_document(json, ExportFormat::Json)?;
        self.replace_document(document)
    }

    /// Validate `document`, adopt groups its snippets reference, then make it
    /// the current state
    pub fn replace_document(&mut self, mut document: Document) -> Result<()> {
        document.check_integrity()?;
        let adopted = document.adopt_orphan_groups();
        if !adopted.is_empty() {
            warn!(groups = ?adopted, "Imported snippets referenced unlisted groups; added them");
        }

        self.document = document;
        self.persist()?;
        info!(
            groups = self.document.groups.len(),
            snippets = self.document.snippets.len(),
            "Document replaced"
        );
        Ok(())
    }

    /// Merge `records` into the current snippets
    pub fn import_snippets(
        &mut self,
        records: Vec<SnippetRecord>,
        policy: MergePolicy,
    ) -> Result<MergeReport> {
        records.iter().try_for_each(check_record)?;

        let report = export::merge_snippets(&mut self.document, records, policy);
        self.persist()?;
        info!(
            added = report.added,
            overwritten = report.overwritten,
            skipped = report.skipped,
            "Snippets merged"
        );
        Ok(report)
    }

    /// Swap the whole snippet list for `records`; groups are kept
    pub fn replace_snippets(&mut self, records: Vec<SnippetRecord>) -> Result<()> {
        ensure_unique_ids(&records)?;

        self.document.snippets = records;
        let adopted = self.document.adopt_orphan_groups();
        self.persist()?;
        info!(
            snippets = self.document.snippets.len(),
            groups_added = adopted.len(),
            "Snippets replaced"
        );
        Ok(())
    }

    /// Point the manager at `folder`: an existing data file there is loaded
    /// as-is, otherwise a seeded document is created. On error the manager
    /// keeps its current location and state.
    pub fn set_storage_path(&mut self, folder: impl Into<PathBuf>) -> Result<()> {
        self.reconfigure(&StorageConfig::new(folder))
    }

    pub fn reconfigure(&mut self, config: &StorageConfig) -> Result<()> {
        let (storage, document) = load_or_create(config)?;
        info!(path = %storage.database_file().display(), "Storage location changed");
        self.storage = storage;
        self.document = document;
        self.notify();
        Ok(())
    }

    pub fn backup(&self) -> Result<PathBuf> {
        let path = self.storage.backup_database()?;
        info!(path = %path.display(), "Backup written");
        Ok(path)
    }

    /// Open the data file in an external editor and wait for it to exit.
    /// `preferred` wins over `$VISUAL`/`$EDITOR`.
    pub fn open_storage(&self, preferred: Option<&str>) -> Result<()> {
        let path = self.data_file_path();
        let mut editors: Vec<String> = Vec::new();
        editors.extend(preferred.map(str::to_string));
        editors.extend(std::env::var("VISUAL").ok());
        editors.extend(std::env::var("EDITOR").ok());
        editors.extend(["nvim", "vim", "nano"].map(String::from));

        for editor in editors.iter().filter(|e| !e.trim().is_empty()) {
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                continue;
            };
            match Command::new(program).args(parts).arg(path).status() {
                Ok(status) => {
                    debug!(editor = %editor, ?status, "Editor exited");
                    return Ok(());
                }
                Err(e) => debug!(editor = %editor, error = %e, "Editor failed to start"),
            }
        }

        Err(SnippetError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not launch any editor (set $EDITOR)",
            ),
        ))
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_database(&self.document)?;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.document);
        }
    }
}

/// Loads (or seeds) the document at `config`. A loaded file is held to the
/// same rules as an import; groups its snippets reference are added and
/// written back.
fn load_or_create(config: &StorageConfig) -> Result<(StorageManager, Document)> {
    let storage = StorageManager::new(config)?;
    let document = match storage.load_database()? {
        Some(mut document) => {
            document.check_integrity()?;
            let adopted = document.adopt_orphan_groups();
            if !adopted.is_empty() {
                warn!(groups = ?adopted, "Snippets referenced unlisted groups; added them");
                storage.save_database(&document)?;
            }
            document
        }
        None => {
            let document = Document::seeded();
            storage.save_database(&document)?;
            info!(path = %storage.database_file().display(), "Created new snippet store");
            document
        }
    };
    Ok((storage, document))
}
