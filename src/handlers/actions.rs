use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::error::{Result, SnippetError};
use crate::models::{SnippetRecord, SnippetType};

/// What can be done with a single snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetAction {
    Insert,
    Run,
    Edit,
    ChangeType,
    Delete,
}

impl SnippetAction {
    pub fn label(&self) -> &'static str {
        match self {
            SnippetAction::Insert => "Insert snippet",
            SnippetAction::Run => "Run in terminal",
            SnippetAction::Edit => "Edit snippet",
            SnippetAction::ChangeType => "Change type",
            SnippetAction::Delete => "Delete snippet",
        }
    }

    /// Insert only makes sense for code, Run only for terminal commands
    pub fn applies_to(&self, snippet_type: SnippetType) -> bool {
        match self {
            SnippetAction::Insert => snippet_type == SnippetType::Code,
            SnippetAction::Run => snippet_type == SnippetType::Terminal,
            _ => true,
        }
    }

    pub fn available_for(snippet_type: SnippetType) -> Vec<SnippetAction> {
        [
            SnippetAction::Insert,
            SnippetAction::Run,
            SnippetAction::Edit,
            SnippetAction::ChangeType,
            SnippetAction::Delete,
        ]
        .into_iter()
        .filter(|action| action.applies_to(snippet_type))
        .collect()
    }

    pub fn ensure_applies(&self, snippet: &SnippetRecord) -> Result<()> {
        if self.applies_to(snippet.snippet_type) {
            Ok(())
        } else {
            Err(SnippetError::Validation(format!(
                "'{}' is a {} snippet; {} is not available for it",
                snippet.title,
                snippet.snippet_type,
                self.label().to_lowercase()
            )))
        }
    }
}

impl fmt::Display for SnippetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where resolved code goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertTarget {
    Stdout,
    /// Insert before 1-based `line`; append when `None` or past the end
    File { path: PathBuf, line: Option<usize> },
}

/// Insert already-resolved text for a code snippet
pub fn insert_snippet(
    snippet: &SnippetRecord,
    text: &str,
    target: &InsertTarget,
    out: &mut dyn Write,
) -> Result<()> {
    SnippetAction::Insert.ensure_applies(snippet)?;

    match target {
        InsertTarget::Stdout => {
            out.write_all(text.as_bytes())
                .and_then(|_| if text.ends_with('\n') { Ok(()) } else { out.write_all(b"\n") })
                .and_then(|_| out.flush())
                .map_err(|e| SnippetError::io("<stdout>", e))?;
        }
        InsertTarget::File { path, line } => {
            insert_into_file(path, *line, text)?;
            info!(id = %snippet.id, path = %path.display(), ?line, "Snippet inserted");
        }
    }
    Ok(())
}

/// Splice `text` into `path` before 1-based `line`. A missing file is created.
pub fn insert_into_file(path: &Path, line: Option<usize>, text: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path).map_err(|e| SnippetError::io(path, e))?
    } else {
        String::new()
    };

    let mut block = text.to_string();
    if !block.ends_with('\n') {
        block.push('\n');
    }

    let lines: Vec<&str> = existing.split_inclusive('\n').collect();
    let index = match line {
        Some(0) => {
            return Err(SnippetError::Validation("Line numbers start at 1".to_string()));
        }
        Some(n) if n - 1 < lines.len() => n - 1,
        _ => lines.len(),
    };

    let mut updated = String::with_capacity(existing.len() + block.len() + 1);
    for l in &lines[..index] {
        updated.push_str(l);
    }
    // Appending to a file without a trailing newline
    if index == lines.len() && !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&block);
    for l in &lines[index..] {
        updated.push_str(l);
    }

    fs::write(path, updated).map_err(|e| SnippetError::io(path, e))
}

/// Run an already-resolved terminal snippet through the system shell
pub fn run_snippet(snippet: &SnippetRecord, command: &str) -> Result<ExitStatus> {
    SnippetAction::Run.ensure_applies(snippet)?;

    debug!(id = %snippet.id, command = %command, "Running snippet");
    let status = shell_command(command)
        .status()
        .map_err(|e| SnippetError::io(shell_program(), e))?;
    info!(id = %snippet.id, ?status, "Snippet command finished");
    Ok(status)
}

#[cfg(windows)]
fn shell_program() -> &'static str {
    "cmd"
}

#[cfg(not(windows))]
fn shell_program() -> &'static str {
    "sh"
}

fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new(shell_program());
    if cfg!(windows) {
        cmd.arg("/C");
    } else {
        cmd.arg("-c");
    }
    cmd.arg(command);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snippet(snippet_type: SnippetType) -> SnippetRecord {
        SnippetRecord::new("General", "sample", "body", snippet_type)
    }

    #[test]
    fn test_actions_offered_per_type() {
        assert_eq!(
            SnippetAction::available_for(SnippetType::Code),
            vec![
                SnippetAction::Insert,
                SnippetAction::Edit,
                SnippetAction::ChangeType,
                SnippetAction::Delete
            ]
        );
        assert_eq!(SnippetAction::available_for(SnippetType::Terminal)[0], SnippetAction::Run);
    }

    #[test]
    fn test_wrong_type_is_validation_error() {
        let mut out = Vec::new();
        let result = insert_snippet(
            &snippet(SnippetType::Terminal),
            "ls",
            &InsertTarget::Stdout,
            &mut out,
        );
        assert!(matches!(result, Err(SnippetError::Validation(_))));
        assert!(out.is_empty());

        assert!(matches!(
            run_snippet(&snippet(SnippetType::Code), "true"),
            Err(SnippetError::Validation(_))
        ));
    }

    #[test]
    fn test_insert_to_stdout_adds_newline() {
        let mut out = Vec::new();
        insert_snippet(&snippet(SnippetType::Code), "let x = 1;", &InsertTarget::Stdout, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "let x = 1;\n");
    }

    #[test]
    fn test_insert_into_file_at_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("main.rs");
        fs::write(&path, "one\ntwo\nthree\n").unwrap();

        insert_into_file(&path, Some(2), "inserted").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ninserted\ntwo\nthree\n");
    }

    #[test]
    fn test_insert_past_end_appends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("main.rs");
        fs::write(&path, "one\ntwo").unwrap();

        insert_into_file(&path, Some(40), "tail\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\ntail\n");
    }

    #[test]
    fn test_insert_creates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("new.txt");

        insert_into_file(&path, None, "hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_line_zero_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("f.txt");
        assert!(matches!(
            insert_into_file(&path, Some(0), "x"),
            Err(SnippetError::Validation(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_exit_status() {
        let status = run_snippet(&snippet(SnippetType::Terminal), "exit 3").unwrap();
        assert_eq!(status.code(), Some(3));
    }
}
