use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Which downstream action a snippet is meant for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SnippetType {
    /// Inserted into a document
    #[default]
    Code,
    /// Sent to a shell
    Terminal,
}

impl SnippetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetType::Code => "code",
            SnippetType::Terminal => "terminal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SnippetType::Code => "Code Snippet",
            SnippetType::Terminal => "Terminal Command",
        }
    }

    /// Get icon for the type
    pub fn icon(&self) -> &'static str {
        match self {
            SnippetType::Code => "",
            SnippetType::Terminal => "",
        }
    }

    pub fn all() -> [SnippetType; 2] {
        [SnippetType::Code, SnippetType::Terminal]
    }
}

impl fmt::Display for SnippetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(SnippetType::Code),
            "terminal" | "term" | "cmd" => Ok(SnippetType::Terminal),
            other => Err(format!("unknown snippet type '{}' (expected code or terminal)", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub snippet_type: SnippetType,
    pub group: String,
}

impl SnippetRecord {
    pub fn new(
        group: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        snippet_type: SnippetType,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            snippet_type,
            group: group.into(),
        }
    }

    pub fn get_line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// First non-empty line of the content, cut to `max_chars`
    pub fn preview(&self, max_chars: usize) -> String {
        let first = self
            .content
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("");
        if first.chars().count() > max_chars {
            let cut: String = first.chars().take(max_chars).collect();
            format!("{}…", cut)
        } else {
            first.to_string()
        }
    }
}

/// Partial update for a snippet; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub snippet_type: Option<SnippetType>,
    pub group: Option<String>,
}

impl SnippetPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.snippet_type.is_none()
            && self.group.is_none()
    }

    pub fn with_type(snippet_type: SnippetType) -> Self {
        Self {
            snippet_type: Some(snippet_type),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, snippet: &mut SnippetRecord) {
        if let Some(title) = self.title {
            snippet.title = title;
        }
        if let Some(content) = self.content {
            snippet.content = content;
        }
        if let Some(snippet_type) = self.snippet_type {
            snippet.snippet_type = snippet_type;
        }
        if let Some(group) = self.group {
            snippet.group = group;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serializes_lowercase_under_type_key() {
        let snippet = SnippetRecord {
            id: "1".to_string(),
            title: "List".to_string(),
            content: "ls -la".to_string(),
            snippet_type: SnippetType::Terminal,
            group: "Shell".to_string(),
        };

        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(json["type"], "terminal");
        assert!(json.get("snippet_type").is_none());
    }

    #[test]
    fn test_missing_type_defaults_to_code() {
        let snippet: SnippetRecord =
            serde_json::from_str(r#"{"id":"7","title":"T","content":"C","group":"G"}"#).unwrap();
        assert_eq!(snippet.snippet_type, SnippetType::Code);
    }

    #[test]
    fn test_new_snippets_get_distinct_ids() {
        let a = SnippetRecord::new("G", "A", "", SnippetType::Code);
        let b = SnippetRecord::new("G", "B", "", SnippetType::Code);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("Terminal".parse::<SnippetType>(), Ok(SnippetType::Terminal));
        assert_eq!("code".parse::<SnippetType>(), Ok(SnippetType::Code));
        assert!("python".parse::<SnippetType>().is_err());
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut snippet = SnippetRecord::new("G", "Title", "body", SnippetType::Code);
        let before = snippet.clone();

        SnippetPatch::with_type(SnippetType::Terminal).apply_to(&mut snippet);

        assert_eq!(snippet.snippet_type, SnippetType::Terminal);
        assert_eq!(snippet.id, before.id);
        assert_eq!(snippet.title, before.title);
        assert_eq!(snippet.content, before.content);
        assert_eq!(snippet.group, before.group);
    }

    #[test]
    fn test_preview_truncates_first_line() {
        let snippet = SnippetRecord::new("G", "T", "\n  abcdefgh\nsecond", SnippetType::Code);
        assert_eq!(snippet.preview(4), "abcd…");
        assert_eq!(snippet.preview(20), "abcdefgh");
    }
}
