use crate::models::{Document, SnippetType};

/// Which part of a snippet or group matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResultType {
    Group,
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Snippet id, or the group name for group matches
    pub id: String,
    pub name: String,
    pub result_type: SearchResultType,
    pub match_context: String,
    pub group: String,
    pub snippet_type: Option<SnippetType>,
}

/// Case-insensitive search over group names, snippet titles and snippet
/// content. A snippet can produce both a title and a content result.
pub fn search(document: &Document, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();

    if query.trim().is_empty() {
        return results;
    }

    let query = query.to_lowercase();

    for group in &document.groups {
        if group.to_lowercase().contains(&query) {
            results.push(SearchResult {
                id: group.clone(),
                name: group.clone(),
                result_type: SearchResultType::Group,
                match_context: format!(
                    "Group name match: {} ({} snippets)",
                    group,
                    document.snippet_count(group)
                ),
                group: group.clone(),
                snippet_type: None,
            });
        }
    }

    for snippet in &document.snippets {
        if snippet.title.to_lowercase().contains(&query) {
            results.push(SearchResult {
                id: snippet.id.clone(),
                name: snippet.title.clone(),
                result_type: SearchResultType::Title,
                match_context: format!("Snippet title match: {}", snippet.title),
                group: snippet.group.clone(),
                snippet_type: Some(snippet.snippet_type),
            });
        }

        // First matching line gives the context
        let matching_line = snippet
            .content
            .lines()
            .enumerate()
            .find(|(_, line)| line.to_lowercase().contains(&query));

        if let Some((i, line)) = matching_line {
            results.push(SearchResult {
                id: snippet.id.clone(),
                name: snippet.title.clone(),
                result_type: SearchResultType::Content,
                match_context: format!("Line {}: {}", i + 1, line.trim()),
                group: snippet.group.clone(),
                snippet_type: Some(snippet.snippet_type),
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnippetRecord;

    fn document() -> Document {
        Document {
            groups: vec!["Docker".to_string(), "Rust".to_string()],
            snippets: vec![
                SnippetRecord {
                    id: "1".to_string(),
                    title: "Build image".to_string(),
                    content: "cd app\ndocker build -t {$tag} .".to_string(),
                    snippet_type: SnippetType::Terminal,
                    group: "Docker".to_string(),
                },
                SnippetRecord {
                    id: "2".to_string(),
                    title: "Main fn".to_string(),
                    content: "fn main() {}".to_string(),
                    snippet_type: SnippetType::Code,
                    group: "Rust".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_empty_query_finds_nothing() {
        assert!(search(&document(), "   ").is_empty());
    }

    #[test]
    fn test_group_and_content_matches() {
        let results = search(&document(), "DOCKER");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result_type, SearchResultType::Group);
        assert_eq!(results[0].match_context, "Group name match: Docker (1 snippets)");
        assert_eq!(results[1].result_type, SearchResultType::Content);
        assert_eq!(results[1].match_context, "Line 2: docker build -t {$tag} .");
        assert_eq!(results[1].snippet_type, Some(SnippetType::Terminal));
    }

    #[test]
    fn test_title_and_content_both_reported() {
        let results = search(&document(), "main");

        let kinds: Vec<_> = results.iter().map(|r| r.result_type).collect();
        assert_eq!(kinds, vec![SearchResultType::Title, SearchResultType::Content]);
        assert!(results.iter().all(|r| r.id == "2"));
    }
}
