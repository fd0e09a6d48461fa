use crate::manager::SnippetManager;
use crate::models::{Document, SnippetRecord, SnippetType};
use anyhow::{Result, bail};
use colored::Colorize;

/// Displays groups and their snippets in a tree-like structure
pub fn display_tree(
    document: &Document,
    group: Option<&str>,
    snippet_type: Option<SnippetType>,
) -> Result<()> {
    if document.groups.is_empty() {
        println!("{}  No groups found.", "┃".bright_magenta());
        return Ok(());
    }

    let groups: Vec<&String> = match group {
        Some(name) => match find_group_by_name(document, name) {
            Some(found) => vec![found],
            None => {
                list_all_groups(document);
                bail!("No group found with name: {}", name);
            }
        },
        None => document.groups.iter().collect(),
    };

    for (idx, name) in groups.iter().enumerate() {
        let is_last_group = idx == groups.len() - 1;
        let snippets: Vec<&SnippetRecord> = document
            .snippets_in(name)
            .filter(|s| snippet_type.is_none_or(|t| s.snippet_type == t))
            .collect();

        println!(
            "{}  {} {} {}",
            "┃".bright_magenta(),
            "󰠮".bright_blue(),
            name.bold(),
            format!("({})", snippets.len()).bright_black()
        );

        print_group_contents(&snippets, !is_last_group);
    }
    Ok(())
}

fn print_group_contents(snippets: &[&SnippetRecord], guide: bool) {
    for (i, snippet) in snippets.iter().enumerate() {
        let is_last = i == snippets.len() - 1;

        print!("{}  ", "┃".bright_magenta());
        if guide {
            print!("┃  ");
        } else {
            print!("   ");
        }
        if is_last {
            print!("└── ");
        } else {
            print!("├── ");
        }

        println!(
            "{} {} [{}] {}",
            snippet.snippet_type.icon(),
            snippet.title.bright_white(),
            snippet.snippet_type.as_str().bright_black(),
            snippet.preview(40).bright_black().italic()
        );
    }
}

pub fn print_type_summary(manager: &SnippetManager) {
    let counts: Vec<String> = SnippetType::all()
        .iter()
        .map(|t| format!("{} {}", manager.list_by_type(*t).len(), t.as_str()))
        .collect();
    println!("{}  {}", "┃".bright_magenta(), counts.join(", ").bright_black());
}

/// Find a group by name: exact, then case-insensitive, then partial
pub fn find_group_by_name<'a>(document: &'a Document, name: &str) -> Option<&'a String> {
    let lower = name.to_lowercase();
    document
        .groups
        .iter()
        .find(|g| g.as_str() == name)
        .or_else(|| document.groups.iter().find(|g| g.to_lowercase() == lower))
        .or_else(|| document.groups.iter().find(|g| g.to_lowercase().contains(&lower)))
}

pub fn list_all_groups(document: &Document) {
    for (idx, group) in document.groups.iter().enumerate() {
        println!(
            "{}  {}. {} {}",
            "┃".bright_magenta(),
            (idx + 1).to_string().bright_yellow(),
            group.bright_white().bold(),
            format!("[{} snippets]", document.snippet_count(group))
                .bright_black()
                .italic()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document {
            groups: vec!["Docker".to_string(), "docker-compose".to_string(), "Git".to_string()],
            snippets: Vec::new(),
        }
    }

    #[test]
    fn test_find_group_prefers_exact_match() {
        let doc = document();
        assert_eq!(find_group_by_name(&doc, "Docker").map(String::as_str), Some("Docker"));
        assert_eq!(find_group_by_name(&doc, "git").map(String::as_str), Some("Git"));
        assert_eq!(find_group_by_name(&doc, "compose").map(String::as_str), Some("docker-compose"));
        assert!(find_group_by_name(&doc, "svn").is_none());
    }
}
