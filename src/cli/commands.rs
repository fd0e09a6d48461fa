use crate::cli::{GroupCommand, IconCommand, ImportMode, StorageCommand, tree};
use crate::config::Settings;
use crate::error::SnippetError;
use crate::folding::{self, FoldRule};
use crate::handlers::actions::{self, InsertTarget, SnippetAction};
use crate::handlers::prompts::{PresetPrompter, Prompter, TerminalPrompter, non_blank, parse_assignments};
use crate::icons::{self, GalleryFilter};
use crate::manager::SnippetManager;
use crate::models::{MergePolicy, SnippetPatch, SnippetRecord, SnippetType, export};
use crate::placeholder::resolve_placeholders;
use crate::search::{self, SearchResultType};
use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

fn margin() -> colored::ColoredString {
    "┃".bright_magenta()
}

fn rule() {
    println!("{}", "─".repeat(60).bright_magenta());
}

fn print_available(manager: &SnippetManager) {
    let all = manager.list_all();
    if all.is_empty() {
        return;
    }
    println!("{}  Available snippets:", margin());
    rule();
    for (idx, snippet) in all.iter().enumerate().take(10) {
        println!(
            "{}  {}. {} {} {}",
            margin(),
            (idx + 1).to_string().yellow(),
            snippet.title.bright_white(),
            format!("({})", snippet.group).bright_black(),
            snippet.id.bright_black()
        );
    }
    if all.len() > 10 {
        println!("{}  ... and {} more", margin(), all.len() - 10);
    }
}

/// Resolves a snippet by id or title, listing what exists when nothing matches
fn lookup(manager: &SnippetManager, name_or_id: &str) -> Result<SnippetRecord> {
    if let Some(snippet) = manager.find(name_or_id) {
        return Ok(snippet.clone());
    }

    print_available(manager);
    Err(SnippetError::NotFound(format!("No snippet found with name: {}", name_or_id)).into())
}

/// Like `lookup`, but only an id or an exact, unambiguous title will do.
/// Used before changing or deleting a snippet.
fn lookup_exact(manager: &SnippetManager, name_or_id: &str) -> Result<SnippetRecord> {
    match manager.find_exact(name_or_id) {
        Ok(snippet) => Ok(snippet.clone()),
        Err(err) => {
            print_available(manager);
            Err(err.into())
        }
    }
}

fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(content) = content {
        return Ok(content);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    if io::stdin().is_terminal() {
        return compose_in_editor("");
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read snippet content from stdin")?;
    Ok(buffer)
}

fn compose_in_editor(initial: &str) -> Result<String> {
    let edited = dialoguer::Editor::new()
        .extension(".txt")
        .edit(initial)
        .context("Failed to launch editor")?;
    edited.ok_or_else(|| SnippetError::Cancelled.into())
}

pub fn group(manager: &mut SnippetManager, action: GroupCommand) -> Result<()> {
    match action {
        GroupCommand::Add { name } => {
            if manager.add_group(&name)? {
                println!("{}  Group '{}' created.", margin(), name.trim().bright_white());
            } else {
                println!("{}  Group '{}' already exists.", margin(), name.trim());
            }
        }
        GroupCommand::Delete { name, yes } => {
            if !manager.data().has_group(&name) {
                tree::list_all_groups(manager.data());
                return Err(SnippetError::NotFound(format!("Group '{}' not found", name)).into());
            }
            let count = manager.data().snippet_count(&name);
            if !yes {
                let question = format!("Delete group '{}' and its {} snippets?", name, count);
                if !TerminalPrompter::new().confirm(&question)?.unwrap_or(false) {
                    return Err(SnippetError::Cancelled.into());
                }
            }
            let removed = manager.delete_group(&name)?;
            println!(
                "{}  Group '{}' deleted ({} snippets removed).",
                margin(),
                name.bright_white(),
                removed
            );
        }
        GroupCommand::Export { name, output } => {
            let json = manager.export_group(&name)?;
            write_or_print(&json, output.as_deref())?;
            if let Some(path) = output {
                println!(
                    "{}  Exported {} snippets from '{}' to {}",
                    margin(),
                    manager.data().snippet_count(&name),
                    name,
                    path.display()
                );
            }
        }
    }
    Ok(())
}

pub fn add_snippet(
    manager: &mut SnippetManager,
    content: Option<String>,
    file: Option<PathBuf>,
    group: Option<String>,
    title: Option<String>,
    snippet_type: SnippetType,
) -> Result<()> {
    let mut prompter = TerminalPrompter::new();

    let group = match group {
        Some(group) => group,
        None => manager.pick_group(&mut prompter)?.ok_or(SnippetError::Cancelled)?,
    };
    let title = match title {
        Some(title) => title,
        None => prompter
            .prompt("title", "Snippet title", &non_blank)?
            .ok_or(SnippetError::Cancelled)?,
    };
    let content = read_content(content, file)?;

    let snippet = manager.add_snippet(&group, &title, &content, snippet_type)?;
    println!(
        "{}  Snippet '{}' saved to '{}'.",
        margin(),
        snippet.title.bright_white(),
        snippet.group.bright_blue()
    );
    println!("{}  {}: {}", margin(), "ID".bright_black(), snippet.id);
    Ok(())
}

#[derive(Debug, Default)]
pub struct EditArgs {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_file: Option<PathBuf>,
    pub group: Option<String>,
    pub snippet_type: Option<SnippetType>,
}

pub fn edit_snippet(manager: &mut SnippetManager, name_or_id: &str, args: EditArgs) -> Result<()> {
    let snippet = lookup_exact(manager, name_or_id)?;

    let content = match (args.content, args.content_file) {
        (Some(content), _) => Some(content),
        (None, Some(path)) => Some(
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        (None, None) => None,
    };
    let mut patch = SnippetPatch {
        title: args.title,
        content,
        snippet_type: args.snippet_type,
        group: args.group,
    };

    // Nothing given on the command line: edit the content interactively
    if patch.is_empty() {
        patch.content = Some(compose_in_editor(&snippet.content)?);
    }

    let updated = manager.update_snippet(&snippet.id, patch)?;
    println!("{}  Snippet '{}' updated.", margin(), updated.title.bright_white());
    Ok(())
}

pub fn change_type(
    manager: &mut SnippetManager,
    name_or_id: &str,
    snippet_type: Option<SnippetType>,
) -> Result<()> {
    let snippet = lookup_exact(manager, name_or_id)?;

    let new_type = match snippet_type {
        Some(t) => t,
        None => {
            let types = SnippetType::all();
            let labels: Vec<String> = types
                .iter()
                .map(|t| format!("{} {}", t.icon(), t.display_name()))
                .collect();
            let index = TerminalPrompter::new()
                .pick(&format!("New type for '{}'", snippet.title), &labels)?
                .ok_or(SnippetError::Cancelled)?;
            types[index]
        }
    };

    manager.update_snippet(&snippet.id, SnippetPatch::with_type(new_type))?;
    println!(
        "{}  '{}' is now a {} snippet.",
        margin(),
        snippet.title.bright_white(),
        new_type.as_str().bright_green()
    );
    Ok(())
}

pub fn delete_snippet(manager: &mut SnippetManager, name_or_id: &str, yes: bool) -> Result<()> {
    let snippet = lookup_exact(manager, name_or_id)?;

    if !yes {
        let question = format!("Delete snippet '{}'?", snippet.title);
        if !TerminalPrompter::new().confirm(&question)?.unwrap_or(false) {
            return Err(SnippetError::Cancelled.into());
        }
    }

    let removed = manager.delete_snippet(&snippet.id)?;
    println!("{}  Snippet '{}' deleted.", margin(), removed.title.bright_white());
    Ok(())
}

/// Shows the content of a specific snippet by ID or name
pub fn show_snippet(manager: &SnippetManager, name_or_id: &str) -> Result<()> {
    let snippet = lookup(manager, name_or_id)?;

    println!(
        "{}  {} {}",
        margin(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    rule();
    println!("{}  {}: {}", margin(), "Group".bright_blue(), snippet.group);
    println!(
        "{}  {}: {} {}",
        margin(),
        "Type".bright_yellow(),
        snippet.snippet_type.icon(),
        snippet.snippet_type.display_name()
    );
    println!("{}  {}: {}", margin(), "Lines".bright_cyan(), snippet.get_line_count());
    println!("{}  {}: {}", margin(), "ID".bright_black(), snippet.id);
    rule();

    for line in snippet.content.lines() {
        println!("{}  {}", margin(), line);
    }
    Ok(())
}

/// Searches for snippets and groups matching a query string
pub fn search_snippets(manager: &SnippetManager, query: &str) {
    let results = search::search(manager.data(), query);

    println!(
        "{}  {} '{}'",
        margin(),
        "SEARCH RESULTS FOR".bold(),
        query.bright_white()
    );

    if results.is_empty() {
        println!("{}  Nothing found matching query: {}", margin(), query);
        return;
    }

    println!("{}  Found {} matches:", margin(), results.len());
    rule();

    for (idx, result) in results.iter().enumerate() {
        let kind = match result.result_type {
            SearchResultType::Group => "group",
            SearchResultType::Title => "title",
            SearchResultType::Content => "content",
        };
        let icon = result.snippet_type.map(|t| t.icon()).unwrap_or("󰠮");
        println!(
            "{}  {}. {} {} (match in: {})",
            margin(),
            (idx + 1).to_string().bright_yellow(),
            icon,
            result.name.bright_white().bold(),
            kind.bright_green()
        );
        println!("{}     {}", margin(), result.match_context.bright_black());
        if result.result_type != SearchResultType::Group {
            println!("{}     {}: {}", margin(), "Group".bright_blue(), result.group);
            println!("{}     {}: {}", margin(), "ID".bright_black(), result.id);
        }

        if idx < results.len() - 1 {
            println!("{}  {}", margin(), "─".repeat(40).bright_black());
        }
    }
}

fn resolve(snippet: &SnippetRecord, vars: &[String]) -> Result<String> {
    let presets = parse_assignments(vars).map_err(SnippetError::Validation)?;
    let mut prompter = PresetPrompter::new(presets, TerminalPrompter::new());
    Ok(resolve_placeholders(&snippet.content, &mut prompter)?)
}

pub fn insert(
    manager: &SnippetManager,
    name_or_id: &str,
    file: Option<PathBuf>,
    line: Option<usize>,
    vars: &[String],
) -> Result<()> {
    let snippet = lookup(manager, name_or_id)?;
    SnippetAction::Insert.ensure_applies(&snippet)?;

    let text = resolve(&snippet, vars)?;
    let target = match file {
        Some(path) => InsertTarget::File { path, line },
        None => InsertTarget::Stdout,
    };

    let stdout = io::stdout();
    actions::insert_snippet(&snippet, &text, &target, &mut stdout.lock())?;

    if let InsertTarget::File { path, .. } = &target {
        println!(
            "{}  Inserted '{}' into {}",
            margin(),
            snippet.title.bright_white(),
            path.display()
        );
    }
    Ok(())
}

pub fn run(manager: &SnippetManager, name_or_id: &str, vars: &[String]) -> Result<()> {
    let snippet = lookup(manager, name_or_id)?;
    SnippetAction::Run.ensure_applies(&snippet)?;

    let command = resolve(&snippet, vars)?;
    eprintln!("{}  {} {}", margin(), "$".bright_green(), command);

    let status = actions::run_snippet(&snippet, &command)?;
    if !status.success() {
        bail!("Command exited with {}", status);
    }
    Ok(())
}

pub fn actions(manager: &mut SnippetManager, name_or_id: Option<&str>) -> Result<()> {
    let mut prompter = TerminalPrompter::new();

    let snippet = match name_or_id {
        Some(name) => lookup_exact(manager, name)?,
        None => {
            let all = manager.list_all();
            let labels: Vec<String> = all
                .iter()
                .map(|s| format!("{} {}  ({})", s.snippet_type.icon(), s.title, s.group))
                .collect();
            let index = prompter
                .pick("Select snippet", &labels)?
                .ok_or(SnippetError::Cancelled)?;
            all[index].clone()
        }
    };

    let available = SnippetAction::available_for(snippet.snippet_type);
    let labels: Vec<String> = available.iter().map(|a| a.label().to_string()).collect();
    let index = prompter
        .pick(&format!("Action for '{}'", snippet.title), &labels)?
        .ok_or(SnippetError::Cancelled)?;

    match available[index] {
        SnippetAction::Insert => insert(manager, &snippet.id, None, None, &[]),
        SnippetAction::Run => run(manager, &snippet.id, &[]),
        SnippetAction::Edit => edit_snippet(manager, &snippet.id, EditArgs::default()),
        SnippetAction::ChangeType => change_type(manager, &snippet.id, None),
        SnippetAction::Delete => delete_snippet(manager, &snippet.id, false),
    }
}

fn write_or_print(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write export to {}", path.display())),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

pub fn export(manager: &SnippetManager, group: Option<&str>, output: Option<&Path>) -> Result<()> {
    let json = match group {
        Some(group) => manager.export_group(group)?,
        None => manager.export_as_json()?,
    };
    write_or_print(&json, output)?;

    if let Some(path) = output {
        println!(
            "{}  Exported {} snippets to {}",
            margin(),
            match group {
                Some(g) => manager.data().snippet_count(g),
                None => manager.list_all().len(),
            },
            path.display()
        );
    }
    Ok(())
}

pub fn import(
    manager: &mut SnippetManager,
    path: &Path,
    mode: Option<ImportMode>,
    policy: MergePolicy,
    take_backup: bool,
) -> Result<()> {
    let imported = export::import_database(path)
        .with_context(|| format!("Failed to import snippets from {}", path.display()))?;

    let mode = match mode {
        Some(mode) => mode,
        None => {
            let modes = [ImportMode::Merge, ImportMode::Replace, ImportMode::ReplaceSnippets];
            let labels = vec![
                "Merge - add to the existing snippets".to_string(),
                "Replace - swap in the whole file".to_string(),
                "Replace snippets - keep groups, swap the snippet list".to_string(),
            ];
            let index = TerminalPrompter::new()
                .pick("Import mode", &labels)?
                .ok_or(SnippetError::Cancelled)?;
            modes[index]
        }
    };

    if take_backup && mode != ImportMode::Merge {
        let backup = manager.backup()?;
        println!("{}  Backup written to {}", margin(), backup.display());
    }

    let count = imported.snippets.len();
    match mode {
        ImportMode::Merge => {
            let report = manager.import_snippets(imported.snippets, policy)?;
            println!(
                "{}  Imported {} snippets (merged): {} added, {} overwritten, {} skipped",
                margin(),
                count,
                report.added.to_string().bright_green(),
                report.overwritten.to_string().bright_yellow(),
                report.skipped.to_string().bright_black()
            );
            if !report.groups_added.is_empty() {
                println!(
                    "{}  New groups: {}",
                    margin(),
                    report.groups_added.join(", ").bright_blue()
                );
            }
        }
        ImportMode::Replace => {
            manager.replace_document(imported)?;
            println!("{}  Imported {} snippets (replaced everything)", margin(), count);
        }
        ImportMode::ReplaceSnippets => {
            manager.replace_snippets(imported.snippets)?;
            println!("{}  Imported {} snippets (replaced)", margin(), count);
        }
    }
    Ok(())
}

pub fn storage(
    manager: &mut SnippetManager,
    action: StorageCommand,
    settings: &mut Settings,
) -> Result<()> {
    match action {
        StorageCommand::Path => {
            println!("{}", manager.data_file_path().display());
        }
        StorageCommand::Set { dir } => {
            manager.set_storage_path(&dir)?;
            settings.storage_dir = Some(manager.storage_dir().to_path_buf());
            settings.save()?;

            let data = manager.data();
            println!(
                "{}  Snippets storage set to: {} ({} snippets in {} groups)",
                margin(),
                manager.storage_dir().display().to_string().bright_white(),
                data.snippets.len(),
                data.groups.len()
            );
        }
        StorageCommand::Open => {
            manager.open_storage(settings.editor.as_deref())?;
        }
    }
    Ok(())
}

pub fn backup(manager: &SnippetManager) -> Result<()> {
    let path = manager.backup()?;
    println!("{}  Backup written to {}", margin(), path.display());
    Ok(())
}

pub fn icons(action: &IconCommand) -> Result<()> {
    match action {
        IconCommand::List {
            category,
            search,
            weight,
        } => {
            if let Some(category) = category {
                if !icons::categories().iter().any(|c| c.name == category.as_str()) {
                    let names: Vec<&str> = icons::categories().iter().map(|c| c.name).collect();
                    bail!("Unknown category '{}'. Categories: {}", category, names.join(", "));
                }
            }

            let view = icons::gallery(&GalleryFilter {
                category: category.clone(),
                search: search.clone(),
                weight: *weight,
            });
            for item in &view.items {
                println!(
                    "{}  {:<40} {:<36} {}",
                    margin(),
                    item.identifier.bright_white(),
                    item.css_class,
                    item.category.bright_black()
                );
            }
            println!("{}  {}", margin(), view.stats().bright_green());
        }
        IconCommand::Categories { search } => {
            let categories = icons::tree(search.as_deref().unwrap_or(""));
            for category in &categories {
                println!(
                    "{}  {} {}",
                    margin(),
                    category.name.bold(),
                    format!("({})", category.icons.len()).bright_black()
                );
                if search.is_some() {
                    for icon in &category.icons {
                        println!("{}     {}", margin(), icons::identifier(icon, Default::default()));
                    }
                }
            }
        }
        IconCommand::Copy { name, weight } => {
            if icons::category_of(name).is_none() {
                return Err(anyhow!("Unknown icon '{}'", name));
            }
            println!("{}", icons::identifier(name, *weight));
        }
    }
    Ok(())
}

pub fn fold(file: &Path, rule: FoldRule) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let lines = folding::fold_lines(&text, rule);

    if lines.is_empty() {
        eprintln!("{}  No lines match fold rule {}", margin(), rule);
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageConfig;
    use tempfile::TempDir;

    fn manager(tmp: &TempDir) -> SnippetManager {
        let mut manager = SnippetManager::open(&StorageConfig::new(tmp.path())).unwrap();
        manager
            .add_snippet("General", "Hello", "println!(\"hi\");", SnippetType::Code)
            .unwrap();
        manager
    }

    #[test]
    fn test_lookup_reports_not_found() {
        let tmp = TempDir::new().unwrap();
        let manager = manager(&tmp);

        assert_eq!(lookup(&manager, "hello").unwrap().title, "Hello");

        let err = lookup(&manager, "missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnippetError>(),
            Some(SnippetError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_needs_id_or_exact_title() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);

        let err = delete_snippet(&mut manager, "Hel", true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnippetError>(),
            Some(SnippetError::NotFound(_))
        ));
        assert!(manager.find_by_title("Hello").is_some());

        delete_snippet(&mut manager, "Hello", true).unwrap();
        assert!(manager.list_all().is_empty());
    }

    #[test]
    fn test_change_type_refuses_case_insensitive_match() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);

        assert!(change_type(&mut manager, "hello", Some(SnippetType::Terminal)).is_err());
        assert_eq!(manager.list_all()[0].snippet_type, SnippetType::Code);
    }

    #[test]
    fn test_group_delete_checks_group_before_confirming() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);

        let err = group(
            &mut manager,
            GroupCommand::Delete {
                name: "Nope".to_string(),
                yes: false,
            },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SnippetError>(),
            Some(SnippetError::NotFound(_))
        ));
        assert!(manager.data().has_group("General"));
    }

    #[test]
    fn test_import_merge_and_replace_modes() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);
        let file = tmp.path().join("incoming.json");
        fs::write(
            &file,
            r#"{"groups":["Ops"],"snippets":[{"id":"x1","title":"up","content":"docker compose up","type":"terminal","group":"Ops"}]}"#,
        )
        .unwrap();

        import(&mut manager, &file, Some(ImportMode::Merge), MergePolicy::Skip, true).unwrap();
        assert_eq!(manager.list_all().len(), 2);
        assert!(manager.data().has_group("Ops"));

        import(&mut manager, &file, Some(ImportMode::ReplaceSnippets), MergePolicy::Skip, true)
            .unwrap();
        assert_eq!(manager.list_all().len(), 1);
        assert!(manager.data().has_group("General"));
        assert!(tmp.path().join("backups").is_dir());

        import(&mut manager, &file, Some(ImportMode::Replace), MergePolicy::Skip, false).unwrap();
        assert_eq!(manager.data().groups, vec!["Ops"]);
    }

    #[test]
    fn test_import_of_bad_file_keeps_data() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);
        let before = manager.data().clone();
        let file = tmp.path().join("broken.json");
        fs::write(&file, "{nope").unwrap();

        assert!(import(&mut manager, &file, Some(ImportMode::Replace), MergePolicy::Skip, true).is_err());
        assert_eq!(manager.data(), &before);
    }

    #[test]
    fn test_export_group_to_file() {
        let tmp = TempDir::new().unwrap();
        let manager = manager(&tmp);
        let out = tmp.path().join("general.json");

        export(&manager, Some("General"), Some(&out)).unwrap();

        let exported = export::import_database(&out).unwrap();
        assert_eq!(exported.groups, vec!["General"]);
        assert_eq!(exported.snippets.len(), 1);
    }

    #[test]
    fn test_insert_rejects_terminal_snippet() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);
        manager
            .add_snippet("General", "List", "ls", SnippetType::Terminal)
            .unwrap();

        let err = insert(&manager, "List", None, None, &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SnippetError>(),
            Some(SnippetError::Validation(_))
        ));
    }

    #[test]
    fn test_insert_into_file_with_preset_values() {
        let tmp = TempDir::new().unwrap();
        let mut manager = manager(&tmp);
        manager
            .add_snippet("General", "Greeting", "hello {$who}", SnippetType::Code)
            .unwrap();
        let target = tmp.path().join("out.txt");

        insert(
            &manager,
            "Greeting",
            Some(target.clone()),
            None,
            &["who=world".to_string()],
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "hello world\n");
    }
}
