//! CLI Module for snipvault
//! Argument definitions and dispatch. Each subcommand maps onto one
//! `SnippetManager` operation, with prompts filling in whatever the
//! arguments leave out.

pub mod commands;
pub mod tree;

use crate::config::Settings;
use crate::folding::FoldRule;
use crate::icons::IconWeight;
use crate::manager::SnippetManager;
use crate::models::{Document, SnippetType};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "snipvault",
    version,
    about = "Grouped code and terminal snippets with {$placeholder} prompts"
)]
pub struct Cli {
    /// Use this folder for snippets.json instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    pub storage: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List groups and their snippets as a tree
    #[command(alias = "ls")]
    List {
        /// Only this group
        group: Option<String>,
        /// Only snippets of this type
        #[arg(long = "type", value_name = "TYPE")]
        snippet_type: Option<SnippetType>,
    },
    /// List group names with snippet counts
    Groups,
    /// Create, delete or export a group
    Group {
        #[command(subcommand)]
        action: GroupCommand,
    },
    /// Save a new snippet. Content comes from the argument, --file, or stdin.
    #[command(alias = "new")]
    Add {
        content: Option<String>,
        #[arg(short, long)]
        group: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(long = "type", value_name = "TYPE", default_value = "code")]
        snippet_type: SnippetType,
        /// Read content from a file
        #[arg(long, conflicts_with = "content")]
        file: Option<PathBuf>,
    },
    /// Change a snippet. Without flags, prompts for the new values.
    Edit {
        /// Snippet id or title
        snippet: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, conflicts_with = "content")]
        content_file: Option<PathBuf>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long = "type", value_name = "TYPE")]
        snippet_type: Option<SnippetType>,
    },
    /// Switch a snippet between code and terminal
    #[command(name = "change-type")]
    ChangeType {
        snippet: String,
        /// New type; picked interactively when omitted
        #[arg(value_name = "TYPE")]
        snippet_type: Option<SnippetType>,
    },
    /// Delete a snippet
    #[command(alias = "rm")]
    Delete {
        snippet: String,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Display a snippet
    #[command(aliases = ["view", "cat"])]
    Show { snippet: String },
    /// Search titles, content and group names
    #[command(alias = "find")]
    Search { query: String },
    /// Resolve a code snippet's placeholders and insert it
    Insert {
        snippet: String,
        /// Insert into this file instead of printing
        #[arg(long)]
        file: Option<PathBuf>,
        /// 1-based line to insert before; appends when omitted
        #[arg(long, requires = "file")]
        line: Option<usize>,
        /// Preset placeholder value, NAME=VALUE (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Resolve a terminal snippet's placeholders and run it
    Run {
        snippet: String,
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    /// Pick a snippet and an action for it
    Actions {
        /// Snippet id or title; picked interactively when omitted
        snippet: Option<String>,
    },
    /// Export every snippet, or one group
    Export {
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Import snippets from a JSON or YAML export
    Import {
        path: PathBuf,
        /// How to apply the file; asked interactively when omitted
        #[arg(long, value_enum)]
        mode: Option<ImportMode>,
        /// On merge, replace snippets whose id already exists
        #[arg(long)]
        overwrite: bool,
        /// Skip the automatic backup before replacing
        #[arg(long)]
        no_backup: bool,
    },
    /// Show, change or open the storage location
    Storage {
        #[command(subcommand)]
        action: StorageCommand,
    },
    /// Copy the data file into the backups folder
    Backup,
    /// Browse Phosphor icon names
    Icons {
        #[command(subcommand)]
        action: IconCommand,
    },
    /// Print the zero-based lines a fold rule selects in a file
    Fold {
        file: PathBuf,
        /// classes, functions, others, or level1..level5
        rule: FoldRule,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    Add { name: String },
    /// Delete a group and every snippet in it
    Delete {
        name: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Export one group as `{groups: [name], snippets}`
    Export {
        name: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// Print the data file path
    Path,
    /// Move to another folder, loading or creating snippets.json there
    Set { dir: PathBuf },
    /// Open the data file in an editor
    Open,
}

#[derive(Subcommand, Debug)]
pub enum IconCommand {
    /// Gallery listing with optional filters
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long, default_value = "regular")]
        weight: IconWeight,
    },
    /// Category tree, narrowed by a search term
    Categories {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print the identifier for an icon
    Copy {
        name: String,
        #[arg(short, long, default_value = "regular")]
        weight: IconWeight,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportMode {
    /// Add imported snippets to the current ones
    Merge,
    /// Replace the whole document
    Replace,
    /// Replace the snippet list, keep groups
    ReplaceSnippets,
}

/// Executes the parsed command against the store chosen by `settings`
pub fn execute_cli(cli: Cli, mut settings: Settings) -> Result<()> {
    let Some(command) = cli.command else {
        let manager = open_manager(&settings, cli.storage.as_deref())?;
        return tree::display_tree(manager.data(), None, None);
    };

    // Commands that never touch the snippet store
    match &command {
        Commands::Icons { action } => return commands::icons(action),
        Commands::Fold { file, rule } => return commands::fold(file, *rule),
        _ => {}
    }

    let mut manager = open_manager(&settings, cli.storage.as_deref())?;

    match command {
        Commands::List {
            group,
            snippet_type,
        } => {
            tree::display_tree(manager.data(), group.as_deref(), snippet_type)?;
            if group.is_none() && snippet_type.is_none() {
                tree::print_type_summary(&manager);
            }
        }
        Commands::Groups => tree::list_all_groups(manager.data()),
        Commands::Group { action } => commands::group(&mut manager, action)?,
        Commands::Add {
            content,
            group,
            title,
            snippet_type,
            file,
        } => commands::add_snippet(&mut manager, content, file, group, title, snippet_type)?,
        Commands::Edit {
            snippet,
            title,
            content,
            content_file,
            group,
            snippet_type,
        } => commands::edit_snippet(
            &mut manager,
            &snippet,
            commands::EditArgs {
                title,
                content,
                content_file,
                group,
                snippet_type,
            },
        )?,
        Commands::ChangeType {
            snippet,
            snippet_type,
        } => commands::change_type(&mut manager, &snippet, snippet_type)?,
        Commands::Delete { snippet, yes } => commands::delete_snippet(&mut manager, &snippet, yes)?,
        Commands::Show { snippet } => commands::show_snippet(&manager, &snippet)?,
        Commands::Search { query } => commands::search_snippets(&manager, &query),
        Commands::Insert {
            snippet,
            file,
            line,
            vars,
        } => commands::insert(&manager, &snippet, file, line, &vars)?,
        Commands::Run { snippet, vars } => commands::run(&manager, &snippet, &vars)?,
        Commands::Actions { snippet } => commands::actions(&mut manager, snippet.as_deref())?,
        Commands::Export { output, group } => {
            commands::export(&manager, group.as_deref(), output.as_deref())?
        }
        Commands::Import {
            path,
            mode,
            overwrite,
            no_backup,
        } => {
            let policy = if overwrite {
                crate::models::MergePolicy::Overwrite
            } else {
                settings.merge_policy
            };
            commands::import(&mut manager, &path, mode, policy, !no_backup)?
        }
        Commands::Storage { action } => {
            commands::storage(&mut manager, action, &mut settings)?
        }
        Commands::Backup => commands::backup(&manager)?,
        Commands::Icons { .. } | Commands::Fold { .. } => {}
    }

    Ok(())
}

fn open_manager(settings: &Settings, storage: Option<&Path>) -> Result<SnippetManager> {
    let config = settings.storage(storage);
    let mut manager = SnippetManager::open(&config)
        .with_context(|| format!("Failed to open snippet store in {}", config.dir.display()))?;
    manager.subscribe(Box::new(|document: &Document| {
        debug!(
            groups = document.groups.len(),
            snippets = document.snippets.len(),
            "Snippet store refreshed"
        );
    }));
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_insert_with_vars() {
        let cli = Cli::try_parse_from([
            "snipvault", "insert", "greet", "--file", "out.rs", "--line", "3", "--var", "name=Ada",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Insert {
                snippet,
                file,
                line,
                vars,
            }) => {
                assert_eq!(snippet, "greet");
                assert_eq!(file, Some(PathBuf::from("out.rs")));
                assert_eq!(line, Some(3));
                assert_eq!(vars, vec!["name=Ada"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_line_requires_file() {
        assert!(Cli::try_parse_from(["snipvault", "insert", "greet", "--line", "3"]).is_err());
    }

    #[test]
    fn test_parse_types_and_rules() {
        let cli =
            Cli::try_parse_from(["snipvault", "add", "ls -la", "--type", "terminal"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add {
                snippet_type: SnippetType::Terminal,
                ..
            })
        ));

        let cli = Cli::try_parse_from(["snipvault", "fold", "a.php", "level2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Fold {
                rule: FoldRule::Level(2),
                ..
            })
        ));

        assert!(Cli::try_parse_from(["snipvault", "fold", "a.php", "level9"]).is_err());
    }

    #[test]
    fn test_global_storage_flag() {
        let cli = Cli::try_parse_from(["snipvault", "groups", "--storage", "/tmp/x", "-vv"]).unwrap();
        assert_eq!(cli.storage, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_import_mode_values() {
        let cli = Cli::try_parse_from([
            "snipvault", "import", "in.json", "--mode", "replace-snippets",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Import {
                mode: Some(ImportMode::ReplaceSnippets),
                ..
            })
        ));
    }
}
