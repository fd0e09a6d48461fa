//! Interactive collaborators used by the core: text prompts, confirmations
//! and pickers. The terminal implementation is built on dialoguer.
//!
//! Every method returns `Ok(None)` when the user abandons the prompt and
//! `Err` when the terminal itself fails (no TTY, closed input).

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::collections::HashMap;
use std::io::ErrorKind;
use tracing::debug;

use crate::error::{Result, SnippetError};

/// Validation hook passed along with a prompt; `Err` carries the message shown
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

pub trait Prompter {
    /// Ask for a value. `key` identifies what is being asked (a placeholder
    /// name, "title", ...), `label` is what the user sees.
    fn prompt(&mut self, key: &str, label: &str, validate: Validator<'_>) -> Result<Option<String>>;

    fn confirm(&mut self, message: &str) -> Result<Option<bool>>;

    /// Index into `items` of the chosen entry
    fn pick(&mut self, label: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Rejects empty and whitespace-only input
pub fn non_blank(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err("Value cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// An interrupted read is the user backing out; anything else is a failure
fn abandoned_or_failed<T>(key: &str, err: dialoguer::Error) -> Result<Option<T>> {
    let interrupted = matches!(
        &err,
        dialoguer::Error::IO(source) if source.kind() == ErrorKind::Interrupted
    );
    if interrupted {
        debug!(key = %key, "Prompt abandoned");
        return Ok(None);
    }
    debug!(key = %key, error = %err, "Prompt failed");
    Err(SnippetError::from(err))
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, key: &str, label: &str, validate: Validator<'_>) -> Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text();

        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => abandoned_or_failed(key, e),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .or_else(|e| abandoned_or_failed("confirm", e))
    }

    fn pick(&mut self, label: &str, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }

        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .or_else(|e| abandoned_or_failed(label, e))
    }
}

/// Answers prompts from preset values (e.g. `--var name=value`) and hands
/// anything else to another prompter. Preset values still go through the
/// validator; a rejected preset falls through to the inner prompter.
pub struct PresetPrompter<P> {
    values: HashMap<String, String>,
    inner: P,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(values: HashMap<String, String>, inner: P) -> Self {
        Self { values, inner }
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn prompt(&mut self, key: &str, label: &str, validate: Validator<'_>) -> Result<Option<String>> {
        if let Some(value) = self.values.get(key) {
            match validate(value.as_str()) {
                Ok(()) => return Ok(Some(value.clone())),
                Err(reason) => debug!(key = %key, reason = %reason, "Preset value rejected"),
            }
        }
        self.inner.prompt(key, label, validate)
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        self.inner.confirm(message)
    }

    fn pick(&mut self, label: &str, items: &[String]) -> Result<Option<usize>> {
        self.inner.pick(label, items)
    }
}

/// Parses `name=value` pairs; the value may itself contain `=`
pub fn parse_assignments(pairs: &[String]) -> std::result::Result<HashMap<String, String>, String> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.to_string()))
            }
            _ => Err(format!("expected NAME=VALUE, got '{}'", pair)),
        })
        .collect()
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records what was asked
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub answers: VecDeque<Option<String>>,
        pub confirms: VecDeque<Option<bool>>,
        pub picks: VecDeque<Option<usize>>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn with_answers<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = Option<S>>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn prompt(
            &mut self,
            key: &str,
            _label: &str,
            validate: Validator<'_>,
        ) -> Result<Option<String>> {
            self.asked.push(key.to_string());
            // Invalid answers are skipped the way a re-prompt would
            while let Some(answer) = self.answers.pop_front() {
                match answer {
                    Some(value) if validate(value.as_str()).is_ok() => return Ok(Some(value)),
                    Some(_) => continue,
                    None => return Ok(None),
                }
            }
            Ok(None)
        }

        fn confirm(&mut self, _message: &str) -> Result<Option<bool>> {
            Ok(self.confirms.pop_front().flatten())
        }

        fn pick(&mut self, _label: &str, items: &[String]) -> Result<Option<usize>> {
            Ok(self
                .picks
                .pop_front()
                .flatten()
                .filter(|index| *index < items.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompter;
    use super::*;

    #[test]
    fn test_non_blank() {
        assert!(non_blank("x").is_ok());
        assert!(non_blank("   ").is_err());
        assert!(non_blank("").is_err());
    }

    #[test]
    fn test_interrupted_prompt_is_an_abandon() {
        let err = dialoguer::Error::IO(std::io::Error::from(ErrorKind::Interrupted));
        assert!(matches!(abandoned_or_failed::<String>("name", err), Ok(None)));
    }

    #[test]
    fn test_missing_terminal_is_an_error_not_a_cancel() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            ErrorKind::NotConnected,
            "not a terminal",
        ));
        let result = abandoned_or_failed::<bool>("confirm", err);
        assert!(matches!(result, Err(SnippetError::Terminal(_))));
    }

    #[test]
    fn test_parse_assignments() {
        let parsed =
            parse_assignments(&["name=Ada".to_string(), "expr=a=b".to_string()]).unwrap();
        assert_eq!(parsed["name"], "Ada");
        assert_eq!(parsed["expr"], "a=b");

        assert!(parse_assignments(&["novalue".to_string()]).is_err());
        assert!(parse_assignments(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_preset_prompter_uses_presets_first() {
        let presets = HashMap::from([("name".to_string(), "Ada".to_string())]);
        let mut prompter = PresetPrompter::new(presets, ScriptedPrompter::with_answers([Some("typed")]));

        assert_eq!(prompter.prompt("name", "Name", &non_blank).unwrap(), Some("Ada".to_string()));
        assert_eq!(
            prompter.prompt("other", "Other", &non_blank).unwrap(),
            Some("typed".to_string())
        );
        assert_eq!(prompter.inner.asked, vec!["other"]);
    }

    #[test]
    fn test_preset_prompter_falls_through_on_invalid_preset() {
        let presets = HashMap::from([("name".to_string(), "  ".to_string())]);
        let mut prompter = PresetPrompter::new(presets, ScriptedPrompter::with_answers([Some("Bob")]));

        assert_eq!(prompter.prompt("name", "Name", &non_blank).unwrap(), Some("Bob".to_string()));
    }
}
