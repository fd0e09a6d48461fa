//! Line selection for editor folding. Nothing here touches an editor; the
//! result is the list of zero-based lines a host would fold.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static CLASS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class\s+").expect("class pattern is valid"));
static FUNCTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(public\s+)?static\s+function\s+").expect("function pattern is valid")
});
static OTHER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(//|/\*|import|from)").expect("comment pattern is valid"));

/// Minimum indentation (in characters) for levels 1 to 5
const LEVEL_INDENTS: [usize; 5] = [4, 16, 20, 24, 36];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRule {
    Classes,
    Functions,
    /// Indentation level, 1 through 5
    Level(u8),
    /// Comments and import lines
    Others,
}

impl FoldRule {
    pub fn level(level: u8) -> Result<Self, String> {
        if (1..=5).contains(&level) {
            Ok(FoldRule::Level(level))
        } else {
            Err(format!("fold level must be between 1 and 5, got {}", level))
        }
    }

    fn min_indent(level: u8) -> usize {
        let index = usize::from(level.clamp(1, 5)) - 1;
        LEVEL_INDENTS[index]
    }
}

impl fmt::Display for FoldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldRule::Classes => f.write_str("classes"),
            FoldRule::Functions => f.write_str("functions"),
            FoldRule::Level(n) => write!(f, "level{}", n),
            FoldRule::Others => f.write_str("others"),
        }
    }
}

impl FromStr for FoldRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "classes" | "class" => Ok(FoldRule::Classes),
            "functions" | "function" => Ok(FoldRule::Functions),
            "others" | "other" | "comments" => Ok(FoldRule::Others),
            _ => {
                let digits = lower.strip_prefix("level").unwrap_or(&lower);
                match digits.parse::<u8>() {
                    Ok(level) => FoldRule::level(level),
                    Err(_) => Err(format!(
                        "unknown fold rule '{}' (expected classes, functions, others or level1-5)",
                        s
                    )),
                }
            }
        }
    }
}

/// Zero-based numbers of the lines `rule` selects
pub fn fold_lines(text: &str, rule: FoldRule) -> Vec<usize> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line_matches(line, rule))
        .map(|(i, _)| i)
        .collect()
}

fn line_matches(line: &str, rule: FoldRule) -> bool {
    match rule {
        FoldRule::Classes => CLASS_LINE.is_match(line.trim()),
        FoldRule::Functions => FUNCTION_LINE.is_match(line.trim()),
        FoldRule::Others => OTHER_LINE.is_match(line.trim()),
        FoldRule::Level(level) => {
            if line.trim().is_empty() {
                return false;
            }
            let indent = line.chars().take_while(|c| c.is_whitespace()).count();
            indent >= FoldRule::min_indent(level)
        }
    }
}
