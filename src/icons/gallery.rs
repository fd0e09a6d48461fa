use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

use super::catalog::ICON_NAMES;

pub const OTHER_CATEGORY: &str = "Other";

/// Category name and the substrings that put an icon in it. Order matters:
/// an icon reports the first category it falls in.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Animals & Nature",
        &[
            "bird", "fish", "dog", "cat", "tree", "leaf", "flower", "sun", "moon", "star", "cloud",
            "rain", "snow", "wind", "fire", "water",
        ],
    ),
    (
        "Arrows & Navigation",
        &["arrow", "chevron", "caret", "angle", "corner", "move", "direction"],
    ),
    (
        "Communication",
        &[
            "chat", "message", "mail", "email", "phone", "call", "video", "microphone", "speaker",
            "volume", "notification", "bell",
        ],
    ),
    (
        "Design & Tools",
        &[
            "paint", "brush", "palette", "color", "scissors", "crop", "resize", "zoom",
            "magnifying", "search", "filter", "eye", "cursor", "pointer", "hand", "fingerprint",
        ],
    ),
    (
        "Devices & Hardware",
        &[
            "computer", "laptop", "tablet", "phone", "mobile", "monitor", "keyboard", "mouse",
            "printer", "camera", "headphone", "battery", "wifi", "bluetooth", "usb", "chip", "cpu",
            "memory", "hard-drive", "server",
        ],
    ),
    (
        "Files & Folders",
        &[
            "file", "folder", "document", "paper", "archive", "zip", "download", "upload", "share",
            "link", "attachment", "clipboard",
        ],
    ),
    (
        "Interface & UI",
        &[
            "menu", "list", "grid", "layout", "sidebar", "window", "browser", "tab", "button",
            "switch", "toggle", "slider", "progress", "loading", "spinner", "check", "close",
            "plus", "minus", "settings", "gear", "cog", "wrench", "tool",
        ],
    ),
    (
        "Math & Finance",
        &[
            "calculator", "math", "plus", "minus", "multiply", "divide", "equals", "percent",
            "currency", "dollar", "euro", "bitcoin", "money", "bank", "credit", "wallet",
            "shopping", "cart", "bag", "store",
        ],
    ),
    (
        "Media & Entertainment",
        &[
            "play", "pause", "stop", "skip", "rewind", "fast", "forward", "repeat", "shuffle",
            "music", "audio", "video", "film", "camera", "image", "photo", "picture", "gallery",
            "youtube", "spotify",
        ],
    ),
    (
        "Security & Safety",
        &[
            "lock", "unlock", "key", "shield", "security", "safe", "warning", "alert", "error",
            "danger", "caution", "info", "help", "question", "exclamation",
        ],
    ),
    (
        "Social & People",
        &[
            "user", "person", "people", "group", "team", "friend", "profile", "avatar", "face",
            "smile", "heart", "like", "star", "favorite", "bookmark", "flag",
        ],
    ),
    (
        "Time & Calendar",
        &[
            "clock", "time", "hour", "minute", "second", "watch", "timer", "alarm", "calendar",
            "date", "schedule", "event", "birthday", "holiday",
        ],
    ),
    (
        "Transportation",
        &[
            "car", "truck", "bus", "train", "plane", "ship", "boat", "bicycle", "motorcycle",
            "taxi", "parking", "gas", "fuel", "road", "map", "location", "navigation", "compass",
            "gps",
        ],
    ),
    (
        "Weather & Environment",
        &[
            "weather", "temperature", "thermometer", "sun", "moon", "cloud", "rain", "snow",
            "wind", "storm", "lightning", "umbrella", "sunrise", "sunset", "day", "night", "earth",
            "globe", "world", "nature", "mountain", "river", "ocean", "forest",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCategory {
    pub name: &'static str,
    pub icons: Vec<&'static str>,
}

static CATEGORIES: Lazy<Vec<IconCategory>> = Lazy::new(|| {
    let mut categories: Vec<IconCategory> = CATEGORY_KEYWORDS
        .iter()
        .map(|&(name, keywords)| IconCategory {
            name,
            icons: ICON_NAMES
                .iter()
                .copied()
                .filter(|icon| keywords.iter().any(|k| icon.contains(k)))
                .collect(),
        })
        .collect();

    let other = ICON_NAMES
        .iter()
        .copied()
        .filter(|icon| !categories.iter().any(|c| c.icons.contains(icon)))
        .collect();
    categories.push(IconCategory {
        name: OTHER_CATEGORY,
        icons: other,
    });
    categories
});

/// All categories in display order, `Other` last
pub fn categories() -> &'static [IconCategory] {
    &CATEGORIES
}

/// First category listing `icon`
pub fn category_of(icon: &str) -> Option<&'static str> {
    categories()
        .iter()
        .find(|c| c.icons.iter().any(|i| *i == icon))
        .map(|c| c.name)
}

/// Category tree narrowed by `search`. A category stays when its name or any
/// of its icons match; only matching icons are listed under it.
pub fn tree(search: &str) -> Vec<IconCategory> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return categories().to_vec();
    }

    categories()
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.icons.iter().any(|i| i.to_lowercase().contains(&needle))
        })
        .map(|c| IconCategory {
            name: c.name,
            icons: c
                .icons
                .iter()
                .copied()
                .filter(|i| i.to_lowercase().contains(&needle))
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconWeight {
    #[default]
    Regular,
    Fill,
    Light,
    Thin,
    Bold,
    Duotone,
}

impl IconWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconWeight::Regular => "regular",
            IconWeight::Fill => "fill",
            IconWeight::Light => "light",
            IconWeight::Thin => "thin",
            IconWeight::Bold => "bold",
            IconWeight::Duotone => "duotone",
        }
    }

    pub fn all() -> [IconWeight; 6] {
        [
            IconWeight::Regular,
            IconWeight::Fill,
            IconWeight::Light,
            IconWeight::Thin,
            IconWeight::Bold,
            IconWeight::Duotone,
        ]
    }
}

impl fmt::Display for IconWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        IconWeight::all()
            .into_iter()
            .find(|w| w.as_str() == lower)
            .ok_or_else(|| {
                format!(
                    "unknown icon weight '{}' (expected one of: {})",
                    s,
                    IconWeight::all().map(|w| w.as_str()).join(", ")
                )
            })
    }
}

/// Text copied for an icon, e.g. `phosphor-gear` or `phosphor-gear-bold`
pub fn identifier(name: &str, weight: IconWeight) -> String {
    match weight {
        IconWeight::Regular => format!("phosphor-{}", name),
        other => format!("phosphor-{}-{}", name, other),
    }
}

/// Web font class list for an icon
pub fn css_class(name: &str, weight: IconWeight) -> String {
    match weight {
        IconWeight::Regular => format!("ph ph-{}", name),
        other => format!("ph-{} ph-{}", other, name),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub weight: IconWeight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub identifier: String,
    pub css_class: String,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub items: Vec<GalleryItem>,
    pub total: usize,
}

impl GalleryView {
    pub fn stats(&self) -> String {
        format!("Showing {} of {} icons", self.items.len(), self.total)
    }
}

/// Every catalog icon matching the filter. The search term is checked
/// against the weighted identifier, as that is the text users see.
pub fn gallery(filter: &GalleryFilter) -> GalleryView {
    let needle = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    let items = ICON_NAMES
        .iter()
        .copied()
        .filter_map(|name| {
            let category = category_of(name).unwrap_or(OTHER_CATEGORY);
            if let Some(wanted) = &filter.category {
                if category != wanted.as_str() {
                    return None;
                }
            }

            let identifier = identifier(name, filter.weight);
            if !needle.is_empty() && !identifier.to_lowercase().contains(&needle) {
                return None;
            }

            Some(GalleryItem {
                css_class: css_class(name, filter.weight),
                identifier,
                category,
            })
        })
        .collect();

    GalleryView {
        items,
        total: ICON_NAMES.len(),
    }
}
