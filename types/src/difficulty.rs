//! Encounter difficulty labels and their CSS classes.
//!
//! The server renders difficulty either in English or Italian; both map to the
//! same class so the page styles stay in one place.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    /// Parse a rendered label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" | "facile" => Some(Self::Easy),
            "medium" | "medio" => Some(Self::Medium),
            "hard" | "difficile" => Some(Self::Hard),
            "deadly" | "letale" => Some(Self::Deadly),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Easy => "difficulty-easy",
            Self::Medium => "difficulty-medium",
            Self::Hard => "difficulty-hard",
            Self::Deadly => "difficulty-deadly",
        }
    }

    /// CSS class for a label, or `""` when the label is unknown.
    pub fn class_for_label(label: &str) -> &'static str {
        Self::from_label(label).map_or("", |d| d.css_class())
    }
}
