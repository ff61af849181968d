use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Development,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Development, Self::Tools, Self::Soft];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Tools => "tools",
            Self::Soft => "soft",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Development),
            1 => Some(Self::Tools),
            2 => Some(Self::Soft),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Development => 0,
            Self::Tools => 1,
            Self::Soft => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" => Some(Self::Development),
            "tools" => Some(Self::Tools),
            "soft" => Some(Self::Soft),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Tools => "Tools",
            Self::Soft => "Soft Skills",
        }
    }
}

/// Color scheme preference, persisted under the `theme` settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A single labelled score in a category.
///
/// Built through [`SkillEntry::new`], which rejects empty labels and
/// scores above 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    label: String,
    score: u8,
    glyph: String,
}

impl SkillEntry {
    pub fn new(
        label: impl Into<String>,
        score: u8,
        glyph: impl Into<String>,
    ) -> Result<Self, crate::catalog::CatalogError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(crate::catalog::CatalogError::EmptyLabel);
        }
        if score > 100 {
            return Err(crate::catalog::CatalogError::ScoreOutOfRange {
                label,
                score: u16::from(score),
            });
        }
        Ok(Self {
            label,
            score,
            glyph: glyph.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn score(&self) -> u8 {
        self.score
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_index_round_trips_through_tab_order() {
        for (index, category) in SkillCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), index);
            assert_eq!(SkillCategory::from_index(index), Some(*category));
        }
        assert_eq!(SkillCategory::from_index(3), None);
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(SkillCategory::parse(" Tools "), Some(SkillCategory::Tools));
        assert_eq!(SkillCategory::parse("SOFT"), Some(SkillCategory::Soft));
        assert_eq!(SkillCategory::parse("design"), None);
    }

    #[test]
    fn theme_defaults_to_dark_and_toggles() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn entry_rejects_empty_label_and_large_score() {
        assert!(SkillEntry::new("  ", 50, "x").is_err());
        assert!(SkillEntry::new("Rust", 101, "x").is_err());

        let entry = SkillEntry::new("Rust", 100, "🦀").expect("valid entry");
        assert_eq!(entry.label(), "Rust");
        assert_eq!(entry.score(), 100);
        assert_eq!(entry.glyph(), "🦀");
    }
}
