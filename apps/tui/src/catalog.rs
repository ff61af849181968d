use crate::domain::{SkillCategory, SkillEntry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown skill category: {0}")]
    UnknownCategory(String),

    #[error("skill label must not be empty")]
    EmptyLabel,

    #[error("score {score} for {label} is outside 0..=100")]
    ScoreOutOfRange { label: String, score: u16 },

    #[error("skill category {0} appears more than once")]
    DuplicateCategory(String),
}

/// Entry shape used by catalog files; field names follow the portfolio data.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    level: u16,
    #[serde(default)]
    icon: String,
}

impl RawEntry {
    fn into_entry(self) -> Result<SkillEntry, CatalogError> {
        let Ok(score) = u8::try_from(self.level) else {
            return Err(CatalogError::ScoreOutOfRange {
                label: self.name,
                score: self.level,
            });
        };
        SkillEntry::new(self.name, score, self.icon)
    }
}

/// Skill entries grouped by category, in display order.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    categories: BTreeMap<SkillCategory, Vec<SkillEntry>>,
}

const BUILTIN: [(SkillCategory, &[(&str, u8, &str)]); 3] = [
    (
        SkillCategory::Development,
        &[
            ("React.js", 90, "⚛️"),
            ("Next.js", 85, "▲"),
            ("JavaScript", 92, "🟨"),
            ("TypeScript", 85, "🔷"),
            ("HTML/CSS", 95, "🌐"),
            ("Tailwind CSS", 90, "🎐"),
            ("Node.js", 80, "🟢"),
            ("Express.js", 75, "🚂"),
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            ("Git/GitHub", 90, "🐙"),
            ("VS Code", 95, "📝"),
            ("Firebase", 85, "🔥"),
            ("MongoDB", 80, "🍃"),
            ("AWS", 70, "☁️"),
            ("Docker", 65, "🐳"),
            ("Postman", 85, "📮"),
            ("Vercel", 90, "▲"),
        ],
    ),
    (
        SkillCategory::Soft,
        &[
            ("Communication", 95, "🗣️"),
            ("Teamwork", 90, "👥"),
            ("Problem Solving", 92, "🧩"),
            ("Creativity", 95, "💡"),
            ("Time Management", 85, "⏰"),
            ("Adaptability", 90, "🔄"),
            ("Empathy", 95, "❤️"),
            ("Critical Thinking", 88, "🧠"),
        ],
    ),
];

impl SkillCatalog {
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(category, entries)| {
                let entries = entries
                    .iter()
                    .filter_map(|(label, score, glyph)| SkillEntry::new(*label, *score, *glyph).ok())
                    .collect();
                (*category, entries)
            })
            .collect();
        Self { categories }
    }

    /// Parses a catalog from a JSON object keyed by category id:
    ///
    /// ```json
    /// { "tools": [{ "name": "Docker", "level": 65, "icon": "🐳" }] }
    /// ```
    ///
    /// Categories missing from the document are present but empty.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<RawEntry>> = serde_json::from_str(json)?;

        let mut categories = BTreeMap::new();
        for (key, entries) in raw {
            let Some(category) = SkillCategory::parse(&key) else {
                return Err(CatalogError::UnknownCategory(key));
            };
            if categories.contains_key(&category) {
                return Err(CatalogError::DuplicateCategory(key));
            }
            let entries = entries
                .into_iter()
                .map(RawEntry::into_entry)
                .collect::<Result<Vec<_>, _>>()?;
            categories.insert(category, entries);
        }

        Ok(Self { categories })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn entries(&self, category: SkillCategory) -> &[SkillEntry] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    pub const fn categories(&self) -> [SkillCategory; 3] {
        SkillCategory::ALL
    }

    pub fn total_entries(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn average_score(&self, category: SkillCategory) -> Option<f64> {
        let entries = self.entries(category);
        if entries.is_empty() {
            return None;
        }
        let total: u32 = entries.iter().map(|entry| u32::from(entry.score())).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = entries.len() as f64;
        Some(f64::from(total) / count)
    }
}
