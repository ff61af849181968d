use clap::Parser;
use skill_radar::{SkillCategory, Theme};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skill-radar", version, about = "Skills radar chart for the terminal")]
pub struct CliArgs {
    /// Print the radar summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON, including draw commands
    #[arg(long)]
    pub json: bool,

    /// Write the radar chart as an SVG file
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Category to show first (development, tools, soft)
    #[arg(long, value_name = "ID", value_parser = parse_category, default_value = "development")]
    pub category: SkillCategory,

    /// Surface width in pixels for headless output
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub width: u32,

    /// Surface height in pixels for headless output
    #[arg(long, value_name = "PX", default_value_t = 600)]
    pub height: u32,

    /// Theme for this run (light, dark); the saved preference is left alone
    #[arg(long, value_name = "ID", value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Load skills from a JSON catalog instead of the built-in data
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Override settings database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override the primary chart color, as "r,g,b"
    #[arg(long, value_name = "R,G,B")]
    pub primary: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(catalog) = &self.catalog {
            std::env::set_var("SKILLS_CATALOG", catalog);
        }
        if let Some(primary) = &self.primary {
            std::env::set_var("PRIMARY_RGB", primary);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Any output flag implies headless mode.
    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json || self.svg.is_some()
    }
}

fn parse_category(value: &str) -> Result<SkillCategory, String> {
    SkillCategory::parse(value)
        .ok_or_else(|| format!("unknown category {value:?}; expected development, tools or soft"))
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::parse(value).ok_or_else(|| format!("unknown theme {value:?}; expected light or dark"))
}
