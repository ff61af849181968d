use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use ratatui::style::Color;
use skill_radar::radar::{RadarPalette, Rgb};
use skill_radar::settings::{save_theme, SettingsStore};
use skill_radar::{SkillCatalog, SkillCategory, SkillEntry, Theme};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;

/// How long the loading screen stays up before the skills view appears.
pub const LOADING_DURATION: Duration = Duration::from_secs(2);

const CATEGORY_FADE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Loading,
    Skills,
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub catalog: SkillCatalog,
    pub category: SkillCategory,
    pub selected_card: usize,
    pub theme: Theme,
    pub primary_override: Option<Rgb>,
    pub status_message: String,
    pub show_help: bool,
    pub settings: Box<dyn SettingsStore>,
    pub started: Instant,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub throbber_state: ThrobberState,
    pub category_fx: Mutex<Option<Effect>>,
}

impl App {
    pub fn new(
        catalog: SkillCatalog,
        settings: Box<dyn SettingsStore>,
        theme: Theme,
        category: SkillCategory,
    ) -> Self {
        let now = Instant::now();
        Self {
            running: true,
            screen: AppScreen::Loading,
            catalog,
            category,
            selected_card: 0,
            theme,
            primary_override: None,
            status_message: String::new(),
            show_help: false,
            settings,
            started: now,
            last_frame: now,
            last_tick: Duration::ZERO,
            throbber_state: ThrobberState::default(),
            category_fx: Mutex::new(None),
        }
    }

    pub fn palette(&self) -> RadarPalette {
        RadarPalette::for_theme(self.theme, self.primary_override)
    }

    pub fn entries(&self) -> &[SkillEntry] {
        self.catalog.entries(self.category)
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;

        match self.screen {
            AppScreen::Loading => {
                self.throbber_state.calc_next();
                if now.duration_since(self.started) >= LOADING_DURATION {
                    self.finish_loading();
                }
            }
            AppScreen::Skills => {
                if let Ok(mut effect) = self.category_fx.lock() {
                    if effect.as_ref().is_some_and(Effect::done) {
                        *effect = None;
                    }
                }
            }
        }
    }

    pub fn finish_loading(&mut self) {
        if self.screen == AppScreen::Loading {
            self.screen = AppScreen::Skills;
            self.start_category_fx();
        }
    }

    pub fn select_category(&mut self, category: SkillCategory) {
        if category == self.category {
            return;
        }
        tracing::debug!(from = self.category.as_str(), to = category.as_str(), "switching category");
        self.category = category;
        self.selected_card = 0;
        self.start_category_fx();
    }

    pub fn next_category(&mut self) {
        let index = wrap_increment(self.category.index(), SkillCategory::ALL.len());
        if let Some(category) = SkillCategory::from_index(index) {
            self.select_category(category);
        }
    }

    pub fn prev_category(&mut self) {
        let index = wrap_decrement(self.category.index(), SkillCategory::ALL.len());
        if let Some(category) = SkillCategory::from_index(index) {
            self.select_category(category);
        }
    }

    pub fn next_card(&mut self) {
        self.selected_card = wrap_increment(self.selected_card, self.entries().len());
    }

    pub fn prev_card(&mut self) {
        self.selected_card = wrap_decrement(self.selected_card, self.entries().len());
    }

    /// Flips the theme and stores the new preference. A failed write keeps
    /// the new theme for this session and reports the error in the status.
    pub async fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        match save_theme(self.settings.as_ref(), self.theme).await {
            Ok(()) => {
                tracing::info!(theme = self.theme.as_str(), "theme saved");
                self.status_message = format!("Theme: {}", self.theme.as_str());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save theme");
                self.status_message = format!("Error: failed to save theme: {e}");
            }
        }
    }

    fn start_category_fx(&self) {
        let background = self.palette().background;
        let effect = fx::fade_from_fg(
            Color::Rgb(background.r, background.g, background.b),
            (CATEGORY_FADE_MS, Interpolation::QuadOut),
        );
        if let Ok(mut slot) = self.category_fx.lock() {
            *slot = Some(effect);
        }
    }
}
