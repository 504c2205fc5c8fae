// Theme system for the TUI
//
// Color themes that can be switched at runtime with `t`. Each theme defines
// colors for the shell, the tables, log levels and the four wear tiers.

use crate::stats::WearTier;
use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Trail,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Trail]
    }

    /// Parse a theme name from config, falling back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "trail" => ThemeKind::Trail,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Trail => "Trail",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Trail => Theme::trail(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub error: Color,

    // Table header row
    pub header: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,

    // Wear tiers
    pub wear_low: Color,
    pub wear_moderate: Color,
    pub wear_high: Color,
    pub wear_critical: Color,

    pub chart: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::Gray,
            border: Color::Gray,
            highlight: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,
            error: Color::Red,

            header: Color::Yellow,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,

            wear_low: Color::Green,
            wear_moderate: Color::Yellow,
            wear_high: Color::LightRed,
            wear_critical: Color::Red,

            chart: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            highlight: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            error: Color::Red,

            header: Color::Magenta,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::Gray,

            wear_low: Color::Green,
            wear_moderate: Color::Rgb(184, 134, 11),
            wear_high: Color::Rgb(205, 92, 0),
            wear_critical: Color::Red,

            chart: Color::Blue,
        }
    }

    /// Earthy greens and browns
    pub fn trail() -> Self {
        Self {
            bg: Color::Rgb(34, 40, 32),
            fg: Color::Rgb(230, 225, 205),
            muted: Color::Rgb(140, 135, 110),
            border: Color::Rgb(105, 95, 70),
            highlight: Color::Rgb(170, 200, 110),

            title: Color::Rgb(170, 200, 110),
            status_bar: Color::Rgb(200, 170, 100),
            error: Color::Rgb(220, 90, 70),

            header: Color::Rgb(200, 170, 100),

            log_error: Color::Rgb(220, 90, 70),
            log_warn: Color::Rgb(230, 190, 90),
            log_info: Color::Rgb(140, 180, 160),
            log_debug: Color::Rgb(105, 95, 70),

            wear_low: Color::Rgb(130, 190, 90),
            wear_moderate: Color::Rgb(230, 190, 90),
            wear_high: Color::Rgb(225, 135, 60),
            wear_critical: Color::Rgb(220, 90, 70),

            chart: Color::Rgb(170, 200, 110),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Color for a wear tier; `None` (no limit) renders muted
    pub fn tier_style(&self, tier: Option<WearTier>) -> Style {
        let color = match tier {
            Some(WearTier::Low) => self.wear_low,
            Some(WearTier::Moderate) => self.wear_moderate,
            Some(WearTier::High) => self.wear_high,
            Some(WearTier::Critical) => self.wear_critical,
            None => self.muted,
        };
        let style = Style::default().fg(color);
        if tier == Some(WearTier::Critical) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn log_style(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Error => Style::default()
                .fg(self.log_error)
                .add_modifier(Modifier::BOLD),
            LogLevel::Warn => Style::default().fg(self.log_warn),
            LogLevel::Info => Style::default().fg(self.log_info),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(self.log_debug),
        }
    }
}
