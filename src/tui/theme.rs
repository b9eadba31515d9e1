//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::grading::Remark;

/// Terminal background luma above which the light palette is used
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }

    /// Ctrl+D flips between the two palettes
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Indicator shown in the title bar
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌞",
            Theme::Light => "🌓",
        }
    }
}

/// Pick the palette for the configured mode.
///
/// `Auto` asks the terminal for its background luminance; terminals that
/// don't answer get the dark palette. Must run before the TUI takes over
/// the terminal.
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => Theme::Light,
            _ => Theme::Dark,
        },
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,

    // Remark colors (best to worst)
    pub remark_top: Color,
    pub remark_mid: Color,
    pub remark_low: Color,

    // Score bar
    pub bar_empty: Color,

    // Form fields
    pub label_color: Color,
    pub field_style: Style,
    pub field_focus_style: Style,
    pub placeholder: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup / card borders
    pub border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            text: Color::White,
            remark_top: Color::Green,
            remark_mid: Color::Yellow,
            remark_low: Color::Red,
            bar_empty: Color::DarkGray,
            label_color: Color::Gray,
            field_style: Style::new().bg(Color::Indexed(236)),
            field_focus_style: Style::new().fg(Color::Black).bg(Color::Cyan).bold(),
            placeholder: Color::DarkGray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            tab_active_style: Style::new().fg(Color::Cyan).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            border: Color::Indexed(244),
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Indexed(255),
            text: Color::Black,
            remark_top: Color::Indexed(28),
            remark_mid: Color::Indexed(130),
            remark_low: Color::Indexed(124),
            bar_empty: Color::Indexed(250),
            label_color: Color::Indexed(240),
            field_style: Style::new().bg(Color::Indexed(253)),
            field_focus_style: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            placeholder: Color::Indexed(246),
            muted: Color::Indexed(243),
            title_color: Color::Blue,
            tab_active_style: Style::new().fg(Color::Blue).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::Indexed(246)),
            status_bar_bg: Color::Indexed(252),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            flash_error: Color::Indexed(124),
            border: Color::Indexed(247),
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Traffic-light color for a performance tier
    pub fn remark_color(&self, remark: Remark) -> Color {
        match remark {
            Remark::Outstanding | Remark::Excellent => self.remark_top,
            Remark::Good | Remark::Satisfactory => self.remark_mid,
            Remark::NeedsImprovement => self.remark_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve_theme(ThemeMode::Dark), Theme::Dark);
        assert_eq!(resolve_theme(ThemeMode::Light), Theme::Light);
    }

    #[test]
    fn test_remark_colors() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.remark_color(Remark::Outstanding), Color::Green);
        assert_eq!(colors.remark_color(Remark::Satisfactory), Color::Yellow);
        assert_eq!(colors.remark_color(Remark::NeedsImprovement), Color::Red);
    }
}
