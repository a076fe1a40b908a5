use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_panel: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_sale: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub table_header_bg: Color,
    pub table_header_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_panel: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::AMBER.c500,
            accent_sale: tailwind::ROSE.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,

            selected_bg: tailwind::AMBER.c600,
            selected_fg: Color::Black,

            table_header_bg: tailwind::SLATE.c700,
            table_header_fg: tailwind::SLATE.c100,
        }
    }

    // Prebuilt styles for common use cases

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Border of the panel that has the keyboard focus
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of every other panel
    pub fn panel_border_inactive(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Sale prices and discounts
    pub fn sale(&self) -> Style {
        Style::default()
            .fg(self.accent_sale)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted tab in a tab bar
    pub fn tab_selected(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }
}
