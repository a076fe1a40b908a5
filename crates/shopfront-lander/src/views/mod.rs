//! Views
//!
//! Every frame is drawn from scratch out of the current snapshots: a tab bar
//! on top, the page in the middle and the status bar at the bottom. The help
//! overlay goes over everything.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};
use rust_decimal::Decimal;
use shopfront_config::AppConfig;
use shopfront_core::domain_models::{Page, TopLevelView};
use shopfront_core::AppState;

use crate::state::UiState;
use crate::theme::Theme;

pub mod admin_view;
pub mod header;
pub mod help_view;
pub mod profile_view;
pub mod status_bar;
pub mod storefront_view;

/// Everything a frame is drawn from
pub struct Screen<'a> {
    pub state: &'a AppState,
    pub ui: &'a UiState,
    pub config: &'a AppConfig,
    pub theme: &'a Theme,
}

/// Format an amount with the configured currency symbol, e.g. "$29.99"
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(2))
}

/// Render the entire application UI
pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    // Split into tab bar, content area, and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar (single row)
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Status bar (single row)
        ])
        .split(area);

    header::render(screen, chunks[0], f);

    let navigation = &screen.state.navigation;
    if screen.state.loading {
        render_loading(screen, chunks[1], f);
    } else {
        match (navigation.view, navigation.page) {
            (TopLevelView::Admin, _) => admin_view::render(screen, chunks[1], f),
            (TopLevelView::Store, Page::Home) => storefront_view::render(screen, chunks[1], f),
            (TopLevelView::Store, Page::Profile) => profile_view::render(screen, chunks[1], f),
        }
    }

    status_bar::render(screen, chunks[2], f);

    if screen.ui.show_help {
        help_view::render(screen, area, f);
    }
}

fn render_loading(screen: &Screen, area: Rect, f: &mut Frame) {
    let block = Block::bordered().border_style(screen.theme.panel_border_inactive());
    let paragraph = Paragraph::new("Loading catalog...")
        .block(block)
        .style(screen.theme.muted())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// A centered rectangle of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Draw one frame and return it as lines of text
    pub fn draw(state: &AppState, ui: &UiState, width: u16, height: u16) -> Vec<String> {
        let config = AppConfig::default();
        let theme = Theme::default();
        let screen = Screen {
            state,
            ui,
            config: &config,
            theme: &theme,
        };

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(&screen, area, f)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Whether any line of the frame contains `needle`
    pub fn shows(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
