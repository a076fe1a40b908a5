//! Status bar
//!
//! The bottom row: the `:` command line while it is open, otherwise the last
//! feedback message, otherwise the key hints.

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Screen;
use crate::state::StatusKind;

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let theme = screen.theme;

    let line = if let Some(text) = &screen.ui.palette {
        // Cursor right after the typed text
        let x = area.x + 2 + text.chars().count() as u16;
        if x < area.x + area.width {
            f.set_cursor_position(Position::new(x, area.y));
        }
        Line::from(vec![
            Span::styled(" :", theme.key_hint()),
            Span::styled(text.clone(), theme.text()),
        ])
    } else if let Some(status) = &screen.ui.status {
        let style = match status.kind {
            StatusKind::Info => theme.success(),
            StatusKind::Error => theme.error(),
        };
        Line::from(Span::styled(format!(" {}", status.text), style))
    } else {
        let mut hints = vec![Span::raw(" ")];
        for (key, label) in [("?", "help"), (":", "command"), ("q", "quit")] {
            hints.push(Span::styled(key, theme.key_hint()));
            hints.push(Span::styled(format!(" {}  ", label), theme.muted()));
        }
        Line::from(hints)
    };

    f.render_widget(Paragraph::new(line).style(theme.panel_background()), area);
}

#[cfg(test)]
mod tests {
    use crate::state::{StatusMessage, UiState};
    use crate::views::testing::draw;
    use shopfront_core::AppState;

    fn status_line(ui: &UiState) -> String {
        let lines = draw(&AppState::default(), ui, 80, 10);
        lines[9].trim_end().to_string()
    }

    #[test]
    fn test_key_hints_by_default() {
        assert_eq!(status_line(&UiState::default()), " ? help  : command  q quit");
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let ui = UiState {
            status: Some(StatusMessage::error("Quantity must be at least 1")),
            ..UiState::default()
        };
        assert_eq!(status_line(&ui), " Quantity must be at least 1");
    }

    #[test]
    fn test_open_palette_wins() {
        let ui = UiState {
            palette: Some("add 6".to_string()),
            status: Some(StatusMessage::info("Cart cleared")),
            ..UiState::default()
        };
        assert_eq!(status_line(&ui), " :add 6");
    }
}
