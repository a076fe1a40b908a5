//! Help overlay

use ratatui::{
    layout::Rect,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{centered, Screen};
use crate::commands::HELP;

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let height = HELP.lines().count() as u16 + 2;
    let popup = centered(area, 100, height);

    f.render_widget(Clear, popup);
    let paragraph = Paragraph::new(HELP).style(theme.text()).block(
        Block::bordered()
            .border_style(theme.panel_border())
            .title(" Help ")
            .title_style(theme.panel_title())
            .title_bottom(" ? or Esc to close ")
            .style(theme.panel_background()),
    );
    f.render_widget(paragraph, popup);
}
