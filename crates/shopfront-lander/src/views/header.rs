//! Tab bar
//!
//! `StyleHub  Store | Admin   Home | Profile            cart: 3  Jane Doe`
//!
//! The page tabs only show in the store view; the dashboard has its own.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};
use shopfront_core::domain_models::{Page, TopLevelView};

use super::Screen;

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let state = screen.state;
    let name = &screen.config.store_name;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(name.chars().count() as u16 + 2),
            Constraint::Length(17), // " Store │ Admin "
            Constraint::Length(18), // " Home │ Profile "
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", name), theme.panel_title())),
        chunks[0],
    );

    let view_index = match state.navigation.view {
        TopLevelView::Store => 0,
        TopLevelView::Admin => 1,
    };
    let views = Tabs::new(["Store", "Admin"])
        .select(view_index)
        .style(theme.muted())
        .highlight_style(theme.tab_selected());
    f.render_widget(views, chunks[1]);

    if state.navigation.view == TopLevelView::Store {
        let page_index = match state.navigation.page {
            Page::Home => 0,
            Page::Profile => 1,
        };
        let pages = Tabs::new(["Home", "Profile"])
            .select(page_index)
            .style(theme.muted())
            .highlight_style(theme.tab_selected());
        f.render_widget(pages, chunks[2]);
    }

    let user = match &state.session {
        Some(session) => Span::styled(session.name.clone(), theme.text()),
        None => Span::styled("not signed in", theme.muted()),
    };
    let badge = Line::from(vec![
        Span::styled(format!("cart: {}", state.cart.item_count()), theme.key_hint()),
        Span::raw("  "),
        user,
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(badge).alignment(Alignment::Right), chunks[3]);
}
