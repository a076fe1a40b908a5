//! Profile page
//!
//! Account details and saved addresses on top, order history below.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};
use shopfront_core::domain_models::OrderStatus;
use shopfront_core::view_models::ProfileViewModel;

use super::{money, Screen};
use crate::theme::Theme;

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let Some(profile) = ProfileViewModel::from_state(screen.state) else {
        render_signed_out(screen, area, f);
        return;
    };

    // name, email, blank, ships to, blank, one row per address, borders
    let account_height = 5 + profile.addresses.len().max(1) as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(account_height), Constraint::Min(4)])
        .split(area);

    render_account(screen, &profile, chunks[0], f);
    render_orders(screen, &profile, chunks[1], f);
}

fn render_signed_out(screen: &Screen, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from("You are not signed in."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Sign in with "),
            Span::styled(":login <email> <name>", screen.theme.key_hint()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_style(screen.theme.panel_border_inactive())
                .title(" Profile ")
                .title_style(screen.theme.panel_title()),
        )
        .style(screen.theme.muted())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_account(screen: &Screen, profile: &ProfileViewModel, area: Rect, f: &mut Frame) {
    let theme = screen.theme;

    let mut name = vec![Span::styled(profile.name.clone(), theme.text())];
    if profile.is_admin {
        name.push(Span::styled("  Administrator", theme.key_hint()));
    }

    let mut lines = vec![
        Line::from(name),
        Line::from(Span::styled(profile.email.clone(), theme.muted())),
        Line::from(""),
        match &profile.default_address {
            Some(address) => Line::from(vec![
                Span::styled("Ships to: ", theme.muted()),
                Span::styled(address.one_line(), theme.text()),
            ]),
            None => Line::from(Span::styled("No shipping address saved", theme.warning())),
        },
        Line::from(""),
    ];
    lines.extend(profile.addresses.iter().map(|address| {
        let label = if address.is_default {
            format!("{} (default): ", address.name)
        } else {
            format!("{}: ", address.name)
        };
        Line::from(vec![
            Span::styled(label, theme.muted()),
            Span::raw(address.one_line()),
        ])
    }));

    let paragraph = Paragraph::new(lines).block(
        Block::bordered()
            .border_style(theme.panel_border())
            .title(" Profile ")
            .title_style(theme.panel_title()),
    );
    f.render_widget(paragraph, area);
}

/// Color of an order status, shared with the admin dashboard
pub(crate) fn status_style(theme: &Theme, status: OrderStatus) -> ratatui::style::Style {
    match status {
        OrderStatus::Delivered => theme.success(),
        OrderStatus::Cancelled => theme.error(),
        OrderStatus::Shipped => theme.text(),
        OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Processing => theme.warning(),
    }
}

fn render_orders(screen: &Screen, profile: &ProfileViewModel, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;
    let block = Block::bordered()
        .border_style(theme.panel_border_inactive())
        .title(format!(" Orders ({}) ", profile.orders.len()))
        .title_style(theme.panel_title());

    if profile.orders.is_empty() {
        f.render_widget(
            Paragraph::new("No orders yet").block(block).style(theme.muted()),
            area,
        );
        return;
    }

    let header = Row::new(["Order", "Date", "Items", "Total", "Status"]).style(theme.table_header());
    let rows: Vec<Row> = profile
        .orders
        .iter()
        .map(|order| {
            Row::new(vec![
                Cell::from(order.id.clone()),
                Cell::from(order.created_at.format("%Y-%m-%d").to_string()),
                Cell::from(order.item_count().to_string()),
                Cell::from(money(symbol, order.total)),
                Cell::from(order.status.to_string()).style(status_style(theme, order.status)),
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Min(10),
    ];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
