//! Admin dashboard
//!
//! Three tabs over the same snapshot: headline numbers with the latest orders
//! and restocking list, the stock table, and every order.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};
use shopfront_core::view_models::{AdminViewModel, OrderRow};
use strum::IntoEnumIterator;

use super::profile_view::status_style;
use super::{money, Screen};
use crate::state::{clamp_selection, AdminTab};

/// Orders listed on the overview tab
const RECENT_ORDERS: usize = 5;

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let vm = AdminViewModel::from_state(screen.state, screen.config.low_stock_threshold);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_tabs(screen, chunks[0], f);
    match screen.ui.admin_tab {
        AdminTab::Overview => render_overview(screen, &vm, chunks[1], f),
        AdminTab::Products => render_products(screen, &vm, chunks[1], f),
        AdminTab::Orders => render_orders(screen, &vm, chunks[1], f),
    }
}

fn render_tabs(screen: &Screen, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let titles: Vec<String> = AdminTab::iter().map(|tab| tab.to_string()).collect();
    let selected = AdminTab::iter()
        .position(|tab| tab == screen.ui.admin_tab)
        .unwrap_or_default();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.muted())
        .highlight_style(theme.tab_selected());
    f.render_widget(tabs, area);
}

fn render_overview(screen: &Screen, vm: &AdminViewModel, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;
    let stats = &vm.stats;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let low_stock = if stats.low_stock_products > 0 {
        theme.warning()
    } else {
        theme.text()
    };
    let boxes = [
        ("Revenue", money(symbol, stats.total_revenue), theme.text()),
        ("Orders", stats.total_orders.to_string(), theme.text()),
        ("Open", stats.open_orders.to_string(), theme.text()),
        ("Pending", stats.pending_orders.to_string(), theme.text()),
        ("Products", stats.total_products.to_string(), theme.text()),
        ("Low stock", stats.low_stock_products.to_string(), low_stock),
    ];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(boxes.iter().map(|_| Constraint::Ratio(1, boxes.len() as u32)))
        .split(chunks[0]);
    for ((label, value, style), cell) in boxes.into_iter().zip(cells.iter()) {
        let paragraph = Paragraph::new(Span::styled(value, style))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_style(theme.panel_border_inactive())
                    .title(format!(" {} ", label))
                    .title_style(theme.muted()),
            );
        f.render_widget(paragraph, *cell);
    }

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let recent = Block::bordered()
        .border_style(theme.panel_border_inactive())
        .title(" Recent orders ")
        .title_style(theme.panel_title());
    let recent_orders = vm.recent_orders(RECENT_ORDERS);
    if recent_orders.is_empty() {
        f.render_widget(
            Paragraph::new("No orders yet").block(recent).style(theme.muted()),
            lists[0],
        );
    } else {
        let table = orders_table(screen, recent_orders).block(recent);
        f.render_widget(table, lists[0]);
    }

    let restock = Block::bordered()
        .border_style(theme.panel_border_inactive())
        .title(" Low stock ")
        .title_style(theme.panel_title());
    let low: Vec<Line> = vm
        .low_stock()
        .map(|row| {
            let left = if row.in_stock {
                Span::styled(format!("{} left", row.stock_quantity), theme.warning())
            } else {
                Span::styled("out of stock", theme.error())
            };
            Line::from(vec![Span::styled(format!("{}  ", row.name), theme.text()), left])
        })
        .collect();
    let paragraph = if low.is_empty() {
        Paragraph::new(Span::styled("All products are well stocked", theme.success()))
    } else {
        Paragraph::new(low)
    };
    f.render_widget(paragraph.block(restock), lists[1]);
}

fn orders_table(screen: &Screen, orders: &[OrderRow]) -> Table<'static> {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;

    let header = Row::new(["Order", "Customer", "Items", "Total", "Status", "Date"])
        .style(theme.table_header());
    let rows: Vec<Row> = orders
        .iter()
        .map(|order| {
            Row::new(vec![
                Cell::from(order.id.clone()),
                Cell::from(order.customer.clone()),
                Cell::from(order.item_count.to_string()),
                Cell::from(money(symbol, order.total)),
                Cell::from(order.status.to_string()).style(status_style(theme, order.status)),
                Cell::from(order.placed_on.format("%Y-%m-%d").to_string()),
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    Table::new(rows, widths)
        .header(header)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ")
}

fn render_products(screen: &Screen, vm: &AdminViewModel, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;

    let header = Row::new(["#", "Product", "Category", "Price", "Stock", "Status"])
        .style(theme.table_header());
    let rows: Vec<Row> = vm
        .products
        .iter()
        .map(|row| {
            let status = match (row.in_stock, row.low_stock) {
                (false, _) => Cell::from("out of stock").style(theme.error()),
                (true, true) => Cell::from("low stock").style(theme.warning()),
                (true, false) => Cell::from("in stock").style(theme.success()),
            };
            Row::new(vec![
                Cell::from(row.id.clone()),
                Cell::from(row.name.clone()),
                Cell::from(row.category.label()),
                Cell::from(money(symbol, row.price)),
                Cell::from(row.stock_quantity.to_string()),
                status,
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(22),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::bordered()
                .border_style(theme.panel_border())
                .title(format!(" Products ({}) ", vm.products.len()))
                .title_style(theme.panel_title()),
        )
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(clamp_selection(screen.ui.admin_selected, vm.products.len()));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_orders(screen: &Screen, vm: &AdminViewModel, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let block = Block::bordered()
        .border_style(theme.panel_border())
        .title(format!(" Orders ({}) ", vm.orders.len()))
        .title_style(theme.panel_title());

    if vm.orders.is_empty() {
        f.render_widget(
            Paragraph::new("No orders yet").block(block).style(theme.muted()),
            area,
        );
        return;
    }

    let table = orders_table(screen, &vm.orders).block(block);
    let mut table_state = TableState::default();
    table_state.select(clamp_selection(screen.ui.admin_selected, vm.orders.len()));
    f.render_stateful_widget(table, area, &mut table_state);
}
