//! Storefront home page
//!
//! Catalog table with the highlighted product's details underneath, and the
//! cart on the right. The focused table gets the bright border.

use std::sync::Arc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use shopfront_core::domain_models::CatalogItem;
use shopfront_core::view_models::{CartViewModel, CatalogViewModel};

use super::{money, Screen};
use crate::state::{clamp_selection, Focus};

pub fn render(screen: &Screen, area: Rect, f: &mut Frame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(columns[0]);

    let catalog = CatalogViewModel::from_state(screen.state, screen.ui.filter, screen.ui.sort);
    let selected = clamp_selection(screen.ui.catalog_selected, catalog.items.len());

    render_catalog(screen, &catalog, selected, left[0], f);
    render_detail(screen, selected.and_then(|i| catalog.items.get(i)), left[1], f);
    render_cart(screen, columns[1], f);
}

fn border(screen: &Screen, focus: Focus) -> Style {
    if screen.ui.focus == focus {
        screen.theme.panel_border()
    } else {
        screen.theme.panel_border_inactive()
    }
}

fn render_catalog(
    screen: &Screen,
    vm: &CatalogViewModel,
    selected: Option<usize>,
    area: Rect,
    f: &mut Frame,
) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;

    let block = Block::bordered()
        .border_style(border(screen, Focus::Catalog))
        .title(format!(" {} · {} ", vm.filter.label(), vm.sort.label()))
        .title_style(theme.panel_title())
        .title_bottom(Line::from(format!(" {} ", vm.summary())).right_aligned());

    if vm.items.is_empty() {
        let paragraph = Paragraph::new("No products in this category")
            .block(block)
            .style(theme.muted());
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Product", "Category", "Price", "Rating", "Stock"])
        .style(theme.table_header())
        .height(1);

    let rows: Vec<Row> = vm
        .items
        .iter()
        .map(|item| {
            let price = match item.discount_percent() {
                Some(percent) => Line::from(vec![
                    Span::styled(money(symbol, item.price), theme.sale()),
                    Span::styled(format!(" -{}%", percent), theme.muted()),
                ]),
                None => Line::from(money(symbol, item.price)),
            };
            let stock = if item.in_stock {
                Cell::from(item.stock_quantity.to_string())
            } else {
                Cell::from("out").style(theme.error())
            };
            let name = if item.featured {
                Line::from(vec![Span::raw(item.name.clone()), Span::styled(" ★", theme.key_hint())])
            } else {
                Line::from(item.name.clone())
            };

            Row::new(vec![
                Cell::from(name),
                Cell::from(item.category.label()),
                Cell::from(price),
                Cell::from(format!("{:.1} ({})", item.rating, item.reviews)),
                stock,
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(selected);
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_detail(screen: &Screen, item: Option<&Arc<CatalogItem>>, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;
    let block = Block::bordered().border_style(theme.panel_border_inactive());

    let Some(item) = item else {
        f.render_widget(block, area);
        return;
    };

    let mut price = vec![Span::styled(
        money(symbol, item.price),
        theme.text().add_modifier(Modifier::BOLD),
    )];
    if let (Some(original), Some(percent)) = (item.original_price, item.discount_percent()) {
        price.push(Span::styled(format!("  was {}", money(symbol, original)), theme.muted()));
        price.push(Span::styled(format!("  {}% off", percent), theme.sale()));
    }

    let mut lines = vec![
        Line::from(item.description.clone()),
        Line::from(price),
        Line::from(Span::styled(
            format!(
                "{} / {}  ·  {:.1} from {} reviews",
                item.category.label(),
                item.subcategory,
                item.rating,
                item.reviews
            ),
            theme.muted(),
        )),
    ];
    if !item.sizes.is_empty() {
        lines.push(Line::from(format!("Sizes: {}", item.sizes.join(", "))));
    }
    if !item.colors.is_empty() {
        lines.push(Line::from(format!("Colors: {}", item.colors.join(", "))));
    }
    lines.push(if item.in_stock {
        Line::from(Span::styled(
            format!("In stock: {}", item.stock_quantity),
            theme.success(),
        ))
    } else {
        Line::from(Span::styled("Out of stock", theme.error()))
    });

    let paragraph = Paragraph::new(lines)
        .block(
            block
                .title(format!(" {} (#{}) ", item.name, item.id))
                .title_style(theme.panel_title()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_cart(screen: &Screen, area: Rect, f: &mut Frame) {
    let theme = screen.theme;
    let symbol = &screen.config.currency_symbol;
    let vm = CartViewModel::from_state(screen.state);

    let block = Block::bordered()
        .border_style(border(screen, Focus::Cart))
        .title(format!(" Cart ({}) ", vm.item_count))
        .title_style(theme.panel_title())
        .title_bottom(
            Line::from(format!(" Subtotal {} ", money(symbol, vm.subtotal))).right_aligned(),
        );

    if vm.is_empty() {
        let paragraph = Paragraph::new("Your cart is empty")
            .block(block)
            .style(theme.muted());
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["#", "Item", "Size", "Color", "Qty", "Total"])
        .style(theme.table_header())
        .height(1);

    let rows: Vec<Row> = vm
        .lines
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.position.to_string()),
                Cell::from(line.name.clone()),
                Cell::from(line.size.clone()),
                Cell::from(line.color.clone()),
                Cell::from(line.quantity.to_string()),
                Cell::from(Line::from(money(symbol, line.line_total)).right_aligned()),
            ])
            .style(theme.text())
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(12),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    // Only show the highlight while the cart has the focus
    let mut table_state = TableState::default();
    if screen.ui.focus == Focus::Cart {
        table_state.select(clamp_selection(screen.ui.cart_selected, vm.lines.len()));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use crate::state::{Focus, UiState};
    use crate::views::testing::{draw, shows};
    use shopfront_core::actions::{Action, CartAction, CatalogAction};
    use shopfront_core::apply;
    use shopfront_core::domain_models::{Category, CategoryFilter};
    use shopfront_core::seed::sample_catalog;
    use shopfront_core::AppState;

    fn state() -> AppState {
        apply(
            &AppState::default(),
            &Action::Catalog(CatalogAction::Set(sample_catalog())),
        )
    }

    #[test]
    fn test_catalog_table_in_view_order() {
        let lines = draw(&state(), &UiState::default(), 140, 30);

        assert!(shows(&lines, " All Products · Featured "));
        assert!(shows(&lines, "Showing 6 of 6 products"));

        let row = |name: &str| lines.iter().position(|line| line.contains(name)).unwrap();
        // Featured first: the sneakers come after the kids shirt
        assert!(row("Kids Colorful T-Shirt") < row("Running Sneakers"));
        // The first row is highlighted and its details are shown
        assert!(lines[row("Premium Cotton T-Shirt")].contains("> "));
        assert!(shows(&lines, "$29.99 -25%"));
        assert!(shows(&lines, "was $39.99  25% off"));
        assert!(shows(&lines, "Sizes: S, M, L, XL"));
    }

    #[test]
    fn test_filtered_catalog() {
        let ui = UiState {
            filter: CategoryFilter::Only(Category::Shoes),
            ..UiState::default()
        };
        let lines = draw(&state(), &ui, 140, 30);
        assert!(shows(&lines, "Showing 1 of 6 products"));
        assert!(!shows(&lines, "Leather Belt"));
    }

    #[test]
    fn test_cart_panel() {
        let state = state();
        let lines = draw(&state, &UiState::default(), 140, 30);
        assert!(shows(&lines, "Your cart is empty"));

        let belt = state.catalog.get("6").unwrap().clone();
        let state = apply(&state, &Action::Cart(CartAction::add(belt, 2, "32", "Brown")));
        let ui = UiState {
            focus: Focus::Cart,
            ..UiState::default()
        };
        let lines = draw(&state, &ui, 140, 30);
        assert!(shows(&lines, " Cart (2) "));
        assert!(shows(&lines, "Subtotal $91.98"));
        let belt_row = lines
            .iter()
            .find(|line| line.contains("Brown"))
            .unwrap();
        assert!(belt_row.contains("$91.98"));
    }
}
