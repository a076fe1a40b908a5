//! Catalog seed
//!
//! The store does not care where its catalog comes from. The built-in sample
//! list keeps the storefront usable without any files; a JSON file with the
//! same item shape can replace it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain_models::{Address, CartLine, CatalogItem, Category, Order, OrderStatus, Session};

/// Orders at or above this subtotal ship for free
const FREE_SHIPPING_FROM: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const FLAT_SHIPPING: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Errors that can occur while loading a catalog seed
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(String),

    #[error("Catalog item {id} has non-positive price {price}")]
    InvalidPrice { id: String, price: Decimal },
}

/// Where the catalog is loaded from during bootstrap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSeed {
    /// The fixed sample catalog compiled into the binary
    #[default]
    BuiltIn,
    /// A JSON array of catalog items
    File(PathBuf),
}

impl CatalogSeed {
    pub fn load(&self) -> Result<Vec<CatalogItem>, SeedError> {
        match self {
            CatalogSeed::BuiltIn => Ok(sample_catalog()),
            CatalogSeed::File(path) => load_catalog_file(path),
        }
    }
}

/// Read and validate a JSON catalog file
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogItem>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}

/// Parse a JSON array of catalog items, rejecting duplicate ids and non-positive prices
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogItem>, SeedError> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(SeedError::DuplicateId(item.id.clone()));
        }
        if item.price <= Decimal::ZERO {
            return Err(SeedError::InvalidPrice {
                id: item.id.clone(),
                price: item.price,
            });
        }
    }

    log::debug!("Parsed catalog with {} items", items.len());
    Ok(items)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    original_price_cents: Option<i64>,
    image: &str,
    category: Category,
    subcategory: &str,
    sizes: &[&str],
    colors: &[&str],
    stock_quantity: u32,
    featured: bool,
    rating: f32,
    reviews: u32,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        original_price: original_price_cents.map(|cents| Decimal::new(cents, 2)),
        image: image.to_string(),
        images: vec![image.to_string()],
        category,
        subcategory: subcategory.to_string(),
        sizes: strings(sizes),
        colors: strings(colors),
        in_stock: true,
        stock_quantity,
        featured,
        rating,
        reviews,
    }
}

/// The fixed sample catalog
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        item(
            "1",
            "Premium Cotton T-Shirt",
            "Soft, comfortable cotton t-shirt perfect for everyday wear",
            2999,
            Some(3999),
            "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg",
            Category::Men,
            "t-shirts",
            &["S", "M", "L", "XL"],
            &["Black", "White", "Navy"],
            50,
            true,
            4.5,
            128,
        ),
        item(
            "2",
            "Classic Denim Jacket",
            "Timeless denim jacket with modern fit and premium quality",
            8999,
            None,
            "https://images.pexels.com/photos/1926769/pexels-photo-1926769.jpeg",
            Category::Men,
            "jackets",
            &["S", "M", "L", "XL"],
            &["Blue", "Black"],
            30,
            true,
            4.7,
            85,
        ),
        item(
            "3",
            "Comfortable Hoodie",
            "Ultra-soft hoodie perfect for casual days and layering",
            5999,
            None,
            "https://images.pexels.com/photos/8532616/pexels-photo-8532616.jpeg",
            Category::Women,
            "hoodies",
            &["XS", "S", "M", "L", "XL"],
            &["Gray", "Black", "Pink"],
            40,
            true,
            4.6,
            156,
        ),
        item(
            "4",
            "Running Sneakers",
            "Lightweight, breathable sneakers for active lifestyle",
            11999,
            None,
            "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg",
            Category::Shoes,
            "sneakers",
            &["7", "8", "9", "10", "11", "12"],
            &["White", "Black", "Blue"],
            25,
            false,
            4.8,
            203,
        ),
        item(
            "5",
            "Kids Colorful T-Shirt",
            "Fun, vibrant t-shirt perfect for active kids",
            1999,
            None,
            "https://images.pexels.com/photos/7691691/pexels-photo-7691691.jpeg",
            Category::Kids,
            "t-shirts",
            &["2T", "3T", "4T", "5T", "6T"],
            &["Red", "Blue", "Green", "Yellow"],
            60,
            true,
            4.4,
            92,
        ),
        item(
            "6",
            "Leather Belt",
            "Genuine leather belt with classic buckle design",
            4599,
            None,
            "https://images.pexels.com/photos/6974266/pexels-photo-6974266.jpeg",
            Category::Accessories,
            "belts",
            &["28", "30", "32", "34", "36", "38"],
            &["Brown", "Black"],
            35,
            false,
            4.3,
            67,
        ),
    ]
}

fn address(id: &str, name: &str, street: &str, zip_code: &str, is_default: bool) -> Address {
    Address {
        id: id.to_string(),
        name: name.to_string(),
        street: street.to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: zip_code.to_string(),
        country: "USA".to_string(),
        is_default,
    }
}

fn home_address() -> Address {
    address("1", "Home", "123 Main Street", "10001", true)
}

/// Saved addresses handed to every mock sign-in
pub fn sample_addresses() -> Vec<Address> {
    vec![
        home_address(),
        address("2", "Office", "456 Business Ave", "10002", false),
    ]
}

/// The given day and hour in UTC, or the epoch for an impossible date
fn placed_at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .map(|at| at.and_utc())
        .unwrap_or_default()
}

/// An order line for `id` in its first size and color, if the catalog has it
fn order_line<T: AsRef<CatalogItem>>(items: &[T], id: &str, quantity: u32) -> Option<CartLine> {
    let item = items.iter().map(AsRef::as_ref).find(|item| item.id == id)?;
    let (size, color) = item.default_selection();
    Some(CartLine {
        size: size.to_string(),
        color: color.to_string(),
        item: Arc::new(item.clone()),
        quantity,
    })
}

/// One placed order, shipping free from $100
///
/// Lines naming items missing from the catalog are dropped; an order left
/// without lines is not placed at all.
fn placed_order<T: AsRef<CatalogItem>>(
    items: &[T],
    number: usize,
    (user_id, customer_name): (&str, &str),
    status: OrderStatus,
    created_at: DateTime<Utc>,
    lines: &[(&str, u32)],
    shipping_address: &Address,
) -> Option<Order> {
    let lines: Vec<CartLine> = lines
        .iter()
        .filter_map(|(id, quantity)| order_line(items, id, *quantity))
        .collect();
    if lines.is_empty() {
        return None;
    }

    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    let shipping = if subtotal >= FREE_SHIPPING_FROM {
        Decimal::ZERO
    } else {
        FLAT_SHIPPING
    };

    Some(Order {
        id: format!("#ORD-{:03}", number),
        user_id: user_id.to_string(),
        customer_name: customer_name.to_string(),
        lines,
        subtotal,
        tax: Decimal::ZERO,
        shipping,
        total: subtotal + shipping,
        status,
        shipping_address: shipping_address.clone(),
        payment_method: "card".to_string(),
        created_at,
        updated_at: created_at,
    })
}

/// Recent shop orders from other customers, numbered from #ORD-001
pub fn sample_orders<T: AsRef<CatalogItem>>(items: &[T]) -> Vec<Order> {
    let home = home_address();
    let customers = [
        (
            ("user-john.doe@example.com", "John Doe"),
            OrderStatus::Pending,
            placed_at(2024, 1, 15, 10),
            vec![("1", 2), ("6", 1)],
        ),
        (
            ("user-jane.smith@example.com", "Jane Smith"),
            OrderStatus::Shipped,
            placed_at(2024, 1, 15, 14),
            vec![("2", 1)],
        ),
        (
            ("user-mike.johnson@example.com", "Mike Johnson"),
            OrderStatus::Delivered,
            placed_at(2024, 1, 14, 9),
            vec![("4", 1), ("3", 1)],
        ),
        (
            ("user-sarah.wilson@example.com", "Sarah Wilson"),
            OrderStatus::Processing,
            placed_at(2024, 1, 14, 16),
            vec![("5", 2)],
        ),
    ];

    customers
        .into_iter()
        .enumerate()
        .filter_map(|(i, (customer, status, created_at, lines))| {
            placed_order(items, i + 1, customer, status, created_at, &lines, &home)
        })
        .collect()
}

/// Past orders for a freshly signed-in user, numbered from `first_number`
///
/// They ship to the session's default address; a session without addresses
/// gets the sample home address.
pub fn sample_order_history<T: AsRef<CatalogItem>>(
    session: &Session,
    items: &[T],
    first_number: usize,
) -> Vec<Order> {
    let ship_to = session
        .default_address()
        .cloned()
        .unwrap_or_else(home_address);
    let customer = (session.id.as_str(), session.name.as_str());

    let history = [
        (
            OrderStatus::Delivered,
            placed_at(2024, 1, 15, 12),
            vec![("1", 2), ("2", 1)],
        ),
        (
            OrderStatus::Shipped,
            placed_at(2024, 1, 10, 12),
            vec![("4", 1)],
        ),
    ];

    history
        .into_iter()
        .enumerate()
        .filter_map(|(i, (status, created_at, lines))| {
            placed_order(
                items,
                first_number + i,
                customer,
                status,
                created_at,
                &lines,
                &ship_to,
            )
        })
        .collect()
}
