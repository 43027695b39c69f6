//! Plain-text rendering of the dashboard

use domain_inventory::{Price, Product};
use std::fmt;

use crate::state::DashboardState;

/// Used when a product has no image of its own
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=300&fit=crop";

const RULE: &str = "────────────────────────────────────────";

/// Render the whole dashboard. While a load is running only the spinner line
/// is shown.
pub fn render(state: &DashboardState) -> String {
    DashboardView(state).to_string()
}

/// [`fmt::Display`] form of a dashboard state, for writing into any sink.
pub struct DashboardView<'a>(pub &'a DashboardState);

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.is_loading() {
            return writeln!(f, "⟳ Loading inventory...");
        }

        writeln!(f, "📦 Smart Inventory Dashboard")?;
        writeln!(f, "   Real-time stock management")?;
        writeln!(f)?;

        if let Some(error) = state.error() {
            writeln!(f, "⚠ {}", error)?;
            writeln!(f)?;
        }

        let stats = state.stats();
        writeln!(
            f,
            "Total Products: {}  |  Low Stock: {}  |  Out of Stock: {}",
            stats.total, stats.low_stock, stats.out_of_stock
        )?;

        for product in state.products() {
            writeln!(f, "{}", RULE)?;
            write_card(f, product, state.is_updating(&product.id))?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "Commands: + <id> | - <id> | r (reload) | q (quit)   [x] = disabled"
        )
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, product: &Product, updating: bool) -> fmt::Result {
    writeln!(f, "#{} {}", product.id, product.name)?;
    if updating {
        writeln!(f, "  ⟳ updating...")?;
    }
    writeln!(f, "  {}", format_inr(&product.price))?;
    writeln!(f, "  Stock: {} units", product.stock)?;

    if product.is_critical() {
        let badge = if product.is_out_of_stock() {
            "OUT OF STOCK"
        } else {
            "CRITICAL LOW"
        };
        writeln!(f, "  ⚠ {}", badge)?;
    }

    let decrement = if updating || product.stock == 0 {
        "[x]"
    } else {
        "[-]"
    };
    let increment = if updating { "[x]" } else { "[+]" };
    writeln!(f, "  {} {} {}", decrement, product.stock, increment)?;

    writeln!(f, "  Low stock threshold: {}", product.low_stock_threshold)?;
    writeln!(
        f,
        "  Image: {}",
        product.image.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    )
}

/// Rupee amount with Indian digit grouping (`₹12,34,567.5`), at most three
/// fraction digits.
pub fn format_inr(price: &Price) -> String {
    let fixed = format!("{:.3}", price.as_f64());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::from("₹");
    out.push_str(&group_indian(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Last three digits, then groups of two: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
