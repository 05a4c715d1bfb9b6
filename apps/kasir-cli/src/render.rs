//! # Rendering
//!
//! Turns command results into printable text: `tabled` tables in table
//! mode, pretty JSON in JSON mode. Money goes through
//! [`ConfigState::format_money`] in table mode and stays a plain integer
//! in JSON.

use kasir_core::{CartAddition, CartSummary, CatalogEntry, Receipt, Restocked, Settlement, Shortfall};
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::error::UiError;
use crate::state::{ConfigState, OutputFormat};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

/// Product listing: name, stock, price.
pub fn catalog(config: &ConfigState, entries: &[CatalogEntry]) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(entries);
    }

    let rows: Vec<ProductRow> = entries
        .iter()
        .map(|entry| ProductRow {
            name: entry.name().to_string(),
            stock: entry.stock(),
            price: config.format_money(entry.unit_price()),
        })
        .collect();

    Ok(table(rows))
}

/// Cart listing: name, quantity, subtotal, then the total.
pub fn cart(config: &ConfigState, summary: &CartSummary) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(summary);
    }

    let rows: Vec<CartRow> = summary
        .lines
        .iter()
        .map(|line| CartRow {
            name: line.name.clone(),
            quantity: line.quantity,
            subtotal: config.format_money(line.subtotal),
        })
        .collect();

    Ok(format!(
        "{}\n\nTotal: {}",
        table(rows),
        config.format_money(summary.total)
    ))
}

pub fn added_to_cart(config: &ConfigState, addition: &CartAddition) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(addition);
    }
    Ok(format!(
        "{} {} added to cart ({} in cart).",
        addition.added, addition.name, addition.in_cart
    ))
}

pub fn restocked(config: &ConfigState, restocked: &Restocked) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(restocked);
    }
    Ok(format!(
        "Stock for {} increased by {} (now {}).",
        restocked.name, restocked.added, restocked.stock
    ))
}

/// Change due and receipt number for a settled checkout.
pub fn receipt(config: &ConfigState, receipt: &Receipt) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(receipt);
    }
    Ok(format!(
        "Payment successful! Your change: {}\nReceipt {} ({})",
        config.format_money(receipt.change),
        receipt.receipt_number,
        receipt.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ))
}

/// The insufficient-funds notice for an aborted checkout.
pub fn shortfall(config: &ConfigState, shortfall: &Shortfall) -> Result<String, UiError> {
    if config.output == OutputFormat::Json {
        return json(&Settlement::Aborted(*shortfall));
    }
    Ok(format!(
        "Insufficient funds: total {}, paid {}. Transaction cancelled.",
        config.format_money(shortfall.total),
        config.format_money(shortfall.tendered)
    ))
}

/// A command error, ready to print.
pub fn error(config: &ConfigState, err: &UiError) -> String {
    match config.output {
        OutputFormat::Json => json(err).unwrap_or_else(|_| err.message.clone()),
        OutputFormat::Table => format!("Error: {}", err.message),
    }
}

fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, UiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| UiError::internal(format!("Failed to render JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{seed, Money, Store};

    fn json_config() -> ConfigState {
        ConfigState {
            output: OutputFormat::Json,
            ..ConfigState::default()
        }
    }

    fn buyer_cart() -> CartSummary {
        let mut store = Store::seeded();
        store.login("buyer", "buyerpass").unwrap();
        store.add_to_cart("Indomie Goreng", 2).unwrap();
        store.add_to_cart("Gula 1kg", 1).unwrap();
        store.cart_summary().unwrap()
    }

    #[test]
    fn test_catalog_table() {
        let inventory = seed::catalog();
        let rendered = catalog(&ConfigState::default(), inventory.list()).unwrap();

        assert!(rendered.contains("Product"));
        assert!(rendered.contains("Stock"));
        assert!(rendered.contains("Indomie Goreng"));
        assert!(rendered.contains("Rp3000"));
        assert!(rendered.contains("Telur Ayam (1 butir)"));
        assert!(
            rendered.find("Indomie Goreng").unwrap() < rendered.find("Telur Ayam").unwrap()
        );
    }

    #[test]
    fn test_catalog_json() {
        let inventory = seed::catalog();
        let rendered = catalog(&json_config(), inventory.list()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["name"], "Indomie Goreng");
        assert_eq!(value[0]["unit_price"], 3000);
        assert_eq!(value[0]["stock"], 20);
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_cart_table_has_total() {
        let rendered = cart(&ConfigState::default(), &buyer_cart()).unwrap();

        assert!(rendered.contains("Rp6000"));
        assert!(rendered.contains("Rp10000"));
        assert!(rendered.ends_with("Total: Rp16000"));
    }

    #[test]
    fn test_cart_grouped_thousands() {
        let config = ConfigState {
            group_thousands: true,
            ..ConfigState::default()
        };
        let rendered = cart(&config, &buyer_cart()).unwrap();
        assert!(rendered.ends_with("Total: Rp16.000"));
    }

    #[test]
    fn test_cart_json() {
        let rendered = cart(&json_config(), &buyer_cart()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total"], 16000);
        assert_eq!(value["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_shortfall_notice() {
        let short = Shortfall {
            total: Money::from_units(6000),
            tendered: Money::from_units(4000),
        };

        assert_eq!(
            shortfall(&ConfigState::default(), &short).unwrap(),
            "Insufficient funds: total Rp6000, paid Rp4000. Transaction cancelled."
        );

        let value: serde_json::Value =
            serde_json::from_str(&shortfall(&json_config(), &short).unwrap()).unwrap();
        assert_eq!(value["status"], "aborted");
        assert_eq!(value["tendered"], 4000);
    }

    #[test]
    fn test_error_rendering() {
        let err = UiError::not_found("Product", "Kopi");

        assert_eq!(
            error(&ConfigState::default(), &err),
            "Error: Product not found: Kopi"
        );
        assert!(error(&json_config(), &err).contains("\"code\": \"NOT_FOUND\""));
    }
}
