//! Terminal rendering. Layout (widths, truncation, padding) is computed on
//! plain text with `unicode-width` before any color is applied.

use colored::Colorize;
use medstock::api::{CmdMessage, MessageLevel};
use medstock::config::PharmacyConfig;
use medstock::model::Order;
use medstock::sales::SalesSummary;
use medstock::view::DisplayMedicine;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const ID_WIDTH: usize = 12;
const QTY_WIDTH: usize = 8;
const USAGE_WIDTH: usize = 36;
const LOW_MARKER: &str = "▼";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn render_medicines(rows: &[DisplayMedicine], config: &PharmacyConfig) -> String {
    if rows.is_empty() {
        return "No medicines found.\n".to_string();
    }

    let row_width = rows.iter().map(|r| r.row.to_string().len()).max().unwrap_or(1) + 1;
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}  {}\n",
        pad("#", row_width),
        pad("Name", NAME_WIDTH),
        pad("ID", ID_WIDTH),
        pad_left("Qty", QTY_WIDTH),
        "Usage"
    )
    .bold()
    .to_string());

    for dm in rows {
        let medicine = &dm.medicine;
        let low = medicine
            .quantity_count()
            .is_some_and(|count| count <= config.low_stock_threshold);

        let index = pad(&format!("{}.", dm.row), row_width);
        let quantity = pad_left(&truncate_to_width(&medicine.quantity, QTY_WIDTH), QTY_WIDTH);
        let quantity = if low {
            quantity.yellow().to_string()
        } else {
            quantity
        };
        let marker = if low { LOW_MARKER } else { " " };

        out.push_str(&format!(
            "{}  {}  {}  {}{} {}\n",
            index.dimmed(),
            pad(&truncate_to_width(&medicine.name, NAME_WIDTH), NAME_WIDTH),
            pad(&truncate_to_width(&medicine.id, ID_WIDTH), ID_WIDTH),
            quantity,
            marker.yellow(),
            truncate_to_width(&medicine.usage, USAGE_WIDTH).dimmed()
        ));
    }
    out
}

pub(super) fn render_medicine_detail(medicine: &medstock::model::Medicine) -> String {
    let field = |label: &str, value: &str| {
        let shown = if value.is_empty() { "-" } else { value };
        format!("{}{}\n", pad(&format!("{}:", label), 14).dimmed(), shown)
    };
    let mut out = String::new();
    out.push_str(&field("Name", &medicine.name));
    out.push_str(&field("ID", &medicine.id));
    out.push_str(&field("Quantity", &medicine.quantity));
    out.push_str(&field("Usage", &medicine.usage));
    out.push_str(&field("Side effects", &medicine.side_effects));
    out
}

pub(super) fn render_orders(orders: &[Order], config: &PharmacyConfig) -> String {
    if orders.is_empty() {
        return "No sales recorded.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:<10}  {}  {:>6}  {:>10}  {:>12}\n",
        "Order", "Date", pad("Medicine", NAME_WIDTH), "Qty", "Unit", "Total"
    )
    .bold()
    .to_string());

    for order in orders {
        out.push_str(&format!(
            "{:>6}  {:<10}  {}  {:>6}  {:>10}  {:>12}\n",
            format!("#{}", order.order_id),
            order.order_date.format("%Y-%m-%d").to_string(),
            pad(&truncate_to_width(&order.medicine_name, NAME_WIDTH), NAME_WIDTH),
            order.quantity,
            config.money(order.unit_price),
            config.money(order.total_revenue)
        ));
    }
    out
}

pub(super) fn render_summary(summary: &SalesSummary, config: &PharmacyConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} orders, {} units, {} revenue\n",
        summary.order_count,
        summary.units_sold,
        config.money(summary.revenue).green()
    ));
    if summary.by_medicine.is_empty() {
        return out;
    }

    out.push('\n');
    for line in &summary.by_medicine {
        out.push_str(&format!(
            "  {}  {:>4} orders  {:>6} units  {:>12}\n",
            pad(&truncate_to_width(&line.medicine_name, NAME_WIDTH), NAME_WIDTH),
            line.orders,
            line.units,
            config.money(line.revenue)
        ));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
