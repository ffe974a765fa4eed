use chrono::{TimeZone, Utc};
use colored::Colorize;
use prodcat::api::{CmdMessage, MessageLevel};
use prodcat::config::CatalogConfig;
use prodcat::index::DisplayProduct;
use prodcat::model::Product;
use prodcat::view::{SortDirection, ViewConfig};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 16;
const BESTSELLER_MARKER: &str = "★";

/// How prices and missing images are shown.
pub(super) struct RenderOptions {
    pub currency: String,
    pub placeholder_image: String,
}

impl From<&CatalogConfig> for RenderOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_view_header(view: &ViewConfig) {
    println!("{}", describe_view(view).dimmed());
}

/// One-line summary of the active view, e.g. `sorted by price ↑ · category: hats`.
pub(super) fn describe_view(view: &ViewConfig) -> String {
    let mut parts = Vec::new();
    if view.manual_order {
        parts.push("manual order".to_string());
    } else {
        let arrow = match view.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        };
        let key = prodcat::commands::view_state::key_label(view.sort_key);
        parts.push(format!("sorted by {} {}", key, arrow));
    }
    if !view.search.is_empty() {
        parts.push(format!("search: {}", view.search));
    }
    if !view.category.is_empty() {
        parts.push(format!("category: {}", view.category));
    }
    match view.bestseller {
        Some(true) => parts.push("bestsellers".to_string()),
        Some(false) => parts.push("non-bestsellers".to_string()),
        None => {}
    }
    parts.join(" · ")
}

pub(super) fn print_products(products: &[DisplayProduct], opts: &RenderOptions) {
    if products.is_empty() {
        return;
    }
    for dp in products {
        println!("{}", render_product_line(dp, opts));
    }
}

fn render_product_line(dp: &DisplayProduct, opts: &RenderOptions) -> String {
    let idx_str = format!("{:>3}. ", dp.position);
    let marker = if dp.product.bestseller {
        format!("{} ", BESTSELLER_MARKER)
    } else {
        "  ".to_string()
    };

    let label = if dp.product.category.is_empty() {
        dp.product.name.clone()
    } else {
        format!("{} [{}]", dp.product.name, dp.product.category)
    };

    let price = format!(
        "{:>width$}",
        format_price(&dp.product, &opts.currency),
        width = PRICE_WIDTH
    );
    let time_ago = format_time_ago(dp.product.created_at);

    let fixed_width = idx_str.width() + marker.width() + PRICE_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let label_display = truncate_to_width(&label, available);
    let padding = available.saturating_sub(label_display.width());

    format!(
        "{}{}{}{}{}{}",
        idx_str,
        marker.yellow(),
        label_display,
        " ".repeat(padding),
        price.bold(),
        time_ago.dimmed()
    )
}

pub(super) fn print_full_products(products: &[DisplayProduct], opts: &RenderOptions) {
    for (i, dp) in products.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        print!("{}", render_full_product(dp, opts));
    }
}

fn render_full_product(dp: &DisplayProduct, opts: &RenderOptions) -> String {
    let p = &dp.product;
    let position = if dp.position == 0 {
        "(hidden)".to_string()
    } else {
        dp.position.to_string()
    };

    let mut out = format!("{} {}\n", position.yellow(), p.name.bold());
    out.push_str("--------------------------------\n");
    out.push_str(&field("Price", &format_price(p, &opts.currency)));
    if p.bestseller {
        out.push_str(&field("Bestseller", "yes"));
    }
    if !p.category.is_empty() {
        let category = if p.subcategory.is_empty() {
            p.category.clone()
        } else {
            format!("{} / {}", p.category, p.subcategory)
        };
        out.push_str(&field("Category", &category));
    }
    if !p.sizes.is_empty() {
        out.push_str(&field("Sizes", &p.sizes.join(", ")));
    }
    out.push_str(&field(
        "Image",
        p.primary_image().unwrap_or(&opts.placeholder_image),
    ));
    for extra in p.images.iter().skip(1) {
        out.push_str(&field("", extra));
    }
    if !p.product_code.is_empty() {
        out.push_str(&field("Code", &p.product_code));
    }
    out.push_str(&field("Id", &p.id));
    out.push_str(&field("Created", &format_date(p.created_at)));
    if !p.description.is_empty() {
        out.push('\n');
        out.push_str(&p.description);
        out.push('\n');
    }
    out
}

fn field(label: &str, value: &str) -> String {
    format!("{:<11} {}\n", label, value)
}

pub(super) fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{}", category);
    }
}

pub(super) fn print_config(config: &CatalogConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key.bold(), value);
    }
}

pub(super) fn format_price(product: &Product, currency: &str) -> String {
    format!("{}{}", currency, product.formatted_price())
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_date(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}

fn format_time_ago(millis: i64) -> String {
    let Some(created) = Utc.timestamp_millis_opt(millis).single() else {
        return " ".repeat(TIME_WIDTH);
    };
    let duration = Utc::now().signed_duration_since(created);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
