use crate::core::Trend;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Heading,
    Count,
    Error,
    Subtle,
    Action,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Heading => style(text).bold(),
        StyleType::Count => style(text).dim(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
        StyleType::Action => style(text).blue().underlined(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Badge for a risk profile: Low green, Medium yellow, High red, anything else grey.
pub fn risk_cell(risk: &str) -> Cell {
    let color = match risk {
        "Low" => Color::Green,
        "Medium" => Color::Yellow,
        "High" => Color::Red,
        _ => Color::DarkGrey,
    };
    Cell::new(risk).fg(color)
}

pub fn shariah_cell(shariah: &str) -> Cell {
    let color = if shariah == "Islamic" {
        Color::Blue
    } else {
        Color::DarkGrey
    };
    Cell::new(shariah).fg(color)
}

/// Performance figure with a direction arrow, green when up and red when down.
pub fn performance_cell(text: &str) -> Cell {
    let trend = Trend::of(text);
    let color = match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    };
    Cell::new(format!("{} {text}", trend.arrow()))
        .fg(color)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

/// Creates a spinner shown while the fund list is loading.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .expect("spinner template is valid"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
