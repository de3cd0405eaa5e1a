//! Report formatting for terminal output
//!
//! Text renditions of the two charts: a horizontal bar per category, and a
//! bar per day for spending over time.

use crate::models::Money;
use crate::reports::{CategoryReport, DailyReport};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn bar_for(amount: Money, max: Money, width: usize) -> String {
    format_bar(amount.as_f64(), max.as_f64(), width)
}

/// Render the category chart
pub fn format_category_chart(report: &CategoryReport, symbol: &str, width: usize) -> String {
    if report.is_empty() {
        return "No expenses to plot.\n".to_string();
    }

    let max = report.max_total();
    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(width + 40));
    output.push('\n');

    for row in &report.rows {
        output.push_str(&format!(
            "{:<14} {} {:>12} {:>6}  ({} {})\n",
            row.category.name(),
            bar_for(row.total, max, width),
            row.total.format_with_symbol(symbol),
            format_percentage(row.percentage),
            row.count,
            if row.count == 1 { "expense" } else { "expenses" }
        ));
    }

    output.push_str(&separator(width + 40));
    output.push('\n');
    output.push_str(&format!(
        "{:<14} {} {:>12}\n",
        "Total",
        " ".repeat(width),
        report.grand_total.format_with_symbol(symbol)
    ));
    output
}

/// Render the spending-over-time chart
pub fn format_daily_chart(
    report: &DailyReport,
    symbol: &str,
    date_format: &str,
    width: usize,
) -> String {
    if report.is_empty() {
        return "No expenses to plot.\n".to_string();
    }

    let max = report.max_total();
    let mut output = String::new();
    output.push_str("Daily Expenses Over Time");
    if let (Some(first), Some(last)) = (report.first_date(), report.last_date()) {
        output.push_str(&format!(
            " ({} to {})",
            first.format(date_format),
            last.format(date_format)
        ));
    }
    output.push('\n');
    output.push_str(&separator(width + 28));
    output.push('\n');

    for (date, total) in &report.days {
        output.push_str(&format!(
            "{:<12} {} {:>12}\n",
            date.format(date_format).to_string(),
            bar_for(*total, max, width),
            total.format_with_symbol(symbol)
        ));
    }

    output.push_str(&separator(width + 28));
    output.push('\n');
    output.push_str(&format!(
        "{} day(s), average {} per day\n",
        report.days.len(),
        report.average().format_with_symbol(symbol)
    ));
    output
}
