//! Summary report formatting
//!
//! Text renditions of the dashboard: the two headline figures, the monthly
//! trend as a bar chart, and the category distribution.

use crate::reports::Summary;

use super::report::{format_bar, format_percentage, separator};

const BAR_WIDTH: usize = 30;
const WIDTH: usize = 64;

/// Headline figures: total spent and top category
pub fn format_kpis(summary: &Summary, currency_symbol: &str) -> String {
    format!(
        "Total Spent:   {}\nTop Category:  {} ({})\nExpenses:      {}\n",
        summary.total.format_grouped(currency_symbol),
        summary.top_category,
        summary.top_category_amount().format_grouped(currency_symbol),
        summary.count
    )
}

/// Monthly totals as horizontal bars, oldest month first
pub fn format_monthly_chart(summary: &Summary, currency_symbol: &str) -> String {
    let trend = summary.monthly_trend();
    let max = trend
        .iter()
        .map(|m| m.amount.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::from("Monthly Expense Trend\n");
    for month in &trend {
        output.push_str(&format!(
            "  {}  {}  {}\n",
            month.month,
            format_bar(month.amount.as_f64(), max, BAR_WIDTH),
            month.amount.format_grouped(currency_symbol)
        ));
    }
    output
}

/// Category distribution, largest share first
pub fn format_category_chart(summary: &Summary, currency_symbol: &str) -> String {
    let shares = summary.category_shares();
    let label_width = shares
        .iter()
        .map(|s| s.category.label().len())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Category-wise Distribution\n");
    for share in &shares {
        output.push_str(&format!(
            "  {:<width$}  {}  {:>6}  {}\n",
            share.category.label(),
            format_bar(share.percentage, 100.0, BAR_WIDTH),
            format_percentage(share.percentage),
            share.amount.format_grouped(currency_symbol),
            width = label_width
        ));
    }
    output
}

/// The full summary block
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Expense Summary\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_kpis(summary, currency_symbol));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format_monthly_chart(summary, currency_symbol));
    output.push('\n');
    output.push_str(&format_category_chart(summary, currency_symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use crate::reports::aggregate_totals;
    use crate::services::FilteredView;
    use chrono::NaiveDate;

    fn summary() -> Summary {
        let expenses = vec![
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                Category::Food,
                Money::from_cents(5000),
            ),
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                Category::Food,
                Money::from_cents(7000),
            ),
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
                Category::Rent,
                Money::from_cents(150_000),
            ),
        ];
        aggregate_totals(&FilteredView::all(&expenses)).unwrap()
    }

    #[test]
    fn test_kpis() {
        let output = format_kpis(&summary(), "₹");
        assert!(output.contains("Total Spent:   ₹ 1,620.00"));
        assert!(output.contains("Top Category:  Rent (₹ 1,500.00)"));
        assert!(output.contains("Expenses:      3"));
    }

    #[test]
    fn test_monthly_chart_has_one_line_per_month() {
        let output = format_monthly_chart(&summary(), "₹");
        let lines: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("2024-01"));
        assert!(lines[0].ends_with("₹ 50.00"));
        assert!(lines[1].trim_start().starts_with("2024-02"));
        assert_eq!(lines[1].chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_category_chart_order_and_percentages() {
        let output = format_category_chart(&summary(), "₹");
        let lines: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Rent"));
        assert!(lines[0].contains("93%"));
        assert!(lines[1].contains("Food"));
        assert!(lines[1].contains("7.4%"));
    }

    #[test]
    fn test_full_summary_sections() {
        let output = format_summary(&summary(), "$");
        assert!(output.starts_with("Expense Summary\n"));
        assert!(output.contains("Monthly Expense Trend"));
        assert!(output.contains("Category-wise Distribution"));
    }
}
