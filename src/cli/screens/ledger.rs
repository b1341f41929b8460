use crate::cli::formatters::{format_amount, format_day_heading};
use crate::cli::ui::{Table, TableColumn, TableRenderer, UiStyle};
use crate::core::services::LedgerSnapshot;
use crate::domain::Day;

pub const EMPTY_DAY_MESSAGE: &str = "No transactions for this day";

/// Renders the ledger screen for one day as printable lines.
pub fn render(
    snapshot: &LedgerSnapshot,
    symbol: &str,
    show_week: bool,
    style: &UiStyle,
) -> Vec<String> {
    let mut lines = vec![style.header(&format!(
        "Daily Transactions: {}",
        format_day_heading(snapshot.selected_day)
    ))];

    if show_week {
        lines.push(week_strip(&snapshot.week, style));
    }
    lines.push(String::new());

    if snapshot.rows.is_empty() {
        lines.push(EMPTY_DAY_MESSAGE.to_string());
    } else {
        let mut table = Table::new(vec![
            TableColumn::new("#", 3),
            TableColumn::new("Category", 20),
            TableColumn::new("Amount", 12),
        ]);
        for (index, txn) in snapshot.rows.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                txn.category.clone(),
                format_amount(symbol, txn.amount),
            ]);
        }
        lines.extend(TableRenderer::render_lines(&table, style));
        lines.push(style.horizontal_line(0));
        for total in &snapshot.category_totals {
            lines.push(format!(
                "{}: {}",
                total.category,
                format_amount(symbol, total.total)
            ));
        }
    }

    lines.push(style.highlight(&format!(
        "Daily Total: {}",
        format_amount(symbol, snapshot.daily_total)
    )));
    lines
}

/// `< Tue 27 | ... | [Fri 01] | ... >`, with `*` marking today.
fn week_strip(week: &[Day], style: &UiStyle) -> String {
    let cells: Vec<String> = week
        .iter()
        .map(|day| {
            let mut label = format!("{} {}", day.name, day.date.format("%d"));
            if day.is_today {
                label.push('*');
            }
            if day.is_selected {
                style.highlight(&format!("[{}]", label))
            } else if day.is_today {
                style.today(&label)
            } else {
                label
            }
        })
        .collect();
    format!("< {} >", cells.join(" | "))
}
