use crate::cli::formatters::format_amount;
use crate::cli::ui::{Table, TableColumn, TableRenderer, UiStyle};
use crate::domain::Category;

pub fn render(categories: &[Category], symbol: &str, style: &UiStyle) -> Vec<String> {
    let mut lines = vec![style.header("Categories")];
    if categories.is_empty() {
        lines.push("No categories yet. Use `category add <name> <budget>`.".to_string());
        return lines;
    }
    let mut table = Table::new(vec![
        TableColumn::new("#", 3),
        TableColumn::new("Category Name", 24),
        TableColumn::new("Budget", 12),
    ]);
    for (index, category) in categories.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            category.name.clone(),
            format_amount(symbol, category.budget),
        ]);
    }
    lines.extend(TableRenderer::render_lines(&table, style));
    lines
}
