use crate::cli::ui::style::UiStyle;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }
}

/// Renders [`Table`] instances using simple padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render_lines(table: &Table, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        let total_width = table
            .columns
            .iter()
            .map(|col| col.width + 1)
            .sum::<usize>();

        let header = table
            .columns
            .iter()
            .map(|col| format!("{:width$} ", col.header, width = col.width))
            .collect::<String>();
        lines.push(style.highlight(header.trim_end()));
        lines.push(style.horizontal_line(total_width));

        for row in &table.rows {
            let line = table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let cell = row.get(idx).map(String::as_str).unwrap_or("");
                    format!("{:width$}", cell, width = column.width)
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line.trim_end().to_string());
        }
        lines
    }
}
