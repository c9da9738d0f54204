//! Table snapshot scraped from a server-rendered page
//!
//! A transient row-major text grid read from the first table matching a
//! selector; discarded after rendering or export.

use crate::export::ExportError;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn parse_selector(source: &str) -> Result<Selector, ExportError> {
    Selector::parse(source).map_err(|_| ExportError::BadSelector(source.to_string()))
}

fn cell_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl TableSnapshot {
    /// Reads the first element matching `selector` out of `html`.
    pub fn from_html(html: &str, selector: &str) -> Result<Self, ExportError> {
        let table_selector = parse_selector(selector)?;
        let header_selector = parse_selector("thead th")?;
        let row_selector = parse_selector("tbody tr")?;
        let cell_selector = parse_selector("td")?;

        let document = Html::parse_document(html);
        let table = document
            .select(&table_selector)
            .next()
            .ok_or_else(|| ExportError::TableNotFound(selector.to_string()))?;

        let headers = table.select(&header_selector).map(cell_text).collect();
        let rows = table
            .select(&row_selector)
            .map(|row| row.select(&cell_selector).map(cell_text).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Drops the trailing column, which the templates use for edit/delete
    /// buttons, from the header and every row.
    pub fn without_action_column(mut self) -> Self {
        self.headers.pop();
        for row in &mut self.rows {
            row.pop();
        }
        self
    }

    /// Header row followed by the body rows.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.headers.clone());
        grid.extend(self.rows.iter().cloned());
        grid
    }

    /// Plain-text rendering with aligned columns.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                if i >= widths.len() {
                    widths.push(width);
                } else if width > widths[i] {
                    widths[i] = width;
                }
            }
        }

        let render_row = |cells: &[String]| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if !self.headers.is_empty() {
            lines.push(render_row(&self.headers));
            lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
        }
        for row in &self.rows {
            lines.push(render_row(row));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <html><body>
        <table class="table">
          <thead>
            <tr><th>A</th><th>B</th><th>C</th><th>Edit</th></tr>
          </thead>
          <tbody>
            <tr><td>1</td><td>2</td><td>3</td><td><button>Delete</button></td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn scrapes_headers_and_rows() {
        let snapshot = TableSnapshot::from_html(PAGE, ".table").unwrap();
        assert_eq!(snapshot.headers, vec!["A", "B", "C", "Edit"]);
        assert_eq!(snapshot.rows, vec![vec!["1", "2", "3", "Delete"]]);
    }

    #[test]
    fn dropping_action_column_matches_export_contract() {
        let grid =
            TableSnapshot::from_html(PAGE, ".table").unwrap().without_action_column().to_grid();
        assert_eq!(
            grid,
            vec![
                vec!["A".to_string(), "B".to_string(), "C".to_string()],
                vec!["1".to_string(), "2".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = TableSnapshot::from_html("<html><body></body></html>", ".table").unwrap_err();
        assert!(matches!(err, ExportError::TableNotFound(_)));
    }

    #[test]
    fn bad_selector_is_an_error() {
        let err = TableSnapshot::from_html(PAGE, ":::nope").unwrap_err();
        assert!(matches!(err, ExportError::BadSelector(_)));
    }

    #[test]
    fn nested_markup_in_cells_is_flattened() {
        let html = r#"
            <table class="table">
              <thead><tr><th> Title </th></tr></thead>
              <tbody><tr><td><a href="/x">District <b>Court</b></a></td></tr></tbody>
            </table>
        "#;
        let snapshot = TableSnapshot::from_html(html, ".table").unwrap();
        assert_eq!(snapshot.headers, vec!["Title"]);
        assert_eq!(snapshot.rows, vec![vec!["District Court"]]);
    }

    #[test]
    fn render_aligns_columns() {
        let snapshot = TableSnapshot {
            headers: vec!["Id".to_string(), "Title".to_string()],
            rows: vec![
                vec!["1".to_string(), "District Court".to_string()],
                vec!["12".to_string(), "Appeals".to_string()],
            ],
        };
        let rendered = snapshot.render();
        assert_eq!(
            rendered,
            "Id  Title\n--  --------------\n1   District Court\n12  Appeals"
        );
    }
}
