//! Spreadsheet export of a scraped table
//!
//! Builds a workbook from a row-major text grid and writes it under the
//! output directory, named with the current date and time.

use crate::config::ExportConfig;
use crate::table::TableSnapshot;
use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid table selector: {0}")]
    BadSelector(String),
    #[error("No table matched selector: {0}")]
    TableNotFound(String),
    #[error("Spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Serializes the grid into an xlsx workbook with a single named sheet.
pub fn workbook_buffer(grid: &[Vec<String>], sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (row_index, row) in grid.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            worksheet.write_string(row_index as u32, col_index as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serializes the grid as CSV.
pub fn csv_buffer(grid: &[Vec<String>]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in grid {
        writer.write_record(row)?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| ExportError::Io(std::io::Error::other(e.to_string())))
}

/// `court_schedules_<YYYY-MM-DD_HH-MM-SS>.<ext>` from local time.
pub fn export_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
    format!("court_schedules_{}.{}", now.format("%Y-%m-%d_%H-%M-%S"), format.extension())
}

fn output_dir(config: &ExportConfig) -> PathBuf {
    config
        .output_dir
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes the snapshot, minus its action column, to a spreadsheet file and
/// returns the path written.
pub fn export_snapshot(
    snapshot: TableSnapshot,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let grid = snapshot.without_action_column().to_grid();
    let buffer = match config.format {
        ExportFormat::Xlsx => workbook_buffer(&grid, &config.sheet_name)?,
        ExportFormat::Csv => csv_buffer(&grid)?,
    };

    let dir = output_dir(config);
    fs::create_dir_all(&dir)?;
    let path = dir.join(export_file_name(config.format, Local::now()));
    fs::write(&path, buffer)?;

    log::info!("Export completed successfully: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn grid() -> Vec<Vec<String>> {
        vec![
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        ]
    }

    #[test]
    fn file_name_carries_date_time_and_extension() {
        let moment = Local.with_ymd_and_hms(2024, 1, 15, 9, 5, 7).unwrap();
        assert_eq!(
            export_file_name(ExportFormat::Xlsx, moment),
            "court_schedules_2024-01-15_09-05-07.xlsx"
        );
        assert_eq!(
            export_file_name(ExportFormat::Csv, moment),
            "court_schedules_2024-01-15_09-05-07.csv"
        );
    }

    #[test]
    fn xlsx_buffer_is_a_zip_container() {
        let buffer = workbook_buffer(&grid(), "Court Schedules").unwrap();
        // xlsx is a zip archive, which starts with the PK magic
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn csv_buffer_matches_grid() {
        let buffer = csv_buffer(&grid()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "A,B,C\n1,2,3\n");
    }

    #[test]
    fn export_writes_under_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            format: ExportFormat::Csv,
            sheet_name: "Court Schedules".to_string(),
            output_dir: Some(temp.path().to_path_buf()),
        };
        let snapshot = TableSnapshot {
            headers: vec!["A".to_string(), "B".to_string(), "Edit".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string(), "x".to_string()]],
        };

        let path = export_snapshot(snapshot, &config).unwrap();
        assert!(path.starts_with(temp.path()));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "A,B\n1,2\n");
    }

    #[test]
    fn mime_types_match_formats() {
        assert_eq!(
            ExportFormat::Xlsx.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
    }
}
