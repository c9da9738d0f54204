use docket::config::ExportConfig;
use docket::export::{self, ExportFormat};
use docket::table::TableSnapshot;
use pretty_assertions::assert_eq;

const COURTS_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<body>
  <table class="table table-striped">
    <thead>
      <tr>
        <th>Id</th><th>Title</th><th>Address</th><th>Edit</th>
      </tr>
    </thead>
    <tbody>
      <tr>
        <td>1</td><td>District Court</td><td>Main St 1</td>
        <td><button data-court-id="1">Delete</button></td>
      </tr>
      <tr>
        <td>2</td><td>Court of Appeals</td><td>Hill Rd 9</td>
        <td><button data-court-id="2">Delete</button></td>
      </tr>
    </tbody>
  </table>
</body>
</html>
"#;

#[test]
fn scrape_drop_action_column_export_csv() {
    let snapshot = TableSnapshot::from_html(COURTS_PAGE, ".table").unwrap();
    assert_eq!(snapshot.headers, vec!["Id", "Title", "Address", "Edit"]);
    assert_eq!(snapshot.rows.len(), 2);

    let temp = tempfile::tempdir().unwrap();
    let config = ExportConfig {
        format: ExportFormat::Csv,
        sheet_name: "Court Schedules".to_string(),
        output_dir: Some(temp.path().to_path_buf()),
    };

    let path = export::export_snapshot(snapshot, &config).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("court_schedules_"), "unexpected name {}", name);
    assert!(name.ends_with(".csv"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "Id,Title,Address\n1,District Court,Main St 1\n2,Court of Appeals,Hill Rd 9\n"
    );
}

#[test]
fn scrape_and_export_xlsx_buffer() {
    let grid = TableSnapshot::from_html(COURTS_PAGE, ".table")
        .unwrap()
        .without_action_column()
        .to_grid();
    assert_eq!(
        grid[0],
        vec!["Id".to_string(), "Title".to_string(), "Address".to_string()]
    );

    let buffer = export::workbook_buffer(&grid, "Court Schedules").unwrap();
    assert_eq!(&buffer[..2], b"PK");
}

#[test]
fn missing_table_fails_before_any_write() {
    let err = TableSnapshot::from_html("<html><body><p>empty</p></body></html>", ".table")
        .unwrap_err();
    assert_eq!(err.to_string(), "No table matched selector: .table");
}

#[test]
fn snapshot_grid_matches_spreadsheet_row_order() {
    let snapshot = TableSnapshot::from_html(COURTS_PAGE, ".table").unwrap();
    let grid = snapshot.without_action_column().to_grid();
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[1][1], "District Court");
    assert_eq!(grid[2][2], "Hill Rd 9");
}
