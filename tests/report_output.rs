//! Tests for the CSV report writer (header gating, row content).

use redirect_validator::report::{ReportWriter, REPORT_HEADER};
use redirect_validator::resolver::{ResolutionResult, ResolutionStatus};

fn result(index: usize, status: ResolutionStatus) -> ResolutionResult {
    ResolutionResult {
        index,
        redirection_url: format!("http://short.ly/{index}"),
        destination_url: "https://example.com".to_string(),
        destination_domain: "example.com".to_string(),
        final_domain: "example.com".to_string(),
        status,
        status_code: "200".to_string(),
        final_url: "https://example.com/".to_string(),
        redirects_trace: "https://example.com/|200".to_string(),
    }
}

fn header_count(contents: &str) -> usize {
    contents
        .lines()
        .filter(|line| line.starts_with("Index,"))
        .count()
}

#[test]
fn test_header_written_once_for_single_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path).expect("create report");
    writer
        .write_result(&result(1, ResolutionStatus::Success))
        .expect("write row");
    drop(writer);

    let contents = std::fs::read_to_string(&path).expect("read report");
    assert_eq!(header_count(&contents), 1);
    assert_eq!(contents.lines().count(), 2);
    assert_eq!(contents.lines().next().unwrap(), REPORT_HEADER.join(","));
}

#[test]
fn test_header_written_once_for_many_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path).expect("create report");
    for index in 1..=5 {
        let status = if index % 2 == 0 {
            ResolutionStatus::Failure
        } else {
            ResolutionStatus::Success
        };
        writer.write_result(&result(index, status)).expect("write row");
    }
    drop(writer);

    let contents = std::fs::read_to_string(&path).expect("read report");
    assert_eq!(header_count(&contents), 1);
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn test_row_preserves_status_strings_and_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path).expect("create report");
    let mut r = result(1, ResolutionStatus::SkippedMultipleRedirects);
    r.redirects_trace = "https://a.example|301|https://b.example|200".to_string();
    writer.write_result(&r).expect("write row");
    drop(writer);

    let contents = std::fs::read_to_string(&path).expect("read report");
    let row = contents.lines().nth(1).expect("data row");
    assert!(row.contains("Skipped Multiple Redirects"));
    assert!(row.contains("https://a.example|301|https://b.example|200"));
}

#[test]
fn test_rows_written_in_index_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path).expect("create report");
    for index in 1..=3 {
        writer
            .write_result(&result(index, ResolutionStatus::Success))
            .expect("write row");
    }
    drop(writer);

    let contents = std::fs::read_to_string(&path).expect("read report");
    let indices: Vec<&str> = contents
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(indices, vec!["1", "2", "3"]);
}

#[test]
fn test_partial_result_leaves_fields_empty() {
    // A timeout records where the chain stalled and nothing else
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.csv");

    let mut writer = ReportWriter::create(&path).expect("create report");
    let r = ResolutionResult {
        index: 1,
        redirection_url: "http://short.ly/t".to_string(),
        destination_url: "https://example.com".to_string(),
        destination_domain: "example.com".to_string(),
        final_domain: "stall.example".to_string(),
        status: ResolutionStatus::SkippedTimeout,
        status_code: String::new(),
        final_url: String::new(),
        redirects_trace: String::new(),
    };
    writer.write_result(&r).expect("write row");
    drop(writer);

    let contents = std::fs::read_to_string(&path).expect("read report");
    let row = contents.lines().nth(1).expect("data row");
    assert_eq!(
        row,
        "1,http://short.ly/t,https://example.com,example.com,stall.example,Skipped Timeout,,,"
    );
}
