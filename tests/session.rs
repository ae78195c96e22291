//! Session tests: one-time loading, reference statistics, full request path.

use std::io::Write;

use approx::assert_abs_diff_eq;
use tempfile::NamedTempFile;

use cropcast::{Outlook, RawInput, Session, SessionError, TableError, YieldSummary};

// =============================================================================
// Fixtures
// =============================================================================

const ARTIFACT_JSON: &str = r#"{
    "coefficients": [2.0, 0.1, 0.001, 500.0, -200.0, 10.0],
    "intercept": 100.0,
    "feature_names": [
        "Avg_Temp",
        "Avg_rainfall",
        "Pesticides(tonnes)",
        "Area_India",
        "Area_USA",
        "Item_Wheat"
    ]
}"#;

const CROP_CSV: &str = "\
Area,Item,Year,Avg_Temp,Avg_rainfall,Pesticides(tonnes),Yield
India,Wheat,2017,20.5,1050.0,14000.0,700.0
India,Wheat,2018,21.0,1100.0,15000.0,800.0
India,Maize,2018,22.0,900.0,12000.0,650.0
USA,Wheat,2018,15.0,800.0,40000.0,900.0
";

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

fn fixture_session() -> (Session, NamedTempFile, NamedTempFile) {
    let artifact = write_fixture(ARTIFACT_JSON);
    let csv = write_fixture(CROP_CSV);
    let session = Session::new(artifact.path(), csv.path());
    (session, artifact, csv)
}

// =============================================================================
// Resource loading
// =============================================================================

#[test]
fn resources_load_once_and_are_shared() {
    let (session, _artifact, _csv) = fixture_session();

    let first = session.model().unwrap();
    let second = session.model().unwrap();
    assert!(std::ptr::eq(first, second));

    let table_a = session.table().unwrap();
    let table_b = session.table().unwrap();
    assert!(std::ptr::eq(table_a, table_b));
    assert_eq!(table_a.len(), 4);
}

#[test]
fn broken_data_path_stays_typed() {
    let artifact = write_fixture(ARTIFACT_JSON);
    let session = Session::new(artifact.path(), "/nonexistent/data.csv");

    assert!(session.model().is_ok());
    assert!(matches!(
        session.table(),
        Err(SessionError::Table(TableError::Open { .. }))
    ));
}

// =============================================================================
// Reference statistics
// =============================================================================

#[test]
fn reference_average_over_filtered_selection() {
    let (session, _artifact, _csv) = fixture_session();

    let wheat = session.reference_average("India", Some("Wheat")).unwrap();
    assert_abs_diff_eq!(wheat.unwrap(), 750.0, epsilon = 1e-3);

    // No crop filter widens the selection.
    let india = session.reference_average("India", None).unwrap();
    assert_abs_diff_eq!(india.unwrap(), 716.6667, epsilon = 1e-3);

    // Empty selection has no reference.
    assert!(session
        .reference_average("France", None)
        .unwrap()
        .is_none());
}

#[test]
fn yield_summary_reports_extremes() {
    let (session, _artifact, _csv) = fixture_session();

    let summary: YieldSummary = session
        .yield_summary("India", Some("Wheat"))
        .unwrap()
        .unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.min, 700.0);
    assert_eq!(summary.max, 800.0);
}

// =============================================================================
// Full request path
// =============================================================================

#[test]
fn predict_with_historical_reference() {
    let (session, _artifact, _csv) = fixture_session();

    let input = RawInput::new()
        .add_numeric("Avg_Temp", 21.0)
        .add_numeric("Avg_rainfall", 1100.0)
        .add_numeric("Pesticides(tonnes)", 15000.0)
        .add_categorical("Area", "India")
        .add_categorical("Item", "Wheat");

    let reference = session.reference_average("India", Some("Wheat")).unwrap();
    let prediction = session.predict(&input, reference).unwrap();

    // 2*21 + 0.1*1100 + 0.001*15000 + 500 + 10 + 100 = 777
    assert_abs_diff_eq!(prediction.value, 777.0, epsilon = 1e-3);
    assert_eq!(prediction.outlook, Outlook::AboveAverage);
}

#[test]
fn predict_without_reference_has_unavailable_outlook() {
    let (session, _artifact, _csv) = fixture_session();

    let input = RawInput::new()
        .add_numeric("Avg_Temp", 21.0)
        .add_categorical("Area", "India");
    let prediction = session.predict(&input, None).unwrap();

    assert_eq!(prediction.outlook, Outlook::Unavailable);
}
