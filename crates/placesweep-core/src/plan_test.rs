use std::io::Write;

use super::*;

fn write_plan(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write plan");
    file
}

#[test]
fn default_plan_covers_eight_neighbourhoods_and_three_types() {
    let plan = SweepPlan::default();
    assert_eq!(plan.locations.len(), 8);
    assert_eq!(plan.place_types, ["supermarket", "grocery_store", "store"]);
    assert_eq!(plan.search_count(), 24);
    let radius_delta = (plan.radius_meters - DEFAULT_RADIUS_METERS).abs();
    assert!(radius_delta < f64::EPSILON);
    assert_eq!(plan.max_results, MAX_RESULT_CAP);
    assert_eq!(plan.locations[0].name, "Midtown Manhattan");
    assert_eq!(
        plan.locations[0].location,
        serde_json::json!([40.758, -73.9855])
    );
}

#[test]
fn default_plan_passes_validation() {
    assert!(validate_plan(&SweepPlan::default()).is_ok());
}

#[test]
fn search_count_with_no_types_is_one_per_location() {
    let plan = SweepPlan {
        place_types: vec![],
        ..SweepPlan::default()
    };
    assert_eq!(plan.search_count(), 8);
}

#[test]
fn load_plan_accepts_pairs_and_strings() {
    let file = write_plan(
        r#"
radius_meters: 500
locations:
  - name: Columbia
    location: [40.8075, -73.9626]
  - name: Harlem
    location: "40.8116,-73.9465"
place_types: [supermarket]
"#,
    );

    let plan = load_plan(file.path()).expect("plan should load");
    assert_eq!(plan.locations.len(), 2);
    assert_eq!(plan.language, "en");
    assert_eq!(plan.max_results, 20);
    assert_eq!(
        plan.locations[1].location,
        serde_json::json!("40.8116,-73.9465")
    );
}

#[test]
fn load_plan_fills_omitted_settings_from_request_defaults() {
    let file = write_plan(
        r#"
locations:
  - name: Columbia
    location: [40.8075, -73.9626]
place_types: []
"#,
    );

    let plan = load_plan(file.path()).expect("plan should load");
    let radius_delta = (plan.radius_meters - DEFAULT_RADIUS_METERS).abs();
    assert!(radius_delta < f64::EPSILON);
    assert_eq!(plan.max_results, MAX_RESULT_CAP);
    assert_eq!(plan.language, "en");
}

#[test]
fn load_plan_rejects_duplicate_location_names() {
    let file = write_plan(
        r"
locations:
  - name: SoHo
    location: [40.7178, -73.9967]
  - name: soho
    location: [40.7178, -73.9967]
place_types: [store]
",
    );

    let err = load_plan(file.path()).unwrap_err();
    assert!(err.to_string().contains("duplicate location name"), "{err}");
}

#[test]
fn load_plan_rejects_empty_location_list() {
    let file = write_plan("locations: []\nplace_types: [store]\n");
    let err = load_plan(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn load_plan_rejects_blank_place_type() {
    let file = write_plan(
        r#"
locations:
  - name: Tribeca
    location: [40.706, -74.0088]
place_types: ["supermarket", " "]
"#,
    );
    let err = load_plan(file.path()).unwrap_err();
    assert!(err.to_string().contains("place type"), "{err}");
}

#[test]
fn load_plan_reports_missing_file() {
    let err = load_plan(Path::new("/nonexistent/plan.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::PlanFileIo { .. }));
}

#[test]
fn load_plan_reports_malformed_yaml() {
    let file = write_plan("locations: [unterminated\n");
    let err = load_plan(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::PlanFileParse(_)));
}
