use mdexport::domain::JobId;

#[test]
fn given_generated_id_when_inspecting_then_has_prefix_timestamp_and_suffix() {
    let id = JobId::generate();
    let parts: Vec<&str> = id.as_str().split('_').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "job");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn given_two_generated_ids_when_compared_then_are_unique() {
    assert_ne!(JobId::generate(), JobId::generate());
}

#[test]
fn given_existing_string_when_wrapping_then_display_matches() {
    let id = JobId::from_string("job_1_abcdefghi");
    assert_eq!(id.to_string(), "job_1_abcdefghi");
}
