use mdexport::domain::ExportTarget;

#[test]
fn given_known_target_names_when_parsing_then_all_are_accepted() {
    for name in ["email", "sms", "docx", "pdf", "gdoc"] {
        let target: ExportTarget = name.parse().expect("known target");
        assert_eq!(target.as_str(), name);
    }
}

#[test]
fn given_unknown_target_when_parsing_then_returns_error() {
    assert!("html".parse::<ExportTarget>().is_err());
    assert!("PDF".parse::<ExportTarget>().is_err());
}
