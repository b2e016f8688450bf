use super::*;
use std::io::Write;

fn parse(json: &str) -> ModuleArgs {
    serde_json::from_str(json).expect("valid module args")
}

#[test]
fn defaults_fill_missing_fields() {
    let spec = parse(r#"{"name": "nodejs"}"#).into_spec().expect("spec");

    assert_eq!(spec.name, "nodejs");
    assert_eq!(spec.url, None);
    assert_eq!(spec.state, DesiredState::Present);
    assert_eq!(spec.version, "latest");
    assert!(spec.set_default);
}

#[test]
fn empty_strings_and_null_take_defaults() {
    let spec = parse(r#"{"name": "nodejs", "url": "", "state": "", "version": "", "default": null}"#)
        .into_spec()
        .expect("spec");

    assert_eq!(spec.url, None);
    assert_eq!(spec.state, DesiredState::Present);
    assert_eq!(spec.version, "latest");
    assert!(spec.set_default);
}

#[test]
fn explicit_values_are_kept() {
    let spec = parse(
        r#"{"name": "nodejs", "url": "https://github.com/x/y", "state": "Absent",
            "version": "18.0.0", "default": false}"#,
    )
    .into_spec()
    .expect("spec");

    assert_eq!(spec.url.as_deref(), Some("https://github.com/x/y"));
    assert_eq!(spec.state, DesiredState::Absent);
    assert_eq!(spec.version, "18.0.0");
    assert!(!spec.set_default);
}

#[test]
fn unknown_state_survives_to_reconciler() {
    let spec = parse(r#"{"name": "nodejs", "state": "bogus"}"#)
        .into_spec()
        .expect("state is checked during reconciliation");
    assert_eq!(spec.state, DesiredState::Unknown("bogus".to_string()));
}

#[test]
fn ansible_internal_keys_are_ignored() {
    let args = parse(r#"{"name": "golang", "_ansible_check_mode": false, "_ansible_verbosity": 0}"#);
    assert_eq!(args.name.as_deref(), Some("golang"));
}

#[test]
fn missing_name_is_rejected() {
    let err = parse(r#"{"state": "present"}"#).into_spec().unwrap_err();
    assert!(matches!(err, AsdfError::MalformedRequest(_)));
    assert_eq!(err.to_string(), "'name' needs to be set.");
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"name": "ruby", "version": "3.3.0"}}"#).expect("write");

    let args = ModuleArgs::load(file.path()).expect("load");
    assert_eq!(args.name.as_deref(), Some("ruby"));
    assert_eq!(args.version.as_deref(), Some("3.3.0"));
}

#[test]
fn load_rejects_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "name: ruby").expect("write");

    let err = ModuleArgs::load(file.path()).unwrap_err();
    assert!(matches!(err, AsdfError::ArgsFileInvalid { .. }));
    assert!(err.to_string().starts_with("Configuration file not valid JSON: "));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    let err = ModuleArgs::load(&path).unwrap_err();
    assert!(matches!(err, AsdfError::ArgsFileUnreadable { .. }));
}

#[test]
fn wrong_field_type_is_invalid_json() {
    assert!(serde_json::from_str::<ModuleArgs>(r#"{"name": 5}"#).is_err());
    assert!(serde_json::from_str::<ModuleArgs>(r#"{"name": "x", "default": "yes"}"#).is_err());
}

#[test]
fn version_is_ignored_for_absent() {
    let spec = parse(r#"{"name": "nodejs", "state": "absent", "version": "--force"}"#)
        .into_spec()
        .expect("removal never uses the version");
    assert_eq!(spec.state, DesiredState::Absent);
}

#[test]
fn version_is_checked_for_install_states() {
    for state in ["present", "latest"] {
        let json = format!(r#"{{"name": "nodejs", "state": "{state}", "version": "1.0 2.0"}}"#);
        let err = parse(&json).into_spec().unwrap_err();
        assert!(matches!(err, AsdfError::MalformedRequest(_)), "{state}");
    }
}
