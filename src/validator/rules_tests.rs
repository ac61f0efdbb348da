use serde_json::Value;

use super::*;

fn messages(check: impl FnOnce(&mut Violations)) -> Vec<String> {
    let mut violations = Violations::new();
    check(&mut violations);
    violations.into_vec()
}

// =============================================================================
// Timestamp
// =============================================================================

#[test]
fn timestamp_accepts_number_and_numeric_string() {
    assert!(messages(|v| check_timestamp(&FieldValue::Integer(1_551_140_352), v)).is_empty());
    assert!(messages(|v| check_timestamp(&FieldValue::from("1551140352"), v)).is_empty());
    assert!(messages(|v| check_timestamp(&FieldValue::Integer(0), v)).is_empty());
}

#[test]
fn timestamp_rejects_unconvertible_values() {
    let mut violations = Violations::new();
    check_timestamp(&FieldValue::Other(Value::Null), &mut violations);
    check_timestamp(&FieldValue::from(""), &mut violations);
    check_timestamp(&FieldValue::from("abcde"), &mut violations);
    assert_eq!(violations.len(), 3);
    assert_eq!(violations.as_slice()[2], "Invalid timestamp (abcde)");
}

#[test]
fn timestamp_rejects_unrepresentable_seconds() {
    let huge = FieldValue::Integer(i128::from(i64::MAX));
    assert_eq!(
        messages(|v| check_timestamp(&huge, v)),
        vec![format!("Invalid timestamp ({})", i64::MAX)]
    );
}

// =============================================================================
// Elapsed time
// =============================================================================

#[test]
fn elapsed_time_accepts_zero_and_positive() {
    assert!(messages(|v| check_elapsed_time(&FieldValue::Integer(10), v)).is_empty());
    assert!(messages(|v| check_elapsed_time(&FieldValue::from("10"), v)).is_empty());
    assert!(messages(|v| check_elapsed_time(&FieldValue::Integer(0), v)).is_empty());
}

#[test]
fn elapsed_time_rejects_negative_and_non_numeric() {
    let mut violations = Violations::new();
    check_elapsed_time(&FieldValue::Integer(-1), &mut violations);
    check_elapsed_time(&FieldValue::Other(Value::Null), &mut violations);
    check_elapsed_time(&FieldValue::from("abc"), &mut violations);
    check_elapsed_time(&FieldValue::from(""), &mut violations);
    assert_eq!(violations.len(), 4);
    assert_eq!(violations.as_slice()[0], "Invalid time value (-1)");
}

// =============================================================================
// SHA-256
// =============================================================================

#[test]
fn sha_accepts_valid_digest() {
    let sha = "682bf8c6b34650fd70339679de1b0ea8b908aeb65b44cc829c7126444229dae6";
    assert!(messages(|v| check_sha256(sha, v)).is_empty());
    assert!(messages(|v| check_sha256(&sha.to_uppercase(), v)).is_empty());
}

#[test]
fn sha_wrong_length_reports_length_only() {
    let short = "682bf8c6b34650fd70339679de1b0ea8b908aeb65b44cc829c71264442e6";
    let long = "682bf8c6b34650fd70339679de1b0ea8b908aeb65b44cc829c7126444243432344324e6";
    assert_eq!(
        messages(|v| check_sha256(short, v)),
        vec![format!("Invalid length for sha256 ({short})")]
    );
    assert_eq!(messages(|v| check_sha256(long, v)).len(), 1);
    // Non-hex content at the wrong length is still only a length problem.
    assert_eq!(
        messages(|v| check_sha256("zz", v)),
        vec!["Invalid length for sha256 (zz)".to_string()]
    );
    assert_eq!(messages(|v| check_sha256("", v)).len(), 1);
}

#[test]
fn sha_non_hex_character() {
    let sha = "682bf8c6b34650fd70339679de1b0ea8b908aeb6Hb44cc829c7126444229dae6";
    assert_eq!(
        messages(|v| check_sha256(sha, v)),
        vec![format!("Invalid sha256 value ({sha})")]
    );
}

// =============================================================================
// Path
// =============================================================================

#[test]
fn path_matches_trailing_component() {
    assert!(messages(|v| check_path("/test/path/foo.exe", "foo.exe", v)).is_empty());
    assert!(messages(|v| check_path("foo.exe", "foo.exe", v)).is_empty());
    assert!(messages(|v| check_path("C:\\Users\\me\\foo.exe", "foo.exe", v)).is_empty());
    assert!(messages(|v| check_path("/test/path/foo.exe/", "foo.exe", v)).is_empty());
    assert!(messages(|v| check_path("mixed\\dir/foo.exe", "foo.exe", v)).is_empty());
}

#[test]
fn path_mismatch() {
    assert_eq!(
        messages(|v| check_path("/test/path/foo", "foo.exe", v)),
        vec!["Path '/test/path/foo' does not match the given filename 'foo.exe'".to_string()]
    );
}

#[test]
fn path_comparison_is_exact() {
    assert_eq!(messages(|v| check_path("/tmp/FOO.exe", "foo.exe", v)).len(), 1);
    assert_eq!(messages(|v| check_path("", "foo.exe", v)).len(), 1);
    assert_eq!(messages(|v| check_path("///", "", v)).len(), 1);
}

#[test]
fn last_component_ignores_empty_segments() {
    assert_eq!(last_component("/a/b/"), Some("b"));
    assert_eq!(last_component("a"), Some("a"));
    assert_eq!(last_component("\\"), None);
}

// =============================================================================
// Disposition
// =============================================================================

#[test]
fn disposition_accepts_known_codes() {
    for code in [1, 2, 3] {
        assert!(messages(|v| check_disposition(&FieldValue::Integer(code), v)).is_empty());
    }
    assert!(messages(|v| check_disposition(&FieldValue::from("2"), v)).is_empty());
}

#[test]
fn disposition_rejects_everything_else() {
    let mut violations = Violations::new();
    check_disposition(&FieldValue::from("a"), &mut violations);
    check_disposition(&FieldValue::from("0.5"), &mut violations);
    check_disposition(&FieldValue::from("4"), &mut violations);
    check_disposition(&FieldValue::Integer(0), &mut violations);
    check_disposition(&FieldValue::Float(1.0), &mut violations);
    check_disposition(&FieldValue::Other(Value::Bool(true)), &mut violations);
    assert_eq!(violations.len(), 6);
    assert_eq!(violations.as_slice()[1], "Disposition is invalid (0.5)");
}

#[test]
fn disposition_codes() {
    assert_eq!(Disposition::from_code(1), Some(Disposition::Malicious));
    assert_eq!(Disposition::from_code(2), Some(Disposition::Clean));
    assert_eq!(Disposition::from_code(3), Some(Disposition::Unknown));
    assert_eq!(Disposition::from_code(-1), None);
}

// =============================================================================
// UUID
// =============================================================================

#[test]
fn uuid_valid() {
    let pattern = UuidPattern::default();
    assert!(
        messages(|v| check_uuid("36b2355d-1eda-4a02-82c9-e0ee1fcea334", &pattern, v)).is_empty()
    );
}

#[test]
fn uuid_bad_version_is_format_violation() {
    let pattern = UuidPattern::default();
    assert_eq!(
        messages(|v| check_uuid("36b2355d-1eda-9a02-82c9-e0ee1fcea334", &pattern, v)),
        vec!["Invalid UUID format (36b2355d-1eda-9a02-82c9-e0ee1fcea334)".to_string()]
    );
}

#[test]
fn uuid_wrong_length_never_reports_format() {
    let pattern = UuidPattern::default();
    for candidate in ["", "36b2355d-1eda-9a02-82c9-e0ee1fcea", "not a uuid at all, but quite long"] {
        let found = messages(|v| check_uuid(candidate, &pattern, v));
        assert_eq!(found, vec![format!("Invalid UUID length ({candidate})")]);
    }
}

// =============================================================================
// File name
// =============================================================================

#[test]
fn split_simple_name() {
    let split = split_file_name("foo.txt").unwrap();
    assert_eq!(split.name, "foo");
    assert_eq!(split.extension, ".txt");
}

#[test]
fn split_uses_last_dot() {
    let split = split_file_name("archive.tar.gz").unwrap();
    assert_eq!(split.name, "archive.tar");
    assert_eq!(split.extension, ".gz");
}

#[test]
fn split_without_extension() {
    assert_eq!(split_file_name("foo"), None);
    assert_eq!(split_file_name("foo."), None);
    assert_eq!(split_file_name(".bashrc"), None);
    assert_eq!(split_file_name("..txt"), None);
    assert_eq!(split_file_name(""), None);
}

#[test]
fn split_keeps_leading_dot_names_with_extension() {
    let split = split_file_name(".config.toml").unwrap();
    assert_eq!(split.name, ".config");
    assert_eq!(split.extension, ".toml");
}

#[test]
fn check_file_name_records_violation() {
    let mut violations = Violations::new();
    assert_eq!(check_file_name("foo", &mut violations), None);
    assert_eq!(violations.as_slice(), ["Filename has no extension (foo)"]);
}
