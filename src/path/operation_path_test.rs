// ABOUTME: Tests for operation path helpers.
// ABOUTME: Covers parent paths, segments, descendant checks and validation.

use super::*;
use crate::error::OperationError;

#[test]
fn test_parent_path_nested() {
    assert_eq!(parent_path("/A/B/C"), "/A/B");
    assert_eq!(parent_path("/A/B"), "/A");
}

#[test]
fn test_parent_path_root_is_empty() {
    assert_eq!(parent_path("/A"), "");
}

#[test]
fn test_segments_and_depth() {
    let segs: Vec<_> = segments("/Company/Department/ViewReports").collect();
    assert_eq!(segs, vec!["Company", "Department", "ViewReports"]);
    assert_eq!(depth("/Company/Department/ViewReports"), 3);
    assert_eq!(depth("/Root"), 1);
}

#[test]
fn test_is_descendant() {
    assert!(is_descendant("/A/B", "/A"));
    assert!(is_descendant("/A/B/C", "/A"));
    assert!(!is_descendant("/A", "/A"));
    assert!(!is_descendant("/AB", "/A"));
    assert!(!is_descendant("/A", "/A/B"));
}

#[test]
fn test_validate_accepts_well_formed() {
    assert!(validate("/A").is_ok());
    assert!(validate("/Sales/Report").is_ok());
}

#[test]
fn test_validate_rejects_malformed() {
    for bad in ["", "NoLeadingSlash", "/", "/A/", "/A//B"] {
        let err = validate(bad).unwrap_err();
        assert!(
            matches!(err, OperationError::InvalidArgument(_)),
            "expected InvalidArgument for {bad:?}"
        );
    }
}
