use result_rail::types::Status;
use Status::{Failure, Success, Undefined};

#[test]
fn default_status_is_undefined() {
    assert_eq!(Status::default(), Undefined);
    assert!(Undefined.is_undefined());
    assert!(!Undefined.is_success());
    assert!(!Undefined.is_failure());
}

#[test]
fn merge_of_empty_sequence_is_success() {
    assert_eq!(Status::merge([]), Success);
}

#[test]
fn merge_prefers_failure_over_everything() {
    assert_eq!(Status::merge([Success, Undefined, Failure]), Failure);
    assert_eq!(Status::merge([Failure, Success]), Failure);
}

#[test]
fn merge_with_undefined_and_no_failure_is_undefined() {
    assert_eq!(Status::merge([Success, Undefined]), Undefined);
    assert_eq!(Status::merge([Undefined]), Undefined);
}

#[test]
fn display_uses_lowercase_labels() {
    assert_eq!(Undefined.to_string(), "undefined");
    assert_eq!(Success.to_string(), "success");
    assert_eq!(Failure.to_string(), "failure");
}
