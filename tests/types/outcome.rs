use result_rail::convert::CapturedError;
use result_rail::types::{Failure, Outcome};

#[test]
fn payload_free_success_and_failure() {
    let success: Outcome = Outcome::success();
    let failure: Outcome = Outcome::failure("This failed");

    assert!(success.is_success());
    assert!(!success.is_failure());
    assert!(failure.is_failure());
    assert!(!failure.is_success());
}

#[test]
fn failure_message_defaults_to_empty() {
    let success: Outcome = Outcome::success();
    let bare: Outcome<(), bool> = Outcome::failure_value(true);

    assert_eq!(success.failure_message(), "");
    assert_eq!(bare.failure_message(), "");
}

#[test]
fn failure_message_is_exposed_for_both_failure_shapes() {
    let plain: Outcome = Outcome::failure("This failed");
    let valued: Outcome<(), bool> = Outcome::failure_with(true, "This failed");

    assert_eq!(plain.failure_message(), "This failed");
    assert_eq!(valued.failure_message(), "This failed");
}

#[test]
fn values_are_kept_on_both_sides() {
    let success: Outcome<&str> = Outcome::success_with("Scooby Doo");
    let failure: Outcome<(), &str> = Outcome::failure_value("Scooby Doo");

    assert_eq!(success.as_success(), Some(&"Scooby Doo"));
    assert_eq!(failure.as_failure().map(Failure::value), Some(&"Scooby Doo"));
    assert_eq!(failure.into_failure().map(Failure::into_value), Some("Scooby Doo"));
}

#[test]
fn into_result_and_from_result_agree() {
    let ok: Outcome<i32, &str> = Ok(1).into();
    let err: Outcome<i32, &str> = Err("bad").into();

    assert_eq!(ok.into_result(), Ok(1));
    assert_eq!(err.into_result(), Err(Failure::new("bad")));
}

#[test]
fn map_only_touches_success() {
    let doubled = Outcome::<i32, &str>::success_with(21).map(|n| n * 2);
    let untouched = Outcome::<i32, &str>::failure_with("x", "kept").map(|n| n * 2);

    assert_eq!(doubled.into_success(), Some(42));
    assert_eq!(untouched.failure_message(), "kept");
}

#[test]
fn and_then_captures_continuation_error() {
    let outcome = Outcome::<&str, CapturedError<String>>::success_with("abc")
        .and_then(|s| s.parse::<i32>().map_err(|e| e.to_string()));

    let failure = outcome.into_failure().unwrap();
    assert_eq!(failure.value().raised().map(String::as_str), Some("invalid digit found in string"));
    assert_eq!(failure.message(), "");
}

#[test]
fn and_then_skips_continuation_on_failure() {
    let mut called = false;
    let outcome = Outcome::<i32, CapturedError<String>>::failure_with("boom".to_string().into(), "early")
        .and_then(|n| {
            called = true;
            Ok::<_, String>(n + 1)
        });

    assert!(!called);
    assert_eq!(outcome.failure_message(), "early");
}

#[derive(Debug, PartialEq)]
enum StepError {
    Rejected(String),
    Crashed,
}

impl From<CapturedError<String>> for StepError {
    fn from(captured: CapturedError<String>) -> Self {
        match captured.into_raised() {
            Some(reason) => Self::Rejected(reason),
            None => Self::Crashed,
        }
    }
}

#[test]
fn custom_failure_payload_absorbs_continuation_errors() {
    let outcome = Outcome::<u32, StepError>::success_with(3)
        .and_then(|n| if n > 2 { Err(format!("{n} is too large")) } else { Ok(n) });

    let failure = outcome.into_failure().unwrap();
    assert_eq!(failure.into_value(), StepError::Rejected("3 is too large".to_string()));
}

#[cfg(feature = "std")]
#[test]
fn custom_failure_payload_absorbs_continuation_panics() {
    let outcome = Outcome::<u32, StepError>::success_with(3)
        .on_success(|_| -> Result<(), String> { panic!("step crashed") });

    assert_eq!(outcome.into_failure().map(Failure::into_value), Some(StepError::Crashed));
}

#[test]
fn failure_display_falls_back_when_message_is_empty() {
    assert_eq!(Failure::new(1).to_string(), "failure");
    assert_eq!(Failure::from_message("disk full").to_string(), "disk full");
}

#[test]
fn failure_map_keeps_message() {
    let failure = Failure::new(404).with_message("not found").map(|code| code + 1);

    assert_eq!(failure.into_parts(), (405, "not found".to_string()));
}
