use result_rail::traits::{Classify, OutcomeExt};
use result_rail::types::{Failure, Outcome, Status, StatusResult};
use std::rc::Rc;
use std::sync::Arc;

fn classify<C: Classify + ?Sized>(value: &C) -> (bool, bool) {
    (value.is_success(), value.is_failure())
}

#[test]
fn status_is_tri_state() {
    assert_eq!(classify(&Status::Success), (true, false));
    assert_eq!(classify(&Status::Failure), (false, true));
    assert_eq!(classify(&Status::Undefined), (false, false));
}

#[test]
fn status_result_follows_its_status() {
    assert_eq!(classify(&StatusResult::<()>::with_status(Status::Success)), (true, false));
    assert_eq!(classify(&StatusResult::<()>::with_status(Status::Failure)), (false, true));
    assert_eq!(classify(&StatusResult::<()>::new()), (false, false));
}

#[test]
fn outcome_and_result_are_binary() {
    assert_eq!(classify(&Outcome::<()>::success()), (true, false));
    assert_eq!(classify(&Outcome::<()>::failure("no")), (false, true));
    assert_eq!(classify(&Ok::<u8, ()>(1)), (true, false));
    assert_eq!(classify(&Err::<u8, ()>(())), (false, true));
}

#[test]
fn failure_is_never_a_success() {
    assert_eq!(classify(&Failure::from_message("x")), (false, true));
}

#[test]
fn wrappers_delegate() {
    let undefined = StatusResult::<()>::new();
    let boxed: Box<dyn Classify> = Box::new(StatusResult::<()>::new());
    let shared: Arc<dyn Classify> = Arc::new(Status::Failure);
    let local: Rc<dyn Classify> = Rc::new(Outcome::<()>::success());

    assert_eq!(classify(&&undefined), (false, false));
    assert_eq!(classify(&boxed), (false, false));
    assert_eq!(classify(&shared), (false, true));
    assert_eq!(classify(&local), (true, false));
}

#[test]
fn values_wrap_into_outcomes() {
    let success: Outcome<&str> = "Scooby Doo".to_success();
    let failure: Outcome<(), &str> = "Scooby Doo".to_failure();
    let not_found: Outcome<(), i32> = 404.to_failure_with("Page not found");

    assert_eq!(success.as_success(), Some(&"Scooby Doo"));
    assert_eq!(failure.failure_message(), "");
    assert_eq!(not_found.failure_message(), "Page not found");
    assert_eq!(not_found.into_failure().map(Failure::into_value), Some(404));
}

#[test]
fn guard_map_captures_errors() {
    let parsed = "8".guard_map(|s: &str| s.parse::<u16>());
    let failed = "eight".guard_map(|s: &str| s.parse::<u16>());

    assert_eq!(parsed.into_success(), Some(8));
    assert!(failed.into_failure().unwrap().value().raised().is_some());
}
