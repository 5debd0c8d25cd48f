use result_rail::aggregate::CompositeResult;
use result_rail::traits::Classify;
use result_rail::types::{ResultBuilder, ResultError, Status, StatusResult};

const ALL: [Status; 3] = [Status::Undefined, Status::Success, Status::Failure];

fn with_value(value: i32) -> StatusResult<i32> {
    StatusResult::with_status_and_value(Status::Success, value)
}

fn expected_status(statuses: &[Status]) -> Status {
    if statuses.contains(&Status::Failure) {
        Status::Failure
    } else if statuses.iter().all(|status| *status == Status::Success) {
        Status::Success
    } else {
        Status::Undefined
    }
}

fn sequences(max_len: usize) -> Vec<Vec<Status>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix: &Vec<Status>| {
                ALL.into_iter().map(move |status| {
                    let mut next = prefix.clone();
                    next.push(status);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn status_merges_every_short_sequence() {
    let cases = sequences(4);
    assert_eq!(cases.len(), 1 + 3 + 9 + 27 + 81);

    for statuses in cases {
        let composite: CompositeResult<(), String> =
            statuses.iter().copied().map(StatusResult::with_status).collect();

        assert_eq!(composite.status(), expected_status(&statuses), "statuses: {statuses:?}");
    }
}

#[test]
fn empty_composite_is_success() {
    let composite = CompositeResult::<(), String>::new();

    assert_eq!(composite.status(), Status::Success);
    assert!(composite.is_success());
}

#[test]
fn messages_are_concatenated_in_element_order() {
    let composite: CompositeResult<(), &str> = [
        ResultBuilder::success().with_messages(["a", "b"]).build(),
        ResultBuilder::failure().build(),
        ResultBuilder::undefined().with_message("c").build(),
    ]
    .into_iter()
    .collect();

    let messages: Vec<_> = composite.messages().copied().collect();
    assert_eq!(messages, ["a", "b", "c"]);
    assert_eq!(composite.messages().len(), 3);
}

#[test]
fn equal_values_merge() {
    let composite = CompositeResult::from(vec![with_value(123), with_value(123)]);

    assert_eq!(composite.value(), Ok(Some(&123)));
}

#[test]
fn differing_values_are_inconsistent() {
    let composite = CompositeResult::from(vec![with_value(123), with_value(0)]);

    assert_eq!(composite.value(), Err(ResultError::InconsistentValues));
}

#[test]
fn missing_and_present_values_are_inconsistent() {
    let composite = CompositeResult::from(vec![with_value(123), StatusResult::new()]);

    assert_eq!(composite.value(), Err(ResultError::InconsistentValues));
}

#[test]
fn empty_composite_has_no_value() {
    let composite = CompositeResult::<i32, String>::new();

    assert_eq!(composite.value(), Err(ResultError::EmptyAggregate));
}

#[test]
fn single_element_value_is_returned() {
    let composite = CompositeResult::from(vec![with_value(123)]);

    assert_eq!(composite.value(), Ok(Some(&123)));
}

#[test]
fn values_reflect_appends() {
    let mut composite = CompositeResult::from(vec![with_value(1)]);
    assert_eq!(composite.values().collect::<Vec<_>>(), [Some(&1)]);

    composite.push(with_value(1));
    composite.results_mut().push(StatusResult::new());

    assert_eq!(composite.values().collect::<Vec<_>>(), [Some(&1), Some(&1), None]);
    assert_eq!(composite.values().rev().next(), Some(None));
}

#[test]
fn queries_track_the_live_list() {
    let mut composite = CompositeResult::from(vec![with_value(5)]);
    assert_eq!(composite.status(), Status::Success);

    composite.extend([StatusResult::with_status_and_value(Status::Failure, 5)]);

    assert_eq!(composite.status(), Status::Failure);
    assert!(composite.is_failure());
    assert_eq!(composite.value(), Ok(Some(&5)));
}

#[test]
fn any_matches_exact_status() {
    let composite: CompositeResult<(), String> =
        [Status::Success, Status::Undefined].into_iter().map(StatusResult::with_status).collect();

    assert!(composite.any(Status::Success));
    assert!(composite.any(Status::Undefined));
    assert!(!composite.any(Status::Failure));
}
