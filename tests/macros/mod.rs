use result_rail::convert::CapturedError;
use result_rail::guarded;
use result_rail::types::Outcome;
use std::num::ParseIntError;

#[test]
fn guarded_expression_success() {
    let outcome = guarded!("42".parse::<i32>());

    assert_eq!(outcome.into_success(), Some(42));
}

#[test]
fn guarded_expression_failure() {
    let outcome = guarded!("forty-two".parse::<i32>());

    assert!(outcome.is_failure());
    assert_eq!(outcome.failure_message(), "");
}

#[test]
fn guarded_block_short_circuits_on_first_error() {
    let mut reached = false;
    let outcome: Outcome<i32, CapturedError<ParseIntError>> = guarded!({
        let a: i32 = "1".parse()?;
        let b: i32 = "two".parse()?;
        reached = true;
        Ok(a + b)
    });

    assert!(!reached);
    let captured = outcome.into_failure().unwrap().into_value();
    assert_eq!(captured.to_string(), "invalid digit found in string");
}

#[test]
fn guarded_block_success() {
    let outcome = guarded!({
        let values = ["1", "2", "3"].map(str::parse::<u32>);
        values.into_iter().sum::<Result<u32, _>>()
    });

    assert_eq!(outcome.into_success(), Some(6));
}

#[cfg(feature = "std")]
#[test]
fn guarded_captures_panics() {
    let outcome = guarded!({
        let empty: Vec<u8> = Vec::new();
        Ok::<_, String>(empty[3])
    });

    assert!(outcome.into_failure().unwrap().value().is_panic());
}
