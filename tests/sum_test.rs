use demo_ci::models::Outcome;
use demo_ci::resolver::resolve;
use demo_ci::sum::sum;

// FAIL_BUILD=true makes this expect the wrong answer, which is how the demo
// produces a red build.
#[test]
fn sum_adds_numbers() {
    let toggle = std::env::var("FAIL_BUILD").ok();
    let expected = match resolve(toggle.as_deref()) {
        Outcome::Failure => 5,
        Outcome::Success => 4,
    };
    assert_eq!(sum(2, 2), expected);
}

#[test]
fn sum_handles_negatives() {
    assert_eq!(sum(-3, 1), -2);
    assert_eq!(sum(0, 0), 0);
}
