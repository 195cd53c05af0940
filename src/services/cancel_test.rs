use super::*;

#[test]
fn new_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn clones_share_cancellation() {
    let token = CancelToken::new();
    let task_copy = token.clone();
    token.cancel();
    assert!(task_copy.is_cancelled());
}

#[test]
fn guard_drops_results_after_cancel() {
    let token = CancelToken::new();
    let mut seen = Vec::new();
    token.guard(1, |v| seen.push(v));
    token.cancel();
    token.guard(2, |v| seen.push(v));
    assert_eq!(seen, vec![1]);
}
