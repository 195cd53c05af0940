use super::*;

fn outcome(query: &str) -> SearchOutcome {
    SearchOutcome { query: query.to_owned(), mode: SearchMode::File, hits: SearchHits::Posts(Vec::new()) }
}

#[test]
fn blank_input_does_not_begin() {
    let mut state = SearchState { input: "   ".to_owned(), ..SearchState::default() };
    assert_eq!(state.begin(), None);
    assert!(!state.in_flight);
}

#[test]
fn begin_trims_and_sets_busy() {
    let mut state = SearchState { input: "  abc ".to_owned(), mode: SearchMode::Channel, ..SearchState::default() };
    assert_eq!(state.begin(), Some(("abc".to_owned(), SearchMode::Channel)));
    assert!(state.in_flight);
}

#[test]
fn second_submission_while_busy_is_rejected() {
    let mut state = SearchState { input: "abc".to_owned(), ..SearchState::default() };
    assert!(state.begin().is_some());
    assert_eq!(state.begin(), None);
}

#[test]
fn finish_keeps_sent_label_after_input_edits() {
    let mut state = SearchState { input: "abc".to_owned(), ..SearchState::default() };
    let (query, _) = state.begin().expect("begin");
    state.input = "abcdef".to_owned();
    assert_eq!(state.finish(Some(outcome(&query))), Some(Event::SearchSucceeded));

    assert!(!state.in_flight);
    assert_eq!(state.last.as_ref().map(|o| o.query.as_str()), Some("abc"));
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut state = SearchState { last: Some(outcome("old")), input: "new".to_owned(), ..SearchState::default() };
    assert!(state.begin().is_some());
    assert_eq!(state.finish(None), None);
    assert!(!state.in_flight);
    assert_eq!(state.last, Some(outcome("old")));
}

#[test]
fn mode_parse_defaults_to_file() {
    assert_eq!(SearchMode::parse("channel"), SearchMode::Channel);
    assert_eq!(SearchMode::parse("file"), SearchMode::File);
    assert_eq!(SearchMode::parse("bogus"), SearchMode::File);
    assert_eq!(SearchMode::parse(SearchMode::Channel.as_str()), SearchMode::Channel);
}

#[test]
fn hits_len_counts_either_kind() {
    assert!(SearchHits::Posts(Vec::new()).is_empty());
    assert_eq!(SearchHits::Channels(Vec::new()).len(), 0);
}
