use super::*;

fn entry(word: &str) -> OracleEntry {
    OracleEntry {
        word: word.to_string(),
        score: None,
    }
}

#[test]
fn empty_result_never_confirms() {
    assert!(!entries_confirm("CABBAGE", &[]));
}

#[test]
fn first_entry_confirms_case_insensitively() {
    assert!(entries_confirm("CABBAGE", &[entry("cabbage")]));
    assert!(entries_confirm("cabbage", &[entry("CABBAGE")]));
}

#[test]
fn only_the_first_entry_counts() {
    // The oracle is queried with max=1, but a misbehaving response with the
    // right word in second place still does not confirm.
    let entries = [entry("cribbage"), entry("cabbage")];
    assert!(!entries_confirm("CABBAGE", &entries));
}

#[test]
fn entries_deserialize_from_datamuse_payload() {
    let body = r#"[{"word":"stared","score":3456,"tags":["n"]}]"#;
    let entries: Vec<OracleEntry> = serde_json::from_str(body).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "stared");
    assert_eq!(entries[0].score, Some(3456));
}

#[test]
fn malformed_payload_is_an_error() {
    let body = r#"{"word":"not-an-array"}"#;
    assert!(serde_json::from_str::<Vec<OracleEntry>>(body).is_err());
}
