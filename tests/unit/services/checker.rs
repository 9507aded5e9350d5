use super::*;
use crate::services::oracle::{OracleEntry, OracleError, OracleFuture};

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory oracle: `known` words confirm, `fail_on` words error out,
/// everything else returns an empty result. Records every query.
#[derive(Default)]
struct FakeOracle {
    known: HashSet<String>,
    fail_on: HashSet<String>,
    queried: Mutex<Vec<String>>,
}

impl FakeOracle {
    fn knowing(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| w.to_ascii_lowercase()).collect(),
            ..Self::default()
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl WordOracle for FakeOracle {
    fn lookup(&self, word: &str) -> OracleFuture {
        self.queried.lock().unwrap().push(word.to_string());
        let result = if self.fail_on.contains(&word.to_ascii_lowercase()) {
            Err(OracleError::Request("connection refused".to_string()))
        } else if self.known.contains(&word.to_ascii_lowercase()) {
            Ok(vec![OracleEntry {
                word: word.to_ascii_lowercase(),
                score: Some(1),
            }])
        } else {
            Ok(Vec::new())
        };
        Box::pin(async move { result })
    }
}

/// Oracle that sleeps per lookup so a cancellation can land mid-pass.
struct SlowOracle;

impl WordOracle for SlowOracle {
    fn lookup(&self, _word: &str) -> OracleFuture {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Vec::new())
        })
    }
}

fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn grid_with_column(word: &str) -> LetterGrid {
    assert_eq!(word.len(), GRID_SIZE);
    let mut rows = [['Z'; GRID_SIZE]; GRID_SIZE];
    for (row, ch) in word.chars().enumerate() {
        rows[row][0] = ch;
    }
    LetterGrid::from_rows(rows).unwrap()
}

fn drain_until_terminal(rx: &std::sync::mpsc::Receiver<CheckMessage>) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    loop {
        let msg = rx.recv_timeout(RECV_TIMEOUT).expect("check timed out");
        let terminal = matches!(
            msg,
            CheckMessage::Finished { .. } | CheckMessage::Cancelled { .. }
        );
        messages.push(msg);
        if terminal {
            return messages;
        }
    }
}

#[test]
fn valid_column_scores_its_length() {
    let runtime = test_runtime();
    let oracle = Arc::new(FakeOracle::knowing(&["cabbage"]));
    let service = WordCheckService::new(runtime.handle().clone(), oracle);
    let (tx, rx) = std::sync::mpsc::channel();

    service.check(1, grid_with_column("CABBAGE"), tx);
    let messages = drain_until_terminal(&rx);

    assert!(messages.contains(&CheckMessage::Column {
        check_id: 1,
        col: 0,
        word: "CABBAGE".to_string(),
        valid: true,
    }));
    assert_eq!(
        messages.last(),
        Some(&CheckMessage::Finished {
            check_id: 1,
            total: 7,
        })
    );
}

#[test]
fn unknown_words_mark_invalid_and_score_zero() {
    let runtime = test_runtime();
    let oracle = Arc::new(FakeOracle::default());
    let service = WordCheckService::new(runtime.handle().clone(), oracle);
    let (tx, rx) = std::sync::mpsc::channel();

    service.check(2, grid_with_column("ZZZQXWY"), tx);
    let messages = drain_until_terminal(&rx);

    let columns = messages
        .iter()
        .filter(|m| matches!(m, CheckMessage::Column { valid: false, .. }))
        .count();
    assert_eq!(columns, GRID_SIZE);
    assert_eq!(
        messages.last(),
        Some(&CheckMessage::Finished {
            check_id: 2,
            total: 0,
        })
    );
}

#[test]
fn oracle_failure_marks_the_column_invalid_and_continues() {
    let runtime = test_runtime();
    let mut oracle = FakeOracle::knowing(&["zzzzzzz"]);
    oracle.fail_on.insert("cabbage".to_string());
    let oracle = Arc::new(oracle);
    let shared: Arc<dyn WordOracle> = oracle.clone();
    let service = WordCheckService::new(runtime.handle().clone(), shared);
    let (tx, rx) = std::sync::mpsc::channel();

    service.check(3, grid_with_column("CABBAGE"), tx);
    let messages = drain_until_terminal(&rx);

    // Column 0 failed its lookup, the other six (all "ZZZZZZZ") are known.
    assert!(messages.contains(&CheckMessage::Column {
        check_id: 3,
        col: 0,
        word: "CABBAGE".to_string(),
        valid: false,
    }));
    assert_eq!(
        messages.last(),
        Some(&CheckMessage::Finished {
            check_id: 3,
            total: 42,
        })
    );
    // Every column was still queried after the failure.
    assert_eq!(oracle.queries().len(), GRID_SIZE);
}

#[test]
fn aggregate_score_matches_per_column_verdicts() {
    let runtime = test_runtime();
    let oracle = Arc::new(FakeOracle::knowing(&["cabbage", "zzzzzzz"]));
    let service = WordCheckService::new(runtime.handle().clone(), oracle);
    let (tx, rx) = std::sync::mpsc::channel();

    service.check(4, grid_with_column("CABBAGE"), tx);
    let messages = drain_until_terminal(&rx);

    let recomputed: u32 = messages
        .iter()
        .filter_map(|m| match m {
            CheckMessage::Column {
                word, valid: true, ..
            } => Some(word.len() as u32),
            _ => None,
        })
        .sum();
    let Some(CheckMessage::Finished { total, .. }) = messages.last() else {
        panic!("expected a final score");
    };
    assert_eq!(*total, recomputed);
}

#[test]
fn cancelled_check_reports_cancelled_and_never_finishes() {
    let runtime = test_runtime();
    let service = WordCheckService::new(runtime.handle().clone(), Arc::new(SlowOracle));
    let (tx, rx) = std::sync::mpsc::channel();

    let task = service.check(5, grid_with_column("CABBAGE"), tx);

    // Let the first column land, then pull the plug.
    let first = rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(matches!(first, CheckMessage::Column { col: 0, .. }));
    task.cancel();
    assert!(task.is_cancelled());

    let mut saw_cancelled = false;
    while let Ok(msg) = rx.recv_timeout(RECV_TIMEOUT) {
        match msg {
            CheckMessage::Finished { .. } => panic!("cancelled check must not finish"),
            CheckMessage::Cancelled { check_id } => {
                assert_eq!(check_id, 5);
                saw_cancelled = true;
                break;
            }
            CheckMessage::Column { .. } => {}
        }
    }
    assert!(saw_cancelled);
}

#[test]
fn short_candidates_never_qualify_for_a_lookup() {
    assert!(!qualifies(""));
    assert!(!qualifies("AB"));
    assert!(qualifies("ABC"));
    assert!(qualifies("CABBAGE"));
}
