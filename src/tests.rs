//! Test doubles shared by the unit tests

use crate::engine::{Executor, RunStatus};
use crate::error::DevcError;
use crate::util::Confirm;
use std::cell::RefCell;
use std::collections::VecDeque;

#[allow(unused)]
pub mod prelude {
    pub use super::{CannedConfirm, RecordingEngine};
}

/// Engine that records every invocation instead of running it
///
/// Returns queued results in order and success once the queue is empty
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: RefCell<Vec<Vec<String>>>,
    results: RefCell<VecDeque<RunStatus>>,
    unspawnable: bool,
}

impl RecordingEngine {
    pub fn with_results(results: Vec<RunStatus>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            ..Default::default()
        }
    }

    /// Every invocation fails as if the engine was not installed
    pub fn unspawnable() -> Self {
        Self {
            unspawnable: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Executor for RecordingEngine {
    fn program(&self) -> &str {
        "docker"
    }

    fn execute(&self, argv: &[String]) -> Result<RunStatus, DevcError> {
        self.calls.borrow_mut().push(argv.to_vec());

        if self.unspawnable {
            return Err(DevcError::RuntimeSpawnFailed {
                program: self.program().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        Ok(self.results.borrow_mut().pop_front().unwrap_or_else(RunStatus::ok))
    }
}

/// Answers questions from a list, declines when the list runs out
#[derive(Debug, Default)]
pub struct CannedConfirm {
    answers: RefCell<VecDeque<bool>>,
    questions: RefCell<Vec<String>>,
}

impl CannedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            questions: RefCell::default(),
        }
    }

    /// Questions asked so far
    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Confirm for CannedConfirm {
    fn confirm(&self, question: &str) -> bool {
        self.questions.borrow_mut().push(question.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

#[test]
fn canned_confirm_defaults_to_decline() {
    let confirm = CannedConfirm::new(&[true]);

    assert!(confirm.confirm("first"));
    assert!(!confirm.confirm("second"));
    assert_eq!(confirm.questions(), vec!["first".to_string(), "second".to_string()]);
}
