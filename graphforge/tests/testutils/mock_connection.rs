//! Scripted in-memory stand-in for a live server connection
//!
//! Responses and snapshots are queued up front and consumed in call order;
//! running past the script fails the calling test with a Request error.

use std::collections::VecDeque;
use std::sync::Mutex;

use graphforge::{ConnectionError, GraphConnection, SchemaSnapshot};

pub struct MockConnection {
    responses: Mutex<VecDeque<String>>,
    snapshots: Mutex<VecDeque<SchemaSnapshot>>,
    statements: Mutex<Vec<String>>,
    snapshot_requests: Mutex<usize>,
}

impl MockConnection {
    pub fn new() -> Self {
        // Route library logs through the test harness when RUST_LOG is set.
        let _ = env_logger::builder().is_test(true).try_init();
        MockConnection {
            responses: Mutex::new(VecDeque::new()),
            snapshots: Mutex::new(VecDeque::new()),
            statements: Mutex::new(Vec::new()),
            snapshot_requests: Mutex::new(0),
        }
    }

    /// Queue the text the next unanswered `run_statement` call returns.
    pub fn push_response(&self, text: &str) {
        self.responses.lock().unwrap().push_back(text.to_string());
    }

    /// Queue the snapshot the next `get_schema` call returns.
    pub fn push_snapshot(&self, snapshot: SchemaSnapshot) {
        self.snapshots.lock().unwrap().push_back(snapshot);
    }

    /// Every script submitted so far, in submission order.
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn snapshot_requests(&self) -> usize {
        *self.snapshot_requests.lock().unwrap()
    }
}

impl GraphConnection for MockConnection {
    fn get_schema(&self, _force_refresh: bool) -> Result<SchemaSnapshot, ConnectionError> {
        *self.snapshot_requests.lock().unwrap() += 1;
        self.snapshots
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ConnectionError::Request("no scripted snapshot left".to_string()))
    }

    fn run_statement(&self, script: &str) -> Result<String, ConnectionError> {
        self.statements.lock().unwrap().push(script.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ConnectionError::Request("no scripted response left".to_string()))
    }
}
