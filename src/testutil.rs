//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::{FnProxyError, Record, TestDataParams};
use crate::service::{COLUMNS, TestDataSource};

/// In-memory source that answers every call with the same rows or error,
/// and remembers what it was asked.
pub struct StaticSource {
    result: Result<Vec<Record>, FnProxyError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last: Mutex<Option<TestDataParams>>,
    closed: AtomicBool,
}

impl StaticSource {
    pub fn with_rows(rows: Vec<Record>) -> Self {
        Self::new(Ok(rows))
    }

    pub fn with_error(err: FnProxyError) -> Self {
        Self::new(Err(err))
    }

    fn new(result: Result<Vec<Record>, FnProxyError>) -> Self {
        Self {
            result,
            delay: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    /// Sleep this long inside every fetch.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Option<TestDataParams> {
        self.last.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TestDataSource for StaticSource {
    async fn fetch(&self, params: &TestDataParams) -> Result<Vec<Record>, FnProxyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(params.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// A row shaped like the backing function's output, derived from `i`.
pub fn sample_record(i: i64) -> Record {
    let values = [
        Value::from(i),
        Value::from(format!("foo{i}")),
        Value::from(format!("bar{i}")),
        Value::from("2024-01-01T00:00:00"),
        Value::from(i * 10),
        Value::from(format!("foo{}", i * 10)),
        Value::Null,
        Value::from("2024-01-02T00:00:00+00:00"),
        Value::from("foobar".repeat(3)),
        Value::from(i % 2 == 0),
    ];
    COLUMNS
        .iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

pub fn sample_records(n: i64) -> Vec<Record> {
    (1..=n).map(sample_record).collect()
}
