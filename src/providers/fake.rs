//! In-memory provider for unit tests.

use super::traits::OptInProvider;
use crate::types::PhoneNumber;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("fake service rejected {0}")]
pub(crate) struct FakeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CheckOptOut(String),
    OptIn(String),
}

/// Numbers in `opted_out` report as opted out; `rejected` fail the opt-in
/// call and `unreachable` fail the status query.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeProvider {
    opted_out: HashSet<String>,
    rejected: HashSet<String>,
    unreachable: HashSet<String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn opted_out(mut self, number: &str) -> Self {
        self.opted_out.insert(number.to_string());
        self
    }

    pub(crate) fn rejecting(mut self, number: &str) -> Self {
        self.rejected.insert(number.to_string());
        self
    }

    pub(crate) fn unreachable(mut self, number: &str) -> Self {
        self.unreachable.insert(number.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl OptInProvider for FakeProvider {
    type Error = FakeError;

    async fn check_if_opted_out(&self, number: &PhoneNumber) -> Result<bool, FakeError> {
        self.record(Call::CheckOptOut(number.to_string()));
        if self.unreachable.contains(number.as_str()) {
            return Err(FakeError(number.to_string()));
        }
        Ok(self.opted_out.contains(number.as_str()))
    }

    async fn opt_in(&self, number: &PhoneNumber) -> Result<(), FakeError> {
        self.record(Call::OptIn(number.to_string()));
        if self.rejected.contains(number.as_str()) {
            return Err(FakeError(number.to_string()));
        }
        Ok(())
    }
}
