//! Shared test provider.

use sns_optin::{OptInProvider, PhoneNumber};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("scripted failure for {0}")]
pub struct ScriptedError(pub String);

/// Provider answering from fixed sets, recording every call.
///
/// `delays` lets a number's status query finish later than the ones after
/// it, so concurrent runs complete out of order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    pub opted_out: HashSet<String>,
    pub rejected: HashSet<String>,
    pub delays: HashMap<String, Duration>,
    status_queries: Arc<Mutex<Vec<String>>>,
    opt_ins: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opted_out(mut self, numbers: &[&str]) -> Self {
        self.opted_out.extend(numbers.iter().map(|n| n.to_string()));
        self
    }

    pub fn rejecting(mut self, numbers: &[&str]) -> Self {
        self.rejected.extend(numbers.iter().map(|n| n.to_string()));
        self
    }

    pub fn delayed(mut self, number: &str, delay: Duration) -> Self {
        self.delays.insert(number.to_string(), delay);
        self
    }

    pub fn status_queries(&self) -> Vec<String> {
        self.status_queries.lock().unwrap().clone()
    }

    pub fn opt_ins(&self) -> Vec<String> {
        self.opt_ins.lock().unwrap().clone()
    }
}

impl OptInProvider for ScriptedProvider {
    type Error = ScriptedError;

    async fn check_if_opted_out(&self, number: &PhoneNumber) -> Result<bool, ScriptedError> {
        self.status_queries
            .lock()
            .unwrap()
            .push(number.to_string());
        if let Some(delay) = self.delays.get(number.as_str()) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self.opted_out.contains(number.as_str()))
    }

    async fn opt_in(&self, number: &PhoneNumber) -> Result<(), ScriptedError> {
        self.opt_ins.lock().unwrap().push(number.to_string());
        if self.rejected.contains(number.as_str()) {
            return Err(ScriptedError(number.to_string()));
        }
        Ok(())
    }
}
