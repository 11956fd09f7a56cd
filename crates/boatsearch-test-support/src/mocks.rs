//! Scripted boat type providers.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use boatsearch_form::{BoatType, BoatTypeProvider};

/// Provider that replays a fixed sequence of responses.
///
/// Each call consumes the next scripted response; once the script is
/// exhausted, calls fail.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<Vec<BoatType>, String>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Provider with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successful response.
    #[must_use]
    pub fn then_ok(self, records: Vec<BoatType>) -> Self {
        self.push(Ok(records));
        self
    }

    /// Append a failing response.
    #[must_use]
    pub fn then_err(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    /// Number of lookups served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, response: Result<Vec<BoatType>, String>) {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(response);
    }
}

#[async_trait]
impl BoatTypeProvider for ScriptedProvider {
    async fn boat_types(&self) -> anyhow::Result<Vec<BoatType>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        match next {
            Some(Ok(records)) => Ok(records),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("scripted provider exhausted")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_served_in_order() {
        let provider = ScriptedProvider::new()
            .then_ok(vec![BoatType::new("Sailboat", "1")])
            .then_err("boom");

        assert_eq!(provider.boat_types().await.expect("first").len(), 1);
        let err = provider.boat_types().await.expect_err("second");
        assert_eq!(err.to_string(), "boom");
        assert!(provider.boat_types().await.is_err());
        assert_eq!(provider.calls(), 3);
    }
}
