//! Event bus routing helpers.

use crate::payloads::{DEFAULT_REPLAY_CAPACITY, Event, EventEnvelope, EventId};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tokio::sync::broadcast::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

/// Shared event bus built on top of `tokio::broadcast`.
///
/// Envelopes are also kept in a bounded replay ring so listeners that attach
/// late can catch up from a known id. When the ring is full the oldest entry is
/// dropped.
#[derive(Clone, Debug)]
pub struct EventBus {
    sender: Sender<EventEnvelope>,
    replay: Arc<Mutex<VecDeque<EventEnvelope>>>,
    replay_capacity: usize,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    /// Construct a bus with a custom replay capacity.
    ///
    /// # Panics
    ///
    /// Panics if `replay_capacity` is zero.
    #[must_use]
    pub fn with_capacity(replay_capacity: usize) -> Self {
        assert!(replay_capacity > 0, "event bus capacity must be positive");
        let (sender, _) = broadcast::channel(replay_capacity);
        Self {
            sender,
            replay: Arc::new(Mutex::new(VecDeque::with_capacity(replay_capacity))),
            replay_capacity,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Construct a bus with the default replay capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
    }

    /// Subscribe to the bus.
    ///
    /// When `last_event_id` is supplied, buffered envelopes newer than that id
    /// are yielded before live traffic.
    #[must_use]
    pub fn subscribe(&self, last_event_id: Option<EventId>) -> EventStream {
        let replay = self.lock_replay();
        let backlog = last_event_id.map_or_else(VecDeque::new, |since| {
            replay.iter().filter(|env| env.id > since).cloned().collect()
        });
        let live = BroadcastStream::new(self.sender.subscribe());
        drop(replay);
        EventStream { backlog, live }
    }

    /// Publish a new event to all subscribers and return its id.
    ///
    /// Ids are assigned under the replay lock, so the ring and every
    /// subscriber see them in increasing order.
    pub fn publish(&self, event: Event) -> EventId {
        let mut replay = self.lock_replay();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };
        if replay.len() == self.replay_capacity {
            let _ = replay.pop_front();
        }
        replay.push_back(envelope.clone());
        // No receivers is not an error; the envelope stays in the replay ring.
        let _ = self.sender.send(envelope);
        id
    }

    /// Collect a backlog of events emitted after the specified id.
    #[must_use]
    pub fn backlog_since(&self, id: EventId) -> Vec<EventEnvelope> {
        let replay = self.lock_replay();
        replay.iter().filter(|env| env.id > id).cloned().collect()
    }

    fn lock_replay(&self) -> MutexGuard<'_, VecDeque<EventEnvelope>> {
        self.replay
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream wrapper that yields events from the replay backlog first and then
/// from the live broadcast channel.
#[derive(Debug)]
pub struct EventStream {
    backlog: VecDeque<EventEnvelope>,
    live: BroadcastStream<EventEnvelope>,
}

impl EventStream {
    /// Receive the next event. Lagged gaps are skipped; `None` means the bus
    /// was dropped.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        if let Some(envelope) = self.backlog.pop_front() {
            return Some(envelope);
        }
        loop {
            match self.live.next().await? {
                Ok(envelope) => return Some(envelope),
                Err(_lagged) => {}
            }
        }
    }
}
