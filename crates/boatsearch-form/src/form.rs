//! Search filter form state and event dispatch.
//!
//! # Design
//! - Field updates are applied synchronously; only the broadcast is delayed.
//! - Boat type selection broadcasts at once. Price changes go through the
//!   [`Debouncer`] so a burst of edits produces a single event.
//! - A debounced broadcast reads the fields when it fires, so it always
//!   carries the latest values, including a selection made in the meantime.
//! - The option list is replaced wholesale on every provider result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use boatsearch_config::FormConfig;
use boatsearch_events::{Event, EventBus, EventId, SearchCriteria, SearchTrigger};
use tracing::{debug, info, warn};

use crate::debounce::Debouncer;
use crate::error::{FormError, FormResult};
use crate::options::{BoatType, CategoryOption, category_options};
use crate::provider::BoatTypeProvider;

type SharedCriteria = Arc<Mutex<SearchCriteria>>;

/// Form that filters a boat listing by type and price range.
#[derive(Debug)]
pub struct SearchFilterForm {
    criteria: SharedCriteria,
    events: EventBus,
    debouncer: Debouncer,
    options: Option<Vec<CategoryOption>>,
    error: Option<Arc<FormError>>,
}

impl SearchFilterForm {
    /// Build a form with its own event bus.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidConfig`] when `config` fails validation and
    /// [`FormError::RuntimeUnavailable`] when called outside a tokio runtime.
    pub fn new(config: &FormConfig) -> FormResult<Self> {
        validate(config)?;
        Self::with_bus(config, EventBus::with_capacity(config.replay_capacity))
    }

    /// Build a form that publishes to an existing bus.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidConfig`] when `config` fails validation and
    /// [`FormError::RuntimeUnavailable`] when called outside a tokio runtime.
    pub fn with_bus(config: &FormConfig, events: EventBus) -> FormResult<Self> {
        validate(config)?;
        let debouncer = Debouncer::new(config.quiet_period())?;
        let criteria = SearchCriteria {
            boat_type_id: String::new(),
            min_price: config.default_min_price,
            max_price: config.default_max_price,
        };
        Ok(Self {
            criteria: Arc::new(Mutex::new(criteria)),
            events,
            debouncer,
            options: None,
            error: None,
        })
    }

    /// Bus that receives the form's search events.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Current criteria snapshot, without broadcasting it.
    #[must_use]
    pub fn criteria(&self) -> SearchCriteria {
        lock(&self.criteria).clone()
    }

    /// Selectable boat types, or `None` before the first load and after a
    /// failed one.
    #[must_use]
    pub fn options(&self) -> Option<&[CategoryOption]> {
        self.options.as_deref()
    }

    /// Error retained from the last failed option load.
    #[must_use]
    pub fn error(&self) -> Option<Arc<FormError>> {
        self.error.clone()
    }

    /// Returns `true` while a price change is waiting for its quiet period.
    #[must_use]
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Select a boat type and broadcast immediately.
    ///
    /// A pending price broadcast is left in place; it fires later with the new
    /// selection.
    pub fn on_category_change(&mut self, boat_type_id: impl Into<String>) -> EventId {
        lock(&self.criteria).boat_type_id = boat_type_id.into();
        dispatch(&self.events, &self.criteria, SearchTrigger::Selection)
    }

    /// Update the lower price bound and schedule a broadcast.
    pub fn on_min_change(&mut self, min_price: f64) {
        lock(&self.criteria).min_price = min_price;
        self.schedule_range_search();
    }

    /// Update the upper price bound and schedule a broadcast.
    pub fn on_max_change(&mut self, max_price: f64) {
        lock(&self.criteria).max_price = max_price;
        self.schedule_range_search();
    }

    /// Broadcast the current criteria now, dropping any pending price
    /// broadcast.
    pub fn submit(&mut self) -> EventId {
        if self.debouncer.cancel() {
            debug!("pending range search superseded by submit");
        }
        dispatch(&self.events, &self.criteria, SearchTrigger::Submit)
    }

    /// Replace the option list with a provider result.
    ///
    /// Failures clear the list and are retained for display; they never
    /// propagate to the caller.
    pub fn apply_boat_types(&mut self, result: anyhow::Result<Vec<BoatType>>) {
        match result {
            Ok(records) => {
                let options = category_options(records);
                info!(count = options.len() - 1, "boat type options loaded");
                self.options = Some(options);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "boat type lookup failed");
                self.options = None;
                self.error = Some(Arc::new(FormError::options_fetch_failed(err)));
            }
        }
    }

    /// Fetch boat types from `provider` and apply the result.
    pub async fn load_options(&mut self, provider: &dyn BoatTypeProvider) {
        let result = provider.boat_types().await;
        self.apply_boat_types(result);
    }

    fn schedule_range_search(&mut self) {
        let events = self.events.clone();
        let criteria = Arc::clone(&self.criteria);
        self.debouncer.schedule(move || {
            let _ = dispatch(&events, &criteria, SearchTrigger::Range);
        });
    }
}

fn validate(config: &FormConfig) -> FormResult<()> {
    config
        .validate()
        .map_err(|source| FormError::InvalidConfig { source })
}

fn lock(criteria: &Mutex<SearchCriteria>) -> MutexGuard<'_, SearchCriteria> {
    criteria.lock().unwrap_or_else(PoisonError::into_inner)
}

fn dispatch(
    events: &EventBus,
    criteria: &Mutex<SearchCriteria>,
    trigger: SearchTrigger,
) -> EventId {
    // Held through publish so a stale snapshot cannot land after a newer one.
    let fields = lock(criteria);
    let snapshot = fields.clone();
    debug!(
        trigger = trigger.as_str(),
        boat_type_id = %snapshot.boat_type_id,
        min_price = snapshot.min_price,
        max_price = snapshot.max_price,
        "dispatching search"
    );
    let id = events.publish(Event::Search {
        criteria: snapshot,
        trigger,
    });
    drop(fields);
    id
}
