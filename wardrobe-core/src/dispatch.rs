//! Lookup orchestration: resolve, fetch, recommend.
//!
//! Each lookup takes a generation ticket when it starts. When it finishes it is
//! only delivered if no newer lookup has started since, so a slow response can
//! never replace the result of a later request. In-flight requests are not
//! aborted; their results are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::info;

use crate::{
    FetchError, WeatherProvider, WeatherReport,
    location::{LocationError, LocationInput, LocationResolver},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LookupError {
    /// Text to show the user.
    pub fn message(&self) -> String {
        match self {
            LookupError::Location(err) => err.to_string(),
            LookupError::Fetch(err) => err.describe(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Delivery<T> {
    Current(T),
    /// A newer lookup started before this one finished.
    Stale,
}

impl<T> Delivery<T> {
    pub fn into_current(self) -> Option<T> {
        match self {
            Delivery::Current(value) => Some(value),
            Delivery::Stale => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Delivery::Stale)
    }
}

pub type LookupResult = Result<WeatherReport, LookupError>;

#[derive(Debug)]
pub struct Dispatcher {
    provider: Box<dyn WeatherProvider>,
    generation: AtomicU64,
}

impl Dispatcher {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider, generation: AtomicU64::new(0) }
    }

    /// Start a new generation, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Fetch weather for an already resolved location string.
    pub async fn lookup(&self, location_query: &str) -> Delivery<LookupResult> {
        let ticket = self.begin();
        let result = self.fetch_report(location_query).await;
        self.deliver(ticket, result)
    }

    /// Resolve the input first; a resolver failure never reaches the provider.
    pub async fn lookup_input(
        &self,
        resolver: &dyn LocationResolver,
        input: &LocationInput,
    ) -> Delivery<LookupResult> {
        let ticket = self.begin();

        let result = match input.resolve(resolver).await {
            Ok(query) => self.fetch_report(&query).await,
            Err(err) => Err(LookupError::from(err)),
        };

        self.deliver(ticket, result)
    }

    async fn fetch_report(&self, location_query: &str) -> LookupResult {
        let snapshot = self.provider.fetch_weather(location_query).await?;
        Ok(WeatherReport::new(snapshot))
    }

    fn deliver(&self, ticket: Ticket, result: LookupResult) -> Delivery<LookupResult> {
        if self.is_current(ticket) {
            Delivery::Current(result)
        } else {
            info!(generation = ticket.0, ok = result.is_ok(), "dropping superseded lookup result");
            Delivery::Stale
        }
    }
}
