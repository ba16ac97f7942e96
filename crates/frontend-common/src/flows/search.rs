//! City search and lot selection

use super::{RequestTracker, Submission};
use crate::config::SearchConfig;
use crate::error::{SearchError, ValidationError};
use crate::navigation::{Navigator, Route};
use crate::services::ParkingApi;
use parkspot_http::Lot;
use tracing::debug;

/// What the results area shows
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading { city: String },
    Results { city: String, lots: Vec<Lot> },
    Empty { city: String },
    Error { city: String, message: String },
}

/// A search in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    city: String,
}

impl SearchTicket {
    /// The trimmed city sent to the server
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug)]
pub struct CitySearch {
    phase: SearchPhase,
    validation: Option<ValidationError>,
    tracker: RequestTracker,
}

impl Default for CitySearch {
    fn default() -> Self {
        Self::new()
    }
}

impl CitySearch {
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            validation: None,
            tracker: RequestTracker::default(),
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Disables the submit control
    pub fn is_loading(&self) -> bool {
        self.tracker.is_in_flight()
    }

    /// Message shown under the input after a rejected submission
    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    pub fn lots(&self) -> &[Lot] {
        match &self.phase {
            SearchPhase::Results { lots, .. } => lots,
            _ => &[],
        }
    }

    /// "Found 2 parking lots in Paris"
    pub fn summary(&self) -> Option<String> {
        match &self.phase {
            SearchPhase::Results { city, lots } => {
                let noun = if lots.len() == 1 { "lot" } else { "lots" };
                Some(format!("Found {} parking {noun} in {city}", lots.len()))
            }
            _ => None,
        }
    }

    /// Validate and mark a search as in flight.
    ///
    /// Blank input is rejected without touching the displayed results. While a
    /// search is pending every further submission is suppressed.
    pub fn begin(&mut self, input: &str) -> Result<Submission<SearchTicket>, ValidationError> {
        if self.tracker.is_in_flight() {
            debug!("search already in flight, ignoring submission");
            return Ok(Submission::Suppressed);
        }

        let city = input.trim();
        if city.is_empty() {
            self.validation = Some(ValidationError::BlankCity);
            return Err(ValidationError::BlankCity);
        }

        let Some(generation) = self.tracker.start() else {
            return Ok(Submission::Suppressed);
        };
        self.validation = None;
        self.phase = SearchPhase::Loading {
            city: city.to_string(),
        };
        Ok(Submission::Started(SearchTicket {
            generation,
            city: city.to_string(),
        }))
    }

    /// Apply an outcome. Returns false when the ticket was superseded.
    pub fn complete(&mut self, ticket: SearchTicket, outcome: Result<Vec<Lot>, SearchError>) -> bool {
        if !self.tracker.finish(ticket.generation) {
            debug!(city = %ticket.city, "dropping stale search result");
            return false;
        }

        let SearchTicket { city, .. } = ticket;
        self.phase = match outcome {
            Ok(lots) if lots.is_empty() => SearchPhase::Empty { city },
            Ok(lots) => SearchPhase::Results { city, lots },
            Err(err) => SearchPhase::Error {
                city,
                message: err.message().to_string(),
            },
        };
        true
    }

    /// Submit control
    pub async fn submit<A: ParkingApi + ?Sized>(
        &mut self,
        api: &A,
        input: &str,
    ) -> Result<Submission<()>, ValidationError> {
        let ticket = match self.begin(input)? {
            Submission::Started(ticket) => ticket,
            Submission::Suppressed => return Ok(Submission::Suppressed),
        };
        let outcome = api.search_lots_by_city(ticket.city()).await;
        self.complete(ticket, outcome);
        Ok(Submission::Started(()))
    }

    /// Key press in the city input; only the commit key searches
    pub async fn key_pressed<A: ParkingApi + ?Sized>(
        &mut self,
        api: &A,
        key: &str,
        input: &str,
    ) -> Result<Option<Submission<()>>, ValidationError> {
        if key != SearchConfig::COMMIT_KEY {
            return Ok(None);
        }
        self.submit(api, input).await.map(Some)
    }

    /// Open slot selection for a listed lot
    pub fn select<N: Navigator + ?Sized>(&self, lot: &Lot, navigator: &mut N) {
        navigator.navigate(Route::slots(lot.id.clone()));
    }

    /// The page was left; a pending result will not be shown
    pub fn abandon(&mut self) {
        self.tracker.invalidate();
        self.phase = SearchPhase::Idle;
        self.validation = None;
    }
}
