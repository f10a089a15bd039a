use serde::{Deserialize, Serialize};

use crate::catalog::{Activity, City};
use crate::routes::Route;
use crate::seed;
use crate::session::SessionState;
use crate::trips::{NewTrip, TripsState};
use crate::ui::UiState;

/// Explicit timestamp unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnixTimeMs(pub u64);

impl UnixTimeMs {
    pub fn now() -> Self {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self(ms)
    }
}

/// The whole state tree. Mutated only inside `App::update`; the persisted
/// slices (trips, session) are written back through the KeyValue capability
/// after each mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub route: Route,

    // Immutable reference data, seeded at load time.
    pub cities: Vec<City>,
    pub activities: Vec<Activity>,

    // Store slices.
    pub trips: TripsState,
    pub ui: UiState,
    pub session: SessionState,

    /// A trip creation waiting out its simulated latency.
    pub pending_trip: Option<NewTrip>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        let cities = seed::cities();
        let activities = seed::activities();
        let trips = TripsState {
            trips: seed::sample_trips(&cities, &activities),
            current_trip: None,
            saved_destinations: seed::saved_destinations(),
        };

        Self {
            route: Route::default(),
            cities,
            activities,
            trips,
            ui: UiState::default(),
            session: SessionState::default(),
            pending_trip: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_is_seeded() {
        let model = Model::new();
        assert_eq!(model.cities.len(), 10);
        assert_eq!(model.activities.len(), 12);
        assert_eq!(model.trips.trips.len(), 2);
        assert_eq!(model.trips.saved_destinations.len(), 3);
        assert!(!model.session.is_authenticated);
        assert_eq!(model.route, Route::Login);
    }
}
