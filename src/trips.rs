//! The trip store: single source of truth for trips and saved-destination
//! bookmarks, with every mutation running to completion in one state update.
//!
//! Lookups that fail return an explicit [`StoreError`] instead of silently
//! no-oping; the `update()` layer turns these into error toasts.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Activity, City, CityId};
use crate::ids::typed_id;
use crate::model::UnixTimeMs;

typed_id!(TripId);
typed_id!(StopId);
typed_id!(ActivityInstanceId);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Draft,
    Upcoming,
    Confirmed,
    Completed,
}

/// Per-category allocations. The `activities` allocation is user-set and
/// display-only: totals always use the figure derived from booked activity
/// instances (see [`CostBreakdown`]).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Budget {
    pub total: f64,
    pub transport: f64,
    pub accommodation: f64,
    pub activities: f64,
    pub food: f64,
    pub other: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct BudgetPatch {
    pub total: Option<f64>,
    pub transport: Option<f64>,
    pub accommodation: Option<f64>,
    pub activities: Option<f64>,
    pub food: Option<f64>,
    pub other: Option<f64>,
}

impl Budget {
    pub fn apply(&mut self, patch: &BudgetPatch) {
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(transport) = patch.transport {
            self.transport = transport;
        }
        if let Some(accommodation) = patch.accommodation {
            self.accommodation = accommodation;
        }
        if let Some(activities) = patch.activities {
            self.activities = activities;
        }
        if let Some(food) = patch.food {
            self.food = food;
        }
        if let Some(other) = patch.other {
            self.other = other;
        }
    }
}

/// A catalog activity copied onto a stop with a schedule and its own
/// identity. Later catalog edits never reach booked instances.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityInstance {
    pub id: ActivityInstanceId,
    pub catalog_id: crate::catalog::ActivityId,
    pub name: String,
    pub category: crate::catalog::ActivityCategory,
    pub cost: f64,
    pub duration_hours: f64,
    pub image: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}

impl ActivityInstance {
    pub fn from_catalog(activity: &Activity, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: ActivityInstanceId::generate(),
            catalog_id: activity.id.clone(),
            name: activity.name.clone(),
            category: activity.category,
            cost: activity.cost,
            duration_hours: activity.duration_hours,
            image: activity.image.clone(),
            description: activity.description.clone(),
            scheduled_date: date,
            scheduled_time: time,
        }
    }
}

/// One city visit in an itinerary. The city record is denormalized at
/// creation time. Arrival ≤ departure is expected but not enforced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub city_id: CityId,
    pub city: City,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub activities: Vec<ActivityInstance>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cover_photo: Option<String>,
    pub status: TripStatus,
    pub is_public: bool,
    pub public_url: Option<String>,
    pub stops: Vec<Stop>,
    pub budget: Budget,
    pub created_at: UnixTimeMs,
}

impl Trip {
    pub fn stop(&self, stop_id: &StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| &s.id == stop_id)
    }

    /// Sum of booked activity-instance costs across all stops.
    pub fn booked_activities_cost(&self) -> f64 {
        self.stops
            .iter()
            .flat_map(|stop| &stop.activities)
            .map(|a| a.cost)
            .sum()
    }
}

// --- Mutator parameter structs ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewTrip {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cover_photo: Option<String>,
    /// Fields supplied here are honored exactly; omitted ones stay zeroed.
    pub budget: Option<BudgetPatch>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cover_photo: Option<String>,
    pub status: Option<TripStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewStop {
    pub city_id: CityId,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewActivity {
    pub activity_id: crate::catalog::ActivityId,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}

/// Derived cost picture for one trip.
///
/// `activities_booked` is the figure that feeds `total`; the user-set
/// `activities_allocated` slice of the budget is reported alongside but
/// deliberately excluded from the sum, so allocation and booked spend are
/// never double counted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    pub transport: f64,
    pub accommodation: f64,
    pub food: f64,
    pub other: f64,
    pub activities_booked: f64,
    pub activities_allocated: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    #[error("trip not found: {0}")]
    TripNotFound(String),

    #[error("stop not found: {0}")]
    StopNotFound(String),

    #[error("activity not found on stop: {0}")]
    ActivityNotFound(String),

    #[error("unknown city: {0}")]
    CityNotFound(String),

    #[error("unknown catalog activity: {0}")]
    CatalogActivityNotFound(String),
}

/// Lowercase-hyphenate the trip name and append a uniqueness token so two
/// trips with identical names made public in the same instant never collide.
pub fn public_slug(name: &str) -> String {
    let base: String = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let token = Uuid::new_v4().simple().to_string();
    if base.is_empty() {
        format!("trip-{}", &token[..8])
    } else {
        format!("{}-{}", base, &token[..8])
    }
}

/// The trip-store slice of the model.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TripsState {
    pub trips: Vec<Trip>,
    pub current_trip: Option<TripId>,
    pub saved_destinations: Vec<CityId>,
}

impl TripsState {
    pub fn trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| &t.id == id)
    }

    fn trip_mut(&mut self, id: &TripId) -> Result<&mut Trip, StoreError> {
        self.trips
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::TripNotFound(id.to_string()))
    }

    /// Share-view lookup: by public slug first, falling back to the trip id.
    pub fn trip_by_slug_or_id(&self, key: &str) -> Option<&Trip> {
        self.trips
            .iter()
            .find(|t| t.public_url.as_deref() == Some(key))
            .or_else(|| self.trips.iter().find(|t| t.id.as_str() == key))
    }

    /// Allocates a draft trip with no stops and a zeroed budget (unless the
    /// creator supplied budget fields), appends it, and marks it current.
    pub fn create_trip(&mut self, data: NewTrip) -> TripId {
        let mut budget = Budget::default();
        if let Some(patch) = &data.budget {
            budget.apply(patch);
        }

        let id = TripId::generate();
        self.trips.push(Trip {
            id: id.clone(),
            name: data.name,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
            cover_photo: data.cover_photo,
            status: TripStatus::Draft,
            is_public: false,
            public_url: None,
            stops: Vec::new(),
            budget,
            created_at: UnixTimeMs::now(),
        });
        self.current_trip = Some(id.clone());
        id
    }

    pub fn update_trip(&mut self, id: &TripId, patch: TripPatch) -> Result<(), StoreError> {
        let trip = self.trip_mut(id)?;
        if let Some(name) = patch.name {
            trip.name = name;
        }
        if let Some(description) = patch.description {
            trip.description = description;
        }
        if let Some(start_date) = patch.start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            trip.end_date = end_date;
        }
        if let Some(cover_photo) = patch.cover_photo {
            trip.cover_photo = Some(cover_photo);
        }
        if let Some(status) = patch.status {
            trip.status = status;
        }
        Ok(())
    }

    pub fn delete_trip(&mut self, id: &TripId) -> Result<(), StoreError> {
        let before = self.trips.len();
        self.trips.retain(|t| &t.id != id);
        if self.trips.len() == before {
            return Err(StoreError::TripNotFound(id.to_string()));
        }
        if self.current_trip.as_ref() == Some(id) {
            self.current_trip = None;
        }
        Ok(())
    }

    pub fn set_current_trip(&mut self, id: Option<TripId>) {
        self.current_trip = id.filter(|id| self.trip(id).is_some());
    }

    /// Resolves the city from the catalog and appends a stop with the full
    /// city record attached. Unknown cities are rejected, not attached empty.
    pub fn add_stop(
        &mut self,
        trip_id: &TripId,
        cities: &[City],
        data: NewStop,
    ) -> Result<StopId, StoreError> {
        let city = cities
            .iter()
            .find(|c| c.id == data.city_id)
            .cloned()
            .ok_or_else(|| StoreError::CityNotFound(data.city_id.to_string()))?;

        let trip = self.trip_mut(trip_id)?;
        let id = StopId::generate();
        trip.stops.push(Stop {
            id: id.clone(),
            city_id: data.city_id,
            city,
            arrival_date: data.arrival_date,
            departure_date: data.departure_date,
            activities: Vec::new(),
        });
        Ok(id)
    }

    /// Removes the stop and all its activity instances in one update.
    pub fn remove_stop(&mut self, trip_id: &TripId, stop_id: &StopId) -> Result<(), StoreError> {
        let trip = self.trip_mut(trip_id)?;
        let before = trip.stops.len();
        trip.stops.retain(|s| &s.id != stop_id);
        if trip.stops.len() == before {
            return Err(StoreError::StopNotFound(stop_id.to_string()));
        }
        Ok(())
    }

    /// Replaces the stop sequence wholesale with the stops named by `order`,
    /// in that order. Ids not present in the trip are ignored; stops not
    /// mentioned are dropped, matching wholesale-replacement semantics.
    pub fn reorder_stops(&mut self, trip_id: &TripId, order: &[StopId]) -> Result<(), StoreError> {
        let trip = self.trip_mut(trip_id)?;
        let mut remaining = std::mem::take(&mut trip.stops);
        let mut reordered = Vec::with_capacity(order.len());
        for stop_id in order {
            if let Some(pos) = remaining.iter().position(|s| &s.id == stop_id) {
                reordered.push(remaining.remove(pos));
            }
        }
        trip.stops = reordered;
        Ok(())
    }

    /// Clones the catalog activity onto the stop as a fresh instance with
    /// the supplied schedule.
    pub fn add_activity(
        &mut self,
        trip_id: &TripId,
        stop_id: &StopId,
        activities: &[Activity],
        data: NewActivity,
    ) -> Result<ActivityInstanceId, StoreError> {
        let activity = activities
            .iter()
            .find(|a| a.id == data.activity_id)
            .ok_or_else(|| StoreError::CatalogActivityNotFound(data.activity_id.to_string()))?;
        let instance =
            ActivityInstance::from_catalog(activity, data.scheduled_date, data.scheduled_time);
        let instance_id = instance.id.clone();

        let trip = self.trip_mut(trip_id)?;
        let stop = trip
            .stops
            .iter_mut()
            .find(|s| &s.id == stop_id)
            .ok_or_else(|| StoreError::StopNotFound(stop_id.to_string()))?;
        stop.activities.push(instance);
        Ok(instance_id)
    }

    pub fn remove_activity(
        &mut self,
        trip_id: &TripId,
        stop_id: &StopId,
        instance_id: &ActivityInstanceId,
    ) -> Result<(), StoreError> {
        let trip = self.trip_mut(trip_id)?;
        let stop = trip
            .stops
            .iter_mut()
            .find(|s| &s.id == stop_id)
            .ok_or_else(|| StoreError::StopNotFound(stop_id.to_string()))?;
        let before = stop.activities.len();
        stop.activities.retain(|a| &a.id != instance_id);
        if stop.activities.len() == before {
            return Err(StoreError::ActivityNotFound(instance_id.to_string()));
        }
        Ok(())
    }

    pub fn update_budget(
        &mut self,
        trip_id: &TripId,
        patch: BudgetPatch,
    ) -> Result<(), StoreError> {
        let trip = self.trip_mut(trip_id)?;
        trip.budget.apply(&patch);
        Ok(())
    }

    /// Flips `is_public`. On the transition to public a fresh slug is
    /// generated; on the transition to private it is cleared.
    pub fn toggle_public(&mut self, trip_id: &TripId) -> Result<Option<String>, StoreError> {
        let trip = self.trip_mut(trip_id)?;
        if trip.is_public {
            trip.is_public = false;
            trip.public_url = None;
            Ok(None)
        } else {
            trip.is_public = true;
            let slug = public_slug(&trip.name);
            trip.public_url = Some(slug.clone());
            Ok(Some(slug))
        }
    }

    pub fn toggle_saved_destination(&mut self, city_id: &CityId) {
        if let Some(pos) = self.saved_destinations.iter().position(|id| id == city_id) {
            self.saved_destinations.remove(pos);
        } else {
            self.saved_destinations.push(city_id.clone());
        }
    }

    pub fn is_saved(&self, city_id: &CityId) -> bool {
        self.saved_destinations.contains(city_id)
    }

    /// `total = transport + accommodation + food + other + Σ booked
    /// activity costs`. The stored activities allocation is reported but
    /// never totaled.
    pub fn calculate_trip_cost(&self, trip_id: &TripId) -> Result<CostBreakdown, StoreError> {
        let trip = self
            .trip(trip_id)
            .ok_or_else(|| StoreError::TripNotFound(trip_id.to_string()))?;
        let booked = trip.booked_activities_cost();
        let budget = &trip.budget;
        Ok(CostBreakdown {
            transport: budget.transport,
            accommodation: budget.accommodation,
            food: budget.food,
            other: budget.other,
            activities_booked: booked,
            activities_allocated: budget.activities,
            total: budget.transport + budget.accommodation + budget.food + budget.other + booked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        format!("{s}:00").parse().unwrap()
    }

    fn new_trip(name: &str) -> NewTrip {
        NewTrip {
            name: name.into(),
            description: "a test trip".into(),
            start_date: date("2026-06-01"),
            end_date: date("2026-06-10"),
            cover_photo: None,
            budget: None,
        }
    }

    fn state_with_trip() -> (TripsState, TripId) {
        let mut state = TripsState::default();
        let id = state.create_trip(new_trip("Test"));
        (state, id)
    }

    #[test]
    fn created_trip_is_draft_private_empty_and_zero_budgeted() {
        let (state, id) = state_with_trip();
        let trip = state.trip(&id).unwrap();

        assert_eq!(trip.status, TripStatus::Draft);
        assert!(!trip.is_public);
        assert!(trip.public_url.is_none());
        assert!(trip.stops.is_empty());
        assert_eq!(trip.budget, Budget::default());
        assert!(trip.created_at.0 > 0);
        assert_eq!(state.current_trip, Some(id));
    }

    #[test]
    fn supplied_budget_fields_are_honored_exactly() {
        let mut state = TripsState::default();
        let id = state.create_trip(NewTrip {
            budget: Some(BudgetPatch {
                total: Some(1000.0),
                food: Some(200.0),
                ..Default::default()
            }),
            ..new_trip("Budgeted")
        });

        let budget = state.trip(&id).unwrap().budget;
        assert_eq!(budget.total, 1000.0);
        assert_eq!(budget.food, 200.0);
        assert_eq!(budget.transport, 0.0);
        assert_eq!(budget.activities, 0.0);
    }

    #[test]
    fn add_then_remove_stop_round_trips_the_sequence() {
        let (mut state, id) = state_with_trip();
        let cities = seed::cities();

        let first = state
            .add_stop(
                &id,
                &cities,
                NewStop {
                    city_id: CityId::new("c1"),
                    arrival_date: date("2026-06-01"),
                    departure_date: date("2026-06-04"),
                },
            )
            .unwrap();
        let before: Vec<StopId> = state.trip(&id).unwrap().stops.iter().map(|s| s.id.clone()).collect();

        let second = state
            .add_stop(
                &id,
                &cities,
                NewStop {
                    city_id: CityId::new("c2"),
                    arrival_date: date("2026-06-04"),
                    departure_date: date("2026-06-08"),
                },
            )
            .unwrap();
        state.remove_stop(&id, &second).unwrap();

        let after: Vec<StopId> = state.trip(&id).unwrap().stops.iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(after, vec![first]);
    }

    #[test]
    fn add_stop_rejects_unknown_city() {
        let (mut state, id) = state_with_trip();
        let err = state
            .add_stop(
                &id,
                &seed::cities(),
                NewStop {
                    city_id: CityId::new("nope"),
                    arrival_date: date("2026-06-01"),
                    departure_date: date("2026-06-02"),
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::CityNotFound("nope".into()));
        assert!(state.trip(&id).unwrap().stops.is_empty());
    }

    #[test]
    fn remove_stop_cascades_its_activities() {
        let (mut state, id) = state_with_trip();
        let cities = seed::cities();
        let activities = seed::activities();

        let stop = state
            .add_stop(
                &id,
                &cities,
                NewStop {
                    city_id: CityId::new("c3"),
                    arrival_date: date("2026-06-01"),
                    departure_date: date("2026-06-05"),
                },
            )
            .unwrap();
        state
            .add_activity(
                &id,
                &stop,
                &activities,
                NewActivity {
                    activity_id: crate::catalog::ActivityId::new("a1"),
                    scheduled_date: date("2026-06-02"),
                    scheduled_time: time("17:00"),
                },
            )
            .unwrap();

        state.remove_stop(&id, &stop).unwrap();
        assert!(state.trip(&id).unwrap().stops.is_empty());
        assert_eq!(
            state.calculate_trip_cost(&id).unwrap().activities_booked,
            0.0
        );
    }

    #[test]
    fn activity_instances_are_copies_with_fresh_ids() {
        let (mut state, id) = state_with_trip();
        let cities = seed::cities();
        let activities = seed::activities();

        let stop = state
            .add_stop(
                &id,
                &cities,
                NewStop {
                    city_id: CityId::new("c1"),
                    arrival_date: date("2026-06-01"),
                    departure_date: date("2026-06-05"),
                },
            )
            .unwrap();
        let first = state
            .add_activity(
                &id,
                &stop,
                &activities,
                NewActivity {
                    activity_id: crate::catalog::ActivityId::new("a1"),
                    scheduled_date: date("2026-06-02"),
                    scheduled_time: time("17:00"),
                },
            )
            .unwrap();
        let second = state
            .add_activity(
                &id,
                &stop,
                &activities,
                NewActivity {
                    activity_id: crate::catalog::ActivityId::new("a1"),
                    scheduled_date: date("2026-06-03"),
                    scheduled_time: time("09:00"),
                },
            )
            .unwrap();

        assert_ne!(first, second);
        let trip = state.trip(&id).unwrap();
        let booked = &trip.stop(&stop).unwrap().activities;
        assert_eq!(booked.len(), 2);
        assert!(booked.iter().all(|a| a.catalog_id.as_str() == "a1"));
        assert!(booked.iter().all(|a| a.id.as_str() != "a1"));
    }

    #[test]
    fn reorder_replaces_sequence_wholesale() {
        let (mut state, id) = state_with_trip();
        let cities = seed::cities();
        let mut stops = Vec::new();
        for city in ["c1", "c2", "c3"] {
            stops.push(
                state
                    .add_stop(
                        &id,
                        &cities,
                        NewStop {
                            city_id: CityId::new(city),
                            arrival_date: date("2026-06-01"),
                            departure_date: date("2026-06-02"),
                        },
                    )
                    .unwrap(),
            );
        }

        state
            .reorder_stops(&id, &[stops[2].clone(), stops[0].clone(), stops[1].clone()])
            .unwrap();
        let order: Vec<StopId> = state.trip(&id).unwrap().stops.iter().map(|s| s.id.clone()).collect();
        assert_eq!(order, vec![stops[2].clone(), stops[0].clone(), stops[1].clone()]);

        // Ids the trip does not hold are ignored; unmentioned stops drop out.
        state
            .reorder_stops(&id, &[stops[1].clone(), StopId::new("ghost")])
            .unwrap();
        let order: Vec<StopId> = state.trip(&id).unwrap().stops.iter().map(|s| s.id.clone()).collect();
        assert_eq!(order, vec![stops[1].clone()]);
    }

    #[test]
    fn delete_trip_clears_current_pointer() {
        let (mut state, id) = state_with_trip();
        assert_eq!(state.current_trip, Some(id.clone()));
        state.delete_trip(&id).unwrap();
        assert!(state.current_trip.is_none());
        assert_eq!(
            state.delete_trip(&id).unwrap_err(),
            StoreError::TripNotFound(id.to_string())
        );
    }

    #[test]
    fn toggle_saved_destination_twice_restores_membership() {
        let mut state = TripsState::default();
        let city = CityId::new("c5");

        assert!(!state.is_saved(&city));
        state.toggle_saved_destination(&city);
        assert!(state.is_saved(&city));
        state.toggle_saved_destination(&city);
        assert!(!state.is_saved(&city));
    }

    #[test]
    fn toggle_public_generates_then_clears_slug() {
        let (mut state, id) = state_with_trip();

        let slug = state.toggle_public(&id).unwrap();
        assert!(slug.is_some());
        let trip = state.trip(&id).unwrap();
        assert!(trip.is_public);
        assert_eq!(trip.public_url, slug);
        assert!(slug.as_deref().unwrap().starts_with("test-"));

        assert_eq!(state.toggle_public(&id).unwrap(), None);
        let trip = state.trip(&id).unwrap();
        assert!(!trip.is_public);
        assert!(trip.public_url.is_none());
    }

    #[test]
    fn identical_names_made_public_back_to_back_never_collide() {
        let mut state = TripsState::default();
        let a = state.create_trip(new_trip("Paris Trip"));
        let b = state.create_trip(new_trip("Paris Trip"));

        let slug_a = state.toggle_public(&a).unwrap().unwrap();
        let slug_b = state.toggle_public(&b).unwrap().unwrap();
        assert_ne!(slug_a, slug_b);
        assert!(slug_a.starts_with("paris-trip-"));
    }

    #[test]
    fn share_lookup_prefers_slug_and_falls_back_to_id() {
        let (mut state, id) = state_with_trip();
        assert_eq!(
            state.trip_by_slug_or_id(id.as_str()).map(|t| t.id.clone()),
            Some(id.clone())
        );

        let slug = state.toggle_public(&id).unwrap().unwrap();
        assert_eq!(
            state.trip_by_slug_or_id(&slug).map(|t| t.id.clone()),
            Some(id)
        );
        assert!(state.trip_by_slug_or_id("missing").is_none());
    }

    #[test]
    fn worked_cost_scenario() {
        // Trip "Test" with budget.total 1000, one stop in c1, a1 (150)
        // and a4 (200) booked: activities component 350, total =
        // transport + accommodation + food + other + 350.
        let mut state = TripsState::default();
        let id = state.create_trip(NewTrip {
            budget: Some(BudgetPatch {
                total: Some(1000.0),
                ..Default::default()
            }),
            ..new_trip("Test")
        });
        let cities = seed::cities();
        let activities = seed::activities();

        let stop = state
            .add_stop(
                &id,
                &cities,
                NewStop {
                    city_id: CityId::new("c1"),
                    arrival_date: date("2026-06-01"),
                    departure_date: date("2026-06-05"),
                },
            )
            .unwrap();
        for activity in ["a1", "a4"] {
            state
                .add_activity(
                    &id,
                    &stop,
                    &activities,
                    NewActivity {
                        activity_id: crate::catalog::ActivityId::new(activity),
                        scheduled_date: date("2026-06-02"),
                        scheduled_time: time("10:00"),
                    },
                )
                .unwrap();
        }

        let cost = state.calculate_trip_cost(&id).unwrap();
        assert_eq!(cost.activities_booked, 350.0);
        assert_eq!(
            cost.total,
            cost.transport + cost.accommodation + cost.food + cost.other + 350.0
        );
    }

    #[test]
    fn missing_trip_cost_is_an_explicit_error() {
        let state = TripsState::default();
        assert!(matches!(
            state.calculate_trip_cost(&TripId::new("ghost")),
            Err(StoreError::TripNotFound(_))
        ));
    }

    proptest! {
        /// The cost invariant holds after arbitrary interleavings of
        /// add_activity and remove_activity.
        #[test]
        fn cost_invariant_under_arbitrary_activity_churn(ops in proptest::collection::vec(0usize..16, 1..40)) {
            let mut state = TripsState::default();
            let id = state.create_trip(new_trip("Churn"));
            let cities = seed::cities();
            let activities = seed::activities();

            let stop = state
                .add_stop(
                    &id,
                    &cities,
                    NewStop {
                        city_id: CityId::new("c1"),
                        arrival_date: date("2026-06-01"),
                        departure_date: date("2026-06-10"),
                    },
                )
                .unwrap();

            let mut booked: Vec<ActivityInstanceId> = Vec::new();
            for op in ops {
                if op < activities.len() {
                    let instance = state
                        .add_activity(
                            &id,
                            &stop,
                            &activities,
                            NewActivity {
                                activity_id: activities[op].id.clone(),
                                scheduled_date: date("2026-06-02"),
                                scheduled_time: time("12:00"),
                            },
                        )
                        .unwrap();
                    booked.push(instance);
                } else if let Some(instance) = booked.pop() {
                    state.remove_activity(&id, &stop, &instance).unwrap();
                }

                let trip = state.trip(&id).unwrap();
                let expected: f64 = trip
                    .stops
                    .iter()
                    .flat_map(|s| &s.activities)
                    .map(|a| a.cost)
                    .sum();
                let cost = state.calculate_trip_cost(&id).unwrap();
                prop_assert_eq!(cost.activities_booked, expected);
                prop_assert_eq!(
                    cost.total,
                    cost.transport + cost.accommodation + cost.food + cost.other + expected
                );
            }
        }
    }
}
