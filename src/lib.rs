//! Globetrotter core: a headless travel-planning application core.
//!
//! The crate follows the Crux shared-core architecture. A shell (browser,
//! mobile, test harness) renders the [`ViewModel`], dispatches [`Event`]s,
//! and services capability requests: rendering, key/value persistence and
//! cancellable timers. Everything else — trips, itineraries, budgets, the
//! mock session, routing — is pure Rust in here.
//!
//! There is no backend. Catalog data is fixed at load time, authentication
//! fabricates its user record, and "network" latency is a timer the shell
//! resolves. State survives restarts through two key/value snapshots, one
//! for trips and one for the session.

#![forbid(unsafe_code)]

pub mod capabilities;
pub mod catalog;
pub mod event;
mod ids;
pub mod model;
pub mod routes;
pub mod seed;
pub mod session;
pub mod storage;
pub mod trips;
pub mod ui;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub use crate::capabilities::{Capabilities, Effect, TimerId, TimerOperation, TimerOutput};
pub use crate::catalog::{
    search_activities, search_cities, Activity, ActivityCategory, ActivityFilters, ActivityId,
    City, CityFilters, CityId, Region,
};
pub use crate::event::Event;
pub use crate::model::{Model, UnixTimeMs};
pub use crate::routes::Route;
pub use crate::session::{
    LoginPayload, PendingAuth, ProfileUpdate, SignupPayload, User, UserId, ValidationError,
    LOGIN_LATENCY_MS, SIGNUP_LATENCY_MS,
};
pub use crate::trips::{
    ActivityInstance, ActivityInstanceId, Budget, BudgetPatch, CostBreakdown, NewActivity,
    NewStop, NewTrip, Stop, StopId, StoreError, Trip, TripId, TripPatch, TripStatus, TripsState,
};
pub use crate::ui::{
    ActiveModal, CalendarViewMode, Theme, Toast, ToastId, ToastKind, TripViewMode, UiState,
    TOAST_DISMISS_MS,
};

/// Simulated latency for the trip-creation wizard submit.
pub const TRIP_CREATION_LATENCY_MS: u64 = 1_500;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ToastView {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripCard {
    pub id: String,
    pub name: String,
    pub cover_photo: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub is_public: bool,
    pub stop_count: usize,
    pub activity_count: usize,
    pub budget_total: f64,
    pub planned_spend: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityView {
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    pub cost: f64,
    pub duration_hours: f64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StopView {
    pub id: String,
    pub city_name: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub nights: i64,
    pub activities: Vec<ActivityView>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItineraryView {
    pub trip_id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub is_public: bool,
    pub public_url: Option<String>,
    pub stops: Vec<StopView>,
}

/// Budget picture for one trip. `remaining` compares the stored budget
/// envelope against derived spend; going negative flips `over_budget`
/// rather than being rejected anywhere.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BudgetView {
    pub trip_id: String,
    pub name: String,
    pub breakdown: CostBreakdown,
    pub budget_total: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarEntry {
    pub time: NaiveTime,
    pub name: String,
    pub city: String,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarView {
    pub trip_id: String,
    pub name: String,
    pub mode: CalendarViewMode,
    pub days: Vec<CalendarDay>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CityCard {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: Region,
    pub cost_index: u32,
    pub popularity: f32,
    pub image: String,
    pub description: String,
    pub is_saved: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub user_name: Option<String>,
    pub total_trips: usize,
    pub upcoming_trips: usize,
    pub completed_trips: usize,
    pub saved_destinations: usize,
    pub total_budgeted: f64,
    pub total_planned_spend: f64,
    pub recent_trips: Vec<TripCard>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SharedItineraryView {
    pub name: String,
    pub description: String,
    pub cover_photo: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub stops: Vec<StopView>,
    pub total_cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Screen {
    Login { is_loading: bool },
    Dashboard(DashboardView),
    TripList { mode: TripViewMode, trips: Vec<TripCard> },
    CreateTrip { is_creating: bool },
    Itinerary(Option<ItineraryView>),
    Budget(Option<BudgetView>),
    Calendar(Option<CalendarView>),
    Cities { query: String, cities: Vec<CityCard> },
    Activities { query: String, activities: Vec<Activity> },
    Profile(Option<User>),
    Share(Option<SharedItineraryView>),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub screen: Screen,
    pub toasts: Vec<ToastView>,
    pub active_modal: Option<ActiveModal>,
    pub sidebar_open: bool,
    pub theme: Theme,
    pub is_authenticated: bool,
    pub is_busy: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct App;

impl App {
    /// Queue a toast and its auto-dismiss timer. The timer handle lives on
    /// the toast so a manual dismissal can revoke it.
    fn enqueue_toast(
        model: &mut Model,
        caps: &Capabilities,
        kind: ToastKind,
        message: impl Into<String>,
    ) {
        let timer = TimerId::generate();
        let toast = model.ui.push_toast(kind, message, timer.clone());
        caps.timer.start(timer, TOAST_DISMISS_MS, move |output| match output {
            TimerOutput::Elapsed { .. } => Event::ToastExpired { id: toast },
            TimerOutput::Cancelled { .. } => Event::Noop,
        });
    }

    fn surface_error(model: &mut Model, caps: &Capabilities, error: impl std::fmt::Display) {
        let message = error.to_string();
        tracing::warn!(%message, "operation rejected");
        Self::enqueue_toast(model, caps, ToastKind::Error, message);
    }

    fn persist_trips(model: &Model, caps: &Capabilities) {
        match storage::encode_trips(&model.trips) {
            Ok(bytes) => caps.key_value.set(storage::TRIPS_KEY.to_string(), bytes, |result| {
                Event::TripsWritten(result.map(|_| ()).map_err(|e| e.to_string()))
            }),
            Err(e) => tracing::error!(error = %e, "trips snapshot not persisted"),
        }
    }

    fn persist_session(model: &Model, caps: &Capabilities) {
        match storage::encode_session(&model.session) {
            Ok(bytes) => caps.key_value.set(storage::SESSION_KEY.to_string(), bytes, |result| {
                Event::SessionWritten(result.map(|_| ()).map_err(|e| e.to_string()))
            }),
            Err(e) => tracing::error!(error = %e, "session snapshot not persisted"),
        }
    }

    fn start_latency_timer(caps: &Capabilities, millis: u64, done: Event) {
        caps.timer.start(TimerId::generate(), millis, move |output| match output {
            TimerOutput::Elapsed { .. } => done,
            TimerOutput::Cancelled { .. } => Event::Noop,
        });
    }

    /// Applies a trip-store result: persist and optionally toast on
    /// success, surface the error otherwise.
    fn after_mutation(
        model: &mut Model,
        caps: &Capabilities,
        result: Result<(), StoreError>,
        success_toast: Option<&str>,
    ) {
        match result {
            Ok(()) => {
                if let Some(message) = success_toast {
                    Self::enqueue_toast(model, caps, ToastKind::Success, message);
                }
                Self::persist_trips(model, caps);
            }
            Err(e) => Self::surface_error(model, caps, e),
        }
    }

    // --- View builders ---

    fn trip_card(model: &Model, trip: &Trip) -> TripCard {
        let planned_spend = model
            .trips
            .calculate_trip_cost(&trip.id)
            .map(|c| c.total)
            .unwrap_or_default();
        TripCard {
            id: trip.id.to_string(),
            name: trip.name.clone(),
            cover_photo: trip.cover_photo.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            status: trip.status,
            is_public: trip.is_public,
            stop_count: trip.stops.len(),
            activity_count: trip.stops.iter().map(|s| s.activities.len()).sum(),
            budget_total: trip.budget.total,
            planned_spend,
        }
    }

    fn stop_view(stop: &Stop) -> StopView {
        let mut activities: Vec<ActivityView> = stop
            .activities
            .iter()
            .map(|a| ActivityView {
                id: a.id.to_string(),
                name: a.name.clone(),
                category: a.category,
                cost: a.cost,
                duration_hours: a.duration_hours,
                scheduled_date: a.scheduled_date,
                scheduled_time: a.scheduled_time,
            })
            .collect();
        activities.sort_by_key(|a| (a.scheduled_date, a.scheduled_time));

        StopView {
            id: stop.id.to_string(),
            city_name: stop.city.name.clone(),
            country: stop.city.country.clone(),
            arrival_date: stop.arrival_date,
            departure_date: stop.departure_date,
            nights: (stop.departure_date - stop.arrival_date).num_days().max(0),
            activities,
        }
    }

    fn itinerary_view(trip: &Trip) -> ItineraryView {
        ItineraryView {
            trip_id: trip.id.to_string(),
            name: trip.name.clone(),
            description: trip.description.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            status: trip.status,
            is_public: trip.is_public,
            public_url: trip.public_url.clone(),
            stops: trip.stops.iter().map(Self::stop_view).collect(),
        }
    }

    fn budget_view(model: &Model, trip_id: &TripId) -> Option<BudgetView> {
        let trip = model.trips.trip(trip_id)?;
        let breakdown = model.trips.calculate_trip_cost(trip_id).ok()?;
        let remaining = trip.budget.total - breakdown.total;
        Some(BudgetView {
            trip_id: trip.id.to_string(),
            name: trip.name.clone(),
            breakdown,
            budget_total: trip.budget.total,
            total_spent: breakdown.total,
            remaining,
            over_budget: remaining < 0.0,
        })
    }

    /// One entry per date in the trip range (capped at a year), with that
    /// day's activities across all stops, time-sorted.
    fn calendar_days(trip: &Trip) -> Vec<CalendarDay> {
        let mut days = Vec::new();
        let mut date = trip.start_date;
        while date <= trip.end_date && days.len() < 366 {
            let mut entries: Vec<CalendarEntry> = trip
                .stops
                .iter()
                .flat_map(|stop| {
                    stop.activities
                        .iter()
                        .filter(|a| a.scheduled_date == date)
                        .map(|a| CalendarEntry {
                            time: a.scheduled_time,
                            name: a.name.clone(),
                            city: stop.city.name.clone(),
                            cost: a.cost,
                        })
                })
                .collect();
            entries.sort_by_key(|e| e.time);
            days.push(CalendarDay { date, entries });
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        days
    }

    fn dashboard_view(model: &Model) -> DashboardView {
        let trips = &model.trips.trips;
        let mut recent: Vec<&Trip> = trips.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        DashboardView {
            user_name: model.session.user.as_ref().map(|u| u.name.clone()),
            total_trips: trips.len(),
            upcoming_trips: trips
                .iter()
                .filter(|t| matches!(t.status, TripStatus::Upcoming | TripStatus::Confirmed))
                .count(),
            completed_trips: trips
                .iter()
                .filter(|t| t.status == TripStatus::Completed)
                .count(),
            saved_destinations: model.trips.saved_destinations.len(),
            total_budgeted: trips.iter().map(|t| t.budget.total).sum(),
            total_planned_spend: trips
                .iter()
                .filter_map(|t| model.trips.calculate_trip_cost(&t.id).ok())
                .map(|c| c.total)
                .sum(),
            recent_trips: recent
                .into_iter()
                .take(3)
                .map(|t| Self::trip_card(model, t))
                .collect(),
        }
    }

    fn share_view(model: &Model, key: &str) -> Option<SharedItineraryView> {
        let trip = model.trips.trip_by_slug_or_id(key)?;
        let total_cost = model
            .trips
            .calculate_trip_cost(&trip.id)
            .map(|c| c.total)
            .unwrap_or_default();
        Some(SharedItineraryView {
            name: trip.name.clone(),
            description: trip.description.clone(),
            cover_photo: trip.cover_photo.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            stops: trip.stops.iter().map(Self::stop_view).collect(),
            total_cost,
        })
    }

    fn screen(model: &Model) -> Screen {
        match &model.route {
            Route::Login => Screen::Login {
                is_loading: model.session.is_loading,
            },
            Route::Dashboard => Screen::Dashboard(Self::dashboard_view(model)),
            Route::TripList => Screen::TripList {
                mode: model.ui.trip_view_mode,
                trips: model
                    .trips
                    .trips
                    .iter()
                    .map(|t| Self::trip_card(model, t))
                    .collect(),
            },
            Route::CreateTrip => Screen::CreateTrip {
                is_creating: model.pending_trip.is_some(),
            },
            Route::Itinerary { trip_id } => {
                Screen::Itinerary(model.trips.trip(trip_id).map(Self::itinerary_view))
            }
            Route::Budget { trip_id } => Screen::Budget(Self::budget_view(model, trip_id)),
            Route::Calendar { trip_id } => {
                Screen::Calendar(model.trips.trip(trip_id).map(|trip| CalendarView {
                    trip_id: trip.id.to_string(),
                    name: trip.name.clone(),
                    mode: model.ui.calendar_view_mode,
                    days: Self::calendar_days(trip),
                }))
            }
            Route::Cities => {
                let query = model.ui.global_search_query.clone();
                let cities = search_cities(&model.cities, &query, &CityFilters::default())
                    .into_iter()
                    .map(|city| CityCard {
                        id: city.id.to_string(),
                        name: city.name.clone(),
                        country: city.country.clone(),
                        region: city.region,
                        cost_index: city.cost_index,
                        popularity: city.popularity,
                        image: city.image.clone(),
                        description: city.description.clone(),
                        is_saved: model.trips.is_saved(&city.id),
                    })
                    .collect();
                Screen::Cities { query, cities }
            }
            Route::Activities => {
                let query = model.ui.global_search_query.clone();
                let activities =
                    search_activities(&model.activities, &query, &ActivityFilters::default())
                        .into_iter()
                        .cloned()
                        .collect();
                Screen::Activities { query, activities }
            }
            Route::Profile => Screen::Profile(model.session.user.clone()),
            Route::Share { key } => Screen::Share(Self::share_view(model, key)),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::debug!(event = event.name(), "handling event");

        match event {
            Event::Noop => {}

            Event::AppStarted => {
                caps.key_value.get(storage::TRIPS_KEY.to_string(), |result| {
                    Event::TripsLoaded(result.map_err(|e| e.to_string()))
                });
                caps.key_value.get(storage::SESSION_KEY.to_string(), |result| {
                    Event::SessionLoaded(result.map_err(|e| e.to_string()))
                });
                caps.render.render();
            }

            Event::Navigated { path } => {
                model.route = Route::resolve(&path, model.session.is_authenticated);
                caps.render.render();
            }

            // --- Auth ---
            Event::LoginRequested(payload) => match payload.validate() {
                Ok(()) => {
                    model.session.begin(PendingAuth::Login {
                        email: payload.email,
                    });
                    Self::start_latency_timer(caps, LOGIN_LATENCY_MS, Event::AuthLatencyElapsed);
                    caps.render.render();
                }
                Err(e) => {
                    Self::surface_error(model, caps, e);
                    caps.render.render();
                }
            },

            Event::SignupRequested(payload) => match payload.validate() {
                Ok(()) => {
                    model.session.begin(PendingAuth::Signup {
                        name: payload.name,
                        email: payload.email,
                    });
                    Self::start_latency_timer(caps, SIGNUP_LATENCY_MS, Event::AuthLatencyElapsed);
                    caps.render.render();
                }
                Err(e) => {
                    Self::surface_error(model, caps, e);
                    caps.render.render();
                }
            },

            Event::AuthLatencyElapsed => {
                if model.session.complete_pending() {
                    model.route = Route::Dashboard;
                    Self::persist_session(model, caps);
                }
                caps.render.render();
            }

            Event::LogoutRequested => {
                model.session.logout();
                model.route = Route::Login;
                Self::persist_session(model, caps);
                caps.render.render();
            }

            Event::ProfileUpdated(update) => {
                if model.session.update_profile(update) {
                    Self::enqueue_toast(model, caps, ToastKind::Success, "Profile updated");
                    Self::persist_session(model, caps);
                } else {
                    tracing::warn!("profile update ignored: no active session");
                }
                caps.render.render();
            }

            // --- Trips ---
            Event::CreateTripRequested(data) => {
                model.pending_trip = Some(*data);
                model.ui.page_loading = true;
                Self::start_latency_timer(
                    caps,
                    TRIP_CREATION_LATENCY_MS,
                    Event::TripCreationLatencyElapsed,
                );
                caps.render.render();
            }

            Event::TripCreationLatencyElapsed => {
                if let Some(data) = model.pending_trip.take() {
                    let id = model.trips.create_trip(data);
                    model.ui.page_loading = false;
                    model.route = Route::Itinerary { trip_id: id };
                    Self::enqueue_toast(model, caps, ToastKind::Success, "Trip created");
                    Self::persist_trips(model, caps);
                }
                caps.render.render();
            }

            Event::TripUpdated { trip_id, patch } => {
                let result = model.trips.update_trip(&trip_id, patch);
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::TripDeleted { trip_id } => {
                let result = model.trips.delete_trip(&trip_id);
                Self::after_mutation(model, caps, result, Some("Trip deleted"));
                caps.render.render();
            }

            Event::CurrentTripSet { trip_id } => {
                model.trips.set_current_trip(trip_id);
                caps.render.render();
            }

            Event::StopAdded { trip_id, stop } => {
                let result = model
                    .trips
                    .add_stop(&trip_id, &model.cities, stop)
                    .map(|_| ());
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::StopRemoved { trip_id, stop_id } => {
                let result = model.trips.remove_stop(&trip_id, &stop_id);
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::StopsReordered { trip_id, order } => {
                let result = model.trips.reorder_stops(&trip_id, &order);
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::ActivityAdded {
                trip_id,
                stop_id,
                activity,
            } => {
                let result = model
                    .trips
                    .add_activity(&trip_id, &stop_id, &model.activities, activity)
                    .map(|_| ());
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::ActivityRemoved {
                trip_id,
                stop_id,
                instance_id,
            } => {
                let result = model.trips.remove_activity(&trip_id, &stop_id, &instance_id);
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::BudgetUpdated { trip_id, patch } => {
                let result = model.trips.update_budget(&trip_id, patch);
                Self::after_mutation(model, caps, result, None);
                caps.render.render();
            }

            Event::PublicToggled { trip_id } => {
                match model.trips.toggle_public(&trip_id) {
                    Ok(Some(_)) => {
                        Self::enqueue_toast(model, caps, ToastKind::Success, "Trip is now public");
                        Self::persist_trips(model, caps);
                    }
                    Ok(None) => {
                        Self::enqueue_toast(model, caps, ToastKind::Info, "Trip is now private");
                        Self::persist_trips(model, caps);
                    }
                    Err(e) => Self::surface_error(model, caps, e),
                }
                caps.render.render();
            }

            Event::SavedDestinationToggled { city_id } => {
                model.trips.toggle_saved_destination(&city_id);
                Self::persist_trips(model, caps);
                caps.render.render();
            }

            // --- UI ---
            Event::ModalOpened { name, payload } => {
                model.ui.open_modal(name, payload);
                caps.render.render();
            }

            Event::ModalClosed => {
                model.ui.close_modal();
                caps.render.render();
            }

            Event::ToastRequested { kind, message } => {
                Self::enqueue_toast(model, caps, kind, message);
                caps.render.render();
            }

            Event::ToastDismissed { id } => {
                if let Some(timer) = model.ui.dismiss_toast(&id) {
                    caps.timer.cancel(timer);
                }
                caps.render.render();
            }

            Event::ToastExpired { id } => {
                model.ui.expire_toast(&id);
                caps.render.render();
            }

            Event::SidebarToggled => {
                model.ui.sidebar_open = !model.ui.sidebar_open;
                caps.render.render();
            }

            Event::SidebarClosed => {
                model.ui.sidebar_open = false;
                caps.render.render();
            }

            Event::PageLoadingSet { loading } => {
                model.ui.page_loading = loading;
                caps.render.render();
            }

            Event::GlobalSearchChanged { query } => {
                model.ui.global_search_query = query;
                caps.render.render();
            }

            Event::ThemeToggled => {
                model.ui.theme = model.ui.theme.toggle();
                caps.render.render();
            }

            Event::TripViewModeSet { mode } => {
                model.ui.trip_view_mode = mode;
                caps.render.render();
            }

            Event::CalendarViewModeSet { mode } => {
                model.ui.calendar_view_mode = mode;
                caps.render.render();
            }

            // --- Persistence plumbing ---
            Event::TripsLoaded(result) => {
                match result {
                    Ok(Some(bytes)) => match storage::decode_trips(&bytes) {
                        Ok(trips) => model.trips = trips,
                        Err(e) => {
                            tracing::warn!(error = %e, "trips snapshot unreadable, keeping seeds")
                        }
                    },
                    Ok(None) => tracing::debug!("no trips snapshot, keeping seeds"),
                    Err(e) => tracing::warn!(error = %e, "trips snapshot fetch failed"),
                }
                caps.render.render();
            }

            Event::SessionLoaded(result) => {
                match result {
                    Ok(Some(bytes)) => match storage::decode_session(&bytes) {
                        Ok(session) => model.session = session,
                        Err(e) => {
                            tracing::warn!(error = %e, "session snapshot unreadable")
                        }
                    },
                    Ok(None) => {}
                    Err(e) => tracing::warn!(error = %e, "session snapshot fetch failed"),
                }
                caps.render.render();
            }

            Event::TripsWritten(result) => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "trips snapshot write failed");
                }
            }

            Event::SessionWritten(result) => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "session snapshot write failed");
                }
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel {
            screen: Self::screen(model),
            toasts: model
                .ui
                .toasts
                .iter()
                .map(|t| ToastView {
                    id: t.id.to_string(),
                    kind: t.kind,
                    message: t.message.clone(),
                    duration_ms: TOAST_DISMISS_MS,
                })
                .collect(),
            active_modal: model.ui.active_modal.clone(),
            sidebar_open: model.ui.sidebar_open,
            theme: model.ui.theme,
            is_authenticated: model.session.is_authenticated,
            is_busy: model.session.is_loading || model.ui.page_loading,
        }
    }
}
