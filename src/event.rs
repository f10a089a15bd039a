use serde::{Deserialize, Serialize};

use crate::catalog::CityId;
use crate::session::{LoginPayload, ProfileUpdate, SignupPayload};
use crate::trips::{
    ActivityInstanceId, BudgetPatch, NewActivity, NewStop, NewTrip, StopId, TripId, TripPatch,
};
use crate::ui::{CalendarViewMode, ToastId, ToastKind, TripViewMode};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    Noop,

    /// Kick off restoration of the persisted slices.
    AppStarted,

    /// The shell reports a path change; the core resolves redirects.
    Navigated { path: String },

    // --- Auth ---
    LoginRequested(LoginPayload),
    SignupRequested(SignupPayload),
    /// Simulated network latency for a pending login/signup elapsed.
    AuthLatencyElapsed,
    LogoutRequested,
    ProfileUpdated(ProfileUpdate),

    // --- Trips ---
    CreateTripRequested(Box<NewTrip>),
    TripCreationLatencyElapsed,
    TripUpdated { trip_id: TripId, patch: TripPatch },
    TripDeleted { trip_id: TripId },
    CurrentTripSet { trip_id: Option<TripId> },
    StopAdded { trip_id: TripId, stop: NewStop },
    StopRemoved { trip_id: TripId, stop_id: StopId },
    StopsReordered { trip_id: TripId, order: Vec<StopId> },
    ActivityAdded {
        trip_id: TripId,
        stop_id: StopId,
        activity: NewActivity,
    },
    ActivityRemoved {
        trip_id: TripId,
        stop_id: StopId,
        instance_id: ActivityInstanceId,
    },
    BudgetUpdated { trip_id: TripId, patch: BudgetPatch },
    PublicToggled { trip_id: TripId },
    SavedDestinationToggled { city_id: CityId },

    // --- UI ---
    ModalOpened {
        name: String,
        payload: Option<serde_json::Value>,
    },
    ModalClosed,
    ToastRequested { kind: ToastKind, message: String },
    /// Manual dismissal; cancels the pending auto-dismiss timer.
    ToastDismissed { id: ToastId },
    /// Auto-dismiss timer fired; tolerates an already-removed toast.
    ToastExpired { id: ToastId },
    SidebarToggled,
    SidebarClosed,
    PageLoadingSet { loading: bool },
    GlobalSearchChanged { query: String },
    ThemeToggled,
    TripViewModeSet { mode: TripViewMode },
    CalendarViewModeSet { mode: CalendarViewMode },

    // --- Persistence plumbing (KeyValue capability responses) ---
    TripsLoaded(Result<Option<Vec<u8>>, String>),
    SessionLoaded(Result<Option<Vec<u8>>, String>),
    TripsWritten(Result<(), String>),
    SessionWritten(Result<(), String>),
}

impl Event {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Noop => "noop",
            Event::AppStarted => "app_started",
            Event::Navigated { .. } => "navigated",
            Event::LoginRequested(_) => "login_requested",
            Event::SignupRequested(_) => "signup_requested",
            Event::AuthLatencyElapsed => "auth_latency_elapsed",
            Event::LogoutRequested => "logout_requested",
            Event::ProfileUpdated(_) => "profile_updated",
            Event::CreateTripRequested(_) => "create_trip_requested",
            Event::TripCreationLatencyElapsed => "trip_creation_latency_elapsed",
            Event::TripUpdated { .. } => "trip_updated",
            Event::TripDeleted { .. } => "trip_deleted",
            Event::CurrentTripSet { .. } => "current_trip_set",
            Event::StopAdded { .. } => "stop_added",
            Event::StopRemoved { .. } => "stop_removed",
            Event::StopsReordered { .. } => "stops_reordered",
            Event::ActivityAdded { .. } => "activity_added",
            Event::ActivityRemoved { .. } => "activity_removed",
            Event::BudgetUpdated { .. } => "budget_updated",
            Event::PublicToggled { .. } => "public_toggled",
            Event::SavedDestinationToggled { .. } => "saved_destination_toggled",
            Event::ModalOpened { .. } => "modal_opened",
            Event::ModalClosed => "modal_closed",
            Event::ToastRequested { .. } => "toast_requested",
            Event::ToastDismissed { .. } => "toast_dismissed",
            Event::ToastExpired { .. } => "toast_expired",
            Event::SidebarToggled => "sidebar_toggled",
            Event::SidebarClosed => "sidebar_closed",
            Event::PageLoadingSet { .. } => "page_loading_set",
            Event::GlobalSearchChanged { .. } => "global_search_changed",
            Event::ThemeToggled => "theme_toggled",
            Event::TripViewModeSet { .. } => "trip_view_mode_set",
            Event::CalendarViewModeSet { .. } => "calendar_view_mode_set",
            Event::TripsLoaded(_) => "trips_loaded",
            Event::SessionLoaded(_) => "session_loaded",
            Event::TripsWritten(_) => "trips_written",
            Event::SessionWritten(_) => "session_written",
        }
    }
}
