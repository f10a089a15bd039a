//! Ephemeral view state: the active modal, the toast queue and view-mode
//! toggles. None of this slice is persisted.

use serde::{Deserialize, Serialize};

use crate::capabilities::TimerId;
use crate::ids::typed_id;

typed_id!(ToastId);

/// Toasts dismiss themselves after this long unless removed earlier.
pub const TOAST_DISMISS_MS: u64 = 5_000;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    /// Handle of the pending auto-dismiss timer, kept so early removal can
    /// cancel it.
    pub timer: TimerId,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActiveModal {
    pub name: String,
    pub payload: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarViewMode {
    #[default]
    Month,
    Week,
    Day,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub active_modal: Option<ActiveModal>,
    pub toasts: Vec<Toast>,
    pub page_loading: bool,
    pub global_search_query: String,
    pub theme: Theme,
    pub trip_view_mode: TripViewMode,
    pub calendar_view_mode: CalendarViewMode,
}

impl UiState {
    /// Single-active-modal: opening a second replaces the first.
    pub fn open_modal(&mut self, name: impl Into<String>, payload: Option<serde_json::Value>) {
        self.active_modal = Some(ActiveModal {
            name: name.into(),
            payload,
        });
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>, timer: TimerId) -> ToastId {
        let id = ToastId::generate();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.into(),
            timer,
        });
        id
    }

    /// Manual dismissal. Returns the timer handle to cancel, or `None` if
    /// the toast was already gone.
    pub fn dismiss_toast(&mut self, id: &ToastId) -> Option<TimerId> {
        let pos = self.toasts.iter().position(|t| &t.id == id)?;
        Some(self.toasts.remove(pos).timer)
    }

    /// Auto-dismiss from the expiry timer. Tolerates the toast having been
    /// removed already.
    pub fn expire_toast(&mut self, id: &ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| &t.id != id);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_second_modal_replaces_the_first() {
        let mut ui = UiState::default();
        ui.open_modal("confirm-delete", None);
        ui.open_modal("share-trip", Some(serde_json::json!({ "tripId": "t1" })));

        let modal = ui.active_modal.as_ref().unwrap();
        assert_eq!(modal.name, "share-trip");

        ui.close_modal();
        assert!(ui.active_modal.is_none());
    }

    #[test]
    fn dismiss_returns_the_timer_handle_once() {
        let mut ui = UiState::default();
        let timer = TimerId::generate();
        let id = ui.push_toast(ToastKind::Success, "Saved", timer.clone());

        assert_eq!(ui.dismiss_toast(&id), Some(timer));
        assert!(ui.toasts.is_empty());
        assert_eq!(ui.dismiss_toast(&id), None);
    }

    #[test]
    fn expiry_is_idempotent_after_manual_removal() {
        let mut ui = UiState::default();
        let id = ui.push_toast(ToastKind::Info, "Heads up", TimerId::generate());

        ui.dismiss_toast(&id);
        assert!(!ui.expire_toast(&id));
        assert!(ui.toasts.is_empty());
    }

    #[test]
    fn toasts_queue_in_order() {
        let mut ui = UiState::default();
        ui.push_toast(ToastKind::Info, "first", TimerId::generate());
        ui.push_toast(ToastKind::Error, "second", TimerId::generate());

        let messages: Vec<_> = ui.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
