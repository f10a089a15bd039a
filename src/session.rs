//! Mock session lifecycle. Login and signup validate the form, wait out a
//! simulated network delay, then fabricate a user record unconditionally —
//! there is no credential store behind this.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::typed_id;
use crate::model::UnixTimeMs;

typed_id!(UserId);

pub const LOGIN_LATENCY_MS: u64 = 1_500;
pub const SIGNUP_LATENCY_MS: u64 = 2_000;
pub const MIN_PASSWORD_LEN: usize = 6;

const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&fit=crop";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub adventure_type: String,
    pub budget_range: String,
    pub travel_style: String,
    pub preferred_destinations: Vec<String>,
    pub trip_duration: String,
    pub created_at: UnixTimeMs,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub adventure_type: Option<String>,
    pub budget_range: Option<String>,
    pub travel_style: Option<String>,
    pub preferred_destinations: Option<Vec<String>>,
    pub trip_duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl LoginPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(())
    }
}

impl SignupPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// An auth request waiting out its simulated latency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PendingAuth {
    Login { email: String },
    Signup { name: String, email: String },
}

/// Only `user` and `is_authenticated` persist; everything else is
/// session-transient.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    #[serde(skip)]
    pub is_loading: bool,
    #[serde(skip)]
    pub pending: Option<PendingAuth>,
}

impl SessionState {
    pub fn begin(&mut self, pending: PendingAuth) {
        self.is_loading = true;
        self.pending = Some(pending);
    }

    /// Called once the latency timer fires: fabricates the user record and
    /// marks the session authenticated. No-op when nothing is pending.
    pub fn complete_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let user = match pending {
            PendingAuth::Login { email } => User {
                id: UserId::new("1"),
                name: "Alexander James".into(),
                email,
                avatar: DEFAULT_AVATAR.into(),
                adventure_type: "cultural".into(),
                budget_range: "comfort".into(),
                travel_style: "couple".into(),
                preferred_destinations: vec!["Greece".into(), "Japan".into(), "Italy".into()],
                trip_duration: "week".into(),
                created_at: UnixTimeMs::now(),
            },
            PendingAuth::Signup { name, email } => User {
                id: UserId::generate(),
                name,
                email,
                avatar: DEFAULT_AVATAR.into(),
                adventure_type: String::new(),
                budget_range: String::new(),
                travel_style: String::new(),
                preferred_destinations: Vec::new(),
                trip_duration: String::new(),
                created_at: UnixTimeMs::now(),
            },
        };
        self.user = Some(user);
        self.is_authenticated = true;
        self.is_loading = false;
        true
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.pending = None;
    }

    /// Shallow-merge into the current user; no-op when logged out.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(adventure_type) = update.adventure_type {
            user.adventure_type = adventure_type;
        }
        if let Some(budget_range) = update.budget_range {
            user.budget_range = budget_range;
        }
        if let Some(travel_style) = update.travel_style {
            user.travel_style = travel_style;
        }
        if let Some(preferred_destinations) = update.preferred_destinations {
            user.preferred_destinations = preferred_destinations;
        }
        if let Some(trip_duration) = update.trip_duration {
            user.trip_duration = trip_duration;
        }
        true
    }
}
