//! Pure client-side path table. The shell reports path changes; the core
//! resolves them to a [`Route`], applying the auth redirect rules here so
//! every shell gets identical navigation behavior.

use serde::{Deserialize, Serialize};

use crate::trips::TripId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    TripList,
    CreateTrip,
    Itinerary { trip_id: TripId },
    Budget { trip_id: TripId },
    Calendar { trip_id: TripId },
    Cities,
    Activities,
    Profile,
    /// Read-only public itinerary, keyed by `public_url` slug or trip id.
    Share { key: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Login
    }
}

impl Route {
    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Share { .. })
    }

    /// Maps a path to a route. Unknown paths map to `None`; the caller
    /// redirects those to the dashboard root.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => Some(Route::Dashboard),
            ["login"] => Some(Route::Login),
            ["trips"] => Some(Route::TripList),
            ["trips", "new"] => Some(Route::CreateTrip),
            ["trips", id, "itinerary"] => Some(Route::Itinerary {
                trip_id: TripId::new(*id),
            }),
            ["trips", id, "budget"] => Some(Route::Budget {
                trip_id: TripId::new(*id),
            }),
            ["trips", id, "calendar"] => Some(Route::Calendar {
                trip_id: TripId::new(*id),
            }),
            ["cities"] => Some(Route::Cities),
            ["activities"] => Some(Route::Activities),
            ["profile"] => Some(Route::Profile),
            ["share", key] => Some(Route::Share {
                key: (*key).to_string(),
            }),
            _ => None,
        }
    }

    /// Full navigation rule: unknown paths land on the dashboard, then
    /// unauthenticated access to any non-public route redirects to login.
    pub fn resolve(path: &str, is_authenticated: bool) -> Route {
        let route = Route::parse(path).unwrap_or(Route::Dashboard);
        if !route.is_public() && !is_authenticated {
            return Route::Login;
        }
        route
    }
}
