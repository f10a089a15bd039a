//! Immutable reference data: the city and activity catalogs, and the pure
//! read-side search over them.
//!
//! Catalog entries are created once at load time and never mutated by
//! users. Trips hold *copies* of activities (see `trips::ActivityInstance`),
//! so nothing here is retroactively visible in booked itineraries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::typed_id;

typed_id!(CityId);
typed_id!(ActivityId);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Europe,
    Asia,
    Africa,
    Americas,
    Oceania,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Oceania => "Oceania",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Adventure,
    Cultural,
    Food,
    Relaxation,
    Shopping,
}

impl ActivityCategory {
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Adventure => "adventure",
            ActivityCategory::Cultural => "cultural",
            ActivityCategory::Food => "food",
            ActivityCategory::Relaxation => "relaxation",
            ActivityCategory::Shopping => "shopping",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A destination in the catalog. `cost_index` is a relative daily cost,
/// `popularity` a 0.0–5.0 rating.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub region: Region,
    pub cost_index: u32,
    pub popularity: f32,
    pub image: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub category: ActivityCategory,
    pub cost: f64,
    pub duration_hours: f64,
    pub image: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CityFilters {
    pub region: Option<Region>,
    pub max_cost: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ActivityFilters {
    pub category: Option<ActivityCategory>,
    pub max_cost: Option<f64>,
    pub max_duration: Option<f64>,
}

/// Case-insensitive substring match on name or country, then exact region
/// and inclusive cost-ceiling filters. Pure; returns a fresh sequence.
pub fn search_cities<'a>(cities: &'a [City], query: &str, filters: &CityFilters) -> Vec<&'a City> {
    let query = query.trim().to_lowercase();

    cities
        .iter()
        .filter(|city| {
            query.is_empty()
                || city.name.to_lowercase().contains(&query)
                || city.country.to_lowercase().contains(&query)
        })
        .filter(|city| filters.region.map_or(true, |r| city.region == r))
        .filter(|city| filters.max_cost.map_or(true, |max| city.cost_index <= max))
        .collect()
}

/// Case-insensitive substring match on name or category label, then exact
/// category and inclusive cost/duration ceilings. Pure.
pub fn search_activities<'a>(
    activities: &'a [Activity],
    query: &str,
    filters: &ActivityFilters,
) -> Vec<&'a Activity> {
    let query = query.trim().to_lowercase();

    activities
        .iter()
        .filter(|activity| {
            query.is_empty()
                || activity.name.to_lowercase().contains(&query)
                || activity.category.label().contains(&query)
        })
        .filter(|activity| filters.category.map_or(true, |c| activity.category == c))
        .filter(|activity| filters.max_cost.map_or(true, |max| activity.cost <= max))
        .filter(|activity| {
            filters
                .max_duration
                .map_or(true, |max| activity.duration_hours <= max)
        })
        .collect()
}
