//! Load-time reference data: the fixed city/activity catalogs and the two
//! sample trips a fresh install starts with. Catalog entries stand in for a
//! backend and are never mutated by users.

use chrono::{NaiveDate, NaiveTime};

use crate::catalog::{Activity, ActivityCategory, ActivityId, City, CityId, Region};
use crate::model::UnixTimeMs;
use crate::trips::{ActivityInstance, Budget, Stop, StopId, Trip, TripId, TripStatus};

fn city(
    id: &str,
    name: &str,
    country: &str,
    region: Region,
    cost_index: u32,
    popularity: f32,
    image: &str,
    description: &str,
) -> City {
    City {
        id: CityId::new(id),
        name: name.into(),
        country: country.into(),
        region,
        cost_index,
        popularity,
        image: image.into(),
        description: description.into(),
    }
}

fn activity(
    id: &str,
    name: &str,
    category: ActivityCategory,
    cost: f64,
    duration_hours: f64,
    image: &str,
    description: &str,
) -> Activity {
    Activity {
        id: ActivityId::new(id),
        name: name.into(),
        category,
        cost,
        duration_hours,
        image: image.into(),
        description: description.into(),
    }
}

pub fn cities() -> Vec<City> {
    use Region::*;
    vec![
        city("c1", "Santorini", "Greece", Europe, 150, 4.9,
            "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=800&fit=crop",
            "Iconic white-washed buildings and stunning sunsets"),
        city("c2", "Kyoto", "Japan", Asia, 120, 4.9,
            "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?w=800&fit=crop",
            "Ancient temples and traditional Japanese culture"),
        city("c3", "Bali", "Indonesia", Asia, 80, 4.8,
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=800&fit=crop",
            "Tropical paradise with rich spiritual heritage"),
        city("c4", "Amalfi Coast", "Italy", Europe, 180, 4.8,
            "https://images.unsplash.com/photo-1534113414509-0eec2bfb493f?w=800&fit=crop",
            "Dramatic coastline with colorful villages"),
        city("c5", "Reykjavik", "Iceland", Europe, 200, 4.7,
            "https://images.unsplash.com/photo-1504829857797-ddff29c27927?w=800&fit=crop",
            "Gateway to stunning natural wonders"),
        city("c6", "Marrakech", "Morocco", Africa, 70, 4.6,
            "https://images.unsplash.com/photo-1597212618440-806262de4f6b?w=800&fit=crop",
            "Vibrant souks and exotic architecture"),
        city("c7", "Zermatt", "Switzerland", Europe, 250, 4.8,
            "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=800&fit=crop",
            "Alpine village with Matterhorn views"),
        city("c8", "Maldives", "Maldives", Asia, 300, 4.9,
            "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?w=800&fit=crop",
            "Crystal clear waters and overwater villas"),
        city("c9", "Barcelona", "Spain", Europe, 130, 4.7,
            "https://images.unsplash.com/photo-1583422409516-2895a77efded?w=800&fit=crop",
            "Gaudi architecture and Mediterranean vibes"),
        city("c10", "Cape Town", "South Africa", Africa, 90, 4.6,
            "https://images.unsplash.com/photo-1580060839134-75a5edca2e99?w=800&fit=crop",
            "Stunning mountains meet the ocean"),
    ]
}

pub fn activities() -> Vec<Activity> {
    use ActivityCategory::*;
    vec![
        activity("a1", "Sunset Sailing", Adventure, 150.0, 3.0,
            "https://images.unsplash.com/photo-1500514966906-fe245eea9344?w=600&fit=crop",
            "Sail into the sunset with wine and appetizers"),
        activity("a2", "Temple Tour", Cultural, 50.0, 4.0,
            "https://images.unsplash.com/photo-1545569341-9eb8b30979d9?w=600&fit=crop",
            "Visit ancient temples with expert guides"),
        activity("a3", "Cooking Class", Food, 80.0, 3.0,
            "https://images.unsplash.com/photo-1556910103-1c02745aae4d?w=600&fit=crop",
            "Learn to cook authentic local cuisine"),
        activity("a4", "Scuba Diving", Adventure, 200.0, 4.0,
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=600&fit=crop",
            "Explore vibrant coral reefs underwater"),
        activity("a5", "Wine Tasting", Food, 120.0, 3.0,
            "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?w=600&fit=crop",
            "Sample premium wines at local vineyards"),
        activity("a6", "Hiking Trail", Adventure, 30.0, 5.0,
            "https://images.unsplash.com/photo-1551632811-561732d1e306?w=600&fit=crop",
            "Trek through scenic mountain trails"),
        activity("a7", "Spa & Wellness", Relaxation, 180.0, 3.0,
            "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?w=600&fit=crop",
            "Rejuvenate with traditional treatments"),
        activity("a8", "Street Food Tour", Food, 40.0, 3.0,
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=600&fit=crop",
            "Taste authentic local street food"),
        activity("a9", "Museum Visit", Cultural, 25.0, 2.0,
            "https://images.unsplash.com/photo-1554907984-15263bfd63bd?w=600&fit=crop",
            "Explore world-class art and history"),
        activity("a10", "Hot Air Balloon", Adventure, 300.0, 2.0,
            "https://images.unsplash.com/photo-1507608616759-54f48f0af0ee?w=600&fit=crop",
            "Soar above landscapes at sunrise"),
        activity("a11", "Beach Day", Relaxation, 20.0, 6.0,
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=600&fit=crop",
            "Relax on pristine sandy beaches"),
        activity("a12", "Night Market", Shopping, 60.0, 2.0,
            "https://images.unsplash.com/photo-1555529669-e69e7aa0ba9a?w=600&fit=crop",
            "Shop for unique local treasures"),
    ]
}

pub fn saved_destinations() -> Vec<CityId> {
    vec![CityId::new("c1"), CityId::new("c2"), CityId::new("c4")]
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("seed date is well-formed")
}

fn time(s: &str) -> NaiveTime {
    s.parse().expect("seed time is well-formed")
}

fn booked(catalog: &[Activity], id: &str, day: &str, at: &str) -> ActivityInstance {
    let activity = catalog
        .iter()
        .find(|a| a.id.as_str() == id)
        .expect("seed activity exists in catalog");
    ActivityInstance::from_catalog(activity, date(day), time(at))
}

pub fn sample_trips(cities: &[City], catalog: &[Activity]) -> Vec<Trip> {
    let santorini = cities
        .iter()
        .find(|c| c.id.as_str() == "c1")
        .expect("seed city exists")
        .clone();
    let zermatt = cities
        .iter()
        .find(|c| c.id.as_str() == "c7")
        .expect("seed city exists")
        .clone();

    vec![
        Trip {
            id: TripId::new("t1"),
            name: "Santorini Retreat".into(),
            description: "A romantic getaway to the Greek islands".into(),
            cover_photo: Some(
                "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=1200&fit=crop"
                    .into(),
            ),
            start_date: date("2026-03-15"),
            end_date: date("2026-03-22"),
            is_public: false,
            public_url: None,
            status: TripStatus::Confirmed,
            stops: vec![Stop {
                id: StopId::new("s1"),
                city_id: santorini.id.clone(),
                city: santorini,
                arrival_date: date("2026-03-15"),
                departure_date: date("2026-03-22"),
                activities: vec![
                    booked(catalog, "a1", "2026-03-16", "17:00:00"),
                    booked(catalog, "a5", "2026-03-17", "14:00:00"),
                    booked(catalog, "a7", "2026-03-18", "10:00:00"),
                ],
            }],
            budget: Budget {
                total: 5000.0,
                transport: 1200.0,
                accommodation: 1800.0,
                activities: 450.0,
                food: 800.0,
                other: 750.0,
            },
            created_at: UnixTimeMs(1_768_471_200_000),
        },
        Trip {
            id: TripId::new("t2"),
            name: "Alpine Escape".into(),
            description: "Mountain adventure in Switzerland".into(),
            cover_photo: Some(
                "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=1200&fit=crop"
                    .into(),
            ),
            start_date: date("2026-04-02"),
            end_date: date("2026-04-12"),
            is_public: true,
            public_url: Some("alpine-escape-2026".into()),
            status: TripStatus::Upcoming,
            stops: vec![Stop {
                id: StopId::new("s2"),
                city_id: zermatt.id.clone(),
                city: zermatt,
                arrival_date: date("2026-04-02"),
                departure_date: date("2026-04-12"),
                activities: vec![
                    booked(catalog, "a6", "2026-04-03", "09:00:00"),
                    booked(catalog, "a7", "2026-04-04", "14:00:00"),
                ],
            }],
            budget: Budget {
                total: 8000.0,
                transport: 1800.0,
                accommodation: 3500.0,
                activities: 600.0,
                food: 1200.0,
                other: 900.0,
            },
            created_at: UnixTimeMs(1_768_919_400_000),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let cities = cities();
        let mut ids: Vec<_> = cities.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cities.len());

        let activities = activities();
        let mut ids: Vec<_> = activities.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), activities.len());
    }

    #[test]
    fn sample_trips_reference_catalog_cities() {
        let cities = cities();
        let catalog = activities();
        let trips = sample_trips(&cities, &catalog);

        assert_eq!(trips.len(), 2);
        for trip in &trips {
            for stop in &trip.stops {
                assert!(cities.iter().any(|c| c.id == stop.city_id));
                assert_eq!(stop.city.id, stop.city_id);
            }
        }
    }

    #[test]
    fn catalog_values_stay_in_range() {
        for city in cities() {
            assert!(city.cost_index > 0);
            assert!((0.0..=5.0).contains(&city.popularity));
        }
        for activity in activities() {
            assert!(activity.cost >= 0.0);
            assert!(activity.duration_hours > 0.0);
        }
    }
}
