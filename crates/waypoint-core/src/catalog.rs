//! Built-in city and travel spot reference data.
//!
//! The catalog is the read-only pool the cart is filled from. It also backs
//! the human-readable location line a placed activity starts with: spots only
//! carry a city id, so [`city_label`] turns `"new-york"` into
//! `"New York, USA"` (or a title-cased fallback for ids the catalog does not
//! know).

use crate::models::{City, TravelSpot};

/// All destination cities.
pub fn cities() -> Vec<City> {
    fn city(id: &str, name: &str, position: (f64, f64), country: &str) -> City {
        City {
            id: id.to_string(),
            name: name.to_string(),
            position,
            country: country.to_string(),
        }
    }

    vec![
        city("london", "London", (51.5074, -0.1278), "United Kingdom"),
        city("paris", "Paris", (48.8566, 2.3522), "France"),
        city("new-york", "New York", (40.7128, -74.0060), "USA"),
        city("tokyo", "Tokyo", (35.6895, 139.6917), "Japan"),
    ]
}

/// All travel spots, grouped by city in catalog order.
pub fn spots() -> Vec<TravelSpot> {
    fn spot(
        id: &str,
        name: &str,
        position: (f64, f64),
        city_id: &str,
        description: &str,
        image_url: &str,
    ) -> TravelSpot {
        TravelSpot {
            id: id.to_string(),
            name: name.to_string(),
            position,
            city_id: city_id.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        }
    }

    vec![
        // London
        spot(
            "tower-of-london",
            "Tower of London",
            (51.5081, -0.0759),
            "london",
            "Historic castle located on the north bank of the River Thames.",
            "https://picsum.photos/id/1015/300/200",
        ),
        spot(
            "buckingham-palace",
            "Buckingham Palace",
            (51.5014, -0.1419),
            "london",
            "The London residence and administrative headquarters of the monarch of the United Kingdom.",
            "https://picsum.photos/id/1016/300/200",
        ),
        // Paris
        spot(
            "eiffel-tower",
            "Eiffel Tower",
            (48.8584, 2.2945),
            "paris",
            "A wrought-iron lattice tower on the Champ de Mars in Paris, France.",
            "https://picsum.photos/id/1018/300/200",
        ),
        spot(
            "louvre-museum",
            "Louvre Museum",
            (48.8606, 2.3376),
            "paris",
            "The world's largest art museum and a historic monument in Paris, France.",
            "https://picsum.photos/id/1019/300/200",
        ),
        // New York
        spot(
            "statue-of-liberty",
            "Statue of Liberty",
            (40.6892, -74.0445),
            "new-york",
            "A colossal neoclassical sculpture on Liberty Island in New York Harbor in New York City.",
            "https://picsum.photos/id/1021/300/200",
        ),
        spot(
            "central-park",
            "Central Park",
            (40.785091, -73.968285),
            "new-york",
            "An urban park in New York City located between the Upper West and Upper East Sides of Manhattan.",
            "https://picsum.photos/id/1022/300/200",
        ),
        // Tokyo
        spot(
            "senso-ji",
            "Sensō-ji",
            (35.7148, 139.7967),
            "tokyo",
            "An ancient Buddhist temple located in Asakusa, Tokyo, Japan.",
            "https://picsum.photos/id/1025/300/200",
        ),
        spot(
            "tokyo-skytree",
            "Tokyo Skytree",
            (35.7101, 139.8107),
            "tokyo",
            "A broadcasting and observation tower in Sumida, Tokyo.",
            "https://picsum.photos/id/1026/300/200",
        ),
        spot(
            "meiji-shrine",
            "Meiji Shrine",
            (35.6764, 139.6993),
            "tokyo",
            "A Shinto shrine in Shibuya, Tokyo, that is dedicated to the deified spirits of Emperor Meiji and his wife, Empress Shōken.",
            "https://picsum.photos/id/1028/300/200",
        ),
        spot(
            "shibuya-crossing",
            "Shibuya Crossing",
            (35.6595, 139.7005),
            "tokyo",
            "A popular scrambling intersection in Shibuya, Tokyo, Japan. It is rumored to be the busiest intersection in the world.",
            "https://picsum.photos/id/1031/300/200",
        ),
        spot(
            "tokyo-imperial-palace",
            "Tokyo Imperial Palace",
            (35.6852, 139.7528),
            "tokyo",
            "The primary residence of the Emperor of Japan.",
            "https://picsum.photos/id/1032/300/200",
        ),
        spot(
            "tsukiji-market",
            "Tsukiji Market",
            (35.6655, 139.7708),
            "tokyo",
            "A large wholesale market for fish, fruits and vegetables in central Tokyo.",
            "https://picsum.photos/id/1033/300/200",
        ),
    ]
}

/// Looks up a city by id.
pub fn city(id: &str) -> Option<City> {
    cities().into_iter().find(|city| city.id == id)
}

/// Looks up a travel spot by id.
pub fn spot(id: &str) -> Option<TravelSpot> {
    spots().into_iter().find(|spot| spot.id == id)
}

/// Human-readable location line for a city id.
///
/// Known cities render as "Name, Country"; unknown ids fall back to a
/// title-cased form of the id itself.
pub fn city_label(city_id: &str) -> String {
    match city(city_id) {
        Some(city) => format!("{}, {}", city.name, city.country),
        None => humanize(city_id),
    }
}

fn humanize(id: &str) -> String {
    id.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
