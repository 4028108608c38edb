//! Photo and map URLs for presenting a session

use crate::models::Coordinates;

/// Image search endpoint, sized to 800x400
pub const PHOTO_ENDPOINT: &str = "https://source.unsplash.com/800x400/";

/// Search term used when the model returns no keywords
pub const DEFAULT_PHOTO_TERM: &str = "travel";

pub const PHOTO_ATTRIBUTION: &str = "Photo from Unsplash";

pub const MAP_ENDPOINT: &str = "https://static-map.openstreetmap.de/staticmap.php";
pub const MAP_ZOOM: u8 = 10;
pub const MAP_SIZE: &str = "600x400";

/// Collapse photo keywords into a search term: all whitespace removed, lower-cased
pub fn photo_search_term(keywords: &str) -> String {
    let term: String = keywords
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if term.is_empty() {
        DEFAULT_PHOTO_TERM.to_string()
    } else {
        term
    }
}

/// Photo URL for the given keywords
pub fn photo_url(keywords: &str) -> String {
    format!("{}?{}", PHOTO_ENDPOINT, photo_search_term(keywords))
}

/// Static map centred on the coordinates with a single marker pin
pub fn map_url(coordinates: &Coordinates) -> String {
    format!(
        "{}?center={},{}&zoom={}&size={}&maptype=mapnik&markers={},{},red-pushpin",
        MAP_ENDPOINT,
        coordinates.lat,
        coordinates.lng,
        MAP_ZOOM,
        MAP_SIZE,
        coordinates.lng,
        coordinates.lat
    )
}
