//! Outbound map deep-link formatting
//!
//! Pure string formatting: the core hands coordinates or a postal code to an
//! external map application, it never performs the navigation itself.

use crate::geo::Coordinates;

/// Directions deep link for a coordinate
#[must_use]
pub fn directions_link(coords: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        coords.latitude, coords.longitude
    )
}

/// Area search deep link for a postal code
#[must_use]
pub fn pincode_search_link(pincode: &str) -> String {
    let query = urlencoding::encode(pincode);
    format!("https://www.google.com/maps/search/?api=1&query={query}+Tamil+Nadu")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_link() {
        let link = directions_link(&Coordinates::new(10.9936, 79.4816));
        assert_eq!(
            link,
            "https://www.google.com/maps/dir/?api=1&destination=10.9936,79.4816"
        );
    }

    #[test]
    fn test_pincode_link_encodes_query() {
        let link = pincode_search_link("625 001");
        assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(link.contains("625%20001"));
        assert!(!link.contains("625 001"));
    }
}
