//! Hand-off links to the platform map application
//!
//! The app never renders its own routing; "Cómo llegar" opens the native
//! maps app through a platform URL scheme.

use shared::types::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPlatform {
    Ios,
    Android,
}

/// The deep link that opens turn-by-turn directions to `destination`,
/// labeled with the restaurant name
pub fn directions_url(platform: MapPlatform, destination: Coordinates, label: &str) -> String {
    let encoded = urlencode(label);
    match platform {
        MapPlatform::Ios => format!(
            "maps:0,0?q={}@{},{}",
            encoded, destination.latitude, destination.longitude
        ),
        MapPlatform::Android => format!(
            "geo:0,0?q={},{}({})",
            destination.latitude, destination.longitude, encoded
        ),
    }
}

/// Percent-encode everything outside the URL-safe unreserved set
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
