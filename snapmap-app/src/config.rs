use snapmap_boundary::MapPoint;

pub const DEFAULT_API_URL: &str = "/api";

/// Base URL of the backend API.
///
/// Can be overridden at build time with `SNAPMAP_API_URL`.
pub const API_URL: &str = api_url(option_env!("SNAPMAP_API_URL"));

pub const DEFAULT_MAP_CENTER: MapPoint = MapPoint {
    lat: 48.7758,
    lng: 9.1829,
};

const fn api_url(env: Option<&'static str>) -> &'static str {
    match env {
        Some(url) => url,
        None => DEFAULT_API_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fall_back_to_default_api_url() {
        assert_eq!(api_url(None), "/api");
        assert_eq!(api_url(Some("https://example.org/api")), "https://example.org/api");
    }
}
