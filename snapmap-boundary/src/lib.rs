use serde::{Deserialize, Serialize};

mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Body of a geocoding request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct GeocodeRequest {
    pub address: String,
}

/// Body of a successful geocoding response.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub lat               : f64,
    pub lng               : f64,
    pub formatted_address : String,
}

/// A labeled point the user wants to travel to.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Destination {
    pub lat     : f64,
    pub lng     : f64,
    pub address : String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_geocode_request() {
        let req = GeocodeRequest {
            address: "123 Elm".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "address": "123 Elm" })
        );
    }

    #[test]
    fn deserialize_geocode_response_with_camel_case_address() {
        let res: GeocodeResponse = serde_json::from_value(json!({
            "lat": 37.0,
            "lng": -122.0,
            "formattedAddress": "1 Main St"
        }))
        .unwrap();
        assert_eq!(
            res,
            GeocodeResponse {
                lat: 37.0,
                lng: -122.0,
                formatted_address: "1 Main St".into(),
            }
        );
    }

    #[test]
    fn reject_geocode_response_without_formatted_address() {
        let res = serde_json::from_value::<GeocodeResponse>(json!({
            "lat": 1.0,
            "lng": 2.0,
            "formatted_address": "456 Oak St"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn ignore_unknown_response_fields() {
        let res: GeocodeResponse = serde_json::from_value(json!({
            "lat": 1,
            "lng": 2,
            "formattedAddress": "456 Oak St",
            "placeId": "abc"
        }))
        .unwrap();
        assert_eq!(res.formatted_address, "456 Oak St");
    }
}
