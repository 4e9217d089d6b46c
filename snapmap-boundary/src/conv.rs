use super::*;

impl From<GeocodeResponse> for Destination {
    fn from(from: GeocodeResponse) -> Self {
        let GeocodeResponse {
            lat,
            lng,
            formatted_address,
        } = from;
        Self {
            lat,
            lng,
            address: formatted_address,
        }
    }
}

impl From<&Destination> for MapPoint {
    fn from(from: &Destination) -> Self {
        let Destination { lat, lng, .. } = from;
        Self {
            lat: *lat,
            lng: *lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_from_geocode_response() {
        let res = GeocodeResponse {
            lat: 1.0,
            lng: 2.0,
            formatted_address: "456 Oak St".into(),
        };
        assert_eq!(
            Destination::from(res),
            Destination {
                lat: 1.0,
                lng: 2.0,
                address: "456 Oak St".into(),
            }
        );
    }
}
