use gloo_net::http::Request;

use snapmap_boundary::{GeocodeRequest, GeocodeResponse};

use crate::{into_json, Result};

/// Client of the geocoding endpoint.
#[derive(Debug, Clone)]
pub struct GeocodeApi {
    url: String,
}

impl GeocodeApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/geocode", self.url.trim_end_matches('/'))
    }

    /// Resolve a free-text address.
    ///
    /// Every non-2xx status is reported as [`crate::Error::Status`],
    /// the response body of a failed request is not interpreted.
    pub async fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResponse> {
        let url = self.endpoint();
        let response = Request::post(&url).json(request)?.send().await?;
        into_json(response).await
    }
}
