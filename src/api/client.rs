/// Blocking HTTP access to the PokeAPI.
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Base URL of the public PokeAPI service.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Per-request timeout. A hung call becomes a per-identifier lookup
/// failure, never an abort of the whole batch.
const TIMEOUT: Duration = Duration::from_secs(10);

/// The API resource kinds this tool can look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Pokemon,
    Ability,
    Move,
}

impl Resource {
    /// URL path segment for this resource kind.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Ability => "ability",
            Self::Move => "move",
        }
    }
}

/// Build the endpoint URL for one resource lookup.
///
/// The target is a name or numeric id, passed through verbatim; the API
/// itself rejects anything it does not recognize.
#[must_use]
pub fn endpoint(resource: Resource, target: &str) -> String {
    format!("{BASE_URL}/{}/{}/", resource.path(), target)
}

/// A thin wrapper over a blocking `reqwest` client.
///
/// Lookups are strictly sequential: one GET completes before the next
/// begins. No retries, no caching.
pub struct ApiClient {
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Construct a client with the per-request timeout applied.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` when the underlying HTTP client cannot
    /// be built.
    pub fn new() -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { http })
    }

    /// Fetch one resource and deserialize the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` on transport failure, `ApiError::Status`
    /// on a non-2xx response, and `ApiError::Decode` when the body does not
    /// match `T`.
    pub fn fetch<T: DeserializeOwned>(&self, resource: Resource, target: &str) -> Result<T, ApiError> {
        let url = endpoint(resource, target);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response.text().map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_pokemon() {
        assert_eq!(
            endpoint(Resource::Pokemon, "pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu/"
        );
    }

    #[test]
    fn test_endpoint_numeric_id() {
        assert_eq!(
            endpoint(Resource::Ability, "65"),
            "https://pokeapi.co/api/v2/ability/65/"
        );
    }

    #[test]
    fn test_endpoint_move() {
        assert_eq!(
            endpoint(Resource::Move, "pound"),
            "https://pokeapi.co/api/v2/move/pound/"
        );
    }
}
