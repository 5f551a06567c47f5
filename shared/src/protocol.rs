use crate::{CreatePurchaseRequest, LoginRequest, LoginResponse, SignupRequest, Trip, TripId, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// Whether the request value is sent as a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    /// Endpoints whose response the client never reads use `IgnoredAny`.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    /// Response to use for any 2xx without reading the body.
    /// Endpoints whose body the client never reads return `Some` here.
    fn ignored_response() -> Option<Self::Response> {
        None
    }
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for SignupRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/signup".to_string()
    }

    fn ignored_response() -> Option<Self::Response> {
        Some(IgnoredAny)
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

/// Fetch the profile behind the bearer token
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrentUserRequest;

impl ApiRequest for CurrentUserRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

// =========================================================
// Trips
// =========================================================

/// List all trips
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListTripsRequest;

impl ApiRequest for ListTripsRequest {
    type Response = Vec<Trip>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/trips".to_string()
    }
}

/// Fetch a single trip
#[derive(Debug, Clone, Serialize)]
pub struct GetTripRequest {
    #[serde(skip)]
    pub id: TripId,
}

impl GetTripRequest {
    pub fn new(id: TripId) -> Self {
        Self { id }
    }
}

impl ApiRequest for GetTripRequest {
    type Response = Trip;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/trips/{}", self.id)
    }
}

// =========================================================
// Purchase requests
// =========================================================

impl ApiRequest for CreatePurchaseRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/requests".to_string()
    }

    fn ignored_response() -> Option<Self::Response> {
        Some(IgnoredAny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(CurrentUserRequest.path(), "/auth/me");
        assert_eq!(ListTripsRequest.path(), "/trips");
        assert_eq!(GetTripRequest::new(TripId::from(12)).path(), "/trips/12");
        assert_eq!(
            LoginRequest {
                username: "bob".to_string(),
                password: "x".to_string(),
            }
            .path(),
            "/auth/login"
        );
    }

    #[test]
    fn test_get_requests_carry_no_body() {
        assert!(!<ListTripsRequest as ApiRequest>::METHOD.has_body());
        assert!(<CreatePurchaseRequest as ApiRequest>::METHOD.has_body());
        assert_eq!(<SignupRequest as ApiRequest>::METHOD.as_str(), "POST");
    }

    #[test]
    fn test_only_fire_and_forget_endpoints_skip_the_body() {
        assert!(SignupRequest::ignored_response().is_some());
        assert!(CreatePurchaseRequest::ignored_response().is_some());
        assert!(LoginRequest::ignored_response().is_none());
        assert!(ListTripsRequest::ignored_response().is_none());
    }
}
