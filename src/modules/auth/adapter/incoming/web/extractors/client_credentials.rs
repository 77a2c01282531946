use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use tracing::warn;

use crate::{auth::application::domain::AuthKeys, shared::api::ApiResponse};

/// Credentials of a request that passed both header checks. The key value
/// doubles as the caller identity for rate limiting.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub api_key: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for ClientCredentials {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let keys = match req.app_data::<web::Data<AuthKeys>>() {
            Some(keys) => keys,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error(
                    "An unexpected error occurred",
                ))));
            }
        };

        // The CORS token gate runs before the API key gate.
        let cors_token = header_value(req, "x-cors-token").unwrap_or_default();
        if !keys.cors_token_matches(&cors_token) {
            warn!("CORS validation failed");
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "Invalid CORS token.",
            ))));
        }

        let api_key = header_value(req, "x-api-key").unwrap_or_default();
        if !keys.api_key_matches(&api_key) {
            warn!("Authentication attempt failed");
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "Invalid API key.",
            ))));
        }

        ready(Ok(ClientCredentials { api_key }))
    }
}

// Header names are matched case-insensitively by the HeaderMap.
fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    #[get("/probe")]
    async fn probe(credentials: ClientCredentials) -> impl Responder {
        HttpResponse::Ok().body(credentials.api_key)
    }

    fn test_keys() -> web::Data<AuthKeys> {
        web::Data::new(AuthKeys::new("test-api-key", "test-cors-token"))
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn valid_credentials_pass() {
        let app = test::init_service(App::new().app_data(test_keys()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("x-cors-token", "test-cors-token"))
            .insert_header(("x-api-key", "test-api-key"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "test-api-key");
    }

    #[actix_web::test]
    async fn header_names_are_case_insensitive() {
        let app = test::init_service(App::new().app_data(test_keys()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("X-CORS-TOKEN", "test-cors-token"))
            .insert_header(("X-API-KEY", "test-api-key"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_cors_token_is_rejected() {
        let app = test::init_service(App::new().app_data(test_keys()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("x-api-key", "test-api-key"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json = read_json(resp).await;
        assert_eq!(json["error"], "Forbidden");
        assert_eq!(json["message"], "Invalid CORS token.");
    }

    #[actix_web::test]
    async fn invalid_api_key_is_rejected() {
        let app = test::init_service(App::new().app_data(test_keys()).service(probe)).await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("x-cors-token", "test-cors-token"))
            .insert_header(("x-api-key", "wrong-key"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json = read_json(resp).await;
        assert_eq!(json["message"], "Invalid API key.");
    }

    #[actix_web::test]
    async fn cors_check_runs_before_api_key_check() {
        let app = test::init_service(App::new().app_data(test_keys()).service(probe)).await;

        // Both headers missing: the CORS failure must win.
        let req = test::TestRequest::get().uri("/probe").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json = read_json(resp).await;
        assert_eq!(json["message"], "Invalid CORS token.");
    }
}
