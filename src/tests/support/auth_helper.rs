use actix_web::web;

use crate::auth::application::domain::AuthKeys;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_CORS_TOKEN: &str = "test-cors-token";

pub fn test_auth_keys() -> web::Data<AuthKeys> {
    web::Data::new(AuthKeys::new(TEST_API_KEY, TEST_CORS_TOKEN))
}

pub fn api_key_header() -> (&'static str, &'static str) {
    ("x-api-key", TEST_API_KEY)
}

pub fn cors_token_header() -> (&'static str, &'static str) {
    ("x-cors-token", TEST_CORS_TOKEN)
}
