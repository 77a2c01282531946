pub mod client_credentials;
