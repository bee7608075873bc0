/// Authentication session and token cache
pub mod auth;
/// Client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Resource service interfaces
pub mod interfaces;
/// Resource service implementations
pub mod services;
