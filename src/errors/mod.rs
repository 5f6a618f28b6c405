//! Error payloads returned by the user service

pub mod response;

pub use response::ErrorResponse;
