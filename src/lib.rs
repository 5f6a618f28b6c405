// Library exports for the export binary and tests
pub mod config;
pub mod errors;
pub mod openapi;
