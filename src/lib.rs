// Library exports for integration tests and the server binary

pub mod api;
pub mod config;
pub mod greeting;
pub mod response;
