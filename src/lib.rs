pub mod configuration;
pub mod domain;
pub mod form;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod waitlist_client;
