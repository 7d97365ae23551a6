pub mod configuration;
pub mod domain;
pub mod repository;
pub mod service;
pub mod telemetry;
pub mod utils;
