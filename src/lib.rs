pub mod cards;
pub mod config;
pub mod review;
pub mod services;
pub mod telemetry;

// Re-export specific items for convenient access
pub use review::ReviewGenerator;
pub use services::ReviewDesk;
