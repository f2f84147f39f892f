pub mod client;
pub mod error;
pub mod languages;
pub mod routes;
pub mod settings;
pub mod state;
pub mod translate;
