// Domain models and pure card logic
// No framework dependencies

pub mod models;
pub mod services;
