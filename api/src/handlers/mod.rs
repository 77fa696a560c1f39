pub mod health;
pub mod system_parameters;
pub mod tags;
