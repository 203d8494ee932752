pub mod config;
pub mod manager;


pub use config::{ProviderConfig, Settings};
pub use manager::SettingsManager;
