//! # 🌦️ condensa-weather — Outdoor Conditions Lookup
//!
//! Alternate source of the outdoor [`Reading`](condensa_core::Reading):
//! instead of typing temperature and humidity, resolve a place name and
//! take its current conditions.
//!
//! ```rust,no_run
//! use condensa_weather::{OpenMeteoClient, WeatherLookup};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenMeteoClient::new()?;
//! let observation = client.lookup("Milan").await?;
//! println!("{}: {:?}", observation.resolved_name, observation.reading);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Lookup trait and Open-Meteo adapter
//! - [`models`] - Provider payloads and [`Observation`]
//! - [`error`] - Failure kinds

pub mod client;
pub mod error;
pub mod models;

pub use client::{OpenMeteoClient, WeatherConfig, WeatherLookup};
pub use error::{WeatherError, WeatherResult};
pub use models::{Observation, Place};
