//! Core library for the `wardrobe` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The current-conditions fetch workflow and its error taxonomy
//! - The outfit recommendation rules
//! - Location resolution and lookup dispatching
//!
//! It is used by `wardrobe-cli`, but can also be reused by other front ends.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod location;
pub mod model;
pub mod outfit;
pub mod provider;

pub use config::Config;
pub use dispatch::{Delivery, Dispatcher, LookupError};
pub use error::{FetchError, describe};
pub use location::{Coordinates, DirectResolver, LocationError, LocationInput, LocationResolver};
pub use model::{RecommendationRequest, WeatherReport, WeatherSnapshot};
pub use outfit::{ClothingItem, Garment, recommend};
pub use provider::{WeatherProvider, provider_from_config};
