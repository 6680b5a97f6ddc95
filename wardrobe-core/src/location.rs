//! Turning user input or device coordinates into a location query string.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Please enter a location to search for")]
    EmptyQuery,

    #[error("Coordinates out of range: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: String, longitude: String },

    #[error("Location access required. Please enable in Settings.")]
    PermissionDenied,

    #[error("Location lookup failed: {0}")]
    Lookup(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(LocationError::InvalidCoordinates {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            });
        }
        Ok(Self { latitude, longitude })
    }

    /// `"lat,lon"`, which the weather provider accepts as a query.
    pub fn to_query(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// A resolved place; renders as `"City, Country"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Place {
    pub city: String,
    pub country: String,
}

impl Place {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self { city: city.into(), country: country.into() }
    }
}

impl fmt::Display for Place {
    // Both parts are always joined, even if one is missing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Resolves search text or coordinates to the string handed to the fetch workflow.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve_query(&self, query: &str) -> Result<String, LocationError>;

    async fn resolve_coordinates(&self, coordinates: Coordinates) -> Result<String, LocationError>;
}

/// Resolver that performs no geocoding: text is passed through, coordinates
/// are sent to the provider as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectResolver;

#[async_trait]
impl LocationResolver for DirectResolver {
    async fn resolve_query(&self, query: &str) -> Result<String, LocationError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(LocationError::EmptyQuery);
        }
        Ok(trimmed.to_string())
    }

    async fn resolve_coordinates(&self, coordinates: Coordinates) -> Result<String, LocationError> {
        Ok(coordinates.to_query())
    }
}

/// What the user asked to look up.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    Search(String),
    Device(Coordinates),
}

impl LocationInput {
    pub async fn resolve(&self, resolver: &dyn LocationResolver) -> Result<String, LocationError> {
        match self {
            LocationInput::Search(text) => resolver.resolve_query(text).await,
            LocationInput::Device(coordinates) => resolver.resolve_coordinates(*coordinates).await,
        }
    }
}
