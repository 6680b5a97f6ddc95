use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::outfit::ClothingItem;

/// Current conditions for a resolved place, as returned by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: i32,
    pub condition_descriptions: Vec<String>,
}

impl WeatherSnapshot {
    /// First condition phrase, or `""` when the provider sent none.
    pub fn primary_condition(&self) -> &str {
        self.condition_descriptions.first().map(String::as_str).unwrap_or("")
    }

    pub fn condition_summary(&self) -> String {
        self.condition_descriptions.join(", ")
    }
}

/// Input of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub temperature_c: i32,
    pub condition_text: String,
}

impl From<&WeatherSnapshot> for RecommendationRequest {
    fn from(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature_c: snapshot.temperature_c,
            condition_text: snapshot.primary_condition().to_string(),
        }
    }
}

/// What the presentation layer renders after a lookup.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub outfit: Vec<ClothingItem>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        let outfit = crate::outfit::recommend_for(&RecommendationRequest::from(&snapshot));
        Self { snapshot, outfit, fetched_at: Utc::now() }
    }
}
