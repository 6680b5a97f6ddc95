//! Temperature and condition based clothing suggestions.
//!
//! Rules are evaluated in a fixed order and only ever append:
//! upper body (3 items), lower body (2 items), then optional accessories
//! triggered by keywords in the condition text.

use serde::{Deserialize, Serialize};

use crate::model::RecommendationRequest;

/// Icon used for labels outside the known garment set.
pub const UNKNOWN_ICON: &str = "questionmark.circle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Garment {
    ThermalWear,
    PufferJacket,
    WoolSweater,
    LightJacket,
    Hoodie,
    LongSleeveShirt,
    CottonTShirt,
    PoloShirt,
    TankTop,
    Jeans,
    ThermalLeggings,
    Shorts,
    ChinoPants,
    WaterproofBoots,
    CompactUmbrella,
    UvProtectionGlasses,
    BaseballCap,
}

impl Garment {
    pub const fn all() -> &'static [Garment] {
        &[
            Garment::ThermalWear,
            Garment::PufferJacket,
            Garment::WoolSweater,
            Garment::LightJacket,
            Garment::Hoodie,
            Garment::LongSleeveShirt,
            Garment::CottonTShirt,
            Garment::PoloShirt,
            Garment::TankTop,
            Garment::Jeans,
            Garment::ThermalLeggings,
            Garment::Shorts,
            Garment::ChinoPants,
            Garment::WaterproofBoots,
            Garment::CompactUmbrella,
            Garment::UvProtectionGlasses,
            Garment::BaseballCap,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Garment::ThermalWear => "Thermal Wear",
            Garment::PufferJacket => "Puffer Jacket",
            Garment::WoolSweater => "Wool Sweater",
            Garment::LightJacket => "Light Jacket",
            Garment::Hoodie => "Hoodie",
            Garment::LongSleeveShirt => "Long-sleeve Shirt",
            Garment::CottonTShirt => "Cotton T-shirt",
            Garment::PoloShirt => "Polo Shirt",
            Garment::TankTop => "Tank Top",
            Garment::Jeans => "Jeans",
            Garment::ThermalLeggings => "Thermal Leggings",
            Garment::Shorts => "Shorts",
            Garment::ChinoPants => "Chino Pants",
            Garment::WaterproofBoots => "Waterproof Boots",
            Garment::CompactUmbrella => "Compact Umbrella",
            Garment::UvProtectionGlasses => "UV Protection Glasses",
            Garment::BaseballCap => "Baseball Cap",
        }
    }

    pub fn icon_id(&self) -> &'static str {
        match self {
            Garment::ThermalWear => "thermometer.snowflake",
            Garment::PufferJacket => "coat.fill",
            Garment::WoolSweater => "heart.fill",
            Garment::LightJacket => "jacket.fill",
            Garment::Hoodie => "tshirt",
            Garment::LongSleeveShirt => "tshirt.fill",
            Garment::CottonTShirt => "tshirt",
            Garment::PoloShirt => "figure.arms.open",
            Garment::TankTop => "figure.pool.swim",
            Garment::Jeans => "figure.walk",
            Garment::ThermalLeggings => "figure.mind.and.body",
            Garment::Shorts => "figure.run",
            Garment::ChinoPants => "figure.step.training",
            Garment::WaterproofBoots => "shoe.fill",
            Garment::CompactUmbrella => "umbrella.fill",
            Garment::UvProtectionGlasses => "glasses",
            Garment::BaseballCap => "baseball",
        }
    }

    pub fn from_label(label: &str) -> Option<Garment> {
        Garment::all().iter().copied().find(|g| g.label() == label)
    }
}

impl std::fmt::Display for Garment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recommended piece of clothing with its display icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub label: String,
    pub icon_id: String,
}

impl From<Garment> for ClothingItem {
    fn from(garment: Garment) -> Self {
        Self { label: garment.label().to_string(), icon_id: garment.icon_id().to_string() }
    }
}

/// Icon for an arbitrary label; never fails.
pub fn icon_for_label(label: &str) -> &'static str {
    Garment::from_label(label).map(|g| g.icon_id()).unwrap_or(UNKNOWN_ICON)
}

/// Garments for the given temperature (°C) and condition text, in display order.
pub fn garments(temperature_c: i32, condition_text: &str) -> Vec<Garment> {
    let mut items = Vec::with_capacity(9);

    if temperature_c < 10 {
        items.extend([Garment::ThermalWear, Garment::PufferJacket, Garment::WoolSweater]);
    } else if temperature_c < 20 {
        items.extend([Garment::LightJacket, Garment::Hoodie, Garment::LongSleeveShirt]);
    } else {
        items.extend([Garment::CottonTShirt, Garment::PoloShirt, Garment::TankTop]);
    }

    if temperature_c < 15 {
        items.extend([Garment::Jeans, Garment::ThermalLeggings]);
    } else {
        items.extend([Garment::Shorts, Garment::ChinoPants]);
    }

    let condition = condition_text.to_lowercase();
    if condition.contains("rain") {
        items.extend([Garment::WaterproofBoots, Garment::CompactUmbrella]);
    }
    if condition.contains("sun") {
        items.extend([Garment::UvProtectionGlasses, Garment::BaseballCap]);
    }

    items
}

pub fn recommend(temperature_c: i32, condition_text: &str) -> Vec<ClothingItem> {
    garments(temperature_c, condition_text).into_iter().map(ClothingItem::from).collect()
}

pub fn recommend_for(request: &RecommendationRequest) -> Vec<ClothingItem> {
    recommend(request.temperature_c, &request.condition_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(temperature_c: i32, condition: &str) -> Vec<String> {
        recommend(temperature_c, condition).into_iter().map(|i| i.label).collect()
    }

    #[test]
    fn no_condition_yields_five_base_items() {
        for t in [i32::MIN, -40, 0, 9, 10, 14, 15, 19, 20, 45, i32::MAX] {
            let items = labels(t, "");
            assert_eq!(items.len(), 5, "temperature {t}");
        }
    }

    #[test]
    fn cold_band_order() {
        assert_eq!(
            labels(-5, ""),
            ["Thermal Wear", "Puffer Jacket", "Wool Sweater", "Jeans", "Thermal Leggings"]
        );
    }

    #[test]
    fn upper_body_boundary_at_ten() {
        assert!(labels(9, "").contains(&"Thermal Wear".to_string()));

        let at_ten = labels(10, "");
        assert!(at_ten.contains(&"Light Jacket".to_string()));
        assert!(!at_ten.contains(&"Thermal Wear".to_string()));
    }

    #[test]
    fn upper_body_boundary_at_twenty() {
        assert!(labels(19, "").contains(&"Light Jacket".to_string()));
        assert!(labels(20, "").contains(&"Cotton T-shirt".to_string()));
        assert!(!labels(20, "").contains(&"Light Jacket".to_string()));
    }

    #[test]
    fn lower_body_boundary_at_fifteen() {
        assert!(labels(14, "").contains(&"Jeans".to_string()));
        let at_fifteen = labels(15, "");
        assert!(at_fifteen.contains(&"Shorts".to_string()));
        assert!(!at_fifteen.contains(&"Jeans".to_string()));
    }

    #[test]
    fn mid_band_mixes_jacket_and_shorts() {
        assert_eq!(
            labels(17, ""),
            ["Light Jacket", "Hoodie", "Long-sleeve Shirt", "Shorts", "Chino Pants"]
        );
    }

    #[test]
    fn both_accessories_fire_case_insensitively() {
        let items = labels(25, "Sunny with light rain showers");
        assert_eq!(items.len(), 9);
        assert_eq!(
            &items[5..],
            ["Waterproof Boots", "Compact Umbrella", "UV Protection Glasses", "Baseball Cap"]
        );
    }

    #[test]
    fn single_accessory_group() {
        let rainy = labels(12, "HEAVY RAIN");
        assert_eq!(rainy.len(), 7);
        assert!(rainy.contains(&"Compact Umbrella".to_string()));
        assert!(!rainy.contains(&"Baseball Cap".to_string()));

        let sunny = labels(28, "sunny");
        assert_eq!(sunny.len(), 7);
        assert!(sunny.contains(&"Baseball Cap".to_string()));
    }

    #[test]
    fn substring_match_is_not_word_based() {
        // "Sunday" and "Rainbow" still contain the keywords.
        assert_eq!(labels(22, "Rainbow on Sunday").len(), 9);
        assert_eq!(labels(22, "Overcast").len(), 5);
    }

    #[test]
    fn icons_come_from_table() {
        let items = recommend(0, "rain");
        assert_eq!(items[0].icon_id, "thermometer.snowflake");
        assert_eq!(items[5].icon_id, "shoe.fill");
        assert_eq!(items[6].icon_id, "umbrella.fill");
    }

    #[test]
    fn every_garment_has_known_icon() {
        for garment in Garment::all() {
            assert_ne!(icon_for_label(garment.label()), UNKNOWN_ICON);
            assert_eq!(Garment::from_label(garment.label()), Some(*garment));
        }
    }

    #[test]
    fn unknown_label_uses_fallback_icon() {
        assert_eq!(icon_for_label("Tuxedo"), UNKNOWN_ICON);
        assert_eq!(icon_for_label(""), UNKNOWN_ICON);
    }

    #[test]
    fn recommendation_is_deterministic() {
        assert_eq!(recommend(3, "Light snow"), recommend(3, "Light snow"));
    }
}
