// Reference data: brands, models and their valid attribute sets.
// Loaded once at startup and treated as immutable afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fallback power (HP) when a model has no catalogued power values.
pub const DEFAULT_POWER: f64 = 200.0;
/// Fallback torque (Nm) when a model has no catalogued torque values.
pub const DEFAULT_TORQUE: f64 = 300.0;

/// A selectable value together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

/// Global fuel-type catalog. Model-specific entries filter this list.
pub const FUEL_TYPES: [OptionEntry; 6] = [
    OptionEntry { value: "Gasoline", label: "Gasoline" },
    OptionEntry { value: "Diesel", label: "Diesel" },
    OptionEntry { value: "Hybrid", label: "Hybrid" },
    OptionEntry { value: "Flex Fuel Vehicle", label: "Flex fuel" },
    OptionEntry { value: "Compressed Natural Gas", label: "CNG" },
    OptionEntry { value: "Biodiesel", label: "Biodiesel" },
];

/// Global transmission catalog.
pub const TRANSMISSION_TYPES: [OptionEntry; 4] = [
    OptionEntry { value: "A", label: "Automatic" },
    OptionEntry { value: "M", label: "Manual" },
    OptionEntry { value: "CVT", label: "CVT" },
    OptionEntry { value: "Dual Clutch", label: "Dual clutch" },
];

/// Display label for a fuel-type value; unknown values pass through as-is.
pub fn fuel_label(value: &str) -> &str {
    FUEL_TYPES
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.label)
        .unwrap_or(value)
}

/// Display label for a transmission value; unknown values pass through as-is.
pub fn transmission_label(value: &str) -> &str {
    TRANSMISSION_TYPES
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.label)
        .unwrap_or(value)
}

#[derive(Debug, Clone, Deserialize)]
struct BrandEntry {
    name: String,
    models: Vec<String>,
}

/// Immutable reference data mapping brands to models and "brand-model" keys
/// to the attribute values observed for that model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    brands: Vec<BrandEntry>,
    #[serde(default)]
    fuel_types: HashMap<String, Vec<String>>,
    #[serde(default)]
    transmissions: HashMap<String, Vec<String>>,
    #[serde(default)]
    powers: HashMap<String, Vec<f64>>,
    #[serde(default)]
    torques: HashMap<String, Vec<f64>>,
}

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

impl CatalogIndex {
    /// Load the catalog from `path` when configured, otherwise from the
    /// document embedded in the binary.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse catalog file {}", path.display()))
            }
            None => serde_json::from_str(EMBEDDED_CATALOG)
                .context("Failed to parse embedded catalog"),
        }
    }

    /// Lookup key for the model-specific sub-indices.
    pub fn model_key(brand: &str, model: &str) -> String {
        format!("{brand}-{model}")
    }

    pub fn brand_names(&self) -> Vec<&str> {
        self.brands.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn first_brand(&self) -> Option<&str> {
        self.brands.first().map(|entry| entry.name.as_str())
    }

    pub fn models_for(&self, brand: &str) -> Option<&[String]> {
        self.brands
            .iter()
            .find(|entry| entry.name == brand)
            .map(|entry| entry.models.as_slice())
    }

    pub fn fuels_for(&self, key: &str) -> Option<&[String]> {
        self.fuel_types.get(key).map(|values| values.as_slice())
    }

    pub fn transmissions_for(&self, key: &str) -> Option<&[String]> {
        self.transmissions.get(key).map(|values| values.as_slice())
    }

    pub fn powers_for(&self, key: &str) -> Option<&[f64]> {
        self.powers.get(key).map(|values| values.as_slice())
    }

    pub fn torques_for(&self, key: &str) -> Option<&[f64]> {
        self.torques.get(key).map(|values| values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = CatalogIndex::load(None).unwrap();
        assert!(catalog.brand_count() > 0);
        assert_eq!(catalog.first_brand(), Some("Acura"));
    }

    #[test]
    fn embedded_catalog_sub_index_keys_refer_to_known_models() {
        let catalog = CatalogIndex::load(None).unwrap();
        for key in catalog
            .fuel_types
            .keys()
            .chain(catalog.transmissions.keys())
            .chain(catalog.powers.keys())
            .chain(catalog.torques.keys())
        {
            let known = catalog.brands.iter().any(|entry| {
                entry.models.iter().any(|model| {
                    CatalogIndex::model_key(&entry.name, model) == *key
                })
            });
            assert!(known, "sub-index key {key} has no matching brand/model");
        }
    }

    #[test]
    fn labels_fall_back_to_the_raw_value() {
        assert_eq!(fuel_label("Gasoline"), "Gasoline");
        assert_eq!(fuel_label("Hydrogen"), "Hydrogen");
        assert_eq!(transmission_label("A"), "Automatic");
        assert_eq!(transmission_label("Sequential"), "Sequential");
    }
}
