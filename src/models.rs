// Data structures shared between the core and the web layer

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogIndex, DEFAULT_POWER, DEFAULT_TORQUE, FUEL_TYPES, TRANSMISSION_TYPES};

/// The vehicle being estimated. Field names are camelCase on the wire to
/// match the JSON contract of the external prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDescriptor {
    pub brand: String,
    pub model: String,
    pub is_new: bool,
    pub age: u32,
    pub mileage: u64,
    pub fuel_type: String,
    pub transmission: String,
    pub power: f64,
    pub torque: f64,
}

impl VehicleDescriptor {
    /// Starting descriptor for a fresh form: first catalog brand and model,
    /// a typical used car otherwise.
    pub fn initial(catalog: &CatalogIndex) -> Self {
        let brand = catalog.first_brand().unwrap_or_default().to_string();
        let model = catalog
            .models_for(&brand)
            .and_then(|models| models.first())
            .cloned()
            .unwrap_or_default();
        VehicleDescriptor {
            brand,
            model,
            is_new: false,
            age: 3,
            mileage: 50_000,
            fuel_type: FUEL_TYPES[0].value.to_string(),
            transmission: TRANSMISSION_TYPES[0].value.to_string(),
            power: DEFAULT_POWER,
            torque: DEFAULT_TORQUE,
        }
    }

    /// A brand-new car has no age and no mileage, whatever the form sent.
    pub fn normalized(mut self) -> Self {
        if self.is_new {
            self.age = 0;
            self.mileage = 0;
        }
        self
    }
}

/// Output of the local heuristic pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub price: i64,
    pub currency: &'static str,
    pub explanation: String,
}

/// Response body of the external prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub confidence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> VehicleDescriptor {
        VehicleDescriptor {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            is_new: false,
            age: 3,
            mileage: 50_000,
            fuel_type: "Gasoline".to_string(),
            transmission: "A".to_string(),
            power: 140.0,
            torque: 190.0,
        }
    }

    #[test]
    fn descriptor_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(descriptor()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "brand",
            "model",
            "isNew",
            "age",
            "mileage",
            "fuelType",
            "transmission",
            "power",
            "torque",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn prediction_response_matches_upstream_shape() {
        let raw = r#"{
            "predicted_price": 850000.0,
            "min_price": 790000.0,
            "max_price": 910000.0,
            "confidence": "high"
        }"#;
        let parsed: PredictionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.predicted_price, 850000.0);
        assert_eq!(parsed.confidence, "high");
    }

    #[test]
    fn normalized_zeroes_age_and_mileage_for_new_cars() {
        let mut d = descriptor();
        d.is_new = true;
        let d = d.normalized();
        assert_eq!(d.age, 0);
        assert_eq!(d.mileage, 0);
    }

    #[test]
    fn normalized_leaves_used_cars_alone() {
        let d = descriptor().normalized();
        assert_eq!(d.age, 3);
        assert_eq!(d.mileage, 50_000);
    }
}
