// Dependent-field derivation: which models, fuel types, transmissions,
// power and torque values are selectable for the chosen brand and model.

use serde::Serialize;

use crate::catalog::{
    CatalogIndex, DEFAULT_POWER, DEFAULT_TORQUE, FUEL_TYPES, OptionEntry, TRANSMISSION_TYPES,
};
use crate::models::VehicleDescriptor;

/// Valid option sets for a brand/model pair plus the descriptor corrected
/// to stay consistent with them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub models: Vec<String>,
    pub fuel_types: Vec<OptionEntry>,
    pub transmissions: Vec<OptionEntry>,
    pub powers: Vec<f64>,
    pub torques: Vec<f64>,
    pub corrected: VehicleDescriptor,
}

/// Re-derive every dependent option set from `brand` and `model`.
///
/// The whole snapshot is recomputed on every call rather than patched
/// incrementally, so the caller can never observe stale lists. The input
/// descriptor is not mutated; corrections land in the returned copy.
/// Resolving the corrected descriptor again with the same brand and model
/// is a fixed point.
///
/// A sub-index entry that exists but is empty is treated like a missing
/// entry.
pub fn resolve_options(
    catalog: &CatalogIndex,
    brand: &str,
    model: &str,
    current: &VehicleDescriptor,
) -> ResolvedOptions {
    let mut corrected = current.clone();
    corrected.brand = brand.to_string();
    corrected.model = model.to_string();

    // A brand without models yields an empty list and an empty model
    // string; callers treat that as an incomplete selection.
    let models: Vec<String> = catalog.models_for(brand).map(<[String]>::to_vec).unwrap_or_default();
    if !models.iter().any(|m| *m == corrected.model) {
        corrected.model = models.first().cloned().unwrap_or_default();
    }

    let key = CatalogIndex::model_key(brand, &corrected.model);

    let fuel_types = filter_global(
        catalog.fuels_for(&key),
        &FUEL_TYPES,
        &mut corrected.fuel_type,
    );
    let transmissions = filter_global(
        catalog.transmissions_for(&key),
        &TRANSMISSION_TYPES,
        &mut corrected.transmission,
    );
    let powers = exact_list(catalog.powers_for(&key), &mut corrected.power, DEFAULT_POWER);
    let torques = exact_list(catalog.torques_for(&key), &mut corrected.torque, DEFAULT_TORQUE);

    ResolvedOptions { models, fuel_types, transmissions, powers, torques, corrected }
}

// Fuel-type and transmission policy: a sub-index hit filters the global
// catalog and corrects an invalid selection to the first filtered entry;
// a miss exposes the whole catalog and leaves the selection untouched.
fn filter_global(
    allowed: Option<&[String]>,
    global: &[OptionEntry],
    selected: &mut String,
) -> Vec<OptionEntry> {
    match allowed.filter(|values| !values.is_empty()) {
        Some(allowed) => {
            let filtered: Vec<OptionEntry> = global
                .iter()
                .copied()
                .filter(|entry| allowed.iter().any(|a| a == entry.value))
                .collect();
            if !filtered.is_empty() && !allowed.iter().any(|a| a == selected) {
                *selected = filtered[0].value.to_string();
            }
            filtered
        }
        None => global.to_vec(),
    }
}

// Power and torque policy: a sub-index hit exposes the exact value list and
// corrects an absent selection to its first element; a miss exposes an empty
// list and resets the selection to the fixed default.
fn exact_list(values: Option<&[f64]>, selected: &mut f64, default: f64) -> Vec<f64> {
    match values.filter(|values| !values.is_empty()) {
        Some(values) => {
            if !values.contains(selected) {
                *selected = values[0];
            }
            values.to_vec()
        }
        None => {
            *selected = default;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> CatalogIndex {
        serde_json::from_value(json!({
            "brands": [
                { "name": "BMW", "models": ["3 Series", "5 Series"] },
                { "name": "Tesla", "models": ["Model 3"] },
                { "name": "Phantom", "models": [] }
            ],
            "fuelTypes": {
                "BMW-3 Series": ["Gasoline", "Diesel"],
                "BMW-5 Series": []
            },
            "transmissions": {
                "BMW-3 Series": ["A"]
            },
            "powers": {
                "BMW-3 Series": [156.0, 184.0, 258.0]
            },
            "torques": {
                "BMW-3 Series": [250.0, 300.0, 400.0]
            }
        }))
        .unwrap()
    }

    fn descriptor(brand: &str, model: &str) -> VehicleDescriptor {
        VehicleDescriptor {
            brand: brand.to_string(),
            model: model.to_string(),
            is_new: false,
            age: 3,
            mileage: 50_000,
            fuel_type: "Gasoline".to_string(),
            transmission: "A".to_string(),
            power: 184.0,
            torque: 300.0,
        }
    }

    #[test]
    fn invalid_model_corrects_to_first_model() {
        let catalog = catalog();
        let current = descriptor("BMW", "X9");
        let resolved = resolve_options(&catalog, "BMW", "X9", &current);
        assert_eq!(resolved.models, vec!["3 Series", "5 Series"]);
        assert_eq!(resolved.corrected.model, "3 Series");
    }

    #[test]
    fn brand_without_models_yields_empty_model_string() {
        let catalog = catalog();
        let current = descriptor("Phantom", "Ghost");
        let resolved = resolve_options(&catalog, "Phantom", "Ghost", &current);
        assert!(resolved.models.is_empty());
        assert_eq!(resolved.corrected.model, "");
    }

    #[test]
    fn sub_index_hit_filters_global_catalogs() {
        let catalog = catalog();
        let current = descriptor("BMW", "3 Series");
        let resolved = resolve_options(&catalog, "BMW", "3 Series", &current);
        let fuels: Vec<&str> = resolved.fuel_types.iter().map(|e| e.value).collect();
        assert_eq!(fuels, vec!["Gasoline", "Diesel"]);
        let transmissions: Vec<&str> = resolved.transmissions.iter().map(|e| e.value).collect();
        assert_eq!(transmissions, vec!["A"]);
    }

    #[test]
    fn valid_fuel_type_is_left_unchanged() {
        let catalog = catalog();
        let current = descriptor("BMW", "3 Series");
        let resolved = resolve_options(&catalog, "BMW", "3 Series", &current);
        assert_eq!(resolved.corrected.fuel_type, "Gasoline");
    }

    #[test]
    fn invalid_fuel_type_corrects_to_first_filtered_entry() {
        let catalog = catalog();
        let mut current = descriptor("BMW", "3 Series");
        current.fuel_type = "Hybrid".to_string();
        let resolved = resolve_options(&catalog, "BMW", "3 Series", &current);
        assert_eq!(resolved.corrected.fuel_type, "Gasoline");
    }

    #[test]
    fn sub_index_miss_exposes_full_catalog_and_keeps_selection() {
        let catalog = catalog();
        let mut current = descriptor("Tesla", "Model 3");
        current.fuel_type = "Hybrid".to_string();
        current.transmission = "CVT".to_string();
        let resolved = resolve_options(&catalog, "Tesla", "Model 3", &current);
        assert_eq!(resolved.fuel_types.len(), FUEL_TYPES.len());
        assert_eq!(resolved.transmissions.len(), TRANSMISSION_TYPES.len());
        assert_eq!(resolved.corrected.fuel_type, "Hybrid");
        assert_eq!(resolved.corrected.transmission, "CVT");
    }

    #[test]
    fn empty_sub_index_entry_behaves_like_a_miss() {
        let catalog = catalog();
        let current = descriptor("BMW", "5 Series");
        let resolved = resolve_options(&catalog, "BMW", "5 Series", &current);
        assert_eq!(resolved.fuel_types.len(), FUEL_TYPES.len());
        assert_eq!(resolved.corrected.fuel_type, "Gasoline");
    }

    #[test]
    fn power_and_torque_reset_to_defaults_on_miss() {
        let catalog = catalog();
        let mut current = descriptor("Tesla", "Model 3");
        current.power = 513.0;
        current.torque = 660.0;
        let resolved = resolve_options(&catalog, "Tesla", "Model 3", &current);
        assert!(resolved.powers.is_empty());
        assert!(resolved.torques.is_empty());
        assert_eq!(resolved.corrected.power, DEFAULT_POWER);
        assert_eq!(resolved.corrected.torque, DEFAULT_TORQUE);
    }

    #[test]
    fn absent_power_corrects_to_first_catalogued_value() {
        let catalog = catalog();
        let mut current = descriptor("BMW", "3 Series");
        current.power = 999.0;
        let resolved = resolve_options(&catalog, "BMW", "3 Series", &current);
        assert_eq!(resolved.powers, vec![156.0, 184.0, 258.0]);
        assert_eq!(resolved.corrected.power, 156.0);
    }

    #[test]
    fn resolving_the_corrected_descriptor_is_a_fixed_point() {
        let catalog = catalog();
        for (brand, model) in [("BMW", "X9"), ("Tesla", "Model 3"), ("Phantom", "Ghost")] {
            let mut current = descriptor(brand, model);
            current.fuel_type = "Biodiesel".to_string();
            current.power = 777.0;
            let first = resolve_options(&catalog, brand, model, &current);
            let second = resolve_options(
                &catalog,
                brand,
                &first.corrected.model,
                &first.corrected,
            );
            assert_eq!(first.corrected, second.corrected);
        }
    }

    #[test]
    fn input_descriptor_is_not_mutated() {
        let catalog = catalog();
        let current = descriptor("BMW", "X9");
        let before = current.clone();
        let _ = resolve_options(&catalog, "BMW", "X9", &current);
        assert_eq!(current, before);
    }
}
