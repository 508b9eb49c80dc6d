// Local heuristic pricing engine. A deterministic multiplicative formula
// used as an offline fallback; the authoritative estimate comes from the
// external prediction service.

use std::collections::HashMap;

use chrono::Datelike;
use once_cell::sync::Lazy;

use crate::catalog::{fuel_label, transmission_label};
use crate::models::{PriceEstimate, VehicleDescriptor};

const BASE_PRICE: f64 = 400_000.0;
const CURRENCY: &str = "TRY";

/// Fixed key → factor table. Unknown keys price at 1.0.
struct MultiplierTable(HashMap<&'static str, f64>);

impl MultiplierTable {
    fn factor(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(1.0)
    }
}

static BRAND_MULTIPLIERS: Lazy<MultiplierTable> = Lazy::new(|| {
    MultiplierTable(HashMap::from([
        ("Mercedes-Benz", 2.0),
        ("BMW", 1.9),
        ("Audi", 1.8),
        ("Porsche", 2.5),
        ("Tesla", 2.2),
        ("Lexus", 1.7),
        ("Land Rover", 1.8),
        ("Ferrari", 3.0),
        ("Lamborghini", 3.5),
        ("Rolls-Royce", 3.2),
        ("Bentley", 2.8),
        ("Maserati", 2.3),
        ("McLaren", 2.7),
        ("Aston Martin", 2.4),
        ("Cadillac", 1.6),
        ("Genesis", 1.4),
        ("Infiniti", 1.5),
        ("Acura", 1.4),
        ("Volvo", 1.5),
        ("Jaguar", 1.6),
        ("Toyota", 1.3),
        ("Honda", 1.2),
        ("Hyundai", 1.1),
        ("Kia", 1.1),
        ("Mazda", 1.1),
        ("Subaru", 1.2),
        ("Ford", 1.0),
        ("Chevrolet", 1.0),
        ("Nissan", 1.0),
        ("Volkswagen", 1.2),
        ("Jeep", 1.1),
        ("Dodge", 1.0),
        ("Ram", 1.1),
        ("GMC", 1.0),
        ("Buick", 0.9),
        ("Chrysler", 0.9),
        ("Mitsubishi", 0.9),
        ("Fiat", 0.85),
        ("Alfa Romeo", 1.3),
        ("Mini", 1.1),
        ("Lincoln", 1.3),
    ]))
});

static FUEL_MULTIPLIERS: Lazy<MultiplierTable> = Lazy::new(|| {
    MultiplierTable(HashMap::from([
        ("Gasoline", 1.0),
        ("Diesel", 1.05),
        ("Hybrid", 1.25),
        ("Flex Fuel Vehicle", 0.95),
        ("Compressed Natural Gas", 0.85),
        ("Biodiesel", 0.9),
    ]))
});

static TRANSMISSION_MULTIPLIERS: Lazy<MultiplierTable> = Lazy::new(|| {
    MultiplierTable(HashMap::from([
        ("A", 1.15),
        ("M", 1.0),
        ("CVT", 1.08),
        ("Dual Clutch", 1.18),
    ]))
});

// Age depreciation for used cars, floored at 30% of the pre-depreciation
// value.
fn age_factor(age: u32) -> f64 {
    (1.0 - age as f64 * 0.09).max(0.3)
}

// Mileage depreciation, floored at 25%.
fn mileage_factor(mileage: u64) -> f64 {
    (1.0 - mileage as f64 / 400_000.0).max(0.25)
}

// Tiers are evaluated highest-first; exactly one applies.
fn power_tier(power: f64) -> f64 {
    if power >= 500.0 {
        1.5
    } else if power >= 400.0 {
        1.35
    } else if power >= 300.0 {
        1.25
    } else if power >= 250.0 {
        1.18
    } else if power >= 200.0 {
        1.1
    } else if power >= 150.0 {
        1.05
    } else {
        1.0
    }
}

fn torque_tier(torque: f64) -> f64 {
    if torque >= 600.0 {
        1.25
    } else if torque >= 500.0 {
        1.2
    } else if torque >= 400.0 {
        1.15
    } else if torque >= 300.0 {
        1.08
    } else {
        1.0
    }
}

// Nearest multiple of 1000, half up on the price/1000 quotient.
fn round_to_thousand(raw: f64) -> i64 {
    (raw / 1000.0).round() as i64 * 1000
}

/// Compute the heuristic estimate for `details`.
///
/// Pure and total: every lookup miss degrades to a multiplier of 1.0, so
/// identical inputs always produce identical integer output.
pub fn estimate_price(details: &VehicleDescriptor) -> PriceEstimate {
    estimate_price_at(details, chrono::Local::now().year())
}

fn estimate_price_at(details: &VehicleDescriptor, current_year: i32) -> PriceEstimate {
    let mut price = BASE_PRICE;
    price *= BRAND_MULTIPLIERS.factor(&details.brand);

    if details.is_new {
        price *= 1.7;
    } else {
        price *= age_factor(details.age);
    }
    price *= mileage_factor(details.mileage);

    price *= FUEL_MULTIPLIERS.factor(&details.fuel_type);
    price *= TRANSMISSION_MULTIPLIERS.factor(&details.transmission);
    price *= power_tier(details.power);
    price *= torque_tier(details.torque);

    PriceEstimate {
        price: round_to_thousand(price),
        currency: CURRENCY,
        explanation: explanation(details, current_year),
    }
}

fn explanation(details: &VehicleDescriptor, current_year: i32) -> String {
    let status = if details.is_new {
        "new".to_string()
    } else {
        format!("used, {} model", current_year - details.age as i32)
    };
    let age_part = if details.age > 0 {
        format!(", {} years old", details.age)
    } else {
        String::new()
    };
    format!(
        "Estimated value of your {} {} ({}, {} km{}) based on its power ({} HP), \
         torque ({} Nm), fuel type ({}) and transmission ({}).",
        details.brand,
        details.model,
        status,
        details.mileage,
        age_part,
        details.power,
        details.torque,
        fuel_label(&details.fuel_type),
        transmission_label(&details.transmission),
    )
}
