use mealdeck_shared::recipe::Unit;

/// Multiplier turning an amount in `unit` into the base unit nutrition
/// values are expressed in.
///
/// Volumes and weights share one scale, so `ml` counts as grams. Units
/// outside the table (`count` and unknown symbols) fall back to `1`.
pub fn factor(unit: &Unit) -> f64 {
    match unit {
        Unit::G | Unit::Ml | Unit::Serving => 1.0,
        Unit::Oz => 28.35,
        Unit::Cup => 240.0,
        Unit::Tbsp => 15.0,
        Unit::Tsp => 5.0,
        Unit::Count | Unit::Other(_) => 1.0,
    }
}

pub fn to_base(amount: f64, unit: &Unit) -> f64 {
    amount * factor(unit)
}
