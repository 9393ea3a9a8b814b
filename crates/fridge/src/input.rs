use mealdeck_shared::recipe::Unit;
use validator::Validate;

/// Stock being put into the fridge.
#[derive(Validate, Clone, Debug, PartialEq)]
pub struct FridgeInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    pub unit: Unit,
}

impl FridgeInput {
    pub fn new(name: impl AsRef<str>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.as_ref().trim().to_owned(),
            amount: if amount.is_finite() { amount } else { 0.0 },
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(FridgeInput::new(" Eggs ", 6.0, Unit::Count).validate().is_ok());
        assert_eq!(FridgeInput::new(" Eggs ", 6.0, Unit::Count).name, "Eggs");
        assert!(FridgeInput::new("   ", 6.0, Unit::Count).validate().is_err());
        assert!(FridgeInput::new("Eggs", 0.0, Unit::Count).validate().is_err());
        assert!(FridgeInput::new("Eggs", -1.0, Unit::Count).validate().is_err());
        assert!(FridgeInput::new("Eggs", f64::NAN, Unit::Count).validate().is_err());
    }
}
