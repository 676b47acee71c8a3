use serde::{Deserialize, Serialize};

/// Canonical base unit that recognized measurement abbreviations convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnit {
    /// Mass, stored in grams (g, kg, oz, lb).
    Grams,
    /// Volume, stored in milliliters (ml, l, tsp, tbsp, cup).
    Milliliters,
}

impl BaseUnit {
    /// The label used on consolidated rows, e.g. "200 grams".
    pub fn label(&self) -> &'static str {
        match self {
            BaseUnit::Grams => "grams",
            BaseUnit::Milliliters => "milliliters",
        }
    }
}

/// One unit table entry: how many base units a single abbreviation unit is worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pub multiplier: f64,
    pub base: BaseUnit,
}

impl UnitConversion {
    pub fn grams(multiplier: f64) -> Self {
        UnitConversion {
            multiplier,
            base: BaseUnit::Grams,
        }
    }

    pub fn milliliters(multiplier: f64) -> Self {
        UnitConversion {
            multiplier,
            base: BaseUnit::Milliliters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_unit_labels() {
        assert_eq!(BaseUnit::Grams.label(), "grams");
        assert_eq!(BaseUnit::Milliliters.label(), "milliliters");
    }

    #[test]
    fn test_conversion_constructors() {
        let oz = UnitConversion::grams(28.35);
        assert_eq!(oz.base, BaseUnit::Grams);
        assert_eq!(oz.multiplier, 28.35);

        let cup = UnitConversion::milliliters(240.0);
        assert_eq!(cup.base, BaseUnit::Milliliters);
        assert_eq!(cup.multiplier, 240.0);
    }
}
