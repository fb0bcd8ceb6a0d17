use serde::{Deserialize, Serialize};

/// Primary macronutrient amounts in kg/ha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(alias = "N")]
    pub n: f64,
    #[serde(alias = "P")]
    pub p: f64,
    #[serde(alias = "K")]
    pub k: f64,
}

impl Nutrients {
    pub const fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.n * factor, self.p * factor, self.k * factor)
    }

    /// Per-nutrient shortfall of `self` against what `supply` already covers.
    pub fn deficit(&self, supply: &Nutrients) -> Self {
        Self::new(
            (self.n - supply.n).max(0.0),
            (self.p - supply.p).max(0.0),
            (self.k - supply.k).max(0.0),
        )
    }

    pub fn max_component(&self) -> f64 {
        self.n.max(self.p).max(self.k)
    }

    pub fn is_finite(&self) -> bool {
        self.n.is_finite() && self.p.is_finite() && self.k.is_finite()
    }

    pub fn is_non_negative(&self) -> bool {
        self.n >= 0.0 && self.p >= 0.0 && self.k >= 0.0
    }
}

impl std::fmt::Display for Nutrients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N {:.0} / P {:.0} / K {:.0}", self.n, self.p, self.k)
    }
}
