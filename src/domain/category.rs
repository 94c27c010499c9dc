use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Hardware categories handled by the catalog and the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Psu,
    Case,
    Cooling,
}

impl Category {
    /// All categories in storefront order.
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Gpu,
        Category::Storage,
        Category::Psu,
        Category::Case,
        Category::Cooling,
    ];

    /// Wire name used by the backend (`category=` query parameter, selection map keys).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "MOTHERBOARD",
            Category::Ram => "RAM",
            Category::Gpu => "GPU",
            Category::Storage => "STORAGE",
            Category::Psu => "PSU",
            Category::Case => "CASE",
            Category::Cooling => "COOLING",
        }
    }

    /// French label shown on the storefront.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpu => "Processeur",
            Category::Motherboard => "Carte mère",
            Category::Ram => "Mémoire RAM",
            Category::Gpu => "Carte graphique",
            Category::Storage => "Stockage",
            Category::Psu => "Alimentation",
            Category::Case => "Boîtier",
            Category::Cooling => "Refroidissement",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::InvalidCategory(s.to_string()))
    }
}
