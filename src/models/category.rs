//! Waste category lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::WasteType;

/// Display label and recycling value for a waste type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteCategory {
    waste_type: WasteType,
    label: String,
    recycling_value_per_kg: f64,
}

impl WasteCategory {
    /// Creates a category.
    pub fn new(waste_type: WasteType, label: impl Into<String>, recycling_value_per_kg: f64) -> Self {
        Self {
            waste_type,
            label: label.into(),
            recycling_value_per_kg,
        }
    }

    /// Waste type this category describes.
    pub fn waste_type(&self) -> WasteType {
        self.waste_type
    }

    /// Display label, e.g. `"Compostable Waste"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Recycling value in currency units per kilogram.
    pub fn recycling_value_per_kg(&self) -> f64 {
        self.recycling_value_per_kg
    }
}

/// Read-only `WasteType -> WasteCategory` table with a `Mixed` fallback.
///
/// Lookups for a type with no entry resolve to the table's `Mixed` category,
/// which is always present.
///
/// # Examples
///
/// ```
/// use waste_routing::models::{CategoryTable, WasteCategory, WasteType};
///
/// let table = CategoryTable::standard();
/// assert_eq!(table.lookup(WasteType::Electronic).label(), "E-Waste");
///
/// let partial = CategoryTable::new(WasteCategory::new(WasteType::Mixed, "General Waste", 0.05));
/// assert_eq!(partial.lookup(WasteType::Organic).label(), "General Waste");
/// ```
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: HashMap<WasteType, WasteCategory>,
    fallback: WasteCategory,
}

impl CategoryTable {
    /// Creates a table containing only the fallback entry.
    ///
    /// The fallback is stored under [`WasteType::Mixed`] whatever its own tag.
    pub fn new(fallback: WasteCategory) -> Self {
        Self {
            categories: HashMap::new(),
            fallback,
        }
    }

    /// The standard four-category table.
    pub fn standard() -> Self {
        Self::new(WasteCategory::new(WasteType::Mixed, "General Waste", 0.05))
            .with_category(WasteCategory::new(
                WasteType::Recyclable,
                "Recyclable Materials",
                0.15,
            ))
            .with_category(WasteCategory::new(WasteType::Organic, "Compostable Waste", 0.10))
            .with_category(WasteCategory::new(WasteType::Electronic, "E-Waste", 0.25))
    }

    /// Adds or replaces the entry for `category.waste_type()`.
    ///
    /// A `Mixed` entry replaces the fallback.
    pub fn with_category(mut self, category: WasteCategory) -> Self {
        if category.waste_type() == WasteType::Mixed {
            self.fallback = category;
        } else {
            self.categories.insert(category.waste_type(), category);
        }
        self
    }

    /// Category for `waste_type`, or the `Mixed` fallback.
    pub fn lookup(&self, waste_type: WasteType) -> &WasteCategory {
        self.categories.get(&waste_type).unwrap_or(&self.fallback)
    }

    /// Returns `true` if `waste_type` has its own entry (the fallback counts for `Mixed`).
    pub fn contains(&self, waste_type: WasteType) -> bool {
        waste_type == WasteType::Mixed || self.categories.contains_key(&waste_type)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
