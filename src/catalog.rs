//! Catalog store - the immutable menu of sellable products.
//!
//! Built once at startup from the raw config entries and never mutated
//! afterwards. Category names are a closed set validated at load time, so
//! every `Product` in a live `Catalog` carries a known [`Category`] rather
//! than a free-form string.

use crate::{
    config::menu::ProductConfig,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of menu categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Grilled fish, prawns, and other seafood dishes
    SeaFood,
    /// Jollof, fried rice, and other rice-based meals
    RiceMeals,
    /// Shawarma, burgers, fries
    FastFood,
    /// Traditional soups (egusi, ogbono, afang, okra)
    Soups,
    /// Fufu, pounded yam, garri, semovita
    Swallows,
    /// Soft drinks, cocktails, smoothies
    Drinks,
    /// Pastries and packaged snacks
    Snacks,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Self; 7] = [
        Self::SeaFood,
        Self::RiceMeals,
        Self::FastFood,
        Self::Soups,
        Self::Swallows,
        Self::Drinks,
        Self::Snacks,
    ];

    /// The snake_case name used in config.toml and persisted JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeaFood => "sea_food",
            Self::RiceMeals => "rice_meals",
            Self::FastFood => "fast_food",
            Self::Soups => "soups",
            Self::Swallows => "swallows",
            Self::Drinks => "drinks",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sea_food" => Ok(Self::SeaFood),
            "rice_meals" => Ok(Self::RiceMeals),
            "fast_food" => Ok(Self::FastFood),
            "soups" => Ok(Self::Soups),
            "swallows" => Ok(Self::Swallows),
            "drinks" => Ok(Self::Drinks),
            "snacks" => Ok(Self::Snacks),
            other => Err(Error::Config {
                message: format!("Unknown menu category: {other}"),
            }),
        }
    }
}

/// A sellable menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier (e.g. `"sf-1"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Menu category
    pub category: Category,
    /// Unit price in whole naira
    pub price: i64,
    /// Short marketing description
    pub description: String,
    /// Image URL for display layers
    pub image: String,
}

/// Immutable, validated collection of all sellable products.
#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from raw config entries, validating every field.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A category name is not in the closed category set
    /// - A product id or name is empty
    /// - A unit price is zero or negative
    /// - Two entries share a product id
    pub fn from_config(entries: Vec<ProductConfig>) -> Result<Self> {
        let mut products = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());

        for entry in entries {
            if entry.id.trim().is_empty() {
                return Err(Error::Config {
                    message: "Product id cannot be empty".to_string(),
                });
            }
            if entry.name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product '{}' has an empty name", entry.id),
                });
            }
            if entry.price <= 0 {
                return Err(Error::Config {
                    message: format!(
                        "Product '{}' has a non-positive price: {}",
                        entry.id, entry.price
                    ),
                });
            }

            let category = Category::from_str(&entry.category)?;

            if by_id.contains_key(&entry.id) {
                return Err(Error::Config {
                    message: format!("Duplicate product id: {}", entry.id),
                });
            }

            by_id.insert(entry.id.clone(), products.len());
            products.push(Product {
                id: entry.id,
                name: entry.name,
                category,
                price: entry.price,
                description: entry.description,
                image: entry.image,
            });
        }

        Ok(Self { products, by_id })
    }

    /// Looks up a product by its stable id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    /// All products in a category, in menu order.
    #[must_use]
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The full menu, in config order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of distinct products on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_catalog;

    fn raw_product(id: &str, category: &str, price: i64) -> ProductConfig {
        ProductConfig {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: category.to_string(),
            price,
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = sample_catalog();

        let fish = catalog.product("sf-1").unwrap();
        assert_eq!(fish.name, "Grilled Fish");
        assert_eq!(fish.category, Category::SeaFood);
        assert_eq!(fish.price, 3500);

        assert!(catalog.product("nope").is_none());
    }

    #[test]
    fn test_catalog_category_filter() {
        let catalog = sample_catalog();

        let seafood = catalog.in_category(Category::SeaFood);
        assert!(!seafood.is_empty());
        assert!(seafood.iter().all(|p| p.category == Category::SeaFood));
    }

    #[test]
    fn test_unknown_category_rejected_at_load() {
        let result = Catalog::from_config(vec![raw_product("x-1", "street_food", 500)]);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_duplicate_id_rejected_at_load() {
        let result = Catalog::from_config(vec![
            raw_product("x-1", "drinks", 500),
            raw_product("x-1", "snacks", 800),
        ]);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_non_positive_price_rejected_at_load() {
        let result = Catalog::from_config(vec![raw_product("x-1", "drinks", 0)]);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }
}
