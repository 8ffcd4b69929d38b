//! Storefront catalog rendered into slider rows.
//! The catalog is static page content bundled at compile time.

use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
    pub price_cents: u32,
    /// Pack size shown under the price, e.g. "500 g".
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Shelf {
    /// Element id of the slider row; also what the shelf buttons scroll.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub shelves: Vec<Shelf>,
}

impl Catalog {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The bundled catalog, or an empty one if it fails to parse.
    pub fn bundled() -> Self {
        match Self::parse(CATALOG_JSON) {
            Ok(c) => c,
            Err(err) => {
                crate::util::cwarn(&format!("catalog: {err}"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let c = Catalog::parse(CATALOG_JSON).expect("bundled catalog");
        assert!(!c.shelves.is_empty());
        assert!(c.shelves.iter().all(|s| !s.products.is_empty()));
    }

    #[test]
    fn shelf_ids_are_unique() {
        let c = Catalog::parse(CATALOG_JSON).expect("bundled catalog");
        let mut ids: Vec<&str> = c.shelves.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), c.shelves.len());
    }

    #[test]
    fn products_default_to_empty() {
        let c = Catalog::parse(r#"{"shelves":[{"id":"x","title":"X"}]}"#).expect("parse");
        assert!(c.shelves[0].products.is_empty());
    }
}
