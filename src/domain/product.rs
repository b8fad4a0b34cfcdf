use serde::{Deserialize, Deserializer, Serialize};

/// Route prefix every product detail link starts with.
pub const PRODUCT_DETAIL_ROUTE: &str = "/product-detail";

/// A product as delivered by the storefront catalog.
///
/// Field names follow the catalog API (`discountPercentage`). Ids may be
/// JSON strings or integers and are kept as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "discount_percentage")]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Soft-deleted products stay in the catalog but are never shown.
    #[serde(default)]
    pub deleted: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price: 0.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: String::new(),
            category: String::new(),
            thumbnail: None,
            images: Vec::new(),
            deleted: false,
        }
    }

    /// Price after the discount, rounded to a whole unit.
    ///
    /// Discounts outside `0..=100` are clamped.
    pub fn discounted_price(&self) -> f64 {
        let discount = self.discount_percentage.clamp(0.0, 100.0);
        (self.price * (1.0 - discount / 100.0)).round()
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn link_target(&self) -> String {
        format!("{PRODUCT_DETAIL_ROUTE}/{}", self.id)
    }

    /// Case-insensitive match against title, brand and category.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.title, &self.brand, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
    })
}

/// The ordered product collection backing the home page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products that have not been soft-deleted, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| !product.deleted)
    }

    /// Visible products matching `query`. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.visible()
            .filter(|product| needle.is_empty() || product.matches_lowercase(&needle))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn product(id: &str, title: &str, brand: &str, category: &str) -> Product {
        Product {
            brand: brand.to_owned(),
            category: category.to_owned(),
            ..Product::new(id, title)
        }
    }

    fn sample_catalog() -> Catalog {
        let mut lamp = product("3", "Desk Lamp", "Lumen", "home");
        lamp.deleted = true;
        Catalog::new(vec![
            product("1", "Trail Runner", "Stride", "footwear"),
            product("2", "Canvas Weekender", "Field Co", "bags"),
            lamp,
        ])
    }

    #[rstest]
    #[case(1000.0, 10.0, 900.0)]
    #[case(1499.0, 10.0, 1349.0)]
    #[case(50.0, 0.0, 50.0)]
    #[case(50.0, 150.0, 0.0)]
    #[case(50.0, -5.0, 50.0)]
    fn test_discounted_price(#[case] price: f64, #[case] discount: f64, #[case] expected: f64) {
        let product = Product {
            price,
            discount_percentage: discount,
            ..Product::new("1", "x")
        };
        assert_eq!(product.discounted_price(), expected);
    }

    #[test]
    fn test_link_target() {
        assert_eq!(Product::new("p-7", "x").link_target(), "/product-detail/p-7");
    }

    #[test]
    fn test_visible_skips_deleted() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.visible().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[rstest]
    #[case("", vec!["1", "2"])]
    #[case("   ", vec!["1", "2"])]
    #[case("trail", vec!["1"])]
    #[case("FIELD", vec!["2"])]
    #[case("bags", vec!["2"])]
    #[case("lamp", vec![])]
    #[case("nothing", vec![])]
    fn test_search(#[case] query: &str, #[case] expected: Vec<&str>) {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog
            .search(query)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let catalog = Catalog::from_json(r#"[{"id": "a", "title": "Alpha"}, {"id": "b"}]"#)
            .expect("valid catalog json");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1], Product::new("b", ""));
        assert!(catalog.find("a").is_some());
        assert!(catalog.find("z").is_none());
    }

    #[test]
    fn test_from_json_accepts_api_records() {
        let catalog = Catalog::from_json(
            r#"[{"id": 1, "title": "Phone", "price": 200, "discountPercentage": 12.5}]"#,
        )
        .expect("valid catalog json");
        let product = &catalog.products()[0];
        assert_eq!(product.id, "1");
        assert_eq!(product.discount_percentage, 12.5);
        assert_eq!(product.discounted_price(), 175.0);
        assert_eq!(product.link_target(), "/product-detail/1");
    }

    #[test]
    fn test_from_json_keeps_snake_case_discount() {
        let catalog = Catalog::from_json(r#"[{"id": "x", "discount_percentage": 5}]"#)
            .expect("valid catalog json");
        assert_eq!(catalog.products()[0].discount_percentage, 5.0);
    }

    #[rstest]
    #[case(r#"[{"id": 1.5}]"#)]
    #[case(r#"[{"id": null}]"#)]
    #[case(r#"[{"title": "no id"}]"#)]
    fn test_from_json_rejects_bad_ids(#[case] json: &str) {
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Catalog::from_json(r#"{"id": "a"}"#).is_err());
    }
}
