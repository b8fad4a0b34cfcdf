//! Carousel slides
//!
//! A [`SlideSet`] is never empty: when the provider has nothing to show, the
//! fixed placeholder set is substituted so every index operation stays valid.

use super::product::{Product, PRODUCT_DETAIL_ROUTE};

pub const NO_IMAGE: &str = "https://via.placeholder.com/1000x400?text=No+Image";
pub const UNTITLED: &str = "Untitled Product";
pub const NO_DESCRIPTION: &str = "No description available";

const PLACEHOLDERS: [(&str, &str, &str, &str); 3] = [
    (
        "1",
        "https://via.placeholder.com/1000x400?text=Product+1",
        "Product 1",
        "Amazing product description",
    ),
    (
        "2",
        "https://via.placeholder.com/1000x400?text=Product+2",
        "Product 2",
        "Another great product",
    ),
    (
        "3",
        "https://via.placeholder.com/1000x400?text=Product+3",
        "Product 3",
        "Best deal available",
    ),
];

/// One displayable carousel item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(
        id: impl Into<String>,
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Build a slide from a product, filling blank fields with display fallbacks.
    pub fn from_product(product: &Product) -> Self {
        let image = product
            .thumbnail
            .as_deref()
            .filter(|thumbnail| !thumbnail.trim().is_empty())
            .unwrap_or(NO_IMAGE);
        let title = non_blank(&product.title).unwrap_or(UNTITLED);
        let description = non_blank(&product.description).unwrap_or(NO_DESCRIPTION);
        Self::new(product.id.clone(), image, title, description)
    }

    /// Where selecting this slide leads. Pass-through data only.
    pub fn link_target(&self) -> String {
        format!("{PRODUCT_DETAIL_ROUTE}/{}", self.id)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Ordered, non-empty collection of slides shown by one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
    placeholder: bool,
}

impl SlideSet {
    /// Wrap `slides`, substituting the placeholder set when it is empty.
    pub fn new(slides: Vec<Slide>) -> Self {
        if slides.is_empty() {
            Self::placeholder()
        } else {
            Self {
                slides,
                placeholder: false,
            }
        }
    }

    pub fn placeholder() -> Self {
        let slides = PLACEHOLDERS
            .iter()
            .map(|(id, image, title, description)| Slide::new(*id, *image, *title, *description))
            .collect();
        Self {
            slides,
            placeholder: true,
        }
    }

    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self::new(products.into_iter().map(Slide::from_product).collect())
    }

    /// Number of slides; always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

impl Default for SlideSet {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
