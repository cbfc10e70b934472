//! Home page view-model.

use megashop_core::{Category, Locale, ProductId};

use crate::catalog::Product;
use crate::i18n;

/// Product display data for cards on the home and catalog pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// The product's ID, for add-to-cart dispatch.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Formatted price ("$19.99").
    pub price: String,
    /// Category string.
    pub category: &'static str,
    /// Formatted rating ("4.5").
    pub rating: String,
    /// Image reference.
    pub image: String,
    /// Localized add-to-cart action label.
    pub action_label: String,
}

impl ProductCardView {
    /// Build a card from a catalog product.
    #[must_use]
    pub fn build(locale: Locale, product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price.to_string(),
            category: product.category.as_str(),
            rating: format!("{:.1}", product.rating),
            image: product.image.clone(),
            action_label: i18n::translate(locale, "add_to_cart"),
        }
    }
}

/// The home page: hero title plus a featured-products strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// Localized application title for the hero block.
    pub title: String,
    /// The first few catalog products.
    pub featured: Vec<ProductCardView>,
    /// All category names, for the footer listing.
    pub categories: Vec<&'static str>,
}

impl HomeView {
    /// Build the home page from the full catalog.
    #[must_use]
    pub fn build(locale: Locale, products: &[Product], featured_count: usize) -> Self {
        Self {
            title: i18n::translate(locale, "app_title"),
            featured: products
                .iter()
                .take(featured_count)
                .map(|p| ProductCardView::build(locale, p))
                .collect(),
            categories: Category::ALL.iter().map(Category::as_str).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    use crate::catalog::generator;

    #[test]
    fn test_featured_strip_is_capped() {
        let catalog = generator::generate(84, 7);
        let home = HomeView::build(Locale::En, &catalog, 12);
        assert_eq!(home.featured.len(), 12);
        assert_eq!(home.featured[0].title, "Product 1");
    }

    #[test]
    fn test_card_formats_price_and_rating() {
        let catalog = generator::generate(1, 7);
        let card = ProductCardView::build(Locale::En, &catalog[0]);
        assert!(card.price.starts_with('$'));
        assert_eq!(card.rating.len(), 3);
        assert_eq!(card.action_label, "Add to cart");
    }

    #[test]
    fn test_categories_listed() {
        let home = HomeView::build(Locale::En, &[], 12);
        assert_eq!(home.categories.len(), 7);
        assert!(home.featured.is_empty());
    }
}
