//! Seeded, immutable product catalogue.

use crate::domain::catalogue::{
    CatalogueValidationError, Product, ProductDraft, ProductId, seed_drafts,
};
use crate::domain::ports::ProductCatalogue;

/// Read-only catalogue held in insertion order.
///
/// Built once by the composition root and shared behind an `Arc`; it has no
/// interior mutability, so concurrent readers never contend.
#[derive(Debug, Clone)]
pub struct InMemoryProductCatalogue {
    products: Vec<Product>,
}

impl InMemoryProductCatalogue {
    /// Validate drafts and assign sequential ids starting at 1.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = ProductDraft>,
    ) -> Result<Self, CatalogueValidationError> {
        let products = drafts
            .into_iter()
            .zip(1_u32..)
            .map(|(draft, raw_id)| Product::new(ProductId::new(raw_id)?, draft))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }

    /// The standard five-product storefront catalogue.
    pub fn seeded() -> Result<Self, CatalogueValidationError> {
        Self::from_drafts(seed_drafts())
    }

    fn filtered(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| predicate(*product))
            .cloned()
            .collect()
    }
}

impl ProductCatalogue for InMemoryProductCatalogue {
    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn by_id(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|product| product.id() == id).cloned()
    }

    fn by_category(&self, label: &str) -> Vec<Product> {
        self.filtered(|product| product.category().label() == label)
    }

    fn featured(&self) -> Vec<Product> {
        self.filtered(Product::is_featured)
    }

    fn popular(&self) -> Vec<Product> {
        self.filtered(Product::is_popular)
    }

    fn search(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.filtered(|product| product.matches_lowercase(&query))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn catalogue() -> InMemoryProductCatalogue {
        InMemoryProductCatalogue::seeded().expect("seed validates")
    }

    #[rstest]
    fn ids_are_sequential_from_one(catalogue: InMemoryProductCatalogue) {
        let ids: Vec<u32> = catalogue.all().iter().map(|p| p.id().get()).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn every_product_round_trips_through_by_id(catalogue: InMemoryProductCatalogue) {
        for product in catalogue.all() {
            assert_eq!(catalogue.by_id(product.id()), Some(product));
        }
    }

    #[rstest]
    fn unknown_id_is_absent(catalogue: InMemoryProductCatalogue) {
        let id = ProductId::new(99).expect("valid id");

        assert_eq!(catalogue.by_id(id), None);
    }

    #[rstest]
    fn featured_and_popular_are_flagged_subsets(catalogue: InMemoryProductCatalogue) {
        let all = catalogue.all();
        let featured = catalogue.featured();
        let popular = catalogue.popular();

        assert_eq!(featured.len(), 4);
        assert_eq!(popular.len(), 3);
        assert!(featured.iter().all(|p| p.is_featured() && all.contains(p)));
        assert!(popular.iter().all(|p| p.is_popular() && all.contains(p)));
    }

    #[rstest]
    #[case("Loader", &["NFA Account Loader"])]
    #[case("External Tool", &["Rust Arcane External", "Rust Pro External", "BO6 Engine"])]
    #[case("Nonexistent", &[])]
    #[case("loader", &[])]
    fn category_filter_is_exact(
        catalogue: InMemoryProductCatalogue,
        #[case] label: &str,
        #[case] expected: &[&str],
    ) {
        let names: Vec<String> = catalogue
            .by_category(label)
            .iter()
            .map(|p| p.name().to_owned())
            .collect();

        assert_eq!(names, expected);
    }

    #[rstest]
    fn empty_search_returns_everything(catalogue: InMemoryProductCatalogue) {
        assert_eq!(catalogue.search(""), catalogue.all());
    }

    #[rstest]
    #[case::name("RUST", 2)]
    #[case::description("anticheat", 1)]
    #[case::category("external tool", 3)]
    #[case::none("zzz", 0)]
    fn search_is_case_insensitive(
        catalogue: InMemoryProductCatalogue,
        #[case] query: &str,
        #[case] hits: usize,
    ) {
        assert_eq!(catalogue.search(query).len(), hits);
    }

    #[rstest]
    fn invalid_draft_fails_construction() {
        let mut drafts = seed_drafts();
        if let Some(first) = drafts.first_mut() {
            first.category = "Toy".to_owned();
        }

        assert!(InMemoryProductCatalogue::from_drafts(drafts).is_err());
    }
}
