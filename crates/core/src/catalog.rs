//! Catalog query engine: filter and sort an in-memory product list.
//!
//! A pure transformation. The engine never mutates the input catalog and
//! never touches persistence; visibility filtering for the public listing is
//! the caller's responsibility, applied before the criteria.

use rust_decimal::Decimal;

use crate::types::Product;

/// Combined filter and sort specification for a catalog query.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. A product must satisfy all supplied constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCriteria {
    /// Exact match against `Product::category`.
    pub category: Option<String>,
    /// Membership test against `Product::hair_type`.
    pub hair_type: Option<String>,
    /// Membership test against `Product::special`.
    pub special: Option<String>,
    /// Inclusive lower bound on `Product::price`.
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound on `Product::price`.
    pub max_price: Option<Decimal>,
    /// Case-insensitive substring match against name or description.
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

impl QueryCriteria {
    /// Whether `product` satisfies every supplied constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }
        if let Some(hair_type) = &self.hair_type
            && !product.hair_type.iter().any(|h| h == hair_type)
        {
            return false;
        }
        if let Some(special) = &self.special
            && !product.special.iter().any(|s| s == special)
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

/// Sort order for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Descending by creation time.
    Newest,
    /// Descending by rating.
    Rating,
    /// Descending by review count.
    Popularity,
}

impl SortKey {
    /// Parse a sort key from its query-string value.
    ///
    /// Returns `None` for unrecognized values; the caller treats that as
    /// "no reorder", preserving input order.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "newest" => Some(Self::Newest),
            "rating" => Some(Self::Rating),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }
}

/// Apply `criteria` to `products`, returning the matching subset in order.
///
/// Filtering is a logical AND across the supplied dimensions. Sorting uses a
/// stable sort, so products that compare equal keep their input order and
/// repeated calls with identical input produce identical output. Without a
/// sort key the input order is preserved.
#[must_use]
pub fn filter_products(products: &[Product], criteria: &QueryCriteria) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    if let Some(sort) = criteria.sort {
        sort_products(&mut matched, sort);
    }

    matched
}

/// Stable in-place sort by the given key.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::Popularity => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
}
