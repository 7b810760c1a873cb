//! Product strategy: repeated price-bearing containers.
//!
//! The price role is resolved by priority search (`.price`, then any
//! price-classed element, then a currency token anywhere in the container
//! text); name, rating, link, and image follow the same first-match-wins
//! policy.

use crate::dom::{self, Document, Selection};
use crate::normalize::collapse_whitespace;
use crate::options::Options;
use crate::patterns::{PRICE_TOKEN, PRODUCT_CLASS};
use crate::record::Record;

/// Class-convention probe for product containers.
const CONTAINER_SELECTOR: &str =
    "[class*='product'], [class*='item'], [class*='listing'], [class*='offer']";

/// Survey of the page's product-like containers, shared with the product
/// detector.
pub(crate) struct ProductScan<'a> {
    /// Every container whose class carries a product-convention token.
    pub containers: Vec<Selection<'a>>,
    /// How many containers hold a price-like token.
    pub priced: usize,
    /// How many hold both a price and a title-like element.
    pub qualified: usize,
}

pub(crate) fn scan<'a>(doc: &'a Document, options: &Options) -> ProductScan<'a> {
    let containers: Vec<Selection> = dom::elements(&dom::query_all(doc, CONTAINER_SELECTOR))
        .into_iter()
        .filter(|el| dom::attr(el, "class").is_some_and(|class| PRODUCT_CLASS.is_match(&class)))
        .collect();

    let priced = containers
        .iter()
        .filter(|el| PRICE_TOKEN.is_match(&dom::text(el)))
        .count();
    let qualified = containers
        .iter()
        .filter(|el| {
            PRICE_TOKEN.is_match(&dom::text(el))
                && super::find_role(el, &options.roles.title).is_some()
        })
        .count();

    ProductScan { containers, priced, qualified }
}

pub(crate) fn extract(doc: &Document, options: &Options) -> Vec<Record> {
    let roles = &options.roles;
    scan(doc, options)
        .containers
        .iter()
        .map(|container| {
            let mut record = Record::new();
            record.push_opt("name", super::role_text(container, &roles.title));
            record.push_opt("price", price_text(container, options));
            record.push_opt("rating", super::role_text(container, &roles.rating));
            record.push_opt("link", super::first_link(container));
            record.push_opt("image", super::first_image(container));
            record
        })
        // Containers matching the class convention but carrying neither a
        // name nor a price are chrome, not products.
        .filter(|record| record.get("name").is_some() || record.get("price").is_some())
        .collect()
}

/// Price by priority search: price-role selectors first, then the first
/// currency token in the container text.
fn price_text(container: &Selection, options: &Options) -> Option<String> {
    super::role_text(container, &options.roles.price).or_else(|| {
        let text = dom::text(container);
        PRICE_TOKEN
            .find(&collapse_whitespace(&text))
            .map(|m| m.as_str().to_string())
    })
}
