//! Configuration options for classification and extraction.
//!
//! The `Options` struct exposes every detector threshold as a named,
//! documented field so the heuristics are tunable and testable in isolation.
//! Defaults mirror the behavior of the original auto-detection heuristics.

/// Prioritized selector lists for field roles.
///
/// Card, product, and article strategies resolve each field by trying the
/// role's selectors in order within a container; the first match wins and
/// absence leaves the field unset. The order is a policy choice, so it is
/// configurable rather than hard-coded.
#[derive(Debug, Clone)]
pub struct FieldRoles {
    /// Title role: headings first, then title-classed elements.
    pub title: Vec<String>,

    /// Description role: description/excerpt/summary-classed elements.
    pub description: Vec<String>,

    /// Price role: price-classed elements. When none match, the product
    /// strategy additionally scans container text for a currency token.
    pub price: Vec<String>,

    /// Rating role: rating/stars-classed elements.
    pub rating: Vec<String>,

    /// Author role, used by the article strategy.
    pub author: Vec<String>,

    /// Date role, used by the article strategy.
    pub date: Vec<String>,
}

impl Default for FieldRoles {
    fn default() -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| (*s).to_string()).collect();
        Self {
            title: owned(&[
                "h1, h2, h3, h4, h5, h6",
                "[class*='title'], [class*='heading'], [class*='name']",
            ]),
            description: owned(&["[class*='description'], [class*='excerpt'], [class*='summary']"]),
            price: owned(&[".price", "[class*='price']"]),
            rating: owned(&["[class*='rating'], [class*='stars']"]),
            author: owned(&["[rel='author']", ".author, .byline, [class*='author'], [class*='byline']"]),
            date: owned(&["time, [datetime]", ".date, [class*='date'], [class*='published']"]),
        }
    }
}

/// Configuration options for classification and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_gleaner::Options;
///
/// let options = Options {
///     max_pages: 10,
///     min_confidence: 0.4,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum top confidence required to accept a classification.
    ///
    /// Below this the engine falls back to Generic regardless of ranking.
    /// Must exceed the fixed Generic confidence (0.1) to be meaningful.
    ///
    /// Default: `0.3`
    pub min_confidence: f64,

    /// Minimum data rows (beyond the header) for a table to qualify.
    ///
    /// Single-row tables are overwhelmingly layout scaffolding.
    ///
    /// Default: `2`
    pub min_table_rows: usize,

    /// Minimum direct `<li>` children for a list to qualify.
    ///
    /// Shorter lists are usually navigation.
    ///
    /// Default: `3`
    pub min_list_items: usize,

    /// Minimum repeated siblings sharing a class token for a card grid.
    ///
    /// Default: `3`
    pub min_card_siblings: usize,

    /// Minimum repeated price-bearing containers for a product listing.
    ///
    /// Default: `3`
    pub min_product_containers: usize,

    /// Minimum text length (chars) of the dominant block for article pages.
    ///
    /// Default: `400`
    pub min_article_text_len: usize,

    /// Minimum paragraph length (chars) for the generic strategy to emit a
    /// paragraph record.
    ///
    /// Default: `80`
    pub min_paragraph_len: usize,

    /// Page-count ceiling for the pagination walk.
    ///
    /// Hard bound on fetched documents; prevents unbounded crawling. An
    /// operator config `max_pages` overrides this per run.
    ///
    /// Default: `5`
    pub max_pages: usize,

    /// Continue paginating while a next-page locator resolves, even when a
    /// page contributed zero records.
    ///
    /// Default: `false`
    pub continue_on_empty: bool,

    /// Source URL of the document, used as the base for resolving relative
    /// hrefs and image sources when the page has no `<base href>`.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Prioritized selectors per field role.
    pub roles: FieldRoles,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
            min_table_rows: 2,
            min_list_items: 3,
            min_card_siblings: 3,
            min_product_containers: 3,
            min_article_text_len: 400,
            min_paragraph_len: 80,
            max_pages: 5,
            continue_on_empty: false,
            url: None,
            roles: FieldRoles::default(),
        }
    }
}
