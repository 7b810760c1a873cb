//! Field Normalizer.
//!
//! Cleans raw field values in place: whitespace collapse for text, base-URL
//! resolution for URL-role fields. The base URL is threaded explicitly from
//! the pipeline; there is no ambient state. Values that look like prices or
//! numbers are kept verbatim: consistency across a batch matters more than
//! typed output, so the engine never silently coerces types.
//!
//! Every rule is a fixed point: normalizing an already-normalized batch is
//! a no-op.

use url::Url;

use crate::patterns::WHITESPACE_RUN;
use crate::record::{FieldValue, Record};

/// Field names whose values are URLs and get resolved against the base.
/// Matching is by exact name so text fields that merely mention a URL stay
/// untouched.
const URL_FIELDS: &[&str] = &["link", "url", "href", "image", "src", "images"];

/// Schemes that must never be rewritten against a base URL.
const OPAQUE_SCHEMES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// Normalize every record of a batch in place.
pub(crate) fn normalize_records(records: &mut [Record], base: Option<&Url>) {
    for record in records.iter_mut() {
        for (name, value) in record.iter_mut() {
            let is_url = URL_FIELDS.contains(&name);
            match value {
                FieldValue::Text(text) => {
                    *text = collapse_whitespace(text);
                    if is_url {
                        if let Some(base) = base {
                            *text = absolutize(text, base);
                        }
                    }
                }
                FieldValue::List(items) => {
                    for item in items.iter_mut() {
                        *item = collapse_whitespace(item);
                        if is_url {
                            if let Some(base) = base {
                                *item = absolutize(item, base);
                            }
                        }
                    }
                }
                FieldValue::Number(_) => {}
            }
        }
    }
}

/// Trim and collapse internal whitespace runs to single spaces.
#[must_use]
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Resolve a possibly-relative URL against the base.
///
/// Already-absolute http(s) URLs and opaque schemes pass through unchanged,
/// which is what makes the rule idempotent; unresolvable inputs are
/// returned as-is rather than dropped.
#[must_use]
pub(crate) fn absolutize(href: &str, base: &Url) -> String {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with("http://")
        || href.starts_with("https://")
        || OPAQUE_SCHEMES.iter().any(|scheme| href.starts_with(scheme))
    {
        return href.to_string();
    }
    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/catalog/page1").unwrap()
    }

    fn record(fields: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (name, value) in fields {
            record.push(*name, *value);
        }
        record
    }

    #[test]
    fn collapses_whitespace_in_text_fields() {
        let mut records = vec![record(&[("title", "  spaced \n out\ttext  ")])];
        normalize_records(&mut records, None);

        assert_eq!(records[0].get("title").unwrap().as_text(), Some("spaced out text"));
    }

    #[test]
    fn resolves_url_fields_against_base() {
        let mut records = vec![record(&[
            ("link", "/items/42"),
            ("image", "thumb.png"),
            ("title", "not/a/url/field"),
        ])];
        normalize_records(&mut records, Some(&base()));

        assert_eq!(
            records[0].get("link").unwrap().as_text(),
            Some("https://example.com/items/42")
        );
        assert_eq!(
            records[0].get("image").unwrap().as_text(),
            Some("https://example.com/catalog/thumb.png")
        );
        assert_eq!(records[0].get("title").unwrap().as_text(), Some("not/a/url/field"));
    }

    #[test]
    fn resolves_list_values() {
        let mut records = vec![Record::new()];
        records[0].push(
            "images",
            FieldValue::List(vec!["/a.png".to_string(), "https://cdn.example.com/b.png".to_string()]),
        );
        normalize_records(&mut records, Some(&base()));

        assert_eq!(
            records[0].get("images").unwrap().as_list(),
            Some(
                &[
                    "https://example.com/a.png".to_string(),
                    "https://cdn.example.com/b.png".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn opaque_schemes_pass_through() {
        assert_eq!(absolutize("mailto:jo@example.com", &base()), "mailto:jo@example.com");
        assert_eq!(absolutize("data:image/png;base64,AAAA", &base()), "data:image/png;base64,AAAA");
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut records = vec![record(&[
            ("text", "  messy   text "),
            ("link", "next/page"),
            ("price", "$ 1,299.00"),
        ])];
        normalize_records(&mut records, Some(&base()));
        let once = records.clone();
        normalize_records(&mut records, Some(&base()));

        assert_eq!(records, once);
    }

    #[test]
    fn price_like_values_are_kept_verbatim() {
        let mut records = vec![record(&[("price", "$19.99")])];
        normalize_records(&mut records, Some(&base()));

        assert_eq!(records[0].get("price").unwrap().as_text(), Some("$19.99"));
    }
}
