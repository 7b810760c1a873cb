//! Card-grid strategy: one record per card in the winning sibling group.
//!
//! Group discovery is shared with the card detector so the group that won
//! classification is exactly the group that gets extracted.

use std::collections::BTreeMap;

use crate::classify::{
    modal_share, repetition_factor, CARD_TOKEN_BONUS, REGULARITY_WEIGHT, WEAK_BASE_SCORE,
    WEAK_REPETITION_WEIGHT,
};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::CARD_CLASS;
use crate::record::Record;

/// A run of sibling elements sharing one class token.
pub(crate) struct CardGroup<'a> {
    pub token: String,
    pub members: Vec<Selection<'a>>,
}

/// Selector used to probe each member for a heading-like element.
const HEADING_PROBE: &str = "h1, h2, h3, h4, h5, h6, [class*='title']";

/// Find the highest-scoring sibling group, with its confidence.
///
/// Scans every parent's direct children, groups them by shared class token,
/// and scores each group by shape consistency (image/heading profile),
/// repetition, and a bonus for conventional card naming. Deterministic:
/// parents in document order, tokens in lexicographic order, strict
/// greater-than to keep the first best.
pub(crate) fn best_group<'a>(doc: &'a Document, options: &Options) -> Option<(CardGroup<'a>, f64)> {
    let mut best: Option<(CardGroup<'a>, f64)> = None;

    for parent in dom::elements(&dom::query_all(doc, "body, body *")) {
        let children = dom::child_elements(&parent);
        if children.len() < options.min_card_siblings {
            continue;
        }

        let mut groups: BTreeMap<String, Vec<Selection<'a>>> = BTreeMap::new();
        for child in &children {
            for token in dom::class_tokens(child) {
                groups.entry(token).or_default().push(child.clone());
            }
        }

        for (token, members) in groups {
            if members.len() < options.min_card_siblings {
                continue;
            }

            // Shape profile: which of image/heading each member carries.
            let profiles: Vec<(bool, bool)> = members
                .iter()
                .map(|card| {
                    (
                        dom::select_first(card, "img").is_some(),
                        dom::select_first(card, HEADING_PROBE).is_some(),
                    )
                })
                .collect();
            // Without a single image or heading anywhere, the repetition is
            // probably layout scaffolding, not cards.
            if !profiles.iter().any(|(img, heading)| *img || *heading) {
                continue;
            }

            let consistency = modal_share(&profiles);
            let token_bonus = if CARD_CLASS.is_match(&token) { CARD_TOKEN_BONUS } else { 0.0 };
            let confidence = (WEAK_BASE_SCORE
                + REGULARITY_WEIGHT * consistency
                + WEAK_REPETITION_WEIGHT * repetition_factor(members.len())
                + token_bonus)
                .min(1.0);

            if best.as_ref().is_none_or(|(_, score)| confidence > *score) {
                best = Some((CardGroup { token, members }, confidence));
            }
        }
    }
    best
}

pub(crate) fn extract(doc: &Document, options: &Options) -> Vec<Record> {
    let Some((group, _)) = best_group(doc, options) else {
        return Vec::new();
    };

    let roles = &options.roles;
    group
        .members
        .iter()
        .map(|card| {
            let mut record = Record::new();
            record.push_opt("title", super::role_text(card, &roles.title));
            record.push_opt("description", super::role_text(card, &roles.description));
            record.push_opt("link", super::first_link(card));
            record.push_opt("image", super::first_image(card));
            if record.is_empty() {
                // Keep the card addressable even when no role resolved.
                let text = dom::text(card).trim().to_string();
                record.push_opt("text", (!text.is_empty()).then_some(text));
            }
            record
        })
        .filter(|record| !record.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = r#"
        <div class="grid">
            <div class="card"><img src="/a.png"><h3>Alpha</h3><p class="description">First</p><a href="/a">go</a></div>
            <div class="card"><img src="/b.png"><h3>Beta</h3><p class="description">Second</p><a href="/b">go</a></div>
            <div class="card"><img src="/c.png"><h3>Gamma</h3><p class="description">Third</p><a href="/c">go</a></div>
        </div>"#;

    #[test]
    fn extracts_one_record_per_card() {
        let doc = dom::parse(GRID);
        let records = extract(&doc, &Options::default());

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("title").unwrap().as_text(), Some("Alpha"));
        assert_eq!(records[1].get("description").unwrap().as_text(), Some("Second"));
        assert_eq!(records[2].get("link").unwrap().as_text(), Some("/c"));
        assert_eq!(records[0].get("image").unwrap().as_text(), Some("/a.png"));
    }

    #[test]
    fn picks_the_larger_consistent_group() {
        let doc = dom::parse(
            r#"<div>
                <div class="card"><h3>A</h3></div>
                <div class="card"><h3>B</h3></div>
                <div class="card"><h3>C</h3></div>
                <div class="card"><h3>D</h3></div>
            </div>
            <div>
                <div class="blurb"><h4>x</h4></div>
                <div class="blurb"><h4>y</h4></div>
                <div class="blurb"><h4>z</h4></div>
            </div>"#,
        );
        let (group, _) = best_group(&doc, &Options::default()).unwrap();

        assert_eq!(group.token, "card");
        assert_eq!(group.members.len(), 4);
    }

    #[test]
    fn absent_roles_are_omitted_not_empty() {
        let doc = dom::parse(
            r#"<div>
                <div class="tile"><h3>Only title</h3></div>
                <div class="tile"><h3>Another</h3></div>
                <div class="tile"><h3>Third</h3></div>
            </div>"#,
        );
        let records = extract(&doc, &Options::default());

        assert_eq!(records.len(), 3);
        assert!(records[0].get("description").is_none());
        assert!(records[0].get("image").is_none());
    }
}
