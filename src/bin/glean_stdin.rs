//! Simple CLI that reads HTML from stdin and outputs extracted records as
//! JSON to stdout. Useful for driving the engine from scripts.

use std::io::{self, Read};

use rs_gleaner::{extract_bytes, Record};
use serde::Serialize;

#[derive(Serialize)]
struct Output {
    category: Option<&'static str>,
    confidence: Option<f64>,
    records: Vec<Record>,
}

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match extract_bytes(&html) {
        Ok(page) => Output {
            category: page.category().map(rs_gleaner::ContentCategory::as_str),
            confidence: page.classification.as_ref().map(|c| c.confidence),
            records: page.records,
        },
        Err(_) => Output { category: None, confidence: None, records: Vec::new() },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
