//! Author screening: affiliation classification and email extraction.

use regex::Regex;
use serde_json::{Map, Value};

use crate::models::NOT_AVAILABLE;

/// Keywords marking an affiliation as academic. Matched by substring
/// containment on the lower-cased affiliation text, no tokenization.
const ACADEMIC_KEYWORDS: &[&str] =
    &["university", "college", "institute", "school", "academy", "lab", "research center"];

/// Email shape: word-ish local part, domain, 2+ letter TLD.
const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Split an author → affiliation mapping into the non-academic subset.
///
/// Returns two index-aligned lists, preserving input order: author names and
/// their affiliations. An author is non-academic when the affiliation text
/// contains none of the academic keywords; empty or non-string affiliation
/// values therefore also land in the non-academic subset.
#[must_use]
pub fn partition_non_academic(affiliations: &Map<String, Value>) -> (Vec<String>, Vec<String>) {
    let mut authors = Vec::new();
    let mut companies = Vec::new();

    for (author, affiliation) in affiliations {
        let text = affiliation.as_str().unwrap_or_default();
        let lowered = text.to_lowercase();

        if !ACADEMIC_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
            authors.push(author.clone());
            companies.push(text.to_string());
        }
    }

    (authors, companies)
}

/// Extract the first email address from free text.
///
/// Returns the leftmost match, or the `"N/A"` sentinel when the text is
/// absent, empty, or contains no email-shaped substring. Never fails.
#[must_use]
pub fn extract_email(text: Option<&str>) -> String {
    let Some(text) = text else {
        return NOT_AVAILABLE.to_string();
    };

    let pattern = Regex::new(EMAIL_PATTERN).expect("valid email pattern");
    pattern
        .find(text)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.as_str().to_string())
}
