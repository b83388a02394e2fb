//! Approximate matching of free text against catalog keys.
//!
//! Similarity is a weighted ratio built on normalized Levenshtein distance: the
//! plain ratio, a sliding-window partial ratio when one side is much longer
//! (so "tell me about data science" still finds "data science"), and token
//! sort / token set ratios for reordered words.

use crate::utils::error::{AdvisorError, Result};
use serde::Serialize;
use std::collections::BTreeSet;

pub const CONFIDENCE_THRESHOLD: u8 = 70;

const TOKEN_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub key: String,
    pub confidence: u8,
}

/// Resolves `query` to the best-scoring key.
///
/// Keys are visited in iteration order and only a strictly better score replaces
/// the current best, so ties go to the earliest key.
pub fn resolve<I, K>(query: &str, keys: I) -> Result<Resolution>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let query_lower = query.trim().to_lowercase();
    let mut best: Option<Resolution> = None;

    for key in keys {
        let key = key.as_ref();
        let confidence = similarity(&query_lower, &key.to_lowercase());
        tracing::debug!("Similarity '{}' vs '{}': {}", query_lower, key, confidence);

        let improves = best
            .as_ref()
            .map_or(true, |current| confidence > current.confidence);
        if improves {
            best = Some(Resolution {
                key: key.to_string(),
                confidence,
            });
        }
    }

    match best {
        Some(resolution) if resolution.confidence >= CONFIDENCE_THRESHOLD => {
            tracing::debug!(
                "Resolved '{}' to '{}' ({}%)",
                query_lower,
                resolution.key,
                resolution.confidence
            );
            Ok(resolution)
        }
        other => Err(AdvisorError::NotFound {
            query: query.to_string(),
            best_confidence: other.map(|resolution| resolution.confidence).unwrap_or(0),
        }),
    }
}

/// Weighted similarity of two strings in `0..=100`.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = a.trim();
    let b = b.trim();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let length_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);
    let best = if length_ratio < 1.5 {
        base.max(token_sort_ratio(a, b) * TOKEN_SCALE)
            .max(token_set_ratio(a, b) * TOKEN_SCALE)
    } else {
        let scale = if length_ratio < 8.0 {
            PARTIAL_SCALE
        } else {
            LONG_PARTIAL_SCALE
        };
        let partial_tokens = partial_ratio(&sorted_tokens(a), &sorted_tokens(b));
        base.max(partial_ratio(a, b) * scale)
            .max(partial_tokens * TOKEN_SCALE * scale)
    };

    (best * 100.0).round().clamp(0.0, 100.0) as u8
}

fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

/// Best ratio of the shorter string against every same-length window of the longer one.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let window: String = window.iter().collect();
        best = best.max(ratio(short, &window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // one side's tokens are a subset of the other's
    if !common.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 1.0;
    }

    let joined_common = common.join(" ");
    let combined_a = common.iter().chain(only_a.iter()).copied().collect::<Vec<_>>().join(" ");
    let combined_b = common.iter().chain(only_b.iter()).copied().collect::<Vec<_>>().join(" ");

    ratio(&joined_common, &combined_a)
        .max(ratio(&joined_common, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}
