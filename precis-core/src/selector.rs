//! Top-K selection and order-preserving reassembly

use std::cmp::Reverse;

use crate::scorer::ScoredSentence;

/// Keep the `k` highest-scoring sentences, returned in source order.
///
/// Ties are broken by the earlier sentence.
pub fn select_top(mut scored: Vec<ScoredSentence>, k: usize) -> Vec<ScoredSentence> {
    scored.sort_by_key(|s| (Reverse(s.score), s.index));
    scored.truncate(k);
    scored.sort_by_key(|s| s.index);
    scored
}

/// Join selected sentences with ". " and close with a period
pub fn reassemble(selected: &[ScoredSentence]) -> String {
    let mut summary = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    summary.push('.');
    summary
}
