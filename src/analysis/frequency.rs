// Frequency counting with stable ranking.

use std::collections::HashMap;
use std::hash::Hash;

/// How many tokens the subject pass reports.
pub const TOP_TOKENS: usize = 20;

/// Count items and return the `n` most frequent as (item, count).
///
/// Ranked by count descending; equal counts keep first-seen order.
pub fn most_common<T, I>(items: I, n: usize) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    // item -> (first position, count)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (position, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(item, (first, count))| (item, first, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(item, _, count)| (item, count))
        .collect()
}
