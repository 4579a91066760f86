//! Match selection ahead of segmentation.

use crate::models::{MatchFilter, MatchRecord};

/// Matches accepted by the filter, in input order.
pub fn filter_matches<'a>(
    matches: &'a [MatchRecord],
    filter: &MatchFilter,
) -> Vec<&'a MatchRecord> {
    if filter.is_empty() {
        return matches.iter().collect();
    }
    let selected: Vec<_> = matches.iter().filter(|m| filter.accepts(m)).collect();
    log::debug!("Filter kept {} of {} matches", selected.len(), matches.len());
    selected
}
