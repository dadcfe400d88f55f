//! Lookup helpers shared by every view.

use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::models::EnrichedCoaster;

/// Ellipsis appended to shortened names.
pub const ELLIPSIS: char = '…';

/// Shorten `name` to at most `max_len` characters.
///
/// Longer names keep their first `max_len - 1` characters followed by a
/// single ellipsis, so the result is exactly `max_len` characters. Length is
/// counted in characters, not bytes.
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let mut short: String = name.chars().take(max_len.saturating_sub(1)).collect();
    short.push(ELLIPSIS);
    short
}

/// Exact-name lookup from the enriched set back to a full entity.
pub fn find_coaster_by_name<'a>(
    coasters: &'a [EnrichedCoaster],
    name: &str,
) -> Option<&'a EnrichedCoaster> {
    coasters.iter().find(|c| c.name() == name)
}

/// Like [`find_coaster_by_name`], but a miss is a `NotFound` error.
pub fn require_coaster_by_name<'a>(
    coasters: &'a [EnrichedCoaster],
    name: &str,
) -> DashboardResult<&'a EnrichedCoaster> {
    find_coaster_by_name(coasters, name).ok_or_else(|| {
        DashboardError::not_found_with_context(
            format!("No coaster named '{}'", name),
            ErrorContext::new("find_coaster")
                .with_entity("coaster")
                .with_entity_id(name),
        )
    })
}
