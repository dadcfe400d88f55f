//! View-model types, one file per dashboard view, plus the REST path each
//! view is served under.

pub mod correlation;
pub mod distribution;
pub mod overview;
pub mod rankings;
pub mod records;
pub mod timeline;

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths_are_distinct() {
        let paths = [
            super::overview::GET_SNAPSHOT,
            super::overview::GET_STATS,
            super::overview::LIST_COASTERS,
            super::overview::GET_COASTER,
            super::overview::GET_PARK_LEGEND,
            super::rankings::GET_RANKING,
            super::correlation::GET_SCATTER_DATA,
            super::timeline::GET_TIMELINE_DATA,
            super::distribution::GET_DISTRIBUTION,
            super::distribution::GET_MANUFACTURER_BREAKDOWN,
            super::records::GET_RECORD_CATEGORIES,
        ];
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }
}
