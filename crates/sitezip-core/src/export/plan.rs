//! Dry run: what an export would write, without touching the filesystem.

use std::collections::HashSet;

use crate::exchange::Exchange;
use crate::site_path::{resolve, BaseContext, RelativePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// A file entry would be written.
    Write,
    /// An earlier exchange already claimed the same path.
    Duplicate,
    /// No response was captured; the exchange is ignored.
    NoResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub url: String,
    /// `None` for exchanges without a response.
    pub path: Option<RelativePath>,
    pub action: PlanAction,
}

/// Resolves every exchange in processing order and marks what would happen to it.
pub fn plan(base: &BaseContext, exchanges: &[Exchange]) -> Vec<PlannedEntry> {
    let mut seen: HashSet<RelativePath> = HashSet::new();
    exchanges
        .iter()
        .map(|ex| {
            if !ex.has_response() {
                return PlannedEntry {
                    url: ex.request_url.clone(),
                    path: None,
                    action: PlanAction::NoResponse,
                };
            }
            let path = resolve(base, &ex.request_url, &ex.response_headers);
            let action = if seen.insert(path.clone()) {
                PlanAction::Write
            } else {
                PlanAction::Duplicate
            };
            PlannedEntry {
                url: ex.request_url.clone(),
                path: Some(path),
                action,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Header;

    #[test]
    fn marks_duplicates_and_missing_responses() {
        let base = BaseContext::new("https://example.com/app/", None);
        let html = vec![Header::new("Content-Type", "text/html")];
        let exchanges = vec![
            Exchange::with_response("https://example.com/app/page?x=1", html.clone(), "1"),
            Exchange::with_response("https://example.com/app/page?x=2", html, "2"),
            Exchange::without_response("https://example.com/app/lost"),
        ];
        let entries = plan(&base, &exchanges);
        let actions: Vec<PlanAction> = entries.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            [PlanAction::Write, PlanAction::Duplicate, PlanAction::NoResponse]
        );
        assert_eq!(entries[0].path.as_ref().unwrap().as_str(), "app/page.html");
        assert_eq!(entries[1].path, entries[0].path);
        assert!(entries[2].path.is_none());
    }
}
