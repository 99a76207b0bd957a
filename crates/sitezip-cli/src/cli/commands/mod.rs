//! CLI command handlers. Each command is in its own file.

mod export;
mod plan;

pub use export::run_export;
pub use plan::run_plan;

use sitezip_core::har::HarSource;
use sitezip_core::site_path::BaseContext;

/// Base context from the captured request at `base_url`, or from the URL alone
/// when the capture does not contain that exact request.
fn base_context(source: &HarSource, base_url: &str) -> BaseContext {
    match source.find_exchange(base_url) {
        Some(exchange) => BaseContext::from_exchange(exchange),
        None => {
            tracing::debug!("no captured request for {base_url}, deriving root from URL");
            BaseContext::new(base_url, None)
        }
    }
}
