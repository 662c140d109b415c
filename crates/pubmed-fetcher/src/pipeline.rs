//! The fetch pipeline: search → fetch summaries → build records → write CSV.

use std::path::Path;

use serde_json::Map;

use crate::client::EntrezClient;
use crate::report;

/// Run one fetch end to end.
///
/// Remote and sink failures degrade the output (fewer or no rows) and are
/// logged with their cause; they never propagate to the caller.
pub async fn run(client: &EntrezClient, query: &str, output: &Path) {
    let ids = match client.search_ids(query).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, "error fetching paper ids");
            Vec::new()
        }
    };
    tracing::debug!(count = ids.len(), "retrieved paper ids");

    let result = match client.fetch_summaries(&ids).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "error fetching paper details");
            Map::new()
        }
    };

    let records = report::build_records(&result);

    match report::write_csv(output, &records) {
        Ok(()) => {
            tracing::info!(rows = records.len(), path = %output.display(), "results saved");
        }
        Err(e) => tracing::error!(error = %e, "error saving results"),
    }
}
