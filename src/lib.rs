pub mod course;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod output;
pub mod query;
pub mod table;

use error::TeeTimeError;
use fetch::FetchOptions;
use model::TeeTimeRecord;
use query::SlotQuery;

pub async fn search_slot(
    client: &reqwest::Client,
    slot: &SlotQuery,
    options: &FetchOptions,
) -> Result<Vec<TeeTimeRecord>, TeeTimeError> {
    let response = fetch::fetch_tee_times(client, slot, options).await?;
    format::format_tee_times(&response, slot)
}
