use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{self, TeeTimeError};
use crate::model::AvailabilityResponse;
use crate::query::SlotQuery;

pub const API_URL: &str = "https://api.bookgolfquintadolago.com/api/v1/golf/availability/";

const USER_AGENT: &str = concat!("qdl/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub api_url: String,
    pub timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            timeout: 30,
        }
    }
}

pub fn build_client(options: &FetchOptions) -> Result<Client, TeeTimeError> {
    Client::builder()
        .timeout(Duration::from_secs(options.timeout))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| TeeTimeError::ClientBuild(e.to_string()))
}

pub async fn fetch_tee_times(
    client: &Client,
    slot: &SlotQuery,
    options: &FetchOptions,
) -> Result<AvailabilityResponse, TeeTimeError> {
    debug!("fetching tee times for {}", slot);

    let response = client
        .get(&options.api_url)
        .query(&slot.query_params())
        .send()
        .await
        .map_err(|e| error::from_http_error(e, slot))?;

    let status = response.status().as_u16();
    match status {
        200 => {}
        429 => return Err(TeeTimeError::RateLimited { slot: slot.clone() }),
        _ if status >= 400 => {
            return Err(TeeTimeError::HttpStatus {
                slot: slot.clone(),
                status,
            });
        }
        _ => {}
    }

    response
        .json::<AvailabilityResponse>()
        .await
        .map_err(|e| error::from_http_error(e, slot))
}
