//! DTOs for the click statistics endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Click count for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub clicks: i64,
}

/// Click counts for every tracked short code.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub clicks: HashMap<String, i64>,
}

/// Request to reset the counters of the given short codes.
#[derive(Debug, Deserialize)]
pub struct StatsResetRequest {
    pub short_codes: Vec<String>,
}
