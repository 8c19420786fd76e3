use serde::{Deserialize, Serialize};

/// Query-string parameters accepted by the practice API.
#[derive(Debug, Default, Deserialize)]
pub struct EntryParams {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
