use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full replacement: heading and songs are both overwritten.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditListParams {
    #[schemars(description = "Id of an existing playlist")]
    pub list_id: String,

    #[schemars(description = "Playlist title; resend the current one to keep it")]
    pub heading: String,

    #[schemars(description = "Complete new song list; replaces the old one entirely")]
    pub list_array: Vec<String>,
}
