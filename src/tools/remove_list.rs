use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveListParams {
    #[schemars(description = "Id of the playlist to delete")]
    pub list_id: String,
}
