use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "New playlist id, e.g. 'favorite-songs'. Must not already exist.")]
    pub list_id: String,

    #[schemars(description = "Playlist title with emoji, e.g. '🎬 My Favorite Songs'")]
    pub heading: String,

    #[schemars(
        description = "Songs in order, each as a markdown link, e.g. '🔗 [Song Title](https://www.youtube.com/watch?v=VIDEO_ID)'"
    )]
    pub list_array: Vec<String>,
}
