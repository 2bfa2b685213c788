pub mod catalog;
pub mod create_list;
pub mod dispatch;
pub mod edit_list;
pub mod look_at_lists;
pub mod remove_list;
pub mod retrieve_docs;

use create_list::CreateListParams;
use edit_list::EditListParams;
use look_at_lists::LookAtListsParams;
use remove_list::RemoveListParams;
use retrieve_docs::RetrieveDocsParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use serde::Serialize;

use crate::error::CatalogError;
use crate::session::SYSTEM_INSTRUCTION;

pub use dispatch::ToolDispatcher;

/// The Encore MCP tool handler. Wraps a [`ToolDispatcher`] and exposes its
/// operations via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct EncoreTools {
    tool_router: ToolRouter<Self>,
    dispatcher: ToolDispatcher,
}

fn to_json(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("serialization failed: {e}"))
}

#[tool_router]
impl EncoreTools {
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            tool_router: Self::tool_router(),
            dispatcher,
        }
    }

    /// Compare the hand-written catalog with the schemas the router serves.
    pub fn check_catalog(&self) -> Result<(), CatalogError> {
        let tools = self.tool_router.list_all();
        catalog::validate(
            tools
                .iter()
                .map(|tool| (&*tool.name, &*tool.input_schema)),
        )
    }

    #[tool(description = "Search the music knowledge base (songs, artists, moods, listening history, YouTube links) and return pre-formatted documents.")]
    async fn retrieve_docs(
        &self,
        Parameters(params): Parameters<RetrieveDocsParams>,
    ) -> Result<String, String> {
        tracing::info!(query = %params.query, "retrieve_docs called");
        let result = self
            .dispatcher
            .retrieve_docs(params)
            .await
            .map_err(|e| e.to_string())?;
        to_json(&result)
    }

    #[tool(description = "Create a new playlist. Fails if the id is already taken.")]
    async fn create_list(
        &self,
        Parameters(params): Parameters<CreateListParams>,
    ) -> Result<String, String> {
        tracing::info!(
            list_id = %params.list_id,
            heading = %params.heading,
            songs = params.list_array.len(),
            "create_list called"
        );
        let ack = self
            .dispatcher
            .create_list(params)
            .map_err(|e| e.to_string())?;
        to_json(&ack)
    }

    #[tool(description = "Replace the heading and songs of an existing playlist. Fails if the id does not exist.")]
    async fn edit_list(
        &self,
        Parameters(params): Parameters<EditListParams>,
    ) -> Result<String, String> {
        tracing::info!(
            list_id = %params.list_id,
            songs = params.list_array.len(),
            "edit_list called"
        );
        let ack = self
            .dispatcher
            .edit_list(params)
            .map_err(|e| e.to_string())?;
        to_json(&ack)
    }

    #[tool(description = "Delete a playlist. Fails if the id does not exist.")]
    async fn remove_list(
        &self,
        Parameters(params): Parameters<RemoveListParams>,
    ) -> Result<String, String> {
        tracing::info!(list_id = %params.list_id, "remove_list called");
        let ack = self
            .dispatcher
            .remove_list(params)
            .map_err(|e| e.to_string())?;
        to_json(&ack)
    }

    #[tool(description = "Return every current playlist keyed by id, with heading and list_array.")]
    async fn look_at_lists(
        &self,
        Parameters(params): Parameters<LookAtListsParams>,
    ) -> Result<String, String> {
        let lists = self.dispatcher.look_at_lists(params);
        tracing::info!(count = lists.len(), "look_at_lists called");
        to_json(&lists)
    }
}

#[tool_handler]
impl ServerHandler for EncoreTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(SYSTEM_INSTRUCTION.into()),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
