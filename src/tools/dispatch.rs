//! Name-to-operation dispatch over the registry and retriever.
//!
//! [`ToolDispatcher`] is transport-agnostic: the MCP handler calls its typed
//! methods, and [`ToolDispatcher::call`] serves clients that only have a tool
//! name and a JSON argument object. Errors are propagated unchanged.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::create_list::CreateListParams;
use super::edit_list::EditListParams;
use super::look_at_lists::LookAtListsParams;
use super::remove_list::RemoveListParams;
use super::retrieve_docs::{RetrieveDocsOutput, RetrieveDocsParams};
use crate::error::ToolError;
use crate::playlist::{PlaylistRegistry, PlaylistSnapshot};
use crate::retrieval::{format_docs, DocumentRetriever};

/// Acknowledgement returned by the mutating playlist tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListAck {
    pub status: &'static str,
    pub list_id: String,
}

#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<PlaylistRegistry>,
    retriever: Arc<dyn DocumentRetriever>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<PlaylistRegistry>, retriever: Arc<dyn DocumentRetriever>) -> Self {
        Self {
            registry,
            retriever,
        }
    }

    pub fn registry(&self) -> &Arc<PlaylistRegistry> {
        &self.registry
    }

    pub async fn retrieve_docs(
        &self,
        params: RetrieveDocsParams,
    ) -> Result<RetrieveDocsOutput, ToolError> {
        let passages = self.retriever.search(&params.query).await?;
        tracing::debug!(query = %params.query, passages = passages.len(), "documents retrieved");
        Ok(RetrieveDocsOutput {
            output: format_docs(&passages),
        })
    }

    pub fn create_list(&self, params: CreateListParams) -> Result<ListAck, ToolError> {
        self.registry
            .create(&params.list_id, &params.heading, params.list_array)?;
        Ok(ListAck {
            status: "created",
            list_id: params.list_id,
        })
    }

    pub fn edit_list(&self, params: EditListParams) -> Result<ListAck, ToolError> {
        self.registry
            .edit(&params.list_id, &params.heading, params.list_array)?;
        Ok(ListAck {
            status: "updated",
            list_id: params.list_id,
        })
    }

    pub fn remove_list(&self, params: RemoveListParams) -> Result<ListAck, ToolError> {
        self.registry.remove(&params.list_id)?;
        Ok(ListAck {
            status: "removed",
            list_id: params.list_id,
        })
    }

    pub fn look_at_lists(&self, _params: LookAtListsParams) -> PlaylistSnapshot {
        self.registry.list_all()
    }

    /// Run the tool called `name` with a JSON argument object.
    ///
    /// `null` arguments are treated as `{}`.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        tracing::info!(tool = %name, "tool call");
        match name {
            "retrieve_docs" => to_value(self.retrieve_docs(parse(arguments)?).await?),
            "create_list" => to_value(self.create_list(parse(arguments)?)?),
            "edit_list" => to_value(self.edit_list(parse(arguments)?)?),
            "remove_list" => to_value(self.remove_list(parse(arguments)?)?),
            "look_at_lists" => to_value(self.look_at_lists(parse(arguments)?)),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn parse<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn to_value(result: impl Serialize) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(result)?)
}
