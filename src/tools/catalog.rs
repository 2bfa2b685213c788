//! Hand-written tool declarations.
//!
//! [`TOOL_CATALOG`] is the contract handed to the model-serving client at
//! session start. [`validate`] checks it against the schemas the MCP router
//! actually generates, so the two cannot drift apart unnoticed.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    StringArray,
}

impl ParamType {
    fn json_schema(self) -> Value {
        match self {
            Self::String => json!({"type": "string"}),
            Self::StringArray => json!({"type": "array", "items": {"type": "string"}}),
        }
    }

    fn matches(self, schema: &Value) -> bool {
        let ty = schema.get("type").and_then(Value::as_str);
        match self {
            Self::String => ty == Some("string"),
            Self::StringArray => {
                ty == Some("array")
                    && schema
                        .get("items")
                        .and_then(|items| items.get("type"))
                        .and_then(Value::as_str)
                        == Some("string")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ParamType,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    /// Shape of the success value, for humans.
    pub returns: &'static str,
}

const fn string_param(name: &'static str, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        ty: ParamType::String,
        required: true,
        description,
    }
}

const fn songs_param(description: &'static str) -> ParamSpec {
    ParamSpec {
        name: "list_array",
        ty: ParamType::StringArray,
        required: true,
        description,
    }
}

const HEADING: ParamSpec = string_param(
    "heading",
    "Playlist title with emoji, e.g. '🎬 My Favorite Songs'",
);

// Descriptions must match the `#[schemars(description)]` text on the params
// structs; `validate` compares them.
pub const TOOL_CATALOG: &[ToolSpec] = &[
    ToolSpec {
        name: "retrieve_docs",
        description: "Search the music knowledge base (songs, artists, moods, listening history, YouTube links) and return pre-formatted documents.",
        params: &[string_param(
            "query",
            "Search query about songs, artists, moods, genres, or a user's listening history",
        )],
        returns: "{\"output\": string}",
    },
    ToolSpec {
        name: "create_list",
        description: "Create a new playlist. Fails if the id is already taken.",
        params: &[
            string_param(
                "list_id",
                "New playlist id, e.g. 'favorite-songs'. Must not already exist.",
            ),
            HEADING,
            songs_param(
                "Songs in order, each as a markdown link, e.g. '🔗 [Song Title](https://www.youtube.com/watch?v=VIDEO_ID)'",
            ),
        ],
        returns: "{\"status\": \"created\", \"list_id\": string}",
    },
    ToolSpec {
        name: "edit_list",
        description: "Replace the heading and songs of an existing playlist. Fails if the id does not exist.",
        params: &[
            string_param("list_id", "Id of an existing playlist"),
            string_param(
                "heading",
                "Playlist title; resend the current one to keep it",
            ),
            songs_param("Complete new song list; replaces the old one entirely"),
        ],
        returns: "{\"status\": \"updated\", \"list_id\": string}",
    },
    ToolSpec {
        name: "remove_list",
        description: "Delete a playlist. Fails if the id does not exist.",
        params: &[string_param("list_id", "Id of the playlist to delete")],
        returns: "{\"status\": \"removed\", \"list_id\": string}",
    },
    ToolSpec {
        name: "look_at_lists",
        description: "Return every current playlist keyed by id, with heading and list_array.",
        params: &[],
        returns: "{<list_id>: {\"heading\": string, \"list_array\": [string]}}",
    },
];

pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOL_CATALOG.iter().find(|spec| spec.name == name)
}

impl ToolSpec {
    /// JSON Schema object for this tool's parameters.
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in self.params {
            let mut schema = param.ty.json_schema();
            schema["description"] = Value::from(param.description);
            properties.insert(param.name.to_string(), schema);
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    fn check_schema(&self, schema: &Map<String, Value>) -> Result<(), CatalogError> {
        let mismatch = |detail: String| CatalogError::Schema {
            tool: self.name.to_string(),
            detail,
        };

        let empty = Map::new();
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let declared: BTreeMap<&str, &ParamSpec> =
            self.params.iter().map(|p| (p.name, p)).collect();
        let served: BTreeSet<&str> = properties.keys().map(String::as_str).collect();
        let declared_names: BTreeSet<&str> = declared.keys().copied().collect();
        if served != declared_names {
            return Err(mismatch(format!(
                "parameters {served:?} do not match declared {declared_names:?}"
            )));
        }

        for (name, spec) in &declared {
            let property = &properties[*name];
            if !spec.ty.matches(property) {
                return Err(mismatch(format!("parameter '{name}' is not {:?}", spec.ty)));
            }
            let served_description = property.get("description").and_then(Value::as_str);
            if served_description != Some(spec.description) {
                return Err(mismatch(format!(
                    "parameter '{name}' description {served_description:?} does not match declared {:?}",
                    spec.description
                )));
            }
        }

        let required_served: BTreeSet<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let required_declared: BTreeSet<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if required_served != required_declared {
            return Err(mismatch(format!(
                "required {required_served:?} does not match declared {required_declared:?}"
            )));
        }

        Ok(())
    }
}

/// Check served tools (name + generated input schema) against the catalog.
pub fn validate<'a>(
    served: impl IntoIterator<Item = (&'a str, &'a Map<String, Value>)>,
) -> Result<(), CatalogError> {
    let served: BTreeMap<&str, &Map<String, Value>> = served.into_iter().collect();

    for name in served.keys() {
        if find(name).is_none() {
            return Err(CatalogError::Undeclared(name.to_string()));
        }
    }
    for spec in TOOL_CATALOG {
        let schema = served
            .get(spec.name)
            .ok_or_else(|| CatalogError::NotServed(spec.name.to_string()))?;
        spec.check_schema(schema)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared_schemas() -> Vec<(&'static str, Map<String, Value>)> {
        TOOL_CATALOG
            .iter()
            .map(|spec| {
                let Value::Object(map) = spec.parameters_schema() else {
                    unreachable!()
                };
                (spec.name, map)
            })
            .collect()
    }

    #[test]
    fn catalog_names_are_unique() {
        let names: BTreeSet<&str> = TOOL_CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), TOOL_CATALOG.len());
        assert_eq!(TOOL_CATALOG.len(), 5);
    }

    #[test]
    fn catalog_validates_against_its_own_schemas() {
        let schemas = declared_schemas();
        validate(schemas.iter().map(|(n, s)| (*n, s))).unwrap();
    }

    #[test]
    fn missing_tool_is_reported() {
        let schemas = declared_schemas();
        let err = validate(
            schemas
                .iter()
                .filter(|(n, _)| *n != "remove_list")
                .map(|(n, s)| (*n, s)),
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::NotServed("remove_list".into()));
    }

    #[test]
    fn extra_tool_is_reported() {
        let mut schemas = declared_schemas();
        schemas.push(("play_song", Map::new()));
        let err = validate(schemas.iter().map(|(n, s)| (*n, s))).unwrap_err();
        assert_eq!(err, CatalogError::Undeclared("play_song".into()));
    }

    #[test]
    fn wrong_parameter_type_is_reported() {
        let mut schemas = declared_schemas();
        for (name, schema) in &mut schemas {
            if *name == "create_list" {
                schema["properties"]["list_array"] = json!({"type": "string"});
            }
        }
        let err = validate(schemas.iter().map(|(n, s)| (*n, s))).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { ref tool, .. } if tool == "create_list"));
    }

    #[test]
    fn changed_parameter_description_is_reported() {
        let mut schemas = declared_schemas();
        for (name, schema) in &mut schemas {
            if *name == "edit_list" {
                schema["properties"]["list_id"]["description"] = json!("Playlist id");
            }
        }
        let err = validate(schemas.iter().map(|(n, s)| (*n, s))).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { ref tool, ref detail }
            if tool == "edit_list" && detail.contains("list_id")));
    }

    #[test]
    fn missing_parameter_description_is_reported() {
        let mut schemas = declared_schemas();
        for (name, schema) in &mut schemas {
            if *name == "remove_list" {
                schema["properties"]["list_id"] = json!({"type": "string"});
            }
        }
        let err = validate(schemas.iter().map(|(n, s)| (*n, s))).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { ref tool, .. } if tool == "remove_list"));
    }

    #[test]
    fn no_arg_tool_accepts_schema_without_properties() {
        let spec = find("look_at_lists").unwrap();
        let schema: Map<String, Value> =
            serde_json::from_value(json!({"type": "object"})).unwrap();
        spec.check_schema(&schema).unwrap();
    }
}
