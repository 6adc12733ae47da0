//! Tool abstractions shared between the agent and the model.

use serde::{Deserialize, Serialize};

/// A tool the model may call.
///
/// `parameters` is kept as raw JSON schema: backend tools produce it via
/// `schemars`, front-end tools deliver it verbatim from the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tool {
    /// The name of the tool
    pub name: String,

    /// The description of the tool
    pub description: String,

    /// JSON schema of the tool arguments
    pub parameters: serde_json::Value,

    /// Whether to strictly validate the parameters
    #[serde(default)]
    pub strict: bool,
}

/// A tool call made by the model
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ToolCall {
    /// The ID of the tool call
    #[serde(default)]
    pub id: String,

    /// The type of tool (currently only "function")
    #[serde(default, rename = "type")]
    pub call_type: String,

    /// The function to call
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a function call with the given id, name and JSON arguments.
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: "function".into(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// A function call within a tool call
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FunctionCall {
    /// The name of the function to call
    #[serde(default)]
    pub name: String,

    /// The arguments to pass to the function (JSON string)
    #[serde(default)]
    pub arguments: String,
}
