//! Execution backend bindings for tools

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Where and how a tool is executed.
///
/// A tool can have multiple backends recorded, but typically one active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ToolBackend {
    /// Served by an MCP server
    #[serde(rename_all = "camelCase")]
    Mcp {
        /// Identifies the MCP server in a registry or config
        server_name: String,
    },
    /// Served by an external tool provider
    #[serde(rename_all = "camelCase")]
    Provider {
        /// Provider identifier
        provider_id: String,
        /// Tool identifier within the provider
        tool_id: String,
    },
    /// Executed locally
    #[serde(rename_all = "camelCase")]
    Local {
        /// Local function or handler name
        name: String,
    },
}

impl ToolBackend {
    /// Create an MCP backend binding.
    pub fn mcp(server_name: impl Into<String>) -> Self {
        Self::Mcp {
            server_name: server_name.into(),
        }
    }

    /// Create a provider backend binding.
    pub fn provider(provider_id: impl Into<String>, tool_id: impl Into<String>) -> Self {
        Self::Provider {
            provider_id: provider_id.into(),
            tool_id: tool_id.into(),
        }
    }

    /// Create a local backend binding.
    pub fn local(name: impl Into<String>) -> Self {
        Self::Local { name: name.into() }
    }

    /// Check that the binding carries its required identifiers.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Mcp { server_name } if server_name.is_empty() => Err(ModelError::InvalidBackend(
                "MCP backend requires serverName".to_string(),
            )),
            Self::Provider { provider_id, .. } if provider_id.is_empty() => Err(
                ModelError::InvalidBackend("provider backend requires providerId".to_string()),
            ),
            Self::Provider { tool_id, .. } if tool_id.is_empty() => Err(
                ModelError::InvalidBackend("provider backend requires toolId".to_string()),
            ),
            Self::Local { name } if name.is_empty() => Err(ModelError::InvalidBackend(
                "local backend requires name".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_validate() {
        assert!(ToolBackend::mcp("files").validate().is_ok());
        assert!(ToolBackend::provider("acme", "acme:search").validate().is_ok());
        assert!(ToolBackend::local("handler").validate().is_ok());
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        assert!(ToolBackend::mcp("").validate().is_err());
        assert!(ToolBackend::provider("", "t").validate().is_err());
        assert!(ToolBackend::provider("p", "").validate().is_err());
        assert!(ToolBackend::local("").validate().is_err());
    }

    #[test]
    fn test_serde_tagging() {
        let backend = ToolBackend::mcp("files");
        let json = serde_json::to_string(&backend).unwrap();
        assert!(json.contains("\"kind\":\"mcp\""));
        assert!(json.contains("\"serverName\":\"files\""));

        let parsed: ToolBackend = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, backend);
    }
}
