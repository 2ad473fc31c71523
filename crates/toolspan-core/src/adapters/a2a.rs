//! A2A agent-card adapter
//!
//! A2A skills carry descriptive metadata but no JSON Schema, so the feature
//! predicate is `false` everywhere and lifted skills get an empty object
//! input schema. Skill IDs are `namespace:name:version` strings parsed with
//! the shared tool-ID parser; an unparseable ID falls back to being used as
//! the name verbatim. Agent cards convert at the provider level through
//! [`A2aAdapter::to_canonical_provider`] / [`A2aAdapter::from_canonical_provider`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolspan_model::ToolId;

use crate::adapter::Adapter;
use crate::canonical::{CanonicalProvider, CanonicalSchema, CanonicalTool, SecurityRequirement};
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::feature::SchemaFeature;
use crate::native::NativeTool;

const META_SKILL_ID: &str = "skillId";
const META_SUPPORTED_INTERFACES: &str = "supportedInterfaces";
const META_PROVIDER: &str = "provider";
const META_DOCUMENTATION_URL: &str = "documentationUrl";
const META_ICON_URL: &str = "iconUrl";
const META_SIGNATURES: &str = "signatures";

/// A distinct skill offered by an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2aAgentSkill {
    /// Skill identifier, shaped `ns:name[:version]` when structured
    pub id: String,
    /// Human-readable skill name
    pub name: String,
    /// What the skill does
    #[serde(default)]
    pub description: String,
    /// Discovery keywords
    #[serde(default)]
    pub tags: Vec<String>,
    /// Example prompts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Supported input media types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_modes: Vec<String>,
    /// Supported output media types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_modes: Vec<String>,
    /// Required schemes/scopes for this skill
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_requirements: Vec<SecurityRequirement>,
}

/// An A2A agent card: the provider envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2aAgentCard {
    /// Agent name
    pub name: String,
    /// What the agent does
    pub description: String,
    /// Supported protocol bindings (required, non-empty)
    pub supported_interfaces: Vec<A2aAgentInterface>,
    /// The organization providing the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<A2aAgentProvider>,
    /// Agent version
    pub version: String,
    /// Documentation link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Capability flags
    #[serde(default)]
    pub capabilities: A2aAgentCapabilities,
    /// Auth schemes supported by the agent
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub security_schemes: Map<String, Value>,
    /// Required schemes/scopes to access the agent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_requirements: Vec<SecurityRequirement>,
    /// Default input media types for all skills
    #[serde(default)]
    pub default_input_modes: Vec<String>,
    /// Default output media types for all skills
    #[serde(default)]
    pub default_output_modes: Vec<String>,
    /// The skills the agent offers
    pub skills: Vec<A2aAgentSkill>,
    /// Card signatures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Map<String, Value>>,
    /// Icon link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// The organization behind an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct A2aAgentProvider {
    /// Provider URL
    pub url: String,
    /// Provider organization name
    pub organization: String,
}

/// Agent capability flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2aAgentCapabilities {
    /// Whether the agent streams results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,
    /// Whether the agent pushes notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
    /// Supported protocol extensions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<A2aAgentExtension>,
    /// Whether an extended agent card is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_agent_card: Option<bool>,
}

/// A supported protocol extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct A2aAgentExtension {
    /// Extension URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// What the extension does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether peers must understand the extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Extension parameters
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

/// A supported protocol binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2aAgentInterface {
    /// Endpoint URL
    pub url: String,
    /// Protocol binding name
    pub protocol_binding: String,
    /// Tenant identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Protocol version
    pub protocol_version: String,
}

/// Adapter between A2A agent skills/cards and the canonical formats.
#[derive(Debug, Default, Clone, Copy)]
pub struct A2aAdapter;

/// Create a new A2A adapter.
pub fn new_a2a_adapter() -> A2aAdapter {
    A2aAdapter
}

impl Adapter for A2aAdapter {
    fn name(&self) -> &'static str {
        "a2a"
    }

    fn to_canonical(&self, raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        match raw {
            NativeTool::A2aSkill(skill) => canonical_from_skill(skill)
                .map_err(|cause| ConvertError::conversion(self.name(), Direction::ToCanonical, cause)),
            NativeTool::A2aCard(_) => Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                "agent card contains multiple skills; use to_canonical_provider",
            )),
            other => Err(ConvertError::conversion(
                self.name(),
                Direction::ToCanonical,
                format!("unsupported input: {}", other.kind()),
            )),
        }
    }

    fn from_canonical(&self, ct: &CanonicalTool) -> ConvertResult<NativeTool> {
        skill_from_canonical(ct)
            .map(NativeTool::A2aSkill)
            .map_err(|cause| ConvertError::conversion(self.name(), Direction::FromCanonical, cause))
    }

    // A2A skill metadata does not carry JSON Schema.
    fn supports(&self, _feature: SchemaFeature) -> bool {
        false
    }
}

impl A2aAdapter {
    /// Lift an agent card into a canonical provider.
    pub fn to_canonical_provider(&self, card: &A2aAgentCard) -> ConvertResult<CanonicalProvider> {
        let err = |cause: String| {
            ConvertError::conversion(self.name(), Direction::ToCanonicalProvider, cause)
        };

        if card.name.is_empty() || card.description.is_empty() || card.version.is_empty() {
            return Err(err(
                "agent card name, description, and version are required".to_string(),
            ));
        }
        if card.supported_interfaces.is_empty() {
            return Err(err("agent card supportedInterfaces is required".to_string()));
        }

        let mut provider = CanonicalProvider {
            name: card.name.clone(),
            description: card.description.clone(),
            version: card.version.clone(),
            capabilities: capabilities_to_map(&card.capabilities),
            security_schemes: card
                .security_schemes
                .iter()
                .filter_map(|(k, v)| Some((k.clone(), v.as_object()?.clone())))
                .collect(),
            security_requirements: card.security_requirements.clone(),
            default_input_modes: card.default_input_modes.clone(),
            default_output_modes: card.default_output_modes.clone(),
            source_format: self.name().to_string(),
            ..CanonicalProvider::default()
        };

        for skill in &card.skills {
            provider.skills.push(canonical_from_skill(skill).map_err(|cause| {
                ConvertError::conversion(self.name(), Direction::ToCanonicalProvider, cause)
            })?);
        }

        if let Ok(value) = serde_json::to_value(&card.supported_interfaces) {
            provider
                .source_meta
                .insert(META_SUPPORTED_INTERFACES.to_string(), value);
        }
        if let Some(p) = &card.provider {
            if let Ok(value) = serde_json::to_value(p) {
                provider.source_meta.insert(META_PROVIDER.to_string(), value);
            }
        }
        if let Some(url) = &card.documentation_url {
            provider
                .source_meta
                .insert(META_DOCUMENTATION_URL.to_string(), Value::String(url.clone()));
        }
        if let Some(url) = &card.icon_url {
            provider
                .source_meta
                .insert(META_ICON_URL.to_string(), Value::String(url.clone()));
        }
        if !card.signatures.is_empty() {
            if let Ok(value) = serde_json::to_value(&card.signatures) {
                provider.source_meta.insert(META_SIGNATURES.to_string(), value);
            }
        }

        Ok(provider)
    }

    /// Project a canonical provider back into an agent card.
    pub fn from_canonical_provider(&self, provider: &CanonicalProvider) -> ConvertResult<A2aAgentCard> {
        let err = |cause: String| {
            ConvertError::conversion(self.name(), Direction::FromCanonicalProvider, cause)
        };

        if provider.name.is_empty() || provider.description.is_empty() || provider.version.is_empty()
        {
            return Err(err(
                "provider name, description, and version are required".to_string(),
            ));
        }

        let supported_interfaces: Vec<A2aAgentInterface> = provider
            .source_meta
            .get(META_SUPPORTED_INTERFACES)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        if supported_interfaces.is_empty() {
            return Err(err("supportedInterfaces required in source_meta".to_string()));
        }

        let mut card = A2aAgentCard {
            name: provider.name.clone(),
            description: provider.description.clone(),
            supported_interfaces,
            version: provider.version.clone(),
            documentation_url: string_from_meta(provider, META_DOCUMENTATION_URL),
            capabilities: capabilities_from_map(&provider.capabilities),
            security_schemes: provider
                .security_schemes
                .iter()
                .map(|(k, v)| (k.clone(), Value::Object(v.clone())))
                .collect(),
            security_requirements: provider.security_requirements.clone(),
            default_input_modes: provider.default_input_modes.clone(),
            default_output_modes: provider.default_output_modes.clone(),
            icon_url: string_from_meta(provider, META_ICON_URL),
            ..A2aAgentCard::default()
        };

        if let Some(value) = provider.source_meta.get(META_PROVIDER) {
            card.provider = serde_json::from_value(value.clone()).ok();
        }
        if let Some(value) = provider.source_meta.get(META_SIGNATURES) {
            if let Ok(signatures) = serde_json::from_value(value.clone()) {
                card.signatures = signatures;
            }
        }

        for skill in &provider.skills {
            card.skills.push(skill_from_canonical(skill).map_err(&err)?);
        }

        Ok(card)
    }
}

fn canonical_from_skill(skill: &A2aAgentSkill) -> Result<CanonicalTool, ConvertError> {
    if skill.id.is_empty() {
        return Err(ConvertError::InvalidToolId(skill.id.clone()));
    }

    // A malformed ID (empty segment, too many colons) is not an error here;
    // the raw ID becomes the name.
    let parsed = ToolId::parse(&skill.id).unwrap_or_else(|_| ToolId {
        namespace: None,
        name: skill.id.clone(),
        version: None,
    });

    let display_name = if skill.name.is_empty() {
        parsed.name.clone()
    } else {
        skill.name.clone()
    };

    let mut ct = CanonicalTool {
        namespace: parsed.namespace.unwrap_or_default(),
        name: parsed.name,
        version: parsed.version.unwrap_or_default(),
        display_name,
        description: skill.description.clone(),
        tags: skill.tags.clone(),
        input_modes: skill.input_modes.clone(),
        output_modes: skill.output_modes.clone(),
        examples: skill.examples.clone(),
        security_requirements: skill.security_requirements.clone(),
        input_schema: Some(CanonicalSchema::object()),
        source_format: "a2a".to_string(),
        ..CanonicalTool::default()
    };
    ct.source_meta
        .insert(META_SKILL_ID.to_string(), Value::String(skill.id.clone()));

    Ok(ct)
}

fn skill_from_canonical(ct: &CanonicalTool) -> Result<A2aAgentSkill, String> {
    if ct.name.is_empty() {
        return Err("tool name is required".to_string());
    }

    let skill_id = match ct.source_meta.get(META_SKILL_ID).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => ToolId::new(
            (!ct.namespace.is_empty()).then(|| ct.namespace.clone()),
            ct.name.clone(),
            (!ct.version.is_empty()).then(|| ct.version.clone()),
        )
        .to_string(),
    };

    let name = if ct.display_name.is_empty() {
        ct.name.clone()
    } else {
        ct.display_name.clone()
    };

    Ok(A2aAgentSkill {
        id: skill_id,
        name,
        description: ct.description.clone(),
        tags: ct.tags.clone(),
        examples: ct.examples.clone(),
        input_modes: ct.input_modes.clone(),
        output_modes: ct.output_modes.clone(),
        security_requirements: ct.security_requirements.clone(),
    })
}

fn capabilities_to_map(capabilities: &A2aAgentCapabilities) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(v) = capabilities.streaming {
        out.insert("streaming".to_string(), Value::Bool(v));
    }
    if let Some(v) = capabilities.push_notifications {
        out.insert("pushNotifications".to_string(), Value::Bool(v));
    }
    if let Some(v) = capabilities.extended_agent_card {
        out.insert("extendedAgentCard".to_string(), Value::Bool(v));
    }
    if !capabilities.extensions.is_empty() {
        if let Ok(value) = serde_json::to_value(&capabilities.extensions) {
            out.insert("extensions".to_string(), value);
        }
    }
    out
}

fn capabilities_from_map(m: &Map<String, Value>) -> A2aAgentCapabilities {
    A2aAgentCapabilities {
        streaming: m.get("streaming").and_then(Value::as_bool),
        push_notifications: m.get("pushNotifications").and_then(Value::as_bool),
        extended_agent_card: m.get("extendedAgentCard").and_then(Value::as_bool),
        extensions: m
            .get("extensions")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default(),
    }
}

fn string_from_meta(provider: &CanonicalProvider, key: &str) -> Option<String> {
    provider
        .source_meta
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter() -> A2aAdapter {
        new_a2a_adapter()
    }

    fn sample_skill() -> A2aAgentSkill {
        A2aAgentSkill {
            id: "tools:search:1.2.3".to_string(),
            name: "Search".to_string(),
            description: "Full-text search".to_string(),
            tags: vec!["search".to_string()],
            examples: vec!["find the report".to_string()],
            input_modes: vec!["text/plain".to_string()],
            output_modes: vec!["application/json".to_string()],
            security_requirements: Vec::new(),
        }
    }

    fn sample_card() -> A2aAgentCard {
        A2aAgentCard {
            name: "research-agent".to_string(),
            description: "Finds things".to_string(),
            version: "2.0.0".to_string(),
            supported_interfaces: vec![A2aAgentInterface {
                url: "https://agent.example.com/a2a".to_string(),
                protocol_binding: "JSONRPC".to_string(),
                tenant: None,
                protocol_version: "0.3.0".to_string(),
            }],
            capabilities: A2aAgentCapabilities {
                streaming: Some(true),
                ..A2aAgentCapabilities::default()
            },
            skills: vec![sample_skill()],
            documentation_url: Some("https://agent.example.com/docs".to_string()),
            ..A2aAgentCard::default()
        }
    }

    #[test]
    fn test_supports_nothing() {
        for f in SchemaFeature::ALL {
            assert!(!adapter().supports(f), "a2a should not support {f}");
        }
    }

    #[test]
    fn test_lift_parses_structured_id() {
        let ct = adapter().to_canonical(&NativeTool::A2aSkill(sample_skill())).unwrap();

        assert_eq!(ct.namespace, "tools");
        assert_eq!(ct.name, "search");
        assert_eq!(ct.version, "1.2.3");
        assert_eq!(ct.display_name, "Search");
        assert_eq!(ct.source_meta[META_SKILL_ID], json!("tools:search:1.2.3"));
        assert_eq!(
            ct.input_schema.as_ref().unwrap().schema_type.as_deref(),
            Some("object"),
            "skills get an empty object schema"
        );
    }

    #[test]
    fn test_lift_unparseable_id_falls_back_to_raw_name() {
        let mut skill = sample_skill();
        skill.id = "a:b:c:d".to_string();

        let ct = adapter().to_canonical(&NativeTool::A2aSkill(skill)).unwrap();
        assert_eq!(ct.name, "a:b:c:d");
        assert!(ct.namespace.is_empty());
        assert!(ct.version.is_empty());
    }

    #[test]
    fn test_lift_single_segment_id() {
        let mut skill = sample_skill();
        skill.id = "search".to_string();
        skill.name = String::new();

        let ct = adapter().to_canonical(&NativeTool::A2aSkill(skill)).unwrap();
        assert_eq!(ct.name, "search");
        assert_eq!(ct.display_name, "search", "display name falls back to the parsed name");
    }

    #[test]
    fn test_lift_requires_id() {
        let mut skill = sample_skill();
        skill.id = String::new();
        let err = adapter().to_canonical(&NativeTool::A2aSkill(skill)).unwrap_err();
        assert!(err.to_string().contains("invalid tool ID"), "{err}");

        let cause = std::error::Error::source(&err).expect("cause is chained");
        assert!(cause.to_string().contains("invalid tool ID"));
    }

    #[test]
    fn test_lift_rejects_card() {
        let err = adapter()
            .to_canonical(&NativeTool::A2aCard(sample_card()))
            .unwrap_err();
        assert!(err.to_string().contains("use to_canonical_provider"));
    }

    #[test]
    fn test_skill_round_trip_preserves_id() {
        let a = adapter();
        let ct = a.to_canonical(&NativeTool::A2aSkill(sample_skill())).unwrap();
        let out = a.from_canonical(&ct).unwrap();
        let skill = out.as_a2a_skill().unwrap();

        assert_eq!(*skill, sample_skill());
    }

    #[test]
    fn test_project_rebuilds_id_without_skill_id_meta() {
        let ct = CanonicalTool {
            namespace: "tools".to_string(),
            name: "search".to_string(),
            version: "2.0.0".to_string(),
            ..CanonicalTool::default()
        };
        let out = adapter().from_canonical(&ct).unwrap();
        assert_eq!(out.as_a2a_skill().unwrap().id, "tools:search:2.0.0");
    }

    #[test]
    fn test_project_requires_name() {
        let err = adapter().from_canonical(&CanonicalTool::default()).unwrap_err();
        assert!(err.to_string().contains("a2a adapter from_canonical"));
    }

    #[test]
    fn test_provider_lift_requires_interfaces() {
        let mut card = sample_card();
        card.supported_interfaces.clear();
        let err = adapter().to_canonical_provider(&card).unwrap_err();
        assert!(err.to_string().contains("supportedInterfaces"));
    }

    #[test]
    fn test_provider_lift_requires_core_fields() {
        let mut card = sample_card();
        card.version = String::new();
        assert!(adapter().to_canonical_provider(&card).is_err());
    }

    #[test]
    fn test_provider_round_trip() {
        let a = adapter();
        let card = sample_card();

        let provider = a.to_canonical_provider(&card).unwrap();
        assert_eq!(provider.source_format, "a2a");
        assert_eq!(provider.capabilities["streaming"], json!(true));
        assert_eq!(provider.skills.len(), 1);
        assert_eq!(provider.skills[0].name, "search");

        let back = a.from_canonical_provider(&provider).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_provider_project_requires_interfaces_in_meta() {
        let provider = CanonicalProvider {
            name: "p".to_string(),
            description: "d".to_string(),
            version: "1.0.0".to_string(),
            ..CanonicalProvider::default()
        };
        let err = adapter().from_canonical_provider(&provider).unwrap_err();
        assert!(err.to_string().contains("from_canonical_provider"));
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(sample_card()).unwrap();
        assert_eq!(value["supportedInterfaces"][0]["protocolBinding"], "JSONRPC");
        assert_eq!(value["skills"][0]["id"], "tools:search:1.2.3");
        assert_eq!(value["documentationUrl"], "https://agent.example.com/docs");
        assert_eq!(value["capabilities"]["streaming"], json!(true));
    }
}
