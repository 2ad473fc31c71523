//! The tagged union of native tool shapes
//!
//! Each adapter accepts and produces specific variants of [`NativeTool`];
//! handing an adapter a variant it does not understand is a conversion
//! error, not a panic.

use toolspan_model::Tool;

use crate::adapters::a2a::{A2aAgentCard, A2aAgentSkill};
use crate::adapters::anthropic::AnthropicTool;
use crate::adapters::gemini::{GeminiFunctionDeclaration, GeminiTool};
use crate::adapters::openai::{OpenAiFunction, OpenAiTool};

/// A tool description in one of the supported wire formats.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeTool {
    /// An MCP tool (with toolspan extensions)
    Mcp(Tool),
    /// An OpenAI tool envelope (`{"type":"function","function":{…}}`)
    OpenAi(OpenAiTool),
    /// A bare OpenAI function definition
    OpenAiFunction(OpenAiFunction),
    /// An Anthropic tool
    Anthropic(AnthropicTool),
    /// A Gemini tool wrapper (`{"functionDeclarations":[…]}`)
    Gemini(GeminiTool),
    /// A bare Gemini function declaration
    GeminiFunction(GeminiFunctionDeclaration),
    /// An A2A agent skill
    A2aSkill(A2aAgentSkill),
    /// An A2A agent card; only valid for provider-level conversion
    A2aCard(A2aAgentCard),
}

impl NativeTool {
    /// A short name for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeTool::Mcp(_) => "mcp tool",
            NativeTool::OpenAi(_) => "openai tool",
            NativeTool::OpenAiFunction(_) => "openai function",
            NativeTool::Anthropic(_) => "anthropic tool",
            NativeTool::Gemini(_) => "gemini tool",
            NativeTool::GeminiFunction(_) => "gemini function declaration",
            NativeTool::A2aSkill(_) => "a2a agent skill",
            NativeTool::A2aCard(_) => "a2a agent card",
        }
    }

    /// Borrow the MCP tool, if that is what this is.
    pub fn as_mcp(&self) -> Option<&Tool> {
        match self {
            NativeTool::Mcp(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the OpenAI tool envelope, if that is what this is.
    pub fn as_openai(&self) -> Option<&OpenAiTool> {
        match self {
            NativeTool::OpenAi(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the Anthropic tool, if that is what this is.
    pub fn as_anthropic(&self) -> Option<&AnthropicTool> {
        match self {
            NativeTool::Anthropic(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the Gemini tool wrapper, if that is what this is.
    pub fn as_gemini(&self) -> Option<&GeminiTool> {
        match self {
            NativeTool::Gemini(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the A2A skill, if that is what this is.
    pub fn as_a2a_skill(&self) -> Option<&A2aAgentSkill> {
        match self {
            NativeTool::A2aSkill(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Tool> for NativeTool {
    fn from(t: Tool) -> Self {
        NativeTool::Mcp(t)
    }
}

impl From<OpenAiTool> for NativeTool {
    fn from(t: OpenAiTool) -> Self {
        NativeTool::OpenAi(t)
    }
}

impl From<OpenAiFunction> for NativeTool {
    fn from(t: OpenAiFunction) -> Self {
        NativeTool::OpenAiFunction(t)
    }
}

impl From<AnthropicTool> for NativeTool {
    fn from(t: AnthropicTool) -> Self {
        NativeTool::Anthropic(t)
    }
}

impl From<GeminiTool> for NativeTool {
    fn from(t: GeminiTool) -> Self {
        NativeTool::Gemini(t)
    }
}

impl From<GeminiFunctionDeclaration> for NativeTool {
    fn from(t: GeminiFunctionDeclaration) -> Self {
        NativeTool::GeminiFunction(t)
    }
}

impl From<A2aAgentSkill> for NativeTool {
    fn from(t: A2aAgentSkill) -> Self {
        NativeTool::A2aSkill(t)
    }
}

impl From<A2aAgentCard> for NativeTool {
    fn from(t: A2aAgentCard) -> Self {
        NativeTool::A2aCard(t)
    }
}
