//! The adapter registry and conversion engine

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::adapter::{Adapter, FeatureLossWarning};
use crate::error::{ConvertError, ConvertResult, Direction};
use crate::loss::detect_feature_loss;
use crate::native::NativeTool;

/// The result of a format conversion: the projected tool plus any
/// feature-loss warnings.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// The converted tool in the target format
    pub tool: NativeTool,
    /// Schema features the target could not represent
    pub warnings: Vec<FeatureLossWarning>,
}

/// A thread-safe, name-indexed set of protocol adapters.
///
/// Many readers (`get`, `list`, `convert`) share the map behind a single
/// reader-writer lock; `register` and `unregister` take the write side.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: RwLock<HashMap<String, Arc<dyn Adapter>>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an adapter. Fails without mutating the registry if the name is
    /// already taken.
    pub fn register(&self, adapter: Arc<dyn Adapter>) -> ConvertResult<()> {
        let name = adapter.name();
        let mut adapters = self.adapters.write();
        if adapters.contains_key(name) {
            return Err(ConvertError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        debug!(adapter = name, "registering adapter");
        adapters.insert(name.to_string(), adapter);
        Ok(())
    }

    /// Look up an adapter by name.
    pub fn get(&self, name: &str) -> ConvertResult<Arc<dyn Adapter>> {
        self.adapters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ConvertError::NotFound {
                name: name.to_string(),
            })
    }

    /// The names of all registered adapters, in unspecified order.
    pub fn list(&self) -> Vec<String> {
        self.adapters.read().keys().cloned().collect()
    }

    /// Remove an adapter by name.
    pub fn unregister(&self, name: &str) -> ConvertResult<()> {
        let mut adapters = self.adapters.write();
        if adapters.remove(name).is_none() {
            return Err(ConvertError::NotFound {
                name: name.to_string(),
            });
        }
        debug!(adapter = name, "unregistered adapter");
        Ok(())
    }

    /// Convert a tool from one format to another through the canonical
    /// representation, reporting any schema features the target cannot
    /// carry.
    ///
    /// Lift errors are tagged with the source adapter and `to_canonical`;
    /// projection errors with the target adapter and `from_canonical`.
    /// Feature loss never fails the conversion.
    pub fn convert(&self, raw: &NativeTool, from: &str, to: &str) -> ConvertResult<ConversionOutcome> {
        let source = self.get(from)?;
        let target = self.get(to)?;

        let canonical = source
            .to_canonical(raw)
            .map_err(|e| ConvertError::conversion(from, Direction::ToCanonical, e))?;

        let warnings = detect_feature_loss(&canonical, source.as_ref(), target.as_ref());

        let tool = target
            .from_canonical(&canonical)
            .map_err(|e| ConvertError::conversion(to, Direction::FromCanonical, e))?;

        debug!(
            from,
            to,
            tool = %canonical.name,
            warnings = warnings.len(),
            "converted tool"
        );

        Ok(ConversionOutcome { tool, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{new_mcp_adapter, new_openai_adapter};
    use crate::canonical::CanonicalTool;
    use crate::error::ConvertResult;
    use crate::feature::SchemaFeature;

    #[derive(Debug)]
    struct NamedAdapter(&'static str);

    impl Adapter for NamedAdapter {
        fn name(&self) -> &'static str {
            self.0
        }
        fn to_canonical(&self, _raw: &NativeTool) -> ConvertResult<CanonicalTool> {
            Ok(CanonicalTool::default())
        }
        fn from_canonical(&self, _tool: &CanonicalTool) -> ConvertResult<NativeTool> {
            Ok(NativeTool::Mcp(toolspan_model::Tool::new("stub")))
        }
        fn supports(&self, _feature: SchemaFeature) -> bool {
            false
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(new_mcp_adapter())).unwrap();

        assert_eq!(registry.get("mcp").unwrap().name(), "mcp");
        assert!(matches!(
            registry.get("missing").unwrap_err(),
            ConvertError::NotFound { .. }
        ));
    }

    #[test]
    fn test_register_duplicate_fails_without_mutation() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(NamedAdapter("x"))).unwrap();

        let err = registry.register(Arc::new(NamedAdapter("x"))).unwrap_err();
        assert!(matches!(err, ConvertError::AlreadyRegistered { ref name } if name == "x"));
        assert_eq!(registry.list(), vec!["x".to_string()]);
    }

    #[test]
    fn test_list_and_unregister() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(new_mcp_adapter())).unwrap();
        registry.register(Arc::new(new_openai_adapter())).unwrap();

        let mut names = registry.list();
        names.sort();
        assert_eq!(names, vec!["mcp".to_string(), "openai".to_string()]);

        registry.unregister("mcp").unwrap();
        assert!(registry.get("mcp").is_err());
        assert!(matches!(
            registry.unregister("mcp").unwrap_err(),
            ConvertError::NotFound { .. }
        ));
    }

    #[test]
    fn test_convert_unknown_adapter_is_not_found() {
        let registry = AdapterRegistry::new();
        registry.register(Arc::new(new_mcp_adapter())).unwrap();

        let tool = NativeTool::Mcp(toolspan_model::Tool::new("t"));
        assert!(matches!(
            registry.convert(&tool, "mcp", "missing").unwrap_err(),
            ConvertError::NotFound { .. }
        ));
        assert!(matches!(
            registry.convert(&tool, "missing", "mcp").unwrap_err(),
            ConvertError::NotFound { .. }
        ));
    }
}
