//! Registry safety under concurrent readers and writers.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use toolspan_core::{
    default_registry, Adapter, CanonicalTool, ConvertResult, NativeTool, SchemaFeature,
};
use toolspan_model::Tool;

#[derive(Debug)]
struct StubAdapter {
    name: &'static str,
}

impl Adapter for StubAdapter {
    fn name(&self) -> &'static str {
        self.name
    }
    fn to_canonical(&self, _raw: &NativeTool) -> ConvertResult<CanonicalTool> {
        Ok(CanonicalTool {
            name: "stub".to_string(),
            ..CanonicalTool::default()
        })
    }
    fn from_canonical(&self, _tool: &CanonicalTool) -> ConvertResult<NativeTool> {
        Ok(NativeTool::Mcp(Tool::new("stub")))
    }
    fn supports(&self, _feature: SchemaFeature) -> bool {
        false
    }
}

const STUB_NAMES: [&str; 4] = ["stub0", "stub1", "stub2", "stub3"];

#[test]
fn concurrent_readers_and_writers_stay_consistent() {
    let registry = Arc::new(default_registry());
    let sample = Arc::new(NativeTool::Mcp({
        let mut t = Tool::new("probe");
        t.input_schema = json!({"type": "object"});
        t
    }));

    let mut handles = Vec::new();

    // Writers register and unregister their own stub repeatedly.
    for name in STUB_NAMES {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                registry
                    .register(Arc::new(StubAdapter { name }))
                    .expect("fresh name registers");
                registry.unregister(name).expect("registered name unregisters");
            }
        }));
    }

    // Readers hammer get/list/convert; built-ins never disappear.
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        let sample = Arc::clone(&sample);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                assert!(registry.get("mcp").is_ok());

                let names = registry.list();
                assert!(names.iter().any(|n| n == "openai"));

                let outcome = registry
                    .convert(&sample, "mcp", "anthropic")
                    .expect("built-in conversion always works");
                assert_eq!(outcome.tool.as_anthropic().unwrap().name, "probe");
            }
        }));
    }

    for handle in handles {
        handle.join().expect("no thread panicked");
    }

    // All stubs were unregistered on their final iteration.
    let mut names = registry.list();
    names.sort();
    assert_eq!(names, vec!["a2a", "anthropic", "gemini", "mcp", "openai"]);
}

#[test]
fn duplicate_registration_race_never_corrupts_the_map() {
    let registry = Arc::new(default_registry());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            // At most one of these ever wins per name lifetime.
            let _ = registry.register(Arc::new(StubAdapter { name: "contested" }));
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.get("contested").unwrap().name(), "contested");
    assert_eq!(
        registry.list().iter().filter(|n| *n == "contested").count(),
        1
    );
}
