//! Greeting pipeline stages and their assembly.

use crate::diagnostics::{Diagnosed, Flow};

use super::types::{GreetingResult, NamePair, PipelineError, PipelineResult, REJECTED_NAME};

pub const AFTER_FILTERING: &str = "After filtering";
pub const AFTER_TRANSFORMATION: &str = "After transformation";
pub const AFTER_JOINING: &str = "After joining";

/// Assembled greeting pipeline.
#[derive(Debug, Clone, Copy)]
pub struct GreetingPipeline {
    checkpoints: bool,
}

impl Default for GreetingPipeline {
    fn default() -> Self {
        Self { checkpoints: true }
    }
}

impl GreetingPipeline {
    pub fn new(checkpoints: bool) -> Self {
        Self { checkpoints }
    }

    /// Run the pair through filter → transform → join → map.
    pub fn greet(&self, pair: NamePair) -> Result<GreetingResult, Diagnosed<PipelineError>> {
        tracing::debug!(first = %pair.first, last = %pair.last, "greeting pipeline start");

        let flow = Flow::just(pair.into_vec()).map("filter", filter_rejected);
        let flow = self.checkpoint(flow, AFTER_FILTERING);

        let flow = flow.and_then("single", single_survivor);
        let flow = self.checkpoint(flow, AFTER_TRANSFORMATION);

        let flow = flow.map("collect", join_names);
        let flow = self.checkpoint(flow, AFTER_JOINING);

        flow.map("map", format_greeting).block()
    }

    fn checkpoint<T>(&self, flow: Flow<T, PipelineError>, label: &str) -> Flow<T, PipelineError> {
        if self.checkpoints {
            flow.checkpoint(label)
        } else {
            flow
        }
    }
}

/// Greet with the default pipeline (checkpoints on).
pub fn greet(pair: NamePair) -> Result<GreetingResult, Diagnosed<PipelineError>> {
    GreetingPipeline::default().greet(pair)
}

/// Drop every name equal to [`REJECTED_NAME`].
pub fn filter_rejected(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter(|name| name != REJECTED_NAME).collect()
}

/// Require exactly one survivor.
pub fn single_survivor(names: Vec<String>) -> PipelineResult<Vec<String>> {
    if names.len() == 1 {
        Ok(names)
    } else {
        Err(PipelineError::Arity { survivors: names.len() })
    }
}

pub fn join_names(names: Vec<String>) -> String {
    names.concat()
}

pub fn format_greeting(joined: String) -> GreetingResult {
    GreetingResult::new(format!("Hello, {}", joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::OperatorDebug;

    fn greet_names(first: &str, last: &str) -> Result<GreetingResult, Diagnosed<PipelineError>> {
        greet(NamePair::new(first, last))
    }

    #[test]
    fn test_one_rejected_name_is_greeted() {
        assert_eq!(greet_names("John", "Bob").unwrap().as_str(), "Hello, Bob");
        assert_eq!(greet_names("Alice", "John").unwrap().as_str(), "Hello, Alice");
    }

    #[test]
    fn test_both_rejected_is_arity_error() {
        let err = greet_names("John", "John").unwrap_err();
        assert_eq!(err.kind(), &PipelineError::Arity { survivors: 0 });
    }

    #[test]
    fn test_none_rejected_is_arity_error() {
        let err = greet_names("Alice", "Bob").unwrap_err();
        assert_eq!(err.kind(), &PipelineError::Arity { survivors: 2 });
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        assert_eq!(greet_names("john", "John").unwrap().as_str(), "Hello, john");
        assert_eq!(greet_names("JOHN", "John ").unwrap_err().kind(), &PipelineError::Arity { survivors: 2 });
    }

    #[test]
    fn test_checkpoints_after_transformation() {
        let err = greet_names("Alice", "Bob").unwrap_err();
        assert_eq!(
            err.diagnostics().checkpoints,
            vec![AFTER_TRANSFORMATION.to_string(), AFTER_JOINING.to_string()]
        );
    }

    #[test]
    fn test_checkpoints_do_not_change_results() {
        let plain = GreetingPipeline::new(false);
        let checked = GreetingPipeline::new(true);
        for (first, last) in [("John", "Bob"), ("John", "John"), ("Alice", "Bob")] {
            let a = plain.greet(NamePair::new(first, last));
            let b = checked.greet(NamePair::new(first, last));
            assert_eq!(a.as_ref().ok(), b.as_ref().ok());
            assert_eq!(a.as_ref().err().map(|e| e.kind()), b.as_ref().err().map(|e| e.kind()));
        }
        let err = plain.greet(NamePair::new("John", "John")).unwrap_err();
        assert!(err.diagnostics().checkpoints.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let pair = NamePair::new("Alice", "John");
        assert_eq!(greet(pair.clone()).unwrap(), greet(pair).unwrap());
    }

    #[test]
    fn test_debug_mode_names_single_stage() {
        let _guard = OperatorDebug::enable();
        let err = greet_names("John", "John").unwrap_err();
        let ops: Vec<_> = err.diagnostics().assembly.iter().map(|s| s.operator).collect();
        assert_eq!(ops, vec!["single", "collect", "map"]);
    }

    #[test]
    fn test_stages_individually() {
        let names = vec!["John".to_string(), "Bob".to_string()];
        let filtered = filter_rejected(names);
        assert_eq!(filtered, vec!["Bob".to_string()]);
        let single = single_survivor(filtered).unwrap();
        assert_eq!(format_greeting(join_names(single)).as_str(), "Hello, Bob");
        assert!(single_survivor(Vec::new()).is_err());
    }
}
