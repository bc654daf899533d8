mod classifier_factory;
mod heuristic_classifier;
mod llm_classifier;

pub use classifier_factory::{ClassifierBackend, ClassifierFactory};
pub use heuristic_classifier::{
    DOC_TYPE_RULES, DocTypeRule, HEURISTIC_PROVIDER, HeuristicClassifier, JURISDICTION_RULES,
    RuleOutcome,
};
pub use llm_classifier::{LLM_PROVIDER, LlmClassifier};
