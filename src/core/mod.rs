// Core algorithm exports
pub mod dialogue;
pub mod explain;
pub mod extractor;
pub mod keywords;
pub mod matcher;
pub mod scoring;

pub use dialogue::{is_off_topic, next_question, QUESTION_ORDER};
pub use explain::{describe_trait, explain_match, explain_trait, match_quality, summarize_profile, trait_notes};
pub use extractor::extract;
pub use keywords::{KeywordRule, Tokens, RULES};
pub use matcher::{Matcher, Ranking};
pub use scoring::{score_breed, trait_match};
