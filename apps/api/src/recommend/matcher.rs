//! Skill matching strategy.
//!
//! The vectorizer only talks to the `SkillMatcher` trait, so a stricter
//! tokenized or fuzzy matcher can be substituted at startup without touching
//! the ranker or the reverse index.

/// Decides whether a normalized user token claims a canonical skill.
/// Both arguments arrive trimmed and lower-cased.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, user_token: &str, canonical_name: &str) -> bool;
}

/// Loose bidirectional containment: the token matches when either string
/// contains the other. Deliberately loose — a short token matches inside a
/// longer compound name ("java" claims "javascript"). That false positive is
/// an accepted trade-off for recall on free-text input, not a bug.
pub struct ContainmentMatcher;

impl SkillMatcher for ContainmentMatcher {
    fn matches(&self, user_token: &str, canonical_name: &str) -> bool {
        canonical_name.contains(user_token) || user_token.contains(canonical_name)
    }
}
