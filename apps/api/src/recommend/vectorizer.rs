//! Skill vectorization: free-text skill tokens → fixed-length binary
//! feature vector aligned to the canonical vocabulary order.

use crate::model::vocabulary::SkillVocabulary;
use crate::recommend::matcher::SkillMatcher;

/// Builds the feature vector for a set of user skills.
///
/// Feature i is 1.0 when any normalized user token matches the canonical
/// skill at index i under the given strategy, otherwise 0.0. The first
/// qualifying token short-circuits; token order cannot change the result
/// because the test is a pure OR. Unknown tokens simply match nothing.
pub fn vectorize(
    user_skills: &[String],
    vocabulary: &SkillVocabulary,
    matcher: &dyn SkillMatcher,
) -> Vec<f64> {
    let tokens: Vec<String> = user_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    vocabulary
        .display_names()
        .iter()
        .map(|name| {
            let canonical = name.to_lowercase();
            if tokens.iter().any(|t| matcher.matches(t, &canonical)) {
                1.0
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::matcher::ContainmentMatcher;

    fn vocab(ids: &[&str]) -> SkillVocabulary {
        SkillVocabulary::new(ids.iter().map(|s| s.to_string()).collect())
    }

    fn skills(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vector_length_matches_vocabulary() {
        let vocabulary = vocab(&["skill_python", "skill_java", "skill_sql", "skill_excel"]);
        let vector = vectorize(&skills(&["python"]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector.len(), 4);
        assert!(vector.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn test_matched_skills_set_their_columns() {
        let vocabulary = vocab(&["skill_python", "skill_java", "skill_sql"]);
        let vector = vectorize(&skills(&["Python", "SQL"]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_containment_false_positive_is_preserved() {
        // "java" is a substring of "javascript": the loose containment match
        // claims both columns by design.
        let vocabulary = vocab(&["skill_python", "skill_javascript"]);
        let vector = vectorize(&skills(&["java"]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector, vec![0.0, 1.0]);
    }

    #[test]
    fn test_tokens_are_trimmed_and_lowercased() {
        let vocabulary = vocab(&["skill_python"]);
        let vector = vectorize(&skills(&["  PYTHON  "]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector, vec![1.0]);
    }

    #[test]
    fn test_unknown_tokens_produce_zeros() {
        let vocabulary = vocab(&["skill_python", "skill_sql"]);
        let vector = vectorize(&skills(&["basket weaving"]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector, vec![0.0, 0.0]);
    }

    #[test]
    fn test_blank_tokens_are_ignored() {
        let vocabulary = vocab(&["skill_python"]);
        let vector = vectorize(&skills(&["  ", ""]), &vocabulary, &ContainmentMatcher);
        assert_eq!(vector, vec![0.0]);
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let vocabulary = vocab(&["skill_python", "skill_sql", "skill_excel"]);
        let a = vectorize(&skills(&["sql", "excel"]), &vocabulary, &ContainmentMatcher);
        let b = vectorize(&skills(&["excel", "sql"]), &vocabulary, &ContainmentMatcher);
        assert_eq!(a, b);
    }
}
