//! Career → skill reverse index.
//!
//! For each career class, the canonical skills observed at least once in
//! that class's training rows, in vocabulary order (a stable, reproducible
//! policy — not a top-by-frequency ranking), capped at 8. Precomputed once
//! per artifact load; the sample table is read-only so the index can never
//! go stale within a process lifetime.

use crate::model::artifact::TrainingSampleTable;
use crate::model::vocabulary::{CareerSet, SkillVocabulary};

/// Skills shown per career.
pub const MAX_SKILLS_PER_CAREER: usize = 8;

#[derive(Debug, Clone)]
pub struct CareerSkillIndex {
    by_class: Vec<Vec<String>>,
}

impl CareerSkillIndex {
    pub fn build(
        careers: &CareerSet,
        samples: &TrainingSampleTable,
        vocabulary: &SkillVocabulary,
    ) -> Self {
        let mut by_class = Vec::with_capacity(careers.len());

        for class_idx in 0..careers.len() {
            let mut occurrence = vec![0u64; vocabulary.len()];
            for row in samples.rows().iter().filter(|r| r.career == class_idx) {
                for (i, &count) in row.skills.iter().enumerate() {
                    occurrence[i] += u64::from(count);
                }
            }

            let skills: Vec<String> = vocabulary
                .display_names()
                .iter()
                .enumerate()
                .filter(|(i, _)| occurrence[*i] > 0)
                .take(MAX_SKILLS_PER_CAREER)
                .map(|(_, name)| name.clone())
                .collect();

            by_class.push(skills);
        }

        Self { by_class }
    }

    /// Skills for a career given by display name. Unknown names resolve to
    /// an empty slice, never an error.
    pub fn skills_for(&self, career_display_name: &str, careers: &CareerSet) -> &[String] {
        match careers.index_of(career_display_name) {
            Some(idx) => self.skills_for_class(idx),
            None => &[],
        }
    }

    pub fn skills_for_class(&self, class_idx: usize) -> &[String] {
        self.by_class.get(class_idx).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artifact::TrainingSample;

    fn vocab(ids: &[&str]) -> SkillVocabulary {
        SkillVocabulary::new(ids.iter().map(|s| s.to_string()).collect())
    }

    fn careers(names: &[&str]) -> CareerSet {
        CareerSet::new(names.iter().map(|s| s.to_string()).collect())
    }

    fn sample(career: usize, skills: &[u32]) -> TrainingSample {
        TrainingSample {
            career,
            skills: skills.to_vec(),
        }
    }

    #[test]
    fn test_skills_aggregate_across_class_rows() {
        let vocabulary = vocab(&["skill_python", "skill_sql", "skill_excel"]);
        let set = careers(&["Data Engineer", "Analyst"]);
        let samples = TrainingSampleTable::new(vec![
            sample(0, &[1, 0, 0]),
            sample(0, &[0, 1, 0]),
            sample(1, &[0, 0, 1]),
        ]);

        let index = CareerSkillIndex::build(&set, &samples, &vocabulary);
        assert_eq!(index.skills_for("Data Engineer", &set), &["Python", "Sql"]);
        assert_eq!(index.skills_for("Analyst", &set), &["Excel"]);
    }

    #[test]
    fn test_unknown_career_returns_empty() {
        let vocabulary = vocab(&["skill_python"]);
        let set = careers(&["Analyst"]);
        let samples = TrainingSampleTable::new(vec![sample(0, &[1])]);

        let index = CareerSkillIndex::build(&set, &samples, &vocabulary);
        assert!(index.skills_for("Astronaut", &set).is_empty());
    }

    #[test]
    fn test_career_with_no_rows_has_no_skills() {
        let vocabulary = vocab(&["skill_python"]);
        let set = careers(&["Analyst", "Clerk"]);
        let samples = TrainingSampleTable::new(vec![sample(0, &[1])]);

        let index = CareerSkillIndex::build(&set, &samples, &vocabulary);
        assert!(index.skills_for("Clerk", &set).is_empty());
    }

    #[test]
    fn test_caps_at_eight_skills() {
        let ids: Vec<String> = (0..12).map(|i| format!("skill_s{i}")).collect();
        let vocabulary = SkillVocabulary::new(ids);
        let set = careers(&["Analyst"]);
        let samples = TrainingSampleTable::new(vec![sample(0, &[1; 12])]);

        let index = CareerSkillIndex::build(&set, &samples, &vocabulary);
        assert_eq!(index.skills_for("Analyst", &set).len(), MAX_SKILLS_PER_CAREER);
    }

    #[test]
    fn test_entries_preserve_vocabulary_order_not_frequency() {
        let vocabulary = vocab(&["skill_python", "skill_sql"]);
        let set = careers(&["Analyst"]);
        // Sql occurs far more often, but Python comes first in the vocabulary.
        let samples = TrainingSampleTable::new(vec![sample(0, &[1, 9])]);

        let index = CareerSkillIndex::build(&set, &samples, &vocabulary);
        assert_eq!(index.skills_for("Analyst", &set), &["Python", "Sql"]);
    }
}
