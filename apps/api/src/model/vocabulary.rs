//! Canonical skill vocabulary and career set.
//!
//! Both are index-ordered and immutable after load: the skill order must
//! match the feature columns the classifier was trained against, and the
//! career order must match its output classes.

/// The ordered list of canonical skills. Index i is the feature column i.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    ids: Vec<String>,
    display_names: Vec<String>,
}

impl SkillVocabulary {
    pub fn new(ids: Vec<String>) -> Self {
        let display_names = ids.iter().map(|id| display_name(id)).collect();
        Self { ids, display_names }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn display_names(&self) -> &[String] {
        &self.display_names
    }
}

/// Derives a human-readable display name from a canonical skill id:
/// strips the `skill_` prefix, turns separators into spaces, title-cases.
/// `skill_machine_learning` → `Machine Learning`.
pub fn display_name(id: &str) -> String {
    let stripped = id.strip_prefix("skill_").unwrap_or(id);
    let spaced = stripped.replace(['_', '-'], " ");
    title_case(&spaced)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dense, contiguous class-index → career display name mapping, matching the
/// classifier's output ordering exactly.
#[derive(Debug, Clone)]
pub struct CareerSet {
    names: Vec<String>,
}

impl CareerSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, class_idx: usize) -> Option<&str> {
        self.names.get(class_idx).map(String::as_str)
    }

    /// Resolves a display name to its class index by exact match.
    pub fn index_of(&self, display_name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == display_name)
    }
}
