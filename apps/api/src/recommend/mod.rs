pub mod handlers;
pub mod matcher;
pub mod ranker;
pub mod skill_index;
pub mod vectorizer;
