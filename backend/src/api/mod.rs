pub mod search;
pub mod documents;
