pub mod document_actions;
pub mod error_boundary;
pub mod modal;
pub mod navbar;
pub mod search_components;
pub mod suspend_boundary;
