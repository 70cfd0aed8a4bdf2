pub mod document_endpoint;
pub mod version_navigation;
pub mod version_store;
