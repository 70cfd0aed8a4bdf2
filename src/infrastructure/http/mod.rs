pub mod document_api_reqwest;
