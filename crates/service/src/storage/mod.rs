pub mod json_doc_store;
