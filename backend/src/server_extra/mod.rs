pub mod document_proxy;
