// Adapters - external system implementations

pub mod http_backend;

// Re-export adapters
pub use http_backend::HttpBackendAdapter;
