pub mod completion_client;
pub mod tabular_backend;
