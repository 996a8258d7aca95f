pub mod admin_routes;
pub mod analysis_server;
