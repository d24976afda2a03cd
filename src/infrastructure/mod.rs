// Infrastructure layer - configuration and rendering adapters
pub mod config;
pub mod html_response;
