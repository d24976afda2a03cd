// Application layer - use cases
pub mod dashboard_service;
