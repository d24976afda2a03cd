// Domain layer - devices, session state and the rendered view
pub mod device;
pub mod session;
pub mod view;
