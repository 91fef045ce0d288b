pub mod error;
pub mod gateway;
pub mod model;
pub mod picker;
pub mod runtime;
pub mod session;
