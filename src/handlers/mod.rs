pub mod preview;
pub mod pricing;

pub use preview::build_app;
