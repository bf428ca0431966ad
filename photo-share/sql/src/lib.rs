mod context;
pub mod entity;

pub use context::Context;
