mod context;

pub mod analyze;
pub mod config;
pub mod export;
pub mod show;

pub use context::HandlerContext;
