pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod server;
pub mod utils;

pub use config::{CipherConfig, ExtractConfig, IconConfig, ServerConfig};
pub use server::{AppState, build_router};
