pub mod forward;
pub mod preflight;

pub use forward::{forward, not_found};
pub use preflight::preflight;
