// handlers/public/mod.rs - Endpoints reachable without a session token
pub mod system;

pub use system::{health, root};
