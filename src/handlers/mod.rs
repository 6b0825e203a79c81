// handlers/mod.rs - Two-tier handler layout
//
// Public (no session) -> Protected (session token required, /api/*)
pub mod public;
pub mod protected;
