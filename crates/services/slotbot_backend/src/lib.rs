// --- File: crates/services/slotbot_backend/src/lib.rs ---
pub mod app; // Router assembly and middleware stack
pub mod app_state;
pub mod shutdown;
