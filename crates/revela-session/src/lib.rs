//! Edit-session orchestration: mutate parameters, recompute the
//! pipeline synchronously, publish results to observers, and export
//! through an authorization gate.

pub mod export;
pub mod session;
