//! HTTP middleware stack.

pub mod cors;
pub mod panic;
pub mod trace;

pub use trace::X_TRACE_ID;
