//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so the state modules stay testable without a DOM.

pub mod dom;
pub mod storage;
