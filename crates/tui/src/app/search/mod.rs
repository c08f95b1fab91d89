//! Search coordination and runtime management.
//!
//! This module handles communication with the background search worker,
//! request sequencing, and reconciliation of responses into the session.

mod coordination;
mod runtime;

pub(crate) use runtime::SearchRuntime;
