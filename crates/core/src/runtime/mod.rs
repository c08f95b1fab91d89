//! Background search worker.
//!
//! The UI thread never touches the network. It sends [`SearchCommand`]s to the
//! worker and drains [`SearchResult`]s once per frame; every result carries the
//! generation token of the request it answers.

mod commands;
mod worker;

pub use commands::{SearchCommand, SearchResult};
pub use worker::spawn;
