//! User-facing collaborators
//!
//! - **`prompts`**: asking for values, confirmations and picks
//! - **`actions`**: inserting and running resolved snippets

pub mod actions;
pub mod prompts;
