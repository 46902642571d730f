//! Command handlers for the `folio` CLI.
//!
//! One module per subcommand; each exposes a `run` function taking the
//! [`RuntimeContext`](crate::context::RuntimeContext) and its parsed args.

pub mod completion;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
