//! Small utilities shared by every crate in the workspace: logging setup and a few string helpers
//! for producing human-friendly log and error messages.

pub mod logger;
mod utils;

pub use crate::utils::{plain_list_names, prettyprint_usize};
