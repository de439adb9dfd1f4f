//! Shared error plumbing for the tool-call workspace.
//!
//! Every library crate defines its own snafu enum, annotates it with
//! [`stack_trace_debug`], and implements [`ErrorExt`] so callers can classify
//! failures through a single [`StatusCode`].

pub mod ext;
pub mod status_code;

pub use ext::BoxedError;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use ext::boxed;
pub use snafu::Location;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use toolcall_stack_trace_macro::stack_trace_debug;
