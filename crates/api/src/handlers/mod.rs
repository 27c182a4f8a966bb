//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `pony_db` (and, for
//! meetings, to the summarization pipeline) and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod customer;
pub mod event;
