//! Port contracts for command dispatch.
//!
//! Sessions depend on [`CommandDispatcher`]; handlers answer through
//! [`ResponseWriter`].

pub mod dispatcher;
pub mod handler;
pub mod response;

pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use handler::{CommandDefinition, CommandHandler};
pub use response::{ResponseError, ResponseResult, ResponseWriter};
