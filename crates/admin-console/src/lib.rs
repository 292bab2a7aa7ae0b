//! Admin Console Library
//!
//! Terminal counterpart of the account administration page: a delete-user
//! form that posts to the gateway and reports the reply to the operator.

pub mod client;
pub mod config;
pub mod error;
pub mod form;

pub use client::{AdminClient, DeleteReply};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use form::{DeleteUserForm, FormController, Notice, Notifier, RecordingNotifier, TerminalNotifier};
