//! Delete-user form controller and operator notifications.

use std::sync::Mutex;

use crate::client::AdminClient;

/// State of the delete-user form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUserForm {
    pub username: String,
}

impl DeleteUserForm {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Message shown to the operator after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Destination for submission results. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Writes notices to stdout / stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(text) => println!("{}", text),
            Notice::Error(text) => eprintln!("{}", text),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

/// Submits the form and reports the outcome.
pub struct FormController<N: Notifier> {
    client: AdminClient,
    notifier: N,
}

impl<N: Notifier> FormController<N> {
    pub fn new(client: AdminClient, notifier: N) -> Self {
        Self { client, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Post the form and notify the operator.
    ///
    /// The username is sent as entered; presence is checked by the gateway.
    pub async fn on_submit(&self, form: &DeleteUserForm) -> Notice {
        let notice = match self.client.delete_user(&form.username).await {
            Ok(reply) if reply.is_success() => Notice::Success(reply.message),
            Ok(reply) => {
                tracing::debug!(status = %reply.status, error = ?reply.error, "Delete rejected");
                Notice::Error(format!("Error: {}", reply.message))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Delete request failed");
                Notice::Error(format!("An unexpected error occurred: {}", e))
            }
        };

        self.notifier.notify(&notice);
        notice
    }
}
