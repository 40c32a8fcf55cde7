use thiserror::Error;

/// Errors raised while dispatching a fee notice over email or SMS.
///
/// The dispatcher resolves guardian contact details before handing the
/// composed message to the transport; both resolution and delivery
/// failures land here. Callers inside batch jobs log these and move on
/// to the next student instead of aborting the batch.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Student has neither a guardian email address nor a phone number on
    /// file, so no channel can carry the notice.
    #[error("Student {0} has no guardian contact details")]
    NoContact(i32),

    /// The email provider rejected or failed the dispatch.
    #[error("Email dispatch failed: {0}")]
    Email(String),

    /// The SMS provider rejected or failed the dispatch.
    #[error("SMS dispatch failed: {0}")]
    Sms(String),
}
