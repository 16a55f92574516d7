use crate::shared::entity::{Entity, ID};
use thiserror::Error;

/// A `Reminder` is a one-time message that should be delivered to its
/// owner once `send_at` has passed.
///
/// The `sent` flag only ever goes from `false` to `true`. Once a `Reminder`
/// has been sent it is frozen: it can no longer be edited or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Opaque recipient reference handed to the notification channel,
    /// e.g. a Telegram chat id
    pub owner_id: String,
    pub message: String,
    /// Timestamp in millis at which the `Reminder` becomes due
    pub send_at: i64,
    pub sent: bool,
    pub created: i64,
    pub updated: i64,
}

/// Fields of a `Reminder` that can be changed while it is still pending.
/// `None` leaves the current value untouched.
#[derive(Debug, Clone, Default)]
pub struct ReminderUpdate {
    pub owner_id: Option<String>,
    pub message: Option<String>,
    pub send_at: Option<i64>,
}

#[derive(Error, Debug, PartialEq)]
pub enum LifecycleError {
    #[error("The reminder has already been sent")]
    AlreadySent,
    #[error("The owner id can not be empty")]
    EmptyOwner,
    #[error("The message can not be empty")]
    EmptyMessage,
}

impl Reminder {
    pub fn new(owner_id: String, message: String, send_at: i64, now: i64) -> Self {
        Self {
            id: Default::default(),
            owner_id,
            message,
            send_at,
            sent: false,
            created: now,
            updated: now,
        }
    }

    /// Checks the user provided fields of a new or edited `Reminder`
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.owner_id.trim().is_empty() {
            return Err(LifecycleError::EmptyOwner);
        }
        if self.message.trim().is_empty() {
            return Err(LifecycleError::EmptyMessage);
        }
        Ok(())
    }

    pub fn is_due(&self, now: i64) -> bool {
        !self.sent && self.send_at <= now
    }

    pub fn ensure_pending(&self) -> Result<(), LifecycleError> {
        if self.sent {
            Err(LifecycleError::AlreadySent)
        } else {
            Ok(())
        }
    }

    /// Applies `update` to a pending `Reminder`.
    ///
    /// A sent `Reminder` is rejected before any of the provided fields
    /// are looked at, and on error `self` is left unchanged.
    pub fn apply_update(&mut self, update: ReminderUpdate, now: i64) -> Result<(), LifecycleError> {
        self.ensure_pending()?;

        let mut edited = self.clone();
        if let Some(owner_id) = update.owner_id {
            edited.owner_id = owner_id;
        }
        if let Some(message) = update.message {
            edited.message = message;
        }
        if let Some(send_at) = update.send_at {
            edited.send_at = send_at;
        }
        edited.validate()?;
        edited.updated = now;

        *self = edited;
        Ok(())
    }

    pub fn ensure_deletable(&self) -> Result<(), LifecycleError> {
        self.ensure_pending()
    }

    pub fn mark_sent(&mut self, now: i64) {
        if !self.sent {
            self.sent = true;
            self.updated = now;
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
