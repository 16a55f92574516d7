mod reminder;
mod shared;

pub use reminder::{LifecycleError, Reminder, ReminderUpdate};
pub use shared::entity::{Entity, InvalidIDError, ID};
