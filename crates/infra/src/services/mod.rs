mod notification;

pub use notification::{
    create_notification_channel, DisabledChannel, INotificationChannel,
    InMemoryNotificationChannel, Notification, TelegramChannel, WebhookChannel,
};
