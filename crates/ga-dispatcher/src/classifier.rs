//! Event classification — action name and category per event type.

use batch_dispatch_core::{EventKind, EventType};

pub const UNKNOWN_ACTION: &str = "batch_unknown";

/// Hit category for an event group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Push,
    InApp,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Push => "push",
            Category::InApp => "in-app",
        }
    }
}

impl From<EventKind> for Category {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Notification => Category::Push,
            EventKind::InApp => Category::InApp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub action: &'static str,
    /// `None` only for events outside both groups.
    pub category: Option<Category>,
    pub kind: Option<EventKind>,
}

impl Classification {
    pub fn is_unknown(&self) -> bool {
        self.kind.is_none()
    }
}

pub fn classify(event_type: EventType) -> Classification {
    let kind = event_type.kind();
    Classification {
        action: action_name(event_type),
        category: kind.map(Category::from),
        kind,
    }
}

pub fn action_name(event_type: EventType) -> &'static str {
    match event_type {
        EventType::NotificationReceive => "batch_notification_receive",
        EventType::NotificationOpen => "batch_notification_open",
        EventType::NotificationDismiss => "batch_notification_dismiss",
        EventType::InAppShow => "batch_in_app_show",
        EventType::InAppDismiss => "batch_in_app_dismiss",
        EventType::InAppClose => "batch_in_app_close",
        EventType::InAppAutoClose => "batch_in_app_auto_close",
        EventType::InAppGlobalTap => "batch_in_app_global_tap",
        EventType::InAppClick => "batch_in_app_click",
        EventType::Unknown => UNKNOWN_ACTION,
    }
}
