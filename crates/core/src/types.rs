use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Lifecycle event emitted by the host engagement SDK.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    NotificationReceive,
    NotificationOpen,
    NotificationDismiss,
    InAppShow,
    InAppDismiss,
    InAppClose,
    InAppAutoClose,
    InAppGlobalTap,
    InAppClick,
    /// Identifier this version does not know about.
    #[serde(other)]
    Unknown,
}

/// The two disjoint event groups. Attribution rules differ per group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Notification,
    InApp,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::NotificationReceive,
        EventType::NotificationOpen,
        EventType::NotificationDismiss,
        EventType::InAppShow,
        EventType::InAppDismiss,
        EventType::InAppClose,
        EventType::InAppAutoClose,
        EventType::InAppGlobalTap,
        EventType::InAppClick,
    ];

    /// Group membership; `None` for [`EventType::Unknown`].
    pub fn kind(self) -> Option<EventKind> {
        match self {
            EventType::NotificationReceive
            | EventType::NotificationOpen
            | EventType::NotificationDismiss => Some(EventKind::Notification),
            EventType::InAppShow
            | EventType::InAppDismiss
            | EventType::InAppClose
            | EventType::InAppAutoClose
            | EventType::InAppGlobalTap
            | EventType::InAppClick => Some(EventKind::InApp),
            EventType::Unknown => None,
        }
    }

    pub fn is_notification_event(self) -> bool {
        self.kind() == Some(EventKind::Notification)
    }

    pub fn is_in_app_event(self) -> bool {
        self.kind() == Some(EventKind::InApp)
    }
}

/// Read-only view over one event occurrence, as handed over by the host.
pub trait EventPayload {
    /// In-app campaign tracking identifier.
    fn tracking_id(&self) -> Option<&str>;

    /// Raw deep link, possibly padded with whitespace.
    fn deeplink(&self) -> Option<&str>;

    /// Value of a custom payload key, if present.
    fn custom_value(&self, key: &str) -> Option<&str>;

    /// Whether the user acted on the message (opened, clicked a CTA).
    fn is_positive_action(&self) -> bool {
        false
    }
}

/// Owned payload, used by hosts that hand events over as data and by the
/// replay tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SdkPayload {
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub deeplink: Option<String>,
    #[serde(default)]
    pub custom: HashMap<String, String>,
    #[serde(default)]
    pub positive_action: bool,
}

impl SdkPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    pub fn with_deeplink(mut self, deeplink: impl Into<String>) -> Self {
        self.deeplink = Some(deeplink.into());
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }
}

impl EventPayload for SdkPayload {
    fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    fn deeplink(&self) -> Option<&str> {
        self.deeplink.as_deref()
    }

    fn custom_value(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    fn is_positive_action(&self) -> bool {
        self.positive_action
    }
}

/// Flat parameter map for one outbound hit. Keys are unique; a `None` value
/// is emitted as an explicit null rather than omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HitParameters(BTreeMap<String, Option<String>>);

impl HitParameters {
    /// String value of `key`; `None` when the key is absent or null.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when `key` is present with a null value.
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(None))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Option<String>> {
        self.0
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for HitParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_partition() {
        let notifications = EventType::ALL
            .iter()
            .filter(|t| t.is_notification_event())
            .count();
        let in_app = EventType::ALL.iter().filter(|t| t.is_in_app_event()).count();
        assert_eq!(notifications, 3);
        assert_eq!(in_app, 6);
        assert_eq!(EventType::Unknown.kind(), None);
    }

    #[test]
    fn test_event_type_deserialize() {
        let t: EventType = serde_json::from_str("\"in_app_auto_close\"").unwrap();
        assert_eq!(t, EventType::InAppAutoClose);

        let t: EventType = serde_json::from_str("\"notification_open\"").unwrap();
        assert_eq!(t, EventType::NotificationOpen);

        let t: EventType = serde_json::from_str("\"webview_click\"").unwrap();
        assert_eq!(t, EventType::Unknown);
    }

    #[test]
    fn test_payload_lookup() {
        let payload = SdkPayload::new()
            .with_tracking_id("campaign-7")
            .with_custom("utm_medium", "654987");

        assert_eq!(payload.tracking_id(), Some("campaign-7"));
        assert_eq!(payload.deeplink(), None);
        assert_eq!(payload.custom_value("utm_medium"), Some("654987"));
        assert_eq!(payload.custom_value("UTM_MEDIUM"), None);
        assert!(!payload.is_positive_action());
    }

    #[test]
    fn test_payload_deserialize_defaults() {
        let payload: SdkPayload =
            serde_json::from_str(r#"{"deeplink":"https://batch.com"}"#).unwrap();
        assert_eq!(payload.deeplink(), Some("https://batch.com"));
        assert!(payload.custom.is_empty());
        assert!(payload.tracking_id.is_none());
    }

    #[test]
    fn test_hit_parameters_null_values() {
        let hit: HitParameters = [
            ("&ea", Some("batch_in_app_show")),
            ("batch_tracking_id", None),
        ]
        .into_iter()
        .collect();

        assert_eq!(hit.len(), 2);
        assert_eq!(hit.get("&ea"), Some("batch_in_app_show"));
        assert!(hit.contains_key("batch_tracking_id"));
        assert!(hit.is_null("batch_tracking_id"));
        assert_eq!(hit.get("batch_tracking_id"), None);
        assert!(!hit.contains_key("&cn"));

        let json = serde_json::to_value(&hit).unwrap();
        assert!(json["batch_tracking_id"].is_null());
        assert_eq!(json["&ea"], "batch_in_app_show");
    }
}
