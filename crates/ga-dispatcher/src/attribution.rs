//! Campaign attribution resolution.
//!
//! Each dimension is written in ascending priority order (fragment, query,
//! custom payload) on top of the per-kind defaults. A write only lands when
//! its candidate is present, so the highest-priority present value wins:
//! custom payload > query parameter > fragment > default.

use batch_dispatch_core::{EventKind, EventPayload};

use crate::deeplink::ParsedDeeplink;

pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_CONTENT: &str = "utm_content";

const DEFAULT_SOURCE: &str = "batch";
const NOTIFICATION_MEDIUM: &str = "push";
const IN_APP_MEDIUM: &str = "in-app";

/// Resolved campaign dimensions for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributionFields {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
}

impl AttributionFields {
    pub fn set_source<S: Into<String>>(&mut self, value: Option<S>) {
        overwrite(&mut self.source, value);
    }

    pub fn set_medium<S: Into<String>>(&mut self, value: Option<S>) {
        overwrite(&mut self.medium, value);
    }

    pub fn set_name<S: Into<String>>(&mut self, value: Option<S>) {
        overwrite(&mut self.name, value);
    }

    pub fn set_content<S: Into<String>>(&mut self, value: Option<S>) {
        overwrite(&mut self.content, value);
    }
}

fn overwrite<S: Into<String>>(field: &mut Option<String>, value: Option<S>) {
    if let Some(value) = value {
        *field = Some(value.into());
    }
}

/// Resolve attribution for an event of `kind`.
pub fn resolve(
    kind: EventKind,
    deeplink: Option<&ParsedDeeplink>,
    payload: &dyn EventPayload,
) -> AttributionFields {
    match kind {
        EventKind::Notification => resolve_notification(deeplink, payload),
        EventKind::InApp => resolve_in_app(deeplink, payload),
    }
}

/// Notification events: every dimension may come from the deep link.
pub fn resolve_notification(
    deeplink: Option<&ParsedDeeplink>,
    payload: &dyn EventPayload,
) -> AttributionFields {
    let mut fields = AttributionFields::default();
    fields.set_source(Some(DEFAULT_SOURCE));
    fields.set_medium(Some(NOTIFICATION_MEDIUM));

    if let Some(link) = deeplink {
        fields.set_content(link.fragment_param(UTM_CONTENT));
        fields.set_medium(link.fragment_param(UTM_MEDIUM));
        fields.set_source(link.fragment_param(UTM_SOURCE));
        fields.set_name(link.fragment_param(UTM_CAMPAIGN));

        fields.set_content(link.query_param(UTM_CONTENT));
        fields.set_medium(link.query_param(UTM_MEDIUM));
        fields.set_source(link.query_param(UTM_SOURCE));
        fields.set_name(link.query_param(UTM_CAMPAIGN));
    }

    apply_custom(&mut fields, payload);
    fields
}

/// In-app events: only content is read from the deep link, and the campaign
/// name defaults to the tracking id.
pub fn resolve_in_app(
    deeplink: Option<&ParsedDeeplink>,
    payload: &dyn EventPayload,
) -> AttributionFields {
    let mut fields = AttributionFields::default();
    fields.set_name(payload.tracking_id());
    fields.set_source(Some(DEFAULT_SOURCE));
    fields.set_medium(Some(IN_APP_MEDIUM));

    if let Some(link) = deeplink {
        fields.set_content(link.fragment_param(UTM_CONTENT));
        fields.set_content(link.query_param(UTM_CONTENT));
    }

    apply_custom(&mut fields, payload);
    fields
}

// Content is never taken from the custom payload.
fn apply_custom(fields: &mut AttributionFields, payload: &dyn EventPayload) {
    fields.set_name(payload.custom_value(UTM_CAMPAIGN));
    fields.set_source(payload.custom_value(UTM_SOURCE));
    fields.set_medium(payload.custom_value(UTM_MEDIUM));
}
