//! Hit assembly using the Google Analytics hit builder key vocabulary.

use batch_dispatch_core::HitParameters;

use crate::attribution::AttributionFields;
use crate::classifier::Category;

pub const HIT_TYPE: &str = "&t";
pub const ACTION: &str = "&ea";
pub const CATEGORY: &str = "&ec";
pub const LABEL: &str = "&el";
pub const CAMPAIGN_SOURCE: &str = "&cs";
pub const CAMPAIGN_MEDIUM: &str = "&cm";
pub const CAMPAIGN_NAME: &str = "&cn";
pub const CAMPAIGN_CONTENT: &str = "&cc";
pub const TRACKING_ID: &str = "batch_tracking_id";

pub const EVENT_HIT_TYPE: &str = "event";
pub const BATCH_LABEL: &str = "batch";

/// Build the flat parameter map for one event hit. Attribution dimensions
/// that resolved to nothing are left out; `extra` entries are always emitted,
/// null values included.
pub fn assemble(
    action: &str,
    category: Option<Category>,
    fields: &AttributionFields,
    extra: &[(&str, Option<&str>)],
) -> HitParameters {
    let fixed = [
        (HIT_TYPE, Some(EVENT_HIT_TYPE)),
        (ACTION, Some(action)),
        (LABEL, Some(BATCH_LABEL)),
    ];
    let category = category.map(|c| (CATEGORY, Some(c.as_str())));
    let attribution = [
        (CAMPAIGN_SOURCE, fields.source.as_deref()),
        (CAMPAIGN_MEDIUM, fields.medium.as_deref()),
        (CAMPAIGN_NAME, fields.name.as_deref()),
        (CAMPAIGN_CONTENT, fields.content.as_deref()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_some());

    fixed
        .into_iter()
        .chain(category)
        .chain(attribution)
        .chain(extra.iter().copied())
        .collect()
}
