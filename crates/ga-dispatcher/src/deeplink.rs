//! Deep-link attribution extraction — query string and fragment lookup.

use std::collections::HashMap;

use batch_dispatch_core::{DispatchError, DispatchResult};
use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

/// Base that scheme-less and relative deep links are resolved against, so
/// their query and fragment stay readable.
const RELATIVE_BASE: &str = "deeplink://relative/";

/// A parsed deep link exposing its query parameters and `key=value` fragment
/// pairs for attribution lookups.
#[derive(Debug, Clone)]
pub struct ParsedDeeplink {
    url: Url,
    fragment: HashMap<String, String>,
}

impl ParsedDeeplink {
    /// Trim and parse a raw deep link. Relative links (`batch.com?...`,
    /// `/promo?...`) are accepted; anything else that does not parse is a
    /// [`DispatchError::MalformedDeeplink`].
    pub fn parse(raw: &str) -> DispatchResult<Self> {
        let trimmed = raw.trim();
        let url = match Url::parse(trimmed) {
            Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse(RELATIVE_BASE).and_then(|base| base.join(trimmed))
            }
            parsed => parsed,
        }
        .map_err(|source| DispatchError::MalformedDeeplink {
            deeplink: trimmed.to_string(),
            source,
        })?;

        let fragment = match url.fragment() {
            Some(raw_fragment) if !raw_fragment.is_empty() => {
                let decoded = percent_decode_str(raw_fragment).decode_utf8_lossy();
                parse_fragment(&decoded)
            }
            _ => HashMap::new(),
        };

        Ok(Self { url, fragment })
    }

    /// Parse an optional deep link. `None` in, `None` out.
    pub fn parse_optional(raw: Option<&str>) -> DispatchResult<Option<Self>> {
        raw.map(Self::parse).transpose()
    }

    /// Value of the first query parameter whose name matches `name`,
    /// ignoring ASCII case.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.into_owned())
    }

    /// Fragment value for `name`. Fragment keys are stored lowercased, so
    /// `name` is expected in lowercase.
    pub fn fragment_param(&self, name: &str) -> Option<&str> {
        self.fragment.get(name).map(String::as_str)
    }
}

/// Split an already-decoded fragment into `lowercase(key) -> value` pairs.
/// Tokens without `=` or with an empty value are dropped; only the first `=`
/// separates key from value.
fn parse_fragment(fragment: &str) -> HashMap<String, String> {
    fragment
        .split('&')
        .filter_map(|token| token.split_once('='))
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_lowercase(), value.to_string()))
        .collect()
}
