//! Wire models for the catalog list endpoint.
//!
//! Field names mirror the provider's JSON exactly (serde renames where
//! Rust naming differs) so an exported array reloads field-for-field.
//! Every field defaults when missing — the provider omits fields freely
//! across catalog entries.

use serde::{Deserialize, Serialize};

use gridline_core::FetchError;

/// Image URLs by category label. All categories are optional; most
/// entries carry only a subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default, rename = "TV_BANNER")]
    pub tv_banner: Option<String>,
    #[serde(default, rename = "FEATURE_IMAGE")]
    pub feature_image: Option<String>,
    #[serde(default, rename = "GAME_BOX_ART")]
    pub box_art: Option<String>,
    #[serde(default, rename = "GAME_ICON")]
    pub icon: Option<String>,
    #[serde(default, rename = "GAME_LOGO")]
    pub logo: Option<String>,
}

/// Streaming metadata for one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GfnInfo {
    #[serde(default, rename = "playType")]
    pub play_type: String,
    #[serde(default, rename = "minimumMembershipTierLabel")]
    pub minimum_tier: String,
    #[serde(default)]
    pub status: String,
}

/// One store listing of a catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, rename = "appStore")]
    pub app_store: String,
    #[serde(default, rename = "publisherName")]
    pub publisher_name: String,
    #[serde(default, rename = "minimumSizeInBytes")]
    pub minimum_size_in_bytes: Option<i64>,
}

/// One catalog entry as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "sortName")]
    pub sort_name: String,
    #[serde(default)]
    pub id: i64,
    // `images` is null (not `{}`) for entries without any image
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub gfn: GfnInfo,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl GameRow {
    /// Store labels across variants, empty entries dropped.
    pub fn stores(&self) -> Vec<&str> {
        self.variants
            .iter()
            .map(|v| v.app_store.as_str())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Publisher names across variants, first-seen order, deduplicated.
    pub fn publishers(&self) -> Vec<&str> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.variants
            .iter()
            .map(|v| v.publisher_name.as_str())
            .filter(|s| !s.is_empty() && seen.insert(*s))
            .collect()
    }

    pub fn icon_url(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|i| i.icon.as_deref())
            .unwrap_or("")
    }

    pub fn logo_url(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|i| i.logo.as_deref())
            .unwrap_or("")
    }

    /// Flattened CSV row matching [`CSV_HEADER`].
    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.sort_name.clone(),
            self.id.to_string(),
            self.gfn.play_type.clone(),
            self.gfn.minimum_tier.clone(),
            self.gfn.status.clone(),
            self.stores().join(","),
            self.publishers().join(","),
            self.icon_url().to_string(),
            self.logo_url().to_string(),
        ]
    }
}

/// CSV column header for the flattened catalog export.
pub const CSV_HEADER: &[&str] = &[
    "title",
    "sortName",
    "id",
    "playType",
    "minTier",
    "status",
    "stores",
    "publishers",
    "icon",
    "logo",
];

/// One page of the catalog plus its continuation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<GameRow>,
    /// Opaque cursor for the next page. Meaningless when `has_next` is false.
    pub end_cursor: String,
    pub has_next: bool,
}

// Response envelope: { "data": { "apps": { pageInfo, items, numberReturned } } }

#[derive(Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
}

#[derive(Deserialize)]
struct EnvelopeData {
    apps: Option<Apps>,
}

#[derive(Deserialize)]
struct Apps {
    #[serde(rename = "pageInfo")]
    page_info: Option<PageInfo>,
    items: Option<Vec<GameRow>>,
}

#[derive(Deserialize)]
struct PageInfo {
    #[serde(default, rename = "endCursor")]
    end_cursor: String,
    #[serde(default, rename = "hasNextPage")]
    has_next_page: bool,
}

/// Parse one response body into a [`Page`].
///
/// A body that is not the expected envelope (missing `data.apps`,
/// `pageInfo` or `items`) yields [`FetchError::Malformed`].
pub fn parse_page(body: &str) -> Result<Page, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| FetchError::Malformed(format!("invalid JSON: {e}")))?;
    let apps = envelope
        .data
        .and_then(|d| d.apps)
        .ok_or_else(|| FetchError::Malformed("missing 'data.apps'".to_string()))?;
    let page_info = apps
        .page_info
        .ok_or_else(|| FetchError::Malformed("missing 'pageInfo'".to_string()))?;
    let items = apps
        .items
        .ok_or_else(|| FetchError::Malformed("missing 'items'".to_string()))?;
    Ok(Page {
        items,
        end_cursor: page_info.end_cursor,
        has_next: page_info.has_next_page,
    })
}
