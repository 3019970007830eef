//! GraphQL-style query builder for the catalog list endpoint.
//!
//! The endpoint takes a raw query text body (not JSON-wrapped). The
//! selection covers the union of fields observed in the wild; callers
//! that do not need a field simply ignore it after parsing.

/// Escape a value interpolated into a query string literal.
///
/// Backslashes and quotes are escaped so a hostile cursor value cannot
/// break out of the literal.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Locale and ordering parameters for an `apps` query.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub country: String,
    pub language: String,
    pub order_by: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            language: "en_US".to_string(),
            order_by: "itemMetadata.gfnPopularityRank:ASC,sortName:ASC".to_string(),
        }
    }
}

/// Build one `apps` page query for the given cursor.
///
/// An empty `after` cursor denotes the start of the collection.
pub fn build_query(params: &QueryParams, after: &str) -> String {
    format!(
        "{{ apps(country:\"{}\" language:\"{}\" orderBy: \"{}\" after:\"{}\") {{ \
         numberReturned pageInfo {{ endCursor hasNextPage }} \
         items {{ title sortName id \
         images {{ TV_BANNER FEATURE_IMAGE GAME_BOX_ART GAME_ICON GAME_LOGO }} \
         gfn {{ playType minimumMembershipTierLabel status }} \
         variants {{ appStore publisherName minimumSizeInBytes }} }} }} }}",
        escape(&params.country),
        escape(&params.language),
        escape(&params.order_by),
        escape(after),
    )
}
