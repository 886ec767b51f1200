//! Helpers for the style URL itself.

use mapstyle_core::ResourceKind;
use mapstyle_parser::parse_locator;

use crate::endpoint::format_endpoint;
use crate::is_mapbox_url;
use crate::options::ResolverOptions;

const ACCESS_TOKEN: &str = "access_token";

/// Extract the `access_token` query value from a URL.
pub fn access_token_from_url(url: &str) -> Option<String> {
    parse_locator(url).ok()?.param(ACCESS_TOKEN).map(str::to_string)
}

/// Resolve a style URL into a fetchable endpoint.
///
/// `mapbox:` URLs are rewritten as styles, with any `access_token` they carry
/// replaced by `access_token`. Anything else, including malformed locators,
/// is returned unchanged.
pub fn normalize_style_url(url: &str, access_token: &str, options: &ResolverOptions) -> String {
    if !is_mapbox_url(url) {
        return url.to_string();
    }

    let (Ok(api), Ok(mut locator)) = (options.api_endpoint(), parse_locator(url)) else {
        return url.to_string();
    };
    locator
        .params
        .retain(|p| p.split_once('=').map_or(*p, |(key, _)| key) != ACCESS_TOKEN);

    format_endpoint(url, &locator, ResourceKind::Style, access_token, &api)
}
