//! WebAssembly bindings for mapstyle.
//!
//! Exposes the style rewriter to the plugin host.
//!
//! ## Example
//!
//! ```js
//! import { rewriteStyle, accessTokenFromUrl, normalizeStyleUrl } from 'mapstyle';
//!
//! const token = accessTokenFromUrl(styleUrl) ?? '';
//! const response = await fetch(normalizeStyleUrl(styleUrl, token));
//! const style = rewriteStyle(await response.json(), token);
//! map.setStyle(style);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use mapstyle_core::StyleDocument;
use mapstyle_resolver::{self as resolver, ResolverOptions};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the bindings.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Whether a URL uses the `mapbox:` scheme.
#[wasm_bindgen(js_name = isMapboxUrl)]
pub fn is_mapbox_url(url: &str) -> bool {
    resolver::is_mapbox_url(url)
}

/// Rewrite a parsed style object.
///
/// The object passed in is not mutated. The result is a new object; callers
/// must use the return value.
#[wasm_bindgen(js_name = rewriteStyle)]
pub fn rewrite_style(style: JsValue, access_token: &str) -> Result<JsValue, JsError> {
    StyleRewriter::new().rewrite(style, access_token)
}

/// Rewrite a style given as JSON text.
#[wasm_bindgen(js_name = rewriteStyleJson)]
pub fn rewrite_style_json(json: &str, access_token: &str) -> Result<String, JsError> {
    resolver::rewrite_style_json(json, access_token)
        .map_err(|e| JsError::new(&format!("Style rewrite error: {}", e)))
}

/// Resolve a style URL into a fetchable endpoint.
#[wasm_bindgen(js_name = normalizeStyleUrl)]
pub fn normalize_style_url(url: &str, access_token: &str) -> String {
    resolver::normalize_style_url(url, access_token, &ResolverOptions::default())
}

/// Extract the `access_token` query value from a URL.
#[wasm_bindgen(js_name = accessTokenFromUrl)]
pub fn access_token_from_url(url: &str) -> Option<String> {
    resolver::access_token_from_url(url)
}

/// Rewriter with custom options.
#[wasm_bindgen]
pub struct StyleRewriter {
    options: ResolverOptions,
}

impl Default for StyleRewriter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl StyleRewriter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            options: ResolverOptions::default(),
        }
    }

    /// Create a rewriter from an options object, e.g. `{ apiUrl: "https://..." }`.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(options: JsValue) -> Result<StyleRewriter, JsError> {
        let options: ResolverOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        Ok(Self { options })
    }

    #[wasm_bindgen(getter, js_name = apiUrl)]
    pub fn api_url(&self) -> String {
        self.options.api_url.clone()
    }

    /// Rewrite a parsed style object into a new one, leaving `style` as it was.
    pub fn rewrite(&self, style: JsValue, access_token: &str) -> Result<JsValue, JsError> {
        let mut doc: StyleDocument = serde_wasm_bindgen::from_value(style)
            .map_err(|e| JsError::new(&format!("Invalid style: {}", e)))?;

        resolver::rewrite_style_document_with(&mut doc, access_token, &self.options);

        doc.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Resolve a style URL into a fetchable endpoint.
    #[wasm_bindgen(js_name = normalizeStyleUrl)]
    pub fn normalize_style_url(&self, url: &str, access_token: &str) -> String {
        resolver::normalize_style_url(url, access_token, &self.options)
    }
}
