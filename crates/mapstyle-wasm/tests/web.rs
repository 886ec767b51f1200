#![cfg(target_arch = "wasm32")]

use mapstyle_wasm::{rewrite_style, StyleRewriter};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON, js_name = parse)]
    fn json_parse(text: &str) -> JsValue;

    #[wasm_bindgen(js_namespace = JSON, js_name = stringify)]
    fn json_stringify(value: &JsValue) -> String;
}

#[wasm_bindgen_test]
fn rewrites_plain_object() {
    let style = json_parse(r#"{"glyphs":"mapbox://fonts/u/{fontstack}/{range}.pbf","projection":{"name":"globe"}}"#);
    let out = rewrite_style(style, "T").unwrap();
    assert_eq!(
        json_stringify(&out),
        r#"{"projection":{},"glyphs":"https://api.mapbox.com/fonts/v1/u/{fontstack}/{range}.pbf?access_token=T"}"#
    );
}

#[wasm_bindgen_test]
fn rewriter_uses_custom_api_url() {
    let rewriter = StyleRewriter::with_options(json_parse(r#"{"apiUrl":"https://tiles.example.com"}"#)).unwrap();
    let out = rewriter.rewrite(json_parse(r#"{"sources":{"a":{"url":"mapbox://u.t"}}}"#), "T").unwrap();
    assert_eq!(
        json_stringify(&out),
        r#"{"sources":{"a":{"url":"https://tiles.example.com/v4/u.t.json?secure&access_token=T"}}}"#
    );
}

#[wasm_bindgen_test]
fn input_object_not_mutated() {
    let text = r#"{"sources":{"a":{"url":"mapbox://u.t"}}}"#;
    let style = json_parse(text);
    let out = rewrite_style(style.clone(), "T").unwrap();
    assert_eq!(json_stringify(&style), text);
    assert_ne!(json_stringify(&out), text);
}
