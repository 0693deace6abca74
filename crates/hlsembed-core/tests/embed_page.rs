//! Integration test: expand a page containing stream tags and check the
//! emitted player against the escaping and idempotence guarantees.

use hlsembed_core::config::EmbedConfig;
use hlsembed_core::embed::{self, Rendered};
use hlsembed_core::shortcode::{self, Attributes};

const PAGE: &str = r#"<article>
<h2>Channel 44 Live</h2>
[channel44_live url="http://69.167.167.129:8088/hls/abc123.m3u8"]
<p>Schedule below.</p>
[channel44_live]
<p>Write [[channel44_live url="..."]] to embed the player.</p>
</article>
"#;

/// Attribute value of `<source src="...">`.
fn source_attr(html: &str) -> &str {
    let start = html.find("<source src=\"").unwrap() + "<source src=\"".len();
    let len = html[start..].find('"').unwrap();
    &html[start..start + len]
}

/// Double-quoted literal assigned to `videoSrc`, quotes included.
fn video_src_literal(html: &str) -> &str {
    let start = html.find("var videoSrc = ").unwrap() + "var videoSrc = ".len();
    let len = html[start..].find(";\n").unwrap();
    &html[start..start + len]
}

#[test]
fn page_expansion() {
    let cfg = EmbedConfig::default();
    let out = shortcode::expand(PAGE, &cfg.shortcode_tag, &cfg);

    assert_eq!(out.matches("<video").count(), 1);
    assert!(out.contains(r#"src="http://69.167.167.129:8088/hls/abc123.m3u8""#));
    assert!(out.contains(r#"videoSrc = "http://69.167.167.129:8088/hls/abc123.m3u8""#));
    assert!(out.contains(&format!("<p>{}</p>", cfg.usage_hint)));
    assert!(out.contains(r#"<p>Write [channel44_live url="..."] to embed the player.</p>"#));
    assert!(out.starts_with("<article>\n<h2>Channel 44 Live</h2>\n<video "));
    assert!(out.ends_with("</article>\n"));
}

#[test]
fn hostile_urls_roundtrip_in_both_contexts() {
    let cfg = EmbedConfig::default();
    let urls = [
        "http://host/a\"b.m3u8",
        "http://host/a'b.m3u8",
        "http://host/x.m3u8?t=<script>alert(1)</script>",
        "https://host/live.m3u8?a=1&b=2\\3",
        "/relative/path with space.m3u8",
    ];

    for url in urls {
        let out = embed::render_url(Some(url), &cfg);
        let html = match &out {
            Rendered::Player(html) => html.as_str(),
            Rendered::Usage(_) => panic!("{url} should render a player"),
        };

        assert_eq!(html.matches("<video").count(), 1, "{url}");
        assert_eq!(html.matches("<script").count(), 2, "{url}");

        let attr = source_attr(html);
        assert_eq!(html_escape::decode_html_entities(attr), url);

        let decoded: String = serde_json::from_str(video_src_literal(html)).unwrap();
        assert_eq!(decoded, url);
    }
}

#[test]
fn render_from_attributes_is_idempotent() {
    let cfg = EmbedConfig::default();
    let attrs: Attributes = [("url", "http://host/hls/key.m3u8")].into_iter().collect();
    let first = embed::render(&attrs, &cfg);
    let second = embed::render(&attrs, &cfg);
    assert!(first.is_player());
    assert_eq!(first.into_string().into_bytes(), second.into_string().into_bytes());
}

#[test]
fn custom_tag_and_element_id() {
    let mut cfg = EmbedConfig::default();
    cfg.shortcode_tag = "live".to_string();
    cfg.element_id = "studio-b".to_string();
    let out = shortcode::expand("[live url=https://h/s.m3u8]", &cfg.shortcode_tag, &cfg);
    assert!(out.starts_with("<video id=\"studio-b\""));
    assert!(out.contains("document.getElementById(\"studio-b\")"));
    assert!(out.contains("<p id=\"studio-b-unsupported\" hidden>"));
}
