//! Player markup.
//!
//! Every interpolated value goes through an escaper for the position it is
//! written to. The stream URL is written twice: into the `<source>` attribute
//! and into the `videoSrc` script literal.

use crate::config::EmbedConfig;
use crate::escape::{HtmlAttr, HtmlText, JsString};
use crate::url_policy::StreamUrl;
use std::fmt::Write;

/// MIME type announced on the `<source>` element.
const HLS_SOURCE_TYPE: &str = "application/x-mpegURL";
/// MIME type probed with `canPlayType` for native (Safari/iOS) HLS.
const NATIVE_HLS_MIME: &str = "application/vnd.apple.mpegurl";

fn flag(out: &mut String, name: &str, on: bool) {
    if on {
        out.push(' ');
        out.push_str(name);
    }
}

pub(super) fn player(url: &StreamUrl, cfg: &EmbedConfig, id: &str) -> String {
    let notice_id = format!("{id}-unsupported");
    let video = &cfg.video;

    let mut out = String::with_capacity(1024);

    // Writing into a String cannot fail.
    let _ = write!(out, "<video id=\"{}\"", HtmlAttr(id));
    flag(&mut out, "controls", video.controls);
    let _ = write!(
        out,
        " width=\"{}\" style=\"{}\"",
        HtmlAttr(&video.width),
        HtmlAttr(&video.style)
    );
    flag(&mut out, "autoplay", video.autoplay);
    flag(&mut out, "muted", video.muted);
    out.push_str(" playsinline>\n");
    let _ = writeln!(
        out,
        "    <source src=\"{}\" type=\"{}\">",
        url.attr(),
        HLS_SOURCE_TYPE
    );
    out.push_str("</video>\n");

    let _ = writeln!(
        out,
        "<p id=\"{}\" hidden>{}</p>",
        HtmlAttr(&notice_id),
        HtmlText(&cfg.unsupported_message)
    );
    let _ = writeln!(
        out,
        "<script src=\"{}\"></script>",
        HtmlAttr(&cfg.hls_js_src)
    );

    let _ = write!(
        out,
        r#"<script>
(function () {{
    var video = document.getElementById("{video_id}");
    var videoSrc = "{src}";
    if (window.Hls && Hls.isSupported()) {{
        var hls = new Hls();
        hls.loadSource(videoSrc);
        hls.attachMedia(video);
    }} else if (video.canPlayType("{native}")) {{
        video.src = videoSrc;
    }} else {{
        document.getElementById("{notice}").hidden = false;
    }}
}})();
</script>"#,
        video_id = JsString(id),
        src = url.js(),
        native = NATIVE_HLS_MIME,
        notice = JsString(&notice_id),
    );

    out
}
