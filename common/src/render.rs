//! HTMLレンダリング
//!
//! 静的ビルド時に使うマークアップ生成。ブラウザ側コンポーネントと
//! 同じ構造を出力する。埋め込む値はすべてエスケープする。

use crate::search::{AlbumView, CatalogView};
use std::fmt::Write;

/// 詳細ページの本文が無い場合の表示
pub const NO_CONTENT_BODY: &str = "No content available for this item.";

/// WASMバンドルのエントリポイント
pub const WASM_ENTRY: &str = "/pkg/arsenal_web.js";

/// HTMLエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_album_group(out: &mut String, group: &AlbumView) {
    let title = escape_html(&group.title);

    out.push_str("<section class=\"album-group\">");
    out.push_str("<div class=\"album-header\">");
    if let Some(cover) = &group.cover {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"Cover for {}\" class=\"album-cover\">",
            escape_html(cover),
            title
        );
    }
    let _ = write!(out, "<h2 class=\"album-title\">{}</h2>", title);
    out.push_str("</div>");

    out.push_str("<ul class=\"album-item-list\">");
    for item in &group.items {
        let _ = write!(
            out,
            "<li><a href=\"{}\"><span class=\"item-title\">{}</span><span class=\"item-type\">{}</span></a></li>",
            escape_html(&item.href()),
            escape_html(&item.title),
            escape_html(&item.kind)
        );
    }
    out.push_str("</ul>");
    out.push_str("</section>");
}

/// カタログ一覧のマークアップ
pub fn render_catalog_html(view: &CatalogView) -> String {
    let mut out = String::new();
    for group in &view.groups {
        render_album_group(&mut out, group);
    }
    out
}

/// 詳細ページの内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPage {
    pub title: String,
    pub album: String,
    pub kind: String,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
    pub body: Option<String>,
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// 詳細ページ (/content/<key>/)
pub fn render_content_page(page: &ContentPage) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"content-page\">");
    let _ = write!(
        body,
        "<h1 class=\"content-title\">{}</h1><p class=\"content-meta\">{} &middot; {}</p>",
        escape_html(&page.title),
        escape_html(&page.album),
        escape_html(&page.kind)
    );
    if let Some(image_url) = &page.image_url {
        let _ = write!(
            body,
            "<img src=\"{}\" alt=\"Cover for {}\" class=\"album-cover\">",
            escape_html(image_url),
            escape_html(&page.album)
        );
    }
    if let Some(audio_url) = &page.audio_url {
        let _ = write!(
            body,
            "<audio controls preload=\"none\" src=\"{}\"></audio>",
            escape_html(audio_url)
        );
    }
    let text = page.body.as_deref().unwrap_or(NO_CONTENT_BODY);
    let _ = write!(body, "<pre class=\"content-body\">{}</pre>", escape_html(text));
    body.push_str("<p><a href=\"/\">&larr; Back to catalog</a></p>");
    body.push_str("</main>");

    page_shell(&page.title, &body)
}

/// トップページ。カタログを事前描画し、WASMが起動したら置き換える
pub fn render_index_page(view: &CatalogView, site_title: &str) -> String {
    let mut body = String::new();
    body.push_str("<canvas id=\"matrix\"></canvas>");
    let _ = write!(
        body,
        "<header class=\"site-header\"><h1>{}</h1></header>",
        escape_html(site_title)
    );
    let _ = write!(
        body,
        "<div id=\"catalog\"><input id=\"q\" type=\"search\" placeholder=\"Search titles, SKUs, albums\">\
         <span id=\"count\">{}</span><div id=\"list\">{}</div></div>",
        escape_html(&view.count_label()),
        render_catalog_html(view)
    );
    let _ = write!(
        body,
        "<script type=\"module\">import init from '{}'; init();</script>",
        WASM_ENTRY
    );

    page_shell(site_title, &body)
}
