//! Full HTML documents around a render pass.

use crate::PageRenderer;
use pagecraft_model::Page;
use pagecraft_registry::html::escape_html;
use pagecraft_registry::{ComponentRegistry, RenderMode};

const BASE_CSS: &str = "\
body{margin:0;font-family:system-ui,sans-serif}\
.pc-component{padding:48px 24px}\
.pc-editable{position:relative;outline:1px dashed transparent}\
.pc-editable:hover{outline-color:#3b82f6}\
.pc-editable .pc-controls{visibility:hidden;position:absolute;top:8px;right:8px}\
.pc-editable:hover .pc-controls{visibility:visible}\
.pc-placeholder{border:2px dashed #ef4444;padding:24px;color:#b91c1c}";

fn shell(title: &str, mode: RenderMode, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title><style>{css}</style></head>",
            r#"<body data-mode="{mode}"><main>{body}</main></body></html>"#
        ),
        title = escape_html(title),
        css = BASE_CSS,
        mode = mode,
        body = body,
    )
}

/// Renders `page` as a complete HTML document in `mode`.
///
/// Status is not checked here; callers decide whether the page may be shown.
pub fn render_document(page: &Page, mode: RenderMode, registry: &ComponentRegistry) -> String {
    let rendered = PageRenderer::new(registry).render_page(page, mode);
    shell(&page.title, mode, &rendered.to_html())
}

/// Document served when a public page is missing or not published.
pub fn render_unavailable() -> String {
    shell(
        "Page not available",
        RenderMode::Published,
        r#"<section class="pc-unavailable"><h1>Page not available</h1><p>This page does not exist or is no longer published.</p></section>"#,
    )
}
