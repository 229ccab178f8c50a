use std::sync::Arc;

use crate::views::escape_html;

/// Layout
///
/// The persistent chrome (navigation, header) that wraps every protected
/// view. It receives the view's markup as an opaque child and must pass it
/// through unchanged.
pub trait Layout: Send + Sync {
    fn frame(&self, child: &str) -> String;
}

/// LayoutState
///
/// Trait object shared through the application state, the same way the
/// other collaborators are injected.
pub type LayoutState = Arc<dyn Layout>;

/// MainLayout
///
/// Emits the slots the browser bundle fills with its navigation and header
/// components, with the routed view placed in the content slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout;

impl Layout for MainLayout {
    fn frame(&self, child: &str) -> String {
        format!(
            concat!(
                r#"<div data-layout="main">"#,
                r#"<header data-slot="header"></header>"#,
                r#"<nav data-slot="navigation"></nav>"#,
                r#"<main data-slot="content">{}</main>"#,
                "</div>"
            ),
            child
        )
    }
}

/// Wraps rendered body markup in the HTML document that boots the browser bundle.
pub fn document(title: &str, script_src: &str, body: &str) -> String {
    format!(
        concat!(
            "<!doctype html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<script type="module" src="{script}"></script>"#,
            "</head>",
            r#"<body><div id="root">{body}</div></body>"#,
            "</html>"
        ),
        title = escape_html(title),
        script = escape_html(script_src),
        body = body,
    )
}
