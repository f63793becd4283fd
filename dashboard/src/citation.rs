//! Citation overlay: renders registry entries to markup and toggles the
//! source modal on the render surface.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use audit_dataset::citations::{Block, LinkTarget};
use audit_dataset::{CitationEntry, CitationError, CitationRegistry};
use pulldown_cmark::{html, Event, Parser, Tag, TagEnd};
use serde::Serialize;
use tracing::debug;

use crate::renderer::escape_html;
use crate::surface::{MountPoint, RenderStatus, RenderSurface};

/// Whether the overlay is open, and on which entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Closed.
    Hidden,
    /// Open on the entry with this key.
    Showing(&'static str),
}

/// The source modal, bound to a registry.
#[derive(Debug)]
pub struct CitationOverlay<'r> {
    registry: &'r CitationRegistry,
    state: OverlayState,
}

impl<'r> CitationOverlay<'r> {
    /// Creates a closed overlay.
    #[must_use]
    pub fn new(registry: &'r CitationRegistry) -> Self {
        Self {
            registry,
            state: OverlayState::Hidden,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Fills the modal with the entry for `key` and reveals it.
    ///
    /// The key is resolved before the surface is consulted, so an unknown key
    /// is reported even when the modal is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::UnknownKey`] if `key` is not registered. The
    /// overlay state is left unchanged.
    pub fn show(
        &mut self,
        key: &str,
        surface: &mut dyn RenderSurface,
    ) -> Result<RenderStatus, CitationError> {
        let entry = self.registry.resolve(key)?;
        if !surface.has_mount(MountPoint::SourceModal) {
            debug!(key, "source modal absent; citation not shown");
            return Ok(RenderStatus::SkippedMissingMount);
        }
        surface.set_markup(MountPoint::ModalTitle, escape_html(entry.title));
        surface.set_markup(MountPoint::ModalBody, render_citation_html(entry));
        surface.set_visible(MountPoint::SourceModal, true);
        self.state = OverlayState::Showing(entry.key);
        Ok(RenderStatus::Rendered)
    }

    /// Hides the modal.
    pub fn close(&mut self, surface: &mut dyn RenderSurface) -> RenderStatus {
        if !surface.has_mount(MountPoint::SourceModal) {
            return RenderStatus::SkippedMissingMount;
        }
        surface.set_visible(MountPoint::SourceModal, false);
        self.state = OverlayState::Hidden;
        RenderStatus::Rendered
    }
}

/// Renders inline Markdown (`**bold**`, `*em*`, links) without a wrapping
/// paragraph.
#[must_use]
pub fn inline_markdown(text: &str) -> String {
    let parser = Parser::new(text).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

/// Renders an entry's content blocks to a markup fragment.
#[must_use]
pub fn render_citation_html(entry: &CitationEntry) -> String {
    let mut out = String::new();
    for block in entry.content {
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading(text) => {
            let _ = writeln!(out, "<h4>{}</h4>", inline_markdown(text));
        }
        Block::Highlight(rows) => {
            out.push_str("<div class=\"data-highlight\">\n");
            let lines: Vec<String> = rows
                .iter()
                .map(|(label, value)| {
                    format!(
                        "<strong>{}:</strong> {}",
                        escape_html(label),
                        inline_markdown(value)
                    )
                })
                .collect();
            out.push_str(&lines.join("<br>\n"));
            out.push_str("\n</div>\n");
        }
        Block::List(items) => {
            out.push_str("<ul>\n");
            for item in *items {
                let _ = writeln!(out, "<li>{}</li>", inline_markdown(item));
            }
            out.push_str("</ul>\n");
        }
        Block::Warning(text) => {
            let _ = writeln!(out, "<div class=\"warning-box\">{}</div>", inline_markdown(text));
        }
        Block::Calculation(rows) => {
            out.push_str("<div class=\"calculation-box\">\n");
            for (description, value) in *rows {
                let _ = writeln!(
                    out,
                    "<div class=\"calc-line\"><span>{}</span><span>{}</span></div>",
                    inline_markdown(description),
                    inline_markdown(value)
                );
            }
            out.push_str("</div>\n");
        }
        Block::Paragraph(text) => {
            let _ = writeln!(out, "<p>{}</p>", inline_markdown(text));
        }
        Block::Link { label, target } => {
            let label = escape_html(label);
            let _ = match target {
                LinkTarget::External(url) => writeln!(
                    out,
                    "<a href=\"{}\" class=\"source-link\" target=\"_blank\" rel=\"noopener\">📎 {label}</a>",
                    escape_html(url)
                ),
                LinkTarget::Attachment(path) => writeln!(
                    out,
                    "<a href=\"{}\" class=\"source-link\" target=\"_blank\">📎 {label}</a>",
                    escape_html(path)
                ),
                LinkTarget::Citation(key) => writeln!(
                    out,
                    "<a href=\"#\" class=\"source-link\" data-citation=\"{}\">📎 {label}</a>",
                    escape_html(key)
                ),
            };
        }
    }
}

#[derive(Serialize)]
struct CitationDocument<'a> {
    title: &'a str,
    html: String,
}

/// Serializes every entry as `key → {title, html}` for the client overlay.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn citation_index_json(registry: &CitationRegistry) -> Result<String> {
    let index: BTreeMap<&str, CitationDocument<'_>> = registry
        .entries()
        .iter()
        .map(|entry| {
            (
                entry.key,
                CitationDocument {
                    title: entry.title,
                    html: render_citation_html(entry),
                },
            )
        })
        .collect();
    serde_json::to_string_pretty(&index).context("Failed to serialize citation index")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::surface::PageSurface;
    use audit_dataset::citations::keys;

    #[test]
    fn inline_markdown_renders_bold_without_paragraph() {
        assert_eq!(inline_markdown("**안산시:** 13.2%"), "<strong>안산시:</strong> 13.2%");
        assert_eq!(inline_markdown("a < b"), "a &lt; b");
    }

    #[test]
    fn show_fills_modal_and_reveals_it() {
        let registry = CitationRegistry::standard();
        let mut overlay = CitationOverlay::new(registry);
        let mut surface = PageSurface::full();
        surface.set_visible(MountPoint::SourceModal, false);

        let status = overlay.show(keys::POLICY_DOCUMENT, &mut surface);
        assert_eq!(status, Ok(RenderStatus::Rendered));
        assert_eq!(overlay.state(), OverlayState::Showing(keys::POLICY_DOCUMENT));
        assert!(surface.is_visible(MountPoint::SourceModal));
        assert_eq!(surface.markup(MountPoint::ModalTitle), Some("안산시 정책 문서"));
        assert!(surface
            .markup(MountPoint::ModalBody)
            .is_some_and(|body| body.contains("<h4>")));
    }

    #[test]
    fn close_hides_modal() {
        let mut overlay = CitationOverlay::new(CitationRegistry::standard());
        let mut surface = PageSurface::full();
        let _ = overlay.show(keys::BUDGET_DATA, &mut surface);
        assert_eq!(overlay.close(&mut surface), RenderStatus::Rendered);
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(!surface.is_visible(MountPoint::SourceModal));
    }

    #[test]
    fn unknown_key_is_reported_and_state_kept() {
        let mut overlay = CitationOverlay::new(CitationRegistry::standard());
        let mut surface = PageSurface::full();
        let _ = overlay.show(keys::TREND_DATA, &mut surface);
        let err = overlay.show("no-such-source", &mut surface);
        assert_eq!(err, Err(CitationError::UnknownKey("no-such-source".to_string())));
        assert_eq!(overlay.state(), OverlayState::Showing(keys::TREND_DATA));
    }

    #[test]
    fn missing_modal_is_a_no_op() {
        let mut overlay = CitationOverlay::new(CitationRegistry::standard());
        let mut surface = PageSurface::without(&[MountPoint::SourceModal]);
        assert_eq!(
            overlay.show(keys::WONGOK_DATA, &mut surface),
            Ok(RenderStatus::SkippedMissingMount)
        );
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert_eq!(overlay.close(&mut surface), RenderStatus::SkippedMissingMount);
        assert!(surface.markup(MountPoint::ModalBody).is_none());
    }

    #[test]
    fn cross_references_render_as_affordances() {
        let registry = CitationRegistry::standard();
        for entry in registry.entries() {
            let html = render_citation_html(entry);
            for key in entry.cross_references() {
                assert!(html.contains(&format!("data-citation=\"{key}\"")));
            }
        }
    }

    #[test]
    fn index_json_has_every_key() {
        let registry = CitationRegistry::standard();
        let json = citation_index_json(registry).expect("serialize citation index");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse JSON");
        let object = value.as_object().cloned().expect("JSON object");
        assert_eq!(object.len(), 16);
        for key in registry.keys() {
            assert!(
                object.get(key).and_then(|v| v["title"].as_str()).is_some(),
                "{key} missing from index"
            );
        }
    }
}
