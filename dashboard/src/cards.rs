//! Perception card and policy timeline markup.

use std::fmt::Write as _;

use audit_dataset::{GapSeverity, PerceptionGap, TimelineEvent};
use tracing::debug;

use crate::renderer::escape_html;
use crate::surface::{MountPoint, RenderStatus, RenderSurface};

/// Badge text for a severity.
#[must_use]
pub fn severity_badge(severity: GapSeverity) -> &'static str {
    match severity {
        GapSeverity::Critical => "⚠️ 심각",
        GapSeverity::High => "⚡ 높음",
    }
}

/// Renders one before/after card per perception gap, in order.
#[must_use]
pub fn perception_cards_html(gaps: &[PerceptionGap]) -> String {
    let mut html = String::new();
    for gap in gaps {
        let severity = gap.gap_severity.as_str();
        let _ = write!(
            html,
            r#"<div class="perception-card {severity}">
<div class="perception-header">
<span class="perception-category">{category}</span>
<span class="severity-badge {severity}">{badge}</span>
</div>
<div class="perception-compare">
<div class="perception-box before">
<div class="perception-label">당신의 생각</div>
<div class="perception-value">{perception}</div>
</div>
<div class="perception-arrow">→</div>
<div class="perception-box after">
<div class="perception-label">실제 현실</div>
<div class="perception-value">{reality}</div>
</div>
</div>
</div>
"#,
            category = escape_html(&gap.category),
            badge = severity_badge(gap.gap_severity),
            perception = escape_html(&gap.perception),
            reality = escape_html(&gap.reality),
        );
    }
    html
}

/// Renders one marker per timeline event, in the order given.
#[must_use]
pub fn timeline_html(events: &[TimelineEvent]) -> String {
    let mut html = String::new();
    for event in events {
        let _ = write!(
            html,
            r#"<div class="timeline-event {kind}">
<div class="timeline-date">{date}</div>
<div class="timeline-text">{text}</div>
</div>
"#,
            kind = event.kind.as_str(),
            date = escape_html(&event.date),
            text = escape_html(&event.event),
        );
    }
    html
}

/// Fills the perception card mount.
pub fn render_perception_cards(
    surface: &mut dyn RenderSurface,
    gaps: &[PerceptionGap],
) -> RenderStatus {
    render_into(surface, MountPoint::PerceptionCards, || perception_cards_html(gaps))
}

/// Fills the policy timeline mount.
pub fn render_timeline(surface: &mut dyn RenderSurface, events: &[TimelineEvent]) -> RenderStatus {
    render_into(surface, MountPoint::PolicyTimeline, || timeline_html(events))
}

fn render_into(
    surface: &mut dyn RenderSurface,
    mount: MountPoint,
    html: impl FnOnce() -> String,
) -> RenderStatus {
    if !surface.has_mount(mount) {
        debug!(mount = mount.id(), "mount point absent; markup skipped");
        return RenderStatus::SkippedMissingMount;
    }
    surface.set_markup(mount, html());
    RenderStatus::Rendered
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::surface::PageSurface;
    use audit_dataset::{Dataset, EventKind};

    #[test]
    fn one_card_per_gap_with_badges() {
        let html = perception_cards_html(&Dataset::fallback().perception);
        assert_eq!(html.matches(r#"<div class="perception-card "#).count(), 4);
        assert_eq!(html.matches("⚠️ 심각").count(), 3);
        assert_eq!(html.matches("⚡ 높음").count(), 1);
        assert_eq!(html.matches("당신의 생각").count(), 4);
        assert_eq!(html.matches("실제 현실").count(), 4);
    }

    #[test]
    fn card_text_is_escaped() {
        let gaps = vec![PerceptionGap {
            category: "<script>".to_string(),
            perception: "a & b".to_string(),
            reality: "\"quoted\"".to_string(),
            gap_severity: GapSeverity::High,
        }];
        let html = perception_cards_html(&gaps);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn timeline_keeps_input_order_and_type_class() {
        let events = vec![
            TimelineEvent {
                date: "2026.01".to_string(),
                event: "late".to_string(),
                kind: EventKind::Negative,
            },
            TimelineEvent {
                date: "2018.07".to_string(),
                event: "early".to_string(),
                kind: EventKind::Neutral,
            },
        ];
        let html = timeline_html(&events);
        let late = html.find("late").unwrap_or(usize::MAX);
        let early = html.find("early").unwrap_or(0);
        assert!(late < early);
        assert!(html.contains(r#"<div class="timeline-event negative">"#));
        assert!(html.contains(r#"<div class="timeline-event neutral">"#));
    }

    #[test]
    fn render_sets_markup_on_surface() {
        let mut surface = PageSurface::full();
        let dataset = Dataset::fallback();
        assert_eq!(
            render_perception_cards(&mut surface, &dataset.perception),
            RenderStatus::Rendered
        );
        assert_eq!(render_timeline(&mut surface, &dataset.timeline), RenderStatus::Rendered);
        let timeline = surface.markup(MountPoint::PolicyTimeline).expect("markup rendered");
        assert_eq!(timeline.matches("timeline-event").count(), 3);
    }

    #[test]
    fn missing_mount_is_skipped() {
        let mut surface = PageSurface::without(&[MountPoint::PolicyTimeline]);
        let dataset = Dataset::fallback();
        assert_eq!(
            render_timeline(&mut surface, &dataset.timeline),
            RenderStatus::SkippedMissingMount
        );
        assert_eq!(
            render_perception_cards(&mut surface, &dataset.perception),
            RenderStatus::Rendered
        );
    }
}
