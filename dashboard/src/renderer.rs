//! HTML rendering for the dashboard page and the error notice page.

use std::fmt::Write as _;

use audit_dataset::{CitationRegistry, Dataset};

use crate::charts::{budget, format_count, support};
use crate::model::{Section, FOOTER_CITATION, SECTIONS};
use crate::provider::DatasetOrigin;
use crate::surface::{MountPoint, PageSurface, RenderSurface};

/// Page title used when the dataset carries no metadata.
pub const DEFAULT_TITLE: &str = "안산시 외국인 아동 보육 정책 감사";

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Inputs for [`render_dashboard`].
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Dataset being displayed.
    pub dataset: &'a Dataset,
    /// Where the dataset came from.
    pub origin: &'a DatasetOrigin,
    /// Surface holding the rendered markup and chart specs.
    pub surface: &'a PageSurface,
    /// Registry backing the source buttons.
    pub registry: &'a CitationRegistry,
    /// Serialized chart specs, embedded for the client script.
    pub chart_specs_json: &'a str,
    /// Serialized citation index, embedded for the client script.
    pub citations_json: &'a str,
}

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Makes JSON safe to embed in a `<script>` element.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Returns the page title for `dataset`.
#[must_use]
pub fn page_title(dataset: &Dataset) -> &str {
    dataset
        .metadata
        .as_ref()
        .map(|m| m.title.as_str())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

/// Wraps page content in the shell: `main_html` inside `<main>`, then
/// `trailer` (footer, dialogs) and `scripts` before `</body>`.
#[must_use]
pub fn render_page(title: &str, main_html: &str, trailer: &str, scripts: &str) -> String {
    let title = escape_html(title);
    format!(
        r##"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="css/style.css">
</head>
<body>
<a href="#main-content" class="skip-link">본문으로 건너뛰기</a>
<header class="site-header">
<span class="site-logo">{title}</span>
</header>
<main id="main-content">
{main_html}</main>
{trailer}{scripts}
</body>
</html>
"##
    )
}

/// Renders the complete dashboard page.
#[must_use]
pub fn render_dashboard(ctx: &PageContext<'_>) -> String {
    let mut main_html = render_hero(ctx.dataset);
    for section in SECTIONS {
        main_html.push_str(&render_section(section, ctx));
    }
    let trailer = render_footer(ctx) + &render_modal(ctx.surface);

    let scripts = format!(
        r#"<script id="chart-specs" type="application/json">{}</script>
<script id="citation-index" type="application/json">{}</script>
<script src="{CHART_JS_URL}"></script>
<script src="js/dashboard.js"></script>
"#,
        escape_script_json(ctx.chart_specs_json),
        escape_script_json(ctx.citations_json),
    );
    render_page(page_title(ctx.dataset), &main_html, &trailer, &scripts)
}

fn render_hero(dataset: &Dataset) -> String {
    let mut stats = String::new();
    if let Some(latest) = dataset.trend.last() {
        push_stat(
            &mut stats,
            &format!("{:.1}%", latest.ratio),
            &format!("외국인 주민 비율 ({}년)", latest.year),
        );
    }
    let s = &dataset.support;
    push_stat(
        &mut stats,
        &format!(
            "{}~{}명",
            format_count(s.estimated_unregistered_min),
            format_count(s.estimated_unregistered_max)
        ),
        "미등록 아동 추정",
    );
    push_stat(
        &mut stats,
        &format!("{}명", format_count(support::UNREGISTERED_SUPPORTED)),
        "보육료 지원받는 미등록 아동",
    );
    push_stat(
        &mut stats,
        &format!(
            "{}억원",
            budget::display_eok(dataset.budget.additional_needed_for_unregistered)
        ),
        "추가 필요 예산",
    );
    format!(
        r#"<section id="hero" class="hero-section">
<div class="hero-content">
<h1>{}</h1>
<div class="hero-stats">
{stats}</div>
</div>
</section>
"#,
        escape_html(page_title(dataset))
    )
}

fn push_stat(out: &mut String, value: &str, label: &str) {
    let _ = writeln!(
        out,
        r#"<div class="stat-card"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
        escape_html(value),
        escape_html(label)
    );
}

fn render_section(section: &Section, ctx: &PageContext<'_>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section id="{id}" class="dashboard-section">
<div class="section-header">
<h2>{heading}</h2>
<p class="section-lead">{lead}</p>
</div>
"#,
        id = section.id,
        heading = escape_html(section.heading),
        lead = escape_html(section.lead),
    );
    html.push_str(&render_mount(section, ctx.surface));
    html.push_str("<div class=\"source-buttons\">\n");
    for key in section.citations {
        html.push_str(&source_button(key, ctx.registry));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn render_mount(section: &Section, surface: &PageSurface) -> String {
    let mount = section.mount;
    if !surface.has_mount(mount) {
        return String::new();
    }
    let id = mount.id();
    match mount {
        MountPoint::PerceptionCards => format!(
            "<div id=\"{id}\" class=\"perception-grid\">\n{}</div>\n",
            surface.markup(mount).unwrap_or_default()
        ),
        MountPoint::PolicyTimeline => format!(
            "<div id=\"{id}\" class=\"timeline\">\n{}</div>\n",
            surface.markup(mount).unwrap_or_default()
        ),
        _ => format!(
            "<div class=\"chart-container\"><canvas id=\"{id}\" role=\"img\" aria-label=\"{}\"></canvas></div>\n",
            escape_html(section.heading)
        ),
    }
}

fn source_button(key: &str, registry: &CitationRegistry) -> String {
    let label = registry.lookup(key).map_or(key, |entry| entry.title);
    format!(
        "<button type=\"button\" class=\"source-btn\" data-citation=\"{}\">📎 {}</button>\n",
        escape_html(key),
        escape_html(label)
    )
}

fn render_footer(ctx: &PageContext<'_>) -> String {
    let mut html = String::from("<footer class=\"site-footer\">\n");
    if let Some(metadata) = &ctx.dataset.metadata {
        if !metadata.data_sources.is_empty() {
            html.push_str("<ul class=\"data-sources\">\n");
            for source in &metadata.data_sources {
                let _ = writeln!(
                    html,
                    "<li>{} ({})</li>",
                    escape_html(&source.name),
                    escape_html(&source.date)
                );
            }
            html.push_str("</ul>\n");
        }
    }
    if let DatasetOrigin::Fallback { .. } = ctx.origin {
        html.push_str(
            "<p class=\"data-notice\">데이터를 불러오지 못해 내장 데이터를 표시합니다.</p>\n",
        );
    }
    html.push_str(&source_button(FOOTER_CITATION, ctx.registry));
    html.push_str("</footer>\n");
    html
}

fn render_modal(surface: &PageSurface) -> String {
    if !surface.has_mount(MountPoint::SourceModal) {
        return String::new();
    }
    let class = if surface.is_visible(MountPoint::SourceModal) {
        "modal active"
    } else {
        "modal"
    };
    let mut html = format!(
        "<div id=\"source-modal\" class=\"{class}\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"modal-title\">\n<div class=\"modal-content\">\n<button type=\"button\" class=\"modal-close\" aria-label=\"닫기\">&times;</button>\n"
    );
    if surface.has_mount(MountPoint::ModalTitle) {
        let _ = writeln!(
            html,
            "<h3 id=\"modal-title\">{}</h3>",
            surface.markup(MountPoint::ModalTitle).unwrap_or_default()
        );
    }
    if surface.has_mount(MountPoint::ModalBody) {
        let _ = writeln!(
            html,
            "<div id=\"modal-body\" class=\"modal-body\">{}</div>",
            surface.markup(MountPoint::ModalBody).unwrap_or_default()
        );
    }
    html.push_str("</div>\n</div>\n");
    html
}

/// Renders the notice page written when the dashboard cannot be produced.
#[must_use]
pub fn render_error_page(summary: &str, details: &[String]) -> String {
    let mut body = String::from(
        "<section class=\"error-notice\">\n<h1>대시보드를 생성할 수 없습니다</h1>\n",
    );
    let _ = writeln!(body, "<p>{}</p>", escape_html(summary));
    if !details.is_empty() {
        body.push_str("<ul>\n");
        for detail in details {
            let _ = writeln!(body, "<li><code>{}</code></li>", escape_html(detail));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");
    let footer = "<footer class=\"site-footer\">\n<p>데이터를 확인한 뒤 다시 생성하세요.</p>\n</footer>\n";
    render_page(DEFAULT_TITLE, &body, footer, "")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn render(surface: &PageSurface, origin: &DatasetOrigin) -> String {
        render_dashboard(&PageContext {
            dataset: Dataset::fallback(),
            origin,
            surface,
            registry: CitationRegistry::standard(),
            chart_specs_json: "[]",
            citations_json: "{}",
        })
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn page_shell_has_required_landmarks() {
        let html = render(&PageSurface::full(), &DatasetOrigin::Embedded);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ko\">"));
        assert!(html.contains(&format!("<title>{DEFAULT_TITLE}</title>")));
        assert!(html.contains("<main id=\"main-content\">"));
        assert!(html.contains("<footer class=\"site-footer\">"));
        assert_eq!(html.matches("</main>").count(), 1);
    }

    #[test]
    fn every_mount_id_is_on_the_full_page() {
        let html = render(&PageSurface::full(), &DatasetOrigin::Embedded);
        for mount in MountPoint::ALL {
            assert!(html.contains(&format!("id=\"{}\"", mount.id())), "{} missing", mount.id());
        }
    }

    #[test]
    fn omitted_mount_is_left_off() {
        let surface = PageSurface::without(&[MountPoint::BudgetChart]);
        let html = render(&surface, &DatasetOrigin::Embedded);
        assert!(!html.contains("id=\"budget-chart\""));
        assert!(html.contains("id=\"trend-chart\""));
    }

    #[test]
    fn hero_shows_headline_figures() {
        let html = render(&PageSurface::full(), &DatasetOrigin::Embedded);
        assert!(html.contains("13.2%"));
        assert!(html.contains("814~2,640명"));
        assert!(html.contains("20.4억원"));
    }

    #[test]
    fn fallback_origin_adds_notice() {
        let origin = DatasetOrigin::Fallback {
            source: "data/chart_data.json".to_string(),
            reason: "missing".to_string(),
        };
        assert!(render(&PageSurface::full(), &origin).contains("data-notice"));
        assert!(!render(&PageSurface::full(), &DatasetOrigin::Embedded).contains("data-notice"));
    }

    #[test]
    fn embedded_json_cannot_close_the_script() {
        assert_eq!(escape_script_json(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }

    #[test]
    fn error_page_lists_details() {
        let html = render_error_page("invalid dataset", &["support: min > max".to_string()]);
        assert!(html.contains("<html lang=\"ko\">"));
        assert!(html.contains("support: min &gt; max"));
        assert!(!html.contains("chart-specs"));
    }
}
