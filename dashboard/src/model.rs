//! Page layout: the dashboard sections and the citation affordances each one
//! carries.

use audit_dataset::citations::keys;
use serde::Serialize;

use crate::surface::MountPoint;

/// One section of the dashboard page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    /// Anchor id.
    pub id: &'static str,
    /// Section heading.
    pub heading: &'static str,
    /// One-line lead under the heading.
    pub lead: &'static str,
    /// Mount point rendered inside the section.
    pub mount: MountPoint,
    /// Citation keys offered as "source" buttons.
    pub citations: &'static [&'static str],
}

/// Dashboard sections, in page order.
pub const SECTIONS: &[Section] = &[
    Section {
        id: "trend",
        heading: "외국인 인구 추이",
        lead: "안산시 등록 외국인 주민은 2018년 이후 꾸준히 늘어 전체 인구의 13%를 넘었습니다.",
        mount: MountPoint::TrendChart,
        citations: &[keys::TREND_DATA, keys::FOREIGNER_POPULATION],
    },
    Section {
        id: "wongok",
        heading: "원곡동 다문화특구",
        lead: "원곡동 주민 10명 중 9명이 외국인입니다.",
        mount: MountPoint::WongokChart,
        citations: &[keys::WONGOK_DATA, keys::WONGOK_STATS, keys::WONGOK_SCHOOL],
    },
    Section {
        id: "perception",
        heading: "선입견 vs 현실",
        lead: "다문화 선도 도시라는 이미지와 정책 문서가 보여주는 현실은 다릅니다.",
        mount: MountPoint::PerceptionCards,
        citations: &[keys::POLICY_DOCUMENT],
    },
    Section {
        id: "support",
        heading: "보육료 지원 현황",
        lead: "등록 아동은 지원받지만 미등록 아동은 한 명도 지원받지 못합니다.",
        mount: MountPoint::SupportChart,
        citations: &[
            keys::SUPPORT_DATA,
            keys::UNREGISTERED_SUPPORT,
            keys::UNREGISTERED_ESTIMATION,
            keys::MOJ_STATS,
            keys::NGO_ESTIMATION,
        ],
    },
    Section {
        id: "comparison",
        heading: "경기도 시군 비교",
        lead: "외국인 비율 1위 도시가 경기도 시범사업에서 빠졌습니다.",
        mount: MountPoint::ComparisonChart,
        citations: &[
            keys::COMPARISON_DATA,
            keys::GYEONGGI_PILOT,
            keys::FOREIGNER_RATIO_COMPARISON,
        ],
    },
    Section {
        id: "budget",
        heading: "예산 분석",
        lead: "미등록 아동까지 지원하는 데 필요한 추가 예산입니다.",
        mount: MountPoint::BudgetChart,
        citations: &[keys::BUDGET_DATA, keys::BUDGET_ESTIMATION],
    },
    Section {
        id: "timeline",
        heading: "정책 타임라인",
        lead: "외국인 아동 보육 정책의 주요 사건입니다.",
        mount: MountPoint::PolicyTimeline,
        citations: &[keys::POLICY_DOCUMENT],
    },
];

/// Citation key offered from the page footer.
pub const FOOTER_CITATION: &str = keys::POLICY_DOCUMENT;

/// Every citation key the page can ask the overlay to show, in page order,
/// with duplicates.
pub fn affordance_keys() -> impl Iterator<Item = &'static str> {
    SECTIONS
        .iter()
        .flat_map(|section| section.citations.iter().copied())
        .chain(std::iter::once(FOOTER_CITATION))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use audit_dataset::CitationRegistry;

    #[test]
    fn every_affordance_resolves() {
        assert!(CitationRegistry::standard()
            .verify_keys(affordance_keys())
            .is_ok());
    }

    #[test]
    fn every_registry_entry_is_reachable_from_the_page() {
        let offered: Vec<&str> = affordance_keys().collect();
        for key in CitationRegistry::standard().keys() {
            assert!(offered.contains(&key), "{key} has no affordance");
        }
    }

    #[test]
    fn sections_cover_content_mounts_once() {
        let mut mounts: Vec<MountPoint> = SECTIONS.iter().map(|s| s.mount).collect();
        mounts.sort();
        mounts.dedup();
        assert_eq!(mounts.len(), SECTIONS.len());
        assert_eq!(mounts.len(), 7);
    }
}
