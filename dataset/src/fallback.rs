//! Embedded copy of the dataset, used whenever retrieval fails.
//!
//! Every figure here is a literal. The zero-support and estimate values are
//! narrative claims taken from the policy documents, not derived data.

use crate::model::{
    BudgetAnalysis, Dataset, EventKind, GapSeverity, PerceptionGap, RegionComparison,
    SupportStatus, TimelineEvent, TrendPoint, WongokZone,
};

/// Builds the embedded dataset.
pub(crate) fn dataset() -> Dataset {
    Dataset {
        metadata: None,
        trend: vec![
            trend(2018, 78_500, 11.1),
            trend(2019, 82_000, 11.5),
            trend(2020, 79_000, 11.0),
            trend(2021, 85_000, 11.8),
            trend(2022, 90_000, 12.5),
            trend(2023, 93_500, 12.9),
            trend(2024, 96_300, 13.2),
        ],
        comparison: vec![
            region("안산시", 13.2, false),
            region("시흥시", 10.1, false),
            region("화성시", 7.0, true),
            region("수원시", 4.8, false),
            region("안성시", 5.0, true),
            region("이천시", 4.0, true),
        ],
        support: SupportStatus {
            registered_children_supported: 2_144,
            estimated_unregistered_min: 814,
            estimated_unregistered_max: 2_640,
        },
        perception: vec![
            gap(
                "외국인 지원 수준",
                "선도적",
                "미등록 아동 0% 지원",
                GapSeverity::Critical,
            ),
            gap(
                "시범사업 참여",
                "당연히 포함",
                "경기도 사업에서 제외",
                GapSeverity::Critical,
            ),
            gap(
                "정책 형평성",
                "내외국인 차별 없음",
                "'등록' 외국인만 대상",
                GapSeverity::High,
            ),
            gap(
                "미등록 아동 규모",
                "소수 (수십명)",
                "최소 814명 ~ 최대 2,640명",
                GapSeverity::Critical,
            ),
        ],
        wongok: WongokZone {
            foreign_residents: 18_014,
            korean_residents: 2_177,
            foreign_ratio: 89.2,
        },
        budget: BudgetAnalysis {
            current_budget: 7_284_000_000,
            additional_needed_for_unregistered: 2_040_000_000,
        },
        timeline: vec![
            event("2018.07", "외국인아동 보육료 지원 시작", EventKind::Positive),
            event("2024.12", "행안부 우수상 수상", EventKind::Positive),
            event("2026.01", "경기도 시범사업에서 제외", EventKind::Negative),
        ],
    }
}

fn trend(year: i32, foreign_population: u64, ratio: f64) -> TrendPoint {
    TrendPoint {
        year,
        foreign_population,
        ratio,
    }
}

fn region(name: &str, foreign_ratio: f64, pilot_program: bool) -> RegionComparison {
    RegionComparison {
        region: name.to_string(),
        foreign_ratio,
        pilot_program,
    }
}

fn gap(category: &str, perception: &str, reality: &str, gap_severity: GapSeverity) -> PerceptionGap {
    PerceptionGap {
        category: category.to_string(),
        perception: perception.to_string(),
        reality: reality.to_string(),
        gap_severity,
    }
}

fn event(date: &str, text: &str, kind: EventKind) -> TimelineEvent {
    TimelineEvent {
        date: date.to_string(),
        event: text.to_string(),
        kind,
    }
}
