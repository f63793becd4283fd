//! One entry per chart, describing the data behind it.

use super::keys;
use super::{Block, CitationEntry, LinkTarget};

/// Returns the chart data citation entries.
pub fn entries() -> Vec<CitationEntry> {
    vec![
        CitationEntry {
            key: keys::TREND_DATA,
            title: "외국인 인구 추이 데이터",
            content: &[
                Block::Heading("📊 데이터 정보"),
                Block::Highlight(&[
                    ("기간", "2018년 ~ 2024년"),
                    ("출처", "안산시청 외국인 주민 현황 연도별 통계"),
                ]),
                Block::Heading("📈 연도별 데이터"),
                Block::List(&[
                    "2018년: 78,500명 (11.1%)",
                    "2019년: 82,000명 (11.5%)",
                    "2020년: 79,000명 (11.0%) - 코로나19 영향",
                    "2021년: 85,000명 (11.8%)",
                    "2022년: 90,000명 (12.5%)",
                    "2023년: 93,500명 (12.9%)",
                    "2024년: 96,300명 (13.2%)",
                ]),
                Block::Heading("🔗 출처"),
                Block::List(&["안산시청 연도별 외국인 주민 현황", "행정안전부 외국인주민 현황 조사"]),
            ],
        },
        CitationEntry {
            key: keys::COMPARISON_DATA,
            title: "경기도 시군구 비교 데이터",
            content: &[
                Block::Heading("📊 데이터 정보"),
                Block::Highlight(&[
                    ("기준", "2024년 각 시군구 외국인 주민 현황"),
                    ("시범사업", "경기도 미등록 아동 보육지원금 (2026.1)"),
                ]),
                Block::Heading("📈 시군구별 비교"),
                Block::List(&[
                    "**안산시:** 13.2% (96,300명) - ❌ 시범사업 제외",
                    "**시흥시:** 10.1% (47,500명) - 미참여",
                    "**화성시:** 7.0% (63,000명) - ✅ 시범사업 참여",
                    "**평택시:** 6.5% (37,000명) - 미참여",
                    "**안성시:** 5.0% (9,500명) - ✅ 시범사업 참여",
                    "**이천시:** 4.0% (8,800명) - ✅ 시범사업 참여",
                ]),
                Block::Warning(
                    "**⚠️ 핵심 역설:** 외국인 비율 1위인 안산시가 시범사업에서 제외되고, \
                     3위, 5위, 6위 도시가 참여함",
                ),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "각 시군 외국인 주민 현황 통계",
                    "경기도청 미등록 아동 보육지원금 보도자료 (2025.12)",
                ]),
            ],
        },
        CitationEntry {
            key: keys::SUPPORT_DATA,
            title: "보육료 지원 현황 데이터",
            content: &[
                Block::Heading("📊 데이터 정보"),
                Block::Highlight(&[("출처", "안산시 정책 문서 (3-3-48)"), ("기준", "2024년 8월말")]),
                Block::Heading("📈 지원 현황"),
                Block::List(&[
                    "**등록 아동 지원:** 2,144명",
                    "**연장보육 지원:** 1,434명",
                    "**미등록 아동 지원:** 0명",
                ]),
                Block::Heading("💰 지원 금액"),
                Block::List(&[
                    "**0~2세:** 월 26만원 (도비 10만 + 시비 16만)",
                    "**3~5세:** 월 28만원 (도비 10만 + 시비 18만)",
                    "**미등록:** 0원 (정책 대상 제외)",
                ]),
                Block::Heading("🔗 출처"),
                Block::Link {
                    label: "📎 안산시 정책 문서 확인",
                    target: LinkTarget::Citation(keys::POLICY_DOCUMENT),
                },
            ],
        },
        CitationEntry {
            key: keys::WONGOK_DATA,
            title: "원곡동 다문화특구 데이터",
            content: &[
                Block::Heading("📊 데이터 정보"),
                Block::Highlight(&[("지역", "안산시 단원구 원곡동"), ("기준", "2024년 1월")]),
                Block::Heading("📈 주민 구성"),
                Block::List(&[
                    "**총 주민:** 20,191명",
                    "**외국인 주민:** 18,014명 (89.2%)",
                    "**내국인 주민:** 2,177명 (10.8%)",
                ]),
                Block::Heading("🏫 원곡초등학교"),
                Block::List(&["**전체 학생:** 449명", "**이주배경 학생:** 443명 (98.6%)"]),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "안산시청 다문화마을특구 현황 (2024.1)",
                    "동아일보 (2024.1)",
                    "동아일보 (2021) - 원곡초 학생 현황",
                ]),
                Block::Link {
                    label: "📎 원곡초등학교 현황 확인",
                    target: LinkTarget::Citation(keys::WONGOK_SCHOOL),
                },
            ],
        },
        CitationEntry {
            key: keys::BUDGET_DATA,
            title: "예산 분석 데이터",
            content: &[
                Block::Heading("📊 데이터 정보"),
                Block::Highlight(&[("출처", "안산시 정책 문서 (3-3-48)"), ("기준", "2025년 예산")]),
                Block::Heading("💰 현재 예산"),
                Block::List(&[
                    "**총 예산:** 72.84억원",
                    "**도비:** 10.56억원 (14.5%)",
                    "**시비:** 62.28억원 (85.5%)",
                ]),
                Block::Heading("📊 사각지대 해소 필요 예산"),
                Block::Calculation(&[
                    ("미등록 아동 추정", "1,700명"),
                    ("월 지원금", "10만원"),
                    ("연간 필요 예산", "20.4억원"),
                ]),
                Block::Highlight(&[("결론", "현재 예산의 약 28% 추가 시 사각지대 해소 가능")]),
                Block::Heading("🔗 출처"),
                Block::Link {
                    label: "📎 안산시 정책 문서 확인",
                    target: LinkTarget::Citation(keys::POLICY_DOCUMENT),
                },
            ],
        },
    ]
}
