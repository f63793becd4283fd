//! Unregistered child sources: official statistics, civil society estimates,
//! and the derived Ansan estimate range.

use super::keys;
use super::{Block, CitationEntry, LinkTarget};

/// Returns the unregistered child citation entries.
pub fn entries() -> Vec<CitationEntry> {
    vec![
        CitationEntry {
            key: keys::MOJ_STATS,
            title: "법무부 미등록 이주아동 통계",
            content: &[
                Block::Heading("📊 통계 정보"),
                Block::Highlight(&[
                    ("출처", "법무부 출입국·외국인정책본부"),
                    ("기준 시점", "2025년 1월"),
                ]),
                Block::Heading("📈 공식 통계"),
                Block::List(&[
                    "**19세 이하 미등록 이주아동:** 6,169명 (2025.1 기준)",
                    "**참고 - 2024.11 기준:** 6,296명",
                    "**참고 - 2017.12 기준:** 5,279명",
                ]),
                Block::Warning(
                    "**⚠️ 통계의 한계:** 법무부 통계는 **국내 출생 미등록 이주아동이 제외**되어 있어 \
                     실제 규모는 더 클 것으로 추정됩니다.",
                ),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "법무부 출입국·외국인정책본부 통계월보",
                    "연합뉴스 (2025) \"미등록 이주아동 6,169명\"",
                    "국회 입법조사처 보고서 (2025.10)",
                ]),
            ],
        },
        CitationEntry {
            key: keys::NGO_ESTIMATION,
            title: "시민단체 미등록 아동 추정",
            content: &[
                Block::Heading("📊 추정 정보"),
                Block::Highlight(&[
                    ("추정 주체", "이주민 인권단체, 시민사회단체"),
                    ("추정 근거", "법무부 통계 + 미포착 아동 보정"),
                ]),
                Block::Heading("📈 추정 규모"),
                Block::List(&[
                    "**보수적 추정:** 약 1만명",
                    "**확장 추정:** 약 2만명",
                    "**최대 추정:** 3만~5만명 (일부 단체)",
                ]),
                Block::Heading("🔍 추정 근거"),
                Block::List(&[
                    "법무부 통계에 미포함된 국내 출생 미등록 아동",
                    "무국적 아동 (부모 미등록으로 출생신고 불가)",
                    "단속 회피로 인한 미파악 아동",
                ]),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "이주아동권리보장기본법 제정 연대 발표 자료",
                    "국가인권위원회 보고서",
                    "미래조선 (2024) \"미등록 이주아동, 실제 2만명 넘을 것\"",
                    "매일경제 (2025) \"일부에서는 3만~5만명 추정\"",
                ]),
            ],
        },
        CitationEntry {
            key: keys::UNREGISTERED_ESTIMATION,
            title: "안산시 미등록 아동 추정 계산",
            content: &[
                Block::Heading("📊 계산 로직"),
                Block::Calculation(&[
                    ("① 전국 미등록 아동 (법무부, 2025.1)", "6,169명"),
                    ("② 안산시 외국인 비율", "13.2%"),
                    ("③ 안산시 추정 (최소) = ① × ②", "814명"),
                ]),
                Block::Calculation(&[
                    ("① 전국 미등록 아동 (시민단체 추정)", "2만명"),
                    ("② 안산시 외국인 비율", "13.2%"),
                    ("③ 안산시 추정 (최대) = ① × ②", "2,640명"),
                ]),
                Block::Highlight(&[(
                    "결론",
                    "안산시 미등록 아동은 **최소 814명 ~ 최대 2,640명**으로 추정됩니다. \
                     중간값 약 1,700명 기준으로 정책 분석을 진행했습니다.",
                )]),
                Block::Heading("⚠️ 추정의 한계"),
                Block::List(&[
                    "미등록 외국인의 특성상 정확한 통계 집계 불가",
                    "안산시 외국인 밀집 특성상 전국 비율보다 높을 수 있음",
                    "추후 실태조사를 통한 정확한 파악 필요",
                ]),
                Block::Heading("🔗 출처"),
                Block::Link {
                    label: "📎 법무부 통계 확인",
                    target: LinkTarget::Citation(keys::MOJ_STATS),
                },
                Block::Link {
                    label: "📎 시민단체 추정 확인",
                    target: LinkTarget::Citation(keys::NGO_ESTIMATION),
                },
            ],
        },
    ]
}
