//! Population sources: city-wide statistics, the Wongok-dong zone and its
//! elementary school, and the cross-region comparison.

use super::keys;
use super::{Block, CitationEntry, LinkTarget};

/// Returns the population citation entries.
pub fn entries() -> Vec<CitationEntry> {
    vec![
        CitationEntry {
            key: keys::FOREIGNER_POPULATION,
            title: "안산시 외국인 인구 통계",
            content: &[
                Block::Heading("📊 통계 정보"),
                Block::Highlight(&[
                    ("기준 시점", "2024년 1월"),
                    ("출처", "안산시청 공식 통계, 언론 보도"),
                ]),
                Block::Heading("📈 주요 수치"),
                Block::List(&[
                    "**안산시 전체 인구:** 약 730,000명",
                    "**외국인 주민:** 96,300명 (전체 인구의 13.2%)",
                    "**전국 순위:** 외국인 인구 비율 전국 1위",
                ]),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "안산시청 공식 외국인 주민 현황 통계",
                    "경인일보 (2024.01) \"안산시 외국인 96,300명, 시 전체 인구의 13.2%\"",
                    "국민일보 (2024) \"전국 최고 외국인 비중 '초다문화 사회' 안산\"",
                ]),
                Block::Link {
                    label: "🌐 안산시청 공식 웹사이트",
                    target: LinkTarget::External("https://www.ansan.go.kr"),
                },
            ],
        },
        CitationEntry {
            key: keys::WONGOK_STATS,
            title: "원곡동 다문화특구 현황",
            content: &[
                Block::Heading("📊 통계 정보"),
                Block::Highlight(&[
                    ("기준 시점", "2024년 6월"),
                    ("지역", "안산시 단원구 원곡동 (다문화마을특구)"),
                ]),
                Block::Heading("📈 주요 수치"),
                Block::List(&[
                    "**총 주민:** 약 20,191명",
                    "**외국인 주민:** 18,014명 (89.2%)",
                    "**내국인 주민:** 2,177명 (10.8%)",
                ]),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "안산시청 다문화마을특구 현황 자료 (2024.6)",
                    "동아일보 (2024.1) \"원곡동 다문화특구 내 총 20,191명 주민 중 18,014명(89.2%)이 외국인\"",
                ]),
            ],
        },
        CitationEntry {
            key: keys::WONGOK_SCHOOL,
            title: "원곡초등학교 이주배경 학생 현황",
            content: &[
                Block::Heading("📊 통계 정보"),
                Block::Highlight(&[("기준 시점", "2021년 10월"), ("학교", "안산시 원곡초등학교")]),
                Block::Heading("📈 주요 수치"),
                Block::List(&[
                    "**전체 학생:** 449명",
                    "**이주배경 학생:** 443명 (98.6%)",
                    "**비이주배경 학생:** 6명 (1.4%)",
                ]),
                Block::Heading("🔗 출처"),
                Block::List(&[
                    "동아일보 (2021) \"원곡초등학교 전체 학생 449명 중 443명(98.6%)이 이주배경\"",
                    "교육부 다문화교육 정책학교 현황 자료",
                ]),
            ],
        },
        CitationEntry {
            key: keys::FOREIGNER_RATIO_COMPARISON,
            title: "지역별 외국인 비율 비교",
            content: &[
                Block::Heading("📊 비교 데이터"),
                Block::Highlight(&[("기준", "각 지자체 외국인 주민 현황 (2024년 기준)")]),
                Block::Heading("📈 경기도 주요 시군 외국인 비율"),
                Block::List(&[
                    "**안산시:** 13.2% (96,300명) — 경기도 1위",
                    "**시흥시:** 약 10%",
                    "**화성시:** 약 7%",
                    "**안성시:** 약 5%",
                    "**이천시:** 약 4%",
                ]),
                Block::Warning(
                    "**⚠️ 핵심 역설:** 외국인 비율이 **가장 높은 안산시**가 경기도 미등록 아동 \
                     시범사업에서 **제외**되었습니다.",
                ),
                Block::Heading("🔗 출처"),
                Block::List(&["각 시군 외국인 주민 현황 통계", "행정안전부 외국인 주민 현황 조사"]),
            ],
        },
    ]
}
