//! Policy sources: the Ansan subsidy document, the Gyeonggi pilot program,
//! and the budget gap estimate derived from them.

use super::keys;
use super::{Block, CitationEntry, LinkTarget};

/// File name of the attached policy document.
pub const POLICY_PDF: &str = "외국인 보육료 지원(안산시 정책).pdf";

/// Returns the policy citation entries.
pub fn entries() -> Vec<CitationEntry> {
    vec![
        policy_document(),
        unregistered_support(),
        gyeonggi_pilot(),
        budget_estimation(),
    ]
}

fn policy_document() -> CitationEntry {
    CitationEntry {
        key: keys::POLICY_DOCUMENT,
        title: "안산시 정책 문서",
        content: &[
            Block::Heading("📄 문서 정보"),
            Block::Highlight(&[
                ("문서명", "외국인가정의 안전한 보육환경 조성 (외국인 보육료 지원)"),
                ("문서번호", "3-3-48"),
                ("담당부서", "경기도 안산시 여성보육과"),
                ("연락처", "031-481-3323"),
            ]),
            Block::Heading("📊 핵심 데이터"),
            Block::List(&[
                "**지원 대상:** 안산시 관내 어린이집 재원 중인 0~5세 **등록외국인 아동**",
                "**거주 요건:** 아동과 보호자(1명)가 경기도 및 안산시에 90일 초과 거주",
                "**0~2세 지원금:** 도비 10만원 + 시비 16만원 = **월 26만원**",
                "**3~5세 지원금:** 도비 10만원 + 시비 18만원 = **월 28만원**",
                "**2024년 수혜 인원:** 보육료 2,144명, 연장보육료 1,434명 (24.8월말 기준)",
                "**2025년 예산:** 총 72.84억원 (도비 10.56억 / 시비 62.28억)",
            ]),
            Block::Warning(
                "**⚠️ 주요 발견:** 정책 문서에 \"등록외국인 아동\"으로 명시되어 있어, \
                 미등록 외국인 아동은 법적으로 지원 대상에서 제외됩니다.",
            ),
            Block::Heading("🔗 원본 문서"),
            Block::Paragraph("본 대시보드에 첨부된 PDF 파일에서 전체 내용을 확인할 수 있습니다."),
            Block::Link {
                label: "📎 정책 문서 PDF 열기",
                target: LinkTarget::Attachment(POLICY_PDF),
            },
        ],
    }
}

fn unregistered_support() -> CitationEntry {
    CitationEntry {
        key: keys::UNREGISTERED_SUPPORT,
        title: "미등록 아동 지원율 0% 근거",
        content: &[
            Block::Heading("📊 정책 분석"),
            Block::Warning(
                "**핵심 근거:** 안산시 정책 문서(3-3-48)에 지원 대상을 \
                 **\"등록외국인 아동\"**으로 명시하고 있어, \
                 미등록 외국인 아동은 법적으로 지원 대상에서 완전히 제외됩니다.",
            ),
            Block::Heading("📋 관련 정책 조항"),
            Block::List(&[
                "**지원 대상:** \"관내 어린이집 재원 등록외국인 아동\"",
                "**자격 요건:** \"아동과 보호자(1명)가 경기도 및 안산시 90일 초과 거주\"",
                "**지급 방식:** \"국민행복카드 결제 (부모 바우처 지급)\"",
            ]),
            Block::Paragraph(
                "미등록 외국인은 외국인등록이 되어있지 않아 위 조건을 충족할 수 없으며, \
                 국민행복카드 발급도 불가능합니다.",
            ),
            Block::Heading("🔗 출처"),
            Block::Link {
                label: "📎 안산시 정책 문서 확인하기",
                target: LinkTarget::Citation(keys::POLICY_DOCUMENT),
            },
        ],
    }
}

fn gyeonggi_pilot() -> CitationEntry {
    CitationEntry {
        key: keys::GYEONGGI_PILOT,
        title: "경기도 미등록 아동 시범사업",
        content: &[
            Block::Heading("📊 사업 정보"),
            Block::Highlight(&[
                ("사업명", "미등록 외국인 아동 보육지원금 지원사업"),
                ("시행일", "2026년 1월 1일"),
                ("주관", "경기도"),
            ]),
            Block::Heading("📋 사업 내용"),
            Block::List(&[
                "**지원 대상:** 도내 어린이집 재원 미등록 외국인 아동",
                "**지원 금액:** 아동 1인당 월 10만원",
                "**지급 방식:** 어린이집 직접 지원 (보호자 현금 지급 X)",
                "**법적 근거:** 경기도 출생 미등록 아동 발굴 및 지원 조례 (2025년 제정)",
            ]),
            Block::Heading("📍 시범 지역 (2026년)"),
            Block::List(&["✅ 화성시", "✅ 안성시", "✅ 이천시"]),
            Block::Warning("❌ **안산시: 제외** (외국인 비율 1위에도 불구)"),
            Block::Heading("🔗 출처"),
            Block::List(&[
                "경기신문 (2025.12) \"경기도, 광역 최초 미등록 외국인 아동 보육지원금 시행\"",
                "에너지경제 (2025.12)",
                "뉴스1 (2025.12)",
                "경기도청 보도자료",
            ]),
        ],
    }
}

fn budget_estimation() -> CitationEntry {
    CitationEntry {
        key: keys::BUDGET_ESTIMATION,
        title: "사각지대 해소 예산 추정",
        content: &[
            Block::Heading("📊 계산 로직"),
            Block::Calculation(&[
                ("① 미등록 아동 추정 (중간값)", "1,700명"),
                ("② 월 지원금 (경기도 기준)", "10만원"),
                ("③ 연간 지원 (12개월)", "× 12"),
                ("④ 연간 필요 예산", "20.4억원"),
            ]),
            Block::Heading("📈 현재 예산 대비 비교"),
            Block::List(&[
                "**현재 외국인 보육료 예산 (2025):** 72.84억원",
                "**사각지대 해소 추가 예산:** 20.4억원",
                "**비율:** 현재 예산의 약 28% 추가 필요",
            ]),
            Block::Highlight(&[(
                "결론",
                "현재 예산에서 약 **28% 추가** 시 미등록 아동 사각지대 해소 가능",
            )]),
            Block::Heading("🔗 출처"),
            Block::Link {
                label: "📎 안산시 예산 현황 확인",
                target: LinkTarget::Citation(keys::POLICY_DOCUMENT),
            },
            Block::Link {
                label: "📎 미등록 아동 추정 확인",
                target: LinkTarget::Citation(keys::UNREGISTERED_ESTIMATION),
            },
        ],
    }
}
