//! JSON codec for the `chart_data.json` document.

use crate::error::DatasetError;
use crate::model::Dataset;

/// Decodes a dataset document without checking invariants.
///
/// # Errors
///
/// Returns [`DatasetError::Malformed`] if the text is not JSON or a required
/// section is missing or has the wrong shape.
pub fn from_json(text: &str) -> Result<Dataset, DatasetError> {
    Ok(serde_json::from_str(text)?)
}

/// Decodes a dataset document and checks every invariant.
///
/// # Errors
///
/// Returns [`DatasetError::Malformed`] for shape errors and
/// [`DatasetError::Invalid`] for invariant violations.
pub fn from_json_validated(text: &str) -> Result<Dataset, DatasetError> {
    let dataset = from_json(text)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Encodes a dataset as pretty-printed JSON. Non-ASCII text is written as is.
///
/// # Errors
///
/// Returns [`DatasetError::Malformed`] if serialization fails.
pub fn to_json(dataset: &Dataset) -> Result<String, DatasetError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{EventKind, GapSeverity};

    #[test]
    fn fallback_survives_encoding() {
        let text = to_json(Dataset::fallback()).expect("serialize dataset");
        assert!(text.contains("안산시"));
        assert!(text.contains("\"type\": \"negative\""));
        let decoded = from_json_validated(&text);
        assert!(matches!(decoded, Ok(ref d) if d == Dataset::fallback()));
    }

    #[test]
    fn unknown_severity_is_malformed() {
        let text = to_json(Dataset::fallback())
            .expect("serialize dataset")
            .replacen("\"critical\"", "\"catastrophic\"", 1);
        assert!(matches!(from_json(&text), Err(DatasetError::Malformed(_))));
    }

    #[test]
    fn missing_section_is_malformed() {
        let mut value = serde_json::to_value(Dataset::fallback()).expect("serialize to JSON");
        value
            .as_object_mut()
            .expect("dataset encodes as an object")
            .remove("budget");
        let text = value.to_string();
        assert!(matches!(from_json(&text), Err(DatasetError::Malformed(_))));
    }

    #[test]
    fn collector_document_with_extra_fields_loads() {
        let text = r#"{
            "trend": [
                {"year": 2023, "total_population": 726000, "foreign_population": 93500, "ratio": 12.9},
                {"year": 2024, "total_population": 730000, "foreign_population": 96300, "ratio": 13.2}
            ],
            "comparison": [
                {"region": "안산시", "foreign_ratio": 13.2, "foreign_count": 96300, "pilot_program": false, "rank": 1}
            ],
            "support": {
                "registered_children_supported": 2144,
                "extended_care_supported": 1434,
                "unregistered_children_supported": 0,
                "estimated_unregistered_min": 814,
                "estimated_unregistered_max": 2640
            },
            "perception": [
                {"category": "정책 형평성", "perception": "내외국인 차별 없음", "reality": "'등록' 외국인만 대상", "gap_severity": "high"}
            ],
            "wongok": {"total_residents": 20191, "foreign_residents": 18014, "korean_residents": 2177, "foreign_ratio": 89.2},
            "budget": {"current_budget": 7284000000, "additional_needed_for_unregistered": 2040000000, "percentage_increase": 28.0},
            "timeline": [
                {"date": "2020", "event": "외국인정책 시행계획 신규 수록", "type": "positive"},
                {"date": "2025.12", "event": "경기도 미등록 아동 시범사업 발표", "type": "neutral"}
            ]
        }"#;
        let d = from_json_validated(text).expect("collector document is valid");
        assert_eq!(d.perception[0].gap_severity, GapSeverity::High);
        assert_eq!(d.timeline[1].kind, EventKind::Neutral);
    }

    #[test]
    fn invalid_document_reports_violations() {
        let mut data = Dataset::fallback().clone();
        data.support.estimated_unregistered_min = 9_999;
        let text = to_json(&data).expect("serialize dataset");
        assert!(matches!(from_json_validated(&text), Err(DatasetError::Invalid(v)) if v.len() == 1));
    }
}
