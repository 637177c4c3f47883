//! 글리프 레코드

use serde::{Deserialize, Serialize};

/// 글리프 하나의 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    /// 고유 ID (가디너 부호, 예: "G1", "D58")
    #[serde(rename = "glyphId", alias = "id")]
    pub id: String,
    /// 대표 음가 (예: "a", "sh")
    #[serde(alias = "phonetic")]
    pub phonetic_value: String,
    /// 유니코드 코드포인트 ("U+1313F") 또는 글리프 문자 자체
    pub unicode: String,
    /// 설명 (예: "Egyptian vulture")
    pub description: String,
    /// 가디너 분류 (예: "Birds")
    pub category: String,
    /// 이미지 에셋 경로 (비어 있으면 로드 시 `/glyphs/<id>.svg`로 채움)
    #[serde(default)]
    pub image_url: String,
}

impl SymbolRecord {
    /// 기본 에셋 경로
    pub fn default_image_url(id: &str) -> String {
        format!("/glyphs/{}.svg", id)
    }

    /// 화면 표시용 텍스트
    ///
    /// `U+XXXX` 형식이면 해당 문자로 변환하고, 그 외에는 문자열을 그대로 사용.
    /// 코드포인트가 잘못된 경우 None
    pub fn display_text(&self) -> Option<String> {
        let raw = self.unicode.trim();
        if raw.is_empty() {
            return None;
        }

        let hex = raw
            .strip_prefix("U+")
            .or_else(|| raw.strip_prefix("u+"));

        match hex {
            Some(hex) => u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .map(|c| c.to_string()),
            None => Some(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(unicode: &str) -> SymbolRecord {
        SymbolRecord {
            id: "G1".into(),
            phonetic_value: "a".into(),
            unicode: unicode.into(),
            description: "Egyptian vulture".into(),
            category: "Birds".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_display_text_codepoint() {
        assert_eq!(record("U+1313F").display_text().as_deref(), Some("\u{1313F}"));
        assert_eq!(record("u+1313f").display_text().as_deref(), Some("\u{1313F}"));
    }

    #[test]
    fn test_display_text_literal() {
        assert_eq!(record("\u{1313F}").display_text().as_deref(), Some("\u{1313F}"));
    }

    #[test]
    fn test_display_text_invalid() {
        assert_eq!(record("U+ZZZZ").display_text(), None);
        // 서로게이트 영역은 char가 아님
        assert_eq!(record("U+D800").display_text(), None);
        assert_eq!(record("").display_text(), None);
    }

    #[test]
    fn test_deserialize_aliases() {
        let json = r#"{
            "id": "D58",
            "phonetic": "b",
            "unicode": "U+130C0",
            "description": "Foot",
            "category": "Parts of the human body"
        }"#;
        let rec: SymbolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "D58");
        assert_eq!(rec.phonetic_value, "b");
        assert!(rec.image_url.is_empty());
    }

    #[test]
    fn test_serialize_camel_case() {
        let value = serde_json::to_value(record("U+1313F")).unwrap();
        assert_eq!(value["glyphId"], "G1");
        assert_eq!(value["phoneticValue"], "a");
        assert!(value.get("imageUrl").is_some());
    }
}
