//! 텍스트 → 글리프 음역 엔진
//!
//! 탐욕적 최장 일치로 입력을 음소 단위로 나누고,
//! 각 음소의 기본 후보 글리프를 카탈로그에서 찾아 순서대로 반환합니다.

use serde::Serialize;

use super::matcher::{char_offsets, PhonemeIndex};
use super::normalize::fold_case;
use super::variant::{FirstVariant, VariantSelector};
use crate::glyph::{GlyphTables, SymbolRecord};

/// 매칭된 음소 구간
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// 매칭된 음소
    pub phoneme: &'a str,
    /// 소문자 정규화된 입력 기준 문자 오프셋
    pub start: usize,
    /// 음소의 문자 수
    pub len: usize,
    /// 선택된 글리프 ID (선택 전략이 고르지 못하면 None)
    pub glyph_id: Option<&'a str>,
}

/// 음역 엔진
///
/// 테이블은 생성 시 주입되며 이후 변경되지 않습니다.
/// `translate`는 `&self`만 사용하므로 여러 스레드에서 동시에 호출할 수 있습니다.
pub struct Transliterator {
    tables: GlyphTables,
    index: PhonemeIndex,
    selector: Box<dyn VariantSelector>,
}

impl std::fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliterator")
            .field("glyphs", &self.tables.catalog().len())
            .field("phonemes", &self.index.len())
            .finish()
    }
}

impl Transliterator {
    /// 기본 전략(첫 번째 후보)으로 엔진 생성
    pub fn new(tables: GlyphTables) -> Self {
        Self::with_selector(tables, FirstVariant)
    }

    /// 후보 선택 전략을 지정하여 엔진 생성
    pub fn with_selector(tables: GlyphTables, selector: impl VariantSelector + 'static) -> Self {
        let index = PhonemeIndex::build(tables.phonemes());
        Self {
            tables,
            index,
            selector: Box::new(selector),
        }
    }

    /// 엔진이 사용하는 테이블
    pub fn tables(&self) -> &GlyphTables {
        &self.tables
    }

    /// 매칭 우선순위 순서의 음소 목록 (길이 내림차순, 같은 길이는 삽입 순서)
    pub fn phonemes(&self) -> impl Iterator<Item = &str> {
        self.index.phonemes()
    }

    /// 입력을 음소 구간으로 분할
    ///
    /// 매칭되지 않는 문자(숫자, 특수문자, 공백, 미등록 문자)는 건너뜁니다.
    pub fn segment(&self, input: &str) -> Vec<Segment<'_>> {
        let text = fold_case(input);
        let offsets = char_offsets(&text);
        let char_count = offsets.len() - 1;

        let mut segments = Vec::new();
        let mut cursor = 0;

        while cursor < char_count {
            match self.index.longest_match(&text, &offsets, cursor) {
                Some(entry) => {
                    let len = entry.char_len();
                    let glyph_id = self
                        .selector
                        .select(&entry.phoneme, &entry.candidates)
                        .and_then(|i| entry.candidates.get(i))
                        .map(String::as_str);

                    log::trace!("음소 \"{}\" @{} -> {:?}", entry.phoneme, cursor, glyph_id);

                    segments.push(Segment {
                        phoneme: &entry.phoneme,
                        start: cursor,
                        len,
                        glyph_id,
                    });
                    cursor += len;
                }
                None => cursor += 1,
            }
        }

        segments
    }

    /// 입력 텍스트를 글리프 시퀀스로 변환
    ///
    /// 빈 입력이나 매칭 가능한 음소가 없는 입력은 빈 시퀀스를 반환하며,
    /// 에러는 발생하지 않습니다. 카탈로그에 없는 ID는 출력하지 않습니다.
    ///
    /// # Examples
    /// ```
    /// use cartouche::{GlyphTables, Transliterator};
    ///
    /// let engine = Transliterator::new(GlyphTables::embedded().unwrap());
    /// let ids: Vec<&str> = engine.translate("bash").iter().map(|g| g.id.as_str()).collect();
    /// assert_eq!(ids, vec!["D58", "G1", "M8"]);
    /// ```
    pub fn translate(&self, input: &str) -> Vec<&SymbolRecord> {
        if input.is_empty() {
            return Vec::new();
        }

        let catalog = self.tables.catalog();
        self.segment(input)
            .into_iter()
            .filter_map(|seg| seg.glyph_id)
            .filter_map(|id| {
                let record = catalog.get(id);
                if record.is_none() {
                    log::debug!("카탈로그에 없는 글리프 ID: {}", id);
                }
                record
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{IntegrityPolicy, PhonemeMap, SymbolCatalog};

    fn sample_engine() -> Transliterator {
        let catalog = SymbolCatalog::from_json(
            r#"[
                { "glyphId": "G1", "phoneticValue": "a", "unicode": "U+1313F",
                  "description": "Egyptian vulture", "category": "Birds" },
                { "glyphId": "D58", "phoneticValue": "b", "unicode": "U+130C0",
                  "description": "Foot", "category": "Parts of the human body" },
                { "glyphId": "M8", "phoneticValue": "sh", "unicode": "U+131B7",
                  "description": "Pool with lotus flowers", "category": "Trees and plants" },
                { "glyphId": "S29", "phoneticValue": "s", "unicode": "U+132F4",
                  "description": "Folded cloth", "category": "Crowns, dress, staves" },
                { "glyphId": "V28", "phoneticValue": "h", "unicode": "U+1339B",
                  "description": "Wick of twisted flax", "category": "Rope, fiber, baskets, bags" }
            ]"#,
        )
        .unwrap();
        let phonemes = PhonemeMap::from_json(
            r#"{ "a": ["G1"], "b": ["D58"], "sh": ["M8", "S29"], "s": ["S29"], "h": ["V28"] }"#,
        )
        .unwrap();
        Transliterator::new(GlyphTables::from_parts(catalog, phonemes, IntegrityPolicy::Strict).unwrap())
    }

    fn ids(records: &[&SymbolRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_single_character() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("a")), vec!["G1"]);
    }

    #[test]
    fn test_digraph_wins() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("sh")), vec!["M8"]);
    }

    #[test]
    fn test_mixed_word() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("bash")), vec!["D58", "G1", "M8"]);
    }

    #[test]
    fn test_unmatched_skipped() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("a1!")), vec!["G1"]);
        assert_eq!(ids(&engine.translate("a z b")), vec!["G1", "D58"]);
        assert!(engine.translate("123 !?").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("A")), vec!["G1"]);
        assert_eq!(engine.translate("BaSh"), engine.translate("bash"));
    }

    #[test]
    fn test_empty_input() {
        let engine = sample_engine();
        assert!(engine.translate("").is_empty());
        assert!(engine.segment("").is_empty());
    }

    #[test]
    fn test_non_ascii_skipped() {
        let engine = sample_engine();
        assert_eq!(ids(&engine.translate("é한a")), vec!["G1"]);
    }

    #[test]
    fn test_non_ascii_not_folded_into_letters() {
        let catalog = SymbolCatalog::from_json(
            r#"[{ "glyphId": "V31", "phoneticValue": "k", "unicode": "U+133A1",
                  "description": "Basket with handle", "category": "Vessels" }]"#,
        )
        .unwrap();
        let phonemes = PhonemeMap::from_json(r#"{ "k": ["V31"] }"#).unwrap();
        let engine =
            Transliterator::new(GlyphTables::from_parts(catalog, phonemes, IntegrityPolicy::Strict).unwrap());
        // KELVIN SIGN은 'k'로 바뀌지 않음
        assert!(engine.translate("\u{212A}").is_empty());
        assert_eq!(ids(&engine.translate("K")), vec!["V31"]);
    }

    #[test]
    fn test_segments() {
        let engine = sample_engine();
        let segments = engine.segment("b-ash");
        assert_eq!(
            segments,
            vec![
                Segment { phoneme: "b", start: 0, len: 1, glyph_id: Some("D58") },
                Segment { phoneme: "a", start: 2, len: 1, glyph_id: Some("G1") },
                Segment { phoneme: "sh", start: 3, len: 2, glyph_id: Some("M8") },
            ]
        );
    }

    #[test]
    fn test_custom_selector() {
        let engine = sample_engine();
        let tables = engine.tables().clone();
        let last = Transliterator::with_selector(tables, |_: &str, c: &[String]| c.len().checked_sub(1));
        assert_eq!(ids(&last.translate("sh")), vec!["S29"]);
    }

    #[test]
    fn test_selector_out_of_range_emits_nothing() {
        let engine = sample_engine();
        let tables = engine.tables().clone();
        let broken = Transliterator::with_selector(tables, |_: &str, _: &[String]| Some(99));
        assert!(broken.translate("bash").is_empty());
        // 구간은 소비됨
        assert_eq!(broken.segment("bash").len(), 3);
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let engine = sample_engine();
        for input in ["", "a", "shshsh", "abba", "s h", "SHA!", "hhhh"] {
            assert!(engine.translate(input).len() <= input.chars().count());
        }
    }

    #[test]
    fn test_deterministic() {
        let engine = sample_engine();
        let first = serde_json::to_string(&engine.translate("shabash")).unwrap();
        let second = serde_json::to_string(&engine.translate("shabash")).unwrap();
        assert_eq!(first, second);
    }
}
