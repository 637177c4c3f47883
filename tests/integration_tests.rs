//! 통합 테스트 - 음역 엔진과 요청 경계

use cartouche::glyph::{PhonemeMap, SymbolCatalog};
use cartouche::service::{GlyphService, RequestError, TranslateRequest};
use cartouche::{check_integrity, GlyphTables, IntegrityPolicy, TableError, Transliterator};
use serde_json::json;

fn engine() -> Transliterator {
    Transliterator::new(GlyphTables::embedded().unwrap())
}

fn ids(engine: &Transliterator, input: &str) -> Vec<String> {
    engine.translate(input).iter().map(|g| g.id.clone()).collect()
}

#[test]
fn test_single_letters() {
    let e = engine();
    assert_eq!(ids(&e, "a"), vec!["G1"]);
    assert_eq!(ids(&e, "b"), vec!["D58"]);
    assert_eq!(ids(&e, "s"), vec!["S29"]);
    assert_eq!(ids(&e, "h"), vec!["V28"]);
}

#[test]
fn test_digraph_precedence() {
    let e = engine();
    assert_eq!(ids(&e, "sh"), vec!["M8"]); // S29 + V28 아님
    assert_eq!(ids(&e, "bash"), vec!["D58", "G1", "M8"]);
}

#[test]
fn test_every_digraph_beats_its_letters() {
    let e = engine();
    let tables = e.tables();
    for entry in tables.phonemes().iter().filter(|p| p.char_len() == 2) {
        let mut chars = entry.phoneme.chars();
        let (x, y) = (chars.next().unwrap().to_string(), chars.next().unwrap().to_string());
        if tables.phonemes().get(&x).is_some() && tables.phonemes().get(&y).is_some() {
            let result = e.translate(&entry.phoneme);
            assert_eq!(result.len(), 1, "digraph {}", entry.phoneme);
            assert_eq!(result[0].id, entry.candidates[0]);
        }
    }
}

#[test]
fn test_unmapped_characters_skipped() {
    let e = engine();
    assert_eq!(ids(&e, "a1!"), vec!["G1"]);
    assert_eq!(ids(&e, "a b\tc"), vec!["G1", "D58", "V31"]);
    assert!(e.translate("123 !?.").is_empty());
}

#[test]
fn test_case_insensitive() {
    let e = engine();
    assert_eq!(ids(&e, "A"), vec!["G1"]);
    for s in ["bash", "hello", "kheper", "djehuty"] {
        assert_eq!(e.translate(s), e.translate(&s.to_uppercase()));
    }
}

#[test]
fn test_empty_input() {
    assert!(engine().translate("").is_empty());
}

#[test]
fn test_output_length_bound() {
    let e = engine();
    for s in ["", "a", "sh", "shshsh", "the cat", "KHNUM!", "x y z", "ééé"] {
        assert!(e.translate(s).len() <= s.chars().count(), "input {:?}", s);
    }
}

#[test]
fn test_deterministic() {
    let e = engine();
    let first = serde_json::to_vec(&e.translate("cleopatra")).unwrap();
    for _ in 0..10 {
        assert_eq!(serde_json::to_vec(&e.translate("cleopatra")).unwrap(), first);
    }
}

#[test]
fn test_embedded_tables_integrity() {
    let tables = GlyphTables::embedded().unwrap();
    assert!(check_integrity(tables.catalog(), tables.phonemes()).is_empty());
    for entry in tables.phonemes().iter() {
        assert!(!entry.candidates.is_empty());
        for id in &entry.candidates {
            assert!(tables.catalog().contains(id), "{} -> {}", entry.phoneme, id);
        }
    }
}

#[test]
fn test_dangling_reference_fails_startup() {
    let catalog = SymbolCatalog::from_json(
        r#"[{ "glyphId": "G1", "phoneticValue": "a", "unicode": "U+1313F",
              "description": "Egyptian vulture", "category": "Birds" }]"#,
    )
    .unwrap();
    let phonemes = PhonemeMap::from_json(r#"{ "a": ["G1"], "sh": ["M8"] }"#).unwrap();
    let result = GlyphTables::from_parts(catalog, phonemes, IntegrityPolicy::Strict);
    assert!(matches!(result, Err(TableError::IntegrityError(_))));
}

#[test]
fn test_boundary_translate() {
    let service = GlyphService::new(engine());
    let response = service.translate(&json!({ "text": "hello" })).unwrap();
    assert_eq!(response.count, 5);
    assert_eq!(response.glyphs.len(), 5);
    assert!(!response.glyphs[0].record.image_url.is_empty());
}

#[test]
fn test_boundary_errors() {
    let service = GlyphService::new(engine());

    let invalid = service.translate(&json!({ "nothing": "here" })).unwrap_err();
    assert!(matches!(invalid, RequestError::InvalidPayload(_)));
    assert_eq!(invalid.status(), 400);

    let empty = service.translate(&json!({ "text": "   " })).unwrap_err();
    assert_eq!(empty, RequestError::EmptyText);
    assert_eq!(empty.status(), 422);

    assert_eq!(TranslateRequest::from_text("").unwrap_err(), RequestError::EmptyText);
}

#[test]
fn test_response_json_shape() {
    let service = GlyphService::new(engine());
    let response = service.translate(&json!({ "text": " Sha " })).unwrap();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["originalText"], " Sha ");
    assert_eq!(value["sanitizedText"], "sha");
    assert_eq!(value["count"], 2);
    assert_eq!(value["glyphs"][0]["glyphId"], "M8");
    assert_eq!(value["glyphs"][0]["gardinerCode"], "M8");
    assert_eq!(value["glyphs"][1]["phoneticValue"], "a");
}
