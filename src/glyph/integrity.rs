//! 카탈로그/음소 맵 무결성 검사
//!
//! 시작 시 한 번 실행하는 순수 함수입니다. 매칭 루프에서는 검사하지 않습니다.

use std::collections::HashSet;

use super::catalog::SymbolCatalog;
use super::phoneme_map::PhonemeMap;

/// 무결성 위반 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// 카탈로그에 같은 glyphId가 두 번 이상 존재
    DuplicateGlyphId { id: String },
    /// 소문자 정규화 후 같은 음소 키가 두 번 이상 존재
    DuplicatePhoneme { phoneme: String },
    /// 후보 목록이 비어 있는 음소
    EmptyCandidates { phoneme: String },
    /// 카탈로그에 없는 글리프 ID를 가리키는 음소
    DanglingReference { phoneme: String, id: String },
}

impl IntegrityViolation {
    /// 매칭에서 제외해야 하는 음소 (해당되는 경우)
    pub fn broken_phoneme(&self) -> Option<&str> {
        match self {
            IntegrityViolation::EmptyCandidates { phoneme }
            | IntegrityViolation::DanglingReference { phoneme, .. } => Some(phoneme.as_str()),
            IntegrityViolation::DuplicateGlyphId { .. }
            | IntegrityViolation::DuplicatePhoneme { .. } => None,
        }
    }
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityViolation::DuplicateGlyphId { id } => {
                write!(f, "중복 글리프 ID \"{}\"", id)
            }
            IntegrityViolation::DuplicatePhoneme { phoneme } => {
                write!(f, "중복 음소 \"{}\"", phoneme)
            }
            IntegrityViolation::EmptyCandidates { phoneme } => {
                write!(f, "음소 \"{}\"의 후보 목록이 비어 있음", phoneme)
            }
            IntegrityViolation::DanglingReference { phoneme, id } => {
                write!(f, "음소 \"{}\"가 존재하지 않는 글리프 ID \"{}\"를 가리킴", phoneme, id)
            }
        }
    }
}

/// 두 테이블의 일관성을 검사하여 위반 목록 반환 (비어 있으면 정상)
///
/// 카탈로그 중복 → 음소 키 중복 → 음소별 후보 순으로 보고합니다.
pub fn check_integrity(catalog: &SymbolCatalog, phonemes: &PhonemeMap) -> Vec<IntegrityViolation> {
    let mut violations: Vec<IntegrityViolation> = catalog
        .duplicate_ids()
        .into_iter()
        .map(|id| IntegrityViolation::DuplicateGlyphId { id: id.to_string() })
        .collect();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for entry in phonemes.iter() {
        let key = entry.phoneme.as_str();
        if !seen.insert(key) && reported.insert(key) {
            violations.push(IntegrityViolation::DuplicatePhoneme {
                phoneme: key.to_string(),
            });
        }
    }

    for entry in phonemes.iter() {
        if entry.candidates.is_empty() {
            violations.push(IntegrityViolation::EmptyCandidates {
                phoneme: entry.phoneme.clone(),
            });
            continue;
        }

        for id in &entry.candidates {
            if !catalog.contains(id) {
                violations.push(IntegrityViolation::DanglingReference {
                    phoneme: entry.phoneme.clone(),
                    id: id.clone(),
                });
            }
        }
    }

    violations
}
