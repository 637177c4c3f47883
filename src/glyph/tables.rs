//! 글리프 테이블 세트 (카탈로그 + 음소 맵) 로드
//!
//! 프로세스 시작 시 한 번 로드하고 이후에는 읽기 전용으로 사용합니다.
//! 로드 실패 시 기본값으로 대체하지 않고 에러를 반환합니다 (fail-fast).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::SymbolCatalog;
use super::error::TableError;
use super::integrity::{check_integrity, IntegrityViolation};
use super::phoneme_map::PhonemeMap;

/// 내장 글리프 카탈로그
const EMBEDDED_CATALOG: &str = include_str!("../../data/glyphs.json");
/// 내장 음소 맵
const EMBEDDED_PHONEME_MAP: &str = include_str!("../../data/phoneme_map.json");

/// 무결성 위반 처리 정책
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    /// 위반이 하나라도 있으면 로드 실패
    #[default]
    Strict,
    /// 위반을 error 로그로 남기고 깨진 음소를 매칭에서 제외
    Exclude,
}

/// 검증을 마친 테이블 세트
#[derive(Debug, Clone)]
pub struct GlyphTables {
    catalog: SymbolCatalog,
    phonemes: PhonemeMap,
}

impl GlyphTables {
    /// 바이너리에 내장된 기본 테이블 로드 (strict)
    pub fn embedded() -> Result<Self, TableError> {
        let catalog = SymbolCatalog::from_json(EMBEDDED_CATALOG)?;
        let phonemes = PhonemeMap::from_json(EMBEDDED_PHONEME_MAP)?;
        Self::from_parts(catalog, phonemes, IntegrityPolicy::Strict)
    }

    /// 파일에서 테이블 로드, 경로가 None이면 내장 테이블 사용
    pub fn load(
        catalog_path: Option<&Path>,
        phoneme_map_path: Option<&Path>,
        policy: IntegrityPolicy,
    ) -> Result<Self, TableError> {
        let catalog = match catalog_path {
            Some(path) => {
                log::info!("글리프 카탈로그 로드: {}", path.display());
                SymbolCatalog::load(path)?
            }
            None => SymbolCatalog::from_json(EMBEDDED_CATALOG)?,
        };
        let phonemes = match phoneme_map_path {
            Some(path) => {
                log::info!("음소 맵 로드: {}", path.display());
                PhonemeMap::load(path)?
            }
            None => PhonemeMap::from_json(EMBEDDED_PHONEME_MAP)?,
        };

        Self::from_parts(catalog, phonemes, policy)
    }

    /// 무결성 검사 후 테이블 세트 생성
    pub fn from_parts(
        mut catalog: SymbolCatalog,
        mut phonemes: PhonemeMap,
        policy: IntegrityPolicy,
    ) -> Result<Self, TableError> {
        let violations = check_integrity(&catalog, &phonemes);

        if !violations.is_empty() {
            match policy {
                IntegrityPolicy::Strict => {
                    for v in &violations {
                        log::error!("무결성 위반: {}", v);
                    }
                    return Err(TableError::IntegrityError(violations));
                }
                IntegrityPolicy::Exclude => {
                    for v in &violations {
                        log::error!("무결성 위반: {}", v);
                    }
                    // 중복 제거 후 남은 항목 기준으로 깨진 음소 판정
                    catalog.dedup();
                    phonemes.dedup();
                    let broken = broken_phonemes(&check_integrity(&catalog, &phonemes));
                    phonemes.exclude(&broken);
                    log::error!("깨진 음소 {}개를 매칭에서 제외", broken.len());
                }
            }
        }

        log::info!(
            "테이블 로드 완료: 글리프 {}개, 음소 {}개",
            catalog.len(),
            phonemes.len()
        );

        Ok(Self { catalog, phonemes })
    }

    /// 글리프 카탈로그
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// 음소 맵
    pub fn phonemes(&self) -> &PhonemeMap {
        &self.phonemes
    }
}

/// 제외할 음소 집합
fn broken_phonemes(violations: &[IntegrityViolation]) -> HashSet<String> {
    violations
        .iter()
        .filter_map(IntegrityViolation::broken_phoneme)
        .map(str::to_string)
        .collect()
}
