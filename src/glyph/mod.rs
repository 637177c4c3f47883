//! 글리프 데이터 테이블
//!
//! 두 개의 정적 테이블을 다룹니다:
//!
//! - **글리프 카탈로그**: 글리프 ID → 메타데이터 (음가, 유니코드, 설명, 분류, 에셋 경로)
//! - **음소 맵**: 음소 (1~2글자) → 후보 글리프 ID 목록 (첫 번째가 기본값)
//!
//! 두 테이블은 시작 시 한 번 로드되고 무결성 검사를 거칩니다.
//!
//! # 사용 예시
//!
//! ```
//! use cartouche::glyph::{check_integrity, GlyphTables};
//!
//! let tables = GlyphTables::embedded().unwrap();
//! assert_eq!(tables.catalog().get("G1").unwrap().phonetic_value, "a");
//! assert!(check_integrity(tables.catalog(), tables.phonemes()).is_empty());
//! ```

mod catalog;
mod error;
mod integrity;
mod phoneme_map;
mod record;
mod tables;

// 공개 인터페이스
pub use catalog::SymbolCatalog;
pub use error::TableError;
pub use integrity::{check_integrity, IntegrityViolation};
pub use phoneme_map::{PhonemeEntry, PhonemeMap};
pub use record::SymbolRecord;
pub use tables::{GlyphTables, IntegrityPolicy};
