//! 음역 엔진
//!
//! 입력 텍스트를 소문자로 정규화한 뒤 탐욕적 최장 일치로 음소를 찾아
//! 글리프 레코드 시퀀스로 변환합니다.

pub mod matcher;
pub mod normalize;
pub mod transliterator;
pub mod variant;

pub use transliterator::{Segment, Transliterator};
pub use variant::{FirstVariant, VariantSelector};
