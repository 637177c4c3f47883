//! 요청 처리 경계
//!
//! 입력 형식 검증은 여기서 끝내고, 엔진에는 검증된 텍스트만 전달합니다.

pub mod handler;
pub mod request;
pub mod stdio;

pub use handler::{GlyphService, HealthStatus};
pub use request::{ErrorBody, RequestError, ResponseGlyph, TranslateRequest, TranslateResponse};
pub use stdio::serve;
