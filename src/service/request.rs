//! 요청 검증과 응답 형식

use serde::Serialize;
use serde_json::Value;

use crate::core::normalize::{is_blank, sanitize};
use crate::glyph::SymbolRecord;

/// 요청 처리 에러
///
/// 클라이언트 측 조치가 다르므로 `InvalidPayload`와 `EmptyText`는 별도 종류로 구분합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// 페이로드 누락 또는 `text`가 문자열이 아님
    InvalidPayload(String),
    /// 양끝 공백 제거 후 빈 텍스트
    EmptyText,
    /// 존재하지 않는 리소스
    NotFound(String),
    /// 내부 오류 (상세 내용은 로그에만 기록)
    Internal,
}

impl RequestError {
    /// HTTP 상태 코드
    pub fn status(&self) -> u16 {
        match self {
            RequestError::InvalidPayload(_) => 400,
            RequestError::EmptyText => 422,
            RequestError::NotFound(_) => 404,
            RequestError::Internal => 500,
        }
    }

    /// 클라이언트에 반환할 에러 본문
    pub fn body(&self) -> ErrorBody {
        let (error, message) = match self {
            RequestError::InvalidPayload(message) => ("Invalid input", message.clone()),
            RequestError::EmptyText => ("Invalid input", "Text cannot be empty".to_string()),
            RequestError::NotFound(message) => ("Not found", message.clone()),
            RequestError::Internal => (
                "Internal error",
                "An internal server error occurred".to_string(),
            ),
        };
        ErrorBody {
            error: error.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body();
        write!(f, "{} ({}): {}", body.error, self.status(), body.message)
    }
}

impl std::error::Error for RequestError {}

/// 에러 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// 검증을 통과한 번역 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    /// 클라이언트가 보낸 원문
    pub original_text: String,
    /// 소문자 변환 + 양끝 공백 제거된 텍스트
    pub sanitized_text: String,
}

impl TranslateRequest {
    /// `{ "text": "..." }` 페이로드 검증
    pub fn from_value(payload: &Value) -> Result<Self, RequestError> {
        let text = payload
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RequestError::InvalidPayload(
                    "Text field is required and must be a string".to_string(),
                )
            })?;

        Self::from_text(text)
    }

    /// 문자열 검증 (CLI 등 JSON이 아닌 호출자용)
    pub fn from_text(text: &str) -> Result<Self, RequestError> {
        if is_blank(text) {
            return Err(RequestError::EmptyText);
        }

        Ok(Self {
            original_text: text.to_string(),
            sanitized_text: sanitize(text),
        })
    }
}

/// 응답용 글리프 (클라이언트 호환을 위해 `gardinerCode` 별칭 포함)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseGlyph {
    #[serde(flatten)]
    pub record: SymbolRecord,
    pub gardiner_code: String,
}

impl From<&SymbolRecord> for ResponseGlyph {
    fn from(record: &SymbolRecord) -> Self {
        Self {
            gardiner_code: record.id.clone(),
            record: record.clone(),
        }
    }
}

/// 번역 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub original_text: String,
    pub sanitized_text: String,
    pub glyphs: Vec<ResponseGlyph>,
    pub count: usize,
}
