//! 테이블 로드/검증 에러

use super::integrity::IntegrityViolation;

/// 글리프 카탈로그/음소 맵 로드 에러
#[derive(Debug)]
pub enum TableError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 테이블 형식 오류
    FormatError(String),
    /// 무결성 검사 실패 (strict 정책)
    IntegrityError(Vec<IntegrityViolation>),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            TableError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            TableError::FormatError(s) => write!(f, "테이블 형식 오류: {}", s),
            TableError::IntegrityError(violations) => {
                write!(f, "무결성 검사 실패 ({}건)", violations.len())?;
                for v in violations {
                    write!(f, "\n  - {}", v)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::IoError(e)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        TableError::ParseError(e.to_string())
    }
}
