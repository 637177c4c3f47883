//! 요청 처리기
//!
//! 엔진은 `Arc`로 게시되며, 테이블 교체(reload)는 새로 만든 엔진으로
//! 참조 하나를 바꾸는 방식으로만 이루어집니다. 진행 중인 요청은 시작할 때
//! 가져간 스냅샷을 끝까지 사용합니다.

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value;

use super::request::{RequestError, ResponseGlyph, TranslateRequest, TranslateResponse};
use crate::core::Transliterator;
use crate::glyph::SymbolRecord;

/// 상태 확인 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub glyphs: usize,
    pub phonemes: usize,
}

/// 번역/카탈로그 조회 서비스
#[derive(Debug)]
pub struct GlyphService {
    engine: RwLock<Arc<Transliterator>>,
}

impl GlyphService {
    pub fn new(engine: Transliterator) -> Self {
        Self {
            engine: RwLock::new(Arc::new(engine)),
        }
    }

    /// 현재 엔진 스냅샷
    pub fn snapshot(&self) -> Arc<Transliterator> {
        let guard = self.engine.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// 새 엔진으로 교체
    pub fn reload(&self, engine: Transliterator) {
        let next = Arc::new(engine);
        let mut guard = self.engine.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
        log::info!(
            "엔진 교체 완료: 글리프 {}개",
            guard.tables().catalog().len()
        );
    }

    /// POST /api/v1/translate
    pub fn translate(&self, payload: &Value) -> Result<TranslateResponse, RequestError> {
        let request = TranslateRequest::from_value(payload).inspect_err(|e| {
            log::warn!("번역 요청 거부: {}", e);
        })?;

        let engine = self.snapshot();
        let glyphs: Vec<ResponseGlyph> = engine
            .translate(&request.sanitized_text)
            .into_iter()
            .map(ResponseGlyph::from)
            .collect();

        log::debug!(
            "번역 완료: \"{}\" -> 글리프 {}개",
            request.sanitized_text,
            glyphs.len()
        );

        Ok(TranslateResponse {
            original_text: request.original_text,
            sanitized_text: request.sanitized_text,
            count: glyphs.len(),
            glyphs,
        })
    }

    /// GET /api/v1/glyphs
    pub fn glyphs(&self) -> Vec<SymbolRecord> {
        self.snapshot().tables().catalog().iter().cloned().collect()
    }

    /// 글리프 하나 조회
    pub fn glyph(&self, id: &str) -> Result<SymbolRecord, RequestError> {
        self.snapshot()
            .tables()
            .catalog()
            .get(id)
            .cloned()
            .ok_or_else(|| RequestError::NotFound(format!("Glyph not found: {}", id)))
    }

    /// GET /health
    pub fn health(&self) -> HealthStatus {
        let engine = self.snapshot();
        HealthStatus {
            status: "OK",
            glyphs: engine.tables().catalog().len(),
            phonemes: engine.tables().phonemes().len(),
        }
    }
}
