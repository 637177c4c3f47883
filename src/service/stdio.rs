//! 줄 단위 JSON 요청 루프
//!
//! 한 줄에 요청 하나를 읽고 한 줄에 응답 하나를 씁니다.
//!
//! ```text
//! <- {"id": 1, "method": "translate", "params": {"text": "bash"}}
//! -> {"id":1,"status":200,"body":{"originalText":"bash",...}}
//! ```
//!
//! 지원 메서드: `translate`, `glyphs`, `glyph` (`params.id`), `health`

use std::io::{BufRead, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::handler::GlyphService;
use super::request::RequestError;

/// 수신 요청
#[derive(Debug, Deserialize)]
struct IncomingRequest {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

/// 송신 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingResponse {
    pub id: Value,
    pub status: u16,
    pub body: Value,
}

impl OutgoingResponse {
    fn ok(id: Value, body: Value) -> Self {
        Self { id, status: 200, body }
    }

    fn error(id: Value, err: &RequestError) -> Self {
        Self {
            id,
            status: err.status(),
            body: serde_json::to_value(err.body()).unwrap_or(Value::Null),
        }
    }
}

/// 요청 한 줄 처리 (빈 줄이면 None)
pub fn handle_line(service: &GlyphService, line: &str) -> Option<OutgoingResponse> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let request: IncomingRequest = match serde_json::from_str(trimmed) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("요청 파싱 실패: {}", e);
            let err = RequestError::InvalidPayload(format!("Malformed request: {}", e));
            return Some(OutgoingResponse::error(Value::Null, &err));
        }
    };

    let id = request.id.clone();
    let result = catch_unwind(AssertUnwindSafe(|| dispatch(service, &request)));

    let response = match result {
        Ok(Ok(body)) => OutgoingResponse::ok(id, body),
        Ok(Err(err)) => OutgoingResponse::error(id, &err),
        Err(_) => {
            log::error!("요청 처리 중 panic 발생: method={}", request.method);
            OutgoingResponse::error(id, &RequestError::Internal)
        }
    };

    Some(response)
}

fn dispatch(service: &GlyphService, request: &IncomingRequest) -> Result<Value, RequestError> {
    match request.method.as_str() {
        "translate" => to_body(&service.translate(&request.params)?),
        "glyphs" => to_body(&service.glyphs()),
        "glyph" => {
            let id = request
                .params
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    RequestError::InvalidPayload("id field is required and must be a string".into())
                })?;
            to_body(&service.glyph(id)?)
        }
        "health" => to_body(&service.health()),
        other => Err(RequestError::NotFound(format!("Unknown method: {}", other))),
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, RequestError> {
    serde_json::to_value(value).map_err(|e| {
        log::error!("응답 직렬화 실패: {}", e);
        RequestError::Internal
    })
}

/// 입력 스트림이 닫힐 때까지 요청 처리
pub fn serve<R: BufRead, W: Write>(service: &GlyphService, mut reader: R, mut writer: W) -> std::io::Result<()> {
    log::info!("요청 루프 시작");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(service, line),
            Err(e) => {
                log::warn!("요청 디코딩 실패: {}", e);
                let err = RequestError::InvalidPayload(format!("Request is not valid UTF-8: {}", e));
                Some(OutgoingResponse::error(Value::Null, &err))
            }
        };
        let Some(response) = response else {
            continue;
        };

        let json = serde_json::to_string(&response)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;
    }

    log::info!("입력 종료, 요청 루프 종료");
    Ok(())
}
