//! 입력 정규화

/// 매칭용 정규화: ASCII 소문자 변환만 수행 (내부/양끝 공백 유지)
///
/// 비 ASCII 문자는 그대로 두므로 KELVIN SIGN(U+212A) 같은 문자가
/// ASCII 글자로 바뀌어 매칭되지 않습니다.
pub fn fold_case(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// 요청 경계용 정규화: 소문자 변환 후 양끝 공백 제거
pub fn sanitize(input: &str) -> String {
    fold_case(input).trim().to_string()
}

/// 정규화 후 비어 있는지 확인
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
