//! 후보 글리프 선택 전략

/// 음소의 후보 목록에서 사용할 글리프를 고르는 전략
///
/// 반환값은 `candidates`의 인덱스이며, None이거나 범위를 벗어나면
/// 해당 구간은 아무것도 출력하지 않습니다.
pub trait VariantSelector: Send + Sync {
    fn select(&self, phoneme: &str, candidates: &[String]) -> Option<usize>;
}

/// 기본 전략: 항상 첫 번째 후보
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVariant;

impl VariantSelector for FirstVariant {
    fn select(&self, _phoneme: &str, candidates: &[String]) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

impl<F> VariantSelector for F
where
    F: Fn(&str, &[String]) -> Option<usize> + Send + Sync,
{
    fn select(&self, phoneme: &str, candidates: &[String]) -> Option<usize> {
        self(phoneme, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_variant() {
        assert_eq!(FirstVariant.select("kh", &ids(&["Aa1", "F32"])), Some(0));
        assert_eq!(FirstVariant.select("kh", &[]), None);
    }

    #[test]
    fn test_closure_selector() {
        let last = |_: &str, c: &[String]| c.len().checked_sub(1);
        assert_eq!(last.select("kh", &ids(&["Aa1", "F32"])), Some(1));
        assert_eq!(last.select("kh", &[]), None);
    }
}
