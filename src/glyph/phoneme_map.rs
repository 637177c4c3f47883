//! 음소 맵 (음소 → 후보 글리프 ID 목록)

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::TableError;

/// 음소 하나와 그 후보 글리프 ID들
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeEntry {
    /// 소문자로 정규화된 음소 (예: "a", "sh")
    pub phoneme: String,
    /// 같은 음을 나타내는 글리프 ID들, 첫 번째가 기본값
    pub candidates: Vec<String>,
}

impl PhonemeEntry {
    /// 음소의 문자 수
    pub fn char_len(&self) -> usize {
        self.phoneme.chars().count()
    }
}

/// 음소 맵
///
/// 항목 순서는 파일의 키 순서(삽입 순서)를 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct PhonemeMap {
    entries: Vec<PhonemeEntry>,
}

impl PhonemeMap {
    /// JSON 파일에서 음소 맵 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "sh": ["M8"], "kh": ["Aa1", "F32"], "a": ["G1"] }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value: serde_json::Value = serde_json::from_reader(reader)?;

        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 음소 맵 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;
        Self::from_json_value(&value)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, TableError> {
        let obj = value
            .as_object()
            .ok_or_else(|| TableError::FormatError("음소 맵은 JSON 객체여야 합니다".into()))?;

        let mut entries = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            if key.is_empty() {
                return Err(TableError::FormatError("빈 음소 키".into()));
            }

            let list = val.as_array().ok_or_else(|| {
                TableError::FormatError(format!("음소 \"{}\": 후보 목록은 배열이어야 합니다", key))
            })?;

            let mut candidates = Vec::with_capacity(list.len());
            for id in list {
                let id = id.as_str().ok_or_else(|| {
                    TableError::FormatError(format!("음소 \"{}\": 글리프 ID는 문자열이어야 합니다", key))
                })?;
                candidates.push(id.to_string());
            }

            entries.push(PhonemeEntry {
                phoneme: key.to_ascii_lowercase(),
                candidates,
            });
        }

        Ok(Self { entries })
    }

    /// 항목 목록으로 음소 맵 생성 (음소는 소문자로 정규화)
    pub fn from_entries<I, P, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<C>)>,
        P: Into<String>,
        C: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(phoneme, candidates)| PhonemeEntry {
                phoneme: phoneme.into().to_ascii_lowercase(),
                candidates: candidates.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { entries }
    }

    /// 음소의 후보 목록 조회 (같은 키가 여러 번이면 첫 번째)
    pub fn get(&self, phoneme: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.phoneme == phoneme)
            .map(|e| e.candidates.as_slice())
    }

    /// 삽입 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = &PhonemeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 중복 음소의 두 번째 이후 항목 제거
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.entries.retain(|e| seen.insert(e.phoneme.clone()));
    }

    /// 지정한 음소들을 매칭 대상에서 제외
    pub fn exclude(&mut self, phonemes: &HashSet<String>) {
        self.entries.retain(|e| !phonemes.contains(&e.phoneme));
    }
}
