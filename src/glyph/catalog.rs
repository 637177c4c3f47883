//! 글리프 카탈로그 (ID → 레코드)
//!
//! JSON 배열 형식의 카탈로그 파일을 로드합니다.
//! 순회 순서는 파일에 기록된 순서를 따릅니다.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::TableError;
use super::record::SymbolRecord;

/// 글리프 카탈로그
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    /// 파일 순서대로의 레코드 (중복 ID 포함 가능, 무결성 검사에서 보고)
    records: Vec<SymbolRecord>,
    /// ID -> records 인덱스 (같은 ID가 여러 번 나오면 첫 번째)
    index: HashMap<String, usize>,
}

impl SymbolCatalog {
    /// JSON 파일에서 카탈로그 로드
    ///
    /// # 파일 형식
    /// ```json
    /// [
    ///   { "glyphId": "G1", "phoneticValue": "a", "unicode": "U+1313F",
    ///     "description": "Egyptian vulture", "category": "Birds",
    ///     "imageUrl": "/glyphs/G1.svg" }
    /// ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value: serde_json::Value = serde_json::from_reader(reader)?;

        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 카탈로그 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;
        Self::from_json_value(&value)
    }

    fn from_json_value(value: &serde_json::Value) -> Result<Self, TableError> {
        let entries = value
            .as_array()
            .ok_or_else(|| TableError::FormatError("카탈로그는 JSON 배열이어야 합니다".into()))?;

        let mut records = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let mut record: SymbolRecord = serde_json::from_value(entry.clone())
                .map_err(|e| TableError::FormatError(format!("글리프 #{}: {}", i, e)))?;

            if record.id.trim().is_empty() {
                return Err(TableError::FormatError(format!("글리프 #{}: 빈 glyphId", i)));
            }
            if record.image_url.is_empty() {
                record.image_url = SymbolRecord::default_image_url(&record.id);
            }
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// 레코드 목록으로 카탈로그 생성
    pub fn from_records(records: Vec<SymbolRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index.entry(record.id.clone()).or_insert(i);
        }
        Self { records, index }
    }

    /// ID로 레코드 조회
    pub fn get(&self, id: &str) -> Option<&SymbolRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// ID 존재 여부
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 파일 순서대로 레코드 순회
    pub fn iter(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.records.iter()
    }

    /// 레코드 수 (중복 포함)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 두 번 이상 등장하는 ID 목록 (첫 등장 순서)
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            let id = record.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// 중복 ID의 두 번째 이후 레코드 제거
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.records.retain(|r| seen.insert(r.id.clone()));
        *self = Self::from_records(std::mem::take(&mut self.records));
    }
}
