//! 최장 일치 음소 인덱스
//!
//! 음소를 문자 길이별로 묶어 두고, 커서 위치에서 긴 길이부터
//! 한 번씩 해시 조회합니다. 위치당 비용은 서로 다른 음소 길이 수(k)에 비례합니다.

use std::collections::HashMap;

use crate::glyph::{PhonemeEntry, PhonemeMap};

/// 최장 일치 검색용 음소 인덱스
#[derive(Debug, Clone, Default)]
pub struct PhonemeIndex {
    /// 우선순위 순서의 음소 항목 (길이 내림차순, 같은 길이는 삽입 순서)
    entries: Vec<PhonemeEntry>,
    /// (문자 길이, 음소 -> entries 인덱스), 길이 내림차순
    buckets: Vec<(usize, HashMap<String, usize>)>,
}

impl PhonemeIndex {
    /// 음소 맵으로 인덱스 생성
    ///
    /// 같은 키가 여러 번 있으면 첫 번째 항목만 사용
    pub fn build(map: &PhonemeMap) -> Self {
        let mut entries: Vec<PhonemeEntry> = map.iter().cloned().collect();
        // 안정 정렬: 같은 길이끼리는 삽입 순서 유지
        entries.sort_by_key(|e| std::cmp::Reverse(e.char_len()));

        let mut buckets: Vec<(usize, HashMap<String, usize>)> = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            let len = entry.char_len();
            if len == 0 {
                continue;
            }
            let same_len = matches!(buckets.last(), Some((l, _)) if *l == len);
            if !same_len {
                buckets.push((len, HashMap::new()));
            }
            if let Some((_, bucket)) = buckets.last_mut() {
                bucket.entry(entry.phoneme.clone()).or_insert(i);
            }
        }

        Self { entries, buckets }
    }

    /// 커서 위치에서 최장 일치 음소 검색
    ///
    /// - `text`: 소문자로 정규화된 입력
    /// - `offsets`: 각 문자의 바이트 시작 위치 + 마지막에 `text.len()` (길이 = 문자 수 + 1)
    /// - `cursor`: 문자 단위 커서
    pub fn longest_match(&self, text: &str, offsets: &[usize], cursor: usize) -> Option<&PhonemeEntry> {
        let remaining = offsets.len().saturating_sub(1).saturating_sub(cursor);

        for (len, bucket) in &self.buckets {
            if *len > remaining {
                continue;
            }
            let slice = &text[offsets[cursor]..offsets[cursor + len]];
            if let Some(&i) = bucket.get(slice) {
                return Some(&self.entries[i]);
            }
        }

        None
    }

    /// 우선순위 순서의 음소 목록
    pub fn phonemes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.phoneme.as_str())
    }

    /// 서로 다른 음소 길이 수
    pub fn distinct_lengths(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 문자별 바이트 시작 위치 (+ 끝 위치)
pub fn char_offsets(text: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    offsets
}
