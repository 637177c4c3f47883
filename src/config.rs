//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::glyph::IntegrityPolicy;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_PATH_ENV: &str = "CARTOUCHE_CONFIG";

/// Cartouche 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CartoucheConfig {
    /// 외부 글리프 카탈로그 경로 (None이면 내장 테이블)
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// 외부 음소 맵 경로 (None이면 내장 테이블)
    #[serde(default)]
    pub phoneme_map_path: Option<String>,
    /// 무결성 위반 처리 정책
    #[serde(default)]
    pub integrity: IntegrityPolicy,
}

/// 설정 파일 경로: $CARTOUCHE_CONFIG 또는 ~/.config/cartouche/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("cartouche").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> CartoucheConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> CartoucheConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}), 기본값 사용: {}", path.display(), e);
            CartoucheConfig::default()
        }),
        Err(_) => CartoucheConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &CartoucheConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
