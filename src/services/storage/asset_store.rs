//! 업로드 파일 저장소
//!
//! 업로드된 이미지는 `ASSET_DIR` 아래에 클라이언트가 보낸 파일명 그대로 저장되고,
//! `/assets/{file}` 경로로 정적 서빙됩니다.
//! 저장 파일명은 경로 구성요소를 모두 제거한 기본 이름만 사용하므로
//! 업로드가 저장 디렉터리 밖으로 나갈 수 없습니다.

use std::path::PathBuf;
use async_trait::async_trait;
use log::info;
use tokio::fs;
use crate::{
    config::StorageConfig,
    core::errors::{AppError, ErrorContext},
};

/// 업로드 파일 저장소 포트
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// 파일을 저장하고 저장된 파일명을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 파일명이 비었거나 크기 제한 초과
    /// * `AppError::StorageError` - 쓰기 실패
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError>;

    /// 파일 하나의 최대 크기 (바이트)
    fn max_upload_bytes(&self) -> usize;
}

/// 클라이언트 파일명에서 기본 이름만 남깁니다.
///
/// `/`와 `\` 모두 경로 구분자로 취급하며, `.`/`..`처럼 파일을 가리키지 않는 이름은 거부합니다.
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    match base {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

/// 로컬 디스크 저장소
pub struct LocalAssetStore {
    dir: PathBuf,
    max_upload_bytes: usize,
}

impl LocalAssetStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.asset_dir),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// 저장 디렉터리가 없으면 생성합니다.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::StorageError(format!("{}: {}", self.dir.display(), e)))?;

        info!("📁 업로드 디렉터리: {}", self.dir.display());
        Ok(())
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let name = sanitize_file_name(file_name)
            .ok_or_else(|| AppError::ValidationError("upload file name is empty".to_string()))?;

        if bytes.len() > self.max_upload_bytes {
            return Err(AppError::ValidationError(format!(
                "upload exceeds {} bytes",
                self.max_upload_bytes
            )));
        }

        fs::create_dir_all(&self.dir)
            .await
            .context("업로드 디렉터리 생성 실패")?;

        let path = self.dir.join(&name);
        fs::write(&path, &bytes)
            .await
            .map_err(|e| AppError::StorageError(format!("{}: {}", path.display(), e)))?;

        info!("🖼️ 업로드 저장: {} ({} bytes)", name, bytes.len());
        Ok(name)
    }

    fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
