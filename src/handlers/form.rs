//! `multipart/form-data` 요청 본문 읽기
//!
//! 텍스트 필드는 이름 → 값으로 모으고, 파일명이 있는 파트는 업로드 파일로 읽습니다.
//! 파일 크기는 읽는 도중 제한을 넘으면 바로 중단합니다.

use std::collections::HashMap;
use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use crate::core::errors::AppError;
use crate::services::storage::AssetStore;

/// 업로드된 파일 하나
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 읽어 들인 multipart 본문
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl MultipartForm {
    /// 텍스트 필드 값을 꺼냅니다. 비어 있으면 `None`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|value| !value.is_empty())
    }

    pub fn file(&self, field_name: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field_name == field_name)
    }
}

/// multipart 스트림을 끝까지 읽습니다.
pub async fn read_multipart(mut payload: Multipart, max_file_bytes: usize) -> Result<MultipartForm, AppError> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::ValidationError(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_file_bytes {
                return Err(AppError::ValidationError(format!(
                    "field '{}' exceeds {} bytes",
                    name, max_file_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            // 파일을 고르지 않은 폼은 빈 파일명·빈 본문의 파트를 보냅니다.
            Some(file_name) if file_name.is_empty() || bytes.is_empty() => {
                log::debug!("빈 파일 파트 무시: {}", name);
            }
            Some(file_name) => form.files.push(UploadedFile {
                field_name: name,
                file_name,
                bytes,
            }),
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| AppError::ValidationError(format!("field '{}' is not valid UTF-8", name)))?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

/// `picture` 파일이 있으면 저장하고 저장된 파일명을 반환합니다.
///
/// 폼에 `picturePath`가 명시되어 있으면 파일을 저장하지 않고 그 값을 씁니다.
pub async fn resolve_picture_path(
    form: &mut MultipartForm,
    asset_store: &dyn AssetStore,
) -> Result<Option<String>, AppError> {
    if let Some(explicit) = form.take("picturePath") {
        return Ok(Some(explicit));
    }

    match form.file("picture") {
        Some(file) => Ok(Some(asset_store.save(&file.file_name, file.bytes.clone()).await?)),
        None => Ok(None),
    }
}
