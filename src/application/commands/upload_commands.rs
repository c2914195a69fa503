// src/application/commands/upload_commands.rs

use std::path::{Path, PathBuf};

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::ImageFile;
use crate::error::AppResult;

/// Upload the given files; unstored files are left out of the result
pub async fn upload_images(
    dto: UploadImagesDto,
    state: &AppState,
) -> Result<UploadedImagesDto, String> {
    let files = read_files(&dto.paths).to_error_response()?;
    let requested = files.len();

    let urls = state.image_upload_service.upload_many(files).await;

    Ok(UploadedImagesDto { urls, requested })
}

/// Upload the given files, reporting the outcome of each one
pub async fn upload_images_detailed(
    dto: UploadImagesDto,
    state: &AppState,
) -> Result<Vec<UploadOutcomeDto>, String> {
    let files = read_files(&dto.paths).to_error_response()?;
    let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();

    let results = state.image_upload_service.upload_many_detailed(files).await;

    Ok(names
        .into_iter()
        .zip(results)
        .map(|(name, result)| UploadOutcomeDto::new(name, result))
        .collect())
}

/// Upload every image found below a directory
pub async fn upload_directory(
    dto: UploadDirectoryDto,
    state: &AppState,
) -> Result<UploadedImagesDto, String> {
    let path = PathBuf::from(dto.directory_path);

    let files = state
        .image_upload_service
        .collect_images(&path)
        .to_error_response()?;
    let requested = files.len();

    let urls = state.image_upload_service.upload_many(files).await;

    Ok(UploadedImagesDto { urls, requested })
}

fn read_files(paths: &[String]) -> AppResult<Vec<ImageFile>> {
    paths
        .iter()
        .map(|p| ImageFile::from_path(Path::new(p)))
        .collect()
}
