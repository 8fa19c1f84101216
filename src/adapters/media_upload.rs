use std::fmt::Display;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::dependencies::config;

// Sibling utility for the media host, kept apart from the tweet core;
// nothing in services/ depends on it.

pub struct RemoteAsset {
	pub url: String,
	pub public_id: String,
}

#[derive(Debug)]
pub enum UploadError {
	MissingPath,
	UnreadableFile(std::io::Error),
	TransportError(reqwest::Error),
	UploadRejected(u16),
}

impl Display for UploadError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UploadError::MissingPath => write!(f, "no file path provided"),
			UploadError::UnreadableFile(err) => write!(f, "local file unreadable : {}", err),
			UploadError::TransportError(err) => write!(f, "{}", err),
			UploadError::UploadRejected(status) => write!(f, "media host rejected upload ({})", status),
		}
	}
}

/// Removes the local temp file when dropped, so every exit path out of
/// `upload` releases it.
struct TempFileGuard(PathBuf);

impl Drop for TempFileGuard {
	fn drop(&mut self) {
		if let Err(err) = std::fs::remove_file(&self.0) {
			if err.kind() != std::io::ErrorKind::NotFound {
				tracing::warn!("temp file removal failed : {:?}", err);
			}
		}
	}
}

#[derive(Deserialize)]
struct UploadResponse {
	secure_url: String,
	public_id: String,
}

pub struct MediaUploader {
	client: reqwest::Client,
	upload_url: String,
	api_key: String,
}

impl MediaUploader {
	pub fn new(
		upload_url: String,
		api_key: String,
	) -> Self {
		Self {
			client: reqwest::Client::new(),
			upload_url,
			api_key,
		}
	}

	pub fn from_env() -> Self {
		let config = config();
		Self::new(config.media_upload_url.clone(), config.media_api_key.clone())
	}

	pub async fn upload(
		&self,
		local_path: Option<&Path>,
	) -> Result<RemoteAsset, UploadError> {
		let local_path = local_path.ok_or(UploadError::MissingPath)?;
		let _cleanup = TempFileGuard(local_path.to_path_buf());

		let bytes = tokio::fs::read(local_path).await.map_err(UploadError::UnreadableFile)?;
		let file_name = local_path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or("upload")
			.to_string();

		let form = Form::new()
			.text("api_key", self.api_key.clone())
			.text("folder", "uploads")
			.part("file", Part::bytes(bytes).file_name(file_name));

		let response = self
			.client
			.post(&self.upload_url)
			.multipart(form)
			.send()
			.await
			.map_err(|err| {
				tracing::error!("media upload failed : {:?}", err);
				UploadError::TransportError(err)
			})?;

		if !response.status().is_success() {
			return Err(UploadError::UploadRejected(response.status().as_u16()));
		}

		let uploaded = response.json::<UploadResponse>().await.map_err(UploadError::TransportError)?;
		Ok(RemoteAsset {
			url: uploaded.secure_url,
			public_id: uploaded.public_id,
		})
	}
}
