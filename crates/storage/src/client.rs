use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

/// Errors from the storage gateway.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Bucket name, endpoint, or credentials are missing from the environment.
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    /// The provider rejected or failed an upload. The batch contract is
    /// all-or-error: the caller must not assume partial success.
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Connection settings for the S3-compatible bucket, from environment
/// variables (`S3_ENDPOINT`, `S3_REGION`, `S3_ACCESS_KEY_ID`,
/// `S3_SECRET_ACCESS_KEY`, `S3_BUCKET_NAME`, `S3_PUBLIC_URL`).
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// Base URL for constructing public object URLs. When unset, URLs are
    /// built from the endpoint and bucket name.
    pub public_url: Option<String>,
}

impl StorageConfig {
    /// Load from environment variables.
    ///
    /// `S3_REGION` defaults to `auto`, in which case `S3_ENDPOINT` is
    /// required (custom providers do not have real regions).
    pub fn from_env() -> Result<Self, StorageError> {
        let endpoint = std::env::var("S3_ENDPOINT").ok();
        let region = std::env::var("S3_REGION").unwrap_or_else(|_| "auto".into());

        if region == "auto" && endpoint.is_none() {
            return Err(StorageError::Configuration(
                "S3_ENDPOINT is required when S3_REGION is 'auto'".into(),
            ));
        }

        let bucket = std::env::var("S3_BUCKET_NAME")
            .map_err(|_| StorageError::Configuration("S3_BUCKET_NAME is not set".into()))?;

        Ok(Self {
            endpoint,
            region,
            access_key_id: std::env::var("S3_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY").unwrap_or_default(),
            bucket,
            public_url: std::env::var("S3_PUBLIC_URL").ok(),
        })
    }
}

/// One file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Client for uploading files to the configured bucket.
pub struct StorageClient {
    s3: aws_sdk_s3::Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Build a client from the given configuration.
    pub async fn new(config: StorageConfig) -> Self {
        let credentials = aws_credential_types::Credentials::from_keys(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            // Required for MinIO and most S3-compatible providers.
            .force_path_style(true);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            s3: aws_sdk_s3::Client::from_conf(builder.build()),
            config,
        }
    }

    /// Upload a batch of files, returning their public URLs in input order.
    ///
    /// Each file is stored under a timestamp-prefixed key so repeated
    /// uploads of the same filename never collide. If any upload fails the
    /// whole operation fails; already-uploaded objects are not rolled back.
    pub async fn upload_files(&self, files: &[UploadFile]) -> Result<Vec<String>, StorageError> {
        let mut urls = Vec::with_capacity(files.len());

        for file in files {
            let key = object_key(&file.filename, chrono::Utc::now().timestamp_millis());

            self.s3
                .put_object()
                .bucket(&self.config.bucket)
                .key(&key)
                .body(ByteStream::from(file.bytes.clone()))
                .content_type(&file.content_type)
                .send()
                .await
                .map_err(|e| {
                    StorageError::Upload(format!(
                        "{} -> {}: {}",
                        file.filename,
                        key,
                        DisplayErrorContext(&e)
                    ))
                })?;

            tracing::debug!(key = %key, size = file.bytes.len(), "Uploaded object");
            urls.push(public_url(&self.config, &key));
        }

        Ok(urls)
    }
}

/// Collision-resistant object key: unix-millis prefix plus the filename
/// with whitespace collapsed to dashes.
fn object_key(filename: &str, unix_millis: i64) -> String {
    let sanitized: String = filename
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{unix_millis}-{sanitized}")
}

/// Public URL for a stored object: the configured public base when set,
/// otherwise endpoint + bucket.
fn public_url(config: &StorageConfig, key: &str) -> String {
    match (&config.public_url, &config.endpoint) {
        (Some(base), _) => format!("{}/{key}", base.trim_end_matches('/')),
        (None, Some(endpoint)) => {
            format!("{}/{}/{key}", endpoint.trim_end_matches('/'), config.bucket)
        }
        (None, None) => format!("https://{}.s3.amazonaws.com/{key}", config.bucket),
    }
}
