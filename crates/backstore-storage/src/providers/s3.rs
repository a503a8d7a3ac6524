//! S3-compatible blob store using the AWS SDK.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use bytes::Bytes;
use tracing::{debug, error, info, instrument};

use backstore_core::error::{AppError, ErrorKind};
use backstore_core::result::AppResult;
use backstore_core::traits::blob::{BlobMetadata, BlobStore};

use crate::connection_string::{ConnectionSettings, DEFAULT_REGION};

/// Provider name reported by the S3 blob store.
pub const PROVIDER_NAME: &str = "s3";

/// S3-compatible blob store.
///
/// Containers map to buckets and are created on demand by `upload`.
#[derive(Clone)]
pub struct S3BlobStore {
    client: Client,
    region: String,
    endpoint: Option<String>,
}

impl std::fmt::Debug for S3BlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3BlobStore")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl S3BlobStore {
    /// Build an S3 client from parsed connection settings.
    ///
    /// No request is sent here; connectivity problems surface on first use.
    pub async fn new(settings: &ConnectionSettings) -> AppResult<Self> {
        info!(
            endpoint = settings.endpoint.as_deref().unwrap_or("aws"),
            region = %settings.region,
            explicit_credentials = settings.access_key.is_some(),
            "Initializing S3 blob store"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.region.clone()));
        if let Some(key) = &settings.access_key {
            let credentials = aws_sdk_s3::config::Credentials::new(
                key.id.clone(),
                key.secret.clone(),
                None,
                None,
                "backstore-connection-string",
            );
            loader = loader.credentials_provider(credentials);
        }
        let sdk_config = loader.load().await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(settings.force_path_style);
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            region: settings.region.clone(),
            endpoint: settings.endpoint.clone(),
        })
    }

    /// Create the bucket unless it already exists.
    async fn ensure_container(&self, container: &str) -> AppResult<()> {
        let mut request = self.client.create_bucket().bucket(container);
        if self.region != DEFAULT_REGION {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => {
                info!(container, "Created bucket");
                Ok(())
            }
            Err(err) => {
                let already_there = err.as_service_error().is_some_and(|e| {
                    e.is_bucket_already_owned_by_you() || e.is_bucket_already_exists()
                });
                if already_there {
                    debug!(container, "Bucket already exists");
                    Ok(())
                } else {
                    Err(map_sdk_error("create_bucket", container, "", err))
                }
            }
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self, metadata, payload), fields(backend = "s3", size = payload.len()))]
    async fn upload(
        &self,
        container: &str,
        name: &str,
        metadata: BlobMetadata,
        payload: Bytes,
    ) -> AppResult<()> {
        self.ensure_container(container).await?;

        self.client
            .put_object()
            .bucket(container)
            .key(name)
            .set_metadata(Some(metadata))
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| map_sdk_error("put_object", container, name, e))?;

        debug!(container, name, "Uploaded blob");
        Ok(())
    }

    #[instrument(skip(self), fields(backend = "s3"))]
    async fn download(&self, container: &str, name: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(container)
            .key(name)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    AppError::not_found(format!("Blob '{container}/{name}' not found"))
                } else {
                    map_sdk_error("get_object", container, name, e)
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| {
                error!(container, name, error = %e, "Blob download stream failed");
                AppError::from(std::io::Error::other(e))
            })?
            .into_bytes();

        Ok(data)
    }
}

/// Map an SDK error to an AppError, logging the full error chain.
fn map_sdk_error<E>(op: &'static str, container: &str, name: &str, err: SdkError<E>) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();
    error!(op, container, name, error = %detail, "S3 request failed");

    let kind = match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::Storage,
    };
    AppError::with_source(kind, format!("S3 {op} failed: {detail}"), err)
}

#[cfg(test)]
mod tests {
    //! Live tests need an S3-compatible endpoint. Set
    //! `S3_TEST_CONNECTION_STRING` and run with `--ignored`.

    use super::*;

    async fn store() -> S3BlobStore {
        let raw = std::env::var("S3_TEST_CONNECTION_STRING").unwrap_or_else(|_| {
            "Endpoint=http://localhost:9000;AccessKeyId=minioadmin;SecretAccessKey=minioadmin;ForcePathStyle=true"
                .to_string()
        });
        S3BlobStore::new(&ConnectionSettings::parse(&raw).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_construction_does_not_connect() {
        let settings =
            ConnectionSettings::parse("Endpoint=127.0.0.1:1;AccessKeyId=a;SecretAccessKey=b")
                .unwrap();
        let store = S3BlobStore::new(&settings).await.unwrap();
        assert_eq!(store.provider_name(), "s3");
        assert!(format!("{store:?}").contains("127.0.0.1:1"));
    }

    #[tokio::test]
    #[ignore = "requires an S3-compatible endpoint"]
    async fn test_upload_overwrite_download() {
        let store = store().await;
        let meta = BlobMetadata::from([("origin".to_string(), "test".to_string())]);
        store
            .upload("backstore-test", "blob", meta, Bytes::from_static(b"A"))
            .await
            .unwrap();
        store
            .upload("backstore-test", "blob", BlobMetadata::new(), Bytes::from_static(b"B"))
            .await
            .unwrap();
        let data = store.download("backstore-test", "blob").await.unwrap();
        assert_eq!(data, Bytes::from_static(b"B"));
    }

    #[tokio::test]
    #[ignore = "requires an S3-compatible endpoint"]
    async fn test_missing_blob_is_not_found() {
        let store = store().await;
        store
            .upload("backstore-test", "present", BlobMetadata::new(), Bytes::new())
            .await
            .unwrap();
        let err = store.download("backstore-test", "absent").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
