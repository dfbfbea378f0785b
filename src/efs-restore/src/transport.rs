// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements the stubs using the AWS SDK for Rust.

use crate::error::Status;
use crate::model::{
    DescribeFileSystemPolicyRequest, DescribeFileSystemsRequest, DescribeFileSystemsResponse,
    DescribeRestoreJobRequest, FileSystemDescription, FileSystemPolicy,
    PutFileSystemPolicyRequest, RestoreJob,
};
use crate::stub;
use crate::{Error, Result};
use aws_sdk_efs::error::{ProvideErrorMetadata, SdkError};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Creates AWS SDK clients.
///
/// Credentials and any unset configuration are resolved by `aws-config`, from
/// the environment, the shared configuration files, and the instance metadata
/// service.
#[derive(Clone, Debug, Default)]
pub struct AwsClientFactory {
    profile: Option<String>,
    endpoint: Option<String>,
}

impl AwsClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the named profile from the shared configuration files.
    pub fn with_profile<V: Into<String>>(mut self, v: V) -> Self {
        self.profile = Some(v.into());
        self
    }

    /// Sends all requests to `v` instead of the regional service endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    async fn load(&self, region: &str) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }
}

#[async_trait::async_trait]
impl stub::ClientFactory for AwsClientFactory {
    async fn file_systems(&self, region: &str) -> Result<Arc<dyn stub::FileSystems>> {
        let config = self.load(region).await;
        tracing::debug!(region, "creating Amazon EFS client");
        Ok(Arc::new(FileSystems::new(aws_sdk_efs::Client::new(&config))))
    }

    async fn backup(&self, region: &str) -> Result<Arc<dyn stub::Backup>> {
        let config = self.load(region).await;
        tracing::debug!(region, "creating AWS Backup client");
        Ok(Arc::new(Backup::new(aws_sdk_backup::Client::new(&config))))
    }
}

/// Implements [stub::FileSystems] using [aws_sdk_efs::Client].
#[derive(Clone, Debug)]
pub struct FileSystems {
    client: aws_sdk_efs::Client,
}

impl FileSystems {
    pub fn new(client: aws_sdk_efs::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl stub::FileSystems for FileSystems {
    async fn describe_file_system_policy(
        &self,
        req: DescribeFileSystemPolicyRequest,
    ) -> Result<FileSystemPolicy> {
        let response = self
            .client
            .describe_file_system_policy()
            .file_system_id(req.file_system_id)
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(FileSystemPolicy::new()
            .set_file_system_id(response.file_system_id().unwrap_or_default())
            .set_or_clear_policy(response.policy()))
    }

    async fn put_file_system_policy(
        &self,
        req: PutFileSystemPolicyRequest,
    ) -> Result<FileSystemPolicy> {
        let response = self
            .client
            .put_file_system_policy()
            .file_system_id(req.file_system_id)
            .policy(req.policy)
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(FileSystemPolicy::new()
            .set_file_system_id(response.file_system_id().unwrap_or_default())
            .set_or_clear_policy(response.policy()))
    }

    async fn describe_file_systems(
        &self,
        req: DescribeFileSystemsRequest,
    ) -> Result<DescribeFileSystemsResponse> {
        let response = self
            .client
            .describe_file_systems()
            .file_system_id(req.file_system_id)
            .send()
            .await
            .map_err(map_sdk_error)?;
        let file_systems = response.file_systems().iter().map(|fs| {
            FileSystemDescription::new()
                .set_file_system_id(fs.file_system_id())
                .set_file_system_arn(fs.file_system_arn().unwrap_or_default())
        });
        Ok(DescribeFileSystemsResponse::new().set_file_systems(file_systems))
    }
}

/// Implements [stub::Backup] using [aws_sdk_backup::Client].
#[derive(Clone, Debug)]
pub struct Backup {
    client: aws_sdk_backup::Client,
}

impl Backup {
    pub fn new(client: aws_sdk_backup::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl stub::Backup for Backup {
    async fn describe_restore_job(&self, req: DescribeRestoreJobRequest) -> Result<RestoreJob> {
        let response = self
            .client
            .describe_restore_job()
            .restore_job_id(&req.restore_job_id)
            .send()
            .await
            .map_err(map_sdk_error)?;
        let mut job = RestoreJob::new()
            .set_restore_job_id(response.restore_job_id().unwrap_or(&req.restore_job_id));
        job.status = response.status().map(|s| s.as_str().to_string());
        job.completion_date = response.completion_date().map(to_chrono).transpose()?;
        Ok(job)
    }
}

/// Converts the SDK errors into the errors returned by this crate.
///
/// Errors reported by the service keep their error code and message. Any other
/// failure (timeouts, connection errors, invalid configuration) is a transport
/// error.
pub(crate) fn map_sdk_error<E, R>(err: SdkError<E, R>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(e) => {
            let e = e.into_err();
            Error::service(Status::from_service(
                e.code().unwrap_or_default(),
                e.message().unwrap_or_default(),
            ))
        }
        e => Error::transport(e),
    }
}

fn to_chrono(t: &aws_sdk_backup::primitives::DateTime) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(t.secs(), t.subsec_nanos())
        .ok_or_else(|| Error::deser(format!("timestamp out of range: {t:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Code, POLICY_NOT_FOUND};
    use aws_sdk_efs::error::ErrorMetadata;
    use aws_sdk_efs::operation::describe_file_system_policy::DescribeFileSystemPolicyError;

    #[test]
    fn map_service_error() {
        let meta = ErrorMetadata::builder()
            .code(POLICY_NOT_FOUND)
            .message("no policy for fs-12345")
            .build();
        let err = SdkError::<DescribeFileSystemPolicyError, ()>::service_error(
            DescribeFileSystemPolicyError::generic(meta),
            (),
        );
        let got = map_sdk_error(err);
        assert!(got.is_policy_not_found(), "{got:?}");
        let status = got.status().expect("service errors have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "no policy for fs-12345");
    }

    #[test]
    fn map_other_service_error() {
        let meta = ErrorMetadata::builder()
            .code("AccessDeniedException")
            .message("not authorized")
            .build();
        let err = SdkError::<DescribeFileSystemPolicyError, ()>::service_error(
            DescribeFileSystemPolicyError::generic(meta),
            (),
        );
        let got = map_sdk_error(err);
        assert!(!got.is_not_found(), "{got:?}");
        assert_eq!(got.status().map(|s| s.code), Some(Code::PermissionDenied));
    }

    #[test]
    fn map_transport_error() {
        let err = SdkError::<DescribeFileSystemPolicyError, ()>::construction_failure(
            "simulated failure",
        );
        let got = map_sdk_error(err);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
    }

    #[test]
    fn timestamp_conversion() -> anyhow::Result<()> {
        let input = aws_sdk_backup::primitives::DateTime::from_secs(1_735_043_696);
        let got = to_chrono(&input)?;
        let want = DateTime::parse_from_rfc3339("2024-12-24T12:34:56Z")?.with_timezone(&Utc);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn factory_configuration() {
        let factory = AwsClientFactory::new()
            .with_profile("restore-admin")
            .with_endpoint("http://localhost:4566");
        assert_eq!(factory.profile.as_deref(), Some("restore-admin"));
        assert_eq!(factory.endpoint.as_deref(), Some("http://localhost:4566"));
    }
}
