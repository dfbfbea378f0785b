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

//! Contains the RestoreOps client and related types.

use crate::model::{
    CopyFileSystemPolicyRequest, RestoreJobDetails, RestoreJobDetailsRequest, RestoreMetrics,
    RestoreMetricsRequest, SourceFileSystemArnRequest,
};
use crate::stub::ClientFactory;
use crate::transport::AwsClientFactory;
use crate::{Result, file_system, policy, restore};
use std::sync::Arc;

/// Implements a client for the EFS restore runbook operations.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use efs_restore::client::RestoreOps;
/// let client = RestoreOps::builder().build().await?;
/// // use `client` to run the runbook operations.
/// # efs_restore::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `RestoreOps` use the `with_*` methods in the type returned by
/// [builder()][RestoreOps::builder]. The default configuration should work for
/// most applications. Credentials are resolved from the standard AWS sources:
/// environment variables, the shared configuration files, and the instance or
/// container metadata.
///
/// Each operation receives the region in its request, and creates short-lived
/// service clients for that region.
///
/// # Pooling and Cloning
///
/// `RestoreOps` is cheap to clone. You do not need to wrap it in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone)]
pub struct RestoreOps {
    factory: Arc<dyn ClientFactory>,
}

impl std::fmt::Debug for RestoreOps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreOps").finish_non_exhaustive()
    }
}

impl RestoreOps {
    /// Returns a builder for [RestoreOps].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use efs_restore::client::RestoreOps;
    /// let client = RestoreOps::builder()
    ///     .with_profile("restore-admin")
    ///     .build()
    ///     .await?;
    /// # efs_restore::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: ClientFactory + 'static,
    {
        Self {
            factory: Arc::new(stub),
        }
    }

    /// Copies the policy of the source file system to the target file system.
    ///
    /// If the source file system has no policy, the target receives a default
    /// policy that denies any access without a secure transport. Any failure
    /// is returned as an [operation][crate::Error::is_operation] error naming
    /// both file systems.
    ///
    /// # Example
    /// ```no_run
    /// # use efs_restore::client::RestoreOps;
    /// # use efs_restore::model::CopyFileSystemPolicyRequest;
    /// # async fn sample(client: &RestoreOps) -> efs_restore::Result<()> {
    /// client
    ///     .copy_file_system_policy(
    ///         CopyFileSystemPolicyRequest::new()
    ///             .set_source_file_system_id("fs-12345")
    ///             .set_target_file_system_id("fs-67890")
    ///             .set_region("us-west-2"),
    ///     )
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub async fn copy_file_system_policy(&self, req: CopyFileSystemPolicyRequest) -> Result<()> {
        policy::copy_file_system_policy(self.factory.as_ref(), req).await
    }

    /// Returns the identifier and completion time of a restore job.
    ///
    /// # Example
    /// ```no_run
    /// # use efs_restore::client::RestoreOps;
    /// # use efs_restore::model::RestoreJobDetailsRequest;
    /// # async fn sample(client: &RestoreOps) -> efs_restore::Result<()> {
    /// let details = client
    ///     .restore_job_details(
    ///         RestoreJobDetailsRequest::new()
    ///             .set_restore_job_id("1234-5678")
    ///             .set_region("us-west-2"),
    ///     )
    ///     .await?;
    /// println!("restore completed at {}", details.completion_time);
    /// # Ok(()) }
    /// ```
    pub async fn restore_job_details(
        &self,
        req: RestoreJobDetailsRequest,
    ) -> Result<RestoreJobDetails> {
        restore::restore_job_details(self.factory.as_ref(), req).await
    }

    /// Logs the metrics of a completed restore job.
    ///
    /// The completion time is obtained from AWS Backup, the remaining values
    /// come from the request. Returns the logged values.
    pub async fn log_restore_metrics(&self, req: RestoreMetricsRequest) -> Result<RestoreMetrics> {
        restore::log_restore_metrics(self.factory.as_ref(), req).await
    }

    /// Returns the ARN of a file system.
    ///
    /// Any failure is returned as an [operation][crate::Error::is_operation]
    /// error naming the file system and the region.
    pub async fn source_file_system_arn(&self, req: SourceFileSystemArnRequest) -> Result<String> {
        file_system::source_file_system_arn(self.factory.as_ref(), req).await
    }
}

/// A builder for [RestoreOps].
///
/// ```
/// # tokio_test::block_on(async {
/// # use efs_restore::client::RestoreOps;
/// let client = RestoreOps::builder()
///     .with_endpoint("http://localhost:4566")
///     .build()
///     .await?;
/// # efs_restore::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientBuilder {
    profile: Option<String>,
    endpoint: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the named profile from the shared AWS configuration files.
    ///
    /// By default the client uses the `AWS_PROFILE` environment variable, or
    /// the `default` profile.
    pub fn with_profile<V: Into<String>>(mut self, v: V) -> Self {
        self.profile = Some(v.into());
        self
    }

    /// Sends all requests to a custom endpoint.
    ///
    /// Applications running against a local emulator, or in networks that
    /// require VPC endpoints, may want to override the regional endpoints.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Creates a new client.
    pub async fn build(self) -> Result<RestoreOps> {
        let mut factory = AwsClientFactory::new();
        if let Some(profile) = self.profile {
            factory = factory.with_profile(profile);
        }
        if let Some(endpoint) = self.endpoint {
            factory = factory.with_endpoint(endpoint);
        }
        Ok(RestoreOps::from_stub(factory))
    }
}
