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

//! Traits to mock the services used by the runbook operations.
//!
//! Application developers may need to implement these traits to mock
//! [RestoreOps][crate::client::RestoreOps], or to supply clients configured in
//! ways this crate does not support. In other use-cases, application
//! developers only use `RestoreOps` and need not be concerned with these
//! traits or their implementations.

use crate::Result;
use crate::model::{
    DescribeFileSystemPolicyRequest, DescribeFileSystemsRequest, DescribeFileSystemsResponse,
    DescribeRestoreJobRequest, FileSystemPolicy, PutFileSystemPolicyRequest, RestoreJob,
};
use std::sync::Arc;

/// The subset of the Amazon EFS API used by the runbook operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FileSystems: Send + Sync {
    /// Returns the policy of a file system.
    ///
    /// File systems without a policy return an error with the
    /// [PolicyNotFound][crate::error::POLICY_NOT_FOUND] reason.
    async fn describe_file_system_policy(
        &self,
        req: DescribeFileSystemPolicyRequest,
    ) -> Result<FileSystemPolicy>;

    /// Replaces the policy of a file system.
    async fn put_file_system_policy(
        &self,
        req: PutFileSystemPolicyRequest,
    ) -> Result<FileSystemPolicy>;

    /// Describes one or more file systems.
    async fn describe_file_systems(
        &self,
        req: DescribeFileSystemsRequest,
    ) -> Result<DescribeFileSystemsResponse>;
}

/// The subset of the AWS Backup API used by the runbook operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Backup: Send + Sync {
    /// Describes a restore job.
    async fn describe_restore_job(&self, req: DescribeRestoreJobRequest) -> Result<RestoreJob>;
}

/// Creates service clients for a region.
///
/// The operations create a new client for each invocation, using the region
/// in the request.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ClientFactory: Send + Sync {
    /// Returns an Amazon EFS client for `region`.
    async fn file_systems(&self, region: &str) -> Result<Arc<dyn FileSystems>>;

    /// Returns an AWS Backup client for `region`.
    async fn backup(&self, region: &str) -> Result<Arc<dyn Backup>>;
}
