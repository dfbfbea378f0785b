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

//! Copies the file system policy between two file systems.
//!
//! A restored file system starts without a resource policy. The runbook copies
//! the policy of the source file system to the restored one. If the source has
//! no policy, the restored file system gets a policy that denies access over
//! insecure transports.

use crate::model::{
    CopyFileSystemPolicyRequest, DescribeFileSystemPolicyRequest, PolicyDocument,
    PutFileSystemPolicyRequest,
};
use crate::stub::{ClientFactory, FileSystems};
use crate::{Error, Result};

/// Copies the policy of `req.source_file_system_id` to `req.target_file_system_id`.
///
/// Any failure, including validation failures, is wrapped in an
/// [operation][Error::is_operation] error naming both file systems.
pub(crate) async fn copy_file_system_policy<F>(
    factory: &F,
    req: CopyFileSystemPolicyRequest,
) -> Result<()>
where
    F: ClientFactory + ?Sized,
{
    copy(factory, &req).await.map_err(|e| {
        Error::operation(
            format!(
                "failed to copy file system policy from {} to {}",
                req.source_file_system_id, req.target_file_system_id
            ),
            e,
        )
    })
}

async fn copy<F>(factory: &F, req: &CopyFileSystemPolicyRequest) -> Result<()>
where
    F: ClientFactory + ?Sized,
{
    req.validate()?;
    let client = factory.file_systems(&req.region).await?;

    let policy = match source_policy(client.as_ref(), &req.source_file_system_id).await? {
        Some(policy) => policy,
        None => {
            tracing::warn!(
                "No specific policy found for source file system {}. Using default policy.",
                req.source_file_system_id
            );
            PolicyDocument::deny_insecure_transport().to_json()?
        }
    };

    client
        .put_file_system_policy(
            PutFileSystemPolicyRequest::new()
                .set_file_system_id(&req.target_file_system_id)
                .set_policy(policy),
        )
        .await?;
    tracing::info!(
        "File system policy copied from {} to {}.",
        req.source_file_system_id,
        req.target_file_system_id
    );
    Ok(())
}

/// Returns the source policy, or `None` if the file system has no policy.
async fn source_policy(client: &dyn FileSystems, file_system_id: &str) -> Result<Option<String>> {
    let response = client
        .describe_file_system_policy(
            DescribeFileSystemPolicyRequest::new().set_file_system_id(file_system_id),
        )
        .await;
    match response {
        Ok(p) => Ok(p.policy.filter(|p| !p.trim().is_empty())),
        Err(e) if e.is_policy_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
