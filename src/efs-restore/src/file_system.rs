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

//! Looks up file system ARNs.

use crate::model::{DescribeFileSystemsRequest, SourceFileSystemArnRequest};
use crate::stub::ClientFactory;
use crate::{Error, Result};

/// Returns the ARN of `req.file_system_id`.
///
/// Any failure, including validation failures, is wrapped in an
/// [operation][Error::is_operation] error naming the file system and region.
pub(crate) async fn source_file_system_arn<F>(
    factory: &F,
    req: SourceFileSystemArnRequest,
) -> Result<String>
where
    F: ClientFactory + ?Sized,
{
    lookup(factory, &req).await.map_err(|e| {
        Error::operation(
            format!(
                "failed to retrieve the source file system ARN for file system {} in region {}",
                req.file_system_id, req.region
            ),
            e,
        )
    })
}

async fn lookup<F>(factory: &F, req: &SourceFileSystemArnRequest) -> Result<String>
where
    F: ClientFactory + ?Sized,
{
    req.validate()?;
    let client = factory.file_systems(&req.region).await?;
    let response = client
        .describe_file_systems(
            DescribeFileSystemsRequest::new().set_file_system_id(&req.file_system_id),
        )
        .await?;
    let arn = response
        .file_systems
        .into_iter()
        .next()
        .map(|fs| fs.file_system_arn)
        .filter(|arn| !arn.is_empty())
        .ok_or_else(|| Error::deser("the response has no file systems with an ARN"))?;
    tracing::info!("Retrieved Source File System ARN: {arn}");
    Ok(arn)
}
