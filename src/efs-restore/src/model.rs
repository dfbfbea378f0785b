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

//! The request and response types used by the runbook operations.
//!
//! The types mirror the shapes of the Amazon EFS and AWS Backup APIs, limited
//! to the fields used by this crate.

use crate::error::{ParameterError, require};
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The policy version used by the default policy.
pub const POLICY_VERSION: &str = "2012-10-17";

/// An IAM resource policy for a file system.
///
/// # Example
/// ```
/// use efs_restore::model::PolicyDocument;
/// let policy = PolicyDocument::deny_insecure_transport();
/// let json = policy.to_json()?;
/// assert!(json.contains("\"Sid\":\"DenyInSecureTransport\""));
/// # efs_restore::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PolicyDocument {
    /// The policy language version.
    pub version: String,

    /// An optional identifier for the policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The statements in the policy.
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Creates a policy with no statements.
    pub fn new() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            id: None,
            statement: Vec::new(),
        }
    }

    /// The policy applied to file systems without a policy of their own.
    ///
    /// It denies all `elasticfilesystem` actions from any principal unless the
    /// client uses a secure transport. The `DenyInSecureTransport` statement is
    /// wrapped in a complete document with a `Version` and a `Statement` list,
    /// as the service rejects a bare statement.
    pub fn deny_insecure_transport() -> Self {
        Self::new().set_statement([Statement::new()
            .set_sid("DenyInSecureTransport")
            .set_effect(Effect::Deny)
            .set_principal(json!({"AWS": "*"}))
            .set_action("elasticfilesystem:*")
            .set_resource("*")
            .set_condition(json!({"Bool": {"aws:SecureTransport": "false"}}))])
    }

    /// Sets the value for [id][PolicyDocument::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value for [statement][PolicyDocument::statement].
    pub fn set_statement<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<Statement>,
    {
        self.statement = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Formats the policy in the JSON format expected by the service.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::ser)
    }
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// A single statement in a [PolicyDocument].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Statement {
    /// The statement identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// Whether the statement allows or denies access.
    pub effect: Effect,

    /// The principals affected by the statement.
    pub principal: Value,

    /// The actions affected by the statement.
    pub action: Value,

    /// The resources affected by the statement.
    pub resource: Value,

    /// The conditions under which the statement applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
}

impl Statement {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [sid][Statement::sid].
    pub fn set_sid<T: Into<String>>(mut self, v: T) -> Self {
        self.sid = Some(v.into());
        self
    }

    /// Sets the value for [effect][Statement::effect].
    pub fn set_effect<T: Into<Effect>>(mut self, v: T) -> Self {
        self.effect = v.into();
        self
    }

    /// Sets the value for [principal][Statement::principal].
    pub fn set_principal<T: Into<Value>>(mut self, v: T) -> Self {
        self.principal = v.into();
        self
    }

    /// Sets the value for [action][Statement::action].
    pub fn set_action<T: Into<Value>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value for [resource][Statement::resource].
    pub fn set_resource<T: Into<Value>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value for [condition][Statement::condition].
    pub fn set_condition<T: Into<Value>>(mut self, v: T) -> Self {
        self.condition = Some(v.into());
        self
    }
}

/// The effect of a [Statement].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

/// The policy attached to a file system.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FileSystemPolicy {
    /// The file system the policy belongs to.
    pub file_system_id: String,

    /// The policy, as JSON text, exactly as returned by the service.
    pub policy: Option<String>,
}

impl FileSystemPolicy {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][FileSystemPolicy::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }

    /// Sets the value for [policy][FileSystemPolicy::policy].
    pub fn set_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.policy = Some(v.into());
        self
    }

    /// Sets or clears the value for [policy][FileSystemPolicy::policy].
    pub fn set_or_clear_policy<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.policy = v.map(|v| v.into());
        self
    }
}

/// The request message for `DescribeFileSystemPolicy`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeFileSystemPolicyRequest {
    pub file_system_id: String,
}

impl DescribeFileSystemPolicyRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][DescribeFileSystemPolicyRequest::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }
}

/// The request message for `PutFileSystemPolicy`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutFileSystemPolicyRequest {
    pub file_system_id: String,

    /// The policy, as JSON text.
    pub policy: String,
}

impl PutFileSystemPolicyRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][PutFileSystemPolicyRequest::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }

    /// Sets the value for [policy][PutFileSystemPolicyRequest::policy].
    pub fn set_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.policy = v.into();
        self
    }
}

/// The request message for `DescribeFileSystems`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeFileSystemsRequest {
    pub file_system_id: String,
}

impl DescribeFileSystemsRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][DescribeFileSystemsRequest::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }
}

/// The response message for `DescribeFileSystems`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeFileSystemsResponse {
    pub file_systems: Vec<FileSystemDescription>,
}

impl DescribeFileSystemsResponse {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_systems][DescribeFileSystemsResponse::file_systems].
    pub fn set_file_systems<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<FileSystemDescription>,
    {
        self.file_systems = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The description of a file system.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FileSystemDescription {
    pub file_system_id: String,

    /// The ARN for the file system, in
    /// `arn:aws:elasticfilesystem:{region}:{account-id}:file-system/{id}`
    /// format.
    pub file_system_arn: String,
}

impl FileSystemDescription {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][FileSystemDescription::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }

    /// Sets the value for [file_system_arn][FileSystemDescription::file_system_arn].
    pub fn set_file_system_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_arn = v.into();
        self
    }
}

/// The request message for `DescribeRestoreJob`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeRestoreJobRequest {
    pub restore_job_id: String,
}

impl DescribeRestoreJobRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [restore_job_id][DescribeRestoreJobRequest::restore_job_id].
    pub fn set_restore_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.restore_job_id = v.into();
        self
    }
}

/// A restore job, as described by AWS Backup.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreJob {
    pub restore_job_id: String,

    /// The job status, such as `RUNNING` or `COMPLETED`.
    pub status: Option<String>,

    /// When the job completed. Jobs that are still running have no value.
    pub completion_date: Option<DateTime<Utc>>,
}

impl RestoreJob {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [restore_job_id][RestoreJob::restore_job_id].
    pub fn set_restore_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.restore_job_id = v.into();
        self
    }

    /// Sets the value for [status][RestoreJob::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value for [completion_date][RestoreJob::completion_date].
    pub fn set_completion_date<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.completion_date = Some(v.into());
        self
    }}

/// The parameters for [copy_file_system_policy].
///
/// [copy_file_system_policy]: crate::client::RestoreOps::copy_file_system_policy
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CopyFileSystemPolicyRequest {
    /// The file system that provides the policy.
    pub source_file_system_id: String,

    /// The file system that receives the policy.
    pub target_file_system_id: String,

    /// The region of both file systems, e.g. `us-west-2`.
    pub region: String,
}

impl CopyFileSystemPolicyRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [source_file_system_id][CopyFileSystemPolicyRequest::source_file_system_id].
    pub fn set_source_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.source_file_system_id = v.into();
        self
    }

    /// Sets the value for [target_file_system_id][CopyFileSystemPolicyRequest::target_file_system_id].
    pub fn set_target_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.target_file_system_id = v.into();
        self
    }

    /// Sets the value for [region][CopyFileSystemPolicyRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("SourceFileSystemId", &self.source_file_system_id)?;
        require("TargetFileSystemId", &self.target_file_system_id)?;
        require("Region", &self.region)
    }
}

/// The parameters for [restore_job_details].
///
/// [restore_job_details]: crate::client::RestoreOps::restore_job_details
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreJobDetailsRequest {
    pub restore_job_id: String,
    pub region: String,
}

impl RestoreJobDetailsRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [restore_job_id][RestoreJobDetailsRequest::restore_job_id].
    pub fn set_restore_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.restore_job_id = v.into();
        self
    }

    /// Sets the value for [region][RestoreJobDetailsRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("RestoreJobId", &self.restore_job_id)?;
        require("Region", &self.region)
    }
}

/// The details of a completed restore job.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RestoreJobDetails {
    pub restore_job_id: String,
    pub completion_time: DateTime<Utc>,
}

impl RestoreJobDetails {
    pub(crate) fn new(restore_job_id: String, completion_time: DateTime<Utc>) -> Self {
        Self {
            restore_job_id,
            completion_time,
        }
    }
}

/// The parameters for [log_restore_metrics].
///
/// [log_restore_metrics]: crate::client::RestoreOps::log_restore_metrics
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreMetricsRequest {
    pub region: String,
    pub restore_job_id: String,

    /// When the runbook started the restore. Required.
    pub restore_start_time: Option<DateTime<Utc>>,

    /// The name of the restored file system.
    pub resource_name: String,

    /// The size of the restored data.
    pub size_in_bytes: u64,
}

impl RestoreMetricsRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [region][RestoreMetricsRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value for [restore_job_id][RestoreMetricsRequest::restore_job_id].
    pub fn set_restore_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.restore_job_id = v.into();
        self
    }

    /// Sets the value for [restore_start_time][RestoreMetricsRequest::restore_start_time].
    pub fn set_restore_start_time<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.restore_start_time = Some(v.into());
        self
    }

    /// Sets the value for [resource_name][RestoreMetricsRequest::resource_name].
    pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_name = v.into();
        self
    }

    /// Sets the value for [size_in_bytes][RestoreMetricsRequest::size_in_bytes].
    pub fn set_size_in_bytes(mut self, v: u64) -> Self {
        self.size_in_bytes = v;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("RestoreJobId", &self.restore_job_id)?;
        require("Region", &self.region)?;
        require("ResourceName", &self.resource_name)?;
        self.start_time().map(|_| ())
    }

    pub(crate) fn start_time(&self) -> Result<DateTime<Utc>> {
        self.restore_start_time
            .ok_or_else(|| Error::binding(ParameterError::Missing("RestoreStartTime")))
    }
}

/// The values reported by [log_restore_metrics].
///
/// [log_restore_metrics]: crate::client::RestoreOps::log_restore_metrics
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RestoreMetrics {
    pub restore_job_id: String,
    pub resource_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub size_in_bytes: u64,
}

impl RestoreMetrics {
    pub(crate) fn new(
        request: RestoreMetricsRequest,
        start_time: DateTime<Utc>,
        details: RestoreJobDetails,
    ) -> Self {
        Self {
            restore_job_id: details.restore_job_id,
            resource_name: request.resource_name,
            start_time,
            end_time: details.completion_time,
            size_in_bytes: request.size_in_bytes,
        }
    }
}

/// The parameters for [source_file_system_arn].
///
/// [source_file_system_arn]: crate::client::RestoreOps::source_file_system_arn
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SourceFileSystemArnRequest {
    pub file_system_id: String,
    pub region: String,
}

impl SourceFileSystemArnRequest {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [file_system_id][SourceFileSystemArnRequest::file_system_id].
    pub fn set_file_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.file_system_id = v.into();
        self
    }

    /// Sets the value for [region][SourceFileSystemArnRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require("FileSystemID", &self.file_system_id)?;
        require("Region", &self.region)
    }
}

/// Formats timestamps the way the runbook logs them: RFC 3339, whole seconds, `Z` suffix.
pub(crate) fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
