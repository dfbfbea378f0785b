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

//! Runbook helpers for Amazon EFS restores.
//!
//! This crate contains the small operations an automated restore runbook
//! performs around an AWS Backup restore of an EFS file system:
//!
//! * copy the file system policy from the source file system to the restored
//!   file system,
//! * look up when a restore job completed,
//! * log the metrics of a completed restore, and
//! * find the ARN of the source file system.
//!
//! All of them are exposed as methods on [RestoreOps][client::RestoreOps].
//!
//! # Example
//! ```no_run
//! # async fn sample() -> efs_restore::Result<()> {
//! use efs_restore::client::RestoreOps;
//! use efs_restore::model::CopyFileSystemPolicyRequest;
//!
//! let client = RestoreOps::builder().build().await?;
//! client
//!     .copy_file_system_policy(
//!         CopyFileSystemPolicyRequest::new()
//!             .set_source_file_system_id("fs-12345")
//!             .set_target_file_system_id("fs-67890")
//!             .set_region("us-west-2"),
//!     )
//!     .await?;
//! # Ok(()) }
//! ```

pub use error::Error;
pub use error::Result;

pub mod client;
pub mod error;
pub mod model;
pub mod stub;
pub mod transport;

mod file_system;
mod policy;
mod restore;

#[cfg(test)]
mod capture_events;
