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

//! Runs the EFS restore runbook operations from the command line.

const DESCRIPTION: &str = concat!(
    "Runs the steps of an automated EFS restore runbook. Each subcommand performs",
    " a single operation against Amazon EFS or AWS Backup in the given region.",
    " Credentials are resolved from the standard AWS sources, such as environment",
    " variables and the shared configuration files.",
);

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use efs_restore::client::RestoreOps;
use efs_restore::model::{
    CopyFileSystemPolicyRequest, RestoreJobDetailsRequest, RestoreMetricsRequest,
    SourceFileSystemArnRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    enable_tracing();

    let args = Args::parse();
    tracing::debug!("{args:?}");

    let mut builder = RestoreOps::builder();
    if let Some(profile) = &args.profile {
        builder = builder.with_profile(profile);
    }
    if let Some(endpoint) = &args.endpoint {
        builder = builder.with_endpoint(endpoint);
    }
    let client = builder.build().await?;

    match args.command {
        Command::CopyPolicy {
            source_file_system_id,
            target_file_system_id,
            region,
        } => {
            client
                .copy_file_system_policy(
                    CopyFileSystemPolicyRequest::new()
                        .set_source_file_system_id(source_file_system_id)
                        .set_target_file_system_id(target_file_system_id)
                        .set_region(region),
                )
                .await?;
        }
        Command::RestoreJob {
            restore_job_id,
            region,
        } => {
            let details = client
                .restore_job_details(
                    RestoreJobDetailsRequest::new()
                        .set_restore_job_id(restore_job_id)
                        .set_region(region),
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Command::RestoreMetrics {
            restore_job_id,
            region,
            start_time,
            resource_name,
            size_in_bytes,
        } => {
            client
                .log_restore_metrics(
                    RestoreMetricsRequest::new()
                        .set_region(region)
                        .set_restore_job_id(restore_job_id)
                        .set_restore_start_time(start_time)
                        .set_resource_name(resource_name)
                        .set_size_in_bytes(size_in_bytes),
                )
                .await?;
        }
        Command::FileSystemArn {
            file_system_id,
            region,
        } => {
            let arn = client
                .source_file_system_arn(
                    SourceFileSystemArnRequest::new()
                        .set_file_system_id(file_system_id)
                        .set_region(region),
                )
                .await?;
            println!("{arn}");
        }
    }
    Ok(())
}

fn enable_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_time(arg: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(arg).map(|t| t.with_timezone(&Utc))
}

/// Runs the EFS restore runbook operations.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    /// The profile used to load credentials and configuration.
    ///
    /// By default use the `AWS_PROFILE` environment variable, or the `default`
    /// profile.
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Send all requests to this endpoint instead of the regional endpoints.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Copy the file system policy from the source to the target file system.
    ///
    /// If the source has no policy, the target receives a policy that denies
    /// access over insecure transports.
    CopyPolicy {
        /// The file system that provides the policy.
        #[arg(long)]
        source_file_system_id: String,

        /// The file system that receives the policy.
        #[arg(long)]
        target_file_system_id: String,

        /// The region of both file systems.
        #[arg(long)]
        region: String,
    },

    /// Print the identifier and completion time of a restore job, as JSON.
    RestoreJob {
        #[arg(long)]
        restore_job_id: String,

        #[arg(long)]
        region: String,
    },

    /// Log the metrics of a completed restore job.
    RestoreMetrics {
        #[arg(long)]
        restore_job_id: String,

        #[arg(long)]
        region: String,

        /// When the restore started, in RFC 3339 format.
        #[arg(long, value_parser = parse_time)]
        start_time: DateTime<Utc>,

        /// The name of the restored file system.
        #[arg(long)]
        resource_name: String,

        /// The size of the restored data.
        #[arg(long)]
        size_in_bytes: u64,
    },

    /// Print the ARN of a file system.
    FileSystemArn {
        #[arg(long)]
        file_system_id: String,

        #[arg(long)]
        region: String,
    },
}
