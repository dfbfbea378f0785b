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

//! Queries AWS Backup restore jobs and reports their metrics.

use crate::model::{
    DescribeRestoreJobRequest, RestoreJobDetails, RestoreJobDetailsRequest, RestoreMetrics,
    RestoreMetricsRequest, format_time,
};
use crate::stub::ClientFactory;
use crate::{Error, Result};

/// Returns the identifier and completion time of a restore job.
///
/// Errors from the service are returned as-is. A job that has not completed
/// has no completion time, and results in a
/// [deserialization][Error::is_deserialization] error.
pub(crate) async fn restore_job_details<F>(
    factory: &F,
    req: RestoreJobDetailsRequest,
) -> Result<RestoreJobDetails>
where
    F: ClientFactory + ?Sized,
{
    req.validate()?;
    let client = factory.backup(&req.region).await?;
    let job = client
        .describe_restore_job(
            DescribeRestoreJobRequest::new().set_restore_job_id(&req.restore_job_id),
        )
        .await?;
    let completion_time = job.completion_date.ok_or_else(|| {
        Error::deser(format!(
            "restore job {} has no CompletionDate (status: {})",
            req.restore_job_id,
            job.status.as_deref().unwrap_or("unknown")
        ))
    })?;
    Ok(RestoreJobDetails::new(req.restore_job_id, completion_time))
}

/// Logs the metrics of a completed restore job.
///
/// Emits one success line followed by the restored resource name, the start
/// and end times, and the restored size.
pub(crate) async fn log_restore_metrics<F>(
    factory: &F,
    req: RestoreMetricsRequest,
) -> Result<RestoreMetrics>
where
    F: ClientFactory + ?Sized,
{
    req.validate()?;
    let start_time = req.start_time()?;
    let details = restore_job_details(
        factory,
        RestoreJobDetailsRequest::new()
            .set_restore_job_id(&req.restore_job_id)
            .set_region(&req.region),
    )
    .await?;
    let metrics = RestoreMetrics::new(req, start_time, details);

    tracing::info!("Restore job {} completed successfully.", metrics.restore_job_id);
    tracing::info!("Restored resource name: {}", metrics.resource_name);
    tracing::info!(
        "Restore start time: {}, end time: {}",
        format_time(&metrics.start_time),
        format_time(&metrics.end_time)
    );
    tracing::info!("Restored size in bytes: {}", metrics.size_in_bytes);
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture_events::CaptureEvents;
    use crate::error::Status;
    use crate::model::RestoreJob;
    use crate::stub::{Backup, MockBackup, MockClientFactory};
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tracing::Level;

    fn timestamp(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("test timestamps are valid")
            .with_timezone(&Utc)
    }

    fn factory(backup: MockBackup) -> MockClientFactory {
        let mut factory = MockClientFactory::new();
        factory
            .expect_backup()
            .times(1)
            .withf(|region| region == "us-east-1")
            .return_once(move |_| Ok(Arc::new(backup) as Arc<dyn Backup>));
        factory.expect_file_systems().never();
        factory
    }

    fn completed_job() -> MockBackup {
        let mut backup = MockBackup::new();
        backup
            .expect_describe_restore_job()
            .times(1)
            .withf(|r| r.restore_job_id == "mock-job-id")
            .returning(|r| {
                Ok(RestoreJob::new()
                    .set_restore_job_id(r.restore_job_id)
                    .set_status("COMPLETED")
                    .set_completion_date(timestamp("2024-12-24T12:34:56Z")))
            });
        backup
    }

    #[tokio::test]
    async fn details() -> anyhow::Result<()> {
        let req = RestoreJobDetailsRequest::new()
            .set_restore_job_id("mock-job-id")
            .set_region("us-east-1");
        let got = restore_job_details(&factory(completed_job()), req).await?;
        assert_eq!(got.restore_job_id, "mock-job-id");
        assert_eq!(got.completion_time, timestamp("2024-12-24T12:34:56Z"));
        Ok(())
    }

    #[tokio::test]
    async fn details_running_job() {
        let mut backup = MockBackup::new();
        backup
            .expect_describe_restore_job()
            .times(1)
            .returning(|r| {
                Ok(RestoreJob::new()
                    .set_restore_job_id(r.restore_job_id)
                    .set_status("RUNNING"))
            });
        let req = RestoreJobDetailsRequest::new()
            .set_restore_job_id("mock-job-id")
            .set_region("us-east-1");
        let err = restore_job_details(&factory(backup), req)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("RUNNING"), "{err}");
    }

    #[tokio::test]
    async fn details_service_error_is_not_wrapped() {
        let mut backup = MockBackup::new();
        backup.expect_describe_restore_job().times(1).returning(|_| {
            Err(Error::service(Status::from_service(
                "ResourceNotFoundException",
                "no such job",
            )))
        });
        let req = RestoreJobDetailsRequest::new()
            .set_restore_job_id("mock-job-id")
            .set_region("us-east-1");
        let err = restore_job_details(&factory(backup), req)
            .await
            .unwrap_err();
        assert!(!err.is_operation(), "{err:?}");
        assert!(err.is_not_found(), "{err:?}");
    }

    #[tokio::test]
    async fn details_validation_before_any_call() {
        let mut factory = MockClientFactory::new();
        factory.expect_backup().never();
        let req = RestoreJobDetailsRequest::new().set_restore_job_id("mock-job-id");
        let err = restore_job_details(&factory, req).await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[tokio::test]
    async fn metrics() -> anyhow::Result<()> {
        let req = RestoreMetricsRequest::new()
            .set_region("us-east-1")
            .set_restore_job_id("mock-job-id")
            .set_restore_start_time(timestamp("2024-12-24T11:30:00Z"))
            .set_resource_name("mock-efs-name")
            .set_size_in_bytes(1073741824);

        let capture = CaptureEvents::new();
        let _guard = tracing::subscriber::set_default(capture.clone());
        let got = log_restore_metrics(&factory(completed_job()), req).await?;

        assert_eq!(
            capture.messages(Level::INFO),
            vec![
                "Restore job mock-job-id completed successfully.".to_string(),
                "Restored resource name: mock-efs-name".to_string(),
                "Restore start time: 2024-12-24T11:30:00Z, end time: 2024-12-24T12:34:56Z"
                    .to_string(),
                "Restored size in bytes: 1073741824".to_string(),
            ]
        );
        assert!(capture.messages(Level::WARN).is_empty(), "{capture:?}");
        assert_eq!(got.end_time, timestamp("2024-12-24T12:34:56Z"));
        assert_eq!(got.size_in_bytes, 1073741824);
        Ok(())
    }

    #[tokio::test]
    async fn metrics_propagates_errors() {
        let mut backup = MockBackup::new();
        backup
            .expect_describe_restore_job()
            .times(1)
            .returning(|_| Err(Error::transport("connection reset")));

        let req = RestoreMetricsRequest::new()
            .set_region("us-east-1")
            .set_restore_job_id("mock-job-id")
            .set_restore_start_time(timestamp("2024-12-24T11:30:00Z"))
            .set_resource_name("mock-efs-name");
        let capture = CaptureEvents::new();
        let _guard = tracing::subscriber::set_default(capture.clone());
        let err = log_restore_metrics(&factory(backup), req)
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(capture.messages(Level::INFO).is_empty(), "{capture:?}");
    }

    #[tokio::test]
    async fn metrics_validation_before_any_call() {
        let mut factory = MockClientFactory::new();
        factory.expect_backup().never();
        let req = RestoreMetricsRequest::new()
            .set_region("us-east-1")
            .set_restore_job_id("mock-job-id");
        let err = log_restore_metrics(&factory, req).await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("ResourceName"), "{err}");
    }

    #[tokio::test]
    async fn metrics_require_start_time() {
        let mut factory = MockClientFactory::new();
        factory.expect_backup().never();
        let req = RestoreMetricsRequest::new()
            .set_region("us-east-1")
            .set_restore_job_id("mock-job-id")
            .set_resource_name("mock-efs-name")
            .set_size_in_bytes(1073741824);

        let capture = CaptureEvents::new();
        let _guard = tracing::subscriber::set_default(capture.clone());
        let err = log_restore_metrics(&factory, req).await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("RestoreStartTime"), "{err}");
        assert!(capture.messages(Level::INFO).is_empty(), "{capture:?}");
    }
}
