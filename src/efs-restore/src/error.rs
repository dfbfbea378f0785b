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

//! The error type returned by all the runbook operations.

mod status;

pub use status::{Code, Status};

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The service specific error code returned when a file system has no policy.
pub const POLICY_NOT_FOUND: &str = "PolicyNotFound";

/// The result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The core error returned by the runbook operations.
///
/// The operations report errors from multiple sources: the application may
/// omit a required parameter, the service may return an error, the transport
/// may be unable to send the request, or the response may be missing the data
/// the operation needs. Operations that wrap their failures (copying a policy,
/// looking up an ARN) return an [operation][Error::is_operation] error whose
/// message names the resources involved and includes the original message.
///
/// # Example
/// ```
/// use efs_restore::error::{Code, Error, Status};
/// match example_function() {
///     Err(e) if e.is_not_found() => { println!("no such resource {e}"); },
///     Err(e) if e.is_binding() => { println!("bad request {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::{Code, Error, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: None,
        }
    }

    /// Creates an error representing a missing or invalid request parameter.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::{Error, ParameterError};
    /// let error = Error::binding(ParameterError::Missing("Region"));
    /// assert!(error.is_binding());
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request was rejected before contacting the service.
    ///
    /// # Troubleshooting
    ///
    /// All the identifiers and the region of a request are required. Check the
    /// source of this error to find out which one is missing.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing a problem sending the request or
    /// receiving the response.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::Error;
    /// let error = Error::transport("simulated connection reset");
    /// assert!(error.is_transport());
    /// ```
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// The request may or may not have reached the service. Note that the
    /// runbook operations never retry.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }

    /// Creates an error representing a response without the expected data.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::Error;
    /// let error = Error::deser("missing CompletionDate");
    /// assert!(error.is_deserialization());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response does not contain the data required by the operation.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is querying a restore job that has not completed
    /// yet. Such jobs have no completion date.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a request that could not be serialized.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side error, generated before the request is
    /// made. It is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Wraps `source` with a description of the failed operation.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::Error;
    /// let error = Error::operation(
    ///     "failed to copy file system policy from fs-1 to fs-2",
    ///     Error::transport("connection reset"),
    /// );
    /// assert!(error.is_operation());
    /// assert!(error.to_string().starts_with("failed to copy file system policy from fs-1 to fs-2: "));
    /// ```
    pub fn operation<C: Into<String>>(context: C, source: Error) -> Self {
        Self {
            kind: ErrorKind::Operation(context.into()),
            source: Some(Box::new(source)),
        }
    }

    /// The error was returned by a runbook operation that wraps all failures.
    ///
    /// The [source][std::error::Error::source] is the original error.
    pub fn is_operation(&self) -> bool {
        matches!(self.kind, ErrorKind::Operation(_))
    }

    /// The error details reported by the service, if any.
    ///
    /// This looks through [operation][Error::is_operation] errors.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(s) => Some(s.as_ref()),
            ErrorKind::Operation(_) => self.wrapped().and_then(Error::status),
            _ => None,
        }
    }

    /// The service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status()
            .map(|s| s.code == Code::NotFound)
            .unwrap_or(false)
    }

    /// The service reported that the file system exists but has no policy.
    pub fn is_policy_not_found(&self) -> bool {
        self.status()
            .map(|s| s.code == Code::NotFound && s.reason == POLICY_NOT_FOUND)
            .unwrap_or(false)
    }

    fn wrapped(&self) -> Option<&Error> {
        self.source.as_ref().and_then(|e| e.downcast_ref::<Error>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => write!(f, "cannot send the request, {e}"),
            (ErrorKind::Transport, Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot use the response: {e}")
            }
            (ErrorKind::Service(s), _) if s.reason.is_empty() => write!(
                f,
                "the service reports an error with code {} described as: {}",
                s.code, s.message
            ),
            (ErrorKind::Service(s), _) => write!(
                f,
                "the service reports an error with code {} ({}) described as: {}",
                s.code, s.reason, s.message
            ),
            (ErrorKind::Operation(context), Some(e)) => write!(f, "{context}: {e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &dyn StdError)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Transport,
    Serialization,
    Deserialization,
    Service(Box<Status>),
    Operation(String),
}

/// Problems with the parameters of a request.
///
/// These are returned as the [source][std::error::Error::source] of a
/// [binding][Error::is_binding] error.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ParameterError {
    /// A required parameter was not provided, or it is empty.
    #[error("the required parameter `{0}` is missing or empty")]
    Missing(&'static str),
}

/// Returns a binding error unless `value` is a non-empty string.
pub(crate) fn require(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::binding(ParameterError::Missing(name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_reason(POLICY_NOT_FOUND)
            .set_message("no policy");
        let error = Error::service(status.clone());
        assert_eq!(error.status(), Some(&status));
        assert!(error.is_not_found(), "{error:?}");
        assert!(error.is_policy_not_found(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("PolicyNotFound"), "{got}");
        assert!(got.contains("no policy"), "{got}");
    }

    #[test]
    fn file_system_not_found_is_not_policy_not_found() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_reason("FileSystemNotFound")
            .set_message("no such file system");
        let error = Error::service(status);
        assert!(error.is_not_found(), "{error:?}");
        assert!(!error.is_policy_not_found(), "{error:?}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(ParameterError::Missing("Region"));
        assert!(error.is_binding(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("`Region`"), "{got}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<ParameterError>());
        assert_eq!(source, Some(&ParameterError::Missing("Region")));
    }

    #[test]
    fn transport() {
        let error = Error::transport("connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn deser() {
        let error = Error::deser("missing CompletionDate");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("CompletionDate"), "{error}");
    }

    #[test]
    fn ser() {
        let error = Error::ser("bad document");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad document"), "{error}");
    }

    #[test]
    fn operation() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("not authorized");
        let error = Error::operation("failed to do the thing", Error::service(status.clone()));
        assert!(error.is_operation(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        let got = error.to_string();
        assert!(got.starts_with("failed to do the thing: "), "{got}");
        assert!(got.ends_with("not authorized"), "{got}");
        let source = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(source.is_some(), "{error:?}");
    }

    #[test_case("")]
    #[test_case(" ")]
    #[test_case("\t\n")]
    fn require_rejects(value: &str) {
        let error = require("FileSystemID", value).unwrap_err();
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("FileSystemID"), "{error}");
    }

    #[test]
    fn require_accepts() {
        assert!(require("FileSystemID", "fs-12345").is_ok());
    }
}
