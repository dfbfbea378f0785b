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

/// The error details reported by the service.
///
/// AWS services report errors using a service specific error code, such as
/// `PolicyNotFound` or `FileSystemNotFound`, and a message. The client maps the
/// error code to a canonical [Code] and keeps the original error code in
/// [reason][Status::reason].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The canonical status code.
    pub code: Code,

    /// The service specific error code, for example `PolicyNotFound`.
    pub reason: String,

    /// A developer-facing error message.
    pub message: String,
}

impl Status {
    /// Creates a status from the error code and message reported by the
    /// service.
    ///
    /// # Example
    /// ```
    /// use efs_restore::error::{Code, Status};
    /// let status = Status::from_service("PolicyNotFound", "no policy for fs-123");
    /// assert_eq!(status.code, Code::NotFound);
    /// assert_eq!(status.reason, "PolicyNotFound");
    /// ```
    pub fn from_service<R, M>(reason: R, message: M) -> Self
    where
        R: Into<String>,
        M: Into<String>,
    {
        let reason = reason.into();
        Self {
            code: Code::from_service_code(&reason),
            reason,
            message: message.into(),
        }
    }

    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [reason][Status::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

/// The canonical error codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// The requested resource (file system, policy, restore job) was not found.
    NotFound,

    /// The request is malformed or contains invalid values.
    InvalidArgument,

    /// The caller is not authorized to perform the operation.
    PermissionDenied,

    /// The resource is not in the state required by the operation.
    FailedPrecondition,

    /// The caller exceeded a quota or a request rate limit.
    ResourceExhausted,

    /// The service is unavailable.
    Unavailable,

    /// The service had an internal problem.
    Internal,

    /// An error code the client does not recognize.
    #[default]
    Unknown,
}

impl Code {
    /// Maps an AWS error code to the canonical code.
    pub fn from_service_code(code: &str) -> Self {
        match code {
            "PolicyNotFound"
            | "FileSystemNotFound"
            | "MountTargetNotFound"
            | "AccessPointNotFound"
            | "ResourceNotFoundException" => Self::NotFound,
            "BadRequest" | "ValidationException" | "InvalidParameterValueException"
            | "MissingParameterValueException" | "InvalidPolicyException" => {
                Self::InvalidArgument
            }
            "AccessDeniedException" | "UnauthorizedOperation" => Self::PermissionDenied,
            "IncorrectFileSystemLifeCycleState" | "InvalidRequestException" => {
                Self::FailedPrecondition
            }
            "ThrottlingException" | "TooManyRequestsException" | "LimitExceededException" => {
                Self::ResourceExhausted
            }
            "ServiceUnavailableException" => Self::Unavailable,
            "InternalServerError" | "ServiceException" => Self::Internal,
            _ => Self::Unknown,
        }
    }

    /// The name of the code.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::Unavailable => "UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
