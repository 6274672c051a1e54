// Copyright 2025 Google LLC
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

mod core_error;
mod credentials;
mod validation;
pub use core_error::*;
pub use credentials::CredentialsError;
pub use validation::{FieldViolation, ValidationError};

/// Errors and error details returned by the services.
///
/// The client libraries distinguish between errors detected before sending a
/// request (e.g. a missing required field), errors trying to send it (e.g.
/// cannot open a connection), errors decoding the response, and errors
/// returned by the service itself.
///
/// The types in this module represent the detailed information returned by
/// the services.
///
/// # Examples
///
/// ```
/// use alibabacloud_gax::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         println!("{} [{:?}]: {}", status.code, status.request_id, status.message);
///     }
/// }
/// ```
pub mod rpc;
