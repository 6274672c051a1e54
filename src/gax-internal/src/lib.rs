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

//! Implementation details for Alibaba Cloud clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in the implementation for stable client
//! libraries.
//!
//! The crate implements the request shaping conventions shared by all the
//! RPC-style services: requests are validated, flattened into parameters
//! (some fields are encoded as a single JSON string), placed in the query or
//! the body, and sent. The responses are decoded into typed objects.

pub mod api_header;

pub mod http;

pub mod operation;

pub mod options;

pub mod query_parameter;

pub mod request;

pub mod shrink;

pub mod unimplemented;

pub mod validation;
