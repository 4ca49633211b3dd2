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

//! IBM Cloud Platform Services helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud Platform Services SDK for Rust.
//!
//! Most applications only need the [error::Error] type, the
//! [response::Response] type, and the [options::RequestOptionsBuilder] trait.
//! The [variant] module is useful to applications that receive tagged
//! objects outside of a client call, e.g. via a webhook, and want to decode
//! them with the same rules used by the clients.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

pub mod client_builder;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod variant;
