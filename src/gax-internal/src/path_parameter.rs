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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything except the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Returns `value` if it is usable as a path segment, otherwise an invalid
/// options error.
///
/// Empty values are rejected, and so are `.` and `..`. URL parsers remove
/// these dot segments, even when percent-encoded, and the request would reach
/// a different resource.
pub fn required<'a>(name: &str, value: &'a str) -> gax::Result<&'a str> {
    match value {
        "" | "." | ".." => Err(missing(name)),
        v => Ok(v),
    }
}

/// The error returned when a required parameter is missing or invalid.
pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::invalid_options(name)
}

/// Encodes `value` for use as a single path segment.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
