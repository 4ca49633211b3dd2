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

//! Defines the retry policy used by the clients.
//!
//! The clients do not retry failed requests by default. Applications can
//! enable automatic retries when building a client, or override the policy for
//! a single request. When enabled, the clients retry requests that fail with
//! a connection error, an HTTP `429 Too Many Requests` status, or any `5xx`
//! status other than `501 Not Implemented`.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::retry_policy::RetryPolicy;
//! use std::time::Duration;
//! let policy = RetryPolicy::default()
//!     .set_max_retries(3)
//!     .set_max_interval(Duration::from_secs(10));
//! assert_eq!(policy.max_retries(), 3);
//! ```

use crate::error::Error;
use std::time::Duration;

/// The default number of retries.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// The default upper bound for the interval between attempts.
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

const INITIAL_INTERVAL: Duration = Duration::from_secs(1);

/// Controls how many times, and how often, a client retries a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_interval: DEFAULT_MAX_INTERVAL,
        }
    }
}

impl RetryPolicy {
    /// Sets the maximum number of retries, not counting the initial attempt.
    pub fn set_max_retries(mut self, v: u32) -> Self {
        self.max_retries = v;
        self
    }

    /// Sets the maximum interval between attempts.
    pub fn set_max_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.max_interval = v.into();
        self
    }

    /// The maximum number of retries.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// The maximum interval between attempts.
    pub fn max_interval(&self) -> Duration {
        self.max_interval
    }

    /// Returns true if a request that failed with `error` may be retried.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::RetryPolicy;
    /// # use ibm_cloud_gax::error::Error;
    /// let policy = RetryPolicy::default();
    /// let e = Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
    /// assert!(policy.is_retryable(&e));
    /// let e = Error::http(501, http::HeaderMap::new(), bytes::Bytes::new());
    /// assert!(!policy.is_retryable(&e));
    /// ```
    pub fn is_retryable(&self, error: &Error) -> bool {
        if error.is_io() {
            return true;
        }
        match error.http_status_code() {
            Some(429) => true,
            Some(501) => false,
            Some(code) => (500..600).contains(&code),
            None => false,
        }
    }

    /// Returns the delay before the retry attempt number `attempt`.
    ///
    /// The first retry has `attempt == 1`. The delay grows exponentially and is
    /// capped by [max_interval][Self::max_interval]. If the service returned a
    /// `Retry-After` header with a delay in seconds, that delay takes
    /// precedence, also capped by the maximum interval.
    pub fn backoff(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(d) = retry_after {
            return d.min(self.max_interval);
        }
        let exponent = attempt.saturating_sub(1).min(31);
        INITIAL_INTERVAL
            .saturating_mul(1_u32 << exponent)
            .min(self.max_interval)
    }

    /// Extracts the `Retry-After` delay, if any, from an error.
    ///
    /// Only the delay-seconds form of the header is supported.
    pub fn retry_after(error: &Error) -> Option<Duration> {
        error
            .http_headers()?
            .get(http::header::RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn http_error(code: u16) -> Error {
        Error::http(code, http::HeaderMap::new(), bytes::Bytes::new())
    }

    #[test]
    fn defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries(), DEFAULT_MAX_RETRIES);
        assert_eq!(policy.max_interval(), DEFAULT_MAX_INTERVAL);
    }

    #[test_case(429, true)]
    #[test_case(500, true)]
    #[test_case(502, true)]
    #[test_case(503, true)]
    #[test_case(504, true)]
    #[test_case(501, false)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(404, false)]
    #[test_case(409, false)]
    fn retryable_status(code: u16, want: bool) {
        let policy = RetryPolicy::default();
        assert_eq!(policy.is_retryable(&http_error(code)), want, "{code}");
    }

    #[test]
    fn retryable_other() {
        let policy = RetryPolicy::default();
        assert!(policy.is_retryable(&Error::io(std::io::Error::other("reset"))));
        assert!(!policy.is_retryable(&Error::invalid_options("account_id")));
        assert!(!policy.is_retryable(&Error::deser("bad payload")));
        assert!(!policy.is_retryable(&Error::timeout("deadline")));
    }

    #[test]
    fn backoff() {
        let policy = RetryPolicy::default().set_max_interval(Duration::from_secs(5));
        assert_eq!(policy.backoff(1, None), Duration::from_secs(1));
        assert_eq!(policy.backoff(2, None), Duration::from_secs(2));
        assert_eq!(policy.backoff(3, None), Duration::from_secs(4));
        assert_eq!(policy.backoff(4, None), Duration::from_secs(5));
        assert_eq!(policy.backoff(100, None), Duration::from_secs(5));
    }

    #[test]
    fn backoff_retry_after() {
        let policy = RetryPolicy::default().set_max_interval(Duration::from_secs(5));
        assert_eq!(
            policy.backoff(1, Some(Duration::from_secs(3))),
            Duration::from_secs(3)
        );
        assert_eq!(
            policy.backoff(1, Some(Duration::from_secs(60))),
            Duration::from_secs(5)
        );
    }

    #[test_case("7", Some(Duration::from_secs(7)))]
    #[test_case(" 2 ", Some(Duration::from_secs(2)))]
    #[test_case("Wed, 21 Oct 2015 07:28:00 GMT", None)]
    fn retry_after(value: &'static str, want: Option<Duration>) {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::RETRY_AFTER,
            http::HeaderValue::from_static(value),
        );
        let e = Error::http(429, headers, bytes::Bytes::new());
        assert_eq!(RetryPolicy::retry_after(&e), want);
    }

    #[test]
    fn retry_after_missing() {
        assert_eq!(RetryPolicy::retry_after(&http_error(429)), None);
        assert_eq!(
            RetryPolicy::retry_after(&Error::invalid_options("id")),
            None
        );
    }
}
