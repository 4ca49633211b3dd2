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

/// The name of the header used by IBM Cloud to collect SDK usage analytics.
pub const SDK_ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// The SDK name reported in the `User-Agent` header.
pub const SDK_NAME: &str = "platform-services-rust-sdk";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));
}

/// The `User-Agent` header value for a client library at `client_version`.
///
/// The format is
/// `platform-services-rust-sdk/{version} (lang=rust; arch={arch}; os={os}; rustc.version={rustc})`.
pub fn user_agent(client_version: &str) -> String {
    // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
    // found, leave RUSTC_VERSION unchanged.
    let rustc_version = build_info::RUSTC_VERSION;
    let rustc_version = rustc_version
        .strip_prefix("rustc ")
        .unwrap_or(build_info::RUSTC_VERSION);
    format!(
        "{SDK_NAME}/{client_version} (lang=rust; arch={}; os={}; rustc.version={rustc_version})",
        std::env::consts::ARCH,
        std::env::consts::OS,
    )
}

/// The SDK analytics header value for one operation.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::api_header::sdk_analytics;
/// let value = sdk_analytics("distribution_list", "V1", "GetDistributionListDestination");
/// assert_eq!(value, "service_name=distribution_list;service_version=V1;operation_id=GetDistributionListDestination");
/// ```
pub fn sdk_analytics(service_name: &str, service_version: &str, operation_id: &str) -> String {
    format!(
        "service_name={service_name};service_version={service_version};operation_id={operation_id}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(';')
            .filter_map(|v| v.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect()
    }

    #[test]
    fn format_user_agent() {
        let ua = user_agent("1.2.3");
        assert!(
            ua.starts_with("platform-services-rust-sdk/1.2.3 (lang=rust; "),
            "{ua}"
        );
        let system = ua
            .split_once('(')
            .and_then(|(_, s)| s.strip_suffix(')'))
            .unwrap_or_default();
        let fields = breakdown(system);
        assert_eq!(fields.get("lang").map(String::as_str), Some("rust"));
        assert_eq!(
            fields.get("arch").map(String::as_str),
            Some(std::env::consts::ARCH)
        );
        assert_eq!(
            fields.get("os").map(String::as_str),
            Some(std::env::consts::OS)
        );
        let got = fields.get("rustc.version");
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.map(|s| want.contains(s.as_str()) && !s.is_empty())
                .unwrap_or(false),
            "mismatched rustc version {want} and {got:?}"
        );
    }

    #[test]
    fn format_sdk_analytics() {
        let value = sdk_analytics("distribution_list_api", "V1", "ListDistributionListDestinations");
        let fields = breakdown(&value);
        assert_eq!(fields.len(), 3, "{fields:?}");
        assert_eq!(
            fields.get("service_name").map(String::as_str),
            Some("distribution_list_api")
        );
        assert_eq!(fields.get("service_version").map(String::as_str), Some("V1"));
        assert_eq!(
            fields.get("operation_id").map(String::as_str),
            Some("ListDistributionListDestinations")
        );
    }
}
