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

pub use auth::credentials::Credentials;

pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

/// Describes a client library, used in headers and error messages.
#[derive(Copy, Clone, Debug)]
pub struct ClientInfo {
    /// The service name, e.g., "distribution_list".
    pub service_name: &'static str,
    /// The service version reported in the SDK analytics header, e.g., "V1".
    pub service_version: &'static str,
    /// The version of the service API, reported with errors, e.g. "1.0.0".
    pub api_version: &'static str,
    /// The version of the client library.
    pub client_version: &'static str,
    /// The default endpoint of the service.
    pub default_host: &'static str,
}

impl ClientInfo {
    /// The component reported in errors.
    pub fn component(&self) -> gax::error::Component {
        gax::error::Component {
            name: self.service_name,
            version: self.api_version,
        }
    }
}

pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        let config = config;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn component() {
        let info = ClientInfo {
            service_name: "distribution_list",
            service_version: "V1",
            api_version: "1.0.0",
            client_version: "0.1.0",
            default_host: "https://cloud.ibm.com/notification-api",
        };
        let component = info.component();
        assert_eq!(component.name, "distribution_list");
        assert_eq!(component.version, "1.0.0");
    }
}
