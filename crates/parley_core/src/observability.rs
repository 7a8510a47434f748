//! Metrics exporter setup.
//!
//! The exporter is chosen by `OTEL_EXPORTER`. Without the `metrics` feature
//! the choice is still validated but nothing is installed.

use parley_error::ConfigError;
use std::str::FromStr;
use tracing::{info, instrument};

/// Environment variable selecting the metrics exporter.
pub const ENV_METRICS_EXPORTER: &str = "OTEL_EXPORTER";
/// Environment variable holding the OTLP collector endpoint.
pub const ENV_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";
#[cfg(feature = "metrics")]
const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4318";

/// Where gateway metrics are sent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MetricsExporter {
    /// Periodic dump to standard output
    #[default]
    Stdout,
    /// OTLP over HTTP to `OTEL_EXPORTER_OTLP_ENDPOINT`
    Otlp,
}

impl MetricsExporter {
    /// Reads the exporter from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the exporter from any variable source. Unset means stdout.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_core::MetricsExporter;
    ///
    /// let exporter = MetricsExporter::from_lookup(|_| Some("OTLP".to_string())).unwrap();
    /// assert_eq!(exporter, MetricsExporter::Otlp);
    /// assert!(MetricsExporter::from_lookup(|_| Some("jaeger".to_string())).is_err());
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(ENV_METRICS_EXPORTER) {
            None => Ok(Self::default()),
            Some(value) => Self::from_str(value.trim()).map_err(|_| {
                ConfigError::new(format!(
                    "{} must be `stdout` or `otlp`, got {:?}",
                    ENV_METRICS_EXPORTER, value
                ))
            }),
        }
    }
}

/// Installs the global meter provider for `service_name`.
///
/// Calling it again after a successful install is a no-op.
///
/// # Errors
///
/// Returns error if `OTEL_EXPORTER` names an unknown exporter or the OTLP
/// exporter cannot be built.
#[instrument(skip_all, fields(service_name))]
pub fn init_observability(
    service_name: &'static str,
    export_interval_secs: u64,
) -> Result<(), ConfigError> {
    let exporter = MetricsExporter::from_env()?;

    #[cfg(feature = "metrics")]
    {
        provider::install(
            service_name,
            exporter,
            std::time::Duration::from_secs(export_interval_secs),
        )
    }

    #[cfg(not(feature = "metrics"))]
    {
        let _ = export_interval_secs;
        info!(service_name, %exporter, "Built without metrics, exporter not installed");
        Ok(())
    }
}

/// Flushes and stops the meter provider, if one was installed.
#[instrument]
pub fn shutdown_observability() {
    #[cfg(feature = "metrics")]
    provider::shutdown();
    info!("Metrics stopped");
}

#[cfg(feature = "metrics")]
mod provider {
    use super::{DEFAULT_OTLP_ENDPOINT, ENV_OTLP_ENDPOINT, MetricsExporter};
    use opentelemetry::{KeyValue, global};
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::{
        Resource,
        metrics::{PeriodicReader, SdkMeterProvider},
    };
    use parley_error::ConfigError;
    use std::sync::OnceLock;
    use std::time::Duration;
    use tracing::{debug, info, warn};

    static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

    pub(super) fn install(
        service_name: &'static str,
        exporter: MetricsExporter,
        interval: Duration,
    ) -> Result<(), ConfigError> {
        if METER_PROVIDER.get().is_some() {
            debug!("Meter provider already installed");
            return Ok(());
        }

        let reader = match exporter {
            MetricsExporter::Stdout => {
                PeriodicReader::builder(opentelemetry_stdout::MetricExporter::default())
                    .with_interval(interval)
                    .build()
            }
            MetricsExporter::Otlp => {
                let endpoint = std::env::var(ENV_OTLP_ENDPOINT)
                    .unwrap_or_else(|_| DEFAULT_OTLP_ENDPOINT.to_string());
                let otlp = opentelemetry_otlp::MetricExporter::builder()
                    .with_http()
                    .with_endpoint(&endpoint)
                    .build()
                    .map_err(|e| {
                        ConfigError::new(format!(
                            "Failed to create OTLP exporter for {}: {}",
                            endpoint, e
                        ))
                    })?;
                debug!(endpoint = %endpoint, "Built OTLP exporter");
                PeriodicReader::builder(otlp).with_interval(interval).build()
            }
        };

        let resource = Resource::builder_empty()
            .with_attributes([KeyValue::new("service.name", service_name)])
            .build();
        let provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_reader(reader)
            .build();

        global::set_meter_provider(provider.clone());
        let _ = METER_PROVIDER.set(provider);
        info!(%exporter, interval_secs = interval.as_secs(), "Meter provider registered");
        Ok(())
    }

    pub(super) fn shutdown() {
        let Some(provider) = METER_PROVIDER.get() else {
            return;
        };
        if let Err(e) = provider.shutdown() {
            warn!(error = %e, "Meter provider shutdown failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_exporter_is_stdout() {
        assert_eq!(
            MetricsExporter::from_lookup(|_| None).unwrap(),
            MetricsExporter::Stdout
        );
    }

    #[test]
    fn test_unknown_exporter_names_the_variable() {
        let err = MetricsExporter::from_lookup(|_| Some("prometheus".to_string())).unwrap_err();
        assert!(err.message.contains(ENV_METRICS_EXPORTER));
        assert!(err.message.contains("prometheus"));
    }
}
