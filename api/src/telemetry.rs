use crate::config::Config;
use anyhow::Context;
use std::borrow::Cow;

/// Fractions of errors and transactions forwarded to Sentry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRates {
    pub errors: f32,
    pub traces: f32,
}

impl SamplingRates {
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" => SamplingRates {
                errors: 1.0,
                traces: 0.2,
            },
            "staging" => SamplingRates {
                errors: 1.0,
                traces: 0.5,
            },
            _ => SamplingRates {
                errors: 1.0,
                traces: 1.0,
            },
        }
    }
}

/// Starts the Sentry client when a DSN is configured.
///
/// Sentry needs to be initialized outside of an async block, and the
/// returned guard must outlive the runtime or buffered events are lost.
/// See https://docs.sentry.io/platforms/rust.
pub fn init_sentry(config: &Config) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    let Some(dsn) = &config.sentry_url else {
        return Ok(None);
    };
    let dsn = dsn
        .parse::<sentry::types::Dsn>()
        .context("Invalid Sentry DSN")?;

    let rates = SamplingRates::for_environment(&config.environment);

    Ok(Some(sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        sample_rate: rates.errors,
        traces_sample_rate: rates.traces,
        release: sentry::release_name!(),
        environment: Some(Cow::Owned(config.environment.clone())),
        ..Default::default()
    })))
}
