//! Tracing subscriber setup for the server binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Environment;

/// Default filter directive when `RUST_LOG` is unset.
fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Local | Environment::Dev => "debug",
        Environment::Prod => "info",
    }
}

/// Install the global subscriber.
///
/// `local` logs human-readable lines; `dev` and `prod` log JSON.
/// `RUST_LOG` overrides the level in every environment.
pub fn init_tracing(environment: Environment) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)));
    let registry = tracing_subscriber::registry().with(filter);

    match environment {
        Environment::Local => registry.with(fmt::layer()).try_init()?,
        Environment::Dev | Environment::Prod => registry.with(fmt::layer().json()).try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(Environment::Local), "debug");
        assert_eq!(default_directive(Environment::Dev), "debug");
        assert_eq!(default_directive(Environment::Prod), "info");
    }
}
