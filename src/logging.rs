//! Construcción del suscriptor de `tracing` a partir de [`LogConfig`].

use chrono::Local;
use std::fmt;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::LogConfig;

/// Marca de tiempo local con el mismo formato que el resto de la herramienta.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Crea un suscriptor que escribe `fecha nivel mensaje` en stderr.
///
/// El nivel base sale de `config`; `RUST_LOG` puede refinarlo. El suscriptor
/// no se instala globalmente: quien lo recibe decide su alcance con
/// [`tracing::subscriber::with_default`].
pub fn build_subscriber(config: LogConfig) -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTimestamp)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}
