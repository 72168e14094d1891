use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use dsan::config::DEFAULT_OUTPUT_DIR;
use dsan::logging::build_subscriber;
use dsan::{LogConfig, SanitizeConfig, Sanitizer};

/// Elimina metadata de archivos (PDF, DOCX, JPEG/PNG) para sanear datos.
#[derive(Parser, Debug)]
#[command(name = "dsan-metadata-stripper", version = "1.0")]
struct Cli {
    /// Ruta del archivo o directorio a procesar.
    input_path: PathBuf,

    /// Directorio donde se escriben los archivos saneados.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Procesa también los subdirectorios.
    #[arg(long)]
    recursive: bool,

    /// Activa el registro detallado (nivel debug).
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn sanitize_config(&self) -> SanitizeConfig {
        SanitizeConfig {
            output_dir: self.output.clone(),
            recursive: self.recursive,
        }
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            verbose: self.verbose,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let subscriber = build_subscriber(cli.log_config());

    tracing::subscriber::with_default(subscriber, || {
        let sanitizer = Sanitizer::new(cli.sanitize_config());
        sanitizer
            .run(&cli.input_path)
            .with_context(|| format!("No se pudo procesar `{}`", cli.input_path.display()))?;
        Ok(())
    })
}
