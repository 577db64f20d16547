use clap::Parser;
use patternkit::app::{self, Options};
use patternkit::init_logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let options = Options::parse();
    info!("PatternKit {} (built {})", patternkit::VERSION, patternkit::BUILD_DATE);

    let mut config = app::load_config(options.config.as_deref())?;
    if let Some(units) = options.units {
        config.display.measurement_system = units;
    }
    let mut file = app::load_pattern(&options.pattern)?;
    let prepared = app::prepare(&file, &config)?;

    print!(
        "{}",
        app::summary(&file.metadata.name, &prepared, &config, options.pages)
    );

    if let Some(output) = options.output.as_deref() {
        file.figures = prepared.figures;
        app::save_pattern(&mut file, output)?;
        info!("Wrote committed pattern to {}", output.display());
    }

    Ok(())
}
