use std::path::PathBuf;

use clap::{CommandFactory as _, Parser, ValueEnum};

use titlecard::{Rgb, Size, StyleVariant, TitleConfig};

/// Create title and subtitle banner images.
#[derive(Parser, Debug)]
#[command(name = "titlecard", version)]
struct Cli {
    /// Verbose status messages.
    #[arg(short = 'v')]
    verbose: bool,

    /// Debug status messages.
    #[arg(short = 'd')]
    debug: bool,

    /// Title text.
    #[arg(long, default_value = "")]
    title: String,

    /// Subtitle text.
    #[arg(long, default_value = "")]
    subtitle: String,

    /// Named gradient background (unknown names fall back to a flat fill).
    #[arg(long)]
    gradient: Option<String>,

    /// Canvas size as "W,H".
    #[arg(long, default_value = "1024,1024")]
    size: Size,

    /// Layout proportions.
    #[arg(long, value_enum, default_value_t = VariantChoice::Poster)]
    variant: VariantChoice,

    /// Background color as "R,G,B" floats in 0..=1.
    #[arg(long, default_value = "0,0,0")]
    background: Rgb,

    /// Text color as "R,G,B" floats in 0..=1.
    #[arg(long, default_value = "1,1,1")]
    color: Rgb,

    /// Output image path (format inferred from the extension).
    #[arg(long)]
    outputfile: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Poster,
    Banner,
}

impl From<VariantChoice> for StyleVariant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::Poster => StyleVariant::Poster,
            VariantChoice::Banner => StyleVariant::Banner,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let Some(outputfile) = cli.outputfile else {
        eprintln!("{}", Cli::command().render_usage());
        anyhow::bail!("must have output file parameter");
    };

    let config = TitleConfig {
        title: cli.title,
        subtitle: cli.subtitle,
        output: Some(outputfile.clone()),
        size: cli.size,
        gradient: cli.gradient,
        background: cli.background,
        color: cli.color,
        variant: cli.variant.into(),
    };

    tracing::info!("titlecard -- a utility for creating title images");
    tracing::info!(path = %outputfile.display(), "writing title file");

    let canvas = titlecard::render_title(&config)?;

    // Write failures are reported but deliberately do not change the exit
    // code; the render itself succeeded.
    if let Err(err) = titlecard::write_canvas(&canvas, &outputfile) {
        tracing::error!(error = %err, "could not write output file");
    }

    Ok(())
}
