use clap::{Parser, ValueEnum};
use quickthumb::{ResampleQuality, RustDecoder, RustResampler, generator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quickthumb")]
#[command(about = "Generate a downscaled, upright thumbnail from an image file")]
#[command(long_about = "\
Generate a downscaled, upright thumbnail from an image file

The longer side of the result equals --side exactly; the shorter side
scales proportionally. EXIF orientation is applied during generation, so
the output never needs rotation. Shrinking only: --side must not exceed
the source's longer side.

Supported inputs: JPEG, PNG, TIFF, WebP.")]
#[command(version)]
struct Cli {
    /// Source image file
    input: PathBuf,

    /// Maximum pixel length of the longer output side
    #[arg(short, long)]
    side: u32,

    /// Resampling quality (speed vs. smoothness)
    #[arg(long, value_enum, default_value = "low")]
    quality: QualityArg,

    /// Output file (format from extension; default: <input stem>-thumb.png)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum QualityArg {
    Low,
    Medium,
    High,
}

impl From<QualityArg> for ResampleQuality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Low => ResampleQuality::Low,
            QualityArg::Medium => ResampleQuality::Medium,
            QualityArg::High => ResampleQuality::High,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let thumb = generator::generate_from_path(
        &RustDecoder::new(),
        &RustResampler::new(),
        &cli.input,
        cli.side,
        cli.quality.into(),
    )?;

    let output = cli.output.unwrap_or_else(|| default_output(&cli.input));
    thumb.save(&output)?;
    println!(
        "{} → {} ({}x{})",
        cli.input.display(),
        output.display(),
        thumb.width(),
        thumb.height()
    );

    Ok(())
}

/// Sibling `<stem>-thumb.png` next to the input.
fn default_output(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thumbnail".to_string());
    input.with_file_name(format!("{stem}-thumb.png"))
}
