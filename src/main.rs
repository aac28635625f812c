use anyhow::Context;
use clap::Parser;
use medical_pii_ocr::{
    Config, ErrorResponse, MedicalOcrPipeline, PiiError, PreprocessConfig, RawDocumentText,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "medical-pii-ocr")]
#[command(about = "Extract patient identifiers from a scanned medical document")]
#[command(version)]
pub struct Args {
    /// Scanned page to process (echoed back as `file`)
    pub image: PathBuf,

    /// Use this text instead of running OCR on the image
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the OCR text from a file instead of running OCR on the image
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Median filter radius used for denoising (0 disables)
    #[arg(long, env = "PII_OCR_DENOISE_RADIUS", default_value = "1")]
    pub denoise_radius: u32,

    /// Neighbourhood size for adaptive thresholding (odd)
    #[arg(long, env = "PII_OCR_BLOCK_SIZE", default_value = "11")]
    pub block_size: u32,

    /// Constant subtracted from the local mean when thresholding
    #[arg(
        long,
        env = "PII_OCR_THRESHOLD_OFFSET",
        default_value = "2",
        allow_hyphen_values = true
    )]
    pub threshold_offset: i32,

    /// Characters of raw text kept in `raw_text_snippet`
    #[arg(long, env = "PII_OCR_SNIPPET_CHARS", default_value = "100")]
    pub snippet_chars: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            preprocess: PreprocessConfig {
                denoise_radius: args.denoise_radius,
                block_size: args.block_size,
                threshold_offset: args.threshold_offset,
            },
            snippet_chars: args.snippet_chars,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the JSON document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("medical-pii-ocr v{}", env!("CARGO_PKG_VERSION"));

    let text_override = match (&args.text, &args.text_file) {
        (Some(text), _) => Some(RawDocumentText::new(text.clone())),
        (None, Some(path)) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read text file {}", path.display()))?;
            match RawDocumentText::from_bytes(bytes) {
                Ok(text) => Some(text),
                Err(e) => fail(e),
            }
        }
        (None, None) => None,
    };

    let config = Config::from(&args);
    let outcome = MedicalOcrPipeline::new(&config).and_then(|pipeline| {
        pipeline.run(&args.image, text_override.as_ref().map(RawDocumentText::as_str))
    });

    match outcome {
        Ok(result) => {
            println!("{}", result.to_pretty_json()?);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

/// Report a pipeline error as JSON on stderr and exit non-zero
fn fail(err: PiiError) -> ! {
    tracing::error!("{}", err);
    match serde_json::to_string_pretty(&ErrorResponse::from(&err)) {
        Ok(body) => eprintln!("{}", body),
        Err(_) => eprintln!("{}", err),
    }
    std::process::exit(1);
}
