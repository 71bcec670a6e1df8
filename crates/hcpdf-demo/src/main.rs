#![forbid(unsafe_code)]

//! hcpdf showcase
//!
//! Renders every showcase page to a content-stream file and writes an
//! `index.json` describing them.
//!
//! # Running
//!
//! ```sh
//! cargo run -p hcpdf-demo -- [OUTPUT_DIR]
//! HCPDF_LOG=debug cargo run -p hcpdf-demo
//! cargo run -p hcpdf-demo --features tracing-json
//! ```

mod showcase;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT_DIR: &str = "target/hcpdf-demo";
const LOG_ENV: &str = "HCPDF_LOG";
const DEFAULT_FILTER: &str = "warn";

/// One line of `index.json`.
#[derive(Debug, Serialize)]
struct PageRecord {
    name: &'static str,
    file: String,
    media_box: [f32; 4],
    rotate: u16,
    bytes: usize,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    #[cfg(feature = "tracing-json")]
    builder.json().init();
    #[cfg(not(feature = "tracing-json"))]
    builder.init();
}

fn render_all(out: &Path) -> hcpdf::Result<Vec<PageRecord>> {
    fs::create_dir_all(out)?;
    let mut records = Vec::new();
    for showcase in showcase::pages()? {
        let _span = tracing::info_span!("showcase", page = showcase.name).entered();
        let bytes = hcpdf::render_page(&showcase.page, showcase.element.as_ref(), Vec::new())?;
        let file = format!("{}.content", showcase.name);
        fs::write(out.join(&file), &bytes)?;
        let media = showcase.page.media_box();
        tracing::info!(file = %file, bytes = bytes.len(), "wrote page");
        records.push(PageRecord {
            name: showcase.name,
            file,
            media_box: [media.left(), media.bottom(), media.right(), media.top()],
            rotate: showcase.page.rotation_degrees(),
            bytes: bytes.len(),
        });
    }
    Ok(records)
}

fn run(out: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let records = render_all(out)?;
    let index = serde_json::to_string_pretty(&records)?;
    fs::write(out.join("index.json"), index)?;
    Ok(records.len())
}

fn main() -> ExitCode {
    init_logging();
    let out = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);
    match run(&out) {
        Ok(count) => {
            tracing::info!(count, dir = %out.display(), "showcase rendered");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "showcase failed");
            eprintln!("hcpdf-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
