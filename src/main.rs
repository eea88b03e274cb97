//! A binary executable that demonstrates the `ordjson` library.
//!
//! It decodes a document (a file, or a built-in sample), prints a couple of
//! lookups, and re-encodes the whole value.
//!
//! You can run it with: `cargo run -- [PATH] [--shortest] [--strict]`

use clap::Parser;
use ordjson::{
    decode_with_limits, encode_with_options, EncodeOptions, Limits, StringEscape, Value,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"
{
    "name": "ordjson",
    "version": 1,
    "tags": ["json", "avl", "codec"],
    "unicode": {
        "你好": "hello",
        "café": "coffee"
    },
    "nested": { "values": [1.5, null, true] }
}
"#;

#[derive(Debug, Parser)]
#[command(name = "ordjson", about = "Decode a JSON document and encode it back")]
struct Cli {
    /// Document to read. Uses a built-in sample when omitted.
    path: Option<PathBuf>,

    /// Fractional digits written for numbers.
    #[arg(long, default_value_t = 6, conflicts_with = "shortest")]
    precision: usize,

    /// Write the shortest round-tripping form of each number.
    #[arg(long)]
    shortest: bool,

    /// Escape only double quotes in output strings.
    #[arg(long)]
    quote_only: bool,

    /// Maximum container nesting depth.
    #[arg(long, default_value_t = ordjson::limits::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject anything but whitespace after the document.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn limits(&self) -> Limits {
        let base = if self.strict {
            Limits::strict()
        } else {
            Limits::new()
        };
        base.with_max_depth(self.max_depth)
    }

    fn encode_options(&self) -> EncodeOptions {
        let precision = if self.shortest {
            None
        } else {
            Some(self.precision)
        };
        let escape = if self.quote_only {
            StringEscape::QuoteOnly
        } else {
            StringEscape::Standard
        };
        EncodeOptions::new()
            .with_precision(precision)
            .with_escape(escape)
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_lookups(value: &Value) {
    if let Some(name) = value.object_get("name").and_then(|pair| pair.value.as_str()) {
        println!("name: {name}");
    }
    let greeting = value
        .object_get("unicode")
        .and_then(|pair| pair.value.object_get("你好"));
    if let Some(pair) = greeting {
        println!(
            "key: {}, value: {}",
            String::from_utf8_lossy(&pair.key),
            pair.value.as_bytes().map(String::from_utf8_lossy).unwrap_or_default()
        );
    }
    if let Some(len) = value.len() {
        println!("{} with {len} members", value.type_name());
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let input = match &cli.path {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("cannot read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let value = match decode_with_limits(&input, cli.limits()) {
        Ok(value) => value,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    print_lookups(&value);

    let mut out = Vec::new();
    if let Err(e) = encode_with_options(&mut out, &value, cli.encode_options()) {
        println!("encode failed: {e}");
        return ExitCode::FAILURE;
    }
    println!("encode: {}", String::from_utf8_lossy(&out));
    ExitCode::SUCCESS
}
