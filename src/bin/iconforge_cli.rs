//! IconForge CLI
//!
//! Commands: build, registry
//! Outputs JSON to stdout
//! Returns non-zero on failure

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use iconforge_core::{BuildConfig, BuildPipeline, DuplicatePolicy, TargetFlags};

#[derive(Parser)]
#[command(name = "iconforge-cli")]
#[command(about = "IconForge CLI - Icon Registry Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RegistryArgs {
    /// Directory of source vector icons
    #[arg(short, long)]
    source: PathBuf,

    /// Target font name
    #[arg(short, long)]
    font_name: String,

    /// Base code point (hex, e.g. E001)
    #[arg(short, long, default_value = "E001", value_parser = parse_code_point)]
    base: u32,

    /// Extra optimizer plugins, appended after the built-in defaults
    #[arg(long = "plugin")]
    plugins: Vec<String>,

    /// Keep the later of two sources sharing a name instead of failing
    #[arg(long)]
    last_write_wins: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the registry and emit all enabled targets
    Build {
        #[command(flatten)]
        registry: RegistryArgs,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Skip the JSON geometry map
        #[arg(long)]
        no_json: bool,

        /// Skip the CSS class map
        #[arg(long)]
        no_css: bool,

        /// Skip the React bundle
        #[arg(long)]
        no_react: bool,

        /// Skip the React Native bundle
        #[arg(long)]
        no_react_native: bool,

        /// Skip the Flutter bundle (and the font copy)
        #[arg(long)]
        no_flutter: bool,
    },

    /// Assemble and print the registry without writing artifacts
    Registry {
        #[command(flatten)]
        registry: RegistryArgs,
    },
}

fn parse_code_point(raw: &str) -> Result<u32, String> {
    let digits = raw
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches("U+");
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid code point {raw:?}: {e}"))
}

fn base_config(args: &RegistryArgs, out: PathBuf) -> BuildConfig {
    let mut config = BuildConfig::new(args.source.clone(), out, &args.font_name);
    config.base_code_point = args.base;
    config.extra_plugins = args.plugins.clone();
    if args.last_write_wins {
        config.duplicates = DuplicatePolicy::LastWriteWins;
    }
    config
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            registry,
            out,
            no_json,
            no_css,
            no_react,
            no_react_native,
            no_flutter,
        } => {
            let mut config = base_config(&registry, out);
            config.targets = TargetFlags {
                json: !no_json,
                css: !no_css,
                react: !no_react,
                react_native: !no_react_native,
                flutter: !no_flutter,
            };

            let pipeline = BuildPipeline::with_defaults(config);
            match pipeline.build().await {
                Ok(report) => {
                    let output = serde_json::json!({
                        "success": true,
                        "report": report,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    let output = serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&output).unwrap());
                    ExitCode::from(2)
                }
            }
        }

        Commands::Registry { registry } => {
            let mut config = base_config(&registry, PathBuf::from("dist"));
            config.targets = TargetFlags::none();

            let pipeline = BuildPipeline::with_defaults(config);
            match pipeline.registry().await {
                Ok(icons) => {
                    println!("{}", serde_json::to_string_pretty(&icons).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
