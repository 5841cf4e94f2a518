use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use form_schema_core::{FormValues, default_schema_text, to_pretty_json};
use form_schema_preview::{Preview, PreviewConfig, SubmitOutcome, submission_report};
use tracing_subscriber::EnvFilter;

/// Output format for the `validate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "form-preview")]
#[command(about = "Validate, preview and submit JSON form schemas")]
struct Cli {
    /// YAML file with preview settings (indent, button labels).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print or write the default starter schema.
    Init(InitArgs),
    /// Validate one or more schema files.
    Validate(ValidateArgs),
    /// Render a schema file as an HTML form preview.
    Render(RenderArgs),
    /// Fill in a schema's form and submit it.
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Write the schema here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema JSON files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Schema JSON file.
    input: PathBuf,
    /// Write the HTML here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SubmitArgs {
    /// Schema JSON file.
    input: PathBuf,
    /// Field value as `id=value`; repeatable.
    #[arg(long = "value", value_name = "ID=VALUE")]
    values: Vec<String>,
    /// JSON object of field values, applied before `--value` pairs.
    #[arg(long)]
    values_json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Init(args) => run_init(args, &config),
        Command::Validate(args) => run_validate(args, &config),
        Command::Render(args) => run_render(args, &config),
        Command::Submit(args) => run_submit(args, &config),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<PreviewConfig, String> {
    let Some(path) = path else {
        return Ok(PreviewConfig::default());
    };
    tracing::debug!(path = %path.display(), "Loading preview config");
    PreviewConfig::load(path)
        .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))
}

fn read_schema_text(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), String> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!("Wrote '{}'.", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn run_init(args: InitArgs, config: &PreviewConfig) -> Result<(), String> {
    let mut text = default_schema_text(config.indent);
    text.push('\n');
    write_or_print(args.output.as_deref(), &text)
}

fn run_validate(args: ValidateArgs, config: &PreviewConfig) -> Result<(), String> {
    let mut rejected = 0usize;
    let mut reports = Vec::new();

    for path in &args.inputs {
        let text = read_schema_text(path)?;
        let preview = Preview::from_text(&text);
        if !preview.is_ready() {
            rejected += 1;
        }

        match args.format {
            CliOutputFormat::Text => {
                if preview.is_ready() {
                    println!("{}: valid", path.display());
                } else {
                    println!("{}: invalid", path.display());
                    for error in preview.errors() {
                        println!("  - {error}");
                    }
                }
                for warning in preview.warnings() {
                    eprintln!("warning: {}: {warning}", path.display());
                }
            }
            CliOutputFormat::Json => {
                reports.push(serde_json::json!({
                    "path": path.display().to_string(),
                    "valid": preview.is_ready(),
                    "errors": preview.errors(),
                    "warnings": preview.warnings(),
                }));
            }
        }
    }

    if args.format == CliOutputFormat::Json {
        println!("{}", to_pretty_json(&reports, config.indent));
    }

    if rejected > 0 {
        return Err(format!(
            "{rejected} of {} schema file(s) rejected",
            args.inputs.len()
        ));
    }
    Ok(())
}

fn run_render(args: RenderArgs, config: &PreviewConfig) -> Result<(), String> {
    let text = read_schema_text(&args.input)?;
    let preview = Preview::from_text(&text);

    for warning in preview.warnings() {
        eprintln!("warning: {warning}");
    }
    if !preview.is_ready() {
        eprintln!("Schema Errors:");
        for error in preview.errors() {
            eprintln!("  - {error}");
        }
        print!("{}", preview.render(config));
        return Err(format!("'{}' is not a valid form schema", args.input.display()));
    }

    write_or_print(args.output.as_deref(), &preview.render(config))
}

fn run_submit(args: SubmitArgs, config: &PreviewConfig) -> Result<(), String> {
    let text = read_schema_text(&args.input)?;
    let mut preview = Preview::from_text(&text);
    if !preview.is_ready() {
        let errors = preview.errors().join("; ");
        return Err(format!(
            "'{}' is not a valid form schema: {errors}",
            args.input.display()
        ));
    }
    let form = preview
        .form_mut()
        .ok_or_else(|| "schema preview is not ready".to_string())?;

    if let Some(path) = &args.values_json {
        let raw = read_schema_text(path)?;
        let values: FormValues = serde_json::from_str(&raw)
            .map_err(|err| format!("Failed to parse values '{}': {err}", path.display()))?;
        for (id, value) in values {
            form.set_value(&id, value).map_err(|err| err.to_string())?;
        }
    }

    for pair in &args.values {
        let (id, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Expected ID=VALUE, got '{pair}'"))?;
        form.set_value(id, value).map_err(|err| err.to_string())?;
    }

    let mut report = None;
    match form.submit(|values| report = Some(submission_report(&values, config.indent))) {
        SubmitOutcome::Submitted => {
            if let Some(report) = report {
                println!("{report}");
            }
            Ok(())
        }
        SubmitOutcome::Blocked { errors } => {
            for (id, message) in &errors {
                eprintln!("{id}: {message}");
            }
            Err(format!("Submission blocked by {} field error(s)", errors.len()))
        }
    }
}
