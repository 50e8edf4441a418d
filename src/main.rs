mod cli;

use clap::Parser;
use cli::Args;
use project_model_view::adapters::outbound::console::StderrProgressReporter;
use project_model_view::adapters::outbound::filesystem::FileSystemReader;
use project_model_view::application::dto::{OutputFormat, ProjectionRequest};
use project_model_view::application::factories::{FormatterFactory, PresenterFactory};
use project_model_view::application::use_cases::ProjectDependenciesUseCase;
use project_model_view::config::{self, ConfigFile};
use project_model_view::ports::outbound::ProgressReporter;
use project_model_view::shared::error::ExitCode;
use project_model_view::shared::Result;
use std::path::Path;
use std::process;

/// Options after merging the config file under the command line
#[derive(Debug, PartialEq)]
struct EffectiveOptions {
    format: OutputFormat,
    only_changed: bool,
    compact: bool,
    fail_on_change: bool,
}

impl EffectiveOptions {
    fn merge(args: &Args, config: &ConfigFile) -> Self {
        Self {
            format: args.format.or(config.format).unwrap_or_default(),
            only_changed: args.only_changed || config.only_changed.unwrap_or(false),
            compact: args.compact || !config.pretty.unwrap_or(true),
            fail_on_change: args.fail_on_change || config.fail_on_change.unwrap_or(false),
        }
    }
}

fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help / --version
    let args = Args::parse();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = load_config(&args)?;
    for warning in config.unknown_field_warnings() {
        progress_reporter.report_warning(&warning);
    }
    let options = EffectiveOptions::merge(&args, &config);

    if options.fail_on_change && args.previous.is_none() {
        progress_reporter
            .report_warning("--fail-on-change has no effect without a previous snapshot");
    }

    // Create adapters (Dependency Injection)
    let snapshot_reader = FileSystemReader::new();
    let use_case = ProjectDependenciesUseCase::new(snapshot_reader, progress_reporter);

    let request = ProjectionRequest::new(
        args.snapshot.clone(),
        args.previous.clone(),
        options.only_changed,
    );
    let response = use_case.execute(request)?;

    use_case
        .progress_reporter()
        .report(FormatterFactory::progress_message(options.format));

    let formatter = FormatterFactory::create(options.format, options.compact);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(args.output);
    presenter.present(&formatted_output)?;

    if options.fail_on_change && response.has_changes() {
        return Ok(ExitCode::ChangesDetected);
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config` must exist; otherwise look next to the snapshot
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }

    let snapshot_dir = args
        .snapshot
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(config::discover_config(snapshot_dir)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["project-model-view", "-s", "snapshot.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_merge_defaults() {
        let options = EffectiveOptions::merge(&args(&[]), &ConfigFile::default());
        assert_eq!(
            options,
            EffectiveOptions {
                format: OutputFormat::Json,
                only_changed: false,
                compact: false,
                fail_on_change: false,
            }
        );
    }

    #[test]
    fn test_merge_config_values() {
        let config = ConfigFile {
            format: Some(OutputFormat::Markdown),
            only_changed: Some(true),
            pretty: Some(false),
            fail_on_change: Some(true),
            ..Default::default()
        };
        let options = EffectiveOptions::merge(&args(&[]), &config);
        assert_eq!(options.format, OutputFormat::Markdown);
        assert!(options.only_changed);
        assert!(options.compact);
        assert!(options.fail_on_change);
    }

    #[test]
    fn test_merge_cli_overrides_config_format() {
        let config = ConfigFile {
            format: Some(OutputFormat::Markdown),
            ..Default::default()
        };
        let options = EffectiveOptions::merge(&args(&["-f", "json"]), &config);
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_discovers_next_to_snapshot() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(config::CONFIG_FILENAME), "format: markdown\n").unwrap();
        let snapshot: PathBuf = dir.path().join("snapshot.json");

        let args = Args::try_parse_from([
            "project-model-view",
            "-s",
            snapshot.to_str().unwrap(),
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_load_config_explicit_missing_file_fails() {
        let result = load_config(&args(&["-c", "/nonexistent/config.yml"]));
        assert!(result.is_err());
    }
}
