//! The `check` command: lint stylesheets and report the results.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use quill_diagnostic::{ColorMode, DiagnosticEmitter, FileReport, JsonEmitter, TerminalEmitter};

use crate::config::Config;
use crate::discovery::discover_stylesheets;
use crate::driver::{lint_files, FileResult};

/// No problems.
pub const EXIT_CLEAN: i32 = 0;
/// Configuration or IO failure.
pub const EXIT_FAILURE: i32 = 1;
/// At least one error-severity problem.
pub const EXIT_LINT_ERRORS: i32 = 2;

/// Output format for lint results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Options for `quill check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Files and directories to lint; the working directory when empty.
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub parallel: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            paths: Vec::new(),
            config: None,
            format: OutputFormat::Terminal,
            color: ColorMode::Auto,
            parallel: true,
        }
    }
}

/// Parse `check` arguments (everything after the command name).
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, String> {
    let mut options = CheckOptions::default();
    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            options.config = Some(PathBuf::from(path));
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "terminal" => OutputFormat::Terminal,
                "json" => OutputFormat::Json,
                _ => return Err(format!("unknown format '{format}' (expected terminal or json)")),
            };
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_name(color).ok_or_else(|| {
                format!("unknown color mode '{color}' (expected auto, always or never)")
            })?;
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }
    Ok(options)
}

/// Lint with the emitter selected by `options`, printing to stdout.
pub fn check_paths(options: &CheckOptions) -> i32 {
    let root = Path::new(".");
    match options.format {
        OutputFormat::Terminal => {
            let is_tty = io::stdout().is_terminal();
            let mut emitter = TerminalEmitter::stdout(options.color, is_tty);
            check_with(options, root, &mut emitter)
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(io::stdout());
            check_with(options, root, &mut emitter)
        }
    }
}

/// Lint and report through `emitter`.
///
/// `root` is where the default config file is looked up and what is linted
/// when no paths are given. Problems that stop files from being linted go
/// to stderr.
pub fn check_with(options: &CheckOptions, root: &Path, emitter: &mut dyn DiagnosticEmitter) -> i32 {
    let config = match Config::locate(options.config.as_deref(), root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };
    let linter = config.linter();

    let paths = if options.paths.is_empty() {
        vec![root.to_path_buf()]
    } else {
        options.paths.clone()
    };
    let discovered = discover_stylesheets(&paths);
    for missing in &discovered.missing {
        eprintln!("error: no such file or directory: {}", missing.display());
    }

    let results = lint_files(&linter, &discovered.files, options.parallel);
    let mut failed = !discovered.missing.is_empty();
    let mut reports: Vec<FileReport<'_>> = Vec::with_capacity(results.len());
    for result in &results {
        match &result.read_error {
            Some(error) => {
                eprintln!("error: could not read {}: {error}", result.name);
                failed = true;
            }
            None => reports.push(result.report()),
        }
    }

    emitter.emit_all(&reports);
    let invalid_options = linter.invalid_option_messages();
    if !invalid_options.is_empty() {
        emitter.emit_invalid_options(&invalid_options);
        failed = true;
    }
    let (errors, warnings) = count_problems(&results);
    emitter.emit_summary(errors, warnings);
    emitter.flush();

    if failed {
        EXIT_FAILURE
    } else if results.iter().any(FileResult::errored) {
        EXIT_LINT_ERRORS
    } else {
        EXIT_CLEAN
    }
}

/// Error and warning counts; parse errors count as errors.
fn count_problems(results: &[FileResult]) -> (usize, usize) {
    results.iter().fold((0, 0), |(errors, warnings), result| {
        let file_errors = result.warnings.iter().filter(|w| w.is_error()).count();
        (
            errors + file_errors + result.parse_errors.len(),
            warnings + result.warnings.len() - file_errors,
        )
    })
}
