//! quartzfmt - Source formatter for the Quartz language

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use glob::Pattern;
use quartzfmt::process::{format_document, format_source, FormatOutcome};
use quartzfmt::{check_naming, parse_args, CliArgs, Config, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

/// Quartz file extensions to process
const QUARTZ_EXTENSIONS: &[&str] = &["qrz"];

/// Default maximum file size in bytes (100 MB)
/// Files larger than this are skipped to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();

    // Check if we should read from stdin
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    // If no inputs and running interactively, print usage; otherwise read from stdin
    if args.inputs.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    if use_stdin {
        let config = build_config(&args, None)?;
        return process_stdin(&config, &args);
    }

    // Config is operational only (excludes, extensions, jobs, lint), so one
    // merged config serves every file
    let config = build_config(&args, args.inputs.first().map(PathBuf::as_path))?;

    // Configure thread pool if --jobs specified
    if let Some(jobs) = config.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    // Collect all files to process
    let files = collect_files(&args, &config);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No Quartz files found to format.");
        }
        return Ok(());
    }

    if config.lint {
        return lint_files(&files, &args);
    }

    // Process files
    let use_sequential = args.stdout || args.diff || args.jobs == Some(1);
    if use_sequential {
        process_files_sequential(&files, &args);
    } else {
        process_files_parallel(&files, &args);
    }

    Ok(())
}

/// Build configuration from CLI args and optional config file
///
/// If `for_path` is provided and no explicit config file is specified,
/// uses auto-discovery to find config files in parent directories.
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else if let Some(path) = for_path {
        if args.debug {
            let discovered = Config::discover_config_files(path);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", path.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", path.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(path)
    } else {
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // Override with CLI arguments
    for pattern in &args.exclude {
        if !config.exclude.contains(pattern) {
            config.exclude.push(pattern.clone());
        }
    }
    for extension in &args.extensions {
        if !config.extensions.contains(extension) {
            config.extensions.push(extension.clone());
        }
    }
    if let Some(jobs) = args.jobs {
        config.jobs = Some(jobs);
    }
    if args.lint {
        config.lint = true;
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   exclude: {:?}", config.exclude);
        eprintln!("[DEBUG]   extensions: {:?}", config.extensions);
        eprintln!("[DEBUG]   jobs: {:?}", config.jobs);
        eprintln!("[DEBUG]   lint: {}", config.lint);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Collect all files to process, handling directories and the recursive flag
fn collect_files(args: &CliArgs, config: &Config) -> Vec<PathBuf> {
    // CLI exclude patterns were already merged into the config
    let exclude_patterns: Vec<Pattern> = config
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let custom_extensions = &config.extensions;

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                // WalkDir reports symlink loops as errors when follow_links
                // is on; those entries are dropped by filter_map(ok)
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && is_quartz_file(path, custom_extensions)
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else {
                // Non-recursive: only direct children
                if let Ok(entries) = std::fs::read_dir(input) {
                    for entry in entries.filter_map(std::result::Result::ok) {
                        let path = entry.path();
                        if path.is_file()
                            && is_quartz_file(&path, custom_extensions)
                            && !is_excluded(&path, &exclude_patterns)
                        {
                            files.push(path);
                        }
                    }
                }
            }
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        if pattern.matches(&path_str) {
            return true;
        }

        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Check if a file has a Quartz extension
/// Checks against both default extensions and any custom extensions provided
fn is_quartz_file(path: &Path, custom_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            if QUARTZ_EXTENSIONS.contains(&ext) {
                return true;
            }
            for custom in custom_extensions {
                let custom_ext = custom.strip_prefix('.').unwrap_or(custom);
                if ext == custom_ext {
                    return true;
                }
            }
            false
        })
}

/// Count the number of lines in a string
fn count_lines(contents: &str) -> usize {
    let newlines = contents.matches('\n').count();
    if contents.is_empty() {
        0
    } else if contents.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Process files sequentially (for stdout/diff output)
fn process_files_sequential(files: &[PathBuf], args: &CliArgs) {
    for path in files {
        if let Err(e) = process_single_file(path, args) {
            eprintln!("Error formatting {}: {}", path.display(), e);
        }
    }
}

/// Process files in parallel using Rayon
fn process_files_parallel(files: &[PathBuf], args: &CliArgs) {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match process_single_file(path, args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error formatting {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Formatted {success} files successfully.");
        } else {
            eprintln!("Formatted {success} files, {errors} errors.");
        }
    }
}

/// Read a file to a string, enforcing the size and line-count guards
fn read_guarded(path: &PathBuf, args: &CliArgs) -> Result<Option<String>> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        if !args.silent {
            let size_mb = file_size / (1024 * 1024);
            let limit_mb = DEFAULT_MAX_FILE_SIZE / (1024 * 1024);
            eprintln!(
                "Skipping {} ({} MB exceeds limit of {} MB)",
                path.display(),
                size_mb,
                limit_mb
            );
        }
        return Ok(None);
    }

    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;

    if let Some(max_lines) = args.exclude_max_lines {
        let line_count = count_lines(&contents);
        if line_count > max_lines {
            if !args.silent {
                eprintln!(
                    "Skipping {} ({} lines exceeds limit of {})",
                    path.display(),
                    line_count,
                    max_lines
                );
            }
            return Ok(None);
        }
    }

    Ok(Some(contents))
}

/// Format a single file
fn process_single_file(path: &PathBuf, args: &CliArgs) -> Result<()> {
    let Some(contents) = read_guarded(path, args)? else {
        return Ok(());
    };

    if !args.silent && !args.stdout && !args.diff {
        eprintln!("Formatting: {}", path.display());
    }

    if args.stdout {
        io::stdout().write_all(format_source(&contents).as_bytes())?;
        return Ok(());
    }

    if args.diff {
        if !args.silent {
            println!("=== {} ===", path.display());
        }
        io::stdout().write_all(format_source(&contents).as_bytes())?;
        return Ok(());
    }

    // In-place: only touch the file when formatting changes something
    match format_document(&contents) {
        FormatOutcome::Unchanged => {}
        FormatOutcome::Reformatted { text, .. } => {
            std::fs::write(path, text)?;
        }
    }

    Ok(())
}

/// Run the naming lint over all files and print findings
fn lint_files(files: &[PathBuf], args: &CliArgs) -> Result<()> {
    let mut total = 0usize;

    for path in files {
        let Some(contents) = read_guarded(path, args)? else {
            continue;
        };

        for diagnostic in check_naming(&contents) {
            total += 1;
            println!(
                "{}:{}:{}: {}: {}",
                path.display(),
                diagnostic.span.start.line + 1,
                diagnostic.span.start.character + 1,
                diagnostic.severity,
                diagnostic.message
            );
        }
    }

    if !args.silent {
        if total == 0 {
            eprintln!("No naming issues found.");
        } else {
            eprintln!("Found {total} naming issues.");
        }
    }

    if total > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin(config: &Config, args: &CliArgs) -> Result<()> {
    let mut stdin_contents = String::new();
    io::stdin().read_to_string(&mut stdin_contents)?;

    #[allow(clippy::cast_possible_truncation)]
    let stdin_size = stdin_contents.len() as u64;
    if stdin_size > DEFAULT_MAX_FILE_SIZE {
        anyhow::bail!(
            "stdin input too large ({} MB exceeds limit of {} MB)",
            stdin_size / (1024 * 1024),
            DEFAULT_MAX_FILE_SIZE / (1024 * 1024)
        );
    }

    if config.lint || args.lint {
        let mut total = 0usize;
        for diagnostic in check_naming(&stdin_contents) {
            total += 1;
            println!(
                "stdin:{}:{}: {}: {}",
                diagnostic.span.start.line + 1,
                diagnostic.span.start.character + 1,
                diagnostic.severity,
                diagnostic.message
            );
        }
        if total > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    io::stdout().write_all(format_source(&stdin_contents).as_bytes())?;

    if !args.silent {
        eprintln!("Formatted stdin successfully.");
    }

    Ok(())
}

fn print_usage() {
    println!(
        "quartzfmt v{} - Quartz source code formatter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("A formatter and naming lint for Quartz (.qrz) files.");
    println!();
    println!("Usage:");
    println!("  quartzfmt [OPTIONS] <FILE>...");
    println!("  quartzfmt [OPTIONS] -r <DIRECTORY>");
    println!("  quartzfmt [OPTIONS] -              # Read from stdin");
    println!("  cat file.qrz | quartzfmt           # Pipe input");
    println!();
    println!("Examples:");
    println!("  quartzfmt file.qrz              # Format single file in-place");
    println!("  quartzfmt *.qrz                 # Format multiple files");
    println!("  quartzfmt -r src/               # Recursively format directory");
    println!("  quartzfmt --stdout file.qrz     # Output to stdout");
    println!("  quartzfmt --lint file.qrz       # Check identifier naming");
    println!("  quartzfmt - < file.qrz          # Read from stdin, write to stdout");
    println!();
    println!("Options:");
    println!("  -s, --stdout                    Output to stdout");
    println!("  -d, --diff                      Show formatted output without writing");
    println!("  -L, --lint                      Report naming issues instead of formatting");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -f, --extension <EXT>           Additional Quartz extension (repeatable)");
    println!("  -m, --exclude-max-lines <NUM>   Skip files with more than NUM lines");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("  -c, --config <FILE>             Config file path (overrides auto-discovery)");
    println!("  -S, --silent                    Silent mode");
    println!("  -D, --debug                     Enable debug output");
    println!("  -h, --help                      Print help");
    println!();
    println!("The formatting style is fixed: tab indentation, spaced binary");
    println!("operators and commas, strings and comments left untouched.");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for quartzfmt.toml in parent directories starting from");
    println!("  the file being formatted up to the root directory, plus the home");
    println!("  directory. Config files carry operational settings only (exclude,");
    println!("  extensions, jobs, lint); the formatting style has no options.");
}
