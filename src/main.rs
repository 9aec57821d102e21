use std::collections::BTreeSet;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use noqa_imports::rewrite::{fix_file, fix_source, FixError};
use noqa_imports::settings::Settings;

/// Append `# noqa: E501` to import lines longer than the configured limit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Files to fix in place. Pass `-` to read stdin and write stdout.
    filenames: Vec<String>,

    /// Maximum allowed line length.
    #[arg(long = "maximal-line-length", default_value_t = 79)]
    max_line_length: usize,

    /// Colon-separated list of application directory roots.
    #[arg(long, default_value = ".")]
    application_directories: String,

    /// Module name exempt from application classification (repeatable).
    #[arg(long = "unclassifiable-application-module", value_name = "MODULE")]
    unclassifiable_application_modules: Vec<String>,

    /// Exit with status 0 even when files were rewritten.
    #[arg(long)]
    exit_zero_even_if_changed: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            max_line_length: self.max_line_length,
            application_directories: self
                .application_directories
                .split(':')
                .map(PathBuf::from)
                .collect(),
            unclassifiable_application_modules: self
                .unclassifiable_application_modules
                .iter()
                .cloned()
                .collect::<BTreeSet<_>>(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let settings = cli.settings();

    let mut retv = 0u8;
    for filename in &cli.filenames {
        if filename == "-" {
            match fix_stdin(&settings) {
                Ok(changed) => retv |= u8::from(changed),
                Err(err) => {
                    eprintln!("{err}");
                    retv |= 1;
                }
            }
            continue;
        }

        match fix_file(Path::new(filename), &settings) {
            Ok(true) => {
                eprintln!("Rewriting {filename}");
                retv |= 1;
            }
            Ok(false) => {}
            Err(err @ FixError::Decode { .. }) => {
                // Bad encoding fails this file only; the batch continues.
                eprintln!("{err}");
                retv |= 1;
            }
            Err(err @ FixError::Io(_)) => {
                eprintln!("{filename}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.exit_zero_even_if_changed {
        retv = 0;
    }
    ExitCode::from(retv)
}

/// Single-file mode with no filesystem side effects: stdin in, stdout out.
fn fix_stdin(settings: &Settings) -> Result<bool, FixError> {
    let mut original = String::new();
    io::stdin()
        .read_to_string(&mut original)
        .map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => FixError::Decode {
                path: PathBuf::from("-"),
            },
            _ => FixError::Io(err),
        })?;

    let fixed = fix_source(&original, settings);
    io::stdout().write_all(fixed.as_bytes())?;
    Ok(fixed != original)
}
