#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the thin command-line shell around the [`logging`] crate. It
//! parses a handful of switches, seeds the shared logger, and runs a fixed
//! demonstration sequence that emits one line per severity.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error and returns the process exit code. Parsing uses a
//! [`clap`] builder with the automatic help flag disabled so `-h`/`--help`
//! prints the static [`HELP_TEXT`]. After parsing, the shared logger is
//! created from the `FILELOG_*` environment variables, with `--logfile`
//! taking precedence over `FILELOG_FILE`. The demonstration itself lives in
//! [`execute`], which takes the logger by reference so tests can pass an
//! in-memory instance.
//!
//! # Errors
//!
//! Invalid arguments and invalid `FILELOG_*` values are reported on standard
//! error with exit code `1`. Running without any argument logs an error line
//! and also exits with `1`.
//!
//! # Examples
//!
//! ```no_run
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(["filelog", "--logfile", "demo.log"], &mut stdout, &mut stderr);
//! assert_eq!(code, 0);
//! ```

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::{Logger, LoggerConfig, MakeWriter, Severity};

/// Usage text printed by `-h`/`--help`.
pub const HELP_TEXT: &str = concat!(
    "Usage: filelog <option(s)>\n",
    "Options:\n",
    "  -h, --help             Show this help message\n",
    "  -d, --domain DOMAIN    Specify the current domain\n",
    "  -c, --clients PATH     Specify the path to the list of all clients\n",
    "\n",
    "Logging:\n",
    "  -l, --logfile PATH     Specify the path of the log file\n",
    "      --nolog            Disable all gated log output\n",
    "      --debug            Mirror log output on the console\n",
    "\n",
    "Environment:\n",
    "  FILELOG_LEVEL          Initial level (disabled, info, buffer, trace, debug, enable-all)\n",
    "  FILELOG_SINK           Initial sink (none, console, file, file-and-console)\n",
    "  FILELOG_FILE           Log file path when --logfile is absent\n",
);

/// Buffer line written before anything else.
pub const START_BANNER: &str = "####### Program start #######";

/// Buffer line written after the demonstration sequence.
pub const EXIT_BANNER: &str = "####### Program exit #######";

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `-h`/`--help` was given.
    pub show_help: bool,
    /// Value of `-d`/`--domain`.
    pub domain: Option<OsString>,
    /// Value of `-c`/`--clients`.
    pub clients: Option<PathBuf>,
    /// Value of `-l`/`--logfile`.
    pub logfile: Option<PathBuf>,
    /// `--nolog` was given.
    pub nolog: bool,
    /// `--debug` was given.
    pub debug: bool,
    /// Number of arguments after the program name.
    pub argument_count: usize,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("filelog")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("domain")
                .long("domain")
                .short('d')
                .value_name("DOMAIN")
                .help("Specify the current domain.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("clients")
                .long("clients")
                .short('c')
                .value_name("PATH")
                .help("Specify the path to the list of all clients.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("logfile")
                .long("logfile")
                .short('l')
                .value_name("PATH")
                .help("Specify the path of the log file.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("nolog")
                .long("nolog")
                .help("Disable all gated log output.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Mirror log output on the console.")
                .action(ArgAction::SetTrue),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// The first item is the program name.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from("filelog"));
    }
    let argument_count = args.len() - 1;

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        domain: matches.remove_one::<OsString>("domain"),
        clients: matches.remove_one::<OsString>("clients").map(PathBuf::from),
        logfile: matches.remove_one::<OsString>("logfile").map(PathBuf::from),
        nolog: matches.get_flag("nolog"),
        debug: matches.get_flag("debug"),
        argument_count,
    })
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The shared logger is created here; a second call in the same process
/// reuses it with the file chosen first.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{error}");
            return 1;
        }
    };

    let mut config = match LoggerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "filelog: {error}");
            return 1;
        }
    };
    if let Some(path) = &parsed.logfile {
        config.file = Some(path.clone());
    }

    let logger = logging::shared_with_config(&config);
    #[cfg(feature = "tracing")]
    install_tracing(logger);

    execute(&parsed, logger, stdout, stderr)
}

/// Forwards `tracing` events into `logger`, filtered by `RUST_LOG`.
#[cfg(feature = "tracing")]
fn install_tracing(logger: &'static Logger) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    // A subscriber installed earlier in the process stays in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(logging::LoggerLayer::new(logger))
        .try_init();

    tracing::debug!(
        file = ?logger.file_path(),
        level = %logger.level(),
        sink = %logger.sink_mode(),
        "logger ready"
    );
}

/// Runs the demonstration sequence against `logger`.
///
/// `--nolog` and `--debug` adjust the logger before the start banner. Help
/// output ends the run with exit code `0`; running without arguments logs an
/// error and returns `1`.
pub fn execute<W, C, Out, Err>(
    parsed: &ParsedArgs,
    logger: &Logger<W, C>,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    W: Write,
    C: MakeWriter,
    Out: Write,
    Err: Write,
{
    if parsed.nolog {
        logger.info("Logging is disabled");
        logger.disable_all();
    }
    if parsed.debug {
        logger.enable_file_and_console();
        logger.info("Log output is mirrored on the console");
    }

    logger.buffer(START_BANNER);

    if parsed.show_help {
        if stdout.write_all(HELP_TEXT.as_bytes()).is_err() {
            return 1;
        }
        logger.buffer(EXIT_BANNER);
        return 0;
    }

    if let Some(domain) = &parsed.domain {
        logger.trace(format_args!("Domain: {}", domain.to_string_lossy()));
    }
    if let Some(clients) = &parsed.clients {
        logger.trace(format_args!("Client list: {}", clients.display()));
    }

    if parsed.argument_count == 0 {
        logger.error("No arguments found! Use '-h' to show usage");
        let _ = writeln!(stderr, "filelog: no arguments found; use '-h' to show usage");
        return 1;
    }

    for severity in Severity::ALL {
        logger.log(
            severity,
            format_args!("Message logged through the direct interface, severity: {severity}"),
        );
    }

    logger.buffer(EXIT_BANNER);
    0
}
