use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter, path::PathBuf};

/// Input name that selects the built-in sample text instead of a file.
pub const DEMO_TRIGGER: &str = "demo";

/// Sample text compressed when the input is `demo`.
pub const DEMO_TEXT: &str = "abracadabra! huffman coding is a lossless data compression algorithm.";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where the data to compress comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The built-in sample text.
    Demo,
    File(PathBuf),
}

impl Source {
    /// `demo` selects the sample text, anything else names a file.
    pub fn from_arg(arg: &str) -> Self {
        if arg == DEMO_TRIGGER {
            Source::Demo
        } else {
            Source::File(PathBuf::from(arg))
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Demo => write!(f, "{} (sample text)", DEMO_TRIGGER),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HufOpts {
    /// Input to process
    pub source: Source,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where decompressed output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Log the code table after building it
    pub show_codes: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HufOpts {
    pub fn new() -> Self {
        Self {
            source: Source::Demo,
            op_mode: Mode::Zip,
            output: Output::File,
            force_overwrite: false,
            show_codes: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HufOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "Huffman coding file compressor",
    long_about = "
    Compresses a file with a Huffman code built from its own byte frequencies. The output
    is written next to the input with a .huf suffix and carries the frequency table, so it
    can be restored without any other information.

    Give 'demo' instead of a filename to compress a built-in sample text."
)]
pub struct Args {
    /// File to process, or 'demo' for the sample text
    #[clap(default_value = DEMO_TRIGGER)]
    input: String,

    /// Compress the input (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress a .huf file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress, write, read back, decompress and compare
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send decompressed output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Log the code table (shown with -v)
    #[clap(long = "codes")]
    codes: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Suppress everything but errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> HufOpts {
    let mut opts = HufOpts::new();
    opts.source = Source::from_arg(&args.input);
    if args.compress {
        opts.op_mode = Mode::Zip
    };
    if args.decompress {
        opts.op_mode = Mode::Unzip
    };
    if args.test {
        opts.op_mode = Mode::Test
    };
    opts.force_overwrite = args.force;
    if args.stdout {
        opts.output = Output::Stdout
    };
    opts.show_codes = args.codes;
    opts.verbose = match (args.quiet, args.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => Verbosity::Warnings,
        (false, 1) => Verbosity::Info,
        (false, 2) => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    opts
}

/// Parse the process arguments, set the log level and report the settings.
pub fn hufopts_init() -> HufOpts {
    let opts = opts_from_args(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- huffzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from {}", opts.source);
    if opts.output == Output::Stdout {
        if opts.op_mode == Mode::Unzip {
            info!("Sending output to stdout")
        } else {
            warn!("--stdout only applies when decompressing")
        }
    };
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- huffzip Initialization End ----");
    opts
}
