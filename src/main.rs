//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffzip::compression::compress::compress_file;
use huffzip::compression::decompress::decompress_file;
use huffzip::compression::verify::test_file;
use huffzip::tools::cli::{hufopts_init, HufOpts, Mode};
use huffzip::Result;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The CLI narrows this later.
    // Logs go to stderr so decompressing to stdout stays clean.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let opts = hufopts_init();

    //----- Figure how what we need to do and go do it
    if let Err(e) = run(&opts) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}

fn run(opts: &HufOpts) -> Result<()> {
    match opts.op_mode {
        Mode::Zip => {
            if let Some(report) = compress_file(opts)? {
                println!("Compressed file saved as: {}", report.artifact.display());
                println!("{}", report.stats);
            } else {
                println!("Input is empty. Nothing to compress.");
            }
        }
        Mode::Unzip => {
            if let Some(path) = decompress_file(opts)? {
                println!("Decompressed file saved as: {}", path.display());
            }
        }
        Mode::Test => match test_file(opts)? {
            Some(report) => {
                println!("Compressed file saved as: {}", report.artifact.display());
                println!("{}", report.stats);
                println!("SUCCESS: Decompressed data matches the original.");
            }
            None => println!("Input is empty. Nothing to compress."),
        },
    }
    Ok(())
}
