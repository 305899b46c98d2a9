use std::process::ExitCode;

use log::LevelFilter;

use huffpack::{compress_file, decompress_file, Config, Mode};

fn main() -> ExitCode {
    let config = match Config::try_from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let default_level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let result = match config.mode {
        Mode::Compress => compress_file(&config.input, &config.output, config.verbose),
        Mode::Decompress => decompress_file(&config.input, &config.output, config.verbose),
    };

    match result {
        Ok(summary) => {
            if let Some(report) = &summary.report {
                print!("{}", report);
            }
            match config.mode {
                Mode::Compress => println!("File compressed."),
                Mode::Decompress => println!("File decompressed."),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("huffpack: {}", e);
            ExitCode::FAILURE
        }
    }
}
