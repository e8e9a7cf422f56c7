/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

/// Everything a packing run needs, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub source: PathBuf,
    pub result: PathBuf,
    pub verify: bool
}

impl Default for PackConfig {
    fn default() -> PackConfig {
        PackConfig {
            source: PathBuf::from("source.png"),
            result: PathBuf::from("result.png"),
            verify: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> PackConfig {
    let mut config = PackConfig::default();

    if let Some(source) = options.get_one::<PathBuf>("source") {
        config.source = source.clone();
    }
    if let Some(result) = options.get_one::<PathBuf>("result") {
        config.result = result.clone();
    }
    if options.value_source("verify") == Some(ValueSource::CommandLine) {
        info!("Verifying packed output");
        config.verify = true;
    }
    info!("Source: {:?}, result: {:?}", config.source, config.result);

    config
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let flag = |name: &str| options.get_flag(name);

    let log_level = if flag("debug") {
        Level::Debug
    } else if flag("trace") {
        Level::Trace
    } else if flag("warn") {
        Level::Warn
    } else if flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{parse_options, PackConfig};

    #[test]
    fn defaults() {
        let matches = create_cmd_args().try_get_matches_from(["rgpack"]).unwrap();
        assert_eq!(parse_options(&matches), PackConfig::default());
    }

    #[test]
    fn explicit_paths_and_verify() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "rgpack",
                "--source",
                "normal.png",
                "-r",
                "packed.png",
                "--verify"
            ])
            .unwrap();
        let config = parse_options(&matches);

        assert_eq!(config.source, PathBuf::from("normal.png"));
        assert_eq!(config.result, PathBuf::from("packed.png"));
        assert!(config.verify);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["rgpack", "--quality"])
            .is_err());
    }
}
