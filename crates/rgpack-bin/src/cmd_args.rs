/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub static VERIFY_HELP: &str = "Decode the packed image and report reconstruction error

Each packed pixel is decoded back into red and green values
and compared against the source, the largest difference per
channel is logged at info level.";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("rgpack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pack the red and green channels of an image into two byte fixed point RGBA")
        .arg(Arg::new("source")
            .short('s')
            .long("source")
            .help("Source image to read")
            .default_value("source.png")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("result")
            .short('r')
            .long("result")
            .help("Result image to write")
            .default_value("result.png")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the packing run"))
        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Decode the result and report reconstruction error")
            .long_help(VERIFY_HELP))
}
