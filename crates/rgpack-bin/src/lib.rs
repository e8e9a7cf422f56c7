/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::{exit_code, run_workflow};

mod cmd_args;
mod cmd_parsers;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let config = cmd_parsers::global_options::parse_options(&options);

    if let Err(reason) = run_workflow(&config) {
        println!();
        error!(" Could not complete workflow, reason {}", reason);
        println!();

        exit(exit_code(&reason));
    }
}
