/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, warn};
use rgpack_core::diagnostics::LogDiagnostics;
use rgpack_core::errors::PackErrors;
use rgpack_core::pipeline::PackRG;
use rgpack_core::png::{read_source, write_result};
use rgpack_core::verify::verify;

use crate::cmd_parsers::global_options::PackConfig;

/// Process exit code for each failure kind
pub fn exit_code(error: &PackErrors) -> i32 {
    match error {
        PackErrors::SourceNotFound { .. } => 2,
        PackErrors::UnsupportedFormat(_) => 3,
        PackErrors::WriteFailure { .. } => 4,
        PackErrors::DimensionMismatch { .. } => 1
    }
}

/// Read the source, pack it and write the result
///
/// Nothing is written unless the source was read and decoded.
pub(crate) fn run_workflow(config: &PackConfig) -> Result<(), PackErrors> {
    info!("Creating workflow from input");

    let source = read_source(&config.source)?;
    let (width, height) = source.dimensions();

    info!("Source dimensions {}x{}", width, height);

    let diagnostics = LogDiagnostics::new();
    let packed = PackRG::with_diagnostics(&diagnostics).execute(&source);

    if diagnostics.count() > 0 {
        warn!(
            "{} pixels have a coarse red byte deviating from the direct truncation, run with --debug to list them",
            diagnostics.count()
        );
    }

    if config.verify {
        let stats = verify(&source, &packed)?;
        info!(
            "Verified {} pixels, max error red: {:.7}, green: {:.7}",
            stats.pixels, stats.max_error_red, stats.max_error_green
        );
    }

    write_result(&config.result, &packed)?;

    info!("Finished writing {:?}", config.result);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rgpack_core::errors::PackErrors;
    use rgpack_core::image::SourceImage;
    use rgpack_core::pipeline::PackRG;
    use rgpack_core::png::{read_source, write_result};
    use zune_core::colorspace::ColorSpace;

    use crate::cmd_parsers::global_options::PackConfig;
    use crate::workflow::{exit_code, run_workflow};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rgpack-bin-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_source_exits_with_source_code() {
        let config = PackConfig {
            source: temp_path("missing.png"),
            result: temp_path("missing-result.png"),
            verify: false
        };
        let err = run_workflow(&config).unwrap_err();

        assert!(matches!(err, PackErrors::SourceNotFound { .. }));
        assert_eq!(exit_code(&err), 2);
        assert!(!config.result.exists());
    }

    #[test]
    fn undecodable_source_exits_with_format_code() {
        let source = temp_path("not-a-png.png");
        std::fs::write(&source, b"P6\n1 1\n255\n\x00\x00\x00").unwrap();

        let config = PackConfig {
            source: source.clone(),
            result: temp_path("not-a-png-result.png"),
            verify: true
        };
        let err = run_workflow(&config).unwrap_err();

        assert_eq!(exit_code(&err), 3);
        assert!(!config.result.exists());

        let _ = std::fs::remove_file(source);
    }

    #[test]
    fn packs_its_own_output() {
        // a packed image is itself a valid source
        let first = PackConfig {
            source: temp_path("first.png"),
            result: temp_path("second.png"),
            verify: true
        };
        let seed =
            SourceImage::from_u8(&[10, 20, 30, 200, 100, 50], 2, 1, ColorSpace::RGB).unwrap();
        write_result(&first.source, &PackRG::new().execute(&seed)).unwrap();

        run_workflow(&first).unwrap();
        assert_eq!(read_source(&first.result).unwrap().dimensions(), (2, 1));

        let _ = std::fs::remove_file(&first.source);
        let _ = std::fs::remove_file(&first.result);
    }

    #[test]
    fn write_failure_code() {
        let err = PackErrors::WriteFailure {
            path:   PathBuf::from("x.png"),
            reason: "denied".to_string()
        };
        assert_eq!(exit_code(&err), 4);
    }
}
