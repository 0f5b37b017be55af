// Error types for kartfinder

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum KartFinderError {
    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Batch evaluation errors
    #[snafu(display("Error reading selections file {path}"))]
    BatchReadError { path: String, source: io::Error },
    #[snafu(display("Error writing recommendations file {path}"))]
    BatchWriteError { path: String, source: io::Error },

    #[snafu(display("Error serializing recommendation"))]
    OutputSerializeError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid answer for {field}: {value} (expected one of {expected})"))]
    InvalidSelection {
        field: String,
        value: String,
        expected: String,
    },
    #[snafu(display("Error reading wizard input"))]
    WizardInputError { source: io::Error },
}
