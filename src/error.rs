//! Error types.
//!
//! Follows hyperion's hand-rolled pattern (`compiler::CompilationError`,
//! `blueprint::BlueprintError`): a plain enum with a manual `Display` and
//! `std::error::Error` impl, rather than pulling in a derive-macro error
//! crate the teacher doesn't depend on.

use std::fmt;

/// One configuration constraint violation, collected rather than
/// bailing out on the first one (spec §7: `ConfigInvalid` reports every
/// offending field).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field_path: String,
    pub constraint: String,
    pub actual_value: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field_path, self.constraint, self.actual_value
        )
    }
}

/// Errors that can occur loading or validating a `DuelConfig`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// One or more fields violate their constraint.
    Invalid(Vec<FieldViolation>),
    /// The configuration file could not be read or parsed.
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(violations) => {
                writeln!(f, "configuration invalid:")?;
                for v in violations {
                    writeln!(f, "  - {}", v)?;
                }
                Ok(())
            }
            ConfigError::Io(msg) => write!(f, "failed to load configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fatal, programmer-error conditions the step driver checks for on its way
/// out. These are never returned as `Result`s — by the time one of these is
/// true, a core invariant has already been broken and continuing would just
/// propagate garbage, so the driver panics with this attached as context.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    Invariant(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Invariant(msg) => write!(f, "engine invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
