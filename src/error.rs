use thiserror::Error;

/// Allowed per-race point multipliers
pub const POINT_MULTIPLIERS: [f64; 4] = [0.0, 0.5, 1.0, 2.0];

/// Errors produced while applying a single command.
///
/// Every variant is recoverable: the interpreter reports it and carries on
/// with the next line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// A numeric argument could not be parsed
    #[error("The given arguments are not correct! ({0})")]
    MalformedArguments(String),

    /// Wrong arity, unknown command word or violated precondition
    #[error("{0}")]
    InvalidCommand(String),

    /// Referenced year, race or competitor does not exist
    #[error("{0}")]
    NotFound(String),
}

/// Discriminant of [`CommandError`] without the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    MalformedArguments,
    InvalidCommand,
    NotFound,
}

impl CommandError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CommandError::InvalidCommand(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CommandError::NotFound(msg.into())
    }

    pub fn kind(&self) -> CommandErrorKind {
        match self {
            CommandError::MalformedArguments(_) => CommandErrorKind::MalformedArguments,
            CommandError::InvalidCommand(_) => CommandErrorKind::InvalidCommand,
            CommandError::NotFound(_) => CommandErrorKind::NotFound,
        }
    }
}

impl From<std::num::ParseIntError> for CommandError {
    fn from(e: std::num::ParseIntError) -> Self {
        CommandError::MalformedArguments(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for CommandError {
    fn from(e: std::num::ParseFloatError) -> Self {
        CommandError::MalformedArguments(e.to_string())
    }
}

/// Validation functions
pub fn validate_race_id(race_id: i32) -> Result<(), CommandError> {
    if race_id < 1 {
        return Err(CommandError::invalid("The race id must be greater than 0!"));
    }
    Ok(())
}

pub fn validate_position(position: i32) -> Result<(), CommandError> {
    if position < 1 {
        return Err(CommandError::invalid("Position must be greater than 0!"));
    }
    Ok(())
}

pub fn validate_point_multiplier(multiplier: f64) -> Result<(), CommandError> {
    // -0.0 compares equal to 0.0 but is not an allowed multiplier
    if !POINT_MULTIPLIERS
        .iter()
        .any(|m| m.to_bits() == multiplier.to_bits())
    {
        return Err(CommandError::invalid(
            "Point multiplier must be 0, 0.5, 1 or 2!",
        ));
    }
    Ok(())
}
