//! Subcommand implementations.
//!
//! Each command writes to the supplied writer so output can be captured in
//! tests; `main` passes stdout.

use std::io::Write;

use idb_api::{DatabaseError, ErrorBody, ErrorCode, HostMessage};
use idb_impl::ImplementationError;

use crate::config::Command;
use crate::error::CliError;

/// Runs a parsed command.
pub fn run(command: &Command, policy: HostMessage, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Codes => codes(out),
        Command::Explain { code } => explain(code, out),
        Command::Translate {
            code,
            message,
            override_message,
        } => {
            let error = translate(*code, message.as_deref(), override_message.as_deref());
            let body = ErrorBody::from_error(&error, policy);
            tracing::debug!(
                code = body.code,
                policy = policy.label(),
                "translated error body"
            );
            serde_json::to_writer(&mut *out, &body)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn codes(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{:>5}  {:<18} {}", "CODE", "NAME", "CLASS")?;
    for code in ErrorCode::ALL {
        writeln!(
            out,
            "{:>5}  {:<18} {}",
            code.value(),
            code.name(),
            code.class().label()
        )?;
    }
    Ok(())
}

fn explain(input: &str, out: &mut impl Write) -> Result<(), CliError> {
    let code: ErrorCode = input.parse()?;
    writeln!(out, "{} ({})", code.name(), code.value())?;
    writeln!(out, "  {}", code.description())?;
    writeln!(out, "  {}", code.class().label())?;
    Ok(())
}

/// Builds the API error for the `translate` command.
///
/// Without a message only the code is known, so the error is built from the
/// code alone (failing closed to `UNKNOWN_ERR` for unrecognized values).
pub fn translate(code: i32, message: Option<&str>, override_message: Option<&str>) -> DatabaseError {
    match (message, override_message) {
        (Some(message), Some(over)) => {
            DatabaseError::with_override(over, &ImplementationError::new(code, message))
        }
        (Some(message), None) => DatabaseError::from(ImplementationError::new(code, message)),
        (None, _) => DatabaseError::from_code(ErrorCode::from_value_or_unknown(code)),
    }
}
