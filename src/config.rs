//! CLI configuration via args and environment variables.

use clap::{Parser, Subcommand};

use idb_api::HostMessage;

/// Inspect the IndexedDB API error taxonomy and run boundary translations.
#[derive(Parser, Debug, Clone)]
#[command(name = "idb-errors", version, about)]
pub struct Config {
    /// Log level.
    #[arg(long, default_value = "warn", env = "IDB_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[arg(long, default_value = "text", env = "IDB_LOG_FORMAT", global = true)]
    pub log_format: String,

    /// Which message a host sees for overridden errors: "internal" or "combined".
    #[arg(long, default_value = "internal", env = "IDB_HOST_MESSAGE", global = true)]
    pub host_message: HostMessage,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every error code with its name and retry class.
    Codes,

    /// Describe one code, given as a number (32) or a name (TIMEOUT_ERR).
    Explain {
        code: String,
    },

    /// Translate an implementation error and print the JSON error body.
    Translate {
        /// Raw implementation code. Unrecognized values report UNKNOWN_ERR.
        #[arg(long, allow_negative_numbers = true)]
        code: i32,

        /// Implementation message. Omit to build an error from the code alone.
        #[arg(long)]
        message: Option<String>,

        /// Caller-chosen message, annotated with the implementation message.
        #[arg(long = "override", requires = "message")]
        override_message: Option<String>,
    },
}

impl Config {
    /// Parses configuration from CLI args and env vars.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["idb-errors", "codes"]).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.host_message, HostMessage::Internal);
        assert!(matches!(config.command, Command::Codes));
    }

    #[test]
    fn translate_args() {
        let config = Config::try_parse_from([
            "idb-errors",
            "translate",
            "--code",
            "32",
            "--message",
            "lock wait exceeded",
            "--override",
            "open failed",
            "--host-message",
            "combined",
        ])
        .unwrap();
        assert_eq!(config.host_message, HostMessage::Combined);
        match config.command {
            Command::Translate {
                code,
                message,
                override_message,
            } => {
                assert_eq!(code, 32);
                assert_eq!(message.as_deref(), Some("lock wait exceeded"));
                assert_eq!(override_message.as_deref(), Some("open failed"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn override_requires_message() {
        let result =
            Config::try_parse_from(["idb-errors", "translate", "--code", "1", "--override", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Config::try_parse_from(["idb-errors", "--host-message", "raw", "codes"]);
        assert!(result.is_err());
    }
}
