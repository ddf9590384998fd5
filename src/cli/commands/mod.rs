//! Command execution functions.
//!
//! Each command loads a descriptor, builds validated settings and then
//! renders or writes the bundle metadata, reporting notices on the way.

// Submodules
mod check;
mod helpers;
mod render;
mod write;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::{CliError, Result};

// Import command executors
use check::execute_check;
use render::execute_plist;
use write::execute_write;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false, false);
        let error = CliError::InvalidArguments {
            reason: validation_error,
        };
        output.error(&error.to_string());
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    let result = match &args.command {
        Command::Plist { descriptor } => execute_plist(descriptor, &config).await,
        Command::Write {
            descriptor,
            contents_dir,
            show_plist,
        } => execute_write(descriptor, contents_dir, *show_plist, &config).await,
        Command::Check { descriptor, json } => execute_check(descriptor, *json, &config).await,
    };

    match result {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!(
                "Command '{}' failed: {}",
                args.command.name(),
                e
            ));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
