//! Check command implementation.
//!
//! Validates a descriptor without writing anything.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::helpers::{load_settings, report_notices};
use crate::bundler::{InfoPlist, Notice};
use crate::cli::RuntimeConfig;
use crate::error::{JarBundleError, Result};

/// Outcome of a descriptor check, as printed with `--json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    descriptor: PathBuf,
    valid: bool,
    bundle_name: Option<String>,
    main_class: Option<String>,
    notices: Vec<Notice>,
    error: Option<String>,
}

/// Execute check command
pub(super) async fn execute_check(
    descriptor: &Path,
    json: bool,
    config: &RuntimeConfig,
) -> Result<i32> {
    let report = match load_settings(descriptor, config).await {
        Ok((settings, mut notices)) => {
            // Rendering surfaces the deprecated-property notices.
            notices.extend(InfoPlist::render(&settings).into_notices());
            CheckReport {
                descriptor: descriptor.to_path_buf(),
                valid: true,
                bundle_name: settings.bundle_name().map(String::from),
                main_class: settings.main_class.clone(),
                notices,
                error: None,
            }
        }
        // Without --json the caller prints the error with its suggestions.
        Err(e) if !json => return Err(e),
        Err(e) => CheckReport {
            descriptor: descriptor.to_path_buf(),
            valid: false,
            bundle_name: None,
            main_class: None,
            notices: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    if json {
        let json_output = serde_json::to_string_pretty(&report).map_err(JarBundleError::Json)?;
        println!("{}", json_output);
    } else {
        report_notices(&report.notices, config);
        config.success_println(&format!(
            "{} is valid ({})",
            descriptor.display(),
            report.bundle_name.as_deref().unwrap_or("unnamed bundle")
        ));
    }

    Ok(if report.valid { 0 } else { 1 })
}
