//! CLI commands for data export and import

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_account, import_account, ExportFormat};
use crate::models::Clock;
use crate::services::LedgerService;

/// Export an account to `output`, or stdout when no path is given
pub fn handle_export_command<C: Clock>(
    service: &LedgerService<'_, C>,
    account: Option<&str>,
    format: ExportFormat,
    output: Option<&Path>,
) -> LedgerResult<()> {
    let name = service.workspace().resolve_account(account)?;
    let snapshot = service.open(name)?;

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_account(format, name, &snapshot, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;

            println!(
                "Exported {} ({} transactions) as {} to {}",
                name,
                snapshot.history().len(),
                format,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_account(format, name, &snapshot, &mut handle)?;
            handle
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Restore an exported account from `file` as a new account
///
/// The format is taken from `format`, or else from the file extension. The
/// account keeps its exported name unless `name` is given.
pub fn handle_import_command<C: Clock>(
    service: &mut LedgerService<'_, C>,
    file: &Path,
    name: Option<&str>,
    format: Option<ExportFormat>,
) -> LedgerResult<()> {
    let format = match format {
        Some(format) => format,
        None => file
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Cannot tell the format of {}; pass --format",
                    file.display()
                ))
            })?
            .parse()?,
    };

    let contents = std::fs::read_to_string(file)
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", file.display(), e)))?;
    let export = import_account(format, &contents)?;
    let name = name.unwrap_or(export.name.as_str());

    service.import_account(name, &export.account)?;
    println!(
        "Imported {} ({} transactions). Balance: {}",
        name,
        export.account.history().len(),
        export.account.balance()
    );
    Ok(())
}
