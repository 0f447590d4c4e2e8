use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::writers::staged::StagedFile;
use crate::types::CropReport;

/// Sidecar path for `output`: same name with a `.json` extension, or
/// `<output>.report.json` when the output itself already ends in `.json`.
pub fn report_sidecar_path(output: &Path) -> PathBuf {
    let sidecar_path = output.with_extension("json");
    if sidecar_path != output {
        return sidecar_path;
    }
    let mut name = OsString::from(output.as_os_str());
    name.push(".report.json");
    PathBuf::from(name)
}

/// Serialize `report` into a temporary file beside its sidecar path.
pub fn stage_report_sidecar(report: &CropReport) -> Result<StagedFile> {
    let sidecar_path = report_sidecar_path(&report.output);
    StagedFile::stage(&sidecar_path, ".json.part", |file| {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.flush()?;
        Ok(())
    })
}
