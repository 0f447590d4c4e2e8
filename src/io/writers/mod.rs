pub mod png;
pub mod report;
pub mod staged;

pub use png::stage_png;
pub use report::{report_sidecar_path, stage_report_sidecar};
pub use staged::StagedFile;
