use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ytcrop::io::writers::report_sidecar_path;
use ytcrop::{CropParams, CropReport, TARGET_HEIGHT, TARGET_WIDTH};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_success(report: &CropReport, wrote_report: bool) {
    println!(
        "Original image size: ({}, {})",
        report.original.width, report.original.height
    );
    println!("Cropped image saved as: {}", report.output.display());
    println!(
        "Final size: ({}, {})",
        report.output_size.width, report.output_size.height
    );
    if wrote_report {
        println!(
            "Crop report saved as: {}",
            report_sidecar_path(&report.output).display()
        );
    }

    println!("\n✅ Successfully cropped logo for YouTube!");
    println!("📁 Output file: {}", report.output.display());
    println!(
        "📐 Dimensions: {}x{} pixels (YouTube channel art requirements)",
        TARGET_WIDTH, TARGET_HEIGHT
    );
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = CropParams {
        input: args.input,
        output: args.output,
        report: args.report,
    };

    if !params.input.exists() {
        warn!("Input image missing: {:?}", params.input);
        println!(
            "Please save your V3X logo image as '{}' in the current directory",
            params.input.display()
        );
        println!("Then run this script again");
        return Err(AppError::MissingInput { path: params.input });
    }

    info!("Cropping {:?} -> {:?}", params.input, params.output);
    match ytcrop::crop_with_params(&params) {
        Ok(report) => {
            print_success(&report, params.report);
            Ok(())
        }
        Err(e) => {
            println!("Error processing image: {}", e);
            println!("❌ Failed to crop image");
            Err(e.into())
        }
    }
}
