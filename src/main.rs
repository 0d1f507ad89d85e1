use raw_slices::{pipeline::Pipeline, scan::PipelineConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let reports = Pipeline::new(PipelineConfig::default()).run();

    let failed = reports.iter().filter(|report| !report.is_success()).count();
    if failed > 0 {
        log::warn!("{failed} of {} scans were skipped", reports.len());
    }
}
