//! End-to-end tests running raw files through load, rasterize and the
//! per-scan orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use raw_slices::{
    ElementType, ErrorKind, Pipeline, PipelineConfig, ScanDescriptor, ScanError, SliceRasterizer,
    VolumeLoader,
};
use tempfile::TempDir;

fn write_raw(dir: &Path, name: &str, values: &[f32]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytemuck::cast_slice::<f32, u8>(values)).unwrap();
    path
}

fn small_config(root: &Path, scans: Vec<ScanDescriptor>) -> PipelineConfig {
    PipelineConfig::default()
        .with_scans(scans)
        .with_output_root(root.join("outputs"))
        .with_dpi(40)
        .with_figure_size(4.0)
}

fn png_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn two_slice_volume_renders_two_files() {
    let dir = TempDir::new().unwrap();
    let raw = write_raw(dir.path(), "cube.raw", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let scan = ScanDescriptor::new("CUBE", &raw, (2, 2, 2), ElementType::Float32);

    let volume = VolumeLoader::load(&scan).unwrap();
    assert_eq!(volume.data()[[0, 1, 0]], 3.0);
    assert_eq!(volume.data()[[1, 0, 1]], 6.0);

    let reports = Pipeline::new(small_config(dir.path(), vec![scan])).run();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].slices_written(), 2);
    let output_dir = dir.path().join("outputs/CUBE");
    assert_eq!(reports[0].output_dir.as_deref(), Some(output_dir.as_path()));
    assert_eq!(png_names(&output_dir), ["slice_0000.png", "slice_0001.png"]);

    let first = image::open(output_dir.join("slice_0000.png")).unwrap();
    assert_eq!((first.width(), first.height()), (160, 160));
}

#[test]
fn slice_count_matches_depth() {
    let dir = TempDir::new().unwrap();
    let (d, h, w) = (23, 3, 5);
    let values: Vec<f32> = (0..d * h * w).map(|v| v as f32).collect();
    let volume = VolumeLoader::from_buffer(values, (d, h, w)).unwrap();
    let scan = ScanDescriptor::new("DEEP", "deep.raw", (d, h, w), ElementType::Float32);
    let rasterizer = SliceRasterizer {
        dpi: 40,
        figure_size_inches: 4.0,
        progress_interval: 20,
    };

    let count = rasterizer.render_all(&volume, &scan, dir.path()).unwrap();

    assert_eq!(count, d);
    let names = png_names(dir.path());
    assert_eq!(names.len(), d);
    assert_eq!(names.first().unwrap(), "slice_0000.png");
    assert_eq!(names.last().unwrap(), "slice_0022.png");
}

#[test]
fn rendering_twice_into_same_directory_succeeds() {
    let dir = TempDir::new().unwrap();
    let volume = VolumeLoader::from_buffer(vec![0.5; 12], (3, 2, 2)).unwrap();
    let scan = ScanDescriptor::new("AGAIN", "again.raw", (3, 2, 2), ElementType::Float32);
    let rasterizer = SliceRasterizer {
        dpi: 40,
        figure_size_inches: 4.0,
        progress_interval: 20,
    };
    let output_dir = dir.path().join("AGAIN");

    assert_eq!(rasterizer.render_all(&volume, &scan, &output_dir).unwrap(), 3);
    assert_eq!(rasterizer.render_all(&volume, &scan, &output_dir).unwrap(), 3);
    assert_eq!(png_names(&output_dir).len(), 3);
}

#[test]
fn size_mismatch_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let raw = write_raw(dir.path(), "short.raw", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let scan = ScanDescriptor::new("SHORT", &raw, (2, 2, 2), ElementType::Float32);

    let reports = Pipeline::new(small_config(dir.path(), vec![scan])).run();

    match &reports[0].outcome {
        Err(ScanError::SizeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(*expected, 8);
            assert_eq!(*actual, 7);
        }
        other => panic!("expected size mismatch, got {other:?}"),
    }
    assert!(reports[0].output_dir.is_none());
    assert!(!dir.path().join("outputs/SHORT").exists());
}

#[test]
fn failing_scans_do_not_stop_later_ones() {
    let dir = TempDir::new().unwrap();
    let short = write_raw(dir.path(), "short.raw", &[0.0; 3]);
    let good = write_raw(dir.path(), "good.raw", &[0.0, 1.0, 2.0, 3.0]);
    let missing = dir.path().join("nope.raw");
    let scans = vec![
        ScanDescriptor::new("MISSING", &missing, (1, 2, 2), ElementType::Float32),
        ScanDescriptor::new("SHORT", &short, (1, 2, 2), ElementType::Float32),
        ScanDescriptor::new("WIDE", &good, (1, 2, 2), ElementType::Float64),
        ScanDescriptor::new("GOOD", &good, (1, 2, 2), ElementType::Float32),
    ];

    let reports = Pipeline::new(small_config(dir.path(), scans)).run();

    let kinds: Vec<_> = reports
        .iter()
        .map(|report| report.outcome.as_ref().map_err(ScanError::kind).copied())
        .collect();
    assert_eq!(
        kinds,
        vec![
            Err(ErrorKind::FileNotFound),
            Err(ErrorKind::SizeMismatch),
            Err(ErrorKind::IoFailure),
            Ok(1),
        ]
    );

    let outputs = dir.path().join("outputs");
    assert!(!outputs.join("MISSING").exists());
    assert!(!outputs.join("SHORT").exists());
    assert!(!outputs.join("WIDE").exists());
    assert_eq!(png_names(&outputs.join("GOOD")), ["slice_0000.png"]);
}

#[test]
fn existing_outputs_are_overwritten_not_cleared() {
    let dir = TempDir::new().unwrap();
    let raw = write_raw(dir.path(), "one.raw", &[1.0, 2.0]);
    let scan = ScanDescriptor::new("ONE", &raw, (1, 1, 2), ElementType::Float32);
    let output_dir = dir.path().join("outputs/ONE");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("notes.txt"), "keep me").unwrap();
    fs::write(output_dir.join("slice_0000.png"), "stale").unwrap();

    let reports = Pipeline::new(small_config(dir.path(), vec![scan])).run();

    assert!(reports[0].is_success());
    assert_eq!(fs::read_to_string(output_dir.join("notes.txt")).unwrap(), "keep me");
    assert!(image::open(output_dir.join("slice_0000.png")).is_ok());
}

#[test]
fn overflowing_dimensions_do_not_stop_later_scans() {
    let dir = TempDir::new().unwrap();
    let good = write_raw(dir.path(), "good.raw", &[1.0, 2.0]);
    let scans = vec![
        ScanDescriptor::new("HUGE", &good, (usize::MAX, 2, 2), ElementType::Float32),
        ScanDescriptor::new("GOOD", &good, (1, 1, 2), ElementType::Float32),
    ];

    let reports = Pipeline::new(small_config(dir.path(), scans)).run();

    assert_eq!(reports.len(), 2);
    assert_eq!(
        reports[0].outcome.as_ref().map_err(ScanError::kind).copied(),
        Err(ErrorKind::IoFailure)
    );
    assert!(!dir.path().join("outputs/HUGE").exists());
    assert_eq!(reports[1].slices_written(), 1);
}
