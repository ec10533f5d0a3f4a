use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use mandelbrot_animator::{
    AnimationAssembler, AnimationError, ExplanationCompositor, MandelbrotConfig,
    MandelbrotController, read_gif_frames,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mandelbrot_animator_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn assembler(dir: &Path) -> AnimationAssembler {
    let config = MandelbrotConfig::default().with_resource_dir(dir);
    let compositor = ExplanationCompositor::new(config.explanation.clone(), config.frame_delay())
        .with_font_database(Arc::new(usvg::fontdb::Database::new()));

    AnimationAssembler::new(config).with_compositor(compositor)
}

#[test]
fn build_animation_writes_looping_gif_with_scheduled_frames() {
    let dir = scratch_dir("plain");
    let assembler = assembler(&dir);

    let path = assembler.build_animation(24, 16, 42, "viridis").unwrap();

    assert_eq!(path, dir.join("mandelbrot_iter_24_16_42_viridis.gif"));
    let frames = read_gif_frames(&path).unwrap();
    assert_eq!(frames.len(), 5);
    for frame in &frames {
        assert_eq!((frame.width(), frame.height()), (24, 16));
        assert_eq!(frame.delay(), Duration::from_secs(1));
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn repeated_builds_overwrite_the_same_asset() {
    let dir = scratch_dir("repeat");
    let assembler = assembler(&dir);

    let first = assembler.build_animation(10, 10, 12, "gray").unwrap();
    let second = assembler.build_animation(10, 10, 12, "gray").unwrap();

    assert_eq!(first, second);
    let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(read_gif_frames(&second).unwrap().len(), 2);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn explained_animation_widens_every_frame_by_the_panel() {
    let dir = scratch_dir("explained");
    let assembler = assembler(&dir);

    let path = assembler
        .build_animation_with_explanation(20, 12, 22, "inferno")
        .unwrap();

    assert_eq!(path, dir.join("mandelbrot_iter_20_12_22_inferno_text.gif"));
    assert!(dir.join("mandelbrot_iter_20_12_22_inferno.gif").is_file());
    let frames = read_gif_frames(&path).unwrap();
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert_eq!((frame.width(), frame.height()), (320, 12));
        assert_eq!(frame.delay(), Duration::from_secs(1));
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn explained_animation_draws_text_with_system_fonts() {
    let dir = scratch_dir("fonts");
    let config = MandelbrotConfig::default().with_resource_dir(&dir);
    let assembler = AnimationAssembler::new(config);

    let path = assembler
        .build_animation_with_explanation(16, 120, 12, "viridis")
        .unwrap();

    let frames = read_gif_frames(&path).unwrap();
    let image = frames[0].image();
    let dark_panel_pixels = image
        .enumerate_pixels()
        .filter(|(x, _, px)| *x >= 16 && px[0] < 128)
        .count();
    let has_fonts = {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        !db.is_empty()
    };
    assert_eq!(dark_panel_pixels > 0, has_fonts);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reuse_existing_skips_regeneration() {
    let dir = scratch_dir("reuse");
    let mut config = MandelbrotConfig::default().with_resource_dir(&dir);
    config.reuse_existing = true;
    let assembler = AnimationAssembler::new(config);
    let expected = dir.join("mandelbrot_iter_8_8_12_hot.gif");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&expected, b"placeholder").unwrap();

    let path = assembler.build_animation(8, 8, 12, "hot").unwrap();

    assert_eq!(path, expected);
    assert_eq!(std::fs::read(&path).unwrap(), b"placeholder");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn too_small_iteration_cap_leaves_no_file() {
    let dir = scratch_dir("empty");
    let assembler = assembler(&dir);

    let result = assembler.build_animation(8, 8, 1, "viridis");

    assert!(matches!(result, Err(AnimationError::EmptyAnimation { .. })));
    assert!(!dir.join("mandelbrot_iter_8_8_1_viridis.gif").exists());
}

#[test]
fn controller_validates_then_builds() {
    let dir = scratch_dir("controller");
    let controller = MandelbrotController::with_assembler(assembler(&dir));

    assert!(controller.request(8, 8, 1, "viridis", false).is_err());
    assert!(controller.request(8, 8, 12, "nope", false).is_err());

    let request = controller.request(8, 8, 12, "cool", false).unwrap();
    let path = controller.handle(&request).unwrap();

    assert!(path.starts_with(&dir));
    assert!(path.is_file());
    let _ = std::fs::remove_dir_all(&dir);
}
