// File: crates/asciichart-core/tests/snapshot.rs
// Purpose: Golden text snapshots with bless flow.
// Behavior:
// - Renders deterministic frames (colors off) to text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use asciichart_core::{render, RenderOptions, ScaleMode};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, text: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), text.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(text, want, "frame differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn plain() -> RenderOptions {
    RenderOptions { color: false, ..RenderOptions::default() }
}

#[test]
fn golden_single_scale() {
    let datasets = [
        vec![(1.0, 1.0), (4.0, 5000.0), (7.0, 8000.0), (10.0, 10000.0), (15.0, 12000.0)],
        vec![(1.0, 3000.0), (3.0, 4000.0), (5.0, 7000.0), (7.0, 6000.0), (10.0, 5000.0)],
        vec![(1.0, 10000.0), (3.0, 8000.0), (5.0, 6000.0), (7.0, 4000.0), (10.0, 2000.0)],
    ];
    let frame = render(&datasets, ScaleMode::Single, "USD", "", &plain()).expect("render");
    write_or_compare("single_scale.txt", &frame.to_string());
}

#[test]
fn golden_dual_scale() {
    let datasets = [
        vec![(1.0, 100.0), (4.0, 150.0), (7.0, 200.0), (10.0, 180.0), (15.0, 220.0)],
        vec![(1.0, 10000.0), (3.0, 8000.0), (5.0, 6000.0), (7.0, 4000.0), (10.0, 2000.0)],
    ];
    let frame = render(&datasets, ScaleMode::Dual, "USD", "EUR", &plain()).expect("render");
    write_or_compare("dual_scale.txt", &frame.to_string());
}
