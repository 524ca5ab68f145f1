//! End-to-end runs of both pipelines against a temporary directory tree.

use std::{fs, path::Path};

use fontface_core::{Error, FaceConfig, FacePipeline, sentinel_paths};
use tempfile::TempDir;

fn write(path: &Path, data: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}

fn pipeline() -> FacePipeline {
    FacePipeline::new(FaceConfig::default().with_jobs(2))
}

#[test]
fn test_make_face_logo_family() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write(&src.path().join("logo.ttf"), &[0x11; 10]);
    write(&src.path().join("logo.otf"), &[0x22; 12]);

    let fragments = pipeline().make_face(src.path(), dst.path()).unwrap();
    assert_eq!(fragments.len(), 1);

    let css_path = dst.path().join("logo.css");
    assert_eq!(fragments[0].path(), css_path.as_path());
    let css = fs::read_to_string(&css_path).unwrap();

    assert!(css.contains("font-family: 'logo'"));
    assert_eq!(css.matches("url(data:").count(), 2);
    let ttf = css.find("format('truetype')").unwrap();
    let otf = css.find("format('opentype')").unwrap();
    assert!(ttf < otf);

    let sources = sentinel_paths(&css);
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("logo.ttf"));
    assert!(sources[1].ends_with("logo.otf"));

    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 1);
}

#[test]
fn test_make_face_nested_directories() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write(&src.path().join("sans/Regular.woff2"), b"regular");
    write(&src.path().join("sans/Regular.woff"), b"regular");
    write(&src.path().join("serif/Regular.ttf"), b"serif");
    write(&src.path().join("serif/LICENSE.txt"), b"ofl");

    let fragments = pipeline().make_face(src.path(), dst.path()).unwrap();
    assert_eq!(fragments.len(), 2);
    assert!(dst.path().join("sans/Regular.css").is_file());
    assert!(dst.path().join("serif/Regular.css").is_file());
    assert!(!dst.path().join("serif/LICENSE.css").exists());

    let sans = fs::read_to_string(dst.path().join("sans/Regular.css")).unwrap();
    let woff = sans.find("format('woff')").unwrap();
    let woff2 = sans.find("format('woff2')").unwrap();
    assert!(woff < woff2);
}

#[test]
fn test_make_face_dotted_relative_origin() {
    let dir = TempDir::new_in(".").unwrap();
    let root = Path::new(".").join(dir.path().file_name().unwrap());
    let fonts = root.join("fonts");
    let css = root.join("css");
    write(&fonts.join("logo.ttf"), b"logo");
    fs::create_dir_all(&css).unwrap();

    let fragments = pipeline().make_face(&fonts, &css).unwrap();
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].path(), css.join("logo.css").as_path());
    assert!(css.join("logo.css").is_file());
}

#[test]
fn test_make_face_empty_source() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let fragments = pipeline().make_face(src.path(), dst.path()).unwrap();
    assert!(fragments.is_empty());
    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn test_make_face_missing_destination() {
    let src = TempDir::new().unwrap();
    let missing = src.path().join("nowhere");
    write(&src.path().join("a.ttf"), b"a");

    let err = pipeline().make_face(src.path(), &missing).unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn test_round_trip_concatenation() {
    let src = TempDir::new().unwrap();
    let css = TempDir::new().unwrap();
    write(&src.path().join("b.ttf"), b"bbb");
    write(&src.path().join("a.ttf"), b"aaa");

    pipeline().make_face(src.path(), css.path()).unwrap();

    let out = css.path().join("bundle/all.css");
    let first = pipeline().read_face(css.path(), &out).unwrap();
    let text = first.text();

    let a = css.path().join("a.css");
    let b = css.path().join("b.css");
    let a_header = format!(" *  \"{}\"", a.display());
    let b_header = format!(" *  \"{}\"", b.display());
    assert!(text.find(&a_header).unwrap() < text.find(&b_header).unwrap());
    assert_eq!(text.matches("/**").count(), 2);
    assert_eq!(text.matches("@font-face").count(), 2);
    assert!(!text.contains(&src.path().display().to_string()));
    assert_eq!(fs::read(&out).unwrap(), first.data());

    let second = pipeline().read_face(css.path(), &out).unwrap();
    assert_eq!(first.data(), second.data());
}

#[test]
fn test_read_face_output_with_parent_dir_is_stable() {
    let css = TempDir::new().unwrap();
    write(&css.path().join("x.css"), b".x { color: red; }");
    let out = css.path().join("sub/../all.css");

    let first = pipeline().read_face(css.path(), &out).unwrap();
    assert!(css.path().join("all.css").is_file());

    let second = pipeline().read_face(css.path(), &out).unwrap();
    assert_eq!(first.data(), second.data());
    assert_eq!(second.text().matches("/**").count(), 1);
}

#[test]
fn test_read_face_missing_origin() {
    let dir = TempDir::new().unwrap();
    let err = pipeline()
        .read_face(&dir.path().join("missing"), &dir.path().join("out.css"))
        .unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}
