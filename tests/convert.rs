use obj2scene::{Error, FormatError, LookupError, convert};
use std::fs;
use std::path::Path;

const MTL: &str = "newmtl M1\n\
                   Ns 32\n\
                   Kd 1 0 0\n\
                   Ks 0 0 0\n\
                   Ke 0 0 0\n";

const OBJ: &str = "mtllib scene.mtl\n\
                   o Box\n\
                   v 0 0 0\n\
                   v 1 0 0\n\
                   v 1 1 0\n\
                   v 0 1 0\n\
                   vn 0 0 1\n\
                   usemtl M1\n\
                   s off\n\
                   f 1//1 2//1 3//1 4//1\n";

const HEAD: &str = "composer_scene 1.0\n\n";

fn write_inputs(dir: &Path, obj: &str, mtl: &str, head: &str, extra: &str) -> String {
    let base = dir.join("scene");
    let base = base.to_str().unwrap().to_string();
    fs::write(format!("{base}.obj"), obj).unwrap();
    fs::write(format!("{base}.mtl"), mtl).unwrap();
    fs::write(format!("{base}.head"), head).unwrap();
    fs::write(format!("{base}.extra"), extra).unwrap();
    base
}

#[test]
fn test_convert_box() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_inputs(dir.path(), OBJ, MTL, HEAD, "{}");
    convert(&base).unwrap();

    let out = fs::read_to_string(format!("{base}.ascii")).unwrap();
    assert!(out.starts_with(HEAD));
    assert!(out.contains("name \"Box\""));
    assert!(out.contains("diffColor 1.0 0.0 0.0"));
    assert!(out.contains("ambColor 0.2 0.2 0.2"));
    assert!(out.contains("specColor 0.0 0.0 0.0"));
    assert!(out.contains("emisColor 0.0 0.0 0.0"));
    assert!(out.contains("shininess 1.0"));
    assert!(out.contains("ktran 0"));
    assert!(out.contains("numPolys 2"));
    assert_eq!(out.matches("numVertices 3").count(), 2);
    assert_eq!(out.matches("poly_set {").count(), 1);
}

#[test]
fn test_emissive_override() {
    let dir = tempfile::tempdir().unwrap();
    let extra = r#"{"Box": {"emisColor": [2, 2, 2]}}"#;
    let base = write_inputs(dir.path(), OBJ, MTL, HEAD, extra);
    convert(&base).unwrap();

    let out = fs::read_to_string(format!("{base}.ascii")).unwrap();
    assert!(out.contains("emisColor 2.0 2.0 2.0"));
    // the override only touches the emissive field
    assert!(out.contains("diffColor 1.0 0.0 0.0"));
    assert!(out.contains("specColor 0.0 0.0 0.0"));
}

#[test]
fn test_override_unknown_object() {
    let dir = tempfile::tempdir().unwrap();
    let extra = r#"{"Sphere": {"emisColor": [1, 1, 1]}}"#;
    let base = write_inputs(dir.path(), OBJ, MTL, HEAD, extra);
    let err = convert(&base).unwrap_err();
    assert!(matches!(
        err,
        Error::Lookup(LookupError::NoSuchObject(name)) if name == "Sphere"
    ));

    // the header was already written when the lookup failed
    let out = fs::read_to_string(format!("{base}.ascii")).unwrap();
    assert_eq!(out, HEAD);
}

#[test]
fn test_duplicate_mtllib() {
    let dir = tempfile::tempdir().unwrap();
    let obj = "mtllib scene.mtl\nmtllib scene.mtl\n";
    let base = write_inputs(dir.path(), obj, MTL, HEAD, "{}");
    let err = convert(&base).unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::DuplicateMtlLib)));
}

#[test]
fn test_unknown_material() {
    let dir = tempfile::tempdir().unwrap();
    let obj = "mtllib scene.mtl\no Box\nusemtl M2\n";
    let base = write_inputs(dir.path(), obj, MTL, HEAD, "{}");
    let err = convert(&base).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::UnknownMaterial(name)) if name == "M2"
    ));
}

#[test]
fn test_triangle_face_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let obj = "mtllib scene.mtl\n\
               o Box\n\
               v 0 0 0\n\
               v 1 0 0\n\
               v 1 1 0\n\
               vn 0 0 1\n\
               usemtl M1\n\
               f 1//1 2//1 3//1\n";
    let base = write_inputs(dir.path(), obj, MTL, HEAD, "{}");
    convert(&base).unwrap();

    let out = fs::read_to_string(format!("{base}.ascii")).unwrap();
    assert!(out.contains("numPolys 0"));
    assert!(!out.contains("numVertices"));
}
