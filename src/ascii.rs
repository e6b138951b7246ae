use super::{F, Vec3};
use crate::obj::Object;
use crate::{Error, FormatError};
use std::io::Write;

/// Ambient term emitted for every material. The ambient values exporters
/// write are not meaningful to the renderer.
pub const AMB_COLOR: Vec3 = [0.2, 0.2, 0.2];

/// OBJ `Ns` exponents are scaled down by this factor on emission.
pub const SHININESS_SCALE: F = 32.;

/// Writes every object as a `poly_set` record, in declaration order.
///
/// Floats are written in their shortest round-trippable form, always with a
/// decimal point.
pub fn write_scene(mut dst: impl Write, objects: &[Object]) -> Result<(), Error> {
    for o in objects {
        write_poly_set(&mut dst, o)?;
    }
    Ok(())
}

fn write_poly_set(dst: &mut impl Write, o: &Object) -> Result<(), Error> {
    let Some(mtl) = o.mtl.as_ref() else {
        return Err(FormatError::MissingMaterial(o.name.clone()).into());
    };
    writeln!(dst, "poly_set {{")?;
    writeln!(dst, "  name \"{}\"", o.name)?;
    writeln!(dst, "  numMaterials 1")?;
    writeln!(dst, "  material {{")?;
    let [r, g, b] = mtl.diffuse.unwrap_or_default();
    writeln!(dst, "    diffColor {r:?} {g:?} {b:?}")?;
    let [r, g, b] = AMB_COLOR;
    writeln!(dst, "    ambColor {r:?} {g:?} {b:?}")?;
    let [r, g, b] = mtl.specular.unwrap_or_default();
    writeln!(dst, "    specColor {r:?} {g:?} {b:?}")?;
    let [r, g, b] = mtl.emissive.unwrap_or_default();
    writeln!(dst, "    emisColor {r:?} {g:?} {b:?}")?;
    let shininess = mtl.shininess.unwrap_or_default() / SHININESS_SCALE;
    writeln!(dst, "    shininess {shininess:?}")?;
    writeln!(dst, "    ktran 0")?;
    writeln!(dst, "  }}")?;
    writeln!(dst, "  type POLYSET_TRI_MESH")?;
    writeln!(dst, "  normType PER_VERTEX_NORMAL")?;
    writeln!(dst, "  materialBinding PER_OBJECT_MATERIAL")?;
    writeln!(dst, "  hasTextureCoords FALSE")?;
    writeln!(dst, "  rowSize 0")?;
    assert_eq!(o.positions.len(), o.normals.len());
    writeln!(dst, "  numPolys {}", o.positions.len() / 3)?;
    for (ps, ns) in o.positions.chunks_exact(3).zip(o.normals.chunks_exact(3)) {
        writeln!(dst, "  poly {{")?;
        writeln!(dst, "    numVertices 3")?;
        for (&[px, py, pz], &[nx, ny, nz]) in ps.iter().zip(ns.iter()) {
            writeln!(dst, "    pos {px:?} {py:?} {pz:?}")?;
            writeln!(dst, "    norm {nx:?} {ny:?} {nz:?}")?;
        }
        writeln!(dst, "  }}")?;
    }
    writeln!(dst, "}}")?;
    Ok(())
}

#[cfg(test)]
use crate::obj::Material;

#[test]
fn test_write_box() {
    let mtl = Material {
        diffuse: Some([1., 0., 0.]),
        specular: Some([0., 0., 0.]),
        emissive: Some([0., 0., 0.]),
        shininess: Some(32.),
        ..Default::default()
    };
    let v = [[0., 0., 0.], [1., 0., 0.], [1., 1., 0.], [0., 1., 0.]];
    let n = [0., 0., 1.];
    let o = Object {
        name: "Box".to_string(),
        mtl: Some(mtl),
        positions: vec![v[0], v[1], v[2], v[0], v[2], v[3]],
        normals: vec![n; 6],
    };

    let mut out = vec![];
    write_scene(&mut out, std::slice::from_ref(&o)).unwrap();
    let out = String::from_utf8(out).unwrap();

    let expected = "poly_set {\n\
                    \x20 name \"Box\"\n\
                    \x20 numMaterials 1\n\
                    \x20 material {\n\
                    \x20   diffColor 1.0 0.0 0.0\n\
                    \x20   ambColor 0.2 0.2 0.2\n\
                    \x20   specColor 0.0 0.0 0.0\n\
                    \x20   emisColor 0.0 0.0 0.0\n\
                    \x20   shininess 1.0\n\
                    \x20   ktran 0\n\
                    \x20 }\n\
                    \x20 type POLYSET_TRI_MESH\n\
                    \x20 normType PER_VERTEX_NORMAL\n\
                    \x20 materialBinding PER_OBJECT_MATERIAL\n\
                    \x20 hasTextureCoords FALSE\n\
                    \x20 rowSize 0\n\
                    \x20 numPolys 2\n\
                    \x20 poly {\n\
                    \x20   numVertices 3\n\
                    \x20   pos 0.0 0.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20   pos 1.0 0.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20   pos 1.0 1.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20 }\n\
                    \x20 poly {\n\
                    \x20   numVertices 3\n\
                    \x20   pos 0.0 0.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20   pos 1.0 1.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20   pos 0.0 1.0 0.0\n\
                    \x20   norm 0.0 0.0 1.0\n\
                    \x20 }\n\
                    }\n";
    assert_eq!(out, expected);
}

#[test]
fn test_write_without_material() {
    let o = Object {
        name: "Bare".to_string(),
        ..Default::default()
    };
    let mut out: Vec<u8> = vec![];
    let err = write_scene(&mut out, std::slice::from_ref(&o)).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::MissingMaterial(name)) if name == "Bare"
    ));
}
