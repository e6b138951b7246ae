use thiserror::Error;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

#[cfg(not(feature = "f64"))]
pub type F = f32;

#[cfg(feature = "f64")]
pub type F = f64;

/// Alias for array of floats.
pub type Vector<const N: usize, T = F> = [T; N];

pub type Vec3 = Vector<3>;

/// OBJ and MTL parsing.
pub mod obj;

/// Composer ASCII scene emission.
pub mod ascii;

/// Extra per-object properties which OBJ cannot express.
pub mod extra;

/// Line charts for the report's benchmark figures.
pub mod plot;

pub use obj::{Obj, Object};

/// A structurally invalid input document.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unrecognized OBJ command `{0}`")]
    UnknownCommand(String),
    #[error("unrecognized MTL command `{0}`")]
    UnknownMtlCommand(String),
    #[error("duplicate mtllib")]
    DuplicateMtlLib,
    #[error("`usemtl {0}` before any mtllib")]
    NoMaterialLibrary(String),
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),
    #[error("`{0}` before any `o` command")]
    NoCurrentObject(&'static str),
    #[error("`{0}` before any `newmtl` command")]
    NoCurrentMaterial(String),
    #[error("malformed `{cmd}` in `{line}`")]
    Malformed { cmd: String, line: String },
    #[error("invalid number `{0}`")]
    BadNumber(String),
    #[error("object `{0}` has no material")]
    MissingMaterial(String),
}

/// A reference to data which was never defined.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("position index {idx} out of range (1..={len})")]
    PositionIndex { idx: usize, len: usize },
    #[error("normal index {idx} out of range (1..={len})")]
    NormalIndex { idx: usize, len: usize },
    #[error("no object named `{0}`")]
    NoSuchObject(String),
}

/// Any failure while converting a scene.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("invalid extra properties: {0}")]
    Extra(#[from] serde_json::Error),
}

/// Converts `<base>.obj`, `<base>.head` and `<base>.extra` into `<base>.ascii`.
///
/// The header file is copied to the output verbatim, followed by one
/// `poly_set` record per object. Bytes already written stay in the output if
/// a later stage fails.
pub fn convert(base: &str) -> Result<(), Error> {
    let obj_path = format!("{base}.obj");
    let obj_file = File::open(&obj_path)?;

    let out = File::create(format!("{base}.ascii"))?;
    let mut out = BufWriter::new(out);

    let extra = extra::parse(format!("{base}.extra"))?;

    let mut head = String::new();
    File::open(format!("{base}.head"))?.read_to_string(&mut head)?;
    out.write_all(head.as_bytes())?;

    let mut obj = obj::buf_read(BufReader::new(obj_file), obj_path.as_ref())?;
    extra::apply(&mut obj.objects, &extra)?;
    ascii::write_scene(&mut out, &obj.objects)?;
    out.flush()?;
    Ok(())
}
