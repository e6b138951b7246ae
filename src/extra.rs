use crate::obj::{Material, Object};
use crate::{Error, LookupError, Vec3};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Overrides for a single object.
///
/// Only `emisColor` is understood; unrecognized fields are read and dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectExtra {
    #[serde(rename = "emisColor")]
    pub emis_color: Option<Vec3>,

    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

/// The whole override document, keyed by object name.
pub type Extra = BTreeMap<String, ObjectExtra>;

/// Parses the JSON override document at `p`.
pub fn parse(p: impl AsRef<Path>) -> Result<Extra, Error> {
    let f = File::open(p.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}

/// Applies `extra` to the parsed objects.
///
/// Every override must name an existing object. An object which never saw
/// `usemtl` gets a default material installed for the override to land on.
pub fn apply(objects: &mut [Object], extra: &Extra) -> Result<(), LookupError> {
    for (name, ov) in extra {
        let Some(o) = objects.iter_mut().find(|o| o.name == *name) else {
            return Err(LookupError::NoSuchObject(name.clone()));
        };
        if let Some(emis) = ov.emis_color {
            o.mtl.get_or_insert_with(Material::default).emissive = Some(emis);
        }
    }
    Ok(())
}

#[test]
fn test_parse_overrides() {
    let extra: Extra =
        serde_json::from_str(r#"{"Box": {"emisColor": [2.0, 2.0, 2.0], "glow": true}}"#).unwrap();
    let ov = &extra["Box"];
    assert_eq!(ov.emis_color, Some([2., 2., 2.]));
    assert_eq!(ov.unknown.len(), 1);
    assert!(ov.unknown.contains_key("glow"));
}

#[test]
fn test_apply_overwrites_emissive() {
    let mut objects = vec![Object {
        name: "Box".to_string(),
        mtl: Some(Material {
            diffuse: Some([1., 0., 0.]),
            emissive: Some([0., 0., 0.]),
            ..Default::default()
        }),
        ..Default::default()
    }];
    let extra: Extra = serde_json::from_str(r#"{"Box": {"emisColor": [2, 2, 2]}}"#).unwrap();
    apply(&mut objects, &extra).unwrap();

    let mtl = objects[0].mtl.as_ref().unwrap();
    assert_eq!(mtl.emissive, Some([2., 2., 2.]));
    // other fields untouched
    assert_eq!(mtl.diffuse, Some([1., 0., 0.]));
}

#[test]
fn test_apply_unknown_object() {
    let mut objects = vec![Object {
        name: "Box".to_string(),
        ..Default::default()
    }];
    let extra: Extra = serde_json::from_str(r#"{"Sphere": {"emisColor": [1, 1, 1]}}"#).unwrap();
    let err = apply(&mut objects, &extra).unwrap_err();
    assert!(matches!(err, LookupError::NoSuchObject(name) if name == "Sphere"));
}

#[test]
fn test_apply_without_material() {
    let mut objects = vec![Object {
        name: "Box".to_string(),
        ..Default::default()
    }];
    let extra: Extra = serde_json::from_str(r#"{"Box": {"emisColor": [1, 1, 1]}}"#).unwrap();
    apply(&mut objects, &extra).unwrap();
    let mtl = objects[0].mtl.as_ref().unwrap();
    assert_eq!(mtl.emissive, Some([1., 1., 1.]));
    assert_eq!(mtl.diffuse, None);
}
