//! Pipeline tests for `extract_poi_tiles`.

use super::*;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const MIXED_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="40.74" lon="-73.98">
    <tag k="name" v="Central Park"/>
    <tag k="tourism" v="attraction"/>
  </node>
  <node id="2" lat="40.689" lon="-74.044">
    <tag k="name" v="Statue of Liberty"/>
    <tag k="historic" v="monument"/>
    <tag k="addr:full" v="Liberty Island, New York"/>
  </node>
  <node id="3" lat="40.75" lon="-73.99">
    <tag k="amenity" v="bench"/>
  </node>
  <node id="4" lat="48.8584" lon="2.2945">
    <tag k="name" v="Tour Eiffel"/>
    <tag k="tourism" v="attraction"/>
    <tag k="addr:street" v="Avenue Anatole France"/>
  </node>
  <node id="5" lat="48.86" lon="2.29">
    <tag k="name" v=""/>
  </node>
</osm>"#;

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn input(&self, contents: &str) -> Utf8PathBuf {
        let path = self.root.join("input.osm");
        fs::write(&path, contents).expect("write input");
        path
    }

    fn output(&self) -> Utf8PathBuf {
        self.root.join("tiles")
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    Workspace { _dir: dir, root }
}

fn read_tile(path: &Utf8Path) -> Vec<Value> {
    let contents = fs::read_to_string(path).expect("read tile");
    match serde_json::from_str(&contents).expect("tile is JSON") {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

fn tile_names(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("list output")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .into_string()
                .expect("utf-8 name")
        })
        .collect();
    names.sort();
    names
}

#[rstest]
fn central_park_scenario(workspace: Workspace) {
    let input = workspace.input(
        r#"<osm><node id="1" lat="40.74" lon="-73.98"><tag k="name" v="Central Park"/><tag k="tourism" v="attraction"/></node></osm>"#,
    );
    let output = workspace.output();

    extract_poi_tiles(&input, &output).expect("extract tiles");

    assert_eq!(tile_names(&output), ["40.7_-74.0.json"]);
    let contents = fs::read_to_string(output.join("40.7_-74.0.json")).expect("read tile");
    assert_eq!(
        contents,
        r#"[{"id":"1","lat":40.74,"lon":-73.98,"name":"Central Park","type":"attraction","address":""}]"#
    );
}

#[rstest]
fn unnamed_node_produces_no_files(workspace: Workspace) {
    let input =
        workspace.input(r#"<osm><node id="1" lat="1" lon="1"><tag k="tourism" v="x"/></node></osm>"#);
    let output = workspace.output();

    let report = extract_poi_tiles(&input, &output).expect("extract tiles");

    assert_eq!(report.tiles, 0);
    assert!(tile_names(&output).is_empty());
}

#[rstest]
fn mixed_export_is_partitioned_and_complete(workspace: Workspace) {
    let input = workspace.input(MIXED_EXPORT);
    let output = workspace.output();

    let report = extract_poi_tiles(&input, &output).expect("extract tiles");

    assert_eq!(report.nodes, 5);
    assert_eq!(report.pois, 3);
    assert_eq!(report.tiles, 2);
    assert_eq!(tile_names(&output), ["40.7_-74.0.json", "48.9_2.3.json"]);

    let total: usize = tile_names(&output)
        .iter()
        .map(|name| read_tile(&output.join(name)).len())
        .sum();
    assert_eq!(total, 3);

    let new_york = read_tile(&output.join("40.7_-74.0.json"));
    let liberty = new_york
        .iter()
        .find(|poi| poi["id"] == "2")
        .expect("statue of liberty");
    assert_eq!(liberty["type"], "monument");
    assert_eq!(liberty["address"], "Liberty Island, New York");

    let paris = read_tile(&output.join("48.9_2.3.json"));
    let eiffel = paris.first().expect("tour eiffel");
    assert_eq!(eiffel["address"], "Avenue Anatole France");
    assert_eq!(eiffel["lat"], 48.8584);
}

#[rstest]
fn reruns_produce_identical_files(workspace: Workspace) {
    let input = workspace.input(MIXED_EXPORT);
    let output = workspace.output();

    extract_poi_tiles(&input, &output).expect("first run");
    let first: Vec<Vec<u8>> = tile_names(&output)
        .iter()
        .map(|name| fs::read(output.join(name)).expect("read tile"))
        .collect();
    extract_poi_tiles(&input, &output).expect("second run");
    let second: Vec<Vec<u8>> = tile_names(&output)
        .iter()
        .map(|name| fs::read(output.join(name)).expect("read tile"))
        .collect();

    assert_eq!(first, second);
}

#[rstest]
fn parse_failure_leaves_output_untouched(workspace: Workspace) {
    let input = workspace.input(
        r#"<osm><node id="1" lat="1" lon="1"><tag k="name" v="Fine"/></node><node id="2" lat="oops" lon="1"/></osm>"#,
    );
    let output = workspace.output();

    let err = extract_poi_tiles(&input, &output).expect_err("invalid latitude");

    assert!(err.is_parse_error());
    assert!(!err.is_io_error());
    assert!(!output.exists(), "output directory should not be created");
}

#[rstest]
fn missing_input_is_a_load_error(workspace: Workspace) {
    let input = workspace.root.join("absent.osm");
    let err = extract_poi_tiles(&input, &workspace.output()).expect_err("missing input");
    match err {
        ExtractError::Load(OsmXmlError::Open { path, .. }) => assert_eq!(path, input),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[rstest]
fn unwritable_output_is_an_io_error(workspace: Workspace) {
    let input = workspace.input(MIXED_EXPORT);
    let blocker = workspace.root.join("blocker");
    fs::write(&blocker, b"file").expect("write blocker");

    let err = extract_poi_tiles(&input, &blocker.join("tiles")).expect_err("blocked output");
    assert!(err.is_io_error());
}

#[rstest]
fn non_utf8_input_is_an_encoding_error(workspace: Workspace) {
    let input = workspace.root.join("latin1.osm");
    fs::write(&input, b"<osm><node id=\"1\" lat=\"0\" lon=\"0\"><tag k=\"name\" v=\"Caf\xe9\"/></node></osm>")
        .expect("write input");
    let output = workspace.output();

    let err = extract_poi_tiles(&input, &output).expect_err("latin-1 bytes");

    match err {
        ExtractError::Load(OsmXmlError::Encoding { path, .. }) => assert_eq!(path, input),
        other => panic!("expected encoding error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[cfg(unix)]
#[rstest]
fn output_under_symlinked_directory_is_written(workspace: Workspace) {
    let input = workspace.input(MIXED_EXPORT);
    let real = workspace.root.join("real");
    fs::create_dir(&real).expect("create real dir");
    let link = workspace.root.join("link");
    std::os::unix::fs::symlink(&real, &link).expect("create symlink");

    let report = extract_poi_tiles(&input, &link.join("tiles")).expect("extract through symlink");

    assert_eq!(report.tiles, 2);
    assert_eq!(
        tile_names(&real.join("tiles")),
        ["40.7_-74.0.json", "48.9_2.3.json"]
    );
}
