use crate::path_segment::Coordinate;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Seek},
    path::Path,
};

const KML_MEMBER: &str = "doc.kml";
const KML_NAMESPACE: &[u8] = b"http://www.opengis.net/kml/2.2";

// Absolute path of the element holding the path, starting at the root.
const COORDINATES_PATH: [&[u8]; 5] = [
    b"kml",
    b"Document",
    b"Placemark",
    b"LineString",
    b"coordinates",
];

pub fn load_kmz<P: AsRef<Path>>(kmz_file_path: P) -> Result<Vec<Coordinate>> {
    let kmz_file_path = kmz_file_path.as_ref();
    let file = File::open(kmz_file_path)
        .with_context(|| format!("failed to open {}", kmz_file_path.display()))?;
    read_kmz(file).with_context(|| format!("failed to read KMZ file {}", kmz_file_path.display()))
}

pub fn read_kmz<R: Read + Seek>(reader: R) -> Result<Vec<Coordinate>> {
    let mut zip = zip::ZipArchive::new(reader)?;
    let kml = zip
        .by_name(KML_MEMBER)
        .with_context(|| format!("no {KML_MEMBER} in archive"))?;
    let coordinates = parse_kml(BufReader::new(kml))?;
    Ok(coordinates)
}

fn is_kml_element(ns: &ResolveResult, local_name: &[u8], expected: &[u8]) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == KML_NAMESPACE)
        && local_name == expected
}

/// Finds the first `kml/Document/Placemark/LineString/coordinates` element
/// in the KML 2.2 namespace and parses its text. A document without one is
/// an error, not an empty path. An element that exists but holds no tuples
/// (`<coordinates/>`, or only whitespace) gives an empty path.
pub fn parse_kml<R: BufRead>(reader: R) -> Result<Vec<Coordinate>> {
    let mut reader = NsReader::from_reader(reader);
    let mut buf = Vec::new();

    // `matched` counts how many of the open elements, from the root down,
    // follow `COORDINATES_PATH`. It never exceeds `depth`.
    let mut depth = 0;
    let mut matched = 0;
    let mut text = String::new();
    let target = COORDINATES_PATH.len();

    loop {
        let (ns, event) = reader
            .read_resolved_event_into(&mut buf)
            .context("malformed KML document")?;
        match event {
            Event::Start(e) => {
                if matched == depth
                    && depth < target
                    && is_kml_element(&ns, e.local_name().as_ref(), COORDINATES_PATH[depth])
                {
                    matched += 1;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if matched == depth
                    && depth == target - 1
                    && is_kml_element(&ns, e.local_name().as_ref(), COORDINATES_PATH[depth])
                {
                    debug!("found empty coordinates element");
                    return Ok(Vec::new());
                }
            }
            Event::Text(e) if depth == target && matched == target => {
                text.push_str(&e.unescape().context("malformed KML document")?);
            }
            Event::CData(e) if depth == target && matched == target => {
                text.push_str(std::str::from_utf8(&e)?);
            }
            Event::End(_) => {
                if depth == target && matched == target {
                    debug!("found coordinates element, {} bytes of text", text.len());
                    return parse_coordinates(&text);
                }
                if matched == depth {
                    matched -= 1;
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    bail!("no kml/Document/Placemark/LineString/coordinates element found")
}

/// Parses the text of a `coordinates` element: one `longitude,latitude[,altitude]`
/// tuple per line, blank lines skipped, altitude dropped.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_coordinate_tuple)
        .collect()
}

fn parse_coordinate_tuple(line: &str) -> Result<Coordinate> {
    // only newlines separate tuples; a space separated line keeps its first one
    if line.split(',').count() > 3 {
        warn!("more than one coordinate tuple on a line, using the first: {line:?}");
    }
    let mut fields = line.split(',').map(str::trim);
    let (Some(longitude), Some(latitude)) = (fields.next(), fields.next()) else {
        bail!("malformed coordinate tuple: {line:?}");
    };
    let longitude: f64 = longitude
        .parse()
        .with_context(|| format!("invalid longitude in coordinate tuple {line:?}"))?;
    let latitude: f64 = latitude
        .parse()
        .with_context(|| format!("invalid latitude in coordinate tuple {line:?}"))?;
    ensure!(
        latitude.is_finite() && longitude.is_finite(),
        "non-finite value in coordinate tuple {line:?}"
    );
    Ok(Coordinate::new(latitude, longitude))
}
