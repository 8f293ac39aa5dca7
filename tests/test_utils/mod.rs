#![allow(dead_code)]

use std::{fs::File, io::Write, path::Path};
use zip::write::SimpleFileOptions;

pub const WALKING_PATH_KMZ: &str = "./tests/data/walking_path.kmz";
pub const NO_DOC_KML_KMZ: &str = "./tests/data/no_doc_kml.kmz";

// geodesic length of the first segment of the walking path, in miles
pub const FIRST_SEGMENT_MILES: f64 = 0.011296110181122795;

pub fn kml_with_line_string(coordinates: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>test</name>
    <Placemark>
      <name>Line 1</name>
      <LineString>
        <tessellate>1</tessellate>
        <coordinates>
{coordinates}
        </coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>
"#
    )
}

pub fn write_kmz(kmz_file_path: &Path, members: &[(&str, &str)]) {
    let mut zip = zip::ZipWriter::new(File::create(kmz_file_path).unwrap());
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in members {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}
