#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod config;
pub mod export_data;
pub mod import_data;
pub mod logs;
pub mod path_segment;

use anyhow::Result;
use config::Config;

/// Runs the whole conversion: KMZ in, JSONL out. Returns the number of
/// lines written.
pub fn run(config: &Config) -> Result<usize> {
    let coordinates = import_data::load_kmz(&config.infile)?;
    info!(
        "loaded {} points from {}",
        coordinates.len(),
        config.infile.display()
    );
    if coordinates.len() < 2 {
        warn!("path has fewer than two points, no segments will be written");
    }

    let segments = path_segment::calculate_distances(&coordinates);
    info!(
        "{} segments, {} miles in total",
        segments.len(),
        path_segment::Segment::total_distance(&segments)
    );

    export_data::output_jsonl(&config.outfile, &segments, config.verbose)
}
