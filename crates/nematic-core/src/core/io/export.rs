use crate::core::color::misalignment::MisalignmentMap;
use crate::core::models::series::OrderTimeSeries;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize)]
struct OrderRecord {
    frame: usize,
    order: Option<f64>,
    director_x: Option<f64>,
    director_y: Option<f64>,
    director_z: Option<f64>,
}

#[derive(Debug, Serialize)]
struct MisalignmentRecord {
    start_x: f64,
    start_y: f64,
    start_z: f64,
    vector_x: f64,
    vector_y: f64,
    vector_z: f64,
    angle: f64,
    normalized: f64,
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

/// Writes one row per frame: `frame,order,director_x,director_y,director_z`.
///
/// Frames with undefined order leave the order and director fields empty.
pub fn write_order_series<W: Write>(writer: W, series: &OrderTimeSeries) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if series.is_empty() {
        csv_writer.write_record(["frame", "order", "director_x", "director_y", "director_z"])?;
    }
    for result in series {
        let director = result.director();
        csv_writer.serialize(OrderRecord {
            frame: result.frame_index,
            order: result.order(),
            director_x: director.map(|d| d.x),
            director_y: director.map(|d| d.y),
            director_z: director.map(|d| d.z),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes one row per bond with its anchor, vector, misalignment, and RGBA color,
/// ready for a generic vector-field renderer.
pub fn write_misalignment_map<W: Write>(writer: W, map: &MisalignmentMap) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if map.is_empty() {
        csv_writer.write_record([
            "start_x", "start_y", "start_z", "vector_x", "vector_y", "vector_z", "angle",
            "normalized", "r", "g", "b", "a",
        ])?;
    }
    for bond in map.bonds() {
        csv_writer.serialize(MisalignmentRecord {
            start_x: bond.start.x,
            start_y: bond.start.y,
            start_z: bond.start.z,
            vector_x: bond.vector.x,
            vector_y: bond.vector.y,
            vector_z: bond.vector.z,
            angle: bond.angle,
            normalized: bond.normalized,
            r: bond.color.r,
            g: bond.color.g,
            b: bond.color.b,
            a: bond.color.a,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_order_series_to_path<P: AsRef<Path>>(
    path: P,
    series: &OrderTimeSeries,
) -> Result<(), ExportError> {
    write_order_series(std::fs::File::create(path)?, series)
}

pub fn write_misalignment_map_to_path<P: AsRef<Path>>(
    path: P,
    map: &MisalignmentMap,
) -> Result<(), ExportError> {
    write_misalignment_map(std::fs::File::create(path)?, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::misalignment::MisalignmentColorizer;
    use crate::core::models::series::OrderResult;
    use crate::core::order::eigen::NematicOrder;
    use crate::core::order::vectors::BondSegment;
    use nalgebra::{Point3, Vector3};

    fn to_string(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn write_order_series_leaves_undefined_fields_empty() {
        let series = OrderTimeSeries::from_results(vec![
            OrderResult::defined(
                2,
                NematicOrder {
                    order: 0.5,
                    director: Vector3::x_axis(),
                },
            ),
            OrderResult::undefined(3),
        ]);
        let mut buffer = Vec::new();
        write_order_series(&mut buffer, &series).unwrap();

        let content = to_string(buffer);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "frame,order,director_x,director_y,director_z");
        assert_eq!(lines[1], "2,0.5,1.0,0.0,0.0");
        assert_eq!(lines[2], "3,,,,");
    }

    #[test]
    fn write_misalignment_map_emits_one_row_per_bond() {
        let segments = [
            BondSegment {
                start: Point3::new(1.0, 2.0, 3.0),
                vector: Vector3::new(1.0, 0.0, 0.0),
            },
            BondSegment {
                start: Point3::origin(),
                vector: Vector3::new(0.0, 1.0, 0.0),
            },
        ];
        let map = MisalignmentColorizer::default().colorize(&segments, &Vector3::x_axis());
        let mut buffer = Vec::new();
        write_misalignment_map(&mut buffer, &map).unwrap();

        let content = to_string(buffer);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("start_x,start_y,start_z,vector_x"));
        assert!(lines[1].starts_with("1.0,2.0,3.0,1.0,0.0,0.0,0.0,0.0,"));
        assert!(lines[2].contains(",1.0,"));
    }

    #[test]
    fn write_misalignment_map_of_empty_frame_writes_header_only() {
        let map = MisalignmentColorizer::default().colorize(&[], &Vector3::x_axis());
        let mut buffer = Vec::new();
        write_misalignment_map(&mut buffer, &map).unwrap();
        assert_eq!(
            to_string(buffer).trim_end(),
            "start_x,start_y,start_z,vector_x,vector_y,vector_z,angle,normalized,r,g,b,a"
        );
    }

    #[test]
    fn write_order_series_of_empty_series_writes_header_only() {
        let mut buffer = Vec::new();
        write_order_series(&mut buffer, &OrderTimeSeries::default()).unwrap();
        assert_eq!(
            to_string(buffer),
            "frame,order,director_x,director_y,director_z\n"
        );
    }

    #[test]
    fn write_order_series_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.csv");
        write_order_series_to_path(&path, &OrderTimeSeries::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "frame,order,director_x,director_y,director_z"
        );
    }
}
