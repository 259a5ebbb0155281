use crate::core::io::traits::TrajectoryFile;
use crate::core::models::frame::{Bond, Frame};
use crate::core::models::trajectory::Trajectory;
use nalgebra::Point3;
use std::collections::{BTreeSet, HashMap};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MIN_ATOM_RECORD_LEN: usize = 60;
const COORD_WIDTH: usize = 10;
const MAX_COORD_PRECISION: usize = 5;

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error in frame {frame}, line {line}: {kind}")]
    Parse {
        frame: usize,
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data in frame {frame}: {message}")]
    Inconsistency { frame: usize, message: String },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 60 chars)")]
    LineTooShort,
    #[error("Invalid atom serial in CONECT record (value: '{value}')")]
    InvalidConectSerial { value: String },
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn record_type(line: &str) -> &str {
    line.get(..6).unwrap_or(line).trim()
}

/// Formats a coordinate into its fixed-width field, giving up decimals as the
/// magnitude grows so the following columns never shift.
fn format_coordinate(value: f64, frame: usize) -> Result<String, BgfError> {
    if value.is_finite() {
        for precision in (0..=MAX_COORD_PRECISION).rev() {
            let field = format!("{:>width$.precision$}", value, width = COORD_WIDTH);
            if field.len() == COORD_WIDTH {
                return Ok(field);
            }
        }
    }
    Err(BgfError::Inconsistency {
        frame,
        message: format!(
            "coordinate {} does not fit a {}-column field",
            value, COORD_WIDTH
        ),
    })
}

/// Accumulates one `END`-terminated block of a BGF trajectory.
#[derive(Default)]
struct FrameBlock {
    positions: Vec<Point3<f64>>,
    serial_to_index: HashMap<usize, usize>,
    connections: BTreeSet<(usize, usize)>,
    has_records: bool,
}

impl FrameBlock {
    fn finish(self, frame: usize) -> Result<Frame, BgfError> {
        if self.positions.is_empty() {
            return Err(BgfError::MissingRecord(format!(
                "ATOM/HETATM records in frame {}",
                frame
            )));
        }

        let lookup = |serial: usize| {
            self.serial_to_index
                .get(&serial)
                .copied()
                .ok_or_else(|| BgfError::Inconsistency {
                    frame,
                    message: format!("CONECT references unknown atom serial {}", serial),
                })
        };

        let bonds = self
            .connections
            .iter()
            .map(|&(a, b)| Ok(Bond::new(lookup(a)?, lookup(b)?)))
            .collect::<Result<Vec<_>, BgfError>>()?;

        Ok(Frame::new(self.positions, bonds))
    }
}

/// Multi-frame BGF trajectory: consecutive BGF blocks, each terminated by `END`.
///
/// Only coordinates and `CONECT` connectivity are read. Each bond is oriented
/// from the lower to the higher atom serial and bonds are listed in serial order.
///
/// Writing keeps every coordinate in its ten-column field, trading decimals for
/// magnitude; values that still do not fit, or are not finite, are rejected.
/// `CONECT` cannot express a bond from an atom to itself, so a frame holding
/// one is rejected rather than written with the bond lost.
pub struct BgfTrajectoryFile;

impl BgfTrajectoryFile {
    fn parse_atom_record(
        line: &str,
        frame: usize,
        line_num: usize,
    ) -> Result<(usize, Point3<f64>), BgfError> {
        let parse_error = |kind| BgfError::Parse {
            frame,
            line: line_num,
            kind,
        };

        if line.len() < MIN_ATOM_RECORD_LEN {
            return Err(parse_error(BgfParseErrorKind::LineTooShort));
        }

        let serial_str = slice_and_trim(line, 7, 12);
        let serial: usize = serial_str.parse().map_err(|_| {
            parse_error(BgfParseErrorKind::InvalidInt {
                columns: "8-12".into(),
                value: serial_str.into(),
            })
        })?;

        let mut coords = [0.0; 3];
        for (axis, (start, end, columns)) in [(30, 40, "31-40"), (40, 50, "41-50"), (50, 60, "51-60")]
            .into_iter()
            .enumerate()
        {
            let value = slice_and_trim(line, start, end);
            coords[axis] = value.parse().map_err(|_| {
                parse_error(BgfParseErrorKind::InvalidFloat {
                    columns: columns.into(),
                    value: value.into(),
                })
            })?;
        }

        Ok((serial, Point3::new(coords[0], coords[1], coords[2])))
    }

    fn parse_conect_record(
        line: &str,
        frame: usize,
        line_num: usize,
    ) -> Result<Vec<(usize, usize)>, BgfError> {
        let serials = line
            .split_whitespace()
            .skip(1)
            .map(|value| {
                value.parse::<usize>().map_err(|_| BgfError::Parse {
                    frame,
                    line: line_num,
                    kind: BgfParseErrorKind::InvalidConectSerial {
                        value: value.into(),
                    },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some((&origin, partners)) = serials.split_first() else {
            return Ok(Vec::new());
        };
        Ok(partners
            .iter()
            .filter(|&&partner| partner != origin)
            .map(|&partner| (origin.min(partner), origin.max(partner)))
            .collect())
    }
}

impl TrajectoryFile for BgfTrajectoryFile {
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error> {
        let mut trajectory = Trajectory::new();
        let mut block = FrameBlock::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let frame = trajectory.len();

            match record_type(&line) {
                "ATOM" | "HETATM" => {
                    let (serial, position) = Self::parse_atom_record(&line, frame, line_num)?;
                    if block
                        .serial_to_index
                        .insert(serial, block.positions.len())
                        .is_some()
                    {
                        return Err(BgfError::Inconsistency {
                            frame,
                            message: format!("Duplicate atom serial: {}", serial),
                        });
                    }
                    block.positions.push(position);
                    block.has_records = true;
                }
                "CONECT" => {
                    block
                        .connections
                        .extend(Self::parse_conect_record(&line, frame, line_num)?);
                    block.has_records = true;
                }
                "END" => {
                    trajectory.push(std::mem::take(&mut block).finish(frame)?);
                }
                _ => {}
            }
        }

        if block.has_records {
            let frame = trajectory.len();
            trajectory.push(block.finish(frame)?);
        }

        if trajectory.is_empty() {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(trajectory)
    }

    fn write_to(trajectory: &Trajectory, writer: &mut impl Write) -> Result<(), Self::Error> {
        for (frame_index, frame) in trajectory.frames().iter().enumerate() {
            if let Some(bond) = frame.bonds().iter().find(|bond| bond.i == bond.j) {
                return Err(BgfError::Inconsistency {
                    frame: frame_index,
                    message: format!("self-bond on particle {} cannot be written", bond.i),
                });
            }

            writeln!(writer, "BIOGRF 200")?;
            writeln!(writer, "REMARK Frame {} generated by nematic", frame_index)?;
            writeln!(
                writer,
                "FORMAT ATOM   (a6,1x,i5,1x,a5,1x,a3,1x,a1,1x,a5,3f10.5,1x,a5,i3,i2,1x,f8.5)"
            )?;

            for (index, position) in frame.positions().iter().enumerate() {
                writeln!(
                    writer,
                    "{:<6} {:>5} {:<5} {:>3} {:1} {:>5}{}{}{} {:<5}{:>3}{:>2} {:>8.5}",
                    "HETATM",
                    index + 1,
                    "P",
                    "MON",
                    "A",
                    1,
                    format_coordinate(position.x, frame_index)?,
                    format_coordinate(position.y, frame_index)?,
                    format_coordinate(position.z, frame_index)?,
                    "P",
                    0,
                    0,
                    0.0
                )?;
            }

            let mut partners: HashMap<usize, Vec<usize>> = HashMap::new();
            for bond in frame.bonds() {
                let (a, b) = (bond.i.min(bond.j) + 1, bond.i.max(bond.j) + 1);
                partners.entry(a).or_default().push(b);
            }
            let mut origins: Vec<_> = partners.keys().copied().collect();
            origins.sort_unstable();
            for origin in origins {
                write!(writer, "CONECT {:>5}", origin)?;
                for partner in &partners[&origin] {
                    write!(writer, " {:>5}", partner)?;
                }
                writeln!(writer)?;
            }

            writeln!(writer, "END")?;
        }
        Ok(())
    }
}
