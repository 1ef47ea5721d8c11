//! Parsing of the interactive `scan x1 y1 z1 x2 y2 z2` command.

use geist_world::ScanBounds;
use thiserror::Error;

pub const SCAN_KEYWORD: &str = "scan";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("please start your command with 'scan'")]
    NotScan,
    #[error("please enter exactly 6 coordinates for scan: x1 y1 z1 x2 y2 z2 (got {0})")]
    WrongCount(usize),
    #[error("please enter valid integer coordinates ('{0}' is not an integer)")]
    NotInteger(String),
}

/// The two corners exactly as entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    pub first: (i32, i32, i32),
    pub second: (i32, i32, i32),
}

impl ScanRequest {
    pub fn from_values(v: [i32; 6]) -> Self {
        Self {
            first: (v[0], v[1], v[2]),
            second: (v[3], v[4], v[5]),
        }
    }

    pub fn bounds(&self) -> ScanBounds {
        ScanBounds::new(self.first.into(), self.second.into())
    }

    /// `x1_y1_z1_x2_y2_z2`, used to name the output file.
    pub fn tag(&self) -> String {
        let (x1, y1, z1) = self.first;
        let (x2, y2, z2) = self.second;
        format!("{x1}_{y1}_{z1}_{x2}_{y2}_{z2}")
    }
}

pub fn parse_command(line: &str) -> Result<ScanRequest, CommandError> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(SCAN_KEYWORD) {
        return Err(CommandError::NotScan);
    }
    let args: Vec<&str> = tokens.collect();
    parse_coords(&args)
}

pub fn parse_coords(args: &[&str]) -> Result<ScanRequest, CommandError> {
    if args.len() != 6 {
        return Err(CommandError::WrongCount(args.len()));
    }
    let mut values = [0i32; 6];
    for (slot, token) in values.iter_mut().zip(args) {
        *slot = token
            .parse()
            .map_err(|_| CommandError::NotInteger((*token).to_string()))?;
    }
    Ok(ScanRequest::from_values(values))
}
