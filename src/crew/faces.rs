//! Structured die face layout.
//!
//! A crew die has six faces. Each face is either blank or carries one of the
//! three color categories. A die may use at most two colors; faces that are
//! not declared are blank.
//!
//! The text form used in data files is a comma-separated list of
//! `<count> <color>` terms, e.g. `"3 red, 3 green"`.

use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Faces on every die
pub const FACES_PER_DIE: usize = 6;

/// Colors a single die may carry
pub const MAX_COLORS_PER_DIE: usize = 2;

/// What a face color means in combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceCategory {
    Combat,
    Defense,
    Magic,
}

/// Face color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceColor {
    Red,
    Green,
    Blue,
}

impl FaceColor {
    pub const ALL: [FaceColor; 3] = [FaceColor::Red, FaceColor::Green, FaceColor::Blue];

    pub fn category(self) -> FaceCategory {
        match self {
            FaceColor::Red => FaceCategory::Combat,
            FaceColor::Green => FaceCategory::Defense,
            FaceColor::Blue => FaceCategory::Magic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceColor::Red => "red",
            FaceColor::Green => "green",
            FaceColor::Blue => "blue",
        }
    }
}

impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacesError {
    #[error("malformed face list: {0:?}")]
    Syntax(String),

    #[error("unknown face color: {0:?}")]
    UnknownColor(String),

    #[error("color {0} listed more than once")]
    DuplicateColor(FaceColor),

    #[error("die uses {0} colors, at most 2 allowed")]
    TooManyColors(usize),

    #[error("die declares {0} faces, at most 6 allowed")]
    TooManyFaces(usize),
}

/// Color-to-count mapping for one die.
///
/// Entries keep declaration order. Undeclared faces are blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DieFaces {
    entries: [Option<(FaceColor, u8)>; MAX_COLORS_PER_DIE],
}

impl DieFaces {
    /// A die with every face blank
    pub const fn blank() -> Self {
        Self { entries: [None, None] }
    }

    /// All six faces in one color
    pub const fn uniform(color: FaceColor) -> Self {
        Self {
            entries: [Some((color, FACES_PER_DIE as u8)), None],
        }
    }

    /// Three faces of each color. The same color twice gives a uniform die.
    pub fn split(first: FaceColor, second: FaceColor) -> Self {
        if first == second {
            return Self::uniform(first);
        }
        Self {
            entries: [Some((first, 3)), Some((second, 3))],
        }
    }

    /// Build from `(color, count)` pairs, validating the die rules.
    /// Zero counts are dropped.
    pub fn new(counts: &[(FaceColor, u8)]) -> Result<Self, FacesError> {
        let mut seen: Vec<FaceColor> = Vec::with_capacity(counts.len());
        for (color, _) in counts {
            if seen.contains(color) {
                return Err(FacesError::DuplicateColor(*color));
            }
            seen.push(*color);
        }

        let used: Vec<(FaceColor, u8)> = counts.iter().copied().filter(|(_, n)| *n > 0).collect();
        if used.len() > MAX_COLORS_PER_DIE {
            return Err(FacesError::TooManyColors(used.len()));
        }
        let total: usize = used.iter().map(|(_, n)| *n as usize).sum();
        if total > FACES_PER_DIE {
            return Err(FacesError::TooManyFaces(total));
        }

        let mut entries = [None; MAX_COLORS_PER_DIE];
        for (slot, entry) in entries.iter_mut().zip(used) {
            *slot = Some(entry);
        }
        Ok(Self { entries })
    }

    /// Declared colors with their counts, in declaration order
    pub fn counts(&self) -> impl Iterator<Item = (FaceColor, u8)> + '_ {
        self.entries.iter().flatten().copied()
    }

    pub fn count_of(&self, color: FaceColor) -> u8 {
        self.counts()
            .find(|(c, _)| *c == color)
            .map(|(_, n)| n)
            .unwrap_or(0)
    }

    pub fn colored_faces(&self) -> usize {
        self.counts().map(|(_, n)| n as usize).sum()
    }

    pub fn blank_faces(&self) -> usize {
        FACES_PER_DIE - self.colored_faces()
    }

    pub fn is_blank(&self) -> bool {
        self.colored_faces() == 0
    }

    /// The six faces laid out in declaration order, blanks last
    pub fn expand(&self) -> [Option<FaceColor>; FACES_PER_DIE] {
        let mut faces = [None; FACES_PER_DIE];
        let colored = self
            .counts()
            .flat_map(|(color, n)| std::iter::repeat(color).take(n as usize));
        for (face, color) in faces.iter_mut().zip(colored) {
            *face = Some(color);
        }
        faces
    }
}

impl Default for DieFaces {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for DieFaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return write!(f, "{} blank", FACES_PER_DIE);
        }
        let mut first = true;
        for (color, n) in self.counts() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", n, color)?;
            first = false;
        }
        Ok(())
    }
}

fn face_count(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |digits: &str| digits.parse::<u8>()).parse(input)
}

fn face_term(input: &str) -> IResult<&str, (u8, &str)> {
    separated_pair(face_count, multispace1, alpha1).parse(input)
}

fn face_list(input: &str) -> IResult<&str, Vec<(u8, &str)>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(delimited(multispace0, tag(","), multispace0), face_term),
        multispace0,
    ))
    .parse(input)
}

impl FromStr for DieFaces {
    type Err = FacesError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.trim().is_empty() {
            return Ok(Self::blank());
        }

        let (_, terms) = face_list(text).map_err(|_| FacesError::Syntax(text.to_string()))?;

        let mut counts = Vec::with_capacity(terms.len());
        let mut blanks: usize = 0;
        for (n, word) in terms {
            match word.to_ascii_lowercase().as_str() {
                "red" => counts.push((FaceColor::Red, n)),
                "green" => counts.push((FaceColor::Green, n)),
                "blue" => counts.push((FaceColor::Blue, n)),
                "blank" => blanks += n as usize,
                _ => return Err(FacesError::UnknownColor(word.to_string())),
            }
        }

        let faces = Self::new(&counts)?;
        let declared = faces.colored_faces() + blanks;
        if declared > FACES_PER_DIE {
            return Err(FacesError::TooManyFaces(declared));
        }
        Ok(faces)
    }
}

impl TryFrom<String> for DieFaces {
    type Error = FacesError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<DieFaces> for String {
    fn from(faces: DieFaces) -> Self {
        faces.to_string()
    }
}
