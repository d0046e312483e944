use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl Block {
    pub const ALL: [Block; 4] = [Block::S, Block::P, Block::D, Block::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        }
    }

    /// Class every member cell carries.
    pub fn css_class(self) -> &'static str {
        match self {
            Block::S => "s_group",
            Block::P => "p_group",
            Block::D => "d_group",
            Block::F => "f_group",
        }
    }

    /// Class applied to members while the block is filtered.
    pub fn active_class(self) -> &'static str {
        match self {
            Block::S => "s_group_active",
            Block::P => "p_group_active",
            Block::D => "d_group_active",
            Block::F => "f_group_active",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-block", self.as_str())
    }
}

impl FromStr for Block {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let v = value.trim().to_lowercase();
        let v = v
            .strip_suffix("-block")
            .or_else(|| v.strip_suffix("_group"))
            .unwrap_or(&v);
        match v {
            "s" => Ok(Block::S),
            "p" => Ok(Block::P),
            "d" => Ok(Block::D),
            "f" => Ok(Block::F),
            _ => Err(format!("unknown block '{value}'")),
        }
    }
}

/// Row/column of a cell. Rows 0..=6 are the main table, row 8 holds the
/// lanthanides and row 9 the actinides (row 7 is the visual gap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

pub const LANTHANIDE_ROW: usize = 8;
pub const ACTINIDE_ROW: usize = 9;
/// Series rows start under group 4.
const SERIES_OFFSET: usize = 3;

pub fn position_of(symbol: &str) -> Option<GridPosition> {
    for (row, cells) in PERIODIC_LAYOUT.iter().enumerate() {
        if let Some(col) = cells
            .iter()
            .position(|s| !s.is_empty() && s.eq_ignore_ascii_case(symbol))
        {
            return Some(GridPosition { row, col });
        }
    }
    for (row, series) in [(LANTHANIDE_ROW, &LANTHANIDES), (ACTINIDE_ROW, &ACTINIDES)] {
        if let Some(i) = series.iter().position(|s| s.eq_ignore_ascii_case(symbol)) {
            return Some(GridPosition {
                row,
                col: i + SERIES_OFFSET,
            });
        }
    }
    None
}

pub fn block_of(symbol: &str) -> Option<Block> {
    let pos = position_of(symbol)?;
    if pos.row >= LANTHANIDE_ROW {
        return Some(Block::F);
    }
    // Helium sits above the noble gases but fills 1s.
    if symbol.eq_ignore_ascii_case("He") {
        return Some(Block::S);
    }
    Some(match pos.col {
        0 | 1 => Block::S,
        2..=11 => Block::D,
        _ => Block::P,
    })
}

const PERIODIC_LAYOUT: [[&str; 18]; 7] = [
    ["H", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "He"],
    ["Li", "Be", "", "", "", "", "", "", "", "", "", "", "B", "C", "N", "O", "F", "Ne"],
    ["Na", "Mg", "", "", "", "", "", "", "", "", "", "", "Al", "Si", "P", "S", "Cl", "Ar"],
    ["K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr"],
    ["Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe"],
    ["Cs", "Ba", "La", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn"],
    ["Fr", "Ra", "Ac", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og"],
];
const LANTHANIDES: [&str; 14] = ["Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu"];
const ACTINIDES: [&str; 14] = ["Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr"];
