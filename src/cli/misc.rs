use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use dpll_proof::{
    builder::{parse_dimacs, ParserInfo},
    structures::formula::Formula,
    types::err::ErrorKind,
};

/// Ways in which loading a formula from a file may fail.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened.
    Open(PathBuf, std::io::ErrorKind),

    /// The file was opened, though the contents are not a formula.
    Parse(ErrorKind),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(path, kind) => write!(f, "Failed to open CNF file {path:?}: {kind}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl From<ErrorKind> for LoadError {
    fn from(e: ErrorKind) -> Self {
        LoadError::Parse(e)
    }
}

/// Reads the formula at `path`, decompressing files with an `xz` extension when the `xz` feature is enabled.
pub fn load_dimacs(path: &Path) -> Result<(Formula, ParserInfo), LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(LoadError::Open(path.to_path_buf(), e.kind())),
    };

    let parsed = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            parse_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => parse_dimacs(BufReader::new(&file)),
    };

    parsed.map_err(LoadError::from)
}

pub fn examine_parser_report(formula: &Formula, info: &ParserInfo) {
    match info.expected {
        Some((atoms, clauses)) => println!("c Expected {atoms} atoms and {clauses} clauses."),
        None => println!("c No preamble was found."),
    }

    println!("c Read     {} clauses.", info.clauses_read);
    println!("c Added    {} clauses.", formula.len());
}
