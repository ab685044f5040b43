use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal},
    types::err::{self, ErrorKind},
};

/// Information noted while parsing a DIMACS input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The counts of atoms and clauses given in the problem specification, if present.
    pub expected: Option<(usize, usize)>,

    /// The count of clauses read, including any duplicates.
    pub clauses_read: usize,
}

fn problem_specification(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut problem_details = line.split_whitespace().skip(1);

    if problem_details.next() != Some("cnf") {
        return Err(err::ParseError::ProblemSpecification.into());
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match problem_details.next().map(|string| string.parse()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification.into()),
        }
    };

    let atom_count = count()?;
    let clause_count = count()?;
    Ok((atom_count, clause_count))
}

/// Reads a formula in DIMACS form, together with information noted while parsing.
///
/// - Lines beginning with `c` are comments.
/// - A problem specification of the form `p cnf <atoms> <clauses>` may be given before the first clause.
///   The counts are noted, though not required to match the formula.
/// - A line beginning with `%` ends the formula.
/// - Each clause is terminated by `0`, though the terminator may be omitted from the last clause.
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<(Formula, ParserInfo), ErrorKind> {
    let mut formula = Formula::default();
    let mut info = ParserInfo::default();

    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: Vec<Literal> = Vec::default();

    let mut line_counter = 0;
    let mut preamble = true;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
        }

        match buffer.trim_start().chars().next() {
            None | Some('c') => continue,

            Some('%') => break,

            Some('p') => match preamble {
                true => {
                    let expected = problem_specification(&buffer)?;
                    log::debug!(target: targets::BUILDER, "Expecting {} atoms and {} clauses", expected.0, expected.1);
                    info.expected = Some(expected);
                    preamble = false;
                }
                false => {
                    log::error!(target: targets::BUILDER, "Problem specification on line {line_counter}");
                    return Err(err::ParseError::ProblemSpecification.into());
                }
            },

            Some(_) => {
                preamble = false;

                for item in buffer.split_whitespace() {
                    let parsed_int = match item.parse::<i64>() {
                        Ok(int) => int,
                        Err(_) => {
                            log::error!(target: targets::BUILDER, "Token '{item}' on line {line_counter}");
                            return Err(err::ParseError::Token(line_counter).into());
                        }
                    };

                    match parsed_int {
                        0 => {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            formula.insert(Clause::axiom(the_clause));
                            info.clauses_read += 1;
                        }
                        _ => clause_buffer.push(Literal::try_from(parsed_int)?),
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        formula.insert(Clause::axiom(clause_buffer));
        info.clauses_read += 1;
    }

    log::info!(target: targets::BUILDER, "Read {} clauses ({} distinct) from {line_counter} lines", info.clauses_read, formula.len());
    Ok((formula, info))
}

/// Reads a formula in DIMACS form.
///
/// See [parse_dimacs] for details.
pub fn read_dimacs(reader: impl BufRead) -> Result<Formula, ErrorKind> {
    parse_dimacs(reader).map(|(formula, _)| formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(formula: &Formula) -> Vec<String> {
        formula.iter().map(|clause| clause.as_string()).collect()
    }

    #[test]
    fn problem_specification_is_noted() {
        let dimacs = b"c comment\np cnf 3 2\n1 -3 0\n2 3 -1 0\n";
        let (formula, info) = parse_dimacs(dimacs.as_slice()).expect("parse");

        assert_eq!(clauses(&formula), vec!["1 -3", "-1 2 3"]);
        assert_eq!(info.expected, Some((3, 2)));
        assert_eq!(info.clauses_read, 2);
    }

    #[test]
    fn no_problem_specification() {
        let dimacs = b"1 2 0 -1 0\n2\n";
        let (formula, info) = parse_dimacs(dimacs.as_slice()).expect("parse");

        assert_eq!(clauses(&formula), vec!["1 2", "-1", "2"]);
        assert_eq!(info.expected, None);
    }

    #[test]
    fn clauses_span_lines() {
        let dimacs = b"1\n2\n0\n-1 -2 0\n";
        let formula = read_dimacs(dimacs.as_slice()).expect("parse");
        assert_eq!(clauses(&formula), vec!["1 2", "-1 -2"]);
    }

    #[test]
    fn percent_ends_the_formula() {
        let dimacs = b"1 0\n%\n0\n";
        let formula = read_dimacs(dimacs.as_slice()).expect("parse");
        assert_eq!(clauses(&formula), vec!["1"]);
    }

    #[test]
    fn bad_tokens() {
        let dimacs = b"1 0\nc fine\n2 x 0\n";
        assert_eq!(
            read_dimacs(dimacs.as_slice()).err(),
            Some(ErrorKind::Parse(err::ParseError::Token(3)))
        );

        let dimacs = b"p dnf 1 1\n1 0\n";
        assert_eq!(
            read_dimacs(dimacs.as_slice()).err(),
            Some(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );

        let dimacs = b"p cnf 1\n1 0\n";
        assert!(read_dimacs(dimacs.as_slice()).is_err());

        let dimacs = b"99999999999 0\n";
        assert_eq!(
            read_dimacs(dimacs.as_slice()).err(),
            Some(ErrorKind::Build(err::BuildError::AtomOverflow))
        );
    }

    #[test]
    fn duplicate_clauses_collapse() {
        let dimacs = b"1 2 0\n2 1 0\n";
        let (formula, info) = parse_dimacs(dimacs.as_slice()).expect("parse");
        assert_eq!(formula.len(), 1);
        assert_eq!(info.clauses_read, 2);
    }
}
