//! An ASCII rendering of a proof, for diagnostics.
//!
//! A derived clause is written above its two premises, which are written side by side.
//!
//! ```text
//!             3
//!     _______/ \__
//!     -2 3      2?
//! ____/ \____
//! 1 -2   -1 3
//! ```
//!
//! The empty clause is written `X`, and assumptions are suffixed with `?`.
//! Shared premises are written once for each use, so the rendering of a proof may be (much) larger than the proof.
//! The count of clauses written is given by [tree_size](Clause::tree_size), and [Display](std::fmt::Display) on a clause writes a [trace](crate::reports::trace) in place of any tree with more than [TREE_SIZE_LIMIT] clauses.

use std::collections::HashMap;

use super::Clause;

/// The most clauses written in a tree by [Display](std::fmt::Display).
pub const TREE_SIZE_LIMIT: u64 = 4096;

const JOIN: &str = "/ \\";

/// `line` centered in `width`, leaning left when both the padding and the width are odd.
fn center(line: &str, width: usize) -> String {
    let length = line.chars().count();
    if width <= length {
        return line.to_string();
    }
    let padding = width - length;
    let left = padding / 2 + (padding & width & 1);
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(padding - left))
}

fn pad_left(line: &str, width: usize) -> String {
    format!("{line:>width$}")
}

fn pad_right(line: &str, width: usize) -> String {
    format!("{line:<width$}")
}

fn width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

impl Clause {
    /// The count of clauses in the tree of the proof of the clause, with shared premises counted once for each use.
    ///
    /// As a tree has at least as many clauses as levels, this also bounds the depth of [tree_lines](Clause::tree_lines).
    pub fn tree_size(&self) -> u64 {
        let mut sizes: HashMap<usize, u64> = HashMap::default();

        for node in self.postorder() {
            let size = match node.premises() {
                Some((a, b)) => {
                    let size_a = sizes.get(&a.id()).copied().unwrap_or(1);
                    let size_b = sizes.get(&b.id()).copied().unwrap_or(1);
                    size_a.saturating_add(size_b).saturating_add(1)
                }
                None => 1,
            };
            sizes.insert(node.id(), size);
        }

        sizes.get(&self.id()).copied().unwrap_or(1)
    }

    /// The lines of an ASCII rendering of the proof of the clause.
    ///
    /// The rendering recurses through the proof, so callers should check [tree_size](Clause::tree_size) on proofs of unknown shape.
    pub fn tree_lines(&self) -> Vec<String> {
        let Some((premise_a, premise_b)) = self.premises() else {
            return vec![self.to_string()];
        };

        let lines_a = premise_a.tree_lines();
        let lines_b = premise_b.tree_lines();

        let line_result = match self.is_empty() {
            true => "X".to_string(),
            false => self.as_string(),
        };

        let width_a = width(&lines_a);
        let width_b = width(&lines_b);
        let total_width = std::cmp::max(
            width_a + JOIN.len() + width_b,
            line_result.chars().count(),
        );

        let first_a = lines_a.first().map(String::as_str).unwrap_or("");
        let first_b = lines_b.first().map(String::as_str).unwrap_or("");
        let bar_a = first_a.len() - first_a.trim_start().len();
        let bar_b = first_b.len() - first_b.trim_end().len();

        let line_result = if width_a <= width_b {
            pad_right(&center(&line_result, width_a * 2 + JOIN.len()), total_width)
        } else {
            pad_left(&center(&line_result, width_b * 2 + JOIN.len()), total_width)
        };

        let line_bar = format!(
            "{}{}{JOIN}{}{}",
            " ".repeat(bar_a),
            "_".repeat(width_a.saturating_sub(bar_a)),
            "_".repeat(width_b.saturating_sub(bar_b)),
            " ".repeat(bar_b)
        );

        let mut lines = vec![line_result, line_bar];
        let separator = " ".repeat(JOIN.len());
        for index in 0..std::cmp::max(lines_a.len(), lines_b.len()) {
            let a = lines_a.get(index).map(String::as_str).unwrap_or("");
            let b = lines_b.get(index).map(String::as_str).unwrap_or("");
            lines.push(format!(
                "{}{separator}{}",
                pad_left(a, width_a),
                pad_right(b, width_b)
            ));
        }

        lines
    }
}
