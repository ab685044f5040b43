/*!
A proof as a trace, in the style of TraceCheck.

Each clause of the proof is written once, on a line of the form:

```text
<id> <literals> 0 <premise ids> 0
```

Ids start from 1, and premises are written before the clauses derived from them, so the last line is the conclusion of the proof.
Axioms and assumptions have no premises, so end with `0 0`.

```rust
# use dpll_proof::structures::clause::Clause;
# use dpll_proof::structures::literal::Literal;
# use dpll_proof::procedures::resolution::resolve;
# use dpll_proof::reports::trace::trace_lines;
let p = Clause::axiom([Literal::new(1, true)]);
let not_p = Clause::axiom([Literal::new(1, false)]);
let empty = resolve(&p, &not_p).unwrap();

assert_eq!(trace_lines(&empty), vec!["1 1 0 0", "2 -1 0 0", "3 0 1 2 0"]);
```

Assumptions have no counterpart in TraceCheck, and are written as axioms would be.
A proof without assumptions is a valid TraceCheck trace.
*/

use std::collections::HashMap;

use crate::structures::clause::Clause;

/// The lines of a trace of the proof of `clause`.
pub fn trace_lines(clause: &Clause) -> Vec<String> {
    let mut ids: HashMap<usize, usize> = HashMap::default();
    let mut lines = Vec::default();

    for (index, node) in clause.postorder().into_iter().enumerate() {
        let id = index + 1;
        ids.insert(node.id(), id);

        let premises = match node.premises() {
            Some((a, b)) => match (ids.get(&a.id()), ids.get(&b.id())) {
                (Some(a_id), Some(b_id)) => format!("{a_id} {b_id} 0"),
                _ => "0".to_string(),
            },
            None => "0".to_string(),
        };

        lines.push(format!("{id} {} {premises}", node.as_dimacs(true)));
    }

    lines
}
