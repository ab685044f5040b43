use dpll_proof::{
    config::Config,
    context::Context,
    procedures::{check::check_result, core::core},
    reports::Report,
    structures::{formula::Formula, literal::Literal, valuation::Valuation},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A random formula of `clauses` clauses, each of three literals on atoms from 1 to `atoms`.
fn uniform_random_3_cnf(rng: &mut StdRng, atoms: u32, clauses: usize) -> Vec<Vec<i32>> {
    (0..clauses)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let atom = rng.random_range(1..=atoms) as i32;
                    match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

fn satisfiable_by_enumeration(formula: &Formula, atoms: u32) -> bool {
    (0..(1_u32 << atoms)).any(|bits| {
        let mut valuation = Valuation::default();
        for atom in 1..=atoms {
            valuation.set(Literal::new(atom, bits & (1 << (atom - 1)) != 0));
        }
        formula.iter().all(|clause| valuation.satisfies(clause))
    })
}

fn sweep(config: &Config, seed: u64, atoms: u32, clause_range: std::ops::RangeInclusive<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = [0, 0];

    for clauses in clause_range {
        let ints = uniform_random_3_cnf(&mut rng, atoms, clauses);
        let formula = Formula::from_ints(ints).expect("formula");

        let mut the_context = Context::from_config(config.clone());
        let result = the_context.solve(&formula).expect("solve");

        assert!(check_result(&result, &formula).is_ok());
        assert_eq!(
            result.report() == Report::Satisfiable,
            satisfiable_by_enumeration(&formula, atoms),
            "seed {seed}, {clauses} clauses"
        );

        if let Some(proof) = result.proof() {
            let restricted = Formula::from_iter(core(proof));
            assert!(!satisfiable_by_enumeration(&restricted, atoms));
            counts[1] += 1;
        } else {
            counts[0] += 1;
        }
    }

    println!("seed {seed}: {} satisfiable, {} unsatisfiable", counts[0], counts[1]);
}

mod three_sat {

    use super::*;

    #[test]
    fn uniform_random_3_8() {
        for seed in 0..8 {
            sweep(&Config::default(), seed, 8, 20..=50);
        }
    }

    #[test]
    fn uniform_random_3_10_negative_first() {
        let mut config = Config::default();
        config.first_polarity.value = false;
        config.check_proofs.value = true;

        for seed in 100..104 {
            sweep(&config, seed, 10, 30..=60);
        }
    }
}
