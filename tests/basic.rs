use dpll_proof::{
    config::Config,
    context::Context,
    procedures::check::{check_model, check_refutation},
    reports::Report,
    structures::formula::Formula,
};

mod basic {

    use dpll_proof::procedures::solve::solve;

    use super::*;

    #[test]
    fn one_literal() {
        let formula = Formula::from_ints([vec![1]]).expect("formula");
        let result = solve(&formula).expect("solve");

        assert_eq!(result.report(), Report::Satisfiable);
        assert_eq!(result.valuation().and_then(|v| v.value_of(1)), Some(true));
    }

    #[test]
    fn conflict() {
        let formula = Formula::from_ints([vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]])
            .expect("formula");
        let result = solve(&formula).expect("solve");

        assert_eq!(result.report(), Report::Unsatisfiable);
        let proof = result.proof().expect("proof");
        assert!(check_refutation(proof, &formula).is_ok());
    }

    #[test]
    fn unit_conjunct() {
        let formula = Formula::from_ints([vec![1, 2], vec![-1]]).expect("formula");
        let result = solve(&formula).expect("solve");

        let valuation = result.valuation().expect("satisfiable");
        assert_eq!(valuation.value_of(1), Some(false));
        assert_eq!(valuation.value_of(2), Some(true));
        assert!(check_model(valuation, &formula).is_ok());
    }

    #[test]
    fn contradictory_units() {
        let formula = Formula::from_ints([vec![1], vec![-1]]).expect("formula");
        let result = solve(&formula).expect("solve");

        let proof = result.proof().expect("unsatisfiable");
        let (a, b) = proof.premises().expect("one resolution");
        assert!(a.is_axiom());
        assert!(b.is_axiom());
        assert!(formula.contains(a) && formula.contains(b));
    }

    #[test]
    fn units_and_a_satisfied_clause() {
        let formula = Formula::from_ints([vec![1], vec![2], vec![2, 3]]).expect("formula");
        let result = solve(&formula).expect("solve");

        let valuation = result.valuation().expect("satisfiable");
        assert_eq!(valuation.value_of(1), Some(true));
        assert_eq!(valuation.value_of(2), Some(true));
    }

    #[test]
    fn a_single_clause() {
        let formula = Formula::from_ints([vec![1, 2]]).expect("formula");
        let result = solve(&formula).expect("solve");
        assert!(result.is_satisfiable());
        assert!(check_model(result.valuation().expect("model"), &formula).is_ok());
    }

    #[test]
    fn duplicate_literals_and_clauses() {
        let formula = Formula::from_ints([vec![1, 1, -2], vec![-2, 1], vec![2], vec![-1]])
            .expect("formula");
        assert_eq!(formula.len(), 3);

        let result = solve(&formula).expect("solve");
        assert_eq!(result.report(), Report::Unsatisfiable);
    }
}

mod context {

    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut ctx = Context::from_config(Config::default());

        let formula = Formula::from_ints([vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]])
            .expect("formula");

        assert!(ctx.solve(&formula).is_ok());
        assert_eq!(ctx.counters.decisions, 1);

        assert!(ctx.solve(&formula).is_ok());
        assert_eq!(ctx.counters.decisions, 2);
        assert!(ctx.counters.resolutions > 0);
    }

    #[test]
    fn checked_solves() {
        let mut config = Config::default();
        config.check_proofs.value = true;
        let mut ctx = Context::from_config(config);

        let sat = Formula::from_ints([vec![1, -2, 3], vec![-1, 2], vec![-3]]).expect("formula");
        assert_eq!(ctx.solve(&sat).map(|r| r.report()), Ok(Report::Satisfiable));

        let unsat = Formula::from_ints([vec![1, 2], vec![1, -2], vec![-1, 3], vec![-1, -3]])
            .expect("formula");
        assert_eq!(
            ctx.solve(&unsat).map(|r| r.report()),
            Ok(Report::Unsatisfiable)
        );
    }

    #[test]
    fn polarity_changes_the_model_not_the_answer() {
        let formula = Formula::from_ints([vec![1, 2], vec![-1, -2]]).expect("formula");

        let positive = Context::default().solve(&formula).expect("solve");
        assert_eq!(positive.valuation().and_then(|v| v.value_of(1)), Some(true));

        let mut config = Config::default();
        config.first_polarity.value = false;
        let negative = Context::from_config(config).solve(&formula).expect("solve");
        assert_eq!(negative.valuation().and_then(|v| v.value_of(1)), Some(false));
        assert_eq!(negative.valuation().and_then(|v| v.value_of(2)), Some(true));
    }
}
