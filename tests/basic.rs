use adequacy::{
    config::Config,
    context::{process_program, Context},
    db::Namespace,
    procedures::process::Outcome,
    structures::{
        expression::Expression,
        program::{Program, Statement},
    },
    types::err::ErrorKind,
};

fn statements_of(source: &str) -> Program {
    source.parse().expect("program parses")
}

mod basic {

    use super::*;

    #[test]
    fn conjunction() {
        let mut the_context = Context::from_config(Config::default());
        let results = the_context.process_program(&statements_of(
            "
            DEFINE VARIABLE p, q;
            DEFINE FORMULA f = p AND q;
            DEFINE VALUATION v = { p: true, q: false };
            EVALUATE f WITH v;
            ",
        ));

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|result| result.is_ok()));
        assert_eq!(results[3].value(), Some(false));
        assert_eq!(the_context.evaluate("f", "v"), Ok(false));
    }

    #[test]
    fn builtin_connectives() {
        let program = statements_of(
            "
            DEFINE VARIABLE p, q;
            DEFINE FORMULA not_p = !p;
            DEFINE FORMULA disjunction = p | q;
            DEFINE FORMULA implication = p -> q;
            DEFINE FORMULA equivalence = p <-> q;
            DEFINE VALUATION tf = { p: true, q: false };
            DEFINE VALUATION ft = { p: false, q: true };
            ",
        );

        let mut the_context = Context::default();
        the_context.process_program(&program);

        assert_eq!(the_context.evaluate("not_p", "tf"), Ok(false));
        assert_eq!(the_context.evaluate("disjunction", "tf"), Ok(true));
        assert_eq!(the_context.evaluate("implication", "tf"), Ok(false));
        assert_eq!(the_context.evaluate("implication", "ft"), Ok(true));
        assert_eq!(the_context.evaluate("equivalence", "tf"), Ok(false));
        assert_eq!(the_context.evaluate("equivalence", "ft"), Ok(false));
    }

    #[test]
    fn formula_references() {
        let mut the_context = Context::default();
        the_context.process_program(&statements_of(
            "
            DEFINE VARIABLE p, q;
            DEFINE FORMULA g = p | q;
            DEFINE FORMULA f = !@g;
            DEFINE VALUATION v = { p: false, q: false };
            ",
        ));

        assert_eq!(the_context.evaluate("g", "v"), Ok(false));
        assert_eq!(the_context.evaluate("f", "v"), Ok(true));
    }

    #[test]
    fn custom_operator() {
        let mut the_context = Context::default();
        the_context.process_program(&statements_of(
            "
            DEFINE VARIABLE p, q;
            DEFINE OPERATOR nand(a, b) = { (1, 1) -> 0, OTHERWISE -> 1 };
            DEFINE FORMULA f = nand(p, q);
            DEFINE VALUATION tt = { p: true, q: true };
            DEFINE VALUATION tf = { p: true, q: false };
            ",
        ));

        assert_eq!(the_context.evaluate("f", "tt"), Ok(false));
        assert_eq!(the_context.evaluate("f", "tf"), Ok(true));
    }

    #[test]
    fn expression_without_declaration() {
        let mut the_context = Context::default();
        the_context.process_program(&statements_of(
            "
            DEFINE VARIABLE p;
            DEFINE VALUATION v = { p: true };
            ",
        ));

        let e = Expression::negation(Expression::negation(Expression::variable("p")));
        assert_eq!(the_context.evaluate_expression(&e, "v"), Ok(true));

        let unbound = Expression::variable("q");
        assert_eq!(
            the_context.evaluate_expression(&unbound, "v"),
            Err(ErrorKind::UnboundVariable {
                variable: "q".to_string()
            })
        );
    }

    #[test]
    fn unbound_variable() {
        let results = process_program(&statements_of(
            "
            DEFINE VARIABLE p, q;
            DEFINE FORMULA f = p & q;
            DEFINE VALUATION v = { p: true };
            EVALUATE f WITH v;
            ",
        ));

        assert_eq!(
            results[3].error(),
            Some(&ErrorKind::UnboundVariable {
                variable: "q".to_string()
            })
        );
    }

    #[test]
    fn statements_from_structures() {
        let program = Program::new(vec![
            Statement::DefineVariable(vec!["p".to_string()]),
            Statement::DefineFormula {
                name: "f".to_string(),
                expression: Expression::variable("p"),
            },
        ]);

        let results = process_program(&program);
        assert_eq!(results[0].index, 0);
        assert_eq!(results[1].index, 1);

        match &results[1].outcome {
            Ok(Outcome::Declared(declaration)) => {
                assert_eq!(declaration.namespace, Namespace::Formula);
                assert_eq!(declaration.names, vec!["f".to_string()]);
            }
            _ => panic!("formula declaration failed"),
        }
    }
}
