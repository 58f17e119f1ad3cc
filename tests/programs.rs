use std::{cell::RefCell, rc::Rc};

use adequacy::{
    builder::{parse_program, read_program},
    config::Config,
    context::Context,
    db::Namespace,
    dispatch::{
        library::{delta::Delta, report::Report},
        Dispatch,
    },
    structures::{
        connective::BinaryOperator,
        expression::Expression,
        program::{Program, Statement, StatementKind},
        valuation::Valuation,
    },
    types::err::{ErrorKind, ParseError},
};

mod errors {
    use super::*;

    #[test]
    fn failures_do_not_stop_processing() {
        let mut the_context = Context::default();
        let results = the_context
            .read_program(
                "
                DEFINE VARIABLE p;
                DEFINE FORMULA f = p & q;
                DEFINE VARIABLE q;
                DEFINE FORMULA f = p & q;
                EVALUATE f WITH v;
                DEFINE OPSET s = { AND, nand };
                ADEQUATE s;
                "
                .as_bytes(),
            )
            .expect("program parses");

        assert_eq!(results.len(), 7);
        assert_eq!(
            results[1].error(),
            Some(&ErrorKind::UnknownIdentifier {
                namespace: Namespace::Variable,
                name: "q".to_string()
            })
        );
        assert!(results[3].is_ok());
        assert_eq!(
            results[4].error(),
            Some(&ErrorKind::UnknownIdentifier {
                namespace: Namespace::Valuation,
                name: "v".to_string()
            })
        );
        assert_eq!(
            results[5].error(),
            Some(&ErrorKind::UnknownIdentifier {
                namespace: Namespace::Operator,
                name: "nand".to_string()
            })
        );
        assert_eq!(
            results[6].error(),
            Some(&ErrorKind::UnknownIdentifier {
                namespace: Namespace::Opset,
                name: "s".to_string()
            })
        );

        assert_eq!(the_context.counters.statements, 7);
        assert_eq!(the_context.counters.failures, 4);
    }

    #[test]
    fn arity_mismatch() {
        let mut the_context = Context::default();
        let results = the_context
            .read_program(
                "
                DEFINE VARIABLE p;
                DEFINE OPERATOR id(a) = { (1) -> 1, (0) -> 0 };
                DEFINE FORMULA f = id(p, p);
                "
                .as_bytes(),
            )
            .expect("program parses");

        assert_eq!(
            results[2].error(),
            Some(&ErrorKind::ArityMismatch {
                operator: "id".to_string(),
                expected: 1,
                found: 2
            })
        );
        assert!(!the_context.symbols.formulas.contains("f"));
    }

    #[test]
    fn halt_on_error() {
        let mut config = Config::default();
        config.halt_on_error.value = true;

        let dispatches = Rc::new(RefCell::new(Vec::new()));
        let dispatches_clone = dispatches.clone();

        let mut the_context = Context::from_config(config);
        the_context.set_dispatcher(Rc::new(move |dispatch: Dispatch| {
            dispatches_clone.borrow_mut().push(dispatch)
        }));

        let results = the_context
            .read_program(
                "
                DEFINE VARIABLE p;
                DEFINE VARIABLE p;
                DEFINE VARIABLE q;
                "
                .as_bytes(),
            )
            .expect("program parses");

        assert_eq!(results.len(), 2);
        assert!(!the_context.symbols.variables.contains("q"));

        let dispatches = dispatches.borrow();
        assert!(matches!(
            dispatches.first(),
            Some(Dispatch::Delta(Delta::Declared { index: 0, .. }))
        ));
        assert!(dispatches
            .iter()
            .any(|dispatch| matches!(dispatch, Dispatch::Report(Report::Halted(1)))));
        assert!(matches!(
            dispatches.last(),
            Some(Dispatch::Report(Report::Finish))
        ));
    }

    #[test]
    fn valuation_errors() {
        let mut the_context = Context::default();
        let results = the_context
            .read_program(
                "
                DEFINE VARIABLE p, q;
                DEFINE VALUATION v = { p: true, q: false, p: false };
                DEFINE VALUATION v = { p: true, r: true };
                DEFINE VALUATION v = { q: true };
                "
                .as_bytes(),
            )
            .expect("program parses");

        assert_eq!(
            results[1].error(),
            Some(&ErrorKind::DuplicateDeclaration {
                namespace: Namespace::Variable,
                name: "p".to_string()
            })
        );
        assert_eq!(
            results[2].error(),
            Some(&ErrorKind::UnknownIdentifier {
                namespace: Namespace::Variable,
                name: "r".to_string()
            })
        );
        assert!(results[3].is_ok());

        let v = the_context.symbols.valuations.resolve("v").expect("declared");
        assert_eq!(v.value_of("q"), Some(true));
        assert_eq!(v.value_of("p"), None);
    }

    #[test]
    fn deep_nesting() {
        let depth = 20_000;
        let source = format!("DEFINE VARIABLE p; DEFINE FORMULA f = {}p{};", "(".repeat(depth), ")".repeat(depth));

        let mut the_context = Context::default();
        assert!(matches!(
            the_context.read_program(source.as_bytes()),
            Err(ErrorKind::Parse(ParseError::TooDeep { line: 1, limit: 256, .. }))
        ));
        assert_eq!(the_context.counters.statements, 0);
    }

    #[test]
    fn formula_references_count_towards_depth() {
        let mut config = Config::default();
        assert!(config.max_expression_depth.set(8).is_ok());
        let mut the_context = Context::from_config(config);

        let mut source = "DEFINE VARIABLE p; DEFINE VALUATION v = { p: true }; DEFINE FORMULA f0 = p;".to_string();
        for k in 1..5 {
            source.push_str(&format!(" DEFINE FORMULA f{k} = !@f{};", k - 1));
        }
        source.push_str(" EVALUATE f3 WITH v;");

        let results = the_context.read_program(source.as_bytes()).expect("program parses");
        assert!(results[3..6].iter().all(|result| result.is_ok()));
        assert_eq!(
            results[6].error(),
            Some(&ErrorKind::DepthLimit { depth: 9, limit: 8 })
        );
        assert!(!the_context.symbols.formulas.contains("f4"));
        assert_eq!(results[7].value(), Some(false));

        let deeper = Expression::negation(Expression::formula("f3"));
        assert_eq!(
            the_context.evaluate_expression(&deeper, "v"),
            Err(ErrorKind::DepthLimit { depth: 9, limit: 8 })
        );
        assert_eq!(
            the_context.evaluate_expression(&Expression::formula("f3"), "v"),
            Ok(false)
        );
    }

    #[test]
    fn parse_errors() {
        let config = Config::default();

        assert_eq!(
            parse_program("DEFINE VARIABLE p;\nDEFINE FORMULA f = p &;", &config),
            Err(ParseError::Unexpected {
                line: 2,
                column: 23,
                expected: "an expression".to_string(),
                found: "';'".to_string()
            })
        );

        assert!(matches!(
            parse_program("DEFINE VARIABLE p; /* unfinished", &config),
            Err(ParseError::UnterminatedComment { line: 1, column: 20 })
        ));

        let mut the_context = Context::default();
        assert!(matches!(
            the_context.read_program("EVALUATE f".as_bytes()),
            Err(ErrorKind::Parse(ParseError::UnexpectedEnd { .. }))
        ));
        assert_eq!(the_context.counters.statements, 0);
    }
}

mod context {
    use super::*;

    #[test]
    fn indices_continue_across_programs() {
        let mut the_context = Context::default();

        let first = the_context
            .read_program("DEFINE VARIABLE p; DEFINE VARIABLE q;".as_bytes())
            .expect("program parses");
        let second = the_context
            .read_program("define variable r;".as_bytes())
            .expect("program parses");

        assert_eq!(first[1].index, 1);
        assert_eq!(second[0].index, 2);
        assert_eq!(second[0].kind, StatementKind::DefineVariable);
        assert_eq!(the_context.symbols.declaration_count(), 3);
    }

    #[test]
    fn namespaces_are_separate() {
        let mut the_context = Context::default();
        let results = the_context
            .read_program(
                "
                DEFINE VARIABLE x;
                DEFINE FORMULA x = x;
                DEFINE VALUATION x = { x: true };
                DEFINE OPERATOR x() = { () -> 1 };
                DEFINE OPSET x = { x };
                EVALUATE x WITH x;
                ADEQUATE x;
                "
                .as_bytes(),
            )
            .expect("program parses");

        assert!(results.iter().all(|result| result.is_ok()));
        assert_eq!(results[5].value(), Some(true));
    }

    #[test]
    fn multiple_files() {
        let config = Config::default();
        let mut program =
            read_program("DEFINE VARIABLE p;".as_bytes(), &config).expect("program parses");
        program.extend(
            read_program("DEFINE FORMULA f = !p;".as_bytes(), &config).expect("program parses"),
        );

        assert_eq!(program.len(), 2);
        assert!(matches!(
            program.statements[1],
            Statement::DefineFormula { .. }
        ));
    }
}

mod random {
    use super::*;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    const VARIABLES: [&str; 3] = ["p", "q", "r"];

    fn random_expression(rng: &mut StdRng, depth: usize) -> Expression {
        if depth == 0 || rng.gen_bool(0.2) {
            return Expression::variable(VARIABLES[rng.gen_range(0..VARIABLES.len())]);
        }

        match rng.gen_range(0..5) {
            0 => Expression::negation(random_expression(rng, depth - 1)),
            n => {
                let operator = match n {
                    1 => BinaryOperator::And,
                    2 => BinaryOperator::Or,
                    3 => BinaryOperator::Implies,
                    _ => BinaryOperator::Iff,
                };
                Expression::binary(
                    operator,
                    random_expression(rng, depth - 1),
                    random_expression(rng, depth - 1),
                )
            }
        }
    }

    fn reference(expression: &Expression, valuation: &Valuation) -> bool {
        match expression {
            Expression::Variable(name) => valuation.value_of(name).unwrap(),
            Expression::Negation(e) => !reference(e, valuation),
            Expression::BinaryOp {
                operator,
                left,
                right,
            } => {
                let (l, r) = (reference(left, valuation), reference(right, valuation));
                match operator {
                    BinaryOperator::And => l && r,
                    BinaryOperator::Or => l || r,
                    BinaryOperator::Implies => !l || r,
                    BinaryOperator::Iff => l == r,
                }
            }
            Expression::Custom(_) => panic!("no custom applications are generated"),
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..64 {
            let expression = random_expression(&mut rng, 5);
            let assignments = VARIABLES
                .iter()
                .map(|v| (v.to_string(), rng.gen_bool(0.5)))
                .collect::<Vec<_>>();

            let program = Program::new(vec![
                Statement::DefineVariable(VARIABLES.iter().map(|v| v.to_string()).collect()),
                Statement::DefineFormula {
                    name: "f".to_string(),
                    expression: expression.clone(),
                },
                Statement::DefineValuation {
                    name: "v".to_string(),
                    assignments: assignments.clone(),
                },
                Statement::Evaluate {
                    formula: "f".to_string(),
                    valuation: "v".to_string(),
                },
                Statement::Evaluate {
                    formula: "f".to_string(),
                    valuation: "v".to_string(),
                },
            ]);

            let mut the_context = Context::default();
            let results = the_context.process_program(&program);

            let expected = reference(&expression, &Valuation::new("v", assignments));
            assert_eq!(results[3].value(), Some(expected));
            assert_eq!(results[4].value(), Some(expected));
        }
    }

    #[test]
    fn printed_expressions_parse() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..64 {
            let expression = random_expression(&mut rng, 4);
            let source = format!("DEFINE FORMULA f = {expression};");
            let program = parse_program(&source, &Config::default()).expect("program parses");

            match &program.statements[0] {
                Statement::DefineFormula { expression: e, .. } => assert_eq!(e, &expression),
                _ => panic!("expected a formula"),
            }
        }
    }
}
