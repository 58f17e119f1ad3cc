use adequacy::{
    context::{process_program, Context},
    procedures::adequacy::PostProperty,
    structures::program::Program,
    types::err::ErrorKind,
};

fn check(source: &str, opset: &str) -> Result<(bool, Vec<PostProperty>), ErrorKind> {
    let program: Program = source.parse().expect("program parses");
    let mut the_context = Context::default();
    the_context.process_program(&program);

    the_context
        .check_adequacy(opset)
        .map(|report| (report.adequate, report.retained))
}

mod builtin {
    use super::*;

    #[test]
    fn not_and() {
        assert_eq!(
            check("DEFINE OPSET s = { NOT, AND };", "s"),
            Ok((true, vec![]))
        );
    }

    #[test]
    fn not_implies() {
        assert_eq!(
            check("DEFINE OPSET s = { NOT, THEN };", "s"),
            Ok((true, vec![]))
        );
    }

    #[test]
    fn and_or() {
        assert_eq!(
            check("DEFINE OPSET s = { AND, OR };", "s"),
            Ok((
                false,
                vec![
                    PostProperty::PreservesFalse,
                    PostProperty::PreservesTrue,
                    PostProperty::Monotone
                ]
            ))
        );
    }

    #[test]
    fn iff() {
        assert_eq!(
            check("DEFINE OPSET s = { IFF };", "s"),
            Ok((false, vec![PostProperty::PreservesTrue, PostProperty::Affine]))
        );
    }

    #[test]
    fn not() {
        assert_eq!(
            check("DEFINE OPSET s = { not };", "s"),
            Ok((false, vec![PostProperty::SelfDual, PostProperty::Affine]))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            check("DEFINE OPSET s = {};", "s"),
            Ok((false, PostProperty::ALL.to_vec()))
        );
    }
}

mod custom {
    use super::*;

    #[test]
    fn nand() {
        let source = "
            DEFINE OPERATOR nand(a, b) = { (1, 1) -> 0, OTHERWISE -> 1 };
            DEFINE OPSET s = { nand };
        ";
        assert_eq!(check(source, "s"), Ok((true, vec![])));
    }

    #[test]
    fn nor_with_wildcards() {
        let source = "
            DEFINE OPERATOR nor(a, b) = { (1, _) -> 0, (_, 1) -> 0, (0, 0) -> 1 };
            DEFINE OPSET s = { nor };
        ";
        assert_eq!(check(source, "s"), Ok((true, vec![])));
    }

    #[test]
    fn falsum_and_implication() {
        let source = "
            DEFINE OPERATOR bot() = { () -> 0 };
            DEFINE OPSET implication = { IMPLIES };
            DEFINE OPSET with_bot = { IMPLIES, bot };
        ";
        assert_eq!(
            check(source, "implication"),
            Ok((false, vec![PostProperty::PreservesTrue]))
        );
        assert_eq!(check(source, "with_bot"), Ok((true, vec![])));
    }

    #[test]
    fn majority() {
        let source = "
            DEFINE OPERATOR maj(a, b, c) = {
                (1, 1, _) -> 1,
                (1, _, 1) -> 1,
                (_, 1, 1) -> 1,
                OTHERWISE -> 0
            };
            DEFINE OPSET s = { maj, NOT };
        ";
        // Majority is self-dual, as is negation.
        assert_eq!(check(source, "s"), Ok((false, vec![PostProperty::SelfDual])));
    }

    #[test]
    fn first_match_wins() {
        // Read as a conjunction, as the first entry hides the second.
        let source = "
            DEFINE OPERATOR op(a, b) = { (1, 1) -> 1, (1, 1) -> 0, OTHERWISE -> 0 };
            DEFINE OPSET s = { op };
        ";
        assert_eq!(
            check(source, "s"),
            Ok((
                false,
                vec![
                    PostProperty::PreservesFalse,
                    PostProperty::PreservesTrue,
                    PostProperty::Monotone
                ]
            ))
        );
    }

    #[test]
    fn partial_table() {
        let source = "
            DEFINE OPERATOR partial(a) = { (1) -> 0 };
            DEFINE OPSET s = { partial };
            ADEQUATE s;
        ";

        let results = process_program(&source.parse().expect("program parses"));
        assert!(results[0].is_ok());
        assert_eq!(
            results[2].error(),
            Some(&ErrorKind::NoMatchingEntry {
                operator: "partial".to_string(),
                input: vec![false]
            })
        );
    }
}
