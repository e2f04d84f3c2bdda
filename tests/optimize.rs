use cnf_expr::{
    parser::parse,
    procedures::optimize::optimize,
    structures::{expression::Expression, literal::Literal},
};

fn var(name: &str) -> Literal {
    Literal::new(name, false)
}

mod canonicalization {
    use super::*;
    use test_log::test;

    #[test]
    fn clauses_are_sorted() {
        let e = optimize(&parse("Z && !X && Y").unwrap());
        assert_eq!(e.as_string(), "(!X) && Y && Z");
    }

    #[test]
    fn duplicate_literals_collapse() {
        let e = optimize(&parse("X || Y || X").unwrap());
        assert_eq!(e.as_string(), "X || Y");
    }

    #[test]
    fn duplicate_clauses_collapse() {
        let e = optimize(&parse("a && b && a").unwrap());
        assert_eq!(e.as_string(), "a && b");
    }

    #[test]
    fn literal_order_does_not_distinguish_clauses() {
        let scrambled = vec![
            vec![var("x"), var("y")],
            vec![var("y"), var("x")],
        ];
        assert_eq!(optimize(&scrambled), vec![vec![var("x"), var("y")]]);
    }

    #[test]
    fn first_occurrence_of_a_clause_wins() {
        let e = optimize(&parse("(a || b) && (b || a) && a").unwrap());
        assert_eq!(e.as_string(), "a && (a || b)");
    }

    #[test]
    fn negation_does_not_affect_the_literal_sort() {
        let e = optimize(&parse("b || !a || a").unwrap());
        assert_eq!(e.as_string(), "(!a) || a || b");
    }

    #[test]
    fn no_tautology_detection() {
        let e = optimize(&parse("x || !x").unwrap());
        assert_eq!(e.as_string(), "x || (!x)");
    }

    #[test]
    fn idempotent() {
        for source in [
            "",
            "Z && !X && Y",
            "X || Y || X",
            "(a || b) && (b || a) && a",
            "(x && y) || (z && w)",
        ] {
            let once = optimize(&parse(source).unwrap());
            assert_eq!(optimize(&once), once, "a second pass changed {source}");
        }
    }

    #[test]
    fn empty_expression_is_untouched() {
        assert_eq!(optimize(&parse("").unwrap()), parse("").unwrap());
    }

    #[test]
    fn the_input_is_unchanged() {
        let e = parse("Z && !X && Y").unwrap();
        let _ = optimize(&e);
        assert_eq!(e, parse("Z && !X && Y").unwrap());
    }
}
