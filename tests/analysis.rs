use cnf_expr::{
    parser::parse,
    procedures::{assume::assume_true, decompose::decompose},
    structures::{expression::Expression, literal::Literal},
};

fn var(name: &str) -> Literal {
    Literal::new(name, false)
}

fn not_var(name: &str) -> Literal {
    Literal::new(name, true)
}

mod decomposition {
    use super::*;
    use test_log::test;

    #[test]
    fn a_conjunction_of_a_disjunction_and_a_literal() {
        let e = parse("(X || Y) && Z").unwrap();
        let parts = decompose(&e);

        assert_eq!(parts.ands, Some(e.clone()));
        assert_eq!(parts.ors, vec![vec![var("X"), var("Y")]]);
        assert_eq!(parts.literals, vec![var("X"), var("Y"), var("Z")]);
    }

    #[test]
    fn a_single_clause_has_no_ands() {
        let parts = decompose(&parse("X || Y").unwrap());
        assert_eq!(parts.ands, None);
        assert_eq!(parts.ors, vec![vec![var("X"), var("Y")]]);
    }

    #[test]
    fn singleton_clauses_carry_no_disjunctive_information() {
        let parts = decompose(&parse("X && Y").unwrap());
        assert_eq!(parts.ands, Some(parse("X && Y").unwrap()));
        assert!(parts.ors.is_empty());
        assert_eq!(parts.literals, vec![var("X"), var("Y")]);
    }

    #[test]
    fn views_are_deduplicated() {
        let e = parse("(a || b) && (a || b) && a").unwrap();
        let parts = decompose(&e);

        assert_eq!(parts.ors, vec![vec![var("a"), var("b")]]);
        assert_eq!(parts.literals, vec![var("a"), var("b")]);
    }

    #[test]
    fn a_variable_and_its_negation_are_distinct() {
        let parts = decompose(&parse("a && !a").unwrap());
        assert_eq!(parts.literals, vec![var("a"), not_var("a")]);
    }

    #[test]
    fn the_empty_expression_decomposes_to_nothing() {
        let parts = decompose(&parse("").unwrap());
        assert_eq!(parts.ands, None);
        assert!(parts.ors.is_empty());
        assert!(parts.literals.is_empty());
    }
}

mod assumption {
    use super::*;
    use test_log::test;

    #[test]
    fn a_literal_fact_satisfies_its_clause() {
        let e = parse("a && c").unwrap();
        let reduced = assume_true(&e, &parse("a && b").unwrap());
        assert_eq!(reduced.as_string(), "c");
    }

    #[test]
    fn a_fact_inside_a_disjunction_drops_the_clause() {
        let e = parse("(a || b) && c").unwrap();
        let reduced = assume_true(&e, &parse("b && c").unwrap());
        assert_eq!(reduced.as_string(), "");
    }

    #[test]
    fn a_restated_clause_is_dropped_whole() {
        let e = parse("(a || b) && c").unwrap();
        let reduced = assume_true(&e, &parse("a || b").unwrap());
        assert_eq!(reduced.as_string(), "c");
    }

    #[test]
    fn a_negated_fact_matches_only_a_negated_literal() {
        let e = parse("(!a) && b").unwrap();
        assert_eq!(assume_true(&e, &parse("!a").unwrap()).as_string(), "b");

        // assuming 'a' says nothing about a clause over '!a'
        assert_eq!(
            assume_true(&e, &parse("a").unwrap()).as_string(),
            "(!a) && b",
        );
    }

    #[test]
    fn an_unrelated_assumption_keeps_everything() {
        let e = parse("a && b").unwrap();
        assert_eq!(assume_true(&e, &parse("x").unwrap()), e);
    }

    #[test]
    fn kept_clauses_preserve_their_order() {
        let e = parse("x && (a || z) && y").unwrap();
        let reduced = assume_true(&e, &parse("a").unwrap());
        assert_eq!(reduced.as_string(), "x && y");
    }

    #[test]
    fn the_assumption_may_be_empty() {
        let e = parse("a && b").unwrap();
        assert_eq!(assume_true(&e, &parse("").unwrap()), e);
    }
}
