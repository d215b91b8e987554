/// Boolean algebra laws for composed predicates
///
/// Checks that the combinators behave like the operators they are named after
/// over a small exhaustive domain, and that composition with functions keeps
/// those laws.

#[cfg(test)]
mod tests {
    use lambdas::{BiPredicate, Function, Predicate};

    fn divisible_by(n: i32) -> Predicate<i32> {
        Predicate::new(move |x: &i32| x % n == 0)
    }

    const DOMAIN: std::ops::RangeInclusive<i32> = -12..=12;

    #[test]
    fn test_de_morgan_holds() {
        let not_and = divisible_by(2).and(divisible_by(3)).negate();
        let or_not = divisible_by(2).negate().or(divisible_by(3).negate());

        let not_or = divisible_by(2).or(divisible_by(3)).negate();
        let and_not = divisible_by(2).negate().and(divisible_by(3).negate());

        for x in DOMAIN {
            assert_eq!(not_and.test(&x), or_not.test(&x), "x = {x}");
            assert_eq!(not_or.test(&x), and_not.test(&x), "x = {x}");
        }
    }

    #[test]
    fn test_xor_matches_inequality_of_results() {
        let xor = divisible_by(2).xor(divisible_by(3));
        let two = divisible_by(2);
        let three = divisible_by(3);

        for x in DOMAIN {
            assert_eq!(xor.test(&x), two.test(&x) != three.test(&x), "x = {x}");
        }
    }

    #[test]
    fn test_constants_are_identities_and_annihilators() {
        for x in DOMAIN {
            assert_eq!(
                divisible_by(4).and(Predicate::always_true()).test(&x),
                divisible_by(4).test(&x)
            );
            assert!(!divisible_by(4).and(Predicate::always_false()).test(&x));
            assert!(divisible_by(4).or(Predicate::always_true()).test(&x));
            assert_eq!(
                divisible_by(4).or(Predicate::always_false()).test(&x),
                divisible_by(4).test(&x)
            );
        }
    }

    #[test]
    fn test_all_and_any_fold_and_or() {
        let all = Predicate::all(vec![divisible_by(2), divisible_by(3), divisible_by(4)]);
        let folded_and = divisible_by(2).and(divisible_by(3)).and(divisible_by(4));
        let any = Predicate::any(vec![divisible_by(5), divisible_by(7)]);
        let folded_or = divisible_by(5).or(divisible_by(7));

        for x in DOMAIN {
            assert_eq!(all.test(&x), folded_and.test(&x));
            assert_eq!(any.test(&x), folded_or.test(&x));
        }
    }

    #[test]
    fn test_compose_commutes_with_negate() {
        let abs = || Function::new(|x: &i32| x.abs());
        let small = || Predicate::new(|x: &i32| *x < 5);

        let negate_then_compose = small().negate().compose(abs());
        let compose_then_negate = small().compose(abs()).negate();

        for x in DOMAIN {
            assert_eq!(negate_then_compose.test(&x), compose_then_negate.test(&x));
        }
    }

    #[test]
    fn test_memoized_predicate_agrees_with_plain() {
        let memo = divisible_by(3).or(divisible_by(5)).memoized();
        let plain = divisible_by(3).or(divisible_by(5));

        for _ in 0..2 {
            for x in DOMAIN {
                assert_eq!(memo.test(&x), plain.test(&x));
            }
        }

        let stats = memo.stats();
        assert_eq!(stats.misses, DOMAIN.count() as u64);
        assert_eq!(stats.hits, DOMAIN.count() as u64);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bi_predicate_equal_is_symmetric() {
        let equal = BiPredicate::<String, String>::equal();
        let words = ["a", "b", "a"].map(String::from);

        for left in &words {
            for right in &words {
                assert_eq!(equal.test(left, right), equal.test(right, left));
            }
        }
        assert!(equal.test(&words[0], &words[2]));
    }
}
