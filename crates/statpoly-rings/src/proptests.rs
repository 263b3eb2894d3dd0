//! Property-based tests for coefficient domains.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::division::{integer_power, DivisionStrategy, FieldDivision, PseudoDivision};
    use crate::tolerance::Tolerance;
    use crate::traits::{Classify, Ring, Sign};
    use crate::{Q, Z};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
    }

    proptest! {
        #[test]
        fn z_matches_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!((Z::new(a) + Z::new(b)).to_i64(), Some(a + b));
            prop_assert_eq!((Z::new(a) - Z::new(b)).to_i64(), Some(a - b));
            prop_assert_eq!((Z::new(a) * Z::new(b)).to_i64(), Some(a * b));
        }

        #[test]
        fn z_division_truncates_like_i64(a in small_int(), b in non_zero_int()) {
            prop_assert_eq!((Z::new(a) / Z::new(b)).to_i64(), Some(a / b));
        }

        #[test]
        fn q_division_inverts_multiplication(a in small_int(), b in non_zero_int(), c in non_zero_int()) {
            let x = Q::new(a, c);
            let y = Q::from_integer(b);
            prop_assert_eq!((x.clone() * y.clone()) / y, x);
        }

        #[test]
        fn integer_power_matches_ring_pow(base in -6i64..6i64, n in 0usize..10usize) {
            prop_assert_eq!(integer_power(&base, n), Ring::pow(&base, n as u32));
            prop_assert_eq!(integer_power(&Z::new(base), n), Ring::pow(&Z::new(base), n as u32));
        }

        #[test]
        fn sign_is_antisymmetric(a in small_int()) {
            prop_assert_eq!(Classify::sign(&-a), -Classify::sign(&a));
            prop_assert_eq!(Z::new(-a).sign(), -Z::new(a).sign());
        }

        #[test]
        fn float_sign_respects_tolerance(v in -1e-12f64..1e-12f64) {
            prop_assert_eq!(Classify::sign(&v), Sign::Zero);
        }

        #[test]
        fn small_floats_are_not_ring_zero(v in 1e-300f64..1e-11f64) {
            prop_assert!(!Ring::is_zero(&v));
            prop_assert!(!Ring::is_zero(&-v));
            prop_assert!(v.is_zero_within(&Tolerance::DEFAULT));
        }

        #[test]
        fn linear_division_steps_agree(root in -20i64..20i64, lead in 1i64..5i64, c in -20i64..20i64) {
            // u = lead·x + c divided by v = x - root, via both strategies.
            // Field: q = lead, r = c + lead·root. Pseudo (lc(v) = 1): same.
            let mut uf = [c as f64, lead as f64];
            let mut qf = [0.0f64];
            FieldDivision::eliminate(&mut qf, &mut uf, &[-root as f64, 1.0], 1, 0);

            let mut ui = [c, lead];
            let mut qi = [0i64];
            PseudoDivision::eliminate(&mut qi, &mut ui, &[-root, 1], 1, 0);

            prop_assert_eq!(qi[0], lead);
            prop_assert_eq!(ui[0], c + lead * root);
            prop_assert_eq!(qf[0], lead as f64);
            prop_assert_eq!(uf[0], (c + lead * root) as f64);
        }
    }
}
