//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::poly::Poly;
    use statpoly_rings::rationals::Q;
    use statpoly_rings::traits::Ring;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    fn nonzero_coeff() -> impl Strategy<Value = Q> {
        prop_oneof![(-9i64..=-1i64), (1i64..=9i64)].prop_map(Q::from_integer)
    }

    // Polynomials of degree at most 3
    fn small_poly() -> impl Strategy<Value = Poly<Q, 4>> {
        proptest::collection::vec(small_coeff(), 0..=4).prop_map(Poly::from_coeffs)
    }

    // Quadratics with a non-zero leading coefficient, so no headroom
    fn quadratic() -> impl Strategy<Value = Poly<Q, 3>> {
        (small_coeff(), small_coeff(), nonzero_coeff()).prop_map(|(a, b, c)| Poly::new([a, b, c]))
    }

    fn small_int_poly() -> impl Strategy<Value = Poly<i64, 4>> {
        proptest::collection::vec(-20i64..20i64, 0..=4).prop_map(Poly::from_coeffs)
    }

    fn int_quadratic() -> impl Strategy<Value = Poly<i64, 3>> {
        (-20i64..20i64, -20i64..20i64, prop_oneof![(-5i64..=-1i64), (1i64..=5i64)])
            .prop_map(|(a, b, c)| Poly::new([a, b, c]))
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            let ab: Poly<Q, 7> = a.mul_poly(&b);
            let ba: Poly<Q, 7> = b.mul_poly(&a);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let ab: Poly<Q, 7> = a.mul_poly(&b);
            let bc: Poly<Q, 7> = b.mul_poly(&c);
            let left: Poly<Q, 10> = ab.mul_poly(&c);
            let right: Poly<Q, 10> = a.mul_poly(&bc);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left: Poly<Q, 7> = a.mul_poly(&(b.clone() + c.clone()));
            let ab: Poly<Q, 7> = a.mul_poly(&b);
            let ac: Poly<Q, 7> = a.mul_poly(&c);
            prop_assert_eq!(left, ab + ac);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((a.clone() + -a).is_zero());
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Poly::<Q, 1>::one();
            let p: Poly<Q, 4> = a.mul_poly(&one);
            prop_assert_eq!(p, a);
        }

        // Degree

        #[test]
        fn poly_degree_of_product(a in small_poly(), b in small_poly()) {
            let ab: Poly<Q, 7> = a.mul_poly(&b);
            match (a.degree(), b.degree()) {
                (Some(da), Some(db)) => prop_assert_eq!(ab.degree(), Some(da + db)),
                _ => prop_assert!(ab.is_zero()),
            }
        }

        #[test]
        fn poly_degree_of_sum(a in small_poly(), b in small_poly()) {
            let sum = a.clone() + b.clone();
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        #[test]
        fn poly_headroom_is_invisible(a in small_poly(), b in quadratic()) {
            let wide: Poly<Q, 6> = a.widen();
            let tight: Poly<Q, 6> = a.mul_poly(&b);
            let loose: Poly<Q, 8> = wide.mul_poly(&b);
            prop_assert_eq!(tight, loose);
        }

        // Division

        #[test]
        fn poly_field_division_identity(a in small_poly(), b in quadratic()) {
            let (q, r): (Poly<Q, 2>, Poly<Q, 3>) = a.div_rem(&b);
            prop_assert!(r.degree() < b.degree());

            let qb: Poly<Q, 4> = q.mul_poly(&b);
            let recombined: Poly<Q, 4> = qb.add_poly(&r);
            prop_assert_eq!(recombined, a);
        }

        #[test]
        fn poly_mul_then_divide(a in small_poly(), b in quadratic()) {
            let ab: Poly<Q, 6> = a.mul_poly(&b);
            let (q, r): (Poly<Q, 4>, Poly<Q, 3>) = ab.div_rem(&b);
            prop_assert_eq!(q, a);
            prop_assert!(r.is_zero());
        }

        #[test]
        fn poly_pseudo_division_identity(a in small_int_poly(), b in int_quadratic()) {
            let (q, r): (Poly<i64, 2>, Poly<i64, 3>) = a.div_rem(&b);
            prop_assert!(r.degree() < b.degree());

            // lc(b)^(m - n + 1) · a, or a itself when the division short-circuits
            let scale = match a.degree() {
                Some(m) if m >= 2 => b[2].pow((m - 1) as u32),
                _ => 1,
            };
            let qb: Poly<i64, 4> = q.mul_poly(&b);
            let recombined: Poly<i64, 4> = qb.add_poly(&r);
            prop_assert_eq!(recombined, a * scale);
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_eval_homomorphism(a in small_int_poly(), b in small_int_poly(), z in -5i64..5i64) {
            let sum = a.clone() + b.clone();
            prop_assert_eq!(sum.eval(&z), a.eval(&z) + b.eval(&z));

            let product: Poly<i64, 7> = a.mul_poly(&b);
            prop_assert_eq!(product.eval(&z), a.eval(&z) * b.eval(&z));
        }

        // Exponentiation

        #[test]
        fn poly_pow_zero_is_one(a in small_poly()) {
            prop_assert!(a.pow::<0, 1>().coeffs()[0].is_one());
        }

        #[test]
        fn poly_pow_recurrence(a in small_poly()) {
            let p2: Poly<Q, 8> = a.pow::<2, 8>();
            let p3: Poly<Q, 12> = a.pow::<3, 12>();
            let step: Poly<Q, 11> = a.mul_poly(&p2);
            prop_assert_eq!(p3, step);
        }

        // Ordering

        #[test]
        fn poly_order_is_total(a in small_int_poly(), b in small_int_poly()) {
            let relations = [a < b, a == b, a > b];
            prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        }

        #[test]
        fn poly_order_is_transitive(a in small_int_poly(), b in small_int_poly(), c in small_int_poly()) {
            if a < b && b < c {
                prop_assert!(a < c);
            }
        }

        #[test]
        fn poly_order_is_degree_first(a in small_int_poly(), b in small_int_poly()) {
            if a.degree() < b.degree() {
                prop_assert!(a < b);
            }
            if !a.is_zero() {
                prop_assert!(Poly::<i64, 4>::zero() < a);
            }
        }
    }
}
