//! Property-based tests for Writer laws.
//!
//! ## Mapping Laws
//! - Identity: writer.map(|x| x) == writer
//! - Composition: writer.map(f).map(g) == writer.map(|x| g(f(x)))
//!
//! ## Chaining Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! The chaining laws are checked for a concatenating log, a multiplicative
//! [`Product`] log, an additive `sum_writer` log and a custom log type.
//!
//! ## Log Laws
//! - Tell: tell_log(a).then(tell_log(b)) == tell_log(a.combine(b))
//! - Listen: listen keeps the log and exposes it next to the value

use monadix::effect::{Writer, sum_writer};
use monadix::typeclass::{Combinable, Product, Sum};
use proptest::prelude::*;

fn logs_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,4}", 0..4)
}

fn step(value: i32) -> Writer<Vec<String>, i32> {
    Writer::new(vec![format!("step {value}")], value.wrapping_add(1))
}

fn double(value: i32) -> Writer<Vec<String>, i32> {
    Writer::new(vec![format!("double {value}")], value.wrapping_mul(2))
}

/// Keeps the largest entry seen, with `i64::MIN` as the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Peak(i64);

impl Combinable for Peak {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    fn identity() -> Self {
        Self(i64::MIN)
    }
}

fn scale(factor: i64) -> impl Fn(i64) -> Writer<Product<i64>, i64> {
    move |value| Writer::new(Product::new(factor), value.wrapping_add(factor))
}

fn cost(amount: i64) -> impl Fn(i64) -> Writer<i64, i64> {
    move |value| sum_writer(amount, value.wrapping_sub(amount))
}

fn peak(entry: i64) -> impl Fn(i64) -> Writer<Peak, i64> {
    move |value| Writer::new(Peak(entry), value ^ entry)
}

proptest! {
    #[test]
    fn prop_writer_map_identity(value in -1000i32..1000, logs in logs_strategy()) {
        let writer = Writer::new(logs, value);
        prop_assert_eq!(writer.clone().map(|x| x), writer);
    }

    #[test]
    fn prop_writer_map_composition(value in -1000i32..1000, logs in logs_strategy()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);
        let writer = Writer::new(logs, value);
        prop_assert_eq!(
            writer.clone().map(function1).map(function2),
            writer.map(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_writer_left_identity(value in -1000i32..1000) {
        prop_assert_eq!(Writer::pure(value).flat_map(step), step(value));
    }

    #[test]
    fn prop_writer_right_identity(value in -1000i32..1000, logs in logs_strategy()) {
        let writer = Writer::new(logs, value);
        prop_assert_eq!(writer.clone().flat_map(Writer::pure), writer);
    }

    #[test]
    fn prop_writer_associativity(value in -1000i32..1000, logs in logs_strategy()) {
        let writer = Writer::new(logs, value);
        prop_assert_eq!(
            writer.clone().flat_map(step).flat_map(double),
            writer.flat_map(|x| step(x).flat_map(double))
        );
    }

    #[test]
    fn prop_writer_tell_combines(first in logs_strategy(), second in logs_strategy()) {
        let sequenced = Writer::tell_log(first.clone()).then(Writer::tell_log(second.clone()));
        prop_assert_eq!(sequenced, Writer::tell_log(first.combine(second)));
    }

    #[test]
    fn prop_writer_listen_exposes_log(value in any::<i16>(), logs in logs_strategy()) {
        let (log, (seen, kept)) = Writer::new(logs.clone(), value).listen().into_parts();
        prop_assert_eq!(&log, &logs);
        prop_assert_eq!(seen, logs);
        prop_assert_eq!(kept, value);
    }

    #[test]
    fn prop_sum_and_product_logs(first in 1i64..50, second in 1i64..50) {
        let sum = Writer::tell_log(Sum::new(first)).then(Writer::new(Sum::new(second), ()));
        prop_assert_eq!(sum.log().into_inner(), first + second);

        let product = Writer::tell_log(Product::new(first)).then(Writer::new(Product::new(second), ()));
        prop_assert_eq!(product.log().into_inner(), first * second);
    }

    #[test]
    fn prop_product_log_left_identity(value in -1000i64..1000, factor in -20i64..20) {
        prop_assert_eq!(Writer::pure(value).flat_map(scale(factor)), scale(factor)(value));
    }

    #[test]
    fn prop_product_log_right_identity(value in -1000i64..1000, factor in -20i64..20) {
        let writer = Writer::new(Product::new(factor), value);
        prop_assert_eq!(writer.clone().flat_map(Writer::pure), writer);
    }

    #[test]
    fn prop_product_log_associativity(
        value in -1000i64..1000,
        first in -20i64..20,
        second in -20i64..20,
        third in -20i64..20,
    ) {
        let writer = Writer::new(Product::new(first), value);
        prop_assert_eq!(
            writer.clone().flat_map(scale(second)).flat_map(scale(third)),
            writer.flat_map(|x| scale(second)(x).flat_map(scale(third)))
        );
    }

    #[test]
    fn prop_sum_writer_identities(value in -1000i64..1000, amount in -1_000_000i64..1_000_000) {
        prop_assert_eq!(Writer::pure(value).flat_map(cost(amount)), cost(amount)(value));
        let writer = sum_writer(amount, value);
        prop_assert_eq!(writer.clone().flat_map(Writer::pure), writer);
    }

    #[test]
    fn prop_sum_writer_associativity(
        value in -1000i64..1000,
        first in -1_000_000i64..1_000_000,
        second in -1_000_000i64..1_000_000,
        third in -1_000_000i64..1_000_000,
    ) {
        let writer = sum_writer(first, value);
        prop_assert_eq!(
            writer.clone().flat_map(cost(second)).flat_map(cost(third)),
            writer.flat_map(|x| cost(second)(x).flat_map(cost(third)))
        );
    }

    #[test]
    fn prop_custom_log_identities(value in any::<i64>(), entry in any::<i64>()) {
        prop_assert_eq!(Writer::pure(value).flat_map(peak(entry)), peak(entry)(value));
        let writer = Writer::new(Peak(entry), value);
        prop_assert_eq!(writer.clone().flat_map(Writer::pure), writer);
    }

    #[test]
    fn prop_custom_log_associativity(
        value in any::<i64>(),
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
    ) {
        let writer = Writer::new(Peak(first), value);
        prop_assert_eq!(
            writer.clone().flat_map(peak(second)).flat_map(peak(third)),
            writer.flat_map(|x| peak(second)(x).flat_map(peak(third)))
        );
    }
}
