//! Primitive specializations
//!
//! Named aliases of the generic interfaces for each primitive value type:
//! `Boolean` (`bool`), `Byte` (`i8`), `Char` (`char`), `Double` (`f64`),
//! `Float` (`f32`), `Int` (`i32`), `Long` (`i64`) and `Short` (`i16`).
//!
//! The aliases are monomorphized like any other use of the generic types, so
//! there is no boxing of the primitive values themselves.

use crate::functional::consumer::Consumer;
use crate::functional::function::Function;
use crate::functional::operator::{BinaryOperator, UnaryOperator};
use crate::functional::predicate::{BiPredicate, Predicate};
use crate::functional::supplier::Supplier;
use crate::functional::throwable::{
    ThrowableConsumer, ThrowableFunction, ThrowablePredicate, ThrowableSupplier,
    ThrowableUnaryOperator,
};

macro_rules! primitive_interfaces {
    (
        $prim:ty => {
            $predicate:ident,
            $bi_predicate:ident,
            $function:ident,
            $to_function:ident,
            $consumer:ident,
            $supplier:ident,
            $unary:ident,
            $binary:ident,
            $throwable_predicate:ident,
            $throwable_function:ident,
            $throwable_to_function:ident,
            $throwable_consumer:ident,
            $throwable_supplier:ident,
            $throwable_unary:ident $(,)?
        }
    ) => {
        #[doc = concat!("[`Predicate`] over `", stringify!($prim), "`.")]
        pub type $predicate = Predicate<$prim>;
        #[doc = concat!("[`BiPredicate`] over two `", stringify!($prim), "` values.")]
        pub type $bi_predicate = BiPredicate<$prim, $prim>;
        #[doc = concat!("[`Function`] from `", stringify!($prim), "`.")]
        pub type $function<R> = Function<$prim, R>;
        #[doc = concat!("[`Function`] producing `", stringify!($prim), "`.")]
        pub type $to_function<T> = Function<T, $prim>;
        #[doc = concat!("[`Consumer`] of `", stringify!($prim), "`.")]
        pub type $consumer = Consumer<$prim>;
        #[doc = concat!("[`Supplier`] of `", stringify!($prim), "`.")]
        pub type $supplier = Supplier<$prim>;
        #[doc = concat!("[`UnaryOperator`] on `", stringify!($prim), "`.")]
        pub type $unary = UnaryOperator<$prim>;
        #[doc = concat!("[`BinaryOperator`] on `", stringify!($prim), "`.")]
        pub type $binary = BinaryOperator<$prim>;
        #[doc = concat!("[`ThrowablePredicate`] over `", stringify!($prim), "`.")]
        pub type $throwable_predicate<E> = ThrowablePredicate<$prim, E>;
        #[doc = concat!("[`ThrowableFunction`] from `", stringify!($prim), "`.")]
        pub type $throwable_function<R, E> = ThrowableFunction<$prim, R, E>;
        #[doc = concat!("[`ThrowableFunction`] producing `", stringify!($prim), "`.")]
        pub type $throwable_to_function<T, E> = ThrowableFunction<T, $prim, E>;
        #[doc = concat!("[`ThrowableConsumer`] of `", stringify!($prim), "`.")]
        pub type $throwable_consumer<E> = ThrowableConsumer<$prim, E>;
        #[doc = concat!("[`ThrowableSupplier`] of `", stringify!($prim), "`.")]
        pub type $throwable_supplier<E> = ThrowableSupplier<$prim, E>;
        #[doc = concat!("[`ThrowableUnaryOperator`] on `", stringify!($prim), "`.")]
        pub type $throwable_unary<E> = ThrowableUnaryOperator<$prim, E>;
    };
}

primitive_interfaces!(bool => {
    BooleanPredicate,
    BooleanBiPredicate,
    BooleanFunction,
    ToBooleanFunction,
    BooleanConsumer,
    BooleanSupplier,
    BooleanUnaryOperator,
    BooleanBinaryOperator,
    ThrowableBooleanPredicate,
    ThrowableBooleanFunction,
    ThrowableToBooleanFunction,
    ThrowableBooleanConsumer,
    ThrowableBooleanSupplier,
    ThrowableBooleanUnaryOperator,
});

primitive_interfaces!(i8 => {
    BytePredicate,
    ByteBiPredicate,
    ByteFunction,
    ToByteFunction,
    ByteConsumer,
    ByteSupplier,
    ByteUnaryOperator,
    ByteBinaryOperator,
    ThrowableBytePredicate,
    ThrowableByteFunction,
    ThrowableToByteFunction,
    ThrowableByteConsumer,
    ThrowableByteSupplier,
    ThrowableByteUnaryOperator,
});

primitive_interfaces!(char => {
    CharPredicate,
    CharBiPredicate,
    CharFunction,
    ToCharFunction,
    CharConsumer,
    CharSupplier,
    CharUnaryOperator,
    CharBinaryOperator,
    ThrowableCharPredicate,
    ThrowableCharFunction,
    ThrowableToCharFunction,
    ThrowableCharConsumer,
    ThrowableCharSupplier,
    ThrowableCharUnaryOperator,
});

primitive_interfaces!(f64 => {
    DoublePredicate,
    DoubleBiPredicate,
    DoubleFunction,
    ToDoubleFunction,
    DoubleConsumer,
    DoubleSupplier,
    DoubleUnaryOperator,
    DoubleBinaryOperator,
    ThrowableDoublePredicate,
    ThrowableDoubleFunction,
    ThrowableToDoubleFunction,
    ThrowableDoubleConsumer,
    ThrowableDoubleSupplier,
    ThrowableDoubleUnaryOperator,
});

primitive_interfaces!(f32 => {
    FloatPredicate,
    FloatBiPredicate,
    FloatFunction,
    ToFloatFunction,
    FloatConsumer,
    FloatSupplier,
    FloatUnaryOperator,
    FloatBinaryOperator,
    ThrowableFloatPredicate,
    ThrowableFloatFunction,
    ThrowableToFloatFunction,
    ThrowableFloatConsumer,
    ThrowableFloatSupplier,
    ThrowableFloatUnaryOperator,
});

primitive_interfaces!(i32 => {
    IntPredicate,
    IntBiPredicate,
    IntFunction,
    ToIntFunction,
    IntConsumer,
    IntSupplier,
    IntUnaryOperator,
    IntBinaryOperator,
    ThrowableIntPredicate,
    ThrowableIntFunction,
    ThrowableToIntFunction,
    ThrowableIntConsumer,
    ThrowableIntSupplier,
    ThrowableIntUnaryOperator,
});

primitive_interfaces!(i64 => {
    LongPredicate,
    LongBiPredicate,
    LongFunction,
    ToLongFunction,
    LongConsumer,
    LongSupplier,
    LongUnaryOperator,
    LongBinaryOperator,
    ThrowableLongPredicate,
    ThrowableLongFunction,
    ThrowableToLongFunction,
    ThrowableLongConsumer,
    ThrowableLongSupplier,
    ThrowableLongUnaryOperator,
});

primitive_interfaces!(i16 => {
    ShortPredicate,
    ShortBiPredicate,
    ShortFunction,
    ToShortFunction,
    ShortConsumer,
    ShortSupplier,
    ShortUnaryOperator,
    ShortBinaryOperator,
    ThrowableShortPredicate,
    ThrowableShortFunction,
    ThrowableToShortFunction,
    ThrowableShortConsumer,
    ThrowableShortSupplier,
    ThrowableShortUnaryOperator,
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_char_predicate_equality() {
        let is_a = CharPredicate::is_equal('a');
        assert!(is_a.test(&'a'));
        assert!(!is_a.test(&'b'));
        assert!(CharPredicate::new(|c| c.is_alphabetic()).negate().test(&'1'));
    }

    #[test]
    fn test_byte_and_short_operators() {
        let wrapping: ByteBinaryOperator = ByteBinaryOperator::new(|a, b| a.wrapping_add(*b));
        assert_eq!(wrapping.apply(&i8::MAX, &1), i8::MIN);

        let abs: ShortUnaryOperator = ShortUnaryOperator::new(|x| x.saturating_abs());
        assert_eq!(abs.apply(&i16::MIN), i16::MAX);
    }

    #[test]
    fn test_double_predicate_memoizes_by_bits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let memo = DoublePredicate::new(move |x| {
            counter.fetch_add(1, Ordering::SeqCst);
            x.is_nan()
        })
        .memoized_by(|x| x.to_bits());

        assert!(memo.test(&f64::NAN));
        assert!(memo.test(&f64::NAN));
        assert!(!memo.test(&0.0));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_int_and_long_functions_convert() {
        let widen: IntFunction<i64> = IntFunction::new(|x| i64::from(*x) * 1_000_000);
        let narrow: ToIntFunction<i64> =
            ToIntFunction::new(|x| i32::try_from(*x).unwrap_or(i32::MAX));
        assert_eq!(narrow.apply(&widen.apply(&5000)), i32::MAX);

        let len: ToLongFunction<String> = ToLongFunction::new(|s: &String| s.len() as i64);
        assert_eq!(len.apply(&"four".to_string()), 4);
    }

    #[test]
    fn test_boolean_and_float_suppliers() {
        let yes: BooleanSupplier = BooleanSupplier::constant(true);
        assert!(yes.get());

        let half = FloatSupplier::new(|| 0.5).memoized();
        assert_eq!(half.get(), 0.5);
    }

    #[test]
    fn test_throwable_int_interfaces() {
        let checked_neg: ThrowableIntUnaryOperator<&'static str> =
            ThrowableIntUnaryOperator::new(|x| x.checked_neg().ok_or("overflow"));
        assert_eq!(checked_neg.try_apply(&5), Ok(-5));
        assert_eq!(checked_neg.try_apply(&i32::MIN), Err("overflow"));

        let parse: ThrowableToIntFunction<String, std::num::ParseIntError> =
            ThrowableToIntFunction::new(|s: &String| s.parse::<i32>());
        assert_eq!(parse.recover(|_, _| -1).apply(&"x".to_string()), -1);

        let positive: ThrowableIntPredicate<&'static str> =
            ThrowableIntPredicate::new(|x| if *x == 0 { Err("zero") } else { Ok(*x > 0) });
        assert_eq!(positive.try_test(&0), Err("zero"));

        let sink: ThrowableLongConsumer<String> = ThrowableLongConsumer::new(|_| Ok(()));
        assert!(sink.try_accept(&1).is_ok());

        let supply: ThrowableShortSupplier<String> = ThrowableShortSupplier::new(|| Ok(7));
        assert_eq!(supply.try_get(), Ok(7));
    }
}
