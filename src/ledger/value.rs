//! Conversion of transfer amounts into arbitrary precision integers.

use num_bigint::BigInt;

use super::events::ScVal;
use crate::validation::ValidationError;

/// Reads a numeric `ScVal` without going through any floating point form.
pub fn to_bigint(value: &ScVal) -> Result<BigInt, ValidationError> {
    let n = match value {
        ScVal::U32(v) => BigInt::from(*v),
        ScVal::I32(v) => BigInt::from(*v),
        ScVal::U64(v) => BigInt::from(*v),
        ScVal::I64(v) => BigInt::from(*v),
        ScVal::U128(parts) => BigInt::from(u128::from(*parts)),
        ScVal::I128(parts) => BigInt::from(i128::from(*parts)),
        ScVal::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidInteger(s.clone()))?,
        other => return Err(ValidationError::NonNumericValue(other.type_name())),
    };
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::events::{Int128Parts, UInt128Parts};

    #[test]
    fn i128_extremes_survive_exactly() {
        let max = ScVal::I128(Int128Parts::from(i128::MAX));
        let min = ScVal::I128(Int128Parts::from(i128::MIN));
        assert_eq!(to_bigint(&max).unwrap().to_string(), i128::MAX.to_string());
        assert_eq!(to_bigint(&min).unwrap().to_string(), i128::MIN.to_string());
    }

    #[test]
    fn u128_above_f64_precision() {
        let raw = 2u128.pow(100) + 1;
        let value = ScVal::U128(UInt128Parts::from(raw));
        assert_eq!(to_bigint(&value).unwrap().to_string(), "1267650600228229401496703205377");
    }

    #[test]
    fn small_integers_and_strings() {
        assert_eq!(to_bigint(&ScVal::U64(u64::MAX)).unwrap().to_string(), u64::MAX.to_string());
        assert_eq!(to_bigint(&ScVal::I32(-4)).unwrap(), BigInt::from(-4));
        assert_eq!(
            to_bigint(&ScVal::String("99999999999999999999999999".to_string()))
                .unwrap()
                .to_string(),
            "99999999999999999999999999"
        );
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(to_bigint(&ScVal::Bool(true)), Err(ValidationError::NonNumericValue("bool")));
        assert!(matches!(
            to_bigint(&ScVal::String("1.5".to_string())),
            Err(ValidationError::InvalidInteger(_))
        ));
    }
}
