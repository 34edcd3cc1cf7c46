use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_epoch_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{datetime_to_epoch_millis, decimal_to_f64};

    #[test]
    fn datetime_normalizes_to_epoch_millis() {
        let time = Utc.timestamp_millis_opt(1_700_000_000_123).single().expect("time");
        assert_eq!(datetime_to_epoch_millis(time), 1_700_000_000_123.0);
    }

    #[test]
    fn decimal_converts_to_float() {
        let value = decimal_to_f64(Decimal::new(12_345, 2), "value").expect("convert");
        assert!((value - 123.45).abs() <= 1e-9);
    }
}
