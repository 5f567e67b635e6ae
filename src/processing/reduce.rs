//! Series statistics and column reductions.
//!
//! Every aggregate statistic first passes its input through the numeric filter
//! ([`is_numeric`]): only `Int64` and finite `Float64` values take part, everything else is
//! silently skipped. Statistics over an empty filtered set are NaN, never an error.
//!
//! [`count_unique`] and [`value_counts`] are the exception: they count raw values.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FrameError, FrameResult};
use crate::types::{Frame, Record, Value, ValueKind};

use super::map::column;

/// Number of decimals used by [`describe`].
pub const DESCRIBE_PRECISION: usize = 5;

/// Returns `true` iff `value` can take part in arithmetic.
///
/// Strings are never coerced, even when they look numeric; NaN and infinities are rejected.
pub fn is_numeric(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// The numeric-filtered view of `series`, as floats, in order.
pub fn numeric_values(series: &[Value]) -> Vec<f64> {
    series
        .iter()
        .filter(|v| is_numeric(v))
        .filter_map(Value::as_f64)
        .collect()
}

pub fn sum(series: &[Value]) -> f64 {
    numeric_values(series).iter().sum()
}

pub fn prod(series: &[Value]) -> f64 {
    numeric_values(series).iter().product()
}

/// Arithmetic mean; NaN for an empty filtered set.
pub fn mean(series: &[Value]) -> f64 {
    mean_of(&numeric_values(series))
}

/// Middle value of the sorted filtered set (average of the two middles for even counts).
pub fn median(series: &[Value]) -> f64 {
    let mut values = numeric_values(series);
    if values.is_empty() {
        return f64::NAN;
    }
    // Filtered values are finite, so total_cmp agrees with numeric order.
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Sample standard deviation (denominator `n - 1`); NaN when fewer than two values survive.
pub fn std(series: &[Value]) -> f64 {
    std_of(&numeric_values(series))
}

/// Skewness: mean of cubed z-scores, using the sample [`std`].
pub fn skew(series: &[Value]) -> f64 {
    standardized_moment(&numeric_values(series), 3)
}

/// Excess kurtosis: mean of fourth-power z-scores minus 3.
pub fn kurt(series: &[Value]) -> f64 {
    standardized_moment(&numeric_values(series), 4) - 3.0
}

/// Smallest filtered value. Returns NaN for an empty filtered set.
pub fn min(series: &[Value]) -> f64 {
    numeric_values(series)
        .into_iter()
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

/// Largest filtered value. Returns NaN for an empty filtered set.
pub fn max(series: &[Value]) -> f64 {
    numeric_values(series)
        .into_iter()
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

/// Pearson correlation of two index-aligned series.
///
/// Positions are paired first; pairs where either side fails the numeric filter are dropped.
///
/// # Errors
///
/// Returns [`FrameError::LengthMismatch`] if `a` and `b` have different lengths.
pub fn corr(a: &[Value], b: &[Value]) -> FrameResult<f64> {
    if a.len() != b.len() {
        return Err(FrameError::LengthMismatch {
            operation: "corr",
            expected: a.len(),
            actual: b.len(),
        });
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .zip(b)
        .filter(|(x, y)| is_numeric(x) && is_numeric(y))
        .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
        .unzip();

    let mx = mean_of(&xs);
    let my = mean_of(&ys);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx).powi(2);
        var_y += (y - my).powi(2);
    }
    Ok(cov / (var_x * var_y).sqrt())
}

/// Number of distinct raw values.
///
/// Two values are equal when they share a [`ValueKind`] and render identically, so `1` and
/// `1.0` are one value, NaN equals NaN, and `1` differs from `"1"`.
pub fn count_unique(series: &[Value]) -> usize {
    value_counts(series).len()
}

/// Occurrence count of every distinct raw value, in first-occurrence order.
pub fn value_counts(series: &[Value]) -> Vec<(Value, usize)> {
    let mut slots: HashMap<(ValueKind, String), usize> = HashMap::new();
    let mut out: Vec<(Value, usize)> = Vec::new();
    for v in series {
        let idx = *slots.entry(value_identity(v)).or_insert_with(|| {
            out.push((v.clone(), 0));
            out.len() - 1
        });
        out[idx].1 += 1;
    }
    out
}

/// Raw numeric summary of a series. See [`describe`] for the display form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    /// Raw length of the series.
    pub count: usize,
    pub count_unique: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
    pub std: f64,
}

/// Compute the [`SeriesSummary`] of `series`.
pub fn summarize(series: &[Value]) -> SeriesSummary {
    SeriesSummary {
        count: series.len(),
        count_unique: count_unique(series),
        min: min(series),
        max: max(series),
        median: median(series),
        mean: mean(series),
        std: std(series),
    }
}

/// Single-row summary of `series` for display.
///
/// Columns are `count`, `countUnique` (integers), then `min`, `max`, `median`, `mean`, `std`
/// formatted with [`DESCRIBE_PRECISION`] decimals. Undefined statistics show as `"NaN"`.
pub fn describe(series: &[Value]) -> Record {
    let s = summarize(series);
    let fixed = |x: f64| Value::Utf8(format!("{x:.prec$}", prec = DESCRIBE_PRECISION));

    let mut out = Record::with_capacity(7);
    out.insert("count", Value::Int64(s.count as i64));
    out.insert("countUnique", Value::Int64(s.count_unique as i64));
    out.insert("min", fixed(s.min));
    out.insert("max", fixed(s.max));
    out.insert("median", fixed(s.median));
    out.insert("mean", fixed(s.mean));
    out.insert("std", fixed(s.std));
    out
}

/// Built-in reductions over a single frame column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows, numeric or not.
    Count,
    CountUnique,
    Sum,
    Prod,
    Mean,
    Median,
    Std,
    Skew,
    Kurt,
    Min,
    Max,
}

impl ReduceOp {
    /// Apply the reduction to a series.
    pub fn apply(self, series: &[Value]) -> Value {
        match self {
            ReduceOp::Count => Value::Int64(series.len() as i64),
            ReduceOp::CountUnique => Value::Int64(count_unique(series) as i64),
            ReduceOp::Sum => Value::Float64(sum(series)),
            ReduceOp::Prod => Value::Float64(prod(series)),
            ReduceOp::Mean => Value::Float64(mean(series)),
            ReduceOp::Median => Value::Float64(median(series)),
            ReduceOp::Std => Value::Float64(std(series)),
            ReduceOp::Skew => Value::Float64(skew(series)),
            ReduceOp::Kurt => Value::Float64(kurt(series)),
            ReduceOp::Min => Value::Float64(min(series)),
            ReduceOp::Max => Value::Float64(max(series)),
        }
    }
}

/// Reduce a frame column using a built-in [`ReduceOp`].
///
/// Returns `None` if no row has `column`. Rows lacking the column contribute
/// [`Value::Missing`], which counts toward [`ReduceOp::Count`] but not the numeric statistics.
pub fn reduce(frame: &Frame, column_name: &str, op: ReduceOp) -> Option<Value> {
    if !frame.rows.iter().any(|r| r.contains(column_name)) {
        return None;
    }
    Some(op.apply(&column(frame, column_name)))
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn std_of(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean_of(values);
    let ss: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    (ss / (values.len() as f64 - 1.0)).sqrt()
}

fn standardized_moment(values: &[f64], power: i32) -> f64 {
    let m = mean_of(values);
    let s = std_of(values);
    let total: f64 = values.iter().map(|x| ((x - m) / s).powi(power)).sum();
    total / values.len() as f64
}

fn value_identity(value: &Value) -> (ValueKind, String) {
    (value.kind(), value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;

    fn nums(xs: &[f64]) -> Vec<Value> {
        xs.iter().copied().map(Value::Float64).collect()
    }

    #[test]
    fn numeric_filter_rejects_strings_nan_and_infinity() {
        assert!(is_numeric(&Value::Int64(3)));
        assert!(is_numeric(&Value::Float64(-0.5)));
        assert!(!is_numeric(&Value::from("3")));
        assert!(!is_numeric(&Value::Float64(f64::NAN)));
        assert!(!is_numeric(&Value::Float64(f64::INFINITY)));
        assert!(!is_numeric(&Value::Bool(true)));
        assert!(!is_numeric(&Value::Missing));
    }

    #[test]
    fn mean_median_skip_non_numeric() {
        let s = vec![
            Value::Int64(1),
            Value::from("x"),
            Value::Int64(3),
            Value::Null,
            Value::Float64(8.0),
        ];
        assert_eq!(mean(&s), 4.0);
        assert_eq!(median(&s), 3.0);
        assert_eq!(median(&nums(&[4.0, 1.0, 3.0, 2.0])), 2.5);
    }

    #[test]
    fn empty_filtered_input_yields_nan() {
        let s = vec![Value::from("a"), Value::Null];
        assert!(mean(&s).is_nan());
        assert!(median(&s).is_nan());
        assert!(std(&s).is_nan());
        assert!(skew(&s).is_nan());
        assert!(kurt(&s).is_nan());
        assert!(min(&s).is_nan());
        assert!(max(&s).is_nan());
        assert_eq!(sum(&s), 0.0);
        assert_eq!(prod(&s), 1.0);
    }

    #[test]
    fn std_of_single_value_is_nan() {
        assert!(std(&[Value::Int64(42)]).is_nan());
    }

    #[test]
    fn std_uses_sample_denominator() {
        let s = vec![Value::Int64(7), Value::Int64(3)];
        assert!((std(&s) - 2.8284271247461903).abs() < 1e-12);
    }

    #[test]
    fn bounds_hold_for_numeric_series() {
        let s = nums(&[7.0, 2.0, 30.0, 30.0, 56.0, 75.0]);
        assert!(min(&s) <= mean(&s) && mean(&s) <= max(&s));
        assert!(min(&s) <= median(&s) && median(&s) <= max(&s));
        assert_eq!(sum(&s), 200.0);
        assert_eq!(prod(&nums(&[2.0, 3.0, 4.0])), 24.0);
    }

    #[test]
    fn skew_and_kurt_of_symmetric_series() {
        let s = nums(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(skew(&s).abs() < 1e-12);
        // z-scores use the sample std (sqrt(2.5)): sum(z^4) = 34 / 6.25 = 5.44, / 5 = 1.088.
        assert!((kurt(&s) - (1.088 - 3.0)).abs() < 1e-12);
    }

    #[test]
    fn corr_signals_length_mismatch() {
        let a = vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)];
        let b = vec![Value::Int64(1), Value::Int64(2)];
        let err = corr(&a, &b).unwrap_err();
        assert!(err.is_length_mismatch());
    }

    #[test]
    fn corr_of_linear_series() {
        let a = nums(&[1.0, 2.0, 3.0, 4.0]);
        let b = nums(&[2.0, 4.0, 6.0, 8.0]);
        let c = nums(&[8.0, 6.0, 4.0, 2.0]);
        assert!((corr(&a, &b).unwrap() - 1.0).abs() < 1e-12);
        assert!((corr(&a, &c).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn count_unique_and_value_counts_use_raw_values() {
        let s = vec![
            Value::Int64(1),
            Value::Float64(1.0),
            Value::from("1"),
            Value::Float64(f64::NAN),
            Value::Float64(f64::NAN),
            Value::from("b"),
        ];
        assert_eq!(count_unique(&s), 4);
        let counts = value_counts(&s);
        assert_eq!(counts[0], (Value::Int64(1), 2));
        assert_eq!(counts[1], (Value::from("1"), 1));
        assert_eq!(counts[2].1, 2);
        assert_eq!(counts[3], (Value::from("b"), 1));
    }

    #[test]
    fn describe_formats_fixed_precision() {
        let s: Vec<Value> = [7, 2, 30, 56, 75].into_iter().map(Value::from).collect();
        let d = describe(&s);
        assert_eq!(d.get("count"), Some(&Value::Int64(5)));
        assert_eq!(d.get("countUnique"), Some(&Value::Int64(5)));
        assert_eq!(d.get("min"), Some(&Value::from("2.00000")));
        assert_eq!(d.get("max"), Some(&Value::from("75.00000")));
        assert_eq!(d.get("median"), Some(&Value::from("30.00000")));
        assert_eq!(d.get("mean"), Some(&Value::from("34.00000")));
        assert_eq!(d.get("std"), Some(&Value::from("31.36080")));
    }

    #[test]
    fn describe_shows_nan_for_undefined_statistics() {
        let d = describe(&[Value::from("only text")]);
        assert_eq!(d.get("mean"), Some(&Value::from("NaN")));
        assert_eq!(d.get("count"), Some(&Value::Int64(1)));
    }

    #[test]
    fn reduce_over_frame_column() {
        let df = Frame::new(vec![
            crate::record! { "id" => 1, "score" => 10.0 },
            crate::record! { "id" => 2 },
            crate::record! { "id" => 3, "score" => 5.5 },
        ]);
        assert_eq!(reduce(&df, "score", ReduceOp::Count), Some(Value::Int64(3)));
        assert_eq!(reduce(&df, "score", ReduceOp::Sum), Some(Value::Float64(15.5)));
        assert_eq!(reduce(&df, "score", ReduceOp::Min), Some(Value::Float64(5.5)));
        assert_eq!(reduce(&df, "id", ReduceOp::Max), Some(Value::Float64(3.0)));
        assert_eq!(reduce(&df, "missing", ReduceOp::Count), None);
    }
}
