//! Index-aligned series transforms: period-over-period changes and windowed application.

use std::fmt;

use crate::types::Value;

use super::reduce::is_numeric;

/// Rendered form of [`Windowed::Insufficient`].
pub const INSUFFICIENT_WINDOW: &str = "NaN";

/// One output slot of [`rolling`].
#[derive(Debug, Clone, PartialEq)]
pub enum Windowed<T> {
    /// Fewer than `window_size` elements precede this position. This is a marker, not a NaN
    /// float; it renders as [`INSUFFICIENT_WINDOW`].
    Insufficient,
    /// The window function's result for a full trailing window.
    Full(T),
}

impl<T> Windowed<T> {
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Windowed::Insufficient)
    }

    /// The computed value, if the window was full.
    pub fn full(self) -> Option<T> {
        match self {
            Windowed::Insufficient => None,
            Windowed::Full(v) => Some(v),
        }
    }
}

impl<T: Into<Value>> Windowed<T> {
    /// Convert to a [`Value`]; the placeholder becomes `Utf8("NaN")`.
    pub fn into_value(self) -> Value {
        match self {
            Windowed::Insufficient => Value::Utf8(INSUFFICIENT_WINDOW.to_string()),
            Windowed::Full(v) => v.into(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Windowed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Windowed::Insufficient => f.write_str(INSUFFICIENT_WINDOW),
            Windowed::Full(v) => v.fmt(f),
        }
    }
}

/// Relative change from the previous element: `s[i] / s[i-1] - 1`.
///
/// Position 0 is NaN, as is any position where either operand is non-numeric.
pub fn pct_change(series: &[Value]) -> Vec<f64> {
    pairwise(series, |prev, cur| cur / prev - 1.0)
}

/// Absolute change from the previous element: `s[i] - s[i-1]`.
///
/// Position 0 is NaN, as is any position where either operand is non-numeric.
pub fn diff(series: &[Value]) -> Vec<f64> {
    pairwise(series, |prev, cur| cur - prev)
}

/// Apply `f` to every trailing window of `window_size` elements.
///
/// Output is index-aligned with `series`: position `i` holds `f(&series[i + 1 - window_size..=i])`,
/// or [`Windowed::Insufficient`] while `i + 1 < window_size`. A `window_size` of 0 behaves like 1.
pub fn rolling<T, F>(mut f: F, window_size: usize, series: &[Value]) -> Vec<Windowed<T>>
where
    F: FnMut(&[Value]) -> T,
{
    let window_size = window_size.max(1);
    (0..series.len())
        .map(|i| {
            if i + 1 < window_size {
                Windowed::Insufficient
            } else {
                Windowed::Full(f(&series[i + 1 - window_size..=i]))
            }
        })
        .collect()
}

/// Apply `f` to every prefix of `series`: position `i` holds `f(&series[..=i])`.
pub fn cumulative<T, F>(mut f: F, series: &[Value]) -> Vec<T>
where
    F: FnMut(&[Value]) -> T,
{
    (0..series.len()).map(|i| f(&series[..=i])).collect()
}

fn pairwise<F>(series: &[Value], op: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = Vec::with_capacity(series.len());
    if series.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    for pair in series.windows(2) {
        let v = match (numeric(&pair[0]), numeric(&pair[1])) {
            (Some(prev), Some(cur)) => op(prev, cur),
            _ => f64::NAN,
        };
        out.push(v);
    }
    out
}

fn numeric(value: &Value) -> Option<f64> {
    if is_numeric(value) { value.as_f64() } else { None }
}
