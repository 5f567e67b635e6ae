//! Key-aligned, left-biased merge of two frames.

use crate::types::{Frame, Record, Value};

use super::group::group_by_column;

/// Merge `right` into `left`, matching `left[left_key]` against `right[right_key]`.
///
/// - Non-key columns present in both frames are renamed with `left_suffix` / `right_suffix`;
///   all other column names are left alone. "Non-key" is judged per side, so a right-hand
///   column that happens to share `left_key`'s name is suffixed and never overwrites the key.
/// - The output has one row per distinct left key, in first-occurrence order. Keys that only
///   occur in `right` are dropped.
/// - Only the *first* row per key on each side takes part; later rows with the same key are
///   ignored. This is a one-to-first join, not a one-to-many join.
/// - Every output row has the full union of columns. Cells with no source value, including all
///   right-hand columns of a left key without a partner, are [`Value::Missing`].
///
/// Keys are compared by their rendered form, like [`super::group_by`]. Output rows are freshly
/// built; neither input is modified.
///
/// ```rust
/// use frame_stats::processing::merge;
/// use frame_stats::record;
/// use frame_stats::types::{Frame, Value};
///
/// let left = Frame::new(vec![record! { "k" => "a", "x" => 1 }]);
/// let right = Frame::new(vec![record! { "k" => "a", "x" => 2 }]);
/// let out = merge(&left, &right, "k", "k", "_l", "_r");
///
/// assert_eq!(out.columns(), ["k", "x_l", "x_r"]);
/// assert_eq!(out.rows[0].get("x_r"), Some(&Value::Int64(2)));
/// ```
pub fn merge(
    left: &Frame,
    right: &Frame,
    left_key: &str,
    right_key: &str,
    left_suffix: &str,
    right_suffix: &str,
) -> Frame {
    let left_columns = left.columns();
    let right_columns = right.columns();
    let left_renames = collisions(&left_columns, &right_columns, left_key);
    let right_renames = collisions(&right_columns, &left_columns, right_key);

    let left = suffix_columns(left, &left_renames, left_suffix);
    let right = suffix_columns(right, &right_renames, right_suffix);

    let mut all_columns = left.columns();
    for c in right.columns() {
        if !all_columns.contains(&c) {
            all_columns.push(c);
        }
    }

    let left_groups = group_by_column(&left, left_key);
    let right_groups = group_by_column(&right, right_key);

    left_groups
        .iter()
        .filter_map(|group| {
            let mut joined = group.rows.first()?.clone();
            let partner = right_groups
                .get(&group.key.rendered)
                .and_then(|g| g.rows.first());
            if let Some(partner) = partner {
                for (name, v) in partner.iter() {
                    joined.insert(name, v.clone());
                }
            }
            Some(fill_missing(&joined, &all_columns))
        })
        .collect()
}

/// Columns of `own` that also occur in `other`, except this side's key.
fn collisions(own: &[String], other: &[String], key: &str) -> Vec<String> {
    own.iter()
        .filter(|&c| c != key && other.contains(c))
        .cloned()
        .collect()
}

fn suffix_columns(frame: &Frame, collisions: &[String], suffix: &str) -> Frame {
    if collisions.is_empty() || suffix.is_empty() {
        return frame.clone();
    }
    frame.map_rows(|row| {
        row.iter()
            .map(|(name, v)| {
                let name = if collisions.iter().any(|c| c == name) {
                    format!("{name}{suffix}")
                } else {
                    name.to_owned()
                };
                (name, v.clone())
            })
            .collect()
    })
}

fn fill_missing(row: &Record, columns: &[String]) -> Record {
    columns
        .iter()
        .map(|c| (c.as_str(), row.get(c).cloned().unwrap_or(Value::Missing)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn merge_is_left_biased() {
        let left = Frame::new(vec![record! { "k" => "a", "x" => 1 }]);
        let right = Frame::new(vec![record! { "k" => "b", "y" => 2 }]);
        let out = merge(&left, &right, "k", "k", "_l", "_r");

        assert_eq!(
            out.rows,
            vec![record! { "k" => "a", "x" => 1, "y" => Value::Missing }]
        );
    }

    #[test]
    fn merge_renames_colliding_columns_only() {
        let left = Frame::new(vec![record! { "k" => "a", "x" => 1, "l" => true }]);
        let right = Frame::new(vec![record! { "k" => "a", "x" => 2, "r" => false }]);
        let out = merge(&left, &right, "k", "k", "_l", "_r");

        assert_eq!(
            out.rows,
            vec![record! { "k" => "a", "x_l" => 1, "l" => true, "x_r" => 2, "r" => false }]
        );
    }

    #[test]
    fn merge_uses_first_row_per_key_on_both_sides() {
        let left = Frame::new(vec![
            record! { "k" => "a", "x" => 1 },
            record! { "k" => "b", "x" => 2 },
            record! { "k" => "a", "x" => 3 },
        ]);
        let right = Frame::new(vec![
            record! { "k" => "a", "y" => 10 },
            record! { "k" => "a", "y" => 20 },
        ]);
        let out = merge(&left, &right, "k", "k", "_l", "_r");

        assert_eq!(
            out.rows,
            vec![
                record! { "k" => "a", "x" => 1, "y" => 10 },
                record! { "k" => "b", "x" => 2, "y" => Value::Missing },
            ]
        );
    }

    #[test]
    fn merge_with_different_key_names() {
        let left = Frame::new(vec![record! { "id" => 1, "name" => "ada" }]);
        let right = Frame::new(vec![record! { "user_id" => "1", "score" => 9.5 }]);
        let out = merge(&left, &right, "id", "user_id", "_l", "_r");

        assert_eq!(out.columns(), vec!["id", "name", "user_id", "score"]);
        assert_eq!(out.rows[0].get("score"), Some(&Value::Float64(9.5)));
    }

    #[test]
    fn right_column_named_like_left_key_is_suffixed() {
        let left = Frame::new(vec![record! { "id" => "a", "x" => 1 }]);
        let right = Frame::new(vec![record! { "user_id" => "a", "id" => "zzz" }]);
        let out = merge(&left, &right, "id", "user_id", "_l", "_r");

        assert_eq!(
            out.rows,
            vec![record! { "id" => "a", "x" => 1, "user_id" => "a", "id_r" => "zzz" }]
        );
    }

    #[test]
    fn merge_fills_ragged_rows_without_touching_inputs() {
        let left = Frame::new(vec![
            record! { "k" => "a", "x" => 1 },
            record! { "k" => "b" },
        ]);
        let right = Frame::new(vec![record! { "k" => "b", "y" => 2 }]);
        let out = merge(&left, &right, "k", "k", "", "");

        assert_eq!(out.rows[1], record! { "k" => "b", "x" => Value::Missing, "y" => 2 });
        assert_eq!(left.rows[1], record! { "k" => "b" });
        assert_eq!(right.rows[0], record! { "k" => "b", "y" => 2 });
    }

    #[test]
    fn merge_with_empty_right_keeps_left_rows() {
        let left = Frame::new(vec![record! { "k" => "a", "x" => 1 }]);
        let out = merge(&left, &Frame::default(), "k", "k", "_l", "_r");
        assert_eq!(out.rows, left.rows);
    }
}
