use serde_json::Value;
use thiserror::Error;

use super::path::{Path, PathSegment};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path must contain at least one segment")]
    EmptyPath,

    #[error("unknown key `{0}`")]
    UnknownKey(String),

    /// Out-of-bounds indices are rejected, never extended. Growing an
    /// array happens by replacing the whole array at its own path.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("segment `{segment}` does not match the container at depth {depth}")]
    TypeMismatch { segment: String, depth: usize },
}

//
// ──────────────────────────────────────────────────────────
// Deep update
// ──────────────────────────────────────────────────────────
//

/// Produce a new tree equal to `root` except that the location named by
/// `path` holds `value`. The input is never mutated, so earlier snapshots
/// holding the old tree (the published table, subscriber callbacks) are
/// unaffected.
///
/// Traversal segments must name existing locations. The final segment may
/// insert a new object key; a final array index must still be in bounds.
pub fn set_at_path(root: &Value, path: &Path, value: Value) -> Result<Value, PathError> {
    let (last, parents) = path.segments().split_last().ok_or(PathError::EmptyPath)?;

    let mut out = root.clone();
    let mut cursor = &mut out;
    for (depth, segment) in parents.iter().enumerate() {
        cursor = descend(cursor, segment, depth)?;
    }
    assign(cursor, last, parents.len(), value)?;
    Ok(out)
}

fn descend<'a>(
    node: &'a mut Value,
    segment: &PathSegment,
    depth: usize,
) -> Result<&'a mut Value, PathError> {
    match segment {
        PathSegment::Key(key) => {
            let fields = node.as_object_mut().ok_or_else(|| PathError::TypeMismatch {
                segment: key.clone(),
                depth,
            })?;
            fields
                .get_mut(key)
                .ok_or_else(|| PathError::UnknownKey(key.clone()))
        }
        PathSegment::Index(index) => {
            let items = node.as_array_mut().ok_or_else(|| PathError::TypeMismatch {
                segment: index.to_string(),
                depth,
            })?;
            let len = items.len();
            items
                .get_mut(*index)
                .ok_or(PathError::IndexOutOfBounds { index: *index, len })
        }
    }
}

fn assign(
    node: &mut Value,
    segment: &PathSegment,
    depth: usize,
    value: Value,
) -> Result<(), PathError> {
    match segment {
        PathSegment::Key(key) => {
            let fields = node.as_object_mut().ok_or_else(|| PathError::TypeMismatch {
                segment: key.clone(),
                depth,
            })?;
            fields.insert(key.clone(), value);
            Ok(())
        }
        PathSegment::Index(index) => {
            let items = node.as_array_mut().ok_or_else(|| PathError::TypeMismatch {
                segment: index.to_string(),
                depth,
            })?;
            let len = items.len();
            let slot = items
                .get_mut(*index)
                .ok_or(PathError::IndexOutOfBounds { index: *index, len })?;
            *slot = value;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "hero": { "name": "Asad", "title": "t" },
            "skills": [
                { "name": "Design", "proficiency": 80 },
                { "name": "Motion", "proficiency": 60 }
            ]
        })
    }

    #[test]
    fn test_set_nested_object_field() {
        let doc = sample();
        let out = set_at_path(&doc, &Path::parse("hero.name"), json!("Robin")).unwrap();

        assert_eq!(out["hero"]["name"], "Robin");
        assert_eq!(out["hero"]["title"], "t");
    }

    #[test]
    fn test_set_array_element_field() {
        let doc = sample();
        let out =
            set_at_path(&doc, &Path::parse("skills.1.proficiency"), json!(95)).unwrap();

        assert_eq!(out["skills"][1]["proficiency"], 95);
        assert_eq!(out["skills"][0]["proficiency"], 80);
    }

    #[test]
    fn test_replace_whole_array() {
        let doc = sample();
        let out = set_at_path(&doc, &Path::parse("skills"), json!([])).unwrap();
        assert_eq!(out["skills"], json!([]));
    }

    #[test]
    fn test_input_tree_is_never_mutated() {
        let doc = sample();
        let before = doc.clone();

        let _ = set_at_path(&doc, &Path::parse("hero.name"), json!("Robin")).unwrap();

        assert_eq!(doc, before);
    }

    #[test]
    fn test_final_segment_may_insert_new_object_key() {
        let doc = sample();
        let out = set_at_path(&doc, &Path::parse("hero.tagline"), json!("hi")).unwrap();
        assert_eq!(out["hero"]["tagline"], "hi");
    }

    // =====================================================
    // Rejections
    // =====================================================

    #[test]
    fn test_empty_path_is_rejected() {
        assert_eq!(
            set_at_path(&sample(), &Path::new(), json!(1)).unwrap_err(),
            PathError::EmptyPath
        );
    }

    #[test]
    fn test_index_out_of_bounds_is_rejected() {
        assert_eq!(
            set_at_path(&sample(), &Path::parse("skills.5"), json!({})).unwrap_err(),
            PathError::IndexOutOfBounds { index: 5, len: 2 }
        );
    }

    #[test]
    fn test_index_equal_to_length_is_rejected_not_appended() {
        assert_eq!(
            set_at_path(&sample(), &Path::parse("skills.2"), json!({})).unwrap_err(),
            PathError::IndexOutOfBounds { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_unknown_traversal_key_is_rejected() {
        assert_eq!(
            set_at_path(&sample(), &Path::parse("missing.name"), json!(1)).unwrap_err(),
            PathError::UnknownKey("missing".to_string())
        );
    }

    #[test]
    fn test_keying_into_an_array_is_a_type_mismatch() {
        assert!(matches!(
            set_at_path(&sample(), &Path::parse("skills.name.x"), json!(1)).unwrap_err(),
            PathError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_indexing_into_an_object_is_a_type_mismatch() {
        assert!(matches!(
            set_at_path(&sample(), &Path::new().key("hero").index(0).key("x"), json!(1))
                .unwrap_err(),
            PathError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_failed_update_leaves_input_untouched() {
        let doc = sample();
        let before = doc.clone();

        let _ = set_at_path(&doc, &Path::parse("skills.9.name"), json!("x"));

        assert_eq!(doc, before);
    }
}
