//! The error tree produced by a validation pass.
//!
//! A [`ValidationError`] node holds two maps: direct errors (field name to
//! an ordered list of messages) and nested nodes (field name to a child
//! node one level down). The tree mirrors the shape of the schema that
//! produced it, so a failure in `user.name` lives under the `user` child's
//! direct errors and nowhere else.
//!
//! Each node records its path from the root. That path stands in for a
//! parent back-reference: it answers "where am I" for diagnostics without
//! the node holding any pointer to its parent.
//!
//! A node is EMPTY (no direct errors, no failed children) or FAILED. Within
//! one pass a node only moves from EMPTY to FAILED; a new pass builds a new
//! tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{AssayError, AssayResult};

/// Key holding a field's direct messages in the flattened form.
///
/// A field literally named `"errors"` collides with this key when it sits
/// next to direct errors of the same parent name; the nested entry wins.
pub const ERRORS_KEY: &str = "errors";

/// One node of the error tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
    nested: BTreeMap<String, ValidationError>,
    path: Vec<String>,
}

impl ValidationError {
    /// An empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    fn child_of(parent: &[String], name: &str) -> Self {
        let mut path = Vec::with_capacity(parent.len() + 1);
        path.extend_from_slice(parent);
        path.push(name.to_string());
        Self {
            path,
            ..Self::default()
        }
    }

    // ── Accumulation ──────────────────────────────────────────────────────────

    /// Append `message` to the direct errors of `name`, creating the list on
    /// first use. Repeated calls accumulate in call order.
    pub fn add_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(name.into())
            .or_default()
            .push(message.into());
    }

    /// Return the child node for `name`, creating it on first access.
    ///
    /// Idempotent: later calls with the same name return the same node.
    pub fn get_or_create_nested(&mut self, name: &str) -> &mut ValidationError {
        let path = &self.path;
        self.nested
            .entry(name.to_string())
            .or_insert_with(|| Self::child_of(path, name))
    }

    /// Fold `other` into this node.
    ///
    /// Direct lists append in order and children merge recursively. Nodes
    /// created along the way take their paths from this tree, so a sub-tree
    /// produced by an independent pass can be grafted under any node.
    pub fn merge(&mut self, other: ValidationError) {
        for (name, messages) in other.errors {
            self.errors.entry(name).or_default().extend(messages);
        }
        for (name, child) in other.nested {
            self.get_or_create_nested(&name).merge(child);
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// True iff this node has direct errors or any descendant does.
    ///
    /// Walks the subtree and stops at the first failure found. The engine
    /// calls this once per pass, at the root.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.nested.values().any(ValidationError::has_errors)
    }

    /// Direct errors at this level, keyed by field name.
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Child nodes, keyed by field name. May include empty children.
    pub fn nested_errors(&self) -> &BTreeMap<String, ValidationError> {
        &self.nested
    }

    /// Direct messages recorded for `name` at this level.
    pub fn field_errors(&self, name: &str) -> Option<&[String]> {
        self.errors.get(name).map(Vec::as_slice)
    }

    /// The child node registered under `name`.
    pub fn nested(&self, name: &str) -> Option<&ValidationError> {
        self.nested.get(name)
    }

    /// Location of this node, as field names from the root. Empty at the root.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Location of this node's parent, or `None` at the root.
    pub fn parent_path(&self) -> Option<&[String]> {
        self.path
            .split_last()
            .map(|(_, parent)| parent)
    }

    /// This node's path joined with `.`.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Look up a descendant node by dotted path. The empty path is `self`.
    ///
    /// Every `.` separates two names, so a field whose own name contains a
    /// `.` is only reachable through [`find_path`](Self::find_path).
    pub fn find(&self, dotted: &str) -> Option<&ValidationError> {
        if dotted.is_empty() {
            return Some(self);
        }
        self.find_path(&dotted.split('.').collect::<Vec<_>>())
    }

    /// Look up a descendant node by its names from this node. An empty
    /// slice is `self`.
    pub fn find_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&ValidationError> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.nested.get(segment.as_ref()))
    }

    /// Direct messages for a dotted field path such as `"user.name"`.
    /// Same `.` caveat as [`find`](Self::find).
    pub fn messages_at(&self, dotted: &str) -> Option<&[String]> {
        match dotted.rsplit_once('.') {
            Some((parent, leaf)) => self.find(parent)?.field_errors(leaf),
            None => self.field_errors(dotted),
        }
    }

    /// Direct messages for the field at the end of `segments`.
    pub fn messages_at_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&[String]> {
        let (leaf, parents) = segments.split_last()?;
        self.find_path(parents)?.field_errors(leaf.as_ref())
    }

    /// Every `(dotted path, message)` pair in this subtree, paths relative
    /// to this node. Ordered by name at each level, direct errors first.
    pub fn failures(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_failures(&mut prefix, &mut out);
        out
    }

    fn collect_failures<'s>(&'s self, prefix: &mut Vec<&'s str>, out: &mut Vec<(String, String)>) {
        for (name, messages) in &self.errors {
            prefix.push(name);
            let path = prefix.join(".");
            prefix.pop();
            out.extend(messages.iter().map(|m| (path.clone(), m.clone())));
        }
        for (name, child) in &self.nested {
            prefix.push(name);
            child.collect_failures(prefix, out);
            prefix.pop();
        }
    }

    /// Total number of messages in this subtree.
    pub fn failure_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum::<usize>()
            + self
                .nested
                .values()
                .map(ValidationError::failure_count)
                .sum::<usize>()
    }

    // ── Flattening ────────────────────────────────────────────────────────────

    /// Flatten the tree into a serializable map, or `None` when it has no
    /// errors.
    ///
    /// Each name maps to `{"errors": [...]}` for direct errors, to its
    /// child's flattened map for nested failures, or to both merged into one
    /// object. On a key collision inside a merged object the nested entry
    /// overwrites the direct one.
    ///
    /// Every node is visited once; emptiness falls out of the same walk.
    pub fn to_map(&self) -> Option<Map<String, Value>> {
        let mut result = Map::new();

        for (name, messages) in &self.errors {
            let mut entry = Map::new();
            entry.insert(ERRORS_KEY.to_string(), Value::from(messages.clone()));
            result.insert(name.clone(), Value::Object(entry));
        }

        for (name, child) in &self.nested {
            let Some(child_map) = child.to_map() else {
                continue;
            };
            match result.get_mut(name) {
                Some(Value::Object(existing)) => existing.extend(child_map),
                _ => {
                    result.insert(name.clone(), Value::Object(child_map));
                }
            }
        }

        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    /// Render the flattened form as compact JSON. An empty tree renders `{}`.
    pub fn to_json(&self) -> AssayResult<String> {
        serde_json::to_string(self).map_err(|e| AssayError::Serialization {
            reason: format!("failed to render error tree: {e}"),
        })
    }

    /// Render the flattened form as indented JSON.
    pub fn to_json_pretty(&self) -> AssayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AssayError::Serialization {
            reason: format!("failed to render error tree: {e}"),
        })
    }

    // ── Rebuilding ────────────────────────────────────────────────────────────

    /// Rebuild a tree from its flattened JSON text.
    pub fn from_json(s: &str) -> AssayResult<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| AssayError::Serialization {
            reason: format!("failed to parse error tree JSON: {e}"),
        })?;
        Self::from_value(&value)
    }

    /// Rebuild a tree from its flattened form. `null` and `{}` yield an
    /// empty tree.
    pub fn from_value(value: &Value) -> AssayResult<Self> {
        let mut tree = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => tree.absorb(map)?,
            other => {
                return Err(AssayError::Serialization {
                    reason: format!("error tree must be a JSON object, found {other}"),
                })
            }
        }
        Ok(tree)
    }

    fn absorb<'v>(
        &mut self,
        entries: impl IntoIterator<Item = (&'v String, &'v Value)>,
    ) -> AssayResult<()> {
        for (name, entry) in entries {
            let fields = entry.as_object().ok_or_else(|| AssayError::Serialization {
                reason: format!("entry '{name}' must be a JSON object"),
            })?;

            if let Some(messages) = fields.get(ERRORS_KEY) {
                let messages = messages.as_array().ok_or_else(|| AssayError::Serialization {
                    reason: format!("'{ERRORS_KEY}' of '{name}' must be an array"),
                })?;
                for message in messages {
                    let message = message.as_str().ok_or_else(|| AssayError::Serialization {
                        reason: format!("messages of '{name}' must be strings"),
                    })?;
                    self.add_error(name.as_str(), message);
                }
            }

            let rest: Vec<(&String, &Value)> = fields
                .iter()
                .filter(|(key, _)| key.as_str() != ERRORS_KEY)
                .collect();
            if !rest.is_empty() {
                self.get_or_create_nested(name).absorb(rest)?;
            }
        }
        Ok(())
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().unwrap_or_default().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl std::error::Error for ValidationError {}

// ── Tests ─────────────────────────────────────────────────────────────────────
