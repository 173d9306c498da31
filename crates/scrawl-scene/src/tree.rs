//! Generic markup tree -- the persisted scene format.
//!
//! Scenes are authored and persisted as a tree of named nodes carrying
//! string attributes. Numbers are stored as decimal text (one attribute per
//! 0-255 color channel). Entities read and write their persistent state
//! through [`TreeNode`] attribute accessors; missing or malformed attributes
//! fall back to caller-supplied defaults rather than erroring, so a damaged
//! scene file degrades instead of failing to load.
//!
//! # Example
//!
//! ```
//! use scrawl_scene::tree::TreeNode;
//!
//! let mut node = TreeNode::new("Object");
//! node.set_attr_f32("fillOpacity", 75.0);
//! assert_eq!(node.attr_f32("fillOpacity", 100.0), 75.0);
//! assert_eq!(node.attr_f32("missing", 100.0), 100.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SceneError;

// ---------------------------------------------------------------------------
// TreeNode
// ---------------------------------------------------------------------------

/// One node of the persisted scene tree.
///
/// Attributes are kept in a `BTreeMap` so serialized output is stable and
/// diffs stay readable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node name (e.g. `"Object"`).
    pub name: String,
    /// Named attributes, values as decimal/plain text.
    pub attributes: BTreeMap<String, String>,
    /// Child nodes, in document order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    // -- raw attribute access ------------------------------------------------

    /// Raw attribute text, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute from anything displayable.
    pub fn set_attr(&mut self, key: &str, value: impl ToString) {
        self.attributes.insert(key.to_owned(), value.to_string());
    }

    // -- typed accessors with defaults --------------------------------------

    /// Read an `f32` attribute; `default` when absent or unparsable.
    pub fn attr_f32(&self, key: &str, default: f32) -> f32 {
        self.attr(key)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(default)
    }

    /// Read an `i32` attribute; `default` when absent or unparsable.
    pub fn attr_i32(&self, key: &str, default: i32) -> i32 {
        self.attr(key)
            .and_then(|v| v.trim().parse::<i32>().ok())
            .unwrap_or(default)
    }

    /// Read a color channel attribute clamped into 0-255.
    pub fn attr_channel(&self, key: &str, default: u8) -> u8 {
        self.attr(key)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .map(|v| v.clamp(0.0, 255.0).round() as u8)
            .unwrap_or(default)
    }

    /// Read a boolean attribute (`"true"`/`"false"`, or `"1"`/`"0"`).
    pub fn attr_bool(&self, key: &str, default: bool) -> bool {
        match self.attr(key).map(str::trim) {
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            _ => default,
        }
    }

    /// Write an `f32` attribute as decimal text.
    pub fn set_attr_f32(&mut self, key: &str, value: f32) {
        self.set_attr(key, value);
    }

    /// Write a boolean attribute as `"true"`/`"false"`.
    pub fn set_attr_bool(&mut self, key: &str, value: bool) {
        self.set_attr(key, value);
    }

    // -- children ------------------------------------------------------------

    /// Append a child node and return a mutable reference to it.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut TreeNode {
        self.children.push(TreeNode::new(name));
        self.children.last_mut().expect("just pushed")
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    // -- text round-trip ------------------------------------------------------

    /// Serialize this node (and its subtree) to JSON text.
    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::MalformedTree {
            details: e.to_string(),
        })
    }

    /// Parse a node from JSON text produced by [`to_json`](Self::to_json).
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        serde_json::from_str(text).map_err(|e| SceneError::MalformedTree {
            details: e.to_string(),
        })
    }
}
