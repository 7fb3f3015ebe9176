//! Groups and datasets forming the container tree.
//!
//! A [`Group`] maps member names to [`Node`]s and carries string-keyed
//! attributes. Members live in persistent ordered maps, so cloning a
//! group is cheap.

use hubbardi_foundation::{Error, Result, Scalar};
use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::path;

/// Attribute naming the type stored in a group.
pub const FORMAT_ATTRIBUTE: &str = "Format";

/// A member of a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A nested group.
    Group(Group),
    /// A leaf dataset holding one scalar.
    Dataset(Scalar),
}

impl Node {
    /// Returns `"group"` or `"dataset"`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Group(_) => "group",
            Self::Dataset(_) => "dataset",
        }
    }

    /// Returns the group if this node is one.
    #[must_use]
    pub const fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            Self::Dataset(_) => None,
        }
    }

    /// Returns the scalar if this node is a dataset.
    #[must_use]
    pub const fn as_dataset(&self) -> Option<&Scalar> {
        match self {
            Self::Dataset(s) => Some(s),
            Self::Group(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Group(g) => match g.format() {
                Some(format) => format!("group with format {format}"),
                None => "group".to_string(),
            },
            Self::Dataset(s) => format!("{} dataset", s.kind()),
        }
    }
}

/// An interior node of the container tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    attributes: OrdMap<String, Scalar>,
    members: OrdMap<String, Node>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of direct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over direct member names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Iterates over direct members in name order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the direct member stored under `name`.
    ///
    /// `name` is a single key, not a path.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Node> {
        self.members.get(name)
    }

    // --- Attributes ---

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Scalar> {
        self.attributes.get(name)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Iterates over attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the type name stored in the `Format` attribute, if any.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.attribute(FORMAT_ATTRIBUTE).and_then(Scalar::as_str)
    }

    /// Tags this group with a type name.
    pub fn set_format(&mut self, format: &str) {
        self.set_attribute(FORMAT_ATTRIBUTE, format);
    }

    // --- Lookup ---

    /// Looks up a member by path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for a malformed path, `NotFound` if any segment
    /// is missing, and `FormatMismatch` if an intermediate segment is a
    /// dataset.
    pub fn get(&self, path: &str) -> Result<&Node> {
        let (parents, leaf) = path::split(path)?;
        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            current = match current.members.get(*segment) {
                Some(Node::Group(g)) => g,
                Some(node) => {
                    return Err(Error::format_mismatch(
                        format!("group at {}", path::join(&parents[..=depth])),
                        node.describe(),
                    ));
                }
                None => return Err(Error::not_found(path::join(&parents[..=depth]))),
            };
        }
        current
            .members
            .get(leaf)
            .ok_or_else(|| Error::not_found(path.trim_start_matches(path::SEPARATOR)))
    }

    /// Returns true if a member exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    /// Looks up a subgroup by path.
    ///
    /// # Errors
    ///
    /// As [`Group::get`], plus `FormatMismatch` if the member is a dataset.
    pub fn group(&self, path: &str) -> Result<&Group> {
        match self.get(path)? {
            Node::Group(g) => Ok(g),
            node => Err(Error::format_mismatch(
                format!("group at {path}"),
                node.describe(),
            )),
        }
    }

    /// Looks up a dataset by path.
    ///
    /// # Errors
    ///
    /// As [`Group::get`], plus `FormatMismatch` if the member is a group.
    pub fn dataset(&self, path: &str) -> Result<&Scalar> {
        match self.get(path)? {
            Node::Dataset(s) => Ok(s),
            node => Err(Error::format_mismatch(
                format!("dataset at {path}"),
                node.describe(),
            )),
        }
    }

    // --- Mutation ---

    /// Creates an empty subgroup at `path`, replacing any existing member.
    ///
    /// Missing intermediate groups are created.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for a malformed path and `FormatMismatch` if an
    /// intermediate segment is a dataset.
    pub fn create_group(&mut self, path: &str) -> Result<&mut Group> {
        let (parent, leaf) = self.parent_mut(path)?;
        parent.members.insert(leaf.to_string(), Node::Group(Group::new()));
        match parent.members.get_mut(leaf) {
            Some(Node::Group(g)) => Ok(g),
            _ => Err(Error::not_found(path)),
        }
    }

    /// Stores a scalar dataset at `path`, replacing any existing member.
    ///
    /// # Errors
    ///
    /// Same as [`Group::create_group`].
    pub fn put_dataset(&mut self, path: &str, value: impl Into<Scalar>) -> Result<()> {
        let (parent, leaf) = self.parent_mut(path)?;
        parent
            .members
            .insert(leaf.to_string(), Node::Dataset(value.into()));
        Ok(())
    }

    /// Removes and returns the member at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored at `path`.
    pub fn remove(&mut self, path: &str) -> Result<Node> {
        // A missing path must not create intermediate groups.
        self.get(path)?;
        let (parent, leaf) = self.parent_mut(path)?;
        parent
            .members
            .remove(leaf)
            .ok_or_else(|| Error::not_found(path))
    }

    /// Walks to the parent group of `path`, creating missing groups.
    fn parent_mut<'p>(&mut self, path: &'p str) -> Result<(&mut Group, &'p str)> {
        let (parents, leaf) = path::split(path)?;
        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            if !current.members.contains_key(*segment) {
                current
                    .members
                    .insert((*segment).to_string(), Node::Group(Group::new()));
            }
            current = match current.members.get_mut(*segment) {
                Some(Node::Group(g)) => g,
                Some(node) => {
                    return Err(Error::format_mismatch(
                        format!("group at {}", path::join(&parents[..=depth])),
                        node.describe(),
                    ));
                }
                None => return Err(Error::not_found(path::join(&parents[..=depth]))),
            };
        }
        Ok((current, leaf))
    }
}
