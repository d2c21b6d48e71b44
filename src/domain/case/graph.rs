//! Case graph response model
//!
//! Mirrors the GraphQL response of the case lookup query. Relations follow
//! the edges/node connection convention:
//!
//! ```text
//! data.doctor.edges[].node { id, cases? }
//!   cases.edges[].node { id, audio? }
//!     audio.edges[].node { id, fileId }
//! ```
//!
//! `cases` and `audio` are [`Relation`]s so that "not returned" and
//! "returned with no edges" stay distinguishable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional relation on a graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation<T> {
    /// The key was missing or `null`
    Absent,
    /// The relation was returned
    Present(T),
}

impl<T> Relation<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Relation<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Relation<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Relation::from)
    }
}

impl<T: Serialize> Serialize for Relation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Treat `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An ordered list of edges, each wrapping one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> Connection<T> {
    pub fn new(nodes: impl IntoIterator<Item = T>) -> Self {
        Self {
            edges: nodes.into_iter().map(|node| Edge { node: Some(node) }).collect(),
        }
    }

    /// The node of the first edge, if any. A `null` first node is not
    /// replaced by a later one.
    pub fn first(&self) -> Option<&T> {
        self.edges.first().and_then(|edge| edge.node.as_ref())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().filter_map(|edge| edge.node.as_ref())
    }
}

/// One edge of a connection. A `null` edge decodes as an edge without a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Edge<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawEdge<U> {
            node: Option<U>,
        }

        let raw = Option::<RawEdge<T>>::deserialize(deserializer)?;
        Ok(Self {
            node: raw.and_then(|edge| edge.node),
        })
    }
}

/// Top-level GraphQL response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub data: Option<GraphData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor: Connection<DoctorNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub cases: Relation<Connection<CaseNode>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub audio: Relation<Connection<AudioNode>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "fileId", default, deserialize_with = "null_as_default")]
    pub file_id: String,
}
