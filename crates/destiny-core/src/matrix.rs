use destiny_canonical::{compute_fingerprint, Canonicalizer, Digest, MATRIX_DOMAIN_SEPARATOR};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::arcana::Arcana;
use crate::birth_date::BirthDate;
use crate::category::Category;
use crate::descriptions::describe;
use crate::errors::CoreError;
use crate::graph::{Channels, DerivedNodes, NodeId};

/// A single annotated matrix node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Fixed node id.
    pub id: NodeId,
    /// Human-readable label.
    pub label: String,
    /// Category the node belongs to.
    pub category: Category,
    /// Derived value.
    pub value: Arcana,
    /// Interpretive text for `value`.
    pub description: String,
}

impl Node {
    fn build(id: NodeId, value: Arcana) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            category: id.category(),
            value,
            // Node text is always the personality reading, whatever the node's category.
            description: describe(value, Category::Personality).to_string(),
        }
    }
}

/// The eight named nodes, serialized as a map keyed by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixNodes {
    /// `A`.
    pub ancestral_top: Node,
    /// `B`.
    pub ancestral_right: Node,
    /// `C`.
    pub ancestral_bottom: Node,
    /// `D`.
    pub ancestral_left: Node,
    /// `E`.
    pub soul_center: Node,
    /// `F1`.
    pub money_line: Node,
    /// `F2`.
    pub love_line: Node,
    /// `K1`.
    pub karmic_tail: Node,
}

impl MatrixNodes {
    fn from_derived(derived: &DerivedNodes) -> Self {
        let node = |id: NodeId| Node::build(id, derived.get(id));
        Self {
            ancestral_top: node(NodeId::AncestralTop),
            ancestral_right: node(NodeId::AncestralRight),
            ancestral_bottom: node(NodeId::AncestralBottom),
            ancestral_left: node(NodeId::AncestralLeft),
            soul_center: node(NodeId::SoulCenter),
            money_line: node(NodeId::MoneyLine),
            love_line: node(NodeId::LoveLine),
            karmic_tail: node(NodeId::KarmicTail),
        }
    }

    /// Node with the given id.
    pub fn get(&self, id: NodeId) -> &Node {
        match id {
            NodeId::AncestralTop => &self.ancestral_top,
            NodeId::AncestralRight => &self.ancestral_right,
            NodeId::AncestralBottom => &self.ancestral_bottom,
            NodeId::AncestralLeft => &self.ancestral_left,
            NodeId::SoulCenter => &self.soul_center,
            NodeId::MoneyLine => &self.money_line,
            NodeId::LoveLine => &self.love_line,
            NodeId::KarmicTail => &self.karmic_tail,
        }
    }

    /// Nodes in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        NodeId::ALL.into_iter().map(move |id| self.get(id))
    }
}

/// A fully assembled Destiny Matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinyMatrix {
    /// The eight annotated nodes.
    pub nodes: MatrixNodes,
    /// Money, love, and karmic channels.
    pub channels: Channels,
}

impl DestinyMatrix {
    /// Assembles the matrix for `date`.
    ///
    /// Pure and infallible; `date` is trusted to be a real calendar date.
    pub fn assemble(date: &BirthDate) -> Self {
        let derived = DerivedNodes::derive(date);
        let matrix = Self {
            nodes: MatrixNodes::from_derived(&derived),
            channels: derived.channels(),
        };
        debug!(
            "assembled matrix for {}: soul_center={} money={:?} love={:?} karmic={:?}",
            date,
            derived.e,
            matrix.channels.money,
            matrix.channels.love,
            matrix.channels.karmic
        );
        matrix
    }

    /// RFC 8785 canonical JSON bytes of the matrix.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CoreError> {
        let value = serde_json::to_value(self)?;
        Ok(Canonicalizer::integers_only().canonicalize(&value)?)
    }

    /// Domain-separated SHA-256 fingerprint of the canonical bytes.
    ///
    /// Two implementations agree on a date exactly when their fingerprints match.
    pub fn fingerprint(&self) -> Result<Digest, CoreError> {
        Ok(compute_fingerprint(
            self,
            MATRIX_DOMAIN_SEPARATOR,
            &Canonicalizer::integers_only(),
        )?)
    }
}
