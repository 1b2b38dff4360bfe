//! The eight-node derivation graph.
//!
//! Nodes are resolved in a fixed order; each step consumes only values
//! resolved before it:
//!
//! ```text
//! A  = reduce(day)            B  = reduce(month)          C = reduce(year digit sum)
//! D  = reduce(A + B + C)      E  = reduce(A + B + C + D)
//! F1 = reduce(B + E)          F2 = reduce(C + E)          K1 = reduce(D + E)
//! ```

use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arcana::{reduce, Arcana};
use crate::birth_date::BirthDate;
use crate::category::Category;

/// Identifier of one of the eight fixed matrix nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    /// `A`: talent and personality.
    AncestralTop,
    /// `B`: spiritual connection.
    AncestralRight,
    /// `C`: future and legacy.
    AncestralBottom,
    /// `D`: social mask.
    AncestralLeft,
    /// `E`: soul comfort.
    SoulCenter,
    /// `F1`: money channel gateway.
    MoneyLine,
    /// `F2`: love channel gateway.
    LoveLine,
    /// `K1`: karmic debt gateway.
    KarmicTail,
}

impl NodeId {
    /// All node ids, in derivation order.
    pub const ALL: [NodeId; 8] = [
        NodeId::AncestralTop,
        NodeId::AncestralRight,
        NodeId::AncestralBottom,
        NodeId::AncestralLeft,
        NodeId::SoulCenter,
        NodeId::MoneyLine,
        NodeId::LoveLine,
        NodeId::KarmicTail,
    ];

    /// Wire name used as the key in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeId::AncestralTop => "ancestral_top",
            NodeId::AncestralRight => "ancestral_right",
            NodeId::AncestralBottom => "ancestral_bottom",
            NodeId::AncestralLeft => "ancestral_left",
            NodeId::SoulCenter => "soul_center",
            NodeId::MoneyLine => "money_line",
            NodeId::LoveLine => "love_line",
            NodeId::KarmicTail => "karmic_tail",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            NodeId::AncestralTop => "Talent & Personality",
            NodeId::AncestralRight => "Spiritual Connection",
            NodeId::AncestralBottom => "Future & Legacy",
            NodeId::AncestralLeft => "Social Mask",
            NodeId::SoulCenter => "Soul Comfort",
            NodeId::MoneyLine => "Money Channel",
            NodeId::LoveLine => "Love Channel",
            NodeId::KarmicTail => "Karmic Debt",
        }
    }

    /// Category the node belongs to.
    pub fn category(self) -> Category {
        match self {
            NodeId::AncestralTop => Category::Personality,
            NodeId::AncestralRight => Category::Spirit,
            NodeId::AncestralBottom => Category::Karmic,
            NodeId::AncestralLeft => Category::Social,
            NodeId::SoulCenter => Category::Soul,
            NodeId::MoneyLine => Category::Money,
            NodeId::LoveLine => Category::Love,
            NodeId::KarmicTail => Category::Karmic,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw node values derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedNodes {
    /// Reduced day.
    pub a: Arcana,
    /// Reduced month.
    pub b: Arcana,
    /// Reduced year digit sum.
    pub c: Arcana,
    /// `reduce(A + B + C)`.
    pub d: Arcana,
    /// `reduce(A + B + C + D)`.
    pub e: Arcana,
    /// `reduce(B + E)`.
    pub f1: Arcana,
    /// `reduce(C + E)`.
    pub f2: Arcana,
    /// `reduce(D + E)`.
    pub k1: Arcana,
}

impl DerivedNodes {
    /// Resolves all eight nodes for `date`.
    pub fn derive(date: &BirthDate) -> Self {
        Self::from_components(
            u64::from(date.day),
            u64::from(date.month),
            date.year_digit_sum(),
        )
    }

    /// Resolves all eight nodes from day, month, and the year's digit sum.
    pub fn from_components(day: u64, month: u64, year_sum: u64) -> Self {
        let sum = |values: &[Arcana]| values.iter().map(|v| u64::from(*v)).sum::<u64>();

        let a = reduce(day);
        let b = reduce(month);
        let c = reduce(year_sum);
        let d = reduce(sum(&[a, b, c]));
        let e = reduce(sum(&[a, b, c, d]));
        let f1 = reduce(sum(&[b, e]));
        let f2 = reduce(sum(&[c, e]));
        let k1 = reduce(sum(&[d, e]));

        trace!(
            "derived A={} B={} C={} D={} E={} F1={} F2={} K1={}",
            a, b, c, d, e, f1, f2, k1
        );

        Self {
            a,
            b,
            c,
            d,
            e,
            f1,
            f2,
            k1,
        }
    }

    /// Value of the node with the given id.
    pub fn get(&self, id: NodeId) -> Arcana {
        match id {
            NodeId::AncestralTop => self.a,
            NodeId::AncestralRight => self.b,
            NodeId::AncestralBottom => self.c,
            NodeId::AncestralLeft => self.d,
            NodeId::SoulCenter => self.e,
            NodeId::MoneyLine => self.f1,
            NodeId::LoveLine => self.f2,
            NodeId::KarmicTail => self.k1,
        }
    }

    /// Channels read off the derived nodes.
    pub fn channels(&self) -> Channels {
        Channels {
            money: [self.b, self.f1, self.e],
            love: [self.c, self.f2, self.e],
            karmic: [self.d, self.k1, self.e],
        }
    }
}

/// Name of one of the three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelName {
    /// `[B, F1, E]`.
    Money,
    /// `[C, F2, E]`.
    Love,
    /// `[D, K1, E]`.
    Karmic,
}

impl ChannelName {
    /// All channel names, in output order.
    pub const ALL: [ChannelName; 3] = [ChannelName::Money, ChannelName::Love, ChannelName::Karmic];

    /// Wire name of the channel.
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelName::Money => "money",
            ChannelName::Love => "love",
            ChannelName::Karmic => "karmic",
        }
    }
}

/// The three themed traversals of the node graph, as raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channels {
    /// Money channel.
    pub money: [Arcana; 3],
    /// Love channel.
    pub love: [Arcana; 3],
    /// Karmic channel.
    pub karmic: [Arcana; 3],
}

impl Channels {
    /// Values of the named channel.
    pub fn get(&self, name: ChannelName) -> [Arcana; 3] {
        match name {
            ChannelName::Money => self.money,
            ChannelName::Love => self.love,
            ChannelName::Karmic => self.karmic,
        }
    }
}
