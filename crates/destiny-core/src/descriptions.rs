//! Static Arcana description table.
//!
//! Lookup never fails: an unknown value resolves to the entry for `1`, and a
//! category the entry does not carry resolves to its `personality` text.

use serde::Serialize;

use crate::category::Category;

/// Interpretive text for one Arcana value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArcanaEntry {
    /// Arcana value, `1..=22`.
    pub value: u8,
    /// Archetype name.
    pub title: &'static str,
    /// General personality reading; every entry has one.
    pub personality: &'static str,
    /// Money-channel reading, when the value has a distinct one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money: Option<&'static str>,
    /// Love-channel reading, when the value has a distinct one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub love: Option<&'static str>,
}

impl ArcanaEntry {
    /// Text for `category`, falling back to `personality`.
    pub fn text(&self, category: Category) -> &'static str {
        let specific = match category {
            Category::Money => self.money,
            Category::Love => self.love,
            _ => None,
        };
        specific.unwrap_or(self.personality)
    }

    /// Returns `true` if the entry carries its own text for `category`.
    pub fn has_category(&self, category: Category) -> bool {
        match category {
            Category::Personality => true,
            Category::Money => self.money.is_some(),
            Category::Love => self.love.is_some(),
            _ => false,
        }
    }
}

/// Resolves the table entry for `value`, falling back to the entry for `1`.
pub fn describe_entry(value: impl Into<u32>) -> &'static ArcanaEntry {
    let value = value.into();
    value
        .checked_sub(1)
        .and_then(|idx| ARCANA_TABLE.get(idx as usize))
        .unwrap_or(&ARCANA_TABLE[0])
}

/// Interpretive text for `value` under `category`.
///
/// ```rust
/// use destiny_core::{describe, Category};
///
/// assert_eq!(describe(22u32, Category::Soul), describe(22u32, Category::Personality));
/// assert_eq!(describe(99u32, Category::Personality), describe(1u32, Category::Personality));
/// ```
pub fn describe(value: impl Into<u32>, category: Category) -> &'static str {
    describe_entry(value).text(category)
}

/// Every Arcana value, indexed by `value - 1`.
pub static ARCANA_TABLE: [ArcanaEntry; 22] = [
    ArcanaEntry {
        value: 1,
        title: "The Magician",
        personality: "Initiative and will. You start things others only talk about, and your words carry the power to set events in motion.",
        money: Some("Income follows your own projects. Money comes fastest when you launch, sell, or speak for something you created."),
        love: Some("You lead in relationships and need a partner who admires your drive without competing to control it."),
    },
    ArcanaEntry {
        value: 2,
        title: "The High Priestess",
        personality: "Intuition and quiet knowledge. You read situations beneath the surface and keep counsel others come to rely on.",
        money: None,
        love: Some("You bond slowly and deeply. Trust is built in silence, and a partner must respect your inner world."),
    },
    ArcanaEntry {
        value: 3,
        title: "The Empress",
        personality: "Abundance and creativity. You make spaces beautiful, nurture growth, and draw comfort to yourself and others.",
        money: Some("Beauty, care, and comfort are your markets. Money grows where you make things pleasant and fertile."),
        love: Some("Affection is expressed through care and shared comfort; you thrive in a warm, generous household."),
    },
    ArcanaEntry {
        value: 4,
        title: "The Emperor",
        personality: "Structure and authority. You build systems, keep order, and take responsibility for those under your protection.",
        money: Some("Steady management and ownership bring wealth. Build structures that keep earning after the work is done."),
        love: None,
    },
    ArcanaEntry {
        value: 5,
        title: "The Hierophant",
        personality: "Teaching and tradition. You pass knowledge on, hold to principles, and help others find their place in a larger order.",
        money: Some("Teaching, consulting, and mentoring pay best. Your expertise is the asset."),
        love: Some("You seek a committed, principled union where both partners grow through shared values."),
    },
    ArcanaEntry {
        value: 6,
        title: "The Lovers",
        personality: "Choice and harmony. You seek beauty and connection, and your path turns on the choices made from the heart.",
        money: None,
        love: Some("Love is your central lesson. Choose openly, without manipulation, and the relationship becomes a source of strength."),
    },
    ArcanaEntry {
        value: 7,
        title: "The Chariot",
        personality: "Movement and victory. You are driven toward goals, thrive on travel and change, and win through focused effort.",
        money: Some("Money follows motion: travel, logistics, sales, and any work that keeps you moving toward a target."),
        love: None,
    },
    ArcanaEntry {
        value: 8,
        title: "Justice",
        personality: "Balance and fairness. You weigh decisions carefully, value truth, and feel strongly about what is right.",
        money: Some("Law, finance, and documentation favor you. Honest dealings return money reliably."),
        love: None,
    },
    ArcanaEntry {
        value: 9,
        title: "The Hermit",
        personality: "Wisdom and solitude. You need time alone to find answers, and the depth you gain there guides others.",
        money: None,
        love: Some("You need a partner who allows space and silence; closeness grows from respect for solitude."),
    },
    ArcanaEntry {
        value: 10,
        title: "Wheel of Fortune",
        personality: "Flow and luck. Life moves in cycles for you, and openness to change brings opportunities at the right moment.",
        money: Some("Money comes in waves. Trust the flow, stay ready for opportunity, and avoid clinging in lean cycles."),
        love: None,
    },
    ArcanaEntry {
        value: 11,
        title: "Strength",
        personality: "Power and endurance. You hold great inner energy and master it through patience rather than force.",
        money: Some("Hard, sustained work pays off. Channel energy into physical or demanding fields and income grows."),
        love: None,
    },
    ArcanaEntry {
        value: 12,
        title: "The Hanged Man",
        personality: "Service and a different view. You see the world from an unusual angle and give yourself to causes larger than you.",
        money: None,
        love: Some("Avoid sacrificing yourself for love. A healthy bond asks nothing you cannot give freely."),
    },
    ArcanaEntry {
        value: 13,
        title: "Death",
        personality: "Transformation and renewal. You end what no longer serves and are reborn through change.",
        money: Some("Income arrives through change: new fields, restructuring, and ventures others consider too risky."),
        love: None,
    },
    ArcanaEntry {
        value: 14,
        title: "Temperance",
        personality: "Moderation and healing. You blend opposites into harmony and bring calm to those around you.",
        money: None,
        love: Some("Balance is key: neither dissolve into a partner nor hold back. Harmony is built together."),
    },
    ArcanaEntry {
        value: 15,
        title: "The Devil",
        personality: "Magnetism and temptation. You hold charisma and strong desires and must master them rather than be mastered.",
        money: Some("Strong earning potential through influence and persuasion. Watch for greed and dependence on money."),
        love: Some("Passion runs high. Beware of possessive attachments and keep love free of control."),
    },
    ArcanaEntry {
        value: 16,
        title: "The Tower",
        personality: "Sudden change and breakthrough. Structures built on false foundations fall away so something truer can be built.",
        money: Some("Build on solid ground. Sudden losses teach you to invest in lasting value instead of appearances."),
        love: None,
    },
    ArcanaEntry {
        value: 17,
        title: "The Star",
        personality: "Hope and inspiration. You shine for others, attract recognition, and carry a gift for beauty and art.",
        money: Some("Creative and public work brings money. Let yourself be seen."),
        love: None,
    },
    ArcanaEntry {
        value: 18,
        title: "The Moon",
        personality: "Imagination and the unconscious. You feel deeply, sense hidden currents, and must learn to face your fears.",
        money: None,
        love: Some("Illusions can cloud love. Speak plainly about fears and expectations to keep the bond clear."),
    },
    ArcanaEntry {
        value: 19,
        title: "The Sun",
        personality: "Joy and vitality. You radiate warmth, lead by example, and find success in open, generous action.",
        money: Some("Leadership and visibility bring success. Money flows when you act openly and share generously."),
        love: Some("You love warmly and openly; a partner who shares your optimism makes the bond flourish."),
    },
    ArcanaEntry {
        value: 20,
        title: "Judgement",
        personality: "Awakening and family. You carry the legacy of your lineage and feel called to a larger purpose.",
        money: None,
        love: Some("Family matters deeply in love. Heal ancestral patterns and the relationship gains strength."),
    },
    ArcanaEntry {
        value: 21,
        title: "The World",
        personality: "Completion and breadth. You think globally, feel at home everywhere, and bring projects to a full close.",
        money: Some("International, remote, and large-scale work pays best. Expand beyond local borders."),
        love: None,
    },
    ArcanaEntry {
        value: 22,
        title: "The Fool",
        personality: "Freedom and beginnings. You meet life with openness and spontaneity, unbound by convention, and trust the path to unfold.",
        money: Some("Unconventional, independent work suits you. Money comes through freedom, not through rigid routines."),
        love: Some("You need freedom in love. A partner who shares the adventure keeps the relationship light and alive."),
    },
];
