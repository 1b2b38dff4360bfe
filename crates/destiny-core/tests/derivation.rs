use destiny_core::{
    describe, describe_entry, reduce, Arcana, BirthDate, Category, ChannelName, DerivedNodes,
    DestinyMatrix, NodeId,
};

fn values(channel: [Arcana; 3]) -> [u8; 3] {
    channel.map(Arcana::get)
}

#[test]
fn reduce_stays_in_range() {
    let samples = (0..=100_000u64).chain([
        999_999,
        1_000_000_000,
        3_999_999_999,
        u64::from(u32::MAX),
        5_000_000_000,
        u64::MAX - 1,
        u64::MAX,
    ]);
    for n in samples {
        let value = reduce(n).get();
        assert!((1..=22).contains(&value), "reduce({n}) = {value}");
    }
}

#[test]
fn reduce_is_identity_up_to_master() {
    for n in 1..=22u64 {
        assert_eq!(u64::from(reduce(n)), n);
    }
}

#[test]
fn reduce_is_idempotent() {
    for n in 0..=10_000u64 {
        let once = reduce(n);
        assert_eq!(reduce(u64::from(once)), once);
    }
}

#[test]
fn reduce_lands_on_master_through_digit_chain() {
    // 499 -> 22 in one step; the chain must stop there rather than continue to 4.
    assert!(reduce(499).is_master());
    assert!(reduce(2299).is_master());
}

#[test]
fn reference_date_derives_expected_nodes() {
    let date = BirthDate::new(1990, 5, 15);
    assert_eq!(date.year_digit_sum(), 19);

    let nodes = DerivedNodes::derive(&date);
    let got: Vec<u8> = NodeId::ALL.iter().map(|id| nodes.get(*id).get()).collect();
    assert_eq!(got, vec![15, 5, 19, 12, 6, 11, 7, 18]);

    let channels = nodes.channels();
    assert_eq!(values(channels.money), [5, 11, 6]);
    assert_eq!(values(channels.love), [19, 7, 6]);
    assert_eq!(values(channels.karmic), [12, 18, 6]);
}

#[test]
fn reference_date_assembles_annotated_nodes() {
    let matrix = DestinyMatrix::assemble(&BirthDate::new(1990, 5, 15));

    let top = matrix.nodes.get(NodeId::AncestralTop);
    assert_eq!(top.id, NodeId::AncestralTop);
    assert_eq!(top.label, "Talent & Personality");
    assert_eq!(top.category, Category::Personality);
    assert_eq!(top.value.get(), 15);
    assert_eq!(top.description, describe(15u32, Category::Personality));

    let money = matrix.nodes.get(NodeId::MoneyLine);
    assert_eq!(money.category, Category::Money);
    assert_eq!(money.value.get(), 11);
    // Node descriptions use the personality reading even for channel nodes.
    assert_eq!(money.description, describe_entry(11u32).personality);
    assert_ne!(money.description, describe(11u32, Category::Money));

    assert_eq!(values(matrix.channels.get(ChannelName::Love)), [19, 7, 6]);
}

#[test]
fn assembly_is_deterministic() {
    let date = BirthDate::new(1987, 11, 29);
    let first = DestinyMatrix::assemble(&date);
    let second = DestinyMatrix::assemble(&date);
    assert_eq!(first, second);
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
    assert_eq!(
        first.canonical_bytes().unwrap(),
        second.canonical_bytes().unwrap()
    );
}

#[test]
fn every_date_in_range_yields_arcana_values() {
    for year in 1900..=2100u32 {
        for month in 1..=12u32 {
            for day in 1..=31u32 {
                let date = BirthDate::new(year, month, day);
                let nodes = DerivedNodes::derive(&date);
                for id in NodeId::ALL {
                    let value = nodes.get(id).get();
                    assert!((1..=22).contains(&value), "{year}-{month}-{day} {id} = {value}");
                }
            }
        }
    }
}

#[test]
fn channels_are_read_off_nodes() {
    let matrix = DestinyMatrix::assemble(&BirthDate::new(2004, 8, 30));
    let node = |id: NodeId| matrix.nodes.get(id).value;

    assert_eq!(
        matrix.channels.money,
        [node(NodeId::AncestralRight), node(NodeId::MoneyLine), node(NodeId::SoulCenter)]
    );
    assert_eq!(
        matrix.channels.love,
        [node(NodeId::AncestralBottom), node(NodeId::LoveLine), node(NodeId::SoulCenter)]
    );
    assert_eq!(
        matrix.channels.karmic,
        [node(NodeId::AncestralLeft), node(NodeId::KarmicTail), node(NodeId::SoulCenter)]
    );
}

#[test]
fn master_value_reached_directly_from_day() {
    let matrix = DestinyMatrix::assemble(&BirthDate::new(2000, 1, 22));
    let top = matrix.nodes.get(NodeId::AncestralTop);
    assert!(top.value.is_master());
    assert_eq!(top.description, describe_entry(22u32).personality);
    assert_ne!(top.description, describe_entry(1u32).personality);
}

#[test]
fn master_value_reached_as_derived_node() {
    // A=1, B=2, C=19 -> D = reduce(22) = 22.
    let matrix = DestinyMatrix::assemble(&BirthDate::new(1990, 2, 1));
    let left = matrix.nodes.get(NodeId::AncestralLeft);
    assert_eq!(left.value, Arcana::MASTER);
    assert_eq!(describe_entry(left.value).value, 22);
    assert_eq!(left.description, describe_entry(22u32).personality);
    assert_eq!(values(matrix.channels.karmic)[0], 22);
}

#[test]
fn descriptions_are_total() {
    for value in 1..=22u32 {
        let entry = describe_entry(value);
        assert_eq!(u32::from(entry.value), value, "value {value} must have its own entry");
        assert!(!entry.title.is_empty());
        for category in Category::ALL {
            let text = describe(value, category);
            assert!(!text.trim().is_empty(), "{value}/{category} is empty");
            if !entry.has_category(category) {
                assert_eq!(text, entry.personality);
            }
        }
    }
}

#[test]
fn descriptions_fall_back_for_unmodeled_categories() {
    for category in [Category::Spirit, Category::Social, Category::Karmic, Category::Soul] {
        assert_eq!(describe(7u32, category), describe(7u32, Category::Personality));
    }
}
