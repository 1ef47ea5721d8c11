use geist_blocks::{BlockFilter, BlockId, EMPTY_BLOCK_NAMES};
use proptest::prelude::*;

#[test]
fn filter_from_toml() {
    let f: BlockFilter = toml::from_str(
        r#"
        skip = ["minecraft:water", "minecraft:short_grass"]
    "#,
    )
    .unwrap();
    assert!(!f.keeps(&BlockId::from("minecraft:water")));
    assert!(!f.keeps(&BlockId::from("minecraft:short_grass")));
    assert!(f.keeps(&BlockId::from("minecraft:grass_block")));
}

#[test]
fn filter_from_empty_toml() {
    let f: BlockFilter = toml::from_str("").unwrap();
    assert_eq!(f.skipped().count(), 0);
}

proptest! {
    // names outside the empty set survive the default filter unchanged
    #[test]
    fn default_filter_keeps_non_air(name in "[a-z_]{1,12}(:[a-z_]{1,16})?") {
        let id = BlockId::from(name.as_str());
        let empty = EMPTY_BLOCK_NAMES.contains(&name.as_str());
        prop_assert_eq!(BlockFilter::new().keeps(&id), !empty);
        prop_assert_eq!(id.as_str(), name.as_str());
    }
}
