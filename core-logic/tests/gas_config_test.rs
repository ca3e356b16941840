use core_logic::GasConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_jittered_limit_stays_in_range() {
    let config = GasConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1_000 {
        let limit = config.jittered_limit(500_000, &mut rng);
        assert!(limit > 500_000);
        assert!(limit <= 510_000);
    }
}

#[test]
fn test_jitter_varies_between_calls() {
    let config = GasConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let limits: std::collections::HashSet<u64> = (0..50)
        .map(|_| config.jittered_limit(134_500, &mut rng))
        .collect();
    assert!(limits.len() > 1);
}

#[test]
fn test_builder_overrides() {
    let config = GasConfig::new().with_jitter(5).with_multipliers(110, 150);

    assert_eq!(config.jitter_max, 5);
    assert_eq!(config.price_multiplier_pct, 110);
    assert_eq!(config.swap_price_multiplier_pct, 150);
}

#[test]
fn test_deserialize_partial_section() {
    let config: GasConfig =
        serde_json::from_str(r#"{"price_multiplier_pct": 130, "contract_call": 400000}"#).unwrap();

    assert_eq!(config.price_multiplier_pct, 130);
    assert_eq!(config.swap_price_multiplier_pct, 120);
    assert_eq!(config.limit_contract_call(), 400_000);
    assert_eq!(config.limit_collectible_mint(), 134_500);
}
