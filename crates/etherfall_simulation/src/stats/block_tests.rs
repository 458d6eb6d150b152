//! Tests for the stat block.

#[cfg(test)]
mod tests {
    use crate::stats::{compute_damage, max_health_for_defence, StatAxis, StatBlock};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_compute_damage_reference_value() {
        // floor(25 * 30 / 11 + 15) = floor(83.18)
        assert_eq!(compute_damage(40.0, 10.0), 83);
    }

    #[test]
    fn test_compute_damage_can_be_negative_but_never_heals() {
        let damage = compute_damage(5.0, 50.0);
        assert!(damage < 0, "damage = {}", damage);

        let mut stats = StatBlock::player();
        stats.take_damage(30);
        let before = stats.health().get();

        stats.take_damage(damage);
        assert_eq!(stats.health().get(), before);
    }

    #[test]
    fn test_damage_then_heal_restores_health() {
        let mut stats = StatBlock::player();
        stats.take_damage(40);
        assert_eq!(stats.health().get(), 60);

        stats.heal(25);
        stats.take_damage(25);
        stats.heal(25);
        assert_eq!(stats.health().get(), 85);
    }

    #[test]
    fn test_heal_clamped_at_max_and_damage_at_floor() {
        let mut stats = StatBlock::monster();
        stats.take_damage(10);
        stats.heal(500);
        assert_eq!(stats.health().get(), 100);

        stats.take_damage(1_000);
        assert_eq!(stats.health().get(), 0);
        assert!(stats.is_dead());

        stats.heal(-20); // normalized to zero
        assert_eq!(stats.health().get(), 0);
    }

    #[test]
    fn test_has_ether_for_is_strict() {
        let mut stats = StatBlock::player();
        stats.spend_ether(70);
        assert_eq!(stats.ether().get(), 30);

        assert!(stats.has_ether_for(29));
        assert!(!stats.has_ether_for(30)); // equal amount is unaffordable
        assert!(!stats.has_ether_for(31));

        stats.gain_ether(500);
        assert_eq!(stats.ether().get(), 100);
        stats.spend_ether(-5);
        assert_eq!(stats.ether().get(), 100);
    }

    #[test]
    fn test_upgrade_trades_stats() {
        let mut stats = StatBlock::player();
        stats.upgrade(StatAxis::Attack);

        assert_eq!(stats.attack(), 2.0);
        assert_eq!(stats.speed(), 9.75);
        assert_eq!(stats.power(), 0.75);
        assert_eq!(stats.defence(), 0.75);
        // 70 + floor(7.5)
        assert_eq!(stats.health().max(), 77);
        assert_eq!(stats.health().get(), 77);
    }

    #[test]
    fn test_repeated_upgrade_is_monotonic() {
        for axis in [StatAxis::Speed, StatAxis::Attack, StatAxis::Power, StatAxis::Defence] {
            let mut stats = StatBlock::player();
            for _ in 0..8 {
                let before = stats.clone();
                stats.upgrade(axis);

                let pairs = [
                    (StatAxis::Speed, before.speed(), stats.speed()),
                    (StatAxis::Attack, before.attack(), stats.attack()),
                    (StatAxis::Power, before.power(), stats.power()),
                    (StatAxis::Defence, before.defence(), stats.defence()),
                ];
                for (candidate, old, new) in pairs {
                    if candidate == axis {
                        assert!(new > old, "{:?} should grow", candidate);
                    } else {
                        assert!(new < old, "{:?} should shrink while upgrading {:?}", candidate, axis);
                    }
                }

                assert_eq!(stats.health().max(), max_health_for_defence(stats.defence()));
                assert!(stats.health().get() <= stats.health().max());
            }
        }
    }

    #[test]
    fn test_defence_upgrade_raises_max_but_keeps_current() {
        let mut stats = StatBlock::player();
        stats.take_damage(50);
        stats.upgrade(StatAxis::Defence);

        // defence 2.0 → 70 + 20
        assert_eq!(stats.health().max(), 90);
        assert_eq!(stats.health().get(), 50);
    }

    #[test]
    fn test_scalars_unbounded_below() {
        let mut stats = StatBlock::monster();
        for _ in 0..8 {
            stats.upgrade(StatAxis::Speed);
        }
        assert!(stats.attack() < 0.0);
        assert!(stats.defence() < 0.0);
        // negative defence still yields a valid (clamped) health range
        assert!(stats.health().max() >= 0);
    }

    #[test]
    fn test_zone_band_limits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for zone in 1..=4 {
            for _ in 0..50 {
                let stats = StatBlock::for_zone(zone, 3, &mut rng);
                let floor = ((zone - 1) * 4 + 3) as f32;
                let ceiling = (zone * 15) as f32;
                for value in [stats.attack(), stats.speed(), stats.defence()] {
                    assert!(value >= floor.min(ceiling) && value <= ceiling, "zone {} value {}", zone, value);
                }
                assert_eq!(stats.health().max(), ((zone + 1) * 250) as i32);
                assert_eq!(stats.power(), 1.0);
            }
        }
    }

    #[test]
    fn test_experience_reward() {
        // 20 * 1 + 30 * 1 + 15 * 1
        assert_eq!(StatBlock::monster().experience_reward(), 65);
        // 20 * 1 + 30 * 1 + 15 * 10
        assert_eq!(StatBlock::player().experience_reward(), 200);
    }
}
