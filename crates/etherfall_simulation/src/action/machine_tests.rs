//! Tests for ActionMachine transitions.

#[cfg(test)]
mod tests {
    use crate::action::{ActionMachine, ActionState, Facing, DODGE_DASH, DODGE_SPEED_MULTIPLIER};
    use crate::animation::{Clip, ClipLibrary, VisualProfile};
    use bevy::prelude::*;

    fn player_at(x: f32, y: f32) -> ActionMachine {
        ActionMachine::new(Vec2::new(x, y), ClipLibrary::player(), VisualProfile::player())
    }

    /// Тик как в FixedUpdate: сначала клипы, потом движение
    fn step(machine: &mut ActionMachine, requested: Vec2) {
        machine.advance_playback();
        machine.tick(requested);
    }

    #[test]
    fn test_locomotion_selection_and_facing() {
        let mut machine = player_at(0.0, 0.0);
        assert_eq!(machine.state(), ActionState::Standing);

        step(&mut machine, Vec2::new(-1.0, 0.0));
        assert_eq!(machine.state(), ActionState::RunLeft);
        assert_eq!(machine.facing(), Facing::Left);
        assert_eq!(machine.position(), Vec2::new(-1.0, 0.0));

        // Только вертикаль: бег в сторону текущего facing
        step(&mut machine, Vec2::new(0.0, 2.0));
        assert_eq!(machine.state(), ActionState::RunLeft);
        assert_eq!(machine.facing(), Facing::Left);

        step(&mut machine, Vec2::new(0.5, 0.0));
        assert_eq!(machine.state(), ActionState::RunRight);
        assert_eq!(machine.facing(), Facing::Right);

        step(&mut machine, Vec2::ZERO);
        assert_eq!(machine.state(), ActionState::Standing);
        assert_eq!(machine.facing(), Facing::Right); // Standing не меняет facing
        assert_eq!(machine.current_clip(), Clip::Standing);
    }

    #[test]
    fn test_attack_ends_when_clip_finishes() {
        let mut machine = player_at(0.0, 0.0);
        assert!(machine.request_attack());
        assert_eq!(machine.current_clip(), Clip::Attack(Facing::Right));

        let duration = ClipLibrary::player().attack.duration_ticks();
        for _ in 0..duration - 1 {
            step(&mut machine, Vec2::new(1.0, 0.0));
            assert!(machine.is_attacking());
            assert_eq!(machine.facing(), Facing::Right);
        }

        // Движение во время атаки применяется
        assert_eq!(machine.position().x, (duration - 1) as f32);

        step(&mut machine, Vec2::new(-1.0, 0.0));
        assert!(!machine.is_attacking());
        assert_eq!(machine.state(), ActionState::RunLeft);
    }

    #[test]
    fn test_attack_keeps_facing_on_reverse_input() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_attack();
        step(&mut machine, Vec2::new(-3.0, 0.0));
        assert_eq!(machine.facing(), Facing::Right);
        assert_eq!(machine.state(), ActionState::Attack);
    }

    #[test]
    fn test_dodge_replays_buffer_scaled() {
        let mut machine = player_at(0.0, 0.0);
        step(&mut machine, Vec2::new(1.0, 0.5));
        let start = machine.position();

        assert!(machine.request_dodge());
        step(&mut machine, Vec2::new(-5.0, -5.0)); // игнорируется

        let expected = start + Vec2::new(1.0, 0.5) * DODGE_SPEED_MULTIPLIER;
        assert_eq!(machine.position(), expected);
        assert_eq!(machine.buffered_movement(), Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_dodge_lateral_dash_when_buffer_null() {
        let mut machine = player_at(10.0, 10.0).with_facing(Facing::Left);
        machine.request_dodge();
        step(&mut machine, Vec2::ZERO);

        let dash = DODGE_DASH * DODGE_SPEED_MULTIPLIER;
        assert_eq!(machine.position(), Vec2::new(10.0 - dash, 10.0));
        assert_eq!(machine.buffered_movement(), Vec2::new(-DODGE_DASH, 0.0));

        // Следующий тик повторяет тот же рывок из buffer
        step(&mut machine, Vec2::ZERO);
        assert_eq!(machine.position(), Vec2::new(10.0 - 2.0 * dash, 10.0));
    }

    #[test]
    fn test_dodge_finishes_into_locomotion() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_dodge();
        let duration = ClipLibrary::player().dodge.duration_ticks();
        for _ in 0..duration - 1 {
            step(&mut machine, Vec2::ZERO);
            assert!(machine.is_dodging());
        }
        step(&mut machine, Vec2::ZERO);
        assert_eq!(machine.state(), ActionState::Standing);
    }

    #[test]
    fn test_conflicting_requests_are_noops() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_attack();
        assert!(!machine.request_dodge());
        assert!(!machine.request_attack());
        assert!(machine.is_attacking());

        let mut machine = player_at(0.0, 0.0);
        machine.request_dodge();
        assert!(!machine.request_attack());
        assert!(!machine.request_dodge());
        assert!(machine.is_dodging());

        let mut machine = player_at(0.0, 0.0);
        machine.request_block();
        assert!(!machine.request_block());
        assert!(machine.is_initiating_block());
    }

    #[test]
    fn test_dodge_cancels_block() {
        let mut machine = player_at(0.0, 0.0);
        assert!(machine.request_block());
        assert!(machine.is_blocking());

        assert!(machine.request_dodge());
        assert!(machine.is_dodging());
        assert!(!machine.is_blocking());
    }

    #[test]
    fn test_attack_from_block_leaves_block() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_block();

        assert!(machine.request_attack());
        assert!(machine.is_attacking());
        assert!(!machine.is_blocking());
        assert_eq!(machine.current_clip(), Clip::Attack(Facing::Right));
    }

    #[test]
    fn test_block_interrupts_attack_and_dodge() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_attack();
        assert!(machine.request_block());
        assert!(machine.is_initiating_block());
        assert!(!machine.is_attacking());

        let mut machine = player_at(0.0, 0.0);
        machine.request_dodge();
        assert!(machine.request_block());
        assert!(machine.is_initiating_block());
        assert!(!machine.is_dodging());
        assert_eq!(machine.current_clip(), Clip::BlockStartup(Facing::Right));
    }

    #[test]
    fn test_block_startup_then_hold_and_walk() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_block();
        assert!(machine.is_initiating_block());

        let startup = ClipLibrary::player().block_startup.duration_ticks();
        for _ in 0..startup - 1 {
            step(&mut machine, Vec2::ZERO);
            assert_eq!(machine.state(), ActionState::BlockStartup);
        }

        step(&mut machine, Vec2::ZERO);
        assert_eq!(machine.state(), ActionState::BlockStand);
        assert!(machine.is_blocking());
        assert!(!machine.is_initiating_block());

        step(&mut machine, Vec2::new(0.0, 1.0));
        assert_eq!(machine.state(), ActionState::BlockWalk);
        assert_eq!(machine.current_clip(), Clip::BlockWalk(Facing::Right));

        // Hold клипы зациклены: блок держится сколько угодно
        for _ in 0..500 {
            step(&mut machine, Vec2::ZERO);
        }
        assert_eq!(machine.state(), ActionState::BlockStand);

        machine.cancel_block();
        assert!(!machine.is_blocking());
        assert_eq!(machine.state(), ActionState::Standing);
    }

    #[test]
    fn test_damage_reaction_is_overlay() {
        let mut machine = player_at(0.0, 0.0);
        machine.request_attack();
        machine.take_damage_reaction();

        assert!(machine.is_attacking());
        assert!(machine.is_damage_reacting());
        assert_eq!(machine.current_clip(), Clip::Damage(Facing::Right));
        // weapon hitbox продолжает читать кадр атаки
        assert_eq!(machine.action_frame_size(), UVec2::new(96, 64));
        assert_eq!(machine.sprite_footprint(), UVec2::new(64, 64));

        machine.clear_damage_reaction();
        assert_eq!(machine.current_clip(), Clip::Attack(Facing::Right));
    }

    #[test]
    fn test_visual_offset_only_while_attacking() {
        let mut machine = player_at(0.0, 0.0).with_facing(Facing::Left);
        assert_eq!(machine.current_visual_offset(), Vec2::ZERO);
        machine.request_attack();
        assert_eq!(machine.current_visual_offset(), Vec2::new(16.0, 0.0));
        machine.end_attack();
        assert_eq!(machine.current_visual_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_plan_does_not_move_until_commit() {
        let mut machine = player_at(5.0, 5.0);
        let candidate = machine.plan(Vec2::new(2.0, 0.0));
        assert_eq!(candidate, Vec2::new(7.0, 5.0));
        assert_eq!(machine.position(), Vec2::new(5.0, 5.0));
        assert_eq!(machine.state(), ActionState::RunRight);

        machine.commit(candidate);
        assert_eq!(machine.position(), candidate);
    }

    #[test]
    fn test_attack_and_dodge_never_coexist() {
        #[derive(Clone, Copy, Debug)]
        enum Request {
            Attack,
            Dodge,
            Block,
            CancelBlock,
            Damage,
            Tick,
        }
        let all = [
            Request::Attack,
            Request::Dodge,
            Request::Block,
            Request::CancelBlock,
            Request::Damage,
            Request::Tick,
        ];

        // Все последовательности длины 4 из 6 запросов
        for code in 0..all.len().pow(4) {
            let mut machine = player_at(0.0, 0.0);
            let mut rest = code;
            for _ in 0..4 {
                let request = all[rest % all.len()];
                rest /= all.len();
                match request {
                    Request::Attack => {
                        machine.request_attack();
                    }
                    Request::Dodge => {
                        machine.request_dodge();
                    }
                    Request::Block => {
                        machine.request_block();
                    }
                    Request::CancelBlock => machine.cancel_block(),
                    Request::Damage => machine.take_damage_reaction(),
                    Request::Tick => step(&mut machine, Vec2::new(1.0, 0.0)),
                }
                assert!(
                    !(machine.is_attacking() && machine.is_dodging()),
                    "attack + dodge after {:?}",
                    request
                );
            }
        }
    }
}
