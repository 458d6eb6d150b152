//! ActionMachine — authoritative per-actor action state.
//!
//! Переходы за тик (до движения):
//! 1. Dodge, клип доигран → выход из Dodge
//! 2. Attack, клип доигран → выход из Attack
//! 3. Удерживаемый блок, клип доигран → выход (hold клипы зациклены, на практике только cancel_block)
//! 4. BlockStartup, клип доигран → BlockStand
//! 5. Выбор смещения (dodge replay / block walk / attack / locomotion)
//! 6. Применённое смещение (до ×3) → buffered movement

use bevy::prelude::*;

use super::state::{ActionState, Facing};
use crate::animation::{AnimationClip, Clip, ClipLibrary, ClipPlayback, VisualProfile};

/// Множитель смещения во время dodge
pub const DODGE_SPEED_MULTIPLIER: f32 = 3.0;
/// Боковой рывок (до множителя), если buffered movement нулевой
pub const DODGE_DASH: f32 = 4.0;

/// Желаемое смещение на текущий тик
///
/// Пишется input/AI системами, читается movement pass.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveIntent {
    pub displacement: Vec2,
}

impl MoveIntent {
    pub fn new(displacement: Vec2) -> Self {
        Self { displacement }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionMachine {
    position: Vec2,
    facing: Facing,
    buffered_movement: Vec2,
    state: ActionState,
    /// Damage reaction overlay (визуальный, не блокирует действия)
    damage_reaction: Option<ClipPlayback>,
    playback: ClipPlayback,
    clips: ClipLibrary,
    visual: VisualProfile,
}

impl ActionMachine {
    pub fn new(position: Vec2, clips: ClipLibrary, visual: VisualProfile) -> Self {
        let playback = ClipPlayback::looping(Clip::Standing, clips.spec(Clip::Standing));
        Self {
            position,
            facing: Facing::Right,
            buffered_movement: Vec2::ZERO,
            state: ActionState::Standing,
            damage_reaction: None,
            playback,
            clips,
            visual,
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    // === Accessors ===

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn buffered_movement(&self) -> Vec2 {
        self.buffered_movement
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn is_attacking(&self) -> bool {
        self.state.is_attacking()
    }

    pub fn is_dodging(&self) -> bool {
        self.state.is_dodging()
    }

    pub fn is_blocking(&self) -> bool {
        self.state.is_blocking()
    }

    pub fn is_initiating_block(&self) -> bool {
        self.state.is_initiating_block()
    }

    pub fn is_damage_reacting(&self) -> bool {
        self.damage_reaction.is_some()
    }

    /// Playback действия (без damage overlay)
    pub fn playback(&self) -> &ClipPlayback {
        &self.playback
    }

    pub fn clips(&self) -> &ClipLibrary {
        &self.clips
    }

    /// Клип для отображения: overlay урона перекрывает действие
    pub fn current_clip(&self) -> Clip {
        match &self.damage_reaction {
            Some(reaction) => reaction.clip(),
            None => self.playback.clip(),
        }
    }

    /// Смещение спрайта (только во время атаки)
    pub fn current_visual_offset(&self) -> Vec2 {
        if self.is_attacking() {
            self.visual.attack_offset(self.facing)
        } else {
            Vec2::ZERO
        }
    }

    /// Размер кадра текущего действия (weapon hitbox)
    pub fn action_frame_size(&self) -> UVec2 {
        self.playback.current_frame_size()
    }

    /// Размер отображаемого спрайта
    pub fn sprite_footprint(&self) -> UVec2 {
        match &self.damage_reaction {
            Some(reaction) => reaction.current_frame_size(),
            None => self.playback.current_frame_size(),
        }
    }

    // === Tick ===

    /// Один тик клипов (completion signal для `plan`)
    pub fn advance_playback(&mut self) {
        self.playback.advance();
        if let Some(reaction) = self.damage_reaction.as_mut() {
            reaction.advance();
        }
    }

    /// Правила 1–6: обновляет действие/facing/buffer, возвращает кандидат позиции.
    ///
    /// Позиция не меняется до `commit`.
    pub fn plan(&mut self, requested: Vec2) -> Vec2 {
        self.expire_finished_clips();

        let applied = match self.state {
            ActionState::Dodge => {
                if self.buffered_movement == Vec2::ZERO {
                    Vec2::new(DODGE_DASH * self.facing.sign(), 0.0)
                } else {
                    self.buffered_movement
                }
            }
            ActionState::BlockStand | ActionState::BlockWalk => {
                let next = if requested != Vec2::ZERO {
                    ActionState::BlockWalk
                } else {
                    ActionState::BlockStand
                };
                if next != self.state {
                    let clip = match next {
                        ActionState::BlockWalk => Clip::BlockWalk(self.facing),
                        _ => Clip::BlockStand(self.facing),
                    };
                    self.enter_looping(next, clip);
                }
                requested
            }
            ActionState::Attack | ActionState::BlockStartup => requested,
            ActionState::Standing | ActionState::RunLeft | ActionState::RunRight => {
                self.select_locomotion(requested);
                requested
            }
        };

        self.buffered_movement = applied;

        let displacement = if self.is_dodging() {
            applied * DODGE_SPEED_MULTIPLIER
        } else {
            applied
        };
        self.position + displacement
    }

    pub fn commit(&mut self, candidate: Vec2) {
        self.position = candidate;
    }

    /// plan + commit без veto
    pub fn tick(&mut self, requested: Vec2) {
        let candidate = self.plan(requested);
        self.commit(candidate);
    }

    fn expire_finished_clips(&mut self) {
        if self.playback.is_playing() {
            return;
        }

        match self.state {
            ActionState::Dodge | ActionState::Attack => self.enter_standing(),
            ActionState::BlockStand | ActionState::BlockWalk => self.enter_standing(),
            ActionState::BlockStartup => {
                self.enter_looping(ActionState::BlockStand, Clip::BlockStand(self.facing))
            }
            ActionState::Standing | ActionState::RunLeft | ActionState::RunRight => {}
        }
    }

    fn select_locomotion(&mut self, requested: Vec2) {
        let vertical_only = requested.x == 0.0 && requested.y != 0.0;

        let next = if requested.x > 0.0 || (vertical_only && self.facing == Facing::Right) {
            ActionState::RunRight
        } else if requested.x < 0.0 || (vertical_only && self.facing == Facing::Left) {
            ActionState::RunLeft
        } else {
            ActionState::Standing
        };

        match next {
            ActionState::RunRight => self.facing = Facing::Right,
            ActionState::RunLeft => self.facing = Facing::Left,
            _ => {}
        }

        // Тот же клип не перезапускается
        if next != self.state {
            let clip = match next {
                ActionState::RunRight => Clip::RunRight,
                ActionState::RunLeft => Clip::RunLeft,
                _ => Clip::Standing,
            };
            self.enter_looping(next, clip);
        }
    }

    fn enter_standing(&mut self) {
        self.enter_looping(ActionState::Standing, Clip::Standing);
    }

    fn enter_looping(&mut self, state: ActionState, clip: Clip) {
        self.state = state;
        self.playback = ClipPlayback::looping(clip, self.clips.spec(clip));
    }

    fn enter_once(&mut self, state: ActionState, clip: Clip) {
        self.state = state;
        self.playback = ClipPlayback::once(clip, self.clips.spec(clip));
    }

    // === Requests ===

    /// No-op (false) во время attack / dodge; выходит из блока
    pub fn request_attack(&mut self) -> bool {
        if self.is_attacking() || self.is_dodging() {
            return false;
        }
        self.enter_once(ActionState::Attack, Clip::Attack(self.facing));
        true
    }

    /// No-op во время dodge / attack; отменяет блок
    pub fn request_dodge(&mut self) -> bool {
        if self.is_dodging() || self.is_attacking() {
            return false;
        }
        self.enter_once(ActionState::Dodge, Clip::Dodge(self.facing));
        true
    }

    /// No-op во время block; прерывает attack / dodge
    pub fn request_block(&mut self) -> bool {
        if self.is_blocking() {
            return false;
        }
        self.enter_once(ActionState::BlockStartup, Clip::BlockStartup(self.facing));
        true
    }

    pub fn cancel_block(&mut self) {
        if self.is_blocking() {
            self.enter_standing();
        }
    }

    /// Всегда разрешено; attack/dodge/block не сбрасываются
    pub fn take_damage_reaction(&mut self) {
        if self.damage_reaction.is_none() {
            let clip = Clip::Damage(self.facing);
            self.damage_reaction = Some(ClipPlayback::looping(clip, self.clips.spec(clip)));
        }
    }

    pub fn clear_damage_reaction(&mut self) {
        self.damage_reaction = None;
    }

    /// Принудительный выход из Attack (attack cooldown)
    pub fn end_attack(&mut self) {
        if self.is_attacking() {
            self.enter_standing();
        }
    }

    /// Принудительный выход из Dodge (bounce от стены/актора)
    pub fn cancel_dodge(&mut self) {
        if self.is_dodging() {
            self.enter_standing();
        }
    }

    pub fn nudge(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
