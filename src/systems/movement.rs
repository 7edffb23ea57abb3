use bevy::prelude::*;

use crate::components::{AnimationKey, Player, Velocity};
use crate::resources::constants::{PLAYER_COLLIDER_HALF, PLAYER_SPEED};
use crate::resources::{WorldColliders, WorldMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Snapshot of the four directional input flags for one frame
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionalInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            left: keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::ArrowRight),
            up: keyboard.pressed(KeyCode::ArrowUp),
            down: keyboard.pressed(KeyCode::ArrowDown),
        }
    }

    fn is_down(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// One row of the movement decision table
pub struct MoveRule {
    pub direction: Direction,
    /// Unit direction, scaled by PLAYER_SPEED when applied
    pub velocity: Vec2,
    pub animation: AnimationKey,
    /// Left and right share the side clip and differ only in mirroring;
    /// vertical movement leaves the current mirroring alone.
    pub flip_x: Option<bool>,
}

/// Ordered decision table: the first row whose input flag is down wins, so
/// at most one direction applies per frame. Up is +Y in world space.
pub const MOVE_RULES: [MoveRule; 4] = [
    MoveRule {
        direction: Direction::Left,
        velocity: Vec2::new(-1.0, 0.0),
        animation: AnimationKey::WalkSide,
        flip_x: Some(true),
    },
    MoveRule {
        direction: Direction::Right,
        velocity: Vec2::new(1.0, 0.0),
        animation: AnimationKey::WalkSide,
        flip_x: Some(false),
    },
    MoveRule {
        direction: Direction::Up,
        velocity: Vec2::new(0.0, 1.0),
        animation: AnimationKey::WalkUp,
        flip_x: None,
    },
    MoveRule {
        direction: Direction::Down,
        velocity: Vec2::new(0.0, -1.0),
        animation: AnimationKey::WalkDown,
        flip_x: None,
    },
];

pub fn resolve_direction(input: DirectionalInput) -> Option<&'static MoveRule> {
    MOVE_RULES.iter().find(|rule| input.is_down(rule.direction))
}

/// Translate this frame's input into velocity, clip, and mirroring
pub fn decide_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Velocity, &mut AnimationKey, &mut Sprite), With<Player>>,
) {
    let Ok((mut velocity, mut animation, mut sprite)) = query.get_single_mut() else {
        return;
    };

    velocity.0 = Vec2::ZERO;
    match resolve_direction(DirectionalInput::from_keyboard(&keyboard)) {
        Some(rule) => {
            velocity.0 = rule.velocity * PLAYER_SPEED;
            animation.set_if_neq(rule.animation);
            if let Some(flip) = rule.flip_x {
                sprite.flip_x = flip;
            }
        }
        None => {
            animation.set_if_neq(AnimationKey::IdleDown);
        }
    }
}

/// Integrate velocity against the static colliders and the map bounds
pub fn apply_movement(
    time: Res<Time>,
    map: Res<WorldMap>,
    colliders: Res<WorldColliders>,
    mut query: Query<(&mut Transform, &Velocity), With<Player>>,
) {
    let Ok((mut transform, velocity)) = query.get_single_mut() else {
        return;
    };
    if velocity.0 == Vec2::ZERO {
        return;
    }

    let half = Vec2::splat(PLAYER_COLLIDER_HALF);
    let origin = transform.translation.truncate();
    let delta = velocity.0 * time.delta_secs();

    let mut position = resolve_movement(origin, half, delta, &colliders.solids);
    position = clamp_to_bounds(position, half, map.pixel_size);
    transform.translation = position.extend(transform.translation.z);
}

/// Move axis-by-axis, dropping an axis entirely when the step would land the
/// player's box inside a solid. Sliding along the free axis falls out of the
/// per-axis treatment.
pub fn resolve_movement(origin: Vec2, half: Vec2, delta: Vec2, solids: &[Rect]) -> Vec2 {
    let mut position = origin;

    let stepped_x = Vec2::new(position.x + delta.x, position.y);
    if delta.x != 0.0 && !overlaps_any(stepped_x, half, solids) {
        position = stepped_x;
    }

    let stepped_y = Vec2::new(position.x, position.y + delta.y);
    if delta.y != 0.0 && !overlaps_any(stepped_y, half, solids) {
        position = stepped_y;
    }

    position
}

/// Keep the player's box inside the map rectangle (collide-world-bounds)
pub fn clamp_to_bounds(position: Vec2, half: Vec2, map_size: Vec2) -> Vec2 {
    position.clamp(half, map_size - half)
}

fn overlaps_any(center: Vec2, half: Vec2, solids: &[Rect]) -> bool {
    let body = Rect::from_center_half_size(center, half);
    solids.iter().any(|solid| !solid.intersect(body).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_wins_over_everything() {
        let input = DirectionalInput {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        let rule = resolve_direction(input).expect("a rule");
        assert_eq!(rule.direction, Direction::Left);
        assert_eq!(rule.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(rule.animation, AnimationKey::WalkSide);
        assert_eq!(rule.flip_x, Some(true));
    }

    #[test]
    fn priority_order_is_left_right_up_down() {
        let rule = resolve_direction(DirectionalInput {
            right: true,
            up: true,
            down: true,
            ..Default::default()
        })
        .expect("a rule");
        assert_eq!(rule.direction, Direction::Right);
        assert_eq!(rule.flip_x, Some(false));

        let rule = resolve_direction(DirectionalInput {
            up: true,
            down: true,
            ..Default::default()
        })
        .expect("a rule");
        assert_eq!(rule.direction, Direction::Up);
        assert_eq!(rule.animation, AnimationKey::WalkUp);

        let rule = resolve_direction(DirectionalInput {
            down: true,
            ..Default::default()
        })
        .expect("a rule");
        assert_eq!(rule.direction, Direction::Down);
        assert_eq!(rule.animation, AnimationKey::WalkDown);
    }

    #[test]
    fn no_input_resolves_to_no_rule() {
        assert!(resolve_direction(DirectionalInput::default()).is_none());
    }

    #[test]
    fn vertical_rules_leave_mirroring_alone() {
        for direction in [Direction::Up, Direction::Down] {
            let rule = MOVE_RULES
                .iter()
                .find(|rule| rule.direction == direction)
                .expect("rule");
            assert_eq!(rule.flip_x, None);
        }
    }

    #[test]
    fn free_movement_applies_both_axes() {
        let position = resolve_movement(Vec2::new(10.0, 10.0), Vec2::splat(4.0), Vec2::new(2.0, -3.0), &[]);
        assert_eq!(position, Vec2::new(12.0, 7.0));
    }

    #[test]
    fn solid_blocks_one_axis_and_keeps_the_other() {
        // Wall immediately to the right of the player's box.
        let wall = Rect::new(16.0, 0.0, 32.0, 64.0);
        let position = resolve_movement(
            Vec2::new(10.0, 32.0),
            Vec2::splat(4.0),
            Vec2::new(4.0, 4.0),
            &[wall],
        );
        // X step would overlap the wall, Y step is free.
        assert_eq!(position, Vec2::new(10.0, 36.0));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        // Box edge exactly flush with the wall: a degenerate intersection,
        // not an overlap.
        let wall = Rect::new(16.0, 0.0, 32.0, 64.0);
        let position = resolve_movement(
            Vec2::new(8.0, 32.0),
            Vec2::splat(4.0),
            Vec2::new(4.0, 0.0),
            &[wall],
        );
        assert_eq!(position, Vec2::new(12.0, 32.0));
    }

    #[test]
    fn bounds_clamp_the_player_box() {
        let half = Vec2::splat(12.0);
        let map = Vec2::new(800.0, 400.0);
        assert_eq!(clamp_to_bounds(Vec2::new(-5.0, 200.0), half, map), Vec2::new(12.0, 200.0));
        assert_eq!(
            clamp_to_bounds(Vec2::new(795.0, 399.0), half, map),
            Vec2::new(788.0, 388.0)
        );
    }
}
