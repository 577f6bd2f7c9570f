//! Directional frame animation for walking sprites.
//!
//! A sprite's frames are laid out as four consecutive blocks, one per
//! [`Direction`] in Up, Right, Down, Left order, each `frames_per_direction`
//! long. Every step in the facing direction shows the next frame of the
//! block; turning jumps to the first frame of the new block.

use bevy_ecs::prelude::Component;

use crate::components::direction::Direction;
use crate::resources::framestore::FrameSet;

#[derive(Debug, Clone, Component)]
pub struct AnimatedSprite {
    pub frames: FrameSet,
    pub frames_per_direction: usize,
    pub direction: Direction,
    pub frame_index: usize,
}

impl AnimatedSprite {
    /// Create a sprite facing `direction`, showing the first frame of its block.
    pub fn new(frames: FrameSet, frames_per_direction: usize, direction: Direction) -> Self {
        debug_assert_eq!(frames.len(), 4 * frames_per_direction);
        Self {
            frame_index: direction.index() * frames_per_direction,
            frames,
            frames_per_direction,
            direction,
        }
    }

    /// Start on a specific frame. Out-of-range indices fall back to the block start.
    pub fn with_frame_index(mut self, frame_index: usize) -> Self {
        if frame_index < self.frames.len() {
            self.frame_index = frame_index;
        }
        self
    }

    /// First frame index of `direction`'s block.
    pub fn block_start(&self, direction: Direction) -> usize {
        direction.index() * self.frames_per_direction
    }

    /// Step the animation towards `direction`.
    pub fn advance(&mut self, direction: Direction) {
        let base = self.block_start(direction);
        if direction != self.direction {
            self.direction = direction;
            self.frame_index = base;
        } else {
            self.frame_index += 1;
            if self.frame_index >= base + self.frames_per_direction {
                self.frame_index = base;
            }
        }
    }

    /// Texture key of the frame currently shown.
    pub fn current_frame(&self) -> Option<&str> {
        self.frames.get(self.frame_index).map(|key| &**key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn frames(per_direction: usize) -> FrameSet {
        (0..4 * per_direction)
            .map(|i| Arc::<str>::from(format!("frame/{i}.png")))
            .collect()
    }

    #[test]
    fn advance_same_direction_wraps_within_block() {
        for per in [1usize, 3, 5] {
            for dir in Direction::ALL {
                let mut sprite = AnimatedSprite::new(frames(per), per, dir);
                let base = dir.index() * per;
                for step in 1..per {
                    sprite.advance(dir);
                    assert_eq!(sprite.frame_index, base + step);
                }
                sprite.advance(dir);
                assert_eq!(sprite.frame_index, base, "per={per} dir={dir:?}");
            }
        }
    }

    #[test]
    fn advance_new_direction_resets_to_block_start() {
        for from in Direction::ALL {
            for to in Direction::ALL.into_iter().filter(|d| *d != from) {
                let mut sprite = AnimatedSprite::new(frames(3), 3, from);
                sprite.advance(from);
                sprite.advance(to);
                assert_eq!(sprite.direction, to);
                assert_eq!(sprite.frame_index, to.index() * 3);
            }
        }
    }

    #[test]
    fn frame_index_stays_in_range() {
        let mut sprite = AnimatedSprite::new(frames(3), 3, Direction::Down).with_frame_index(7);
        let path = [
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Left,
            Direction::Left,
            Direction::Up,
        ];
        for dir in path {
            sprite.advance(dir);
            assert!(sprite.frame_index < sprite.frames.len());
        }
    }

    #[test]
    fn with_frame_index_ignores_out_of_range() {
        let sprite = AnimatedSprite::new(frames(3), 3, Direction::Right).with_frame_index(12);
        assert_eq!(sprite.frame_index, 3);
        assert_eq!(sprite.current_frame(), Some("frame/3.png"));
    }
}
