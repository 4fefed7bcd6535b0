//! Collision resolution against the ground and platforms
//!
//! Platforms are one-way: a body only lands on them while falling, so jumps
//! pass through from below. The ground always catches whatever reaches it.

use serde::{Deserialize, Serialize};

use super::actor::Body;
use super::world::World;

/// What a body came to rest on, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    Ground,
    Platform { index: usize },
}

/// Resolve a body's vertical motion against the world
///
/// Platform rule first: while falling, the first platform (left to right)
/// whose segments overlap the body's box snaps the body's bottom to its top.
/// Ground rule second: a bottom at or below the ground line snaps to it,
/// overriding any platform claim. Both zero vertical velocity and clear the
/// airborne flag. Returns what the body landed on.
pub fn resolve_vertical(body: &mut Body, world: &World) -> Option<Support> {
    let mut support = None;

    if body.falling() {
        let rect = body.rect();
        for (index, platform) in world.platforms.iter().enumerate() {
            if platform.overlaps(&rect) {
                body.snap_bottom_to(platform.top);
                body.vel.y = 0.0;
                body.airborne = false;
                support = Some(Support::Platform { index });
                break;
            }
        }
    }

    if body.bottom() >= world.ground_y {
        body.snap_bottom_to(world.ground_y);
        body.vel.y = 0.0;
        body.airborne = false;
        support = Some(Support::Ground);
    }

    support
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::world::Platform;
    use glam::Vec2;
    use proptest::prelude::*;

    fn arena() -> World {
        World {
            ground_y: GROUND_Y,
            platforms: PLATFORM_XS
                .iter()
                .map(|&x| Platform::new(x, PLATFORM_TOP_Y))
                .collect(),
            stars: Vec::new(),
        }
    }

    fn hero_body(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(HERO_WIDTH, HERO_HEIGHT))
    }

    #[test]
    fn test_ground_snaps_and_zeroes_velocity() {
        let world = arena();
        let mut body = hero_body(100.0, 495.0);
        body.vel.y = 9.0;
        body.airborne = true;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, Some(Support::Ground));
        assert_eq!(body.bottom(), GROUND_Y);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.airborne);
    }

    #[test]
    fn test_airborne_body_above_ground_untouched() {
        let world = arena();
        let mut body = hero_body(100.0, 200.0);
        body.vel.y = -5.0;
        body.airborne = true;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, None);
        assert_eq!(body.pos.y, 200.0);
        assert_eq!(body.vel.y, -5.0);
        assert!(body.airborne);
    }

    #[test]
    fn test_platform_snap_rests_exactly_on_top() {
        let world = arena();
        // Over the first platform, bottom just past its top edge
        let mut body = hero_body(216.0, 390.0);
        body.vel.y = 6.0;
        body.airborne = true;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, Some(Support::Platform { index: 0 }));
        assert_eq!(body.bottom(), PLATFORM_TOP_Y);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.airborne);
    }

    #[test]
    fn test_rising_body_passes_through_platform() {
        let world = arena();
        let mut body = hero_body(216.0, 405.0);
        body.vel.y = -12.0;
        body.airborne = true;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, None);
        assert_eq!(body.pos.y, 405.0);
        assert_eq!(body.vel.y, -12.0);
    }

    #[test]
    fn test_body_between_platforms_keeps_falling() {
        let world = arena();
        // x=350 sits in the gap between the first and second platforms
        let mut body = hero_body(350.0, 400.0);
        body.vel.y = 6.0;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, None);
        assert_eq!(body.vel.y, 6.0);
    }

    #[test]
    fn test_leftmost_platform_wins_when_several_overlap() {
        let mut world = arena();
        // Force two platforms onto the same span
        world.platforms = vec![Platform::new(200.0, 400.0), Platform::new(200.0, 400.0)];
        let mut body = hero_body(216.0, 390.0);
        body.vel.y = 6.0;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, Some(Support::Platform { index: 0 }));
    }

    #[test]
    fn test_bare_world_ground_still_applies() {
        let world = World::bare();
        let mut body = hero_body(400.0, 600.0);
        body.vel.y = 20.0;

        let support = resolve_vertical(&mut body, &world);
        assert_eq!(support, Some(Support::Ground));
        assert_eq!(body.bottom(), GROUND_Y);
    }

    proptest! {
        #[test]
        fn prop_bottom_never_exceeds_ground(
            x in 0.0f32..800.0,
            y in -600.0f32..1200.0,
            vy in -40.0f32..40.0,
        ) {
            let world = arena();
            let mut body = hero_body(x, y);
            body.vel.y = vy;
            resolve_vertical(&mut body, &world);
            prop_assert!(body.bottom() <= world.ground_y);
        }

        #[test]
        fn prop_falling_onto_platform_rests_exactly(
            x in 200.0f32..296.0,
            vy in 1.0f32..14.0,
        ) {
            let world = arena();
            let mut body = hero_body(x, 390.0);
            body.vel.y = vy;
            body.airborne = true;
            let support = resolve_vertical(&mut body, &world);
            prop_assert_eq!(support, Some(Support::Platform { index: 0 }));
            prop_assert_eq!(body.bottom(), PLATFORM_TOP_Y);
            prop_assert_eq!(body.vel.y, 0.0);
        }
    }
}
