use hecs::World;

use crate::{Aabb, Ball, Events, Paddle, Playfield, Side};

/// Check ball collisions with the bars and paddles.
///
/// Every overlap is resolved independently in the order top bar, bottom bar,
/// left paddle, right paddle; the last write on an axis wins. Velocity is
/// assigned by sign rather than flipped so a ball still inside a box on the
/// next tick keeps heading out of it.
pub fn check_collisions(world: &mut World, field: &Playfield, events: &mut Events) {
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.bounds()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let top_bar = field.top_bar();
    let bottom_bar = field.bottom_bar();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();

        if bounds.overlaps(&top_bar) {
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
        if bounds.overlaps(&bottom_bar) {
            ball.vel.y = -ball.vel.y.abs();
            events.ball_hit_wall = true;
        }

        for (side, paddle) in &paddles {
            if bounds.overlaps(paddle) {
                ball.vel.x = match side {
                    Side::Left => ball.vel.x.abs(),
                    Side::Right => -ball.vel.x.abs(),
                };
                events.ball_hit_paddle = true;
            }
        }
    }
}
