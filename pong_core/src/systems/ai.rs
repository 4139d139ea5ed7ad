use hecs::World;

use super::tracking::{clamp_paddle, elastic_track};
use crate::{Ball, Control, ControlsConfig, Paddle, Playfield, Time};

/// Move AI paddles toward the ball centre while the ball is heading their way.
/// A paddle holds position while the ball travels away from its side.
pub fn drive_ai(world: &mut World, time: &Time, field: &Playfield, controls: &ControlsConfig) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let ball = match ball {
        Some(ball) => ball,
        None => return,
    };
    if time.dt <= 0.0 {
        return;
    }

    let tracking = controls.ai_tracking().scaled(time.dt);
    let target = ball.center_y();

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &Control)>() {
        if *control != Control::Ai || !paddle.side.is_approached_by(ball.vel.x) {
            continue;
        }
        let desired_top = elastic_track(paddle.top, target, paddle.height, &tracking);
        clamp_paddle(paddle, field, desired_top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Params, Side};
    use glam::Vec2;

    fn setup(side: Side, top: f32) -> (World, Playfield, hecs::Entity) {
        let mut world = World::new();
        let field = Playfield::new(500.0, 500.0, 20.0, 40.0);
        let x = field.paddle_x(side, 20.0);
        let paddle = world.spawn((Paddle::new(side, x, top, 20.0, 80.0), Control::Ai));
        (world, field, paddle)
    }

    #[test]
    fn test_ai_tracks_approaching_ball() {
        let (mut world, field, paddle) = setup(Side::Right, 100.0);
        // Ball centre at 400 -> desired top 360, change capped at max speed
        create_ball(&mut world, Vec2::new(250.0, 390.0), Vec2::new(600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());

        let top = world.get::<&Paddle>(paddle).unwrap().top;
        assert_eq!(top, 115.0, "AI should move one capped step down");
    }

    #[test]
    fn test_ai_holds_when_ball_moves_away() {
        let (mut world, field, paddle) = setup(Side::Right, 100.0);
        create_ball(&mut world, Vec2::new(250.0, 390.0), Vec2::new(-600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, 100.0);
    }

    #[test]
    fn test_left_side_ai_tracks_leftward_ball() {
        let (mut world, field, paddle) = setup(Side::Left, 200.0);
        // Ball centre at 250 -> desired top 210, change 10 damped by 0.2
        create_ball(&mut world, Vec2::new(250.0, 240.0), Vec2::new(-600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());

        let top = world.get::<&Paddle>(paddle).unwrap().top;
        assert!((top - 202.0).abs() < 1e-4, "Expected 202, got {}", top);
    }

    #[test]
    fn test_ai_result_is_clamped() {
        let (mut world, field, paddle) = setup(Side::Right, 100.0);
        // Upward targets snap; the snap lands above the top bar and is clamped
        create_ball(&mut world, Vec2::new(250.0, 0.0), Vec2::new(600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, field.inner_top());
    }

    #[test]
    fn test_human_paddle_ignored() {
        let mut world = World::new();
        let field = Playfield::new(500.0, 500.0, 20.0, 40.0);
        let paddle = world.spawn((
            Paddle::new(Side::Right, 440.0, 100.0, 20.0, 80.0),
            Control::Keyboard,
        ));
        create_ball(&mut world, Vec2::new(250.0, 390.0), Vec2::new(600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, 100.0);
    }

    #[test]
    fn test_ai_step_scales_with_dt() {
        let (mut world, field, paddle) = setup(Side::Right, 100.0);
        create_ball(&mut world, Vec2::new(250.0, 390.0), Vec2::new(600.0, 0.0), 20.0);

        // One tick twice as long as the tracking step moves twice as far
        let time = Time::new(Params::TRACKING_DT * 2.0, 0.0);
        drive_ai(&mut world, &time, &field, &ControlsConfig::default());

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, 130.0);
    }

    #[test]
    fn test_zero_dt_holds_ai_paddle() {
        let (mut world, field, paddle) = setup(Side::Right, 200.0);
        // Ball above the paddle: an upward change would otherwise snap
        create_ball(&mut world, Vec2::new(250.0, 90.0), Vec2::new(600.0, 0.0), 20.0);

        drive_ai(&mut world, &Time::new(0.0, 0.0), &field, &ControlsConfig::default());

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, 200.0);
    }

    #[test]
    fn test_no_ball_is_noop() {
        let (mut world, field, paddle) = setup(Side::Right, 100.0);
        drive_ai(&mut world, &Time::default(), &field, &ControlsConfig::default());
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().top, 100.0);
    }
}
