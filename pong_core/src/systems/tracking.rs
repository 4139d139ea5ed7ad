use crate::{Paddle, Playfield, Tracking};

/// Clamp a desired paddle top to the play channel
pub fn clamp_top(field: &Playfield, paddle_height: f32, desired_top: f32) -> f32 {
    desired_top.clamp(field.inner_top(), field.inner_bottom() - paddle_height)
}

/// Move a paddle to `desired_top`, keeping it between the bars. Returns the applied top.
pub fn clamp_paddle(paddle: &mut Paddle, field: &Playfield, desired_top: f32) -> f32 {
    if desired_top.is_nan() {
        return paddle.top;
    }
    paddle.top = clamp_top(field, paddle.height, desired_top);
    paddle.top
}

/// Elastic movement of a paddle top toward a desired paddle centre.
///
/// Changes below `min_speed` snap straight to the target. The comparison is on
/// the signed change, so any upward move snaps in a single step while downward
/// moves are damped by `elasticity` and capped at `max_speed`. The caller is
/// responsible for clamping the result.
pub fn elastic_track(
    current_top: f32,
    desired_center: f32,
    paddle_height: f32,
    tracking: &Tracking,
) -> f32 {
    let desired_top = desired_center - paddle_height / 2.0;
    let mut change = desired_top - current_top;

    if change < tracking.min_speed {
        return desired_top;
    }

    if change.abs() > tracking.max_speed {
        change = change.signum() * tracking.max_speed;
    } else {
        change *= tracking.elasticity;
    }

    current_top + change
}
