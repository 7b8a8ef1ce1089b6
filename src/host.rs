//! Glue between the helpers in this crate and a host game engine.
//!
//! The engine is reached only through the small capability traits below,
//! which the integration layer implements on its own node, tween and input
//! types. Everything here is plain logic over those traits and can be
//! driven by test doubles.

use rand::Rng;
use tracing::debug;

use crate::error::{Result, UtilError};
use crate::vector::Vec2;

/// Something that can animate a 2D offset, e.g. a camera tween.
pub trait PropertyAnimator {
    /// Appends a move to `offset` lasting `duration` seconds after any
    /// previously queued moves.
    fn queue_offset(&mut self, offset: Vec2, duration: f64);
}

/// Analog input by action name; digital inputs report 0 or 1.
pub trait InputSource {
    fn action_strength(&self, action: &str) -> f64;
}

/// A node in the host's scene tree.
pub trait SceneNode {
    fn name(&self) -> &str;
    fn children(&self) -> Vec<&dyn SceneNode>;
}

/// Queues a decaying random shake on `animator`.
///
/// `steps` offsets are queued, each lasting `duration / steps` seconds. Step
/// `i` is drawn uniformly from the square of half-width
/// `intensity · (1 − i/steps)`, so the shake fades linearly. A final move
/// back to [`Vec2::ZERO`] follows, and the total number of queued moves
/// (`steps + 1`) is returned.
///
/// # Errors
/// Returns `InvalidArgument` if `steps == 0`, `duration` is not positive
/// or `intensity` is negative.
pub fn screen_shake<A, R>(
    animator: &mut A,
    intensity: f64,
    duration: f64,
    steps: usize,
    rng: &mut R,
) -> Result<usize>
where
    A: PropertyAnimator + ?Sized,
    R: Rng,
{
    if steps == 0 {
        return Err(UtilError::invalid("steps", "must be at least 1"));
    }
    if !(duration > 0.0) {
        return Err(UtilError::invalid(
            "duration",
            format!("must be positive, got {duration}"),
        ));
    }
    if !(intensity >= 0.0) {
        return Err(UtilError::invalid(
            "intensity",
            format!("must be non-negative, got {intensity}"),
        ));
    }

    let step_duration = duration / steps as f64;
    for i in 0..steps {
        let amplitude = intensity * (1.0 - i as f64 / steps as f64);
        let offset = Vec2::new(
            rng.random_range(-1.0_f64..=1.0) * amplitude,
            rng.random_range(-1.0_f64..=1.0) * amplitude,
        );
        animator.queue_offset(offset, step_duration);
    }
    animator.queue_offset(Vec2::ZERO, step_duration);
    debug!(intensity, duration, steps, "queued screen shake");
    Ok(steps + 1)
}

/// Movement vector from four actions, with `up` along +y.
///
/// Diagonals are clamped to unit length; partial analog input below
/// length 1 passes through unchanged.
pub fn input_vector<I: InputSource + ?Sized>(
    input: &I,
    left: &str,
    right: &str,
    up: &str,
    down: &str,
) -> Vec2 {
    let raw = Vec2::new(
        input.action_strength(right) - input.action_strength(left),
        input.action_strength(up) - input.action_strength(down),
    );
    raw.limit_length(1.0)
}

/// Depth-first search for the first node called `name`, `root` included.
pub fn find_node_by_name<'a>(root: &'a dyn SceneNode, name: &str) -> Option<&'a dyn SceneNode> {
    if root.name() == name {
        return Some(root);
    }
    root.children()
        .into_iter()
        .find_map(|child| find_node_by_name(child, name))
}

/// Names of `root` and all descendants in depth-first pre-order.
pub fn collect_nodes(root: &dyn SceneNode) -> Vec<String> {
    let mut names = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        names.push(node.name().to_string());
        let children = node.children();
        stack.extend(children.into_iter().rev());
    }
    names
}
