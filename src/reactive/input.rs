use bevy::prelude::*;

use crate::math::{Point, Real, zero_vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    pub position: Point,
    /// Simulation time of the click, in seconds.
    pub timestamp: Real,
}

/// Pointer state snapshot: cursor position, drag flag and recent clicks.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct InputState {
    pub pointer: Point,
    pub is_dragging: bool,
    pub clicks: Vec<ClickEvent>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: zero_vector(),
            is_dragging: false,
            clicks: Vec::new(),
        }
    }
}

impl InputState {
    pub fn dragging_at(pointer: Point) -> Self {
        Self {
            pointer,
            is_dragging: true,
            ..Self::default()
        }
    }

    pub fn click(&mut self, position: Point, timestamp: Real) {
        self.clicks.push(ClickEvent {
            position,
            timestamp,
        });
    }

    /// Clicks stamped during the tick that starts at `tick_start` and lasts
    /// `dt`, i.e. `tick_start <= timestamp < tick_start + dt`.
    ///
    /// Consecutive ticks cover disjoint intervals, so every click is seen by at
    /// most one tick. A zero-length tick sees none.
    pub fn clicks_in_tick(&self, tick_start: Real, dt: Real) -> impl Iterator<Item = &ClickEvent> {
        let tick_end = tick_start + dt;
        self.clicks
            .iter()
            .filter(move |click| click.timestamp >= tick_start && click.timestamp < tick_end)
    }

    /// Drop clicks older than `retention`.
    pub fn prune(&mut self, now: Real, retention: Real) {
        self.clicks.retain(|click| now - click.timestamp <= retention);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector;

    #[test]
    fn clicks_in_tick_only_sees_its_own_interval() {
        let mut input = InputState::default();
        input.click(vector(1.0, 1.0), 1.0);
        input.click(vector(2.0, 2.0), 0.5);
        input.click(vector(3.0, 3.0), 1.2);

        let current: Vec<Point> = input.clicks_in_tick(1.0, 0.01).map(|c| c.position).collect();
        assert_eq!(current, vec![vector(1.0, 1.0)]);
        assert_eq!(input.clicks_in_tick(1.0, 0.0).count(), 0);
    }

    #[test]
    fn consecutive_short_ticks_never_share_a_click() {
        let dt = 1.0 / 144.0;
        let mut input = InputState::default();
        input.click(vector(1.0, 1.0), 0.0);

        let mut tick_start = 0.0;
        let mut seen = 0;
        for _ in 0..10 {
            seen += input.clicks_in_tick(tick_start, dt).count();
            tick_start += dt;
        }
        assert_eq!(seen, 1);
    }

    #[test]
    fn prune_drops_stale_clicks() {
        let mut input = InputState::default();
        input.click(vector(1.0, 1.0), 0.0);
        input.click(vector(2.0, 2.0), 0.9);
        input.prune(1.0, 0.25);
        assert_eq!(input.clicks.len(), 1);
        assert_eq!(input.clicks[0].timestamp, 0.9);
    }
}
