//! Turning raw keyboard and analog stick input into movement directions.

use crate::direction::{DirectionMask, HexDirection};
use log::trace;
use std::{
    f32::consts::{FRAC_PI_2, FRAC_PI_6},
    time::{Duration, Instant},
};

/// Stick readings at or below this magnitude are ignored
pub const DEFAULT_DEAD_ZONE: f32 = 0.1;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Keyboard layout: the six keys around `s` point the way they sit on a
/// QWERTY keyboard.
pub fn direction_for_key(key: char) -> Option<HexDirection> {
    match key.to_ascii_lowercase() {
        'q' => Some(HexDirection::NorthWest),
        'w' => Some(HexDirection::North),
        'e' => Some(HexDirection::NorthEast),
        'a' => Some(HexDirection::SouthWest),
        's' => Some(HexDirection::South),
        'd' => Some(HexDirection::SouthEast),
        _ => None,
    }
}

/// Position of an analog stick. Both axes are in `[-1, 1]`; positive
/// `east_west` is east and positive `north_south` is south.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StickAxes {
    pub east_west: f32,
    pub north_south: f32,
}

impl StickAxes {
    pub fn new(east_west: f32, north_south: f32) -> Self {
        Self {
            east_west,
            north_south,
        }
    }
}

/// Bucket a stick position into a direction.
///
/// The angle `φ = atan2(ns, ew)` picks the components: `φ > 0` adds south,
/// `|φ| <= 30°` adds east, and `|φ| >= 90°` adds west. East and west are
/// exclusive, so the resulting mask always names a direction. A reading with
/// no north-south component, or a magnitude within the dead zone, gives
/// `None`.
pub fn stick_direction(axes: StickAxes, dead_zone: f32) -> Option<HexDirection> {
    let StickAxes {
        east_west,
        north_south,
    } = axes;
    if north_south == 0.0 || east_west.hypot(north_south) <= dead_zone {
        trace!("Ignoring stick reading {:?}", axes);
        return None;
    }

    let phi = north_south.atan2(east_west);
    let mut mask = DirectionMask::NONE;
    if phi > 0.0 {
        mask |= DirectionMask::SOUTH;
    }
    if phi.abs() <= FRAC_PI_6 {
        mask |= DirectionMask::EAST;
    } else if phi.abs() >= FRAC_PI_2 {
        mask |= DirectionMask::WEST;
    }
    HexDirection::from_mask(mask)
}

/// A source of analog stick readings, e.g. a gamepad.
pub trait AnalogStick {
    /// Current stick position, or `None` if no device is available
    fn axes(&mut self) -> Option<StickAxes>;
}

/// Samples an [AnalogStick] at a fixed interval. Holding the stick in one
/// position repeats the move once per interval.
#[derive(Clone, Debug)]
pub struct StickPoller {
    interval: Duration,
    dead_zone: f32,
    last_poll: Option<Instant>,
}

impl StickPoller {
    pub fn new(interval: Duration, dead_zone: f32) -> Self {
        Self {
            interval,
            dead_zone,
            last_poll: None,
        }
    }

    /// Read the stick if a full interval has passed since the last read
    pub fn poll(
        &mut self,
        stick: &mut dyn AnalogStick,
        now: Instant,
    ) -> Option<HexDirection> {
        if let Some(last) = self.last_poll {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_poll = Some(now);
        stick_direction(stick.axes()?, self.dead_zone)
    }

    /// Time left until the next read is due
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.last_poll.map_or(Duration::ZERO, |last| {
            self.interval
                .saturating_sub(now.saturating_duration_since(last))
        })
    }
}

impl Default for StickPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_DEAD_ZONE)
    }
}
