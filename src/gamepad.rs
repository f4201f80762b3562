//! Physical gamepad support through gilrs.

use crate::input::{AnalogStick, StickAxes};
use gilrs::{Axis, Gilrs};
use log::info;

/// Reads the left stick of the first connected gamepad
pub struct GilrsStick {
    gilrs: Gilrs,
    connected: bool,
}

impl GilrsStick {
    pub fn new() -> anyhow::Result<Self> {
        let gilrs = Gilrs::new()
            .map_err(|err| anyhow::anyhow!("error initializing gamepad support: {}", err))?;
        Ok(Self {
            gilrs,
            connected: false,
        })
    }
}

impl AnalogStick for GilrsStick {
    fn axes(&mut self) -> Option<StickAxes> {
        // Drain pending events so gamepad state is current
        while self.gilrs.next_event().is_some() {}

        let axes = self.gilrs.gamepads().next().map(|(_, gamepad)| {
            // gilrs reports up as positive, stick axes use down
            StickAxes::new(
                gamepad.value(Axis::LeftStickX),
                -gamepad.value(Axis::LeftStickY),
            )
        });
        if axes.is_some() != self.connected {
            self.connected = axes.is_some();
            info!(
                "Gamepad {}",
                if self.connected { "connected" } else { "disconnected" }
            );
        }
        axes
    }
}
