//! Input filtering on top of the raw `InputPins` sampling trait:
//! edge-detected button state, rolling-average smoothing, and deadzone
//! correction for the analog axes.

use pico_sgl_hal::InputPins;

use crate::math::Fx;

/// Physical buttons, index order matching `InputPins::poll_buttons`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    A = 0,
    B = 1,
    C = 2,
    Stick = 3,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AxisId {
    X = 0,
    Y = 1,
}

/// Axis magnitude below which input reads as zero.
pub const AXIS_DEADZONE: Fx = Fx::from_f32(0.1);

/// Rolling-average window, in samples.
const SAMPLE_SMOOTHING: usize = 3;

/// Raw ADC full-scale after re-centering.
const AXIS_SCALE: i32 = 2048;

/// Debounced, smoothed input state. Call `poll` once per frame.
pub struct InputState {
    down: [bool; 4],
    pressed: [bool; 4],
    samples: [[Fx; SAMPLE_SMOOTHING]; 2],
    sample_index: usize,
    totals: [Fx; 2],
    axes: [Fx; 2],
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub const fn new() -> Self {
        Self {
            down: [false; 4],
            pressed: [false; 4],
            samples: [[Fx::ZERO; SAMPLE_SMOOTHING]; 2],
            sample_index: 0,
            totals: [Fx::ZERO; 2],
            axes: [Fx::ZERO; 2],
        }
    }

    /// Sample the hardware once and fold the result into the filters.
    pub fn poll<P: InputPins>(&mut self, pins: &mut P) {
        let levels = pins.poll_buttons();
        for i in 0..4 {
            self.pressed[i] = levels[i] && !self.down[i];
            self.down[i] = levels[i];
        }

        let raw = pins.poll_axes();
        let smoothing = Fx::from_int(SAMPLE_SMOOTHING as i32);
        for axis in 0..2 {
            let sample = Fx::from_int(raw[axis] as i32) / Fx::from_int(AXIS_SCALE);
            self.totals[axis] -= self.samples[axis][self.sample_index];
            self.samples[axis][self.sample_index] = sample;
            self.totals[axis] += sample;
            self.axes[axis] = self.totals[axis] / smoothing;
        }
        self.sample_index = (self.sample_index + 1) % SAMPLE_SMOOTHING;
    }

    /// Level state: true while the button is held.
    pub fn button_down(&self, button: Button) -> bool {
        self.down[button as usize]
    }

    /// Edge state: true only on the poll where the button went down.
    pub fn button_pressed(&self, button: Button) -> bool {
        self.pressed[button as usize]
    }

    /// Smoothed, deadzone-corrected axis value in [-1, 1].
    ///
    /// Values inside the deadzone read as zero; outside it the remaining
    /// range is rescaled symmetrically so the output ramps from zero at
    /// the deadzone edge instead of jumping.
    pub fn axis(&self, axis: AxisId) -> Fx {
        let v = self.axes[axis as usize];
        if v.abs() < AXIS_DEADZONE {
            return Fx::ZERO;
        }
        let corrected = (v.abs() - AXIS_DEADZONE) / (Fx::ONE - AXIS_DEADZONE);
        if v < Fx::ZERO {
            -corrected
        } else {
            corrected
        }
    }
}
