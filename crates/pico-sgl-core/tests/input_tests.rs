//! Input filtering tests: button edges, smoothing, deadzone correction.

use pico_sgl_core::input::{AxisId, Button, InputState};
use pico_sgl_hal::InputPins;

/// Scripted input source: replays queued samples, then holds the last.
struct ScriptedPins {
    buttons: Vec<[bool; 4]>,
    axes: Vec<[i16; 2]>,
    step: usize,
}

impl ScriptedPins {
    fn new(buttons: Vec<[bool; 4]>, axes: Vec<[i16; 2]>) -> Self {
        Self {
            buttons,
            axes,
            step: 0,
        }
    }
}

impl InputPins for ScriptedPins {
    fn poll_buttons(&mut self) -> [bool; 4] {
        let i = self.step.min(self.buttons.len() - 1);
        self.buttons[i]
    }

    fn poll_axes(&mut self) -> [i16; 2] {
        let i = self.step.min(self.axes.len() - 1);
        let sample = self.axes[i];
        self.step += 1;
        sample
    }
}

mod buttons {
    use super::*;

    #[test]
    fn pressed_fires_only_on_the_edge() {
        let mut pins = ScriptedPins::new(
            vec![
                [false, false, false, false],
                [true, false, false, false],
                [true, false, false, false],
                [false, false, false, false],
            ],
            vec![[0, 0]],
        );
        let mut input = InputState::new();

        input.poll(&mut pins);
        assert!(!input.button_pressed(Button::A));
        assert!(!input.button_down(Button::A));

        input.poll(&mut pins);
        assert!(input.button_pressed(Button::A));
        assert!(input.button_down(Button::A));

        input.poll(&mut pins);
        assert!(!input.button_pressed(Button::A), "held, not re-pressed");
        assert!(input.button_down(Button::A));

        input.poll(&mut pins);
        assert!(!input.button_down(Button::A));
    }

    #[test]
    fn buttons_are_independent() {
        let mut pins = ScriptedPins::new(vec![[false, true, false, true]], vec![[0, 0]]);
        let mut input = InputState::new();
        input.poll(&mut pins);
        assert!(!input.button_down(Button::A));
        assert!(input.button_down(Button::B));
        assert!(!input.button_down(Button::C));
        assert!(input.button_down(Button::Stick));
    }
}

mod axes {
    use super::*;

    #[test]
    fn full_deflection_reads_one_after_smoothing() {
        let mut pins = ScriptedPins::new(vec![[false; 4]], vec![[2048, -2048]]);
        let mut input = InputState::new();

        // The 3-sample window needs three polls to fill.
        for _ in 0..3 {
            input.poll(&mut pins);
        }
        let x = input.axis(AxisId::X).to_f32();
        let y = input.axis(AxisId::Y).to_f32();
        assert!((x - 1.0).abs() < 0.01, "x = {x}");
        assert!((y + 1.0).abs() < 0.01, "y = {y}");
    }

    #[test]
    fn smoothing_averages_recent_samples() {
        // One full-scale spike among zeros: the average stays small.
        let mut pins = ScriptedPins::new(
            vec![[false; 4]],
            vec![[2048, 0], [0, 0], [0, 0]],
        );
        let mut input = InputState::new();
        for _ in 0..3 {
            input.poll(&mut pins);
        }
        let x = input.axis(AxisId::X).to_f32();
        assert!(x < 0.3, "spike should be averaged out, got {x}");
    }

    #[test]
    fn deadzone_swallows_small_input() {
        // 5% deflection is below the 10% deadzone.
        let mut pins = ScriptedPins::new(vec![[false; 4]], vec![[102, -102]]);
        let mut input = InputState::new();
        for _ in 0..3 {
            input.poll(&mut pins);
        }
        assert_eq!(input.axis(AxisId::X).to_f32(), 0.0);
        assert_eq!(input.axis(AxisId::Y).to_f32(), 0.0);
    }

    #[test]
    fn output_ramps_from_zero_at_the_deadzone_edge() {
        // 20% deflection: corrected value is (0.2 - 0.1) / 0.9 ≈ 0.11.
        let mut pins = ScriptedPins::new(vec![[false; 4]], vec![[410, 0]]);
        let mut input = InputState::new();
        for _ in 0..3 {
            input.poll(&mut pins);
        }
        let x = input.axis(AxisId::X).to_f32();
        assert!((x - 0.111).abs() < 0.02, "x = {x}");
    }

    #[test]
    fn correction_is_symmetric() {
        let mut positive = ScriptedPins::new(vec![[false; 4]], vec![[1024, 0]]);
        let mut negative = ScriptedPins::new(vec![[false; 4]], vec![[-1024, 0]]);
        let mut a = InputState::new();
        let mut b = InputState::new();
        for _ in 0..3 {
            a.poll(&mut positive);
            b.poll(&mut negative);
        }
        let pos = a.axis(AxisId::X).to_f32();
        let neg = b.axis(AxisId::X).to_f32();
        assert!((pos + neg).abs() < 0.005, "{pos} vs {neg}");
    }
}
