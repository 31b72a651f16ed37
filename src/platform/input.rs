//! Discrete input events

use crate::sim::TickInput;

/// Game events produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    RotateCameraLeft,
    RotateCameraRight,
}

impl InputEvent {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(InputEvent::Jump),
            "ArrowLeft" | "Left" => Some(InputEvent::RotateCameraLeft),
            "ArrowRight" | "Right" => Some(InputEvent::RotateCameraRight),
            _ => None,
        }
    }

    /// Fold this event into the input for the next tick
    pub fn apply(self, input: &mut TickInput) {
        match self {
            InputEvent::Jump => input.jump = true,
            InputEvent::RotateCameraLeft => input.camera_steps -= 1,
            InputEvent::RotateCameraRight => input.camera_steps += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(InputEvent::from_key(" "), Some(InputEvent::Jump));
        assert_eq!(
            InputEvent::from_key("ArrowLeft"),
            Some(InputEvent::RotateCameraLeft)
        );
        assert_eq!(
            InputEvent::from_key("ArrowRight"),
            Some(InputEvent::RotateCameraRight)
        );
        assert_eq!(InputEvent::from_key("ArrowUp"), None);
    }

    #[test]
    fn test_camera_events_accumulate() {
        let mut input = TickInput::default();
        InputEvent::RotateCameraRight.apply(&mut input);
        InputEvent::RotateCameraRight.apply(&mut input);
        InputEvent::RotateCameraLeft.apply(&mut input);
        InputEvent::Jump.apply(&mut input);
        assert_eq!(input.camera_steps, 1);
        assert!(input.jump);
    }
}
