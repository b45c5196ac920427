use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Snapshot of the held movement keys for one frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputState {
    pub fn from_keys(keys: &HashSet<KeyCode>) -> Self {
        Self {
            forward: keys.contains(&KeyCode::KeyW),
            backward: keys.contains(&KeyCode::KeyS),
            turn_left: keys.contains(&KeyCode::KeyA),
            turn_right: keys.contains(&KeyCode::KeyD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_held_keys() {
        let mut keys = HashSet::new();
        keys.insert(KeyCode::KeyW);
        keys.insert(KeyCode::KeyD);

        let input = InputState::from_keys(&keys);
        assert!(input.forward);
        assert!(input.turn_right);
        assert!(!input.backward);
        assert!(!input.turn_left);
    }
}
