//! Device-independent cast input.
//!
//! The reward logic only sees [`CastInput`] edges. [`CastKey`] turns raw key
//! actions into those edges, either holding the key to fish (terminals that
//! report key releases) or toggling with repeated presses (terminals that
//! don't).

/// An edge on the cast control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastInput {
    /// Begin a cast
    Start,
    /// Let go early, cancelling a cast that hasn't landed a fish yet
    Release,
}

/// Raw key activity as reported by a terminal or window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKeyMode {
    /// Press starts, release cancels
    Hold,
    /// Each press alternates between start and cancel
    Toggle,
}

/// Edge detector for the cast key.
#[derive(Debug, Clone)]
pub struct CastKey {
    mode: CastKeyMode,
    held: bool,
}

impl CastKey {
    pub fn new(mode: CastKeyMode) -> Self {
        Self { mode, held: false }
    }

    pub fn mode(&self) -> CastKeyMode {
        self.mode
    }

    /// Converts a key action into an edge. `casting` says whether a cast is
    /// currently in its cancellable window (only consulted in toggle mode).
    pub fn edge(&mut self, action: KeyAction, casting: bool) -> Option<CastInput> {
        match self.mode {
            CastKeyMode::Hold => match action {
                KeyAction::Press if !self.held => {
                    self.held = true;
                    Some(CastInput::Start)
                }
                KeyAction::Press | KeyAction::Repeat => None,
                KeyAction::Release if self.held => {
                    self.held = false;
                    Some(CastInput::Release)
                }
                KeyAction::Release => None,
            },
            CastKeyMode::Toggle => match action {
                KeyAction::Press if casting => Some(CastInput::Release),
                KeyAction::Press => Some(CastInput::Start),
                KeyAction::Repeat | KeyAction::Release => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_mode_edges() {
        let mut key = CastKey::new(CastKeyMode::Hold);
        assert_eq!(key.edge(KeyAction::Press, false), Some(CastInput::Start));
        assert_eq!(key.edge(KeyAction::Repeat, true), None);
        assert_eq!(key.edge(KeyAction::Press, true), None);
        assert_eq!(key.edge(KeyAction::Release, true), Some(CastInput::Release));
        assert_eq!(key.edge(KeyAction::Release, false), None);
        assert_eq!(key.edge(KeyAction::Press, false), Some(CastInput::Start));
    }

    #[test]
    fn test_toggle_mode_edges() {
        let mut key = CastKey::new(CastKeyMode::Toggle);
        assert_eq!(key.edge(KeyAction::Press, false), Some(CastInput::Start));
        assert_eq!(key.edge(KeyAction::Repeat, true), None);
        assert_eq!(key.edge(KeyAction::Press, true), Some(CastInput::Release));
        assert_eq!(key.edge(KeyAction::Release, false), None);
    }
}
