// Which slider the arrow keys currently drive.
//
// Pointer hover and keyboard focus are tracked separately so that a pointer
// leaving a focused slider does not steal the keys from a keyboard user.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Engaged {
    pub hovered: Option<usize>,
    pub focused: Option<usize>,
}

impl Engaged {
    pub fn pointer_enter(&mut self, idx: usize) {
        self.hovered = Some(idx);
    }

    pub fn pointer_leave(&mut self, idx: usize) {
        if self.hovered == Some(idx) {
            self.hovered = None;
        }
    }

    pub fn focus_in(&mut self, idx: usize) {
        self.focused = Some(idx);
    }

    pub fn focus_out(&mut self, idx: usize) {
        if self.focused == Some(idx) {
            self.focused = None;
        }
    }

    /// Hover wins over focus, matching what the user is pointing at.
    pub fn current(&self) -> Option<usize> {
        self.hovered.or(self.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_engaged_by_default() {
        assert_eq!(Engaged::default().current(), None);
    }

    #[test]
    fn hover_overrides_focus() {
        let mut e = Engaged::default();
        e.focus_in(0);
        e.pointer_enter(2);
        assert_eq!(e.current(), Some(2));
        e.pointer_leave(2);
        assert_eq!(e.current(), Some(0));
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut e = Engaged::default();
        e.pointer_enter(1);
        e.pointer_enter(3);
        // leave of 1 arrives after enter of 3
        e.pointer_leave(1);
        assert_eq!(e.current(), Some(3));
        e.focus_in(0);
        e.focus_out(4);
        assert_eq!(e.focused, Some(0));
    }
}
