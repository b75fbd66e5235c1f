//! Line comment skipping.
//!
//! Comments produce no token. The `/` that opened one was already dropped
//! when the second `/` arrived.

use super::{Scanner, State, Step};

impl Scanner<'_> {
    pub(super) fn line_comment(&mut self, byte: u8) -> Step {
        if byte != b'\n' {
            self.state = State::LineComment;
        }
        Step::Consume
    }
}
