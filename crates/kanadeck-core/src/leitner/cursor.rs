/// Keep a cursor inside a tier of `tier_len` items. Out-of-range positions
/// restart at the front.
pub fn clamp(cursor: usize, tier_len: usize) -> usize {
    if cursor < tier_len {
        cursor
    } else {
        0
    }
}

/// Position of the current item within the selected tier.
///
/// Never persisted. Meaningless while the selected tier is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor(usize);

impl Cursor {
    pub fn position(self) -> usize {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Re-apply the validity rule after the tier length changed.
    pub fn clamp_to(&mut self, tier_len: usize) {
        self.0 = clamp(self.0, tier_len);
    }

    /// Step forward, wrapping to the first item.
    pub fn advance(&mut self, tier_len: usize) {
        if tier_len == 0 {
            return;
        }
        self.0 = (clamp(self.0, tier_len) + 1) % tier_len;
    }

    /// Step back, wrapping to the last item.
    pub fn retreat(&mut self, tier_len: usize) {
        if tier_len == 0 {
            return;
        }
        self.0 = (clamp(self.0, tier_len) + tier_len - 1) % tier_len;
    }
}
