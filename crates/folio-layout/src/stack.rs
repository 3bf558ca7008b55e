#![forbid(unsafe_code)]

//! Wrapping stack order for card and figure stacks.

/// Depth of `index` in a stack whose front card is `active`.
///
/// `0` is the front; cards behind it follow in wrapping order, so the card
/// just before `active` sits at the back (`count - 1`).
#[must_use]
pub fn stack_position(index: usize, active: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let index = index % count;
    let active = active % count;
    (index + count - active) % count
}

/// Items ordered front to back.
#[must_use]
pub fn stack_order(active: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let active = active % count;
    (0..count).map(|depth| (active + depth) % count).collect()
}
