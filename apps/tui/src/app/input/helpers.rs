/// Previous index in a list of `len` items, wrapping to the end.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        (index - 1) % len
    }
}

/// Next index in a list of `len` items, wrapping to the start.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Maps a digit key to a zero-based index, so `'1'` selects the first item.
pub fn digit_index(ch: char, len: usize) -> Option<usize> {
    let digit = usize::try_from(ch.to_digit(10)?).ok()?;
    (1..=len).contains(&digit).then(|| digit - 1)
}
