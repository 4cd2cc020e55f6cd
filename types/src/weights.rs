//! Fibonacci digit weights in `u64`.

/// Weights `F(2), F(3), …` in increasing order, stopping before the first
/// weight above `limit`. Empty when `limit` is zero.
pub(crate) fn weights_up_to(limit: u64) -> Vec<u64> {
    let mut weights = Vec::new();
    let (mut current, mut next) = (1u64, 2u64);
    while current <= limit {
        weights.push(current);
        let Some(following) = current.checked_add(next) else {
            // F(93) is the last weight that fits.
            if next <= limit {
                weights.push(next);
            }
            break;
        };
        current = next;
        next = following;
    }
    weights
}

/// Sum the weights of the set digits, `None` if the total overflows `u64`.
pub(crate) fn decode(digits: &[bool]) -> Option<u64> {
    let mut total = 0u64;
    let (mut weight, mut next) = (Some(1u64), Some(2u64));
    for &set in digits {
        if set {
            total = total.checked_add(weight?)?;
        }
        let following = weight.zip(next).and_then(|(a, b)| a.checked_add(b));
        weight = next;
        next = following;
    }
    Some(total)
}
