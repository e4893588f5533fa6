/*!
 * Process Colors
 * Deterministic display color per process id
 */

/// Display palette, indexed by process number
pub const PALETTE: [&str; 10] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6", "#1abc9c", "#d35400", "#c0392b",
    "#16a085", "#8e44ad",
];

/// Color for a process id
///
/// Numeric ids, optionally prefixed with `P`, map to `PALETTE[n % 10]` so
/// "P1".."P10" get distinct neighbours. Anything else is hashed.
pub fn color_for(id: &str) -> &'static str {
    let digits = id.strip_prefix(['P', 'p']).unwrap_or(id);
    let slot = match digits.parse::<u64>() {
        Ok(n) => (n % PALETTE.len() as u64) as usize,
        Err(_) => {
            let hash = id
                .bytes()
                .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
            hash % PALETTE.len()
        }
    };
    PALETTE[slot]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids() {
        assert_eq!(color_for("P0"), "#3498db");
        assert_eq!(color_for("P1"), "#2ecc71");
        assert_eq!(color_for("3"), "#f39c12");
        assert_eq!(color_for("p11"), "#2ecc71");
    }

    #[test]
    fn test_named_ids_are_stable() {
        let color = color_for("worker");
        assert_eq!(color_for("worker"), color);
        assert!(PALETTE.contains(&color));
    }
}
