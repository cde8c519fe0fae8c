//! Human-readable decomposition of millisecond counts
//!
//! Drives the "Time remaining" readout of progress dialogs. A millisecond
//! count is folded through a fixed unit chain and rendered largest-first,
//! with zero-valued units omitted entirely.

/// Ordered unit chain, smallest to largest: each step takes the remainder
/// modulo its own width and carries the quotient to the next unit.
///
/// Days wrap at 31, a calendar approximation: the formatter never emits
/// months or years, so durations past a month alias back into the chain.
const UNITS: [(&str, u64); 4] = [
    ("seconds", 60),
    ("minutes", 60),
    ("hours", 24),
    ("days", 31),
];

/// Width of the chain's unlabeled head unit. The sub-second remainder is
/// folded away before the labeled units and never appears in output.
const MILLIS_PER_SECOND: u64 = 1000;

/// One labeled unit of a decomposed duration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationComponent {
    /// Component value after the fold, already reduced modulo the unit width
    pub value: u64,
    /// Plural unit label ("seconds", "minutes", "hours", "days")
    pub label: &'static str,
}

impl DurationComponent {
    /// Render as `"<value> <label>"`, singularized when the value is exactly 1
    pub fn phrase(&self) -> String {
        if self.value == 1 {
            format!("{} {}", self.value, &self.label[..self.label.len() - 1])
        } else {
            format!("{} {}", self.value, self.label)
        }
    }
}

/// Decompose a millisecond count into labeled components, largest unit first.
///
/// The decomposition is exact modulo the 31-day wrap: recomposing the
/// component values reconstructs the whole-second part of the input.
pub fn decompose(millis: u64) -> Vec<DurationComponent> {
    let mut components = Vec::with_capacity(UNITS.len());
    let mut rest = millis / MILLIS_PER_SECOND;
    for (label, modulus) in UNITS {
        components.push(DurationComponent {
            value: rest % modulus,
            label,
        });
        rest /= modulus;
    }
    components.reverse();
    components
}

/// Format a millisecond count as `"X hours, Y minutes, Z seconds"`.
///
/// Zero-valued units are dropped wherever they occur, so an input of one
/// hour and five seconds reads `"1 hour, 5 seconds"`. A zero input (or one
/// under a second) yields the empty string rather than `"0 seconds"`.
pub fn format_duration(millis: u64) -> String {
    let phrases: Vec<String> = decompose(millis)
        .into_iter()
        .filter(|component| component.value != 0)
        .map(|component| component.phrase())
        .collect();
    phrases.join(", ")
}
