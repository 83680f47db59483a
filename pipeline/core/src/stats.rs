use types::AnonymizedEntry;

/// Characters assumed per printed page.
pub const CHARS_PER_PAGE: usize = 3000;

/// Aggregate description lengths, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionStats {
    /// Number of descriptions
    pub count: usize,
    /// Sum of all lengths
    pub total: usize,
    /// Integer mean
    pub average: usize,
    /// Shortest description
    pub shortest: usize,
    /// Longest description
    pub longest: usize,
}

impl DescriptionStats {
    /// Compute statistics over `entries`; `None` when there are none.
    pub fn from_entries(entries: &[AnonymizedEntry]) -> Option<Self> {
        let lengths: Vec<usize> = entries.iter().map(|e| e.record.description_len()).collect();
        let total: usize = lengths.iter().sum();
        Some(Self {
            count: lengths.len(),
            total,
            average: total / lengths.len().max(1),
            shortest: *lengths.iter().min()?,
            longest: *lengths.iter().max()?,
        })
    }

    /// Printed pages the descriptions would fill.
    pub fn estimated_pages(&self) -> f64 { self.total as f64 / CHARS_PER_PAGE as f64 }
}

/// Render `n` with `,` thousands separators.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
