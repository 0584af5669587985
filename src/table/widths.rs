//! Column width negotiation.
//!
//! Every cell registers the width it would like (content plus padding) for
//! the columns it covers. [`WidthNegotiator::finalize`] turns those requests
//! into one width per column:
//!
//! 1. each column takes the widest single-column request, but never less
//!    than its declared minimum;
//! 2. spanning requests, narrowest span first, widen their columns when the
//!    spanned columns plus the dividers between them fall short;
//! 3. the table is inflated up to its minimum width, then shrinkable columns
//!    give up width in proportion to their slack to meet the maximum.
//!
//! Deficits are split evenly with the remainder going to the leftmost
//! columns. Minimums always win over the maximum.

use num_rational::Ratio;

/// Width bounds of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnBounds {
    pub min_width: usize,
    pub shrinkable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanRequest {
    start: usize,
    len: usize,
    width: usize,
}

/// Collects width requests and computes final column widths.
#[derive(Debug, Clone, Default)]
pub struct WidthNegotiator {
    bounds: Vec<ColumnBounds>,
    natural: Vec<usize>,
    spans: Vec<SpanRequest>,
    divider_width: usize,
    edge_width: usize,
    min_width: Option<usize>,
    max_width: Option<usize>,
}

impl WidthNegotiator {
    /// Negotiator for one column per entry of `bounds`.
    #[must_use]
    pub fn new(bounds: Vec<ColumnBounds>) -> Self {
        let natural = vec![0; bounds.len()];
        Self {
            bounds,
            natural,
            ..Self::default()
        }
    }

    /// Cells taken by each divider between columns and by both outer edges
    /// together.
    #[must_use]
    pub fn borders(mut self, divider_width: usize, edge_width: usize) -> Self {
        self.divider_width = divider_width;
        self.edge_width = edge_width;
        self
    }

    /// Bounds on the total table width, borders included.
    #[must_use]
    pub fn total_bounds(mut self, min_width: Option<usize>, max_width: Option<usize>) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.bounds.len()
    }

    /// Request `width` cells for the `span` columns starting at `start`.
    ///
    /// Requests reaching past the last column are clipped.
    pub fn register(&mut self, start: usize, span: usize, width: usize) {
        let columns = self.columns();
        if start >= columns {
            return;
        }
        let len = span.clamp(1, columns - start);
        if len == 1 {
            self.natural[start] = self.natural[start].max(width);
        } else {
            self.spans.push(SpanRequest { start, len, width });
        }
    }

    /// Width of a table laid out with `widths`, borders included.
    #[must_use]
    pub fn total_width(&self, widths: &[usize]) -> usize {
        let dividers = widths.len().saturating_sub(1) * self.divider_width;
        widths.iter().sum::<usize>() + dividers + self.edge_width
    }

    /// Compute the final widths. Pure: repeated calls give the same result.
    #[must_use]
    pub fn finalize(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .natural
            .iter()
            .zip(&self.bounds)
            .map(|(&natural, bounds)| natural.max(bounds.min_width))
            .collect();

        let mut spans = self.spans.clone();
        spans.sort_by_key(|span| span.len);
        for span in &spans {
            let range = span.start..span.start + span.len;
            let current =
                widths[range.clone()].iter().sum::<usize>() + (span.len - 1) * self.divider_width;
            if current < span.width {
                distribute(&mut widths[range], span.width - current);
            }
        }

        if widths.is_empty() {
            return widths;
        }

        let total = self.total_width(&widths);
        if let Some(min_width) = self.min_width
            && total < min_width
        {
            distribute(&mut widths, min_width - total);
        }

        if let Some(max_width) = self.max_width {
            let cap = max_width.max(self.min_width.unwrap_or(0));
            let total = self.total_width(&widths);
            if total > cap {
                self.shrink(&mut widths, total - cap);
            }
        }

        widths
    }

    fn shrink(&self, widths: &mut [usize], reduction: usize) {
        let slack: Vec<usize> = widths
            .iter()
            .zip(&self.bounds)
            .map(|(&width, bounds)| {
                if bounds.shrinkable {
                    width.saturating_sub(bounds.min_width)
                } else {
                    0
                }
            })
            .collect();
        let total_slack: usize = slack.iter().sum();
        if total_slack == 0 {
            return;
        }
        if total_slack <= reduction {
            for ((width, bounds), &slack) in widths.iter_mut().zip(&self.bounds).zip(&slack) {
                if slack > 0 {
                    *width = bounds.min_width;
                }
            }
            return;
        }

        let cuts: Vec<usize> = slack
            .iter()
            .map(|&slack| {
                (Ratio::new(slack, total_slack) * reduction)
                    .floor()
                    .to_integer()
            })
            .collect();
        let mut remainder = reduction - cuts.iter().sum::<usize>();
        for ((width, cut), &slack) in widths.iter_mut().zip(cuts).zip(&slack) {
            let mut cut = cut;
            if remainder > 0 && cut < slack {
                cut += 1;
                remainder -= 1;
            }
            *width -= cut;
        }
    }
}

/// Add `amount` across `widths`: an even share each, the remainder one by
/// one from the left.
fn distribute(widths: &mut [usize], amount: usize) {
    if widths.is_empty() {
        return;
    }
    let share = amount / widths.len();
    let extra = amount % widths.len();
    for (idx, width) in widths.iter_mut().enumerate() {
        *width += share + usize::from(idx < extra);
    }
}
