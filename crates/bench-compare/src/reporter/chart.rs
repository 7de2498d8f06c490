//! Two-bar ASCII chart of series means
//!
//! ```text
//! 100.00 | ████
//! 75.00 | ████  ████
//! 50.00 | ████  ████
//! 25.00 | ████  ████
//!      +----------------------
//!       Virtual  Function
//!       Function Pointers
//! ```

use std::fmt::{self, Write};

const BAR: &str = " ████";
const LEGEND_INDENT: &str = "      ";
const LEGEND_MIN_WIDTH: usize = 9;

/// Vertical bar chart comparing two means, scaled to the larger one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChart {
    height: usize,
    /// Levels per unit of value; `None` if the larger mean is not positive
    scale: Option<f64>,
    bars: [usize; 2],
}

impl BarChart {
    /// Lay out a chart with `height` levels for the two means.
    pub fn new(height: usize, first: f64, second: f64) -> Self {
        let max_value = first.max(second);
        let scale = (max_value > 0.0 && max_value.is_finite()).then(|| height as f64 / max_value);
        let bars = match scale {
            Some(scale) => [bar_height(first, scale), bar_height(second, scale)],
            None => [0, 0],
        };

        Self {
            height,
            scale,
            bars,
        }
    }

    /// Number of levels each series reaches.
    pub fn bar_heights(&self) -> [usize; 2] {
        self.bars
    }

    /// Value represented by the given level.
    pub fn level_value(&self, level: usize) -> f64 {
        match self.scale {
            Some(scale) => level as f64 / scale,
            None => 0.0,
        }
    }

    /// Write one line per level, top to bottom.
    pub fn write_rows(&self, out: &mut impl Write) -> fmt::Result {
        for level in (1..=self.height).rev() {
            write!(out, "{:.2} |", self.level_value(level))?;

            if level <= self.bars[0] {
                write!(out, "{BAR} ")?;
            } else {
                out.write_str("      ")?;
            }

            if level <= self.bars[1] {
                out.write_str(BAR)?;
            }

            writeln!(out)?;
        }
        Ok(())
    }
}

/// Truncating conversion; negative and NaN heights clamp to zero.
fn bar_height(value: f64, scale: f64) -> usize {
    (value * scale) as usize
}

/// Labels under the bars, one word per row, first column left-aligned.
pub(crate) fn write_legend(out: &mut impl Write, first: &str, second: &str) -> fmt::Result {
    let first_words: Vec<&str> = first.split_whitespace().collect();
    let second_words: Vec<&str> = second.split_whitespace().collect();

    let width = first_words
        .iter()
        .map(|word| word.chars().count() + 1)
        .max()
        .unwrap_or(0)
        .max(LEGEND_MIN_WIDTH);

    for row in 0..first_words.len().max(second_words.len()) {
        let left = first_words.get(row).copied().unwrap_or("");
        let right = second_words.get(row).copied().unwrap_or("");
        let line = format!("{LEGEND_INDENT}{left:<width$}{right}");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
