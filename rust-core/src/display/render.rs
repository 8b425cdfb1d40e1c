//! Rendering collaborator and a character-cell implementation of it

use super::frame::DisplayFrame;
use super::normalize::{bin_reduce, quantize};

/// Accepts finished frames; owns whatever drawing surface exists
pub trait Renderer {
    fn render(&mut self, frame: &DisplayFrame);
}

/// Renders frames as rows of text, '#' for lit pixels
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Every frame rendered so far, most recent last
    pub frames: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, if any
    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frames.push(frame_to_text(frame));
    }
}

/// Draw a frame into a multi-line string
pub fn frame_to_text(frame: &DisplayFrame) -> String {
    let mut out = String::with_capacity((frame.width + 1) * (frame.height + 1));

    if let Some(label) = frame.label {
        out.push_str(label);
        out.push('\n');
    }

    for y in 0..frame.height {
        for x in 0..frame.width {
            out.push(if frame.is_lit(x, y) { '#' } else { ' ' });
        }
        out.push('\n');
    }

    out
}

/// Quick terminal plot of a waveform: one '.' per column at its scaled level
///
/// # Arguments
/// * `values` - Samples to plot (thinned to `columns` with [`bin_reduce`])
/// * `rows` - Plot height in lines
/// * `columns` - Plot width in characters
pub fn ascii_plot(values: &[f64], rows: usize, columns: usize) -> Vec<String> {
    if rows == 0 {
        return Vec::new();
    }

    let reduced = bin_reduce(values, columns);
    let levels = quantize(&reduced, rows);

    (0..rows)
        .rev()
        .map(|level| {
            levels
                .iter()
                .map(|&l| if l == level { '.' } else { ' ' })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::frame::{pixel_trace, spaced_bars};

    #[test]
    fn test_text_renderer_pixels() {
        let mut renderer = TextRenderer::new();
        renderer.render(&pixel_trace(&[0, 1, 2], 3, 3));

        assert_eq!(renderer.last(), Some("  #\n # \n#  \n"));
    }

    #[test]
    fn test_text_renderer_label_and_bars() {
        let frame = spaced_bars(&[2], 2, 3, 2).with_label("Mg");
        assert_eq!(frame_to_text(&frame), "Mg\n## \n## \n");
    }

    #[test]
    fn test_ascii_plot_ramp() {
        let ramp: Vec<f64> = (0..4).map(|i| i as f64).collect();
        let lines = ascii_plot(&ramp, 4, 4);

        assert_eq!(lines, vec!["   .", "  . ", " .  ", ".   "]);
    }

    #[test]
    fn test_ascii_plot_truncates_levels() {
        // Midpoint lands on level 1 of 0..=3, not rounded up to 2
        let lines = ascii_plot(&[0.0, 0.5, 1.0], 4, 3);
        assert_eq!(lines, vec!["  .", "   ", " . ", ".  "]);
    }

    #[test]
    fn test_ascii_plot_flat_sits_on_bottom() {
        let lines = ascii_plot(&[3.0; 10], 3, 5);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], ".....");
        assert_eq!(lines[0], "     ");
    }
}
