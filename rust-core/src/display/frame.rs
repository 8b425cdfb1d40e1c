//! Display frames handed to the rendering collaborator
//!
//! A frame is a description, never pixels in a framebuffer: either one bar
//! height per column or a list of lit (x, y) points, with y = 0 at the top.

/// What a frame draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameMarks {
    /// Bar height per column, each in [0, height-1], bars grow up from the bottom row
    Columns(Vec<usize>),

    /// Individual lit pixels (x, y)
    Pixels(Vec<(usize, usize)>),
}

/// One render cycle's worth of display output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub width: usize,
    pub height: usize,

    /// Short caption drawn in the corner ("Mg", "Fs")
    pub label: Option<&'static str>,

    pub marks: FrameMarks,
}

impl DisplayFrame {
    /// Empty frame of bar columns
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            label: None,
            marks: FrameMarks::Columns(vec![0; width]),
        }
    }

    /// Attach a caption
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Whether pixel (x, y) is lit
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        match &self.marks {
            // A bar of height h lights the bottom h rows
            FrameMarks::Columns(heights) => heights
                .get(x)
                .map_or(false, |&h| y >= self.height - h.min(self.height)),
            FrameMarks::Pixels(points) => points.contains(&(x, y)),
        }
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_lit(x, y))
            .count()
    }
}

/// Plot heights as one pixel per column, bottom row = height 0
pub fn pixel_trace(heights: &[usize], width: usize, height: usize) -> DisplayFrame {
    let top = height.saturating_sub(1);
    let points = heights
        .iter()
        .take(width)
        .enumerate()
        .map(|(x, &h)| (x, top - h.min(top)))
        .collect();

    DisplayFrame {
        width,
        height,
        label: None,
        marks: FrameMarks::Pixels(points),
    }
}

/// Two-pixel bars, one every `pitch` columns, starting at column 0
pub fn spaced_bars(heights: &[usize], pitch: usize, width: usize, height: usize) -> DisplayFrame {
    let pitch = pitch.max(1);
    let mut columns = vec![0; width];

    for (i, &h) in heights.iter().enumerate() {
        let x = i * pitch;
        if x >= width {
            break;
        }
        for col in x..(x + 2).min(width) {
            columns[col] = h;
        }
    }

    DisplayFrame {
        width,
        height,
        label: None,
        marks: FrameMarks::Columns(columns),
    }
}

/// One-pixel bars every `pitch` columns; every bar keeps at least one lit pixel
pub fn needle_bars(heights: &[usize], pitch: usize, width: usize, height: usize) -> DisplayFrame {
    let pitch = pitch.max(1);
    let mut columns = vec![0; width];

    for (i, &h) in heights.iter().enumerate() {
        let x = i * pitch;
        if x >= width {
            break;
        }
        columns[x] = h.max(1).min(height);
    }

    DisplayFrame {
        width,
        height,
        label: None,
        marks: FrameMarks::Columns(columns),
    }
}

/// Spectrum bars mirrored about the centre column
///
/// Bin x is drawn as two-pixel bars at `centre + 4x` and `centre - 1 - 4x`,
/// giving the symmetric look of a two-sided spectrum.
pub fn mirrored_bars(heights: &[usize], width: usize, height: usize) -> DisplayFrame {
    let centre = width / 2;
    let mut columns = vec![0; width];

    for (x, &h) in heights.iter().enumerate() {
        let right = centre + 4 * x;
        for col in [right, right + 1] {
            if col < width {
                columns[col] = h;
            }
        }

        let left = centre.checked_sub(1 + 4 * x);
        for col in [left, left.and_then(|c| c.checked_sub(1))].into_iter().flatten() {
            columns[col] = h;
        }
    }

    DisplayFrame {
        width,
        height,
        label: None,
        marks: FrameMarks::Columns(columns),
    }
}
