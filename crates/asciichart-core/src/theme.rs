// File: crates/asciichart-core/src/theme.rs
// Summary: Fixed marker glyphs and terminal colors for series, overlaps and frame chrome.

/// Read-only palette shared by every render.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Series markers, cycled by dataset index.
    pub markers: [char; 6],
    /// Series colors (escape prefixes), cycled by dataset index.
    pub colors: [&'static str; 6],
    pub overlap_marker: char,
    pub overlap_color: &'static str,
    /// Escape suffix closing a colored cell; empty when uncolored.
    pub reset: &'static str,
    pub border: char,
    pub rule: char,
    pub corner_single: char,
    pub corner_left: char,
    pub corner_right: char,
}

const MARKERS: [char; 6] = ['◆', '■', '▲', '●', '★', '◇'];

impl Theme {
    /// ANSI bright colors.
    pub const ANSI: Theme = Theme {
        markers: MARKERS,
        colors: [
            "\x1b[91m", // red
            "\x1b[92m", // green
            "\x1b[93m", // yellow
            "\x1b[94m", // blue
            "\x1b[95m", // magenta
            "\x1b[96m", // cyan
        ],
        overlap_marker: '✦',
        overlap_color: "\x1b[1;93m", // bold yellow
        reset: "\x1b[0m",
        border: '│',
        rule: '─',
        corner_single: '┴',
        corner_left: '├',
        corner_right: '┤',
    };

    /// Same glyphs without escape sequences.
    pub const PLAIN: Theme = Theme {
        colors: [""; 6],
        overlap_color: "",
        reset: "",
        ..Theme::ANSI
    };

    pub fn for_color(color: bool) -> &'static Theme {
        if color { &ANSI } else { &PLAIN }
    }

    pub fn marker(&self, series: usize) -> char {
        self.markers[series % self.markers.len()]
    }

    pub fn color(&self, series: usize) -> &'static str {
        self.colors[series % self.colors.len()]
    }

    /// Marker glyph for `series` wrapped in its color.
    pub fn paint_marker(&self, series: usize) -> String {
        self.paint(self.color(series), self.marker(series))
    }

    pub fn paint_overlap(&self) -> String {
        self.paint(self.overlap_color, self.overlap_marker)
    }

    /// `glyph` wrapped in `color` and the reset suffix.
    pub fn paint(&self, color: &str, glyph: char) -> String {
        if color.is_empty() {
            glyph.to_string()
        } else {
            format!("{color}{glyph}{}", self.reset)
        }
    }
}

static ANSI: Theme = Theme::ANSI;
static PLAIN: Theme = Theme::PLAIN;
