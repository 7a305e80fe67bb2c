use shelfplot_types::AdvancedSection;

/// Subplot grid geometry, in paper coordinates.
///
/// Cells are numbered row-major from the top-left, matching the order panels
/// are produced in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGrid {
    pub rows: usize,
    pub cols: usize,
    pub vertical_spacing: f64,
    pub horizontal_spacing: f64,
    pub height: Option<u32>,
}

/// The area one panel occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Cell {
    pub fn center_x(&self) -> f64 {
        round4((self.x[0] + self.x[1]) / 2.0)
    }

    pub fn top(&self) -> f64 {
        self.y[1]
    }
}

impl PanelGrid {
    pub fn for_section(section: AdvancedSection) -> Self {
        match section {
            AdvancedSection::RatingTrends => Self {
                rows: 3,
                cols: 1,
                vertical_spacing: 0.1,
                horizontal_spacing: 0.2,
                height: Some(800),
            },
            AdvancedSection::InterestCycle => Self {
                rows: 3,
                cols: 2,
                vertical_spacing: 0.2,
                horizontal_spacing: 0.1,
                height: Some(900),
            },
            AdvancedSection::ConsumptionSpeed => Self::single(),
        }
    }

    pub fn single() -> Self {
        Self {
            rows: 1,
            cols: 1,
            vertical_spacing: 0.0,
            horizontal_spacing: 0.0,
            height: None,
        }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// The cell at row-major `index`, or `None` past the end of the grid.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        if index >= self.cells() {
            return None;
        }
        let (row, col) = (index / self.cols, index % self.cols);
        let width = (1.0 - self.horizontal_spacing * (self.cols - 1) as f64) / self.cols as f64;
        let height = (1.0 - self.vertical_spacing * (self.rows - 1) as f64) / self.rows as f64;

        let x0 = col as f64 * (width + self.horizontal_spacing);
        // Row 0 is drawn at the top of the page.
        let y0 = (self.rows - 1 - row) as f64 * (height + self.vertical_spacing);
        Some(Cell {
            x: [round4(x0), round4(x0 + width)],
            y: [round4(y0), round4(y0 + height)],
        })
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
