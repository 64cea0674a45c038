//! Shape-fill emoji art.
//!
//! A template is a flat binary grid walked in row-major order; every filled
//! cell consumes the next symbol from the pool, cycling when the pool runs
//! out. The grid form (for staggered visual reveal) and the text form (for
//! clipboard export) agree cell-for-cell: empty cells render as two spaces
//! to keep the silhouette aligned.

use rand::Rng;

/// Fixed 2D binary template. `cells` is row-major, `width` columns per row.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTemplate {
    pub name: &'static str,
    pub width: usize,
    pub cells: &'static [u8],
}

impl ShapeTemplate {
    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}

/// Sitting teddy bear, 18x20.
pub const BEAR: ShapeTemplate = ShapeTemplate {
    name: "bear",
    width: 18,
    cells: &[
        0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, //
        0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, //
        0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, //
        1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, //
        1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, //
    ],
};

/// Standing figure, 16x24.
pub const PERSON: ShapeTemplate = ShapeTemplate {
    name: "person",
    width: 16,
    cells: &[
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, //
        0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, //
        1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, //
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, //
        0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, //
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Bear,
    Person,
}

impl ShapeKind {
    pub fn template(&self) -> &'static ShapeTemplate {
        match self {
            ShapeKind::Bear => &BEAR,
            ShapeKind::Person => &PERSON,
        }
    }

    /// Coin flip on each art request.
    pub fn random() -> ShapeKind {
        if rand::thread_rng().gen_bool(0.5) {
            ShapeKind::Bear
        } else {
            ShapeKind::Person
        }
    }
}

/// Assign pool symbols to the template's filled cells in row-major order,
/// cycling through the pool. An empty pool leaves every cell empty.
pub fn generate_art<'a>(pool: &[&'a str], template: &ShapeTemplate) -> Vec<Option<&'a str>> {
    let mut cells = Vec::with_capacity(template.cells.len());
    let mut next = 0usize;
    for &cell in template.cells {
        if cell == 1 && !pool.is_empty() {
            cells.push(Some(pool[next % pool.len()]));
            next += 1;
        } else {
            cells.push(None);
        }
    }
    cells
}

/// Text form of a generated grid: one symbol per filled cell, two spaces per
/// empty cell, a line break after each row.
pub fn render_text(cells: &[Option<&str>], width: usize) -> String {
    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        match cell {
            Some(symbol) => out.push_str(symbol),
            None => out.push_str("  "),
        }
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

/// Generate and render in one step.
pub fn art_text(pool: &[&str], template: &ShapeTemplate) -> String {
    render_text(&generate_art(pool, template), template.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_have_the_documented_dimensions() {
        assert_eq!(BEAR.width, 18);
        assert_eq!(BEAR.height(), 20);
        assert_eq!(PERSON.width, 16);
        assert_eq!(PERSON.height(), 24);
    }

    #[test]
    fn fill_cycles_through_the_pool_in_row_major_order() {
        let pool = ["🎯", "🌱", "✨"];
        let cells = generate_art(&pool, &BEAR);

        assert_eq!(cells.len(), BEAR.cells.len());
        let filled: Vec<&str> = cells.iter().filter_map(|c| *c).collect();
        assert_eq!(filled.len(), BEAR.filled());
        for (i, symbol) in filled.iter().enumerate() {
            assert_eq!(*symbol, pool[i % 3]);
        }
        // Unfilled template positions stay empty.
        for (cell, &template_cell) in cells.iter().zip(BEAR.cells) {
            assert_eq!(cell.is_some(), template_cell == 1);
        }
    }

    #[test]
    fn text_form_agrees_with_the_grid_cell_for_cell() {
        let pool = ["🎯", "🌱", "✨"];
        let cells = generate_art(&pool, &PERSON);
        let text = render_text(&cells, PERSON.width);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), PERSON.height());

        // Reconstruct the cell sequence from the text: single-scalar pool
        // symbols, double spaces for empties.
        let mut reconstructed: Vec<Option<String>> = Vec::new();
        for line in &lines {
            let mut chars = line.chars().peekable();
            while let Some(c) = chars.next() {
                if c == ' ' {
                    assert_eq!(chars.next(), Some(' '));
                    reconstructed.push(None);
                } else {
                    reconstructed.push(Some(c.to_string()));
                }
            }
        }
        assert_eq!(reconstructed.len(), cells.len());
        for (a, b) in reconstructed.iter().zip(&cells) {
            assert_eq!(a.as_deref(), *b);
        }
    }

    #[test]
    fn single_symbol_pool_fills_everything_with_it() {
        let cells = generate_art(&["⭐"], &BEAR);
        assert!(cells
            .iter()
            .flatten()
            .all(|symbol| *symbol == "⭐"));
    }

    #[test]
    fn empty_pool_renders_a_blank_silhouette() {
        let cells = generate_art(&[], &BEAR);
        assert!(cells.iter().all(|c| c.is_none()));
        let text = render_text(&cells, BEAR.width);
        assert!(text.lines().all(|l| l.chars().all(|c| c == ' ')));
    }

    #[test]
    fn rendered_rows_keep_template_width() {
        // Every row contributes exactly `width` cells worth of output.
        let cells = generate_art(&["🌟"], &PERSON);
        let text = render_text(&cells, PERSON.width);
        for (row, line) in text.lines().enumerate() {
            let row_cells = &PERSON.cells[row * PERSON.width..(row + 1) * PERSON.width];
            let expected: usize = row_cells
                .iter()
                .map(|&c| if c == 1 { 1 } else { 2 })
                .sum();
            assert_eq!(line.chars().count(), expected, "row {row}");
        }
    }
}
