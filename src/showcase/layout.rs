//! Responsive Layout
//!
//! Viewport breakpoints and column counts for the page grids.

use gpui::{px, Pixels};

use crate::constants::{MEDIUM_BREAKPOINT, WIDE_BREAKPOINT};

/// Viewport width class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// Below the medium breakpoint
    #[default]
    Narrow,
    /// From the medium breakpoint up to the wide breakpoint
    Medium,
    /// At or above the wide breakpoint
    Wide,
}

impl Breakpoint {
    /// Classify a viewport width
    pub fn for_width(width: Pixels) -> Self {
        if width >= px(WIDE_BREAKPOINT) {
            Breakpoint::Wide
        } else if width >= px(MEDIUM_BREAKPOINT) {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }
}

/// Column count per breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveColumns {
    pub narrow: usize,
    pub medium: usize,
    pub wide: usize,
}

impl ResponsiveColumns {
    /// Component preview cards: 1 / 2 / 3
    pub const PREVIEW: Self = Self {
        narrow: 1,
        medium: 2,
        wide: 3,
    };

    /// Welcome card callouts: 1 / 2 / 2
    pub const CALLOUTS: Self = Self {
        narrow: 1,
        medium: 2,
        wide: 2,
    };

    /// Column count at the given breakpoint, never zero
    pub fn resolve(&self, breakpoint: Breakpoint) -> usize {
        let columns = match breakpoint {
            Breakpoint::Narrow => self.narrow,
            Breakpoint::Medium => self.medium,
            Breakpoint::Wide => self.wide,
        };
        columns.max(1)
    }
}

/// A grid cell: an item index, or padding that fills out the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Item(usize),
    Empty,
}

/// Split `len` items into rows of `columns` cells, padding the last row
pub fn grid_rows(len: usize, columns: usize) -> Vec<Vec<GridCell>> {
    let columns = columns.max(1);
    (0..len)
        .step_by(columns)
        .map(|start| {
            (start..start + columns)
                .map(|i| if i < len { GridCell::Item(i) } else { GridCell::Empty })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(Breakpoint::for_width(px(320.0)), Breakpoint::Narrow);
        assert_eq!(Breakpoint::for_width(px(767.0)), Breakpoint::Narrow);
        assert_eq!(Breakpoint::for_width(px(768.0)), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(px(1023.0)), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(px(1024.0)), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_width(px(1920.0)), Breakpoint::Wide);
    }

    #[test]
    fn preview_columns_per_breakpoint() {
        let cols = ResponsiveColumns::PREVIEW;
        assert_eq!(cols.resolve(Breakpoint::Narrow), 1);
        assert_eq!(cols.resolve(Breakpoint::Medium), 2);
        assert_eq!(cols.resolve(Breakpoint::Wide), 3);
    }

    #[test]
    fn callout_grid_is_two_by_two_from_medium() {
        let cols = ResponsiveColumns::CALLOUTS.resolve(Breakpoint::Medium);
        let rows = grid_rows(4, cols);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(ResponsiveColumns::CALLOUTS.resolve(Breakpoint::Wide), 2);
    }

    #[test]
    fn last_row_is_padded() {
        let rows = grid_rows(3, 2);
        assert_eq!(
            rows,
            vec![
                vec![GridCell::Item(0), GridCell::Item(1)],
                vec![GridCell::Item(2), GridCell::Empty],
            ]
        );
    }

    #[test]
    fn zero_columns_is_one_column() {
        let rows = grid_rows(2, 0);
        assert_eq!(rows, vec![vec![GridCell::Item(0)], vec![GridCell::Item(1)]]);

        let cols = ResponsiveColumns {
            narrow: 0,
            medium: 0,
            wide: 0,
        };
        assert_eq!(cols.resolve(Breakpoint::Wide), 1);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        assert!(grid_rows(0, 3).is_empty());
    }
}
