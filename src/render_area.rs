//! Column/page windows targeted by a transfer

use crate::config::Dimensions;
use crate::error::BuilderError;

/// Rectangular sub-region of the display, in columns and pages (inclusive)
///
/// `buffer_length` always equals the column span times the page span: the
/// bounds can only change through [`RenderArea::set_bounds`], which
/// recomputes it.
///
/// ```
/// use ssd1306_oled::{Dimensions, RenderArea};
///
/// let area = RenderArea::full(&Dimensions::W128_H64);
/// assert_eq!(area.buffer_length(), 1024);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderArea {
    start_column: u8,
    end_column: u8,
    start_page: u8,
    end_page: u8,
    buffer_length: usize,
}

impl RenderArea {
    /// Create a render area from inclusive bounds
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRenderArea` if a start bound is after its end bound.
    pub fn new(
        start_column: u8,
        end_column: u8,
        start_page: u8,
        end_page: u8,
    ) -> Result<Self, BuilderError> {
        let mut area = Self {
            start_column: 0,
            end_column: 0,
            start_page: 0,
            end_page: 0,
            buffer_length: 1,
        };
        area.set_bounds(start_column, end_column, start_page, end_page)?;
        Ok(area)
    }

    /// Render area covering the whole panel
    pub fn full(dimensions: &Dimensions) -> Self {
        let mut area = Self {
            start_column: 0,
            end_column: dimensions.width.saturating_sub(1),
            start_page: 0,
            end_page: dimensions.pages().saturating_sub(1),
            buffer_length: 0,
        };
        area.calculate_buffer_length();
        area
    }

    /// Redefine the bounds and recompute the buffer length
    ///
    /// On error the area is left unchanged.
    pub fn set_bounds(
        &mut self,
        start_column: u8,
        end_column: u8,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), BuilderError> {
        if start_column > end_column || start_page > end_page {
            return Err(BuilderError::InvalidRenderArea {
                start_column,
                end_column,
                start_page,
                end_page,
            });
        }
        self.start_column = start_column;
        self.end_column = end_column;
        self.start_page = start_page;
        self.end_page = end_page;
        self.calculate_buffer_length();
        Ok(())
    }

    /// Recompute and return the number of bytes covered by this area
    pub fn calculate_buffer_length(&mut self) -> usize {
        self.buffer_length = self.columns() * self.pages();
        self.buffer_length
    }

    /// Bytes needed to fill this area
    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }

    /// First column
    pub fn start_column(&self) -> u8 {
        self.start_column
    }

    /// Last column (inclusive)
    pub fn end_column(&self) -> u8 {
        self.end_column
    }

    /// First page
    pub fn start_page(&self) -> u8 {
        self.start_page
    }

    /// Last page (inclusive)
    pub fn end_page(&self) -> u8 {
        self.end_page
    }

    /// Number of columns spanned
    pub fn columns(&self) -> usize {
        (self.end_column - self.start_column) as usize + 1
    }

    /// Number of pages spanned
    pub fn pages(&self) -> usize {
        (self.end_page - self.start_page) as usize + 1
    }

    /// Whether the area lies within the panel
    pub fn fits(&self, dimensions: &Dimensions) -> bool {
        self.end_column < dimensions.width && self.end_page < dimensions.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_area_128x64() {
        let area = RenderArea::new(0, 127, 0, 7).unwrap();
        assert_eq!(area.buffer_length(), 128 * 8);
        assert_eq!(area, RenderArea::full(&Dimensions::W128_H64));
    }

    #[test]
    fn test_full_area_128x32() {
        let area = RenderArea::full(&Dimensions::W128_H32);
        assert_eq!(area.end_page(), 3);
        assert_eq!(area.buffer_length(), 512);
    }

    #[test]
    fn test_single_cell_area() {
        let area = RenderArea::new(5, 5, 2, 2).unwrap();
        assert_eq!(area.buffer_length(), 1);
    }

    #[test]
    fn test_set_bounds_recomputes_length() {
        let mut area = RenderArea::full(&Dimensions::W128_H64);
        area.set_bounds(10, 19, 1, 3).unwrap();
        assert_eq!(area.columns(), 10);
        assert_eq!(area.pages(), 3);
        assert_eq!(area.buffer_length(), 30);
    }

    #[test]
    fn test_inverted_bounds_rejected_and_area_unchanged() {
        let mut area = RenderArea::new(0, 15, 0, 1).unwrap();
        let result = area.set_bounds(20, 10, 0, 0);
        assert!(matches!(
            result,
            Err(BuilderError::InvalidRenderArea {
                start_column: 20,
                end_column: 10,
                ..
            })
        ));
        assert_eq!(area.buffer_length(), 32);
        assert!(RenderArea::new(0, 0, 3, 2).is_err());
    }

    #[test]
    fn test_fits() {
        let area = RenderArea::new(0, 127, 0, 7).unwrap();
        assert!(area.fits(&Dimensions::W128_H64));
        assert!(!area.fits(&Dimensions::W128_H32));
    }
}
