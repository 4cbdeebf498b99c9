use super::surface::IndicatorSurface;

/// In-memory indicator row
///
/// Holds one flag per real item; hosts read it when drawing the dots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotRow {
    dots: Vec<bool>,
}

impl DotRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Index of the active dot, if any
    pub fn active(&self) -> Option<usize> {
        self.dots.iter().position(|&on| on)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.dots.iter().copied()
    }
}

impl IndicatorSurface for DotRow {
    fn populate(&mut self, count: usize) {
        self.dots = vec![false; count];
    }

    fn set_active(&mut self, index: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active() {
        let mut row = DotRow::new();
        row.populate(4);
        assert_eq!(row.active(), None);

        row.set_active(2);
        row.set_active(3);
        assert_eq!(row.iter().filter(|on| *on).count(), 1);
        assert_eq!(row.active(), Some(3));
    }

    #[test]
    fn test_out_of_range_clears_all() {
        let mut row = DotRow::new();
        row.populate(2);
        row.set_active(0);
        row.set_active(7);
        assert_eq!(row.active(), None);
    }
}
