/// Which side of the spine an experience card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-left",
            Self::Right => "timeline-right",
        }
    }

    /// The most recent entry (index 0) gets the pulsing marker.
    #[must_use]
    pub const fn glows(index: usize) -> bool {
        index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_alternate_from_left() {
        let sides: Vec<_> = (0..4).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            [TimelineSide::Left, TimelineSide::Right, TimelineSide::Left, TimelineSide::Right]
        );
        assert!(TimelineSide::glows(0));
        assert!(!TimelineSide::glows(1));
    }
}
