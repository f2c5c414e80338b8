//! Half-court geometry in feet. Origin is the left corner of the baseline,
//! x runs along the baseline, y runs towards half court.

pub const COURT_WIDTH_FT: f64 = 50.0;
pub const COURT_LENGTH_FT: f64 = 47.0;
pub const BASKET: (f64, f64) = (25.0, 5.25);
pub const THREE_POINT_RADIUS_FT: f64 = 23.75;
/// Distance of the straight corner-three lines from each sideline
pub const CORNER_THREE_FT: f64 = 3.0;
/// Corner lines run straight up to this depth before the arc starts
pub const CORNER_THREE_DEPTH_FT: f64 = 14.0;
pub const FREE_THROW_LINE_FT: f64 = 19.0;

const FINE_STEP: f64 = 1.0;
const COARSE_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Where the next shot will be recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtCursor {
    pub x: f64,
    pub y: f64,
}

impl Default for CourtCursor {
    /// Free throw line
    fn default() -> Self {
        Self {
            x: BASKET.0,
            y: FREE_THROW_LINE_FT,
        }
    }
}

impl CourtCursor {
    /// Move one foot, or five with `coarse`, clamped to the court
    pub fn nudge(&mut self, dir: Direction, coarse: bool) {
        let step = if coarse { COARSE_STEP } else { FINE_STEP };
        match dir {
            Direction::Left => self.x -= step,
            Direction::Right => self.x += step,
            // "up" on screen is away from the baseline
            Direction::Up => self.y += step,
            Direction::Down => self.y -= step,
        }
        self.x = self.x.clamp(0.0, COURT_WIDTH_FT);
        self.y = self.y.clamp(0.0, COURT_LENGTH_FT);
    }

    pub fn distance_to_basket(&self) -> f64 {
        ((self.x - BASKET.0).powi(2) + (self.y - BASKET.1).powi(2)).sqrt()
    }

    /// Whether a field goal from here would be a three
    pub fn is_three_point_range(&self) -> bool {
        if self.y <= CORNER_THREE_DEPTH_FT {
            self.x < CORNER_THREE_FT || self.x > COURT_WIDTH_FT - CORNER_THREE_FT
        } else {
            self.distance_to_basket() > THREE_POINT_RADIUS_FT
        }
    }
}
