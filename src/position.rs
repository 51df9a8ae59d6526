use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position { row: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl Position {
    pub fn next_col(&mut self) {
        self.col += 1;
    }

    pub fn next_row(&mut self) {
        self.row += 1;
        self.col = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn move_and_display() {
        let mut pos = Position::default();
        assert_eq!(pos.to_string(), "1:1");

        pos.next_col();
        pos.next_col();
        assert_eq!(pos.to_string(), "1:3");

        pos.next_row();
        assert_eq!(pos, Position { row: 2, col: 1 });
    }
}
