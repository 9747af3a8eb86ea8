use enum_iterator::Sequence;

/// Direction the blank travels. Ordering here is the order successors are
/// generated in, which decides ties between equally short solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn all() -> impl Iterator<Item = Direction> {
        enum_iterator::all()
    }

    /// Change to the flat index of the blank.
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -4,
            Direction::Down => 4,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn label(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Direction>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Direction]) -> String {
        moves
            .iter()
            .map(|m| m.label().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::str::FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Direction> {
        let mut chars = s.chars();
        let label = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No label for move")),
        };
        if let Some(extra) = chars.next() {
            return Err(anyhow::anyhow!("Unexpected {} after move {}", extra, label));
        }

        match label {
            'L' | 'l' => Ok(Direction::Left),
            'R' | 'r' => Ok(Direction::Right),
            'U' | 'u' => Ok(Direction::Up),
            'D' | 'd' => Ok(Direction::Down),
            _ => Err(anyhow::anyhow!("Unrecognized move {}", label)),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Direction {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        match <u8 as quickcheck::Arbitrary>::arbitrary(g) % 4 {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            _ => Direction::Down,
        }
    }
}
