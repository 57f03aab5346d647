/// Represents a named pattern that can be stamped onto a universe.
///
/// A pattern is pure data: a list of relative coordinates of alive cells,
/// measured from the pattern's top-left reference point.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }
}

/// Classic Game of Life patterns library.
/// Offsets follow the canonical layouts from the standard pattern catalog.
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, translates by (+1, +1) every 4 ticks
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Pulsar - period 3 oscillator, 48 cells
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),
                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), block(), pulsar(), glider_gun()]
    }

    /// Look up a pattern by its name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_cell_counts() {
        assert_eq!(presets::glider().cells.len(), 5);
        assert_eq!(presets::blinker().cells.len(), 3);
        assert_eq!(presets::block().cells.len(), 4);
        assert_eq!(presets::pulsar().cells.len(), 48);
        assert_eq!(presets::glider_gun().cells.len(), 36);
    }

    #[test]
    fn test_bounding_boxes() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));

        let pulsar = presets::pulsar();
        assert_eq!((pulsar.width, pulsar.height), (13, 13));

        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
    }

    #[test]
    fn test_by_name_lookup() {
        assert_eq!(presets::by_name("glider").unwrap().name, "Glider");
        assert_eq!(presets::by_name("Pulsar").unwrap().name, "Pulsar");
        assert!(presets::by_name("no-such-pattern").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_patterns()
            .iter()
            .map(|p| p.name)
            .collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
