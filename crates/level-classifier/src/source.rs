//! Level iteration over a data source.

use crate::level::LevelEncoding;

/// Cursor over the vertical levels of a data source.
///
/// Mirrors the sequential-access data interface: the cursor is moved to the
/// first level explicitly and then advanced one level at a time.
pub trait LevelSource {
    /// Encoding the source reports its level type codes in.
    fn encoding(&self) -> LevelEncoding {
        LevelEncoding::Legacy
    }

    /// Move to the first level. Returns false when the source has no levels.
    fn first_level(&mut self) -> bool;

    /// Advance to the next level. Returns false at the last level, in which
    /// case the cursor does not move.
    fn next_level(&mut self) -> bool;

    /// Type code of the current level.
    fn level_type(&self) -> i32;

    /// Value of the current level.
    fn level_value(&self) -> f64;

    /// Number of levels in the source.
    fn level_count(&self) -> usize;
}

/// A single level: type code and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub level_type: i32,
    pub value: f64,
}

impl Level {
    pub fn new(level_type: i32, value: f64) -> Self {
        Self { level_type, value }
    }
}

/// Level source backed by an in-memory list.
#[derive(Debug, Clone)]
pub struct MemoryLevelSource {
    encoding: LevelEncoding,
    levels: Vec<Level>,
    cursor: usize,
}

impl MemoryLevelSource {
    pub fn new(encoding: LevelEncoding, levels: Vec<Level>) -> Self {
        Self {
            encoding,
            levels,
            cursor: 0,
        }
    }

    /// Levels that all share one type code.
    pub fn uniform(encoding: LevelEncoding, level_type: i32, values: &[f64]) -> Self {
        let levels = values
            .iter()
            .map(|&value| Level::new(level_type, value))
            .collect();
        Self::new(encoding, levels)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    fn current(&self) -> Option<&Level> {
        self.levels.get(self.cursor)
    }
}

impl LevelSource for MemoryLevelSource {
    fn encoding(&self) -> LevelEncoding {
        self.encoding
    }

    fn first_level(&mut self) -> bool {
        self.cursor = 0;
        !self.levels.is_empty()
    }

    fn next_level(&mut self) -> bool {
        if self.cursor + 1 < self.levels.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn level_type(&self) -> i32 {
        self.current().map_or(-1, |level| level.level_type)
    }

    fn level_value(&self) -> f64 {
        self.current().map_or(f64::NAN, |level| level.value)
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration() {
        let mut source = MemoryLevelSource::uniform(LevelEncoding::Legacy, 100, &[1000.0, 850.0]);

        assert!(source.first_level());
        assert_eq!(source.level_value(), 1000.0);
        assert!(source.next_level());
        assert_eq!(source.level_value(), 850.0);
        assert!(!source.next_level());
        assert_eq!(source.level_value(), 850.0);

        assert!(source.first_level());
        assert_eq!(source.level_type(), 100);
        assert_eq!(source.level_count(), 2);
    }

    #[test]
    fn test_empty_source() {
        let mut source = MemoryLevelSource::new(LevelEncoding::GridStorage, Vec::new());
        assert!(!source.first_level());
        assert!(!source.next_level());
        assert_eq!(source.level_type(), -1);
        assert!(source.level_value().is_nan());
    }
}
