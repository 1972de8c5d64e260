use std::fmt;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// The six RIASEC interest categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Category {
    /// Canonical order. Ties during ranking fall back to this order.
    pub const ALL: [Category; 6] = [
        Category::R,
        Category::I,
        Category::A,
        Category::S,
        Category::E,
        Category::C,
    ];

    pub fn letter(self) -> char {
        match self {
            Category::R => 'R',
            Category::I => 'I',
            Category::A => 'A',
            Category::S => 'S',
            Category::E => 'E',
            Category::C => 'C',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::R => "Realistic",
            Category::I => "Investigative",
            Category::A => "Artistic",
            Category::S => "Social",
            Category::E => "Enterprising",
            Category::C => "Conventional",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Signed per-category totals. Every category is always present; totals may go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores([i32; 6]);

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> i32 {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, score: i32) {
        self.0[category.index()] = score;
    }

    pub fn add(&mut self, category: Category, points: i32) {
        self.0[category.index()] += points;
    }

    /// `(category, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, i32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }
}

impl FromIterator<(Category, i32)> for CategoryScores {
    fn from_iter<T: IntoIterator<Item = (Category, i32)>>(iter: T) -> Self {
        let mut scores = CategoryScores::new();
        for (category, score) in iter {
            scores.set(category, score);
        }
        scores
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(&category, &score)?;
        }
        map.end()
    }
}
