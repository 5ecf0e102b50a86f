// Roster listing helpers
//
// Roll numbers are opaque tokens ordered by plain byte-wise string comparison.
// No numeric-aware collation: "249Y1A399" sorts after "249Y1A3910".

use crate::student::Student;

/// Anything keyed by a student's roll number.
pub trait HasRollNumber {
    fn roll_number(&self) -> &str;
}

impl HasRollNumber for Student {
    fn roll_number(&self) -> &str {
        &self.roll_number
    }
}

/// Sorted roll numbers of the given records.
pub fn sorted_roll_numbers<'a, T, I>(records: I) -> Vec<String>
where
    T: HasRollNumber + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut roll_numbers: Vec<String> = records
        .into_iter()
        .map(|r| r.roll_number().to_string())
        .collect();
    roll_numbers.sort_unstable();
    roll_numbers
}

/// Sort records in place by roll number. Stable for equal roll numbers.
pub fn sort_by_roll_number<T: HasRollNumber>(records: &mut [T]) {
    records.sort_by(|a, b| a.roll_number().cmp(b.roll_number()));
}
