pub mod frequency;
pub mod lexical;

pub use self::frequency::{chi_square_english, letter_counts};
pub use self::lexical::lexical_hit_score;
