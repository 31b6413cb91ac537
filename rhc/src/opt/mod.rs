pub mod nester;
pub mod refine;
pub mod score;
pub mod search;
