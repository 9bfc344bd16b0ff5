pub mod canonical;
pub mod constants;
pub mod pair;
pub mod row_tail;
pub mod tables;
pub mod triple;

pub use canonical::*;
pub use constants::*;
pub use pair::pair_exact_test;
pub use tables::*;
pub use triple::triple_exact_test;
