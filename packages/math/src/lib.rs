pub mod bigint;
pub mod division;
pub mod error;
pub mod repunit;

pub use bigint::BigInt;
pub use division::{PairSummary, floor_div_rem};
pub use error::{MathError, Result};
pub use repunit::{
    RepunitDivisorFinder, RepunitTable, SearchState, SearchStrategy, SharedRepunitTable,
};
