pub mod arithmetic;
pub mod repunit;
