mod fizzbuzz;

pub use fizzbuzz::fizzbuzz;
