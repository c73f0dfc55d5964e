pub mod breaks;
pub mod departure;
pub mod lunch;
pub mod remaining;
