mod barber;

pub use barber::{Barber, BarberRequest};
