// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod clock;
pub mod ids;
pub mod state;
pub mod users;
