pub mod data;
pub mod dates;
pub mod fetch_gate;
pub mod lines;
pub mod matchup;
pub mod teams;
