pub mod calculator;
pub mod logic;
pub mod parser;
pub mod ports;
pub mod schedule;
