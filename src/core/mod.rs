pub mod calculator;
pub mod clock;
pub mod legacy;
pub mod log;
pub mod refresh;
pub mod settings;
pub mod track;
pub mod tracker;
