pub mod demo_host;
pub mod terminal;
