pub mod keyboard;
pub mod panel;
pub mod pointer;
