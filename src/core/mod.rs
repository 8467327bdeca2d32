pub mod constants;
pub mod content;
pub mod form;
pub mod markup;
pub mod panel;
pub mod pointer;
pub mod projects;
pub mod relay;
pub mod scene;
pub mod schedule;
pub mod shell;

pub use content::CONTENT;
pub use pointer::PointerSignal;
pub use relay::{RelayConfig, RelayError};
pub use shell::{Action, Effect, Shell};

// Background shader bundled as a string constant
pub static PRISM_WGSL: &str = include_str!("../../shaders/prism.wgsl");
