pub mod clock;
pub mod dir;
pub mod format;
pub mod logging;
pub mod percentage;
pub mod runtime;
pub mod shutdown;
pub mod time;
