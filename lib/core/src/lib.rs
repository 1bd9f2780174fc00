pub mod output;
pub mod partition;
pub mod pipeline;
pub mod prop;
pub mod rename;
pub mod report;
pub mod signal;
pub mod temporal;
