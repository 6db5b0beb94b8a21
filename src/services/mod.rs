pub mod cal;
pub mod completion;
pub mod dispatch;
pub mod functions;
pub mod payload;
