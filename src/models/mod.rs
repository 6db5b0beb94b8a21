pub mod booking;
pub mod function_call;
pub mod request;

pub use booking::BookingStatus;
pub use function_call::{CancelBookingArgs, CreateBookingArgs, FunctionCall, ListBookingsArgs};
pub use request::{BookRequest, CancelRequest, ChatRequest, ListRequest, SlotsRequest};
