pub mod attendance;
pub mod burst;
pub mod punctuality;
pub mod shift_instance;
pub mod swipe;
pub mod time_window;

pub use attendance::AttendanceRecord;
pub use burst::Burst;
pub use punctuality::Punctuality;
pub use shift_instance::ShiftInstance;
pub use swipe::{EmployeeRef, SwipeEvent};
pub use time_window::TimeWindow;
