//! Domain models for photography tasks, forecast data, and shooting windows.

pub mod macros;
pub mod period;
pub mod sun;
pub mod task;
pub mod weather;
pub mod window;

pub use period::Period;
pub use sun::SunWindow;
pub use task::{Condition, DayHalf, GeoPoint, LightPhase, SunPhase, Task, TaskId, TimeWindow};
pub use weather::{SkyConditions, WeatherSample};
pub use window::{CandidateWindow, ShootingWindow, WindowId};
