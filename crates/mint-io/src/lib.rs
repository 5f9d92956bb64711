pub mod surface;
pub mod ws;

pub use surface::{PageCommand, WsSurface};
pub use ws::{parse_event, start_ws_bridge};
