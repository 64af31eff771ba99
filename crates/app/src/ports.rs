//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod api;
pub mod clock;
pub mod process;
pub mod registry;
pub mod view;

pub use api::DashboardApi;
pub use clock::{Clock, SystemClock};
pub use process::{CommandExecutor, ProcessOutput};
pub use registry::DeviceRegistry;
pub use view::{DashboardView, Notifier, Region};
