pub mod time;
pub mod util;

pub use time::SystemClock;
pub use util::DefaultSlugGenerator;
