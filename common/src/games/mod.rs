mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::GameBroadcaster;
pub use session_rng::SessionRng;
