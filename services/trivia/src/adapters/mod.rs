pub mod bundled;
pub mod console;
pub mod terminal;

pub use bundled::bundled_bank;
pub use console::ConsoleNotifier;
pub use terminal::ChannelLineSource;
