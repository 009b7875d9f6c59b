pub mod observable;

pub use observable::{ChangeNotifier, Subscription};
