pub mod contact;

pub use contact::ContactMessage;
