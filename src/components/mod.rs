pub mod connect_button;
pub mod toast;

pub use connect_button::ConnectButton;
pub use toast::use_toast;
