mod home;
pub use home::Home;

mod about;
pub use about::About;

mod contact;
pub use contact::Contact;
