mod about;
pub use about::About;

mod explorer;
pub use explorer::Explorer;
