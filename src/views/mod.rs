pub mod export;

mod studio;
pub use studio::Studio;
