pub mod form_poster;

pub use form_poster::{FormPoster, HttpFormPoster};
