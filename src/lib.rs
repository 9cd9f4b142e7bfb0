//! π exact par rationnels Q-pur.
//!
//! Le noyau ne touche jamais aux flottants : la série est sommée en rationnels
//! exacts, puis lue en décimal tronqué.

pub mod noyau;

pub use noyau::{pi_decimal, ErreurRat, Lecture, RatNum};
