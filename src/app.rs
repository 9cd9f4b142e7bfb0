// src/app.rs
//
// π Q-pur — module App (racine)
// -----------------------------
// - etat.rs : réglages (clap)
// - vue.rs  : ligne de sortie

pub mod etat;
pub mod vue;

pub use etat::Options;
