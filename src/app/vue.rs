// src/app/vue.rs
//
// Vue texte : une seule ligne sur stdout, "pi = 3.14...".

use pi_qpur::Lecture;

/// Étiquette de la constante calculée.
pub const ETIQUETTE: &str = "pi";

pub fn ligne_resultat(lecture: &Lecture) -> String {
    format!("{ETIQUETTE} = {lecture}")
}
