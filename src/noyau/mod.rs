//! Noyau de calcul (pur, sans état partagé)
//!
//! Organisation interne :
//! - jetons.rs  : jetons + lecteur (précision, pushback)
//! - eval.rs    : descente récursive, calcul f64
//! - format.rs  : lecture décimale scalée (sans flottant -> texte)
//! - erreur.rs  : erreurs du pipeline

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer;
pub use format::{formater, formater_texte};
