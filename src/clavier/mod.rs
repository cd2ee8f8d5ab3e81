//! Couche clavier : interception des frappes autour du noyau.
//!
//! - touches.rs      : identifiants de touches, modificateurs, réécriture Shift
//! - tampon.rs       : tampon d’expression à capacité fixe
//! - hote.rs         : contrats avec l’hôte (émission, signaux)
//! - calculatrice.rs : machine à états (point d’entrée `handle`)

pub mod calculatrice;
pub mod hote;
pub mod tampon;
pub mod touches;

pub use calculatrice::Calculatrice;
pub use hote::{Hote, HoteMemoire, Signal};
pub use touches::{Modificateurs, Touche};
