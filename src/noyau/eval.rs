//! Noyau — évaluation (descente récursive)
//!
//! Grammaire (de la plus faible à la plus forte priorité, associativité à gauche) :
//!
//! ```text
//! expression := add Fin
//! add        := mul ( ('+' | '-') mul )*
//! mul        := unit ( ('*' | '/') unit )*
//! unit       := Num | '-' unit | '(' add ')'
//! ```
//!
//! Calcul en f64 pendant l’analyse (pas d’AST). La division par zéro n’est pas
//! vérifiée ici : ±inf / NaN suivent IEEE et seront refusés au formatage.

use tracing::trace;

use super::erreur::ErreurCalcul;
use super::jetons::{Lecteur, Tok};

/// Garde-fou : profondeur de récursion max (parenthèses + moins unaires).
const PROFONDEUR_MAX: usize = 256;

/// Résultat d’une évaluation réussie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    /// Max des chiffres après la virgule vus dans les littéraux.
    pub precision: usize,
}

/// API publique : évalue une expression complète.
pub fn evaluer(texte: &str) -> Result<Evaluation, ErreurCalcul> {
    let mut a = Analyseur {
        lecteur: Lecteur::new(texte),
        profondeur: 0,
    };
    let valeur = a.expression()?;
    let precision = a.lecteur.precision();

    trace!(texte, valeur, precision, "évaluation");
    Ok(Evaluation { valeur, precision })
}

/// Ancienne convention “sentinelle” : toute erreur devient NaN.
pub fn valeur_ou_nan(resultat: &Result<Evaluation, ErreurCalcul>) -> f64 {
    match resultat {
        Ok(e) => e.valeur,
        Err(_) => f64::NAN,
    }
}

struct Analyseur<'a> {
    lecteur: Lecteur<'a>,
    profondeur: usize,
}

impl Analyseur<'_> {
    fn expression(&mut self) -> Result<f64, ErreurCalcul> {
        let v = self.add()?;
        match self.lecteur.get_token()? {
            Tok::Fin => Ok(v),
            _ => Err(ErreurCalcul::JetonsEnTrop),
        }
    }

    fn add(&mut self) -> Result<f64, ErreurCalcul> {
        let mut gauche = self.mul()?;

        loop {
            match self.lecteur.get_token()? {
                Tok::Plus => gauche += self.mul()?,
                Tok::Minus => gauche -= self.mul()?,
                Tok::Num(_) => return Err(ErreurCalcul::ValeurInattendue),
                autre => {
                    self.lecteur.pushback(autre);
                    return Ok(gauche);
                }
            }
        }
    }

    fn mul(&mut self) -> Result<f64, ErreurCalcul> {
        let mut gauche = self.unit()?;

        loop {
            match self.lecteur.get_token()? {
                Tok::Star => gauche *= self.unit()?,
                Tok::Slash => gauche /= self.unit()?,
                Tok::Num(_) => return Err(ErreurCalcul::ValeurInattendue),
                autre => {
                    self.lecteur.pushback(autre);
                    return Ok(gauche);
                }
            }
        }
    }

    fn unit(&mut self) -> Result<f64, ErreurCalcul> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurCalcul::TropImbrique);
        }
        self.profondeur += 1;

        let v = match self.lecteur.get_token()? {
            Tok::Num(v) => v,
            Tok::Minus => -self.unit()?,
            Tok::LPar => {
                let v = self.add()?;
                match self.lecteur.get_token()? {
                    Tok::RPar => v,
                    _ => return Err(ErreurCalcul::ParentheseNonFermee),
                }
            }
            _ => return Err(ErreurCalcul::OperandeManquant),
        };

        self.profondeur -= 1;
        Ok(v)
    }
}
