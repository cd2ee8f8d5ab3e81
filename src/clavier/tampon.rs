// src/clavier/tampon.rs
//
// Tampon d’expression à capacité fixe (tableau + longueur, aucune allocation).
// Invariant : octets[..len] = expression, octets[len..] = 0.

use thiserror::Error;

/// Taille physique du tableau.
pub const CAPACITE_MAX: usize = 256;

/// Capacité utile par défaut.
pub const CAPACITE_DEFAUT: usize = 128;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("tampon plein ({capacite} caractères)")]
pub struct TamponPlein {
    pub capacite: usize,
}

#[derive(Clone, Debug)]
pub struct TamponExpression {
    octets: [u8; CAPACITE_MAX],
    len: usize,
    capacite: usize,
}

impl Default for TamponExpression {
    fn default() -> Self {
        Self::new(CAPACITE_DEFAUT)
    }
}

impl TamponExpression {
    /// Garde-fou : capacité bornée à 1..=CAPACITE_MAX.
    pub fn new(capacite: usize) -> Self {
        Self {
            octets: [0; CAPACITE_MAX],
            len: 0,
            capacite: capacite.clamp(1, CAPACITE_MAX),
        }
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn est_plein(&self) -> bool {
        self.len >= self.capacite
    }

    /// Ajoute un caractère ASCII de la grammaire.
    pub fn pousser(&mut self, c: char) -> Result<(), TamponPlein> {
        debug_assert!(c.is_ascii(), "caractère non ASCII: {c:?}");
        if self.est_plein() {
            return Err(TamponPlein {
                capacite: self.capacite,
            });
        }
        self.octets[self.len] = c as u8;
        self.len += 1;
        Ok(())
    }

    /// Retire le dernier caractère (Retour arrière).
    pub fn retirer(&mut self) -> Option<char> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let c = self.octets[self.len] as char;
        self.octets[self.len] = 0;
        Some(c)
    }

    pub fn vider(&mut self) {
        self.octets = [0; CAPACITE_MAX];
        self.len = 0;
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.octets[..self.len]).unwrap_or("")
    }
}
