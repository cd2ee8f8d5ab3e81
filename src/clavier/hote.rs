//! Contrats avec l’hôte (firmware / OS simulé).
//!
//! Deux primitives “fire-and-forget” : émettre un caractère, jouer un signal.
//! Aucune valeur de retour n’est consommée.

/// Signaux sonores utilisés par la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Entrée en mode calculatrice.
    Activation,
    /// Débordement, navigation bloquée, échec du calcul.
    Erreur,
}

pub trait Hote {
    /// Synthétise un caractère en sortie (frappe simulée).
    fn emettre(&mut self, c: char);

    fn signal(&mut self, signal: Signal);
}

/// Hôte en mémoire : accumule la sortie et les signaux.
#[derive(Clone, Debug, Default)]
pub struct HoteMemoire {
    pub sortie: String,
    pub signaux: Vec<Signal>,
}

impl HoteMemoire {
    pub fn a_signale(&self, signal: Signal) -> bool {
        self.signaux.contains(&signal)
    }
}

impl Hote for HoteMemoire {
    fn emettre(&mut self, c: char) {
        self.sortie.push(c);
    }

    fn signal(&mut self, signal: Signal) {
        self.signaux.push(signal);
    }
}
