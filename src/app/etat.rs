//! src/app/etat.rs
//!
//! État de l’hôte simulé (sans vue).
//!
//! Rôle : jouer le clavier + l’ordinateur autour de la calculatrice.
//! - chaque transition de touche passe d’abord par `Calculatrice::handle`
//! - si l’hôte doit encore la traiter, on applique son effet au document
//! - la sortie émise par la calculatrice est REJOUÉE comme frappes (comme un
//!   firmware qui tape le résultat) : elle repasse par `handle`
//!
//! Contrats :
//! - Aucune évaluation ici (tout passe par la calculatrice).
//! - Journal borné (garde-fou mémoire).

use std::collections::VecDeque;

use crate::clavier::{Calculatrice, HoteMemoire, Modificateurs, Signal, Touche};
use crate::config::Config;

/// Garde-fou : nombre max de lignes gardées dans le journal.
const JOURNAL_MAX: usize = 64;

/// Effet d’une touche sur le document de l’hôte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffetHote {
    Inserer(char),
    Effacer,
    Rien,
}

/// Ce que l’ordinateur ferait de la touche (disposition US).
pub fn effet_hote(touche: Touche, mods: Modificateurs) -> EffetHote {
    use EffetHote::*;

    // Ctrl/Alt/GUI : raccourci, rien n’est tapé
    if !mods.difference(Modificateurs::SHIFT).is_empty() {
        return Rien;
    }
    let shift = mods.contains(Modificateurs::SHIFT);

    match touche {
        Touche::Chiffre(d) if d <= 9 => {
            let c = if shift {
                b")!@#$%^&*("[usize::from(d)] as char
            } else {
                (b'0' + d) as char
            };
            Inserer(c)
        }
        Touche::Egal => Inserer(if shift { '+' } else { '=' }),
        Touche::Moins => Inserer(if shift { '_' } else { '-' }),
        Touche::Slash => Inserer(if shift { '?' } else { '/' }),
        Touche::Point => Inserer(if shift { '>' } else { '.' }),
        Touche::Plus => Inserer('+'),
        Touche::Etoile => Inserer('*'),
        Touche::ParenG => Inserer('('),
        Touche::ParenD => Inserer(')'),
        Touche::Entree => Inserer('\n'),
        Touche::Espace => Inserer(' '),
        Touche::Autre(c) => Inserer(c),
        Touche::Retour => Effacer,
        _ => Rien,
    }
}

#[derive(Clone, Debug)]
pub struct AppClavier {
    pub calc: Calculatrice,
    pub hote: HoteMemoire,

    // --- ordinateur simulé ---
    pub document: String,

    // --- verrous de modificateurs (boutons) ---
    pub shift: bool,
    pub ctrl: bool,

    // --- retour utilisateur ---
    pub dernier_signal: Option<Signal>,
    pub journal: VecDeque<String>,

    pub config: Config,
}

impl Default for AppClavier {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppClavier {
    pub fn new(config: Config) -> Self {
        Self {
            calc: Calculatrice::new(&config),
            hote: HoteMemoire::default(),
            document: String::new(),
            shift: false,
            ctrl: false,
            dernier_signal: None,
            journal: VecDeque::new(),
            config,
        }
    }

    /// Modificateurs “verrouillés” par les boutons.
    pub fn modificateurs(&self) -> Modificateurs {
        let mut m = Modificateurs::empty();
        m.set(Modificateurs::SHIFT, self.shift);
        m.set(Modificateurs::CTRL, self.ctrl);
        m
    }

    /// Une transition de touche (appui ou relâchement).
    pub fn evenement(&mut self, touche: Touche, presse: bool, mods: Modificateurs) {
        let passe = self.calc.handle(touche, presse, mods, &mut self.hote);
        self.noter(format!(
            "{touche:?} {} {}",
            if presse { "↓" } else { "↑" },
            if passe { "→ hôte" } else { "consommée" }
        ));

        if passe && presse {
            self.appliquer(effet_hote(touche, mods));
        }

        self.collecter_signaux();
        self.rejouer_sortie();
    }

    /// Clic sur un bouton : appui + relâchement avec les verrous actuels.
    pub fn taper_touche(&mut self, touche: Touche) {
        let mods = self.modificateurs();
        self.evenement(touche, true, mods);
        self.evenement(touche, false, mods);
    }

    /// Efface le document (pas l’état de la calculatrice).
    pub fn effacer_document(&mut self) {
        self.document.clear();
        self.dernier_signal = None;
    }

    /// AC : tout remettre à zéro (calculatrice + document + journal).
    pub fn reset_total(&mut self) {
        self.calc = Calculatrice::new(&self.config);
        self.hote = HoteMemoire::default();
        self.effacer_document();
        self.journal.clear();
        self.shift = false;
        self.ctrl = false;
    }

    fn appliquer(&mut self, effet: EffetHote) {
        match effet {
            EffetHote::Inserer(c) => self.document.push(c),
            EffetHote::Effacer => {
                self.document.pop();
            }
            EffetHote::Rien => {}
        }
    }

    fn collecter_signaux(&mut self) {
        let signaux: Vec<Signal> = self.hote.signaux.drain(..).collect();
        for s in signaux {
            self.dernier_signal = Some(s);
            self.noter(format!("signal {s:?}"));
        }
    }

    /// La sortie est “tapée” par le firmware : chaque caractère refait le tour.
    fn rejouer_sortie(&mut self) {
        let sortie = std::mem::take(&mut self.hote.sortie);
        for c in sortie.chars() {
            let t = Touche::depuis_caractere(c);
            let aucun = Modificateurs::empty();
            if self.calc.handle(t, true, aucun, &mut self.hote) {
                self.appliquer(effet_hote(t, aucun));
            }
            self.calc.handle(t, false, aucun, &mut self.hote);
        }
        // Sortie du mode avant calcul : rien ne peut être ré-émis ici.
        debug_assert!(self.hote.sortie.is_empty());
    }

    fn noter(&mut self, ligne: String) {
        if self.journal.len() >= JOURNAL_MAX {
            self.journal.pop_front();
        }
        self.journal.push_back(ligne);
    }
}
