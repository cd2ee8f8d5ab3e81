// src/clavier/touches.rs
//
// Identifiants de touches vus par la calculatrice + modificateurs.
// Disposition US : Shift+= donne '+', Shift+8 '*', Shift+9 '(', Shift+0 ')'.

bitflags::bitflags! {
    /// Modificateurs actifs au moment de l’événement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modificateurs: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const GUI   = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    /// Entrée en mode calculatrice.
    Calc,

    /// Rangée des chiffres (0..=9).
    Chiffre(u8),
    Egal,
    Moins,
    Slash,
    Point,

    // Touches “déjà shiftées” (pavé numérique, macros)
    Plus,
    Etoile,
    ParenG,
    ParenD,

    Echap,
    Retour,

    Gauche,
    Bas,
    Haut,
    Droite,

    Entree,
    Espace,

    /// Toute autre touche (lettre, ponctuation…) : jamais interceptée.
    Autre(char),
}

impl Touche {
    /// Réécriture sous Shift.
    ///
    /// - Some(t) : la touche à traiter (réécrite ou inchangée)
    /// - None    : symbole shifté hors grammaire (ex: Shift+1 = '!'), à laisser passer
    pub fn avec_shift(self) -> Option<Touche> {
        match self {
            Touche::Egal => Some(Touche::Plus),
            Touche::Chiffre(8) => Some(Touche::Etoile),
            Touche::Chiffre(9) => Some(Touche::ParenG),
            Touche::Chiffre(0) => Some(Touche::ParenD),
            Touche::Chiffre(1..=7) | Touche::Moins | Touche::Slash | Touche::Point => None,
            autre => Some(autre),
        }
    }

    /// Caractère enregistré dans l’expression (None si la touche n’en fait pas partie).
    pub fn caractere(self) -> Option<char> {
        match self {
            Touche::Chiffre(d) => char::from_digit(u32::from(d), 10),
            Touche::Moins => Some('-'),
            Touche::Slash => Some('/'),
            Touche::Point => Some('.'),
            Touche::Plus => Some('+'),
            Touche::Etoile => Some('*'),
            Touche::ParenG => Some('('),
            Touche::ParenD => Some(')'),
            _ => None,
        }
    }

    pub fn est_navigation(self) -> bool {
        matches!(
            self,
            Touche::Gauche | Touche::Bas | Touche::Haut | Touche::Droite
        )
    }

    /// Touche qui “tape” ce caractère sans modificateur (rejeu de la sortie, saisie CLI).
    pub fn depuis_caractere(c: char) -> Touche {
        match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '=' => Touche::Egal,
            '-' => Touche::Moins,
            '/' => Touche::Slash,
            '.' => Touche::Point,
            '+' => Touche::Plus,
            '*' => Touche::Etoile,
            '(' => Touche::ParenG,
            ')' => Touche::ParenD,
            '\n' => Touche::Entree,
            ' ' => Touche::Espace,
            autre => Touche::Autre(autre),
        }
    }
}
